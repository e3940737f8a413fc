use clap::{Parser, Subcommand};
use serde::Serialize;
use std::io::Read;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fuzzy_rank::{
    catalog, FuzzyEngine, FuzzyError, ScorePrecision, ScoreWeights, SearchOptions, SearchQuery,
};

#[derive(Parser)]
#[command(name = "fuzzy-rank")]
#[command(about = "Rank candidate strings by fuzzy similarity", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank candidates against a query
    Search {
        /// Search query (omit with --stdin)
        query: Option<String>,

        /// Candidate strings
        candidates: Vec<String>,

        /// Read a {"searched_string", "searched_values", "scorer"} JSON request from stdin
        #[arg(long)]
        stdin: bool,

        /// Scorer name (default: WeightedRatio)
        #[arg(short, long)]
        scorer: Option<String>,

        /// Maximum results
        #[arg(short, long)]
        limit: Option<usize>,

        /// Report full-precision scores
        #[arg(long)]
        float: bool,

        /// Use classic WRatio weights
        #[arg(long)]
        tuned: bool,

        /// Strip punctuation and normalize before scoring
        #[arg(long)]
        process: bool,

        /// Drop results scoring below this value
        #[arg(long)]
        cutoff: Option<f64>,
    },

    /// Print the service description as JSON
    Info,

    /// List valid scorer names
    Scorers,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    valid_scorers: Option<Vec<String>>,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr; stdout carries JSON only
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fuzzy_rank=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Search {
            query,
            candidates,
            stdin,
            scorer,
            limit,
            float,
            tuned,
            process,
            cutoff,
        } => {
            let mut request = if stdin {
                let mut body = String::new();
                std::io::stdin().read_to_string(&mut body)?;
                match serde_json::from_str::<SearchQuery>(&body) {
                    Ok(request) => request,
                    Err(e) => exit_with(FuzzyError::from(e)),
                }
            } else {
                SearchQuery::new(query.unwrap_or_default(), candidates)
            };
            if scorer.is_some() {
                request.scorer = scorer;
            }

            let mut options = SearchOptions::from_env();
            if let Some(limit) = limit {
                options.rank.limit = limit;
            }
            if float {
                options.rank.precision = ScorePrecision::Float;
            }
            if tuned {
                options.rank.weights = ScoreWeights::tuned();
            }
            if process {
                options.rank.process = true;
            }
            if cutoff.is_some() {
                options.rank.score_cutoff = cutoff;
            }

            let engine = FuzzyEngine::new(options);
            match engine.search(&request) {
                Ok(response) => println!("{}", serde_json::to_string_pretty(&response)?),
                Err(e) => exit_with(e),
            }
        }

        Commands::Info => {
            println!("{}", serde_json::to_string_pretty(&catalog::help())?);
        }

        Commands::Scorers => {
            for name in catalog::scorer_names() {
                println!("{}", name);
            }
        }
    }

    Ok(())
}

/// Report a request error as JSON on stderr and exit with status 2
fn exit_with(err: FuzzyError) -> ! {
    tracing::error!("❌ {}", err);

    let body = ErrorResponse {
        error: err.to_string(),
        valid_scorers: err.valid_scorers().map(|v| v.to_vec()),
    };
    match serde_json::to_string(&body) {
        Ok(json) => eprintln!("{}", json),
        Err(_) => eprintln!("{}", err),
    }

    std::process::exit(if err.is_client_error() { 2 } else { 1 })
}
