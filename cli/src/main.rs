use anyhow::Result;
use clap::{Parser, Subcommand};
use search_cli::render::OutputFormat;
use search_cli::{load_config, resolve_max_results, run_protocol, run_query};
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser)]
#[command(name = "search")]
#[command(about = "Rank short text documents against a query with TF-IDF", long_about = None)]
struct Cli {
    /// JSON config file with `max_results` and `stop_words`
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read stop words, a document count, the documents and a query from stdin (default)
    Run {
        /// Maximum number of results (falls back to SEARCH_MAX_RESULTS, then the config)
        #[arg(long)]
        k: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Search documents loaded from JSON/JSONL files
    Query {
        /// Input path (file or directory)
        #[arg(long)]
        input: PathBuf,
        /// Query text; prefix a word with '-' to exclude documents containing it
        #[arg(long)]
        query: String,
        /// Space separated stop words, added to those in the config
        #[arg(long, default_value = "")]
        stop_words: String,
        /// Maximum number of results (falls back to SEARCH_MAX_RESULTS, then the config)
        #[arg(long)]
        k: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> Result<()> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref())?;

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    match cli.command.unwrap_or(Commands::Run { k: None, format: OutputFormat::Text }) {
        Commands::Run { k, format } => {
            let max_results = resolve_max_results(k, &config)?;
            run_protocol(io::stdin().lock(), &mut out, config.with_max_results(max_results), format)?
        }
        Commands::Query { input, query, stop_words, k, format } => {
            let max_results = resolve_max_results(k, &config)?;
            run_query(&input, &query, &stop_words, config.with_max_results(max_results), format, &mut out)?
        }
    }
    out.flush()?;
    Ok(())
}
