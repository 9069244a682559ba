//! PubMed industry scanner - entry point.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_industry::{AffiliationClassifier, Config, PubMedClient, export};

#[derive(Parser, Debug)]
#[command(name = "pubmed-industry")]
#[command(about = "Fetch and filter PubMed papers with non-academic authors")]
#[command(version)]
struct Cli {
    /// PubMed search query
    query: String,

    /// Maximum number of papers to fetch
    #[arg(long = "max_results", default_value_t = pubmed_industry::config::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Output CSV file name
    #[arg(long, default_value = pubmed_industry::config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// NCBI API key (optional, raises rate limits)
    #[arg(long, env = "PUBMED_API_KEY")]
    api_key: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn", env = "RUST_LOG")]
    log_level: String,
}

fn init_tracing(log_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_tracing(&cli.log_level);

    let config = Config::new(cli.api_key);
    let client = PubMedClient::new(config)?;

    println!("Fetching PubMed papers for query: {}", cli.query);
    let pmids = client.search_ids(&cli.query, cli.max_results).await?;

    if pmids.is_empty() {
        println!("No results found.");
        return Ok(());
    }

    println!("Found {} papers. Fetching details...", pmids.len());
    let records = client.fetch_records(&pmids).await?;

    let papers = AffiliationClassifier::default().extract_papers(&records);

    if papers.is_empty() {
        println!("No papers with non-academic authors found.");
        return Ok(());
    }

    export::write_csv(&papers, &cli.output)?;
    println!("Results saved to {}", cli.output.display());

    Ok(())
}
