//! PubMed industry-affiliation scanner.
//!
//! Searches PubMed for a free-text query, fetches the matching article
//! records, keeps the papers where at least one author is affiliated with a
//! commercial organization, and writes them to a CSV report.
//!
//! The pipeline is strictly linear: identifier search, then one batch
//! record fetch, then classification, then the CSV write. A failure at any
//! stage is fatal to the run.
//!
//! # Example
//!
//! ```no_run
//! use pubmed_industry::{AffiliationClassifier, Config, PubMedClient};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PubMedClient::new(Config::from_env())?;
//!     let pmids = client.search_ids("cancer immunotherapy", 10).await?;
//!     let records = client.fetch_records(&pmids).await?;
//!     let papers = AffiliationClassifier::default().extract_papers(&records);
//!     pubmed_industry::export::write_csv(&papers, "out.csv".as_ref())?;
//!     Ok(())
//! }
//! ```

pub mod classify;
pub mod client;
pub mod config;
pub mod error;
pub mod export;
pub mod models;
pub mod parser;

pub use classify::AffiliationClassifier;
pub use client::PubMedClient;
pub use config::Config;
pub use error::{ClientError, ExportError, RecordError};
