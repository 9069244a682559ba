//! Data models for the search and extraction pipeline.

mod record;
mod search;

pub use record::{Author, IndustryPaper, PubmedRecord, UNKNOWN};
pub use search::{EsearchResponse, EsearchResult};
