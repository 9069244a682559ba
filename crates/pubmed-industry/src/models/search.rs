//! Models for the esearch JSON response.

use serde::Deserialize;

/// Top-level esearch response envelope.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsearchResponse {
    /// Search result payload.
    #[serde(default)]
    pub esearchresult: EsearchResult,
}

/// The `esearchresult` object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EsearchResult {
    /// Matching PMIDs, ordered by relevance.
    #[serde(default)]
    pub idlist: Vec<String>,
}
