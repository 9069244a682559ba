//! PubMed E-utilities client.
//!
//! Two endpoints, called once each per run:
//!   esearch: query -> PMID list (JSON)
//!   efetch:  PMIDs -> article records (XML, one batch request)

use reqwest::Client;
use tracing::{debug, instrument};

use crate::config::{Config, api};
use crate::error::{ClientError, ClientResult};
use crate::models::{EsearchResponse, PubmedRecord};
use crate::parser;

/// PubMed E-utilities API client.
#[derive(Clone)]
pub struct PubMedClient {
    /// HTTP client.
    client: Client,

    /// API key (optional).
    api_key: Option<String>,

    /// esearch endpoint URL.
    esearch_url: String,

    /// efetch endpoint URL.
    efetch_url: String,
}

impl PubMedClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .gzip(true)
            .build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            esearch_url: config.esearch_url(),
            efetch_url: config.efetch_url(),
        })
    }

    /// Check if an API key is configured.
    #[must_use]
    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Parameters common to both endpoints.
    fn base_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("db", api::DB.to_string())];
        if let Some(ref key) = self.api_key {
            params.push(("api_key", key.clone()));
        }
        params
    }

    /// Search PubMed and return the ordered list of matching PMIDs.
    ///
    /// An empty list is a normal outcome (zero matches), not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on HTTP failure, non-2xx status, or a
    /// malformed JSON body.
    #[instrument(skip(self))]
    pub async fn search_ids(&self, query: &str, max_results: usize) -> ClientResult<Vec<String>> {
        let mut params = self.base_params();
        params.push(("term", query.to_string()));
        params.push(("retmode", "json".to_string()));
        params.push(("retmax", max_results.to_string()));

        let response = self.client.get(&self.esearch_url).query(&params).send().await?;
        let response = handle_response(response).await?;

        let body = response.text().await?;
        let parsed: EsearchResponse = serde_json::from_str(&body)?;
        let ids = parsed.esearchresult.idlist;

        debug!(count = ids.len(), "esearch returned PMIDs");
        Ok(ids)
    }

    /// Fetch full records for the given PMIDs in a single batch request.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError`] on HTTP failure or when a fetched record
    /// fails data-integrity checks (missing PMID or title).
    #[instrument(skip(self))]
    pub async fn fetch_records(&self, pmids: &[String]) -> ClientResult<Vec<PubmedRecord>> {
        if pmids.is_empty() {
            return Ok(Vec::new());
        }

        let mut params = self.base_params();
        params.push(("id", pmids.join(",")));
        params.push(("retmode", "xml".to_string()));

        let response = self.client.get(&self.efetch_url).query(&params).send().await?;
        let response = handle_response(response).await?;

        let xml = response.text().await?;
        let records = parser::parse_records(&xml)?;

        debug!(count = records.len(), "efetch returned records");
        Ok(records)
    }
}

/// Map non-2xx statuses to typed errors.
async fn handle_response(response: reqwest::Response) -> ClientResult<reqwest::Response> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    match status.as_u16() {
        400 => Err(ClientError::bad_request(text)),
        500..=599 => Err(ClientError::server(status.as_u16(), text)),
        _ => Err(ClientError::UnexpectedStatus { status: status.as_u16(), message: text }),
    }
}

impl std::fmt::Debug for PubMedClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PubMedClient").field("has_api_key", &self.has_api_key()).finish()
    }
}
