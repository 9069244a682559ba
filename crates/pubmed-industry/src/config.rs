//! Configuration for the PubMed industry scanner.

use std::time::Duration;

/// API configuration constants.
pub mod api {
    use std::time::Duration;

    /// Base URL for the NCBI E-utilities API.
    pub const BASE_URL: &str = "https://eutils.ncbi.nlm.nih.gov/entrez/eutils";

    /// esearch endpoint (query -> PMID list).
    pub const ESEARCH_PATH: &str = "/esearch.fcgi";

    /// efetch endpoint (PMIDs -> article XML).
    pub const EFETCH_PATH: &str = "/efetch.fcgi";

    /// E-utilities database name.
    pub const DB: &str = "pubmed";

    /// Request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Classification constants.
pub mod keywords {
    /// Affiliation substrings marking an author as non-academic.
    ///
    /// Matching is lowercase substring containment, deliberately without
    /// word boundaries: "Incremental Health Institute" matches "inc". This
    /// imprecision is part of the tool's contract, not an oversight.
    pub const COMPANY: &[&str] = &[
        "pharma",
        "biotech",
        "laboratories",
        "inc",
        "ltd",
        "corp",
        "gmbh",
        "s.a.",
        "co.",
        "llc",
    ];

    /// Email address pattern applied to affiliation text.
    pub const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
}

/// Default maximum number of search results to fetch.
pub const DEFAULT_MAX_RESULTS: usize = 10;

/// Default output path for the CSV report.
pub const DEFAULT_OUTPUT: &str = "pubmed_results.csv";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// NCBI API key (optional, raises rate limits server-side).
    pub api_key: Option<String>,

    /// Base URL for the E-utilities API (for testing with mock servers).
    pub base_url: String,

    /// Request timeout.
    pub request_timeout: Duration,

    /// Connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a new configuration with an optional API key.
    #[must_use]
    pub fn new(api_key: Option<String>) -> Self {
        Self {
            api_key,
            base_url: api::BASE_URL.to_string(),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointed at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            api_key: None,
            base_url: base_url.to_string(),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
        }
    }

    /// Create configuration from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        let api_key = std::env::var("PUBMED_API_KEY").ok();
        Self::new(api_key)
    }

    /// Check if an API key is configured.
    #[must_use]
    pub const fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    /// Full esearch URL.
    #[must_use]
    pub fn esearch_url(&self) -> String {
        format!("{}{}", self.base_url, api::ESEARCH_PATH)
    }

    /// Full efetch URL.
    #[must_use]
    pub fn efetch_url(&self) -> String {
        format!("{}{}", self.base_url, api::EFETCH_PATH)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.api_key.is_none());
        assert!(!config.has_api_key());
        assert_eq!(config.esearch_url(), format!("{}{}", api::BASE_URL, api::ESEARCH_PATH));
    }

    #[test]
    fn test_config_with_api_key() {
        let config = Config::new(Some("test-key".to_string()));
        assert!(config.has_api_key());
        assert_eq!(config.api_key, Some("test-key".to_string()));
    }

    #[test]
    fn test_config_for_testing_rewrites_base_url() {
        let config = Config::for_testing("http://127.0.0.1:9999");
        assert_eq!(config.esearch_url(), "http://127.0.0.1:9999/esearch.fcgi");
        assert_eq!(config.efetch_url(), "http://127.0.0.1:9999/efetch.fcgi");
    }

    #[test]
    fn test_keywords() {
        assert!(keywords::COMPANY.contains(&"pharma"));
        assert!(keywords::COMPANY.contains(&"llc"));
        assert_eq!(keywords::COMPANY.len(), 10);
    }
}
