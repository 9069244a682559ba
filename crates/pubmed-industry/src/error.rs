//! Error types for the PubMed industry scanner.
//!
//! Uses `thiserror` for structured error handling with automatic `From`
//! implementations. Every variant is fatal to the run: the pipeline has no
//! retry or partial-success path.

/// Errors from the HTTP client layer.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// HTTP transport error (connection, DNS, TLS, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Invalid request parameters (400 response)
    #[error("Bad request: {message}")]
    BadRequest {
        /// Error message from API
        message: String,
    },

    /// Server error (5xx response)
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code
        status: u16,
        /// Error message
        message: String,
    },

    /// Unexpected HTTP status
    #[error("Unexpected status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body or message
        message: String,
    },

    /// JSON parsing error on the esearch response
    #[error("Failed to parse search response: {0}")]
    Parse(#[from] serde_json::Error),

    /// A fetched record failed data-integrity checks
    #[error(transparent)]
    Record(#[from] RecordError),
}

impl ClientError {
    /// Create a bad request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest { message: message.into() }
    }

    /// Create a server error.
    #[must_use]
    pub fn server(status: u16, message: impl Into<String>) -> Self {
        Self::Server { status, message: message.into() }
    }
}

/// Data-integrity errors on fetched bibliographic records.
///
/// A record missing its identifier or title is malformed input; coercing it
/// to empty strings would corrupt CSV rows downstream without signal, so
/// these abort the batch instead.
#[derive(thiserror::Error, Debug)]
pub enum RecordError {
    /// The efetch XML body could not be parsed at all
    #[error("Malformed article XML: {0}")]
    Xml(#[from] quick_xml::Error),

    /// A PubmedArticle element carried no PMID
    #[error("Record missing PMID (title: {title:?})")]
    MissingPmid {
        /// Title of the offending record, if it had one
        title: Option<String>,
    },

    /// A PubmedArticle element carried no ArticleTitle
    #[error("Record {pmid} missing title")]
    MissingTitle {
        /// PMID of the offending record
        pmid: String,
    },
}

/// Errors writing the output CSV.
#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    /// Filesystem-level failure creating or writing the file
    #[error("I/O error writing output: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Result type alias for record parsing.
pub type RecordResult<T> = Result<T, RecordError>;

/// Result type alias for CSV export.
pub type ExportResult<T> = Result<T, ExportError>;
