//! Bibliographic record models built from efetch XML.

/// Sentinel for genuinely missing data (year, author names).
pub const UNKNOWN: &str = "Unknown";

/// One author entry as it appears in a PubMed article.
///
/// Exists only while a single record is being extracted; author identity is
/// not tracked beyond the display name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    /// ForeName, if present.
    pub fore_name: Option<String>,

    /// LastName, if present.
    pub last_name: Option<String>,

    /// First Affiliation text, if present.
    pub affiliation: Option<String>,
}

impl Author {
    /// Display name: `"{fore} {last}"` only when both parts are present,
    /// otherwise the shared "Unknown" sentinel. Two authors both missing a
    /// name collapse to the same string; that loss is intentional.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.fore_name, &self.last_name) {
            (Some(fore), Some(last)) => format!("{fore} {last}"),
            _ => UNKNOWN.to_string(),
        }
    }

    /// Affiliation text for matching, absent treated as empty.
    #[must_use]
    pub fn affiliation_text(&self) -> &str {
        self.affiliation.as_deref().unwrap_or("")
    }
}

/// A fetched bibliographic record. PMID and title are guaranteed present;
/// records without them are rejected during parsing.
#[derive(Debug, Clone, Default)]
pub struct PubmedRecord {
    /// PubMed identifier.
    pub pmid: String,

    /// Article title.
    pub title: String,

    /// 4-digit publication year, or "Unknown" when PubDate carries none.
    pub year: String,

    /// Authors in document order.
    pub authors: Vec<Author>,
}

/// A record retained for output because at least one author is classified
/// non-academic. Immutable once built; becomes one CSV row. Field order
/// mirrors the output columns.
#[derive(Debug, Clone)]
pub struct IndustryPaper {
    /// PubMed identifier ("PubmedID" column).
    pub pmid: String,

    /// Article title ("Title" column).
    pub title: String,

    /// Publication year or "Unknown" ("Publication Date" column).
    pub year: String,

    /// Non-academic author display names, first-appearance order, joined
    /// with "; ". Repeated names are not deduplicated.
    pub non_academic_authors: String,

    /// Distinct company affiliation strings, joined with "; ".
    pub company_affiliations: String,

    /// Best-guess corresponding email, or "N/A".
    pub corresponding_email: String,
}
