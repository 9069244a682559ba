//! Affiliation classification and paper extraction.
//!
//! This is the heart of the tool: a single pass over each record's authors
//! that decides who is non-academic, collects their company affiliations,
//! and captures a best-effort corresponding email.

use regex::Regex;
use tracing::debug;

use crate::config::keywords;
use crate::models::{IndustryPaper, PubmedRecord};

/// Separator for author and affiliation lists in the output row.
const LIST_SEPARATOR: &str = "; ";

/// Sentinel for a record with no extractable email.
const NO_EMAIL: &str = "N/A";

/// Classifies authors by affiliation text.
///
/// The keyword set and email pattern are injected at construction so tests
/// can substitute alternates; [`AffiliationClassifier::default`] uses the
/// fixed production set from [`crate::config::keywords`].
#[derive(Debug, Clone)]
pub struct AffiliationClassifier {
    keywords: Vec<String>,
    email_re: Regex,
}

impl AffiliationClassifier {
    /// Build a classifier with a custom keyword set and email pattern.
    ///
    /// # Panics
    ///
    /// Panics if `email_pattern` is not a valid regex. The production
    /// pattern is a constant; a bad pattern is a programming error.
    #[must_use]
    pub fn new(company_keywords: &[&str], email_pattern: &str) -> Self {
        Self {
            keywords: company_keywords.iter().map(|k| k.to_lowercase()).collect(),
            email_re: Regex::new(email_pattern).expect("valid email pattern"),
        }
    }

    /// Is this affiliation text a commercial organization?
    ///
    /// Lowercase substring containment against the keyword set. No
    /// tokenization and no word boundaries: "Incremental Health Institute"
    /// matches "inc". That precision trade-off is part of the contract.
    #[must_use]
    pub fn is_non_academic(&self, affiliation: &str) -> bool {
        let lowered = affiliation.to_lowercase();
        self.keywords.iter().any(|k| lowered.contains(k.as_str()))
    }

    /// First email address in the text, if any.
    #[must_use]
    pub fn find_email<'a>(&self, text: &'a str) -> Option<&'a str> {
        self.email_re.find(text).map(|m| m.as_str())
    }

    /// Run the per-record pipeline.
    ///
    /// Walks authors in document order. For each non-academic author the
    /// display name is appended (no dedup on names) and the original-case
    /// affiliation is collected (deduplicated, first-seen order). Every
    /// author's affiliation, academic or not, is scanned for an email; the
    /// first match wins and is never overwritten by later authors.
    ///
    /// Returns `None` when no author classifies as non-academic.
    #[must_use]
    pub fn extract_paper(&self, record: &PubmedRecord) -> Option<IndustryPaper> {
        let mut non_academic_authors: Vec<String> = Vec::new();
        let mut company_affiliations: Vec<String> = Vec::new();
        let mut corresponding_email: Option<String> = None;

        for author in &record.authors {
            let affiliation = author.affiliation_text();

            if self.is_non_academic(affiliation) {
                non_academic_authors.push(author.display_name());
                let original = affiliation.to_string();
                if !company_affiliations.contains(&original) {
                    company_affiliations.push(original);
                }
            }

            if corresponding_email.is_none() {
                corresponding_email = self.find_email(affiliation).map(str::to_string);
            }
        }

        if non_academic_authors.is_empty() {
            debug!(pmid = %record.pmid, "no non-academic authors, dropping record");
            return None;
        }

        Some(IndustryPaper {
            pmid: record.pmid.clone(),
            title: record.title.clone(),
            year: record.year.clone(),
            non_academic_authors: non_academic_authors.join(LIST_SEPARATOR),
            company_affiliations: company_affiliations.join(LIST_SEPARATOR),
            corresponding_email: corresponding_email.unwrap_or_else(|| NO_EMAIL.to_string()),
        })
    }

    /// Filter a batch of records down to qualifying papers, preserving order.
    #[must_use]
    pub fn extract_papers(&self, records: &[PubmedRecord]) -> Vec<IndustryPaper> {
        records.iter().filter_map(|r| self.extract_paper(r)).collect()
    }
}

impl Default for AffiliationClassifier {
    fn default() -> Self {
        Self::new(keywords::COMPANY, keywords::EMAIL_PATTERN)
    }
}
