//! Parser for efetch article XML.
//!
//! Walks the `<PubmedArticleSet><PubmedArticle>` structure with a streaming
//! event reader and builds one [`PubmedRecord`] per article. The whole
//! response is already in memory; the event reader is used for its
//! tolerance of PubMed's deeply nested markup, not for streaming.

use quick_xml::Reader;
use quick_xml::events::Event;
use tracing::debug;

use crate::error::{RecordError, RecordResult};
use crate::models::{Author, PubmedRecord, UNKNOWN};

/// Partial record state while inside one `<PubmedArticle>`.
#[derive(Default)]
struct ArticleState {
    pmid: Option<String>,
    title: Option<String>,
    year: Option<String>,
    authors: Vec<Author>,
    current_author: Option<Author>,
}

impl ArticleState {
    /// Finalize into a record, enforcing the required-field invariant.
    fn finish(self) -> RecordResult<PubmedRecord> {
        let pmid =
            self.pmid.ok_or_else(|| RecordError::MissingPmid { title: self.title.clone() })?;
        let title = self.title.ok_or_else(|| RecordError::MissingTitle { pmid: pmid.clone() })?;

        Ok(PubmedRecord {
            pmid,
            title: title.trim().to_string(),
            year: self.year.unwrap_or_else(|| UNKNOWN.to_string()),
            authors: self.authors,
        })
    }
}

/// Parse an efetch XML body into bibliographic records.
///
/// A record without a PMID or title is malformed input and aborts the batch
/// with a [`RecordError`] naming the offending record, rather than being
/// silently coerced into empty fields.
pub fn parse_records(xml: &str) -> RecordResult<Vec<PubmedRecord>> {
    let mut records = Vec::new();
    // Text is kept untrimmed: titles with nested markup arrive as several
    // text events and the spaces around the inline tags must survive.
    let mut reader = Reader::from_str(xml);

    let mut current: Option<ArticleState> = None;
    let mut in_pmid = false;
    let mut in_title = false;
    let mut in_pub_date = false;
    let mut in_year = false;
    let mut in_last_name = false;
    let mut in_fore_name = false;
    let mut in_affiliation = false;
    let mut buf = Vec::new();

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => match e.name().as_ref() {
                b"PubmedArticle" => current = Some(ArticleState::default()),
                b"PMID" => in_pmid = true,
                b"ArticleTitle" => in_title = true,
                b"PubDate" => in_pub_date = true,
                b"Year" => in_year = true,
                b"Author" => {
                    if let Some(ref mut state) = current {
                        state.current_author = Some(Author::default());
                    }
                }
                b"LastName" => in_last_name = true,
                b"ForeName" => in_fore_name = true,
                b"Affiliation" => in_affiliation = true,
                _ => {}
            },
            Event::Text(ref e) => {
                let text = e.unescape().map_err(quick_xml::Error::from)?.into_owned();
                if let Some(ref mut state) = current {
                    // First occurrence wins for pmid/title/year: later PMID
                    // elements (e.g. CommentsCorrections) must not clobber
                    // the citation's own.
                    if in_pmid && state.pmid.is_none() {
                        state.pmid = Some(text.trim().to_string());
                    }
                    if in_title {
                        // Nested markup (<i>, <sub>) splits the title into
                        // several text events; concatenate them.
                        match state.title {
                            Some(ref mut t) => t.push_str(&text),
                            None => state.title = Some(text.clone()),
                        }
                    }
                    if in_pub_date && in_year && state.year.is_none() {
                        state.year = Some(text.trim().to_string());
                    }
                    if let Some(ref mut author) = state.current_author {
                        if in_last_name {
                            author.last_name = Some(text.clone());
                        }
                        if in_fore_name {
                            author.fore_name = Some(text.clone());
                        }
                        // Only the author's first affiliation is read.
                        if in_affiliation && author.affiliation.is_none() {
                            author.affiliation = Some(text);
                        }
                    }
                }
            }
            Event::End(ref e) => match e.name().as_ref() {
                b"PMID" => in_pmid = false,
                b"ArticleTitle" => in_title = false,
                b"PubDate" => in_pub_date = false,
                b"Year" => in_year = false,
                b"LastName" => in_last_name = false,
                b"ForeName" => in_fore_name = false,
                b"Affiliation" => in_affiliation = false,
                b"Author" => {
                    if let Some(ref mut state) = current {
                        if let Some(author) = state.current_author.take() {
                            state.authors.push(author);
                        }
                    }
                }
                b"PubmedArticle" => {
                    if let Some(state) = current.take() {
                        records.push(state.finish()?);
                    }
                }
                _ => {}
            },
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    debug!(count = records.len(), "parsed efetch records");
    Ok(records)
}
