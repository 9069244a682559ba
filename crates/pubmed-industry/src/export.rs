//! CSV report writer.

use std::path::Path;

use tracing::info;

use crate::error::ExportResult;
use crate::models::IndustryPaper;

/// The fixed output columns, in order.
pub const HEADERS: [&str; 6] = [
    "PubmedID",
    "Title",
    "Publication Date",
    "Non-academic Author(s)",
    "Company Affiliation(s)",
    "Corresponding Author Email",
];

/// Write qualifying papers to `path` as UTF-8 CSV.
///
/// One header row, then one row per paper in input order. Quoting of
/// commas, quotes, and newlines embedded in titles or affiliations is
/// handled by the `csv` writer. Any failure surfaces as [`ExportError`]
/// rather than a silently truncated file.
pub fn write_csv(papers: &[IndustryPaper], path: &Path) -> ExportResult<()> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(HEADERS)?;
    for paper in papers {
        writer.write_record([
            &paper.pmid,
            &paper.title,
            &paper.year,
            &paper.non_academic_authors,
            &paper.company_affiliations,
            &paper.corresponding_email,
        ])?;
    }
    writer.flush()?;

    info!(count = papers.len(), path = %path.display(), "wrote CSV report");
    Ok(())
}
