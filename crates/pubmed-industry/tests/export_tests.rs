//! CSV round-trip tests.

use pubmed_industry::export::{self, HEADERS};
use pubmed_industry::models::IndustryPaper;

fn paper(pmid: &str, title: &str, email: &str) -> IndustryPaper {
    IndustryPaper {
        pmid: pmid.to_string(),
        title: title.to_string(),
        year: "2024".to_string(),
        non_academic_authors: "Ana Lee; Unknown".to_string(),
        company_affiliations: "Genentech Inc; Novo Nordisk Ltd".to_string(),
        corresponding_email: email.to_string(),
    }
}

#[test]
fn test_round_trip_preserves_rows_and_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let papers = vec![
        paper("111", "First paper", "a@example.com"),
        paper("222", "Second, with a comma", "N/A"),
        paper("333", "Unknown year paper", "N/A"),
    ];
    export::write_csv(&papers, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.iter().collect::<Vec<_>>(), HEADERS.to_vec());

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 3);

    assert_eq!(&rows[0][0], "111");
    assert_eq!(&rows[0][5], "a@example.com");
    assert_eq!(&rows[1][1], "Second, with a comma");
    assert_eq!(&rows[1][5], "N/A");
    // The "Unknown" name sentinel survives the round trip verbatim.
    assert_eq!(&rows[2][3], "Ana Lee; Unknown");
}

#[test]
fn test_round_trip_unknown_year_sentinel() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let mut undated = paper("555", "No PubDate", "N/A");
    undated.year = "Unknown".to_string();
    export::write_csv(&[undated], &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(&rows[0][2], "Unknown");
}

#[test]
fn test_round_trip_embedded_quotes_and_newlines() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.csv");

    let tricky = paper("666", "The \"gold standard\"\nrevisited", "N/A");
    export::write_csv(&[tricky], &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(&rows[0][1], "The \"gold standard\"\nrevisited");
}
