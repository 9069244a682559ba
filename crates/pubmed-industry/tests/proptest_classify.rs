//! Property-based tests for affiliation classification.

use proptest::prelude::*;

use pubmed_industry::AffiliationClassifier;
use pubmed_industry::config::keywords;
use pubmed_industry::models::{Author, PubmedRecord};

fn arb_keyword() -> impl Strategy<Value = &'static str> {
    proptest::sample::select(keywords::COMPANY)
}

proptest! {
    /// Any text containing a company keyword classifies as non-academic,
    /// whatever surrounds it and whatever its case.
    #[test]
    fn embedded_keyword_always_matches(
        prefix in "[A-Za-z ]{0,30}",
        keyword in arb_keyword(),
        suffix in "[A-Za-z ]{0,30}",
        uppercase in any::<bool>(),
    ) {
        let keyword = if uppercase { keyword.to_uppercase() } else { keyword.to_string() };
        let affiliation = format!("{prefix}{keyword}{suffix}");

        let classifier = AffiliationClassifier::default();
        prop_assert!(classifier.is_non_academic(&affiliation));
    }

    /// Text drawn from an alphabet that cannot spell any keyword never
    /// matches. Keywords all contain a lowercase letter; digits, spaces,
    /// and uppercase-only-unmappable symbols cannot produce one.
    #[test]
    fn keyword_free_text_never_matches(affiliation in "[0-9 @#()-]{0,60}") {
        let classifier = AffiliationClassifier::default();
        prop_assert!(!classifier.is_non_academic(&affiliation));
    }

    /// Classification never panics on arbitrary unicode input.
    #[test]
    fn classification_total_on_arbitrary_input(affiliation in ".*") {
        let classifier = AffiliationClassifier::default();
        let _ = classifier.is_non_academic(&affiliation);
        let _ = classifier.find_email(&affiliation);
    }

    /// A record whose authors all have keyword-free affiliations is never
    /// emitted.
    #[test]
    fn academic_only_records_are_dropped(affiliations in proptest::collection::vec("[0-9 ]{0,20}", 0..5)) {
        let record = PubmedRecord {
            pmid: "1".to_string(),
            title: "t".to_string(),
            year: "2024".to_string(),
            authors: affiliations
                .into_iter()
                .map(|a| Author {
                    fore_name: Some("A".to_string()),
                    last_name: Some("B".to_string()),
                    affiliation: Some(a),
                })
                .collect(),
        };

        let classifier = AffiliationClassifier::default();
        prop_assert!(classifier.extract_paper(&record).is_none());
    }
}
