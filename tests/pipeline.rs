//! Pipeline Integration Tests
//!
//! End-to-end runs over an in-memory document source: catalog ordering,
//! configured exclusions, and the abort-on-failure contract.

use rostrum::analysis::{KeywordRule, Pipeline, PipelineError, RuleSet};
use rostrum::source::{DocumentId, MemorySource, RawDocument};

fn raw(title: &str, date: &str, paragraphs: &[&str]) -> RawDocument {
    RawDocument {
        title_text: title.to_string(),
        date_text: date.to_string(),
        paragraphs: paragraphs.iter().map(|p| p.to_string()).collect(),
    }
}

fn rules() -> RuleSet {
    RuleSet::compile(&[
        KeywordRule::token("economy", r"^[Ee]conom(y|ic|ics|ies)$"),
        KeywordRule::phrase("god_bless", r"God [Bb]less"),
    ])
    .unwrap()
}

#[tokio::test]
async fn test_table_in_catalog_order_with_full_statistics() {
    let source = MemorySource::new()
        .with_document(
            "obama-2009",
            raw(
                "Barack Obama: Address Before a Joint Session of Congress",
                "February 24, 2009",
                &["The economy is strong. [Applause] We must act now."],
            ),
        )
        .with_document(
            "bush-2005",
            raw(
                "George W. Bush: State of the Union Address",
                "February 2, 2005",
                &["Our economy grows. God bless America. [Applause]"],
            ),
        );

    let pipeline = Pipeline::new(rules());
    let records = pipeline.run(&source, "annual-messages").await.unwrap();

    assert_eq!(records.len(), 2);

    // rows come back in catalog order, not alphabetical or by year
    assert_eq!(records[0].speaker_name, "Barack Obama");
    assert_eq!(records[0].year, 2009);
    assert_eq!(records[1].speaker_name, "George W. Bush");
    assert_eq!(records[1].year, 2005);

    assert_eq!(records[0].applause_count, 1);
    assert_eq!(records[0].number_of_words, 8);
    assert_eq!(records[0].keyword_counts["economy"], 1);
    assert_eq!(records[0].keyword_counts["god_bless"], 0);

    assert_eq!(records[1].keyword_counts["god_bless"], 1);
    assert!(records[1].average_word_length.is_some());
}

#[tokio::test]
async fn test_excluded_identifier_never_reaches_table() {
    let source = MemorySource::new()
        .with_document(
            "washington-1790",
            raw("George Washington: First Annual Message", "January 8, 1790", &["Text."]),
        )
        .with_document(
            "washington-1790-duplicate",
            raw("George Washington: First Annual Message", "January 8, 1790", &["Text."]),
        )
        .with_document(
            "adams-1797",
            raw("John Adams: First Annual Message", "November 22, 1797", &["Text."]),
        );

    let pipeline = Pipeline::new(rules())
        .with_excluded_ids([DocumentId::new("washington-1790-duplicate")]);
    let records = pipeline.run(&source, "annual-messages").await.unwrap();

    // one fewer row than the catalog listing
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].speaker_name, "George Washington");
    assert_eq!(records[1].speaker_name, "John Adams");
}

#[tokio::test]
async fn test_fetch_failure_aborts_run() {
    let source = MemorySource::new()
        .with_document(
            "ok",
            raw("Speaker: Message", "January 1, 1900", &["Text."]),
        )
        .with_missing("dropped");

    let pipeline = Pipeline::new(rules());
    let err = pipeline.run(&source, "annual-messages").await.unwrap_err();

    // no partial table: the whole run fails, naming the document
    assert!(matches!(
        err,
        PipelineError::SourceUnavailable { ref id, .. } if id.as_str() == "dropped"
    ));
}

#[tokio::test]
async fn test_malformed_date_names_document() {
    let source = MemorySource::new().with_document(
        "undated",
        raw("Speaker: Message", "date of delivery unknown", &["Text."]),
    );

    let pipeline = Pipeline::new(rules());
    let err = pipeline.run(&source, "annual-messages").await.unwrap_err();

    match err {
        PipelineError::MalformedDate { id, date_text } => {
            assert_eq!(id.as_str(), "undated");
            assert_eq!(date_text, "date of delivery unknown");
        }
        other => panic!("expected MalformedDate, got {:?}", other),
    }
}

#[tokio::test]
async fn test_zero_word_document_flagged_undefined() {
    let source = MemorySource::new().with_document(
        "silent",
        raw("Speaker: Message", "January 1, 1900", &["[Applause]"]),
    );

    let pipeline = Pipeline::new(rules());
    let records = pipeline.run(&source, "annual-messages").await.unwrap();

    assert_eq!(records[0].number_of_words, 0);
    assert_eq!(records[0].average_word_length, None);
    assert_eq!(records[0].applause_count, 1);
}
