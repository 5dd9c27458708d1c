//! Bracketed stage-direction extraction and counting.
//!
//! Transcripts record audience reactions inline, e.g. "We must act.
//! [Applause]". These fragments are extracted here in reading order and
//! counted by substring, then stripped by `normalize` before any lexical
//! statistic runs.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::Annotation;
use crate::source::DocumentId;

/// Minimal bracket match. The lazy quantifier keeps adjacent annotations
/// separate: "[A] word [B]" yields two matches, not one spanning both.
pub(crate) static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[.*?\]").unwrap());

/// Extract every bracketed fragment from a raw body, paragraph by paragraph,
/// in reading order. A body with no brackets yields an empty vec.
pub fn extract_annotations(id: &DocumentId, raw_body: &[String]) -> Vec<Annotation> {
    let mut annotations = Vec::new();

    for paragraph in raw_body {
        for m in BRACKETED.find_iter(paragraph) {
            annotations.push(Annotation {
                document_id: id.clone(),
                text: m.as_str().to_string(),
            });
        }
    }

    annotations
}

/// Count case-sensitive occurrences of `needle` as a substring across all
/// annotation texts.
///
/// Substring semantics matter: "[Laughter and applause]" counts once for
/// "Laughter" even though the bracket holds more than the keyword.
pub fn count_occurrences(annotations: &[Annotation], needle: &str) -> usize {
    annotations
        .iter()
        .map(|a| a.text.matches(needle).count())
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc_id() -> DocumentId {
        DocumentId::new("test")
    }

    fn texts(annotations: &[Annotation]) -> Vec<&str> {
        annotations.iter().map(|a| a.text.as_str()).collect()
    }

    #[test]
    fn test_extract_single_annotation() {
        let body = vec!["The economy is strong. [Applause] We must act now.".to_string()];
        let annotations = extract_annotations(&doc_id(), &body);
        assert_eq!(texts(&annotations), vec!["[Applause]"]);
    }

    #[test]
    fn test_extract_is_lazy_across_adjacent_brackets() {
        let body = vec!["[Laughter] some words [Applause]".to_string()];
        let annotations = extract_annotations(&doc_id(), &body);
        assert_eq!(texts(&annotations), vec!["[Laughter]", "[Applause]"]);
    }

    #[test]
    fn test_extract_preserves_paragraph_order() {
        let body = vec![
            "First. [Applause]".to_string(),
            "Second. [Laughter] Third. [Applause]".to_string(),
        ];
        let annotations = extract_annotations(&doc_id(), &body);
        assert_eq!(
            texts(&annotations),
            vec!["[Applause]", "[Laughter]", "[Applause]"]
        );
    }

    #[test]
    fn test_extract_none() {
        let body = vec!["No reactions recorded here.".to_string()];
        assert!(extract_annotations(&doc_id(), &body).is_empty());
    }

    #[test]
    fn test_count_occurrences_is_substring_based() {
        let body = vec!["[Laughter] [Laughter and applause] [Applause]".to_string()];
        let annotations = extract_annotations(&doc_id(), &body);

        assert_eq!(count_occurrences(&annotations, "Laughter"), 2);
        // case-sensitive: "applause" inside the combined bracket does not match
        assert_eq!(count_occurrences(&annotations, "Applause"), 1);
    }

    #[test]
    fn test_count_occurrences_empty() {
        assert_eq!(count_occurrences(&[], "Laughter"), 0);
    }
}
