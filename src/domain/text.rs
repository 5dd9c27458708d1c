//! Annotations and annotation-free text.
//!
//! Transcripts interleave the spoken body with bracketed stage directions
//! like `[Applause]`. An `Annotation` is one such fragment; `CleanText` is
//! the body with every fragment removed, which all lexical statistics are
//! computed over.

use serde::{Deserialize, Serialize};

use crate::source::DocumentId;

/// A bracketed fragment extracted from a document body, not spoken by the
/// orator. `text` includes the brackets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation {
    /// Document this fragment came from (back-reference, not ownership)
    pub document_id: DocumentId,

    /// The full bracketed match, e.g. "[Laughter]"
    pub text: String,
}

/// The spoken body with all annotations removed.
///
/// Paragraph count and order match the raw body exactly; removal only ever
/// replaces bracketed substrings with the empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanText {
    /// Annotation-free paragraphs, in source order
    pub paragraphs: Vec<String>,
}

impl CleanText {
    /// Total character count: the sum of Unicode scalar counts per paragraph.
    pub fn char_count(&self) -> usize {
        self.paragraphs.iter().map(|p| p.chars().count()).sum()
    }

    /// True when no paragraph contains any text.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.iter().all(|p| p.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_count_sums_paragraphs() {
        let text = CleanText {
            paragraphs: vec!["abc".to_string(), "de".to_string()],
        };
        assert_eq!(text.char_count(), 5);
    }

    #[test]
    fn test_char_count_is_scalar_based() {
        // em-dash is one scalar, three UTF-8 bytes
        let text = CleanText {
            paragraphs: vec!["a—b".to_string()],
        };
        assert_eq!(text.char_count(), 3);
    }

    #[test]
    fn test_is_empty() {
        assert!(CleanText { paragraphs: vec![] }.is_empty());
        assert!(CleanText { paragraphs: vec!["  ".to_string()] }.is_empty());
        assert!(!CleanText { paragraphs: vec!["word".to_string()] }.is_empty());
    }
}
