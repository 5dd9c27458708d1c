//! Sentence and word segmentation over clean text.
//!
//! Two independent passes: sentences for phrase-level keyword rules, words
//! for everything else. Word splitting deliberately strips clause punctuation
//! first and treats the em-dash as a separator — the corpus uses em-dashes
//! between words, not hyphens — while leaving apostrophes and hyphen-minus
//! inside tokens untouched.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::domain::CleanText;

/// Candidate sentence boundary: terminal punctuation plus a whitespace run.
/// Whether it actually ends a sentence depends on the character after the
/// run (the regex crate has no lookahead, so that check happens in code).
static BOUNDARY: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?!]\s+").unwrap());

/// Clause punctuation stripped before word splitting.
static CLAUSE_PUNCT: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.?,!:;]").unwrap());

/// Split clean text into sentences.
///
/// A boundary is one of `.?!` followed by whitespace and an uppercase letter;
/// the punctuation stays with the sentence it ends. Paragraph breaks always
/// end a sentence. Empty fragments are discarded.
pub fn to_sentences(text: &CleanText) -> Vec<String> {
    let mut sentences = Vec::new();

    for paragraph in &text.paragraphs {
        let mut start = 0;
        for m in BOUNDARY.find_iter(paragraph) {
            let next_is_upper = paragraph[m.end()..]
                .chars()
                .next()
                .is_some_and(|c| c.is_uppercase());
            if !next_is_upper {
                continue;
            }

            // keep the terminal punctuation (one ASCII byte), drop the whitespace
            let fragment = paragraph[start..m.start() + 1].trim();
            if !fragment.is_empty() {
                sentences.push(fragment.to_string());
            }
            start = m.end();
        }

        let tail = paragraph[start..].trim();
        if !tail.is_empty() {
            sentences.push(tail.to_string());
        }
    }

    sentences
}

/// Split clean text into words.
///
/// Strips `.?,!:;`, replaces every em-dash with a space, then splits on
/// whitespace runs. Tokens keep their original casing plus any apostrophes
/// and hyphen-minus characters.
pub fn to_words(text: &CleanText) -> Vec<String> {
    let mut words = Vec::new();

    for paragraph in &text.paragraphs {
        let stripped = CLAUSE_PUNCT.replace_all(paragraph, "");
        let separated = stripped.replace('—', " ");
        words.extend(separated.split_whitespace().map(str::to_string));
    }

    words
}
