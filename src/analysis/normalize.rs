//! Annotation removal.

use crate::domain::CleanText;

use super::annotations::BRACKETED;

/// Remove every bracketed annotation from a raw body, producing the clean
/// spoken text. Paragraph count and order are preserved.
///
/// Idempotent: once the brackets are gone, a second pass changes nothing.
pub fn clean(raw_body: &[String]) -> CleanText {
    let paragraphs = raw_body
        .iter()
        .map(|paragraph| BRACKETED.replace_all(paragraph, "").into_owned())
        .collect();

    CleanText { paragraphs }
}
