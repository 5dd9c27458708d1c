//! A retrieved annual message and its extracted metadata.
//!
//! The document source hands back raw structural fragments (title text, date
//! text, body paragraphs); the helpers here pull the speaker name and year out
//! of those fragments. Year extraction is deliberately strict: a date text
//! without a parseable trailing year is surfaced as a pipeline error by the
//! aggregator instead of defaulting.

use serde::{Deserialize, Serialize};

use crate::source::DocumentId;

/// One retrieved speech, immutable once constructed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// Identifier this document was fetched under
    pub id: DocumentId,

    /// Speaker name, extracted from the title text
    pub speaker_name: String,

    /// Delivery year, parsed from the trailing fragment of the date text
    pub year: i32,

    /// Body paragraphs as delivered by the source, annotations included
    pub raw_body: Vec<String>,
}

/// Extract the speaker name from an archive title.
///
/// Archive titles read "Speaker: Title of the Message"; the speaker is the
/// segment before the first colon. A title without a colon is taken whole.
pub fn speaker_from_title(title_text: &str) -> String {
    match title_text.split_once(':') {
        Some((speaker, _)) => speaker.trim().to_string(),
        None => title_text.trim().to_string(),
    }
}

/// Parse the year from a date text such as "January 20, 2021".
///
/// The year is whatever follows the last comma, trimmed. Returns `None` when
/// that fragment is not an integer (including when there is no comma and the
/// whole text is not a bare year).
pub fn year_from_date_text(date_text: &str) -> Option<i32> {
    let fragment = match date_text.rsplit_once(',') {
        Some((_, tail)) => tail,
        None => date_text,
    };
    fragment.trim().parse().ok()
}
