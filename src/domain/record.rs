//! The aggregated per-speech output row.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One row of the output table: metadata plus every lexical statistic for a
/// single document. Rows are emitted in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechRecord {
    /// Speaker name, extracted from the title text
    pub speaker_name: String,

    /// Delivery year
    pub year: i32,

    /// Occurrences of "Laughter" across the document's annotations
    pub laughter_count: usize,

    /// Occurrences of "Applause" across the document's annotations
    pub applause_count: usize,

    /// Number of words in the clean text
    pub number_of_words: usize,

    /// Character count of the clean text (Unicode scalars, summed per paragraph)
    pub number_of_characters: usize,

    /// `number_of_characters / number_of_words`; `None` for a zero-word
    /// document rather than a coerced 0 or infinity
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub average_word_length: Option<f64>,

    /// One count per configured keyword rule, keyed by rule label
    pub keyword_counts: BTreeMap<String, usize>,
}

impl SpeechRecord {
    /// Count for a configured keyword label, if that label exists.
    pub fn keyword_count(&self, label: &str) -> Option<usize> {
        self.keyword_counts.get(label).copied()
    }
}
