//! The aggregation pass: documents in, one `SpeechRecord` per document out.
//!
//! Per-document analysis is a pure function; the pipeline wraps it with
//! catalog listing, configured exclusions, fetching, and metadata
//! extraction. A failure on any document aborts the run so the table is
//! either complete or absent.

use std::collections::HashSet;

use tracing::{debug, info, instrument};

use crate::domain::{speaker_from_title, year_from_date_text, Document, SpeechRecord};
use crate::source::{DocumentId, DocumentSource};

use super::annotations::{count_occurrences, extract_annotations};
use super::keywords::RuleSet;
use super::normalize::clean;
use super::segment::{to_sentences, to_words};
use super::PipelineError;

/// Annotation needles tallied into fixed columns of every record.
const LAUGHTER: &str = "Laughter";
const APPLAUSE: &str = "Applause";

/// Compute every lexical statistic for one document.
///
/// `average_word_length` is `None` for a zero-word document; it is never
/// coerced to 0 or an infinity.
pub fn analyze_document(document: &Document, rules: &RuleSet) -> SpeechRecord {
    let annotations = extract_annotations(&document.id, &document.raw_body);
    let laughter_count = count_occurrences(&annotations, LAUGHTER);
    let applause_count = count_occurrences(&annotations, APPLAUSE);

    let text = clean(&document.raw_body);
    let words = to_words(&text);
    let sentences = to_sentences(&text);

    let number_of_words = words.len();
    let number_of_characters = text.char_count();
    let average_word_length = if number_of_words == 0 {
        None
    } else {
        Some(number_of_characters as f64 / number_of_words as f64)
    };

    let keyword_counts = rules.tally(&words, &sentences);

    SpeechRecord {
        speaker_name: document.speaker_name.clone(),
        year: document.year,
        laughter_count,
        applause_count,
        number_of_words,
        number_of_characters,
        average_word_length,
        keyword_counts,
    }
}

/// Batch pipeline from a document source to the speech table.
pub struct Pipeline {
    rules: RuleSet,
    excluded_ids: HashSet<DocumentId>,
}

impl Pipeline {
    /// Create a pipeline with a compiled rule set
    pub fn new(rules: RuleSet) -> Self {
        Self {
            rules,
            excluded_ids: HashSet::new(),
        }
    }

    /// Exclude known-defective catalog entries before fetching
    pub fn with_excluded_ids(mut self, ids: impl IntoIterator<Item = DocumentId>) -> Self {
        self.excluded_ids.extend(ids);
        self
    }

    /// Fetch and analyze every document in a catalog.
    ///
    /// Records come back in catalog order, excluded identifiers never appear,
    /// and any source or metadata failure aborts the whole run naming the
    /// offending document.
    #[instrument(skip(self, source), fields(source = source.name()))]
    pub async fn run(
        &self,
        source: &dyn DocumentSource,
        catalog: &str,
    ) -> Result<Vec<SpeechRecord>, PipelineError> {
        let listed = source.list_document_ids(catalog).await.map_err(|source| {
            PipelineError::CatalogUnavailable {
                catalog: catalog.to_string(),
                source,
            }
        })?;

        let ids: Vec<DocumentId> = listed
            .into_iter()
            .filter(|id| !self.excluded_ids.contains(id))
            .collect();

        info!(documents = ids.len(), excluded = self.excluded_ids.len(), "catalog listed");

        let mut records = Vec::with_capacity(ids.len());

        for id in ids {
            let raw = source
                .fetch(&id)
                .await
                .map_err(|source| PipelineError::SourceUnavailable {
                    id: id.clone(),
                    source,
                })?;

            let year = year_from_date_text(&raw.date_text).ok_or_else(|| {
                PipelineError::MalformedDate {
                    id: id.clone(),
                    date_text: raw.date_text.clone(),
                }
            })?;

            let document = Document {
                id,
                speaker_name: speaker_from_title(&raw.title_text),
                year,
                raw_body: raw.paragraphs,
            };

            debug!(speaker = %document.speaker_name, year = document.year, "analyzing document");
            records.push(analyze_document(&document, &self.rules));
        }

        info!(records = records.len(), "table assembled");
        Ok(records)
    }
}
