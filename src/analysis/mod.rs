//! The lexical-analysis core.
//!
//! Data flows strictly forward through these modules:
//! annotations/normalize → segment → keywords → aggregate. Each stage is a
//! pure function of one document; nothing here reads ambient state.

pub mod aggregate;
pub mod annotations;
pub mod keywords;
pub mod normalize;
pub mod segment;

use thiserror::Error;

use crate::source::DocumentId;

// Re-export the core operations
pub use aggregate::{analyze_document, Pipeline};
pub use annotations::{count_occurrences, extract_annotations};
pub use keywords::{KeywordRule, RuleKind, RuleSet};
pub use normalize::clean;
pub use segment::{to_sentences, to_words};

/// Errors surfaced to the caller of the pipeline.
///
/// The pipeline produces either a complete table or one of these; it never
/// silently emits a partial table.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// The source failed to list the catalog; nothing was processed.
    #[error("document source failed to list catalog '{catalog}'")]
    CatalogUnavailable {
        catalog: String,
        #[source]
        source: anyhow::Error,
    },

    /// The source failed to return a document; the run aborts rather than
    /// producing misleading aggregate statistics.
    #[error("document source failed to return {id}")]
    SourceUnavailable {
        id: DocumentId,
        #[source]
        source: anyhow::Error,
    },

    /// The document's date text has no parseable trailing year.
    #[error("cannot parse a year from date text {date_text:?} in {id}")]
    MalformedDate { id: DocumentId, date_text: String },

    /// A configured keyword pattern failed to compile. Raised at setup,
    /// before any document is processed.
    #[error("keyword rule '{label}' has an invalid pattern")]
    InvalidRule {
        label: String,
        #[source]
        source: regex::Error,
    },
}
