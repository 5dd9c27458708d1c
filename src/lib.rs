//! rostrum - Lexical analysis pipeline for U.S. presidential annual messages
//!
//! Fetches the full text of annual messages from a document archive, strips
//! bracketed stage directions (audience reactions), and computes per-speech
//! lexical statistics into one strongly-typed table row per document.
//!
//! # Architecture
//!
//! Data flows strictly forward:
//! source → annotations/normalize → segment → keywords → aggregate → report.
//! Every per-document computation is a pure function of that document; the
//! pipeline either produces a complete table or fails naming the offending
//! document.
//!
//! # Modules
//!
//! - `source`: Document source seam (archive HTTP client, in-memory fixture)
//! - `domain`: Data structures (Document, Annotation, CleanText, SpeechRecord)
//! - `analysis`: The core pipeline (extraction, segmentation, tallying,
//!   aggregation)
//! - `report`: Derived views, chart-ready series, JSON export
//! - `config`: Keyword rules, catalog exclusions, party table
//! - `cli`: Command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Build the table from the configured archive
//! rostrum analyze --output table.json
//!
//! # Average a keyword count per party
//! rostrum report table.json --metric god_bless --by-party
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod domain;
pub mod report;
pub mod source;

// Re-export main types at crate root for convenience
pub use analysis::{analyze_document, KeywordRule, Pipeline, PipelineError, RuleKind, RuleSet};
pub use config::Config;
pub use domain::{Annotation, CleanText, Document, SpeechRecord};
pub use report::{Metric, Party, Series};
pub use source::{ArchiveClient, DocumentId, DocumentSource, MemorySource, RawDocument};
