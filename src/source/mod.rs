//! Document source interfaces for retrieving annual messages.
//!
//! A source turns a catalog reference into document identifiers and an
//! identifier into the raw structural fragments of one document. How the
//! fragments are obtained (HTTP, fixtures) is the source's business; markup
//! traversal never leaks past this seam.

pub mod archive;
pub mod memory;

use anyhow::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

// Re-export the bundled sources
pub use archive::ArchiveClient;
pub use memory::MemorySource;

/// Opaque identifier for one document in an archive catalog.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Wrap an archive-assigned identifier
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw structural fragments for one document, as delivered by a source.
///
/// The pipeline extracts the speaker name from `title_text`, the year from
/// `date_text`, and treats each element of `paragraphs` as one body
/// paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawDocument {
    /// Title/byline text, e.g. "Barack Obama: Address Before a Joint Session"
    pub title_text: String,

    /// Date text, e.g. "January 20, 2021"
    pub date_text: String,

    /// Ordered body paragraphs, annotations still embedded
    pub paragraphs: Vec<String>,
}

/// Trait for document sources
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Human-readable source name
    fn name(&self) -> &str;

    /// List every discoverable document in a catalog, in catalog order
    async fn list_document_ids(&self, catalog: &str) -> Result<Vec<DocumentId>>;

    /// Fetch the raw fragments for one document
    async fn fetch(&self, id: &DocumentId) -> Result<RawDocument>;
}
