//! In-memory document source for tests and offline runs.

use std::collections::HashMap;

use anyhow::Result;
use async_trait::async_trait;

use super::{DocumentId, DocumentSource, RawDocument};

/// A source backed by documents registered up front. Listing returns the
/// registration order regardless of the catalog reference.
#[derive(Debug, Default)]
pub struct MemorySource {
    order: Vec<DocumentId>,
    documents: HashMap<DocumentId, RawDocument>,
}

impl MemorySource {
    /// Create an empty source
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under an identifier
    pub fn with_document(mut self, id: impl Into<String>, raw: RawDocument) -> Self {
        let id = DocumentId::new(id);
        self.order.push(id.clone());
        self.documents.insert(id, raw);
        self
    }

    /// Register an identifier the catalog lists but `fetch` cannot return,
    /// simulating an archive that drops a document
    pub fn with_missing(mut self, id: impl Into<String>) -> Self {
        self.order.push(DocumentId::new(id));
        self
    }
}

#[async_trait]
impl DocumentSource for MemorySource {
    fn name(&self) -> &str {
        "memory"
    }

    async fn list_document_ids(&self, _catalog: &str) -> Result<Vec<DocumentId>> {
        Ok(self.order.clone())
    }

    async fn fetch(&self, id: &DocumentId) -> Result<RawDocument> {
        match self.documents.get(id) {
            Some(raw) => Ok(raw.clone()),
            None => anyhow::bail!("No document registered under {}", id),
        }
    }
}
