//! HTTP client for a JSON document archive.
//!
//! The archive serves a catalog listing and per-document records whose
//! fields are already extracted from the underlying pages, so no markup
//! traversal happens on this side of the wire.

use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;

use super::{DocumentId, DocumentSource, RawDocument};

/// Archive API client
pub struct ArchiveClient {
    /// Base URL of the archive API
    base_url: String,
    /// HTTP client
    client: reqwest::Client,
}

/// Catalog listing response
#[derive(Debug, Deserialize)]
struct CatalogResponse {
    documents: Vec<CatalogEntry>,
}

/// One catalog entry
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
}

/// Per-document response
#[derive(Debug, Deserialize)]
struct DocumentResponse {
    title: String,
    date: String,
    paragraphs: Vec<String>,
}

impl ArchiveClient {
    /// Create a new archive client
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Build an endpoint URL
    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), path)
    }
}

#[async_trait]
impl DocumentSource for ArchiveClient {
    fn name(&self) -> &str {
        "archive"
    }

    async fn list_document_ids(&self, catalog: &str) -> Result<Vec<DocumentId>> {
        let url = self.endpoint(&format!("catalogs/{}", catalog));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to request archive catalog '{}'", catalog))?;

        if !response.status().is_success() {
            anyhow::bail!(
                "Archive returned {} for catalog '{}'",
                response.status(),
                catalog
            );
        }

        let body: CatalogResponse = response
            .json()
            .await
            .context("Failed to parse archive catalog response")?;

        Ok(body
            .documents
            .into_iter()
            .map(|entry| DocumentId::new(entry.id))
            .collect())
    }

    async fn fetch(&self, id: &DocumentId) -> Result<RawDocument> {
        let url = self.endpoint(&format!("documents/{}", id));

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to request document {}", id))?;

        if !response.status().is_success() {
            anyhow::bail!("Archive returned {} for document {}", response.status(), id);
        }

        let body: DocumentResponse = response
            .json()
            .await
            .with_context(|| format!("Failed to parse archive response for document {}", id))?;

        Ok(RawDocument {
            title_text: body.title,
            date_text: body.date,
            paragraphs: body.paragraphs,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_building() {
        let client = ArchiveClient::new("https://archive.example.org/api/");
        assert_eq!(
            client.endpoint("catalogs/annual-messages"),
            "https://archive.example.org/api/catalogs/annual-messages"
        );

        let client = ArchiveClient::new("https://archive.example.org/api");
        assert_eq!(
            client.endpoint("documents/123"),
            "https://archive.example.org/api/documents/123"
        );
    }
}
