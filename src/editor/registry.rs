//! The ordered collection of open documents.
//!
//! The registry is the only component (together with the coordinator) that
//! may create or dispose engine models; everything else references
//! documents by URI. Publication ordering is owned by the caller: an entry
//! is inserted only after the engine confirms model creation, and removed
//! only after the engine model is disposed.

use super::Document;
use crate::error::{BridgeError, Result};

#[derive(Default)]
pub(crate) struct DocumentRegistry {
    documents: Vec<Document>,
}

impl DocumentRegistry {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Publish a confirmed document. No two entries may share a URI.
    pub(crate) fn insert(&mut self, document: Document) -> Result<()> {
        if self.contains(document.uri()) {
            return Err(BridgeError::DuplicateDocument {
                uri: document.uri().to_string(),
            });
        }
        self.documents.push(document);
        Ok(())
    }

    /// Remove and return the entry for `uri`.
    pub(crate) fn remove(&mut self, uri: &str) -> Result<Document> {
        match self.documents.iter().position(|d| d.uri() == uri) {
            Some(index) => Ok(self.documents.remove(index)),
            None => Err(BridgeError::InvalidDocumentReference {
                uri: uri.to_string(),
            }),
        }
    }

    pub(crate) fn get(&self, uri: &str) -> Result<&Document> {
        self.documents
            .iter()
            .find(|d| d.uri() == uri)
            .ok_or_else(|| BridgeError::InvalidDocumentReference {
                uri: uri.to_string(),
            })
    }

    pub(crate) fn get_mut(&mut self, uri: &str) -> Result<&mut Document> {
        self.documents
            .iter_mut()
            .find(|d| d.uri() == uri)
            .ok_or_else(|| BridgeError::InvalidDocumentReference {
                uri: uri.to_string(),
            })
    }

    pub(crate) fn contains(&self, uri: &str) -> bool {
        self.documents.iter().any(|d| d.uri() == uri)
    }

    pub(crate) fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub(crate) fn first_uri(&self) -> Option<String> {
        self.documents.first().map(|d| d.uri().to_string())
    }
}
