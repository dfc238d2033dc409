use prodsearch_common::{ProdSearchError, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, warn};

use crate::types::DocumentRecord;

/// In-memory parallel-array vector store
///
/// Documents and their embeddings are kept in two sequences aligned by
/// insertion index; that index is the document's identifier. Identifiers
/// are assigned sequentially from 0 and reset only by a full clear.
#[derive(Debug, Default)]
pub struct VectorStore {
    documents: Vec<DocumentRecord>,
    vectors: Vec<Vec<f32>>,
    dim: Option<usize>,
}

impl VectorStore {
    /// Create new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Append records and vectors in lock-step
    ///
    /// The first appended vector establishes the store's dimension; every
    /// later vector must match it. All inputs are validated before any
    /// mutation, so a failed append leaves the store untouched. Returns
    /// the newly assigned identifiers in input order.
    pub fn append(
        &mut self,
        records: Vec<DocumentRecord>,
        vectors: Vec<Vec<f32>>,
    ) -> Result<Vec<usize>> {
        if records.len() != vectors.len() {
            return Err(ProdSearchError::invalid_input(format!(
                "record/vector count mismatch: {} records, {} vectors",
                records.len(),
                vectors.len()
            )));
        }

        let mut dim = self.dim;
        for vector in &vectors {
            match dim {
                None => dim = Some(vector.len()),
                Some(expected) if vector.len() != expected => {
                    return Err(ProdSearchError::DimensionMismatch {
                        expected,
                        actual: vector.len(),
                    });
                }
                Some(_) => {}
            }
        }

        let start = self.documents.len();
        let ids: Vec<usize> = (start..start + records.len()).collect();

        self.dim = dim;
        self.documents.extend(records);
        self.vectors.extend(vectors);

        debug!("Appended {} documents (total: {})", ids.len(), self.documents.len());
        Ok(ids)
    }

    /// Get document by identifier
    pub fn get(&self, id: usize) -> Result<&DocumentRecord> {
        self.documents
            .get(id)
            .ok_or_else(|| ProdSearchError::not_found(format!("document {}", id)))
    }

    /// Current document count
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// Established embedding dimension, if any vector has been appended
    pub fn dim(&self) -> Option<usize> {
        self.dim
    }

    /// Stored documents, ordered by identifier
    pub fn documents(&self) -> &[DocumentRecord] {
        &self.documents
    }

    /// Stored vectors, ordered by identifier
    pub fn vectors(&self) -> &[Vec<f32>] {
        &self.vectors
    }

    /// Clear the store
    ///
    /// With no filter (or an empty one), empties both sequences and resets
    /// identifier assignment to 0. Filtered deletion is unsupported: a
    /// non-empty filter is a no-op that mutates nothing and raises no
    /// error.
    pub fn clear(&mut self, filter: Option<&HashMap<String, Value>>) {
        match filter {
            Some(f) if !f.is_empty() => {
                warn!("Filtered clear is unsupported; store left unchanged");
            }
            _ => {
                self.documents.clear();
                self.vectors.clear();
                self.dim = None;
                debug!("Store cleared");
            }
        }
    }
}
