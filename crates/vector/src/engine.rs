use prodsearch_common::{ProdSearchError, Result};
use prodsearch_embedding::EmbeddingProvider;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::similarity::top_k;
use crate::store::VectorStore;
use crate::types::{DocumentRecord, SearchResult};

/// Search engine: ingestion pipeline and query façade over the vector store
///
/// The store sits behind a single RwLock; embedding calls are awaited with
/// no lock held, so ingestion appends atomically once the provider returns
/// and queries scan a consistent snapshot under the read lock.
pub struct SearchEngine {
    store: Arc<RwLock<VectorStore>>,
    provider: Arc<dyn EmbeddingProvider>,
}

impl SearchEngine {
    /// Create new engine with an empty store
    pub fn new(provider: Arc<dyn EmbeddingProvider>) -> Self {
        Self {
            store: Arc::new(RwLock::new(VectorStore::new())),
            provider,
        }
    }

    /// Ingest a batch of (text, metadata) pairs
    ///
    /// Makes exactly one batch call to the embedding provider per ingest.
    /// A provider returning a different number of vectors than texts
    /// submitted is a contract violation and fails the whole batch; nothing
    /// is appended in that case. Returns the assigned identifiers in input
    /// order.
    pub async fn ingest(
        &self,
        items: Vec<(String, HashMap<String, Value>)>,
    ) -> Result<Vec<usize>> {
        if items.is_empty() {
            return Ok(Vec::new());
        }

        let texts: Vec<String> = items.iter().map(|(text, _)| text.clone()).collect();
        let vectors = self.provider.embed_documents(&texts).await?;

        if vectors.len() != texts.len() {
            return Err(ProdSearchError::provider_contract(format!(
                "submitted {} texts, provider returned {} vectors",
                texts.len(),
                vectors.len()
            )));
        }

        let records: Vec<DocumentRecord> = items
            .into_iter()
            .map(|(text, metadata)| DocumentRecord::new(text, metadata))
            .collect();

        let mut store = self.store.write().await;
        let ids = store.append(records, vectors)?;

        info!("Ingested {} documents (total: {})", ids.len(), store.len());
        Ok(ids)
    }

    /// Search for the k most similar documents
    ///
    /// Embeds the query, ranks every stored vector by cosine similarity,
    /// and flattens each match into a result carrying metadata, content,
    /// and score. An empty store yields an empty result, not an error;
    /// provider failures propagate.
    pub async fn search(&self, query: &str, k: usize) -> Result<Vec<SearchResult>> {
        if self.store.read().await.is_empty() {
            return Ok(Vec::new());
        }

        debug!("Searching for: {} (k={})", query, k);
        let query_vector = self.provider.embed_query(query).await?;

        let store = self.store.read().await;
        let ranked = top_k(store.vectors(), &query_vector, k);

        let mut results = Vec::with_capacity(ranked.len());
        for (id, score) in ranked {
            results.push(SearchResult::new(store.get(id)?, score));
        }

        debug!("Search completed - {} results", results.len());
        Ok(results)
    }

    /// Clear the store (non-empty filters are a documented no-op)
    pub async fn clear(&self, filter: Option<&HashMap<String, Value>>) {
        self.store.write().await.clear(filter);
    }

    /// Document count and established embedding dimension
    pub async fn stats(&self) -> (usize, Option<usize>) {
        let store = self.store.read().await;
        (store.len(), store.dim())
    }
}
