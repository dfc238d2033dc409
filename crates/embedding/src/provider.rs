use async_trait::async_trait;
use prodsearch_common::Result;

/// Common trait for embedding providers
///
/// Both operations must return vectors of the same dimension; the vector
/// store enforces this at append time.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embed a batch of documents, order-preserving, one vector per text
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>>;

    /// Embed a single query string
    async fn embed_query(&self, text: &str) -> Result<Vec<f32>>;
}
