//! ProdSearch vector search
//!
//! In-memory vector store with cosine-similarity search, plus the search
//! engine that ties ingestion and querying to an embedding provider.

pub mod engine;
pub mod similarity;
pub mod store;
pub mod types;

pub use engine::SearchEngine;
pub use store::VectorStore;
pub use types::{DocumentRecord, SearchResult};
