//! Embedding provider abstraction and the Ollama HTTP implementation.

pub mod ollama;
pub mod provider;
pub mod types;

pub use ollama::OllamaClient;
pub use provider::EmbeddingProvider;
