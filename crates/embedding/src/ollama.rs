use async_trait::async_trait;
use prodsearch_common::{ProdSearchError, Result};
use reqwest::Client;
use tracing::{debug, info};

use crate::provider::EmbeddingProvider;
use crate::types::{EmbedRequest, EmbedResponse};

/// Ollama embedding API client
///
/// The legacy embeddings endpoint takes a single prompt per request, so
/// `embed_documents` issues one request per text while preserving input
/// order. Callers see a single batch operation either way.
#[derive(Debug, Clone)]
pub struct OllamaClient {
    base_url: String,
    model: String,
    client: Client,
}

impl OllamaClient {
    /// Create new Ollama client
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        let base_url = base_url.into();
        let model = model.into();
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(60))
            .build()
            .map_err(|e| ProdSearchError::provider(format!("Failed to create HTTP client: {}", e)))?;

        info!("Ollama client initialized: {} (model: {})", base_url, model);
        Ok(Self { base_url, model, client })
    }

    /// Test connection to Ollama
    pub async fn test_connection(&self) -> Result<bool> {
        let url = format!("{}/api/tags", self.base_url);

        let response = self.client.get(&url).send().await
            .map_err(|e| ProdSearchError::provider(format!("Failed to connect to Ollama: {}", e)))?;
        Ok(response.status().is_success())
    }

    /// Generate embedding for one text (with retry logic)
    async fn embed_with_retry(&self, text: &str, max_retries: u32) -> Result<Vec<f32>> {
        let url = format!("{}/api/embeddings", self.base_url);

        debug!("Generating embedding - Model: {}, Text length: {}", self.model, text.len());

        let request = EmbedRequest {
            model: self.model.clone(),
            prompt: text.to_string(),
        };

        let mut last_error = None;

        for attempt in 1..=max_retries {
            match self.try_embed(&url, &request).await {
                Ok(embedding) => {
                    debug!("Received embedding - Dimension: {}", embedding.len());
                    return Ok(embedding);
                }
                Err(e) => {
                    last_error = Some(e);
                    if attempt < max_retries {
                        let delay = std::time::Duration::from_secs(2u64.pow(attempt - 1));
                        tracing::warn!(
                            "Embedding request failed (attempt {}/{}). Retrying in {:?}...",
                            attempt,
                            max_retries,
                            delay
                        );
                        tokio::time::sleep(delay).await;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| ProdSearchError::provider("All embedding retries failed")))
    }

    /// Single attempt to generate an embedding
    async fn try_embed(&self, url: &str, request: &EmbedRequest) -> Result<Vec<f32>> {
        let response = self
            .client
            .post(url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ProdSearchError::provider(format!("Failed to send embedding request: {}", e)))?
            .error_for_status()
            .map_err(|e| ProdSearchError::provider(format!("Ollama embedding API error: {}", e)))?;

        let result: EmbedResponse = response.json().await
            .map_err(|e| ProdSearchError::provider(format!("Failed to parse embedding response: {}", e)))?;

        if result.embedding.is_empty() {
            return Err(ProdSearchError::provider("Empty embedding from Ollama"));
        }

        Ok(result.embedding)
    }
}

#[async_trait]
impl EmbeddingProvider for OllamaClient {
    async fn embed_documents(&self, texts: &[String]) -> Result<Vec<Vec<f32>>> {
        let mut vectors = Vec::with_capacity(texts.len());
        for text in texts {
            vectors.push(self.embed_with_retry(text, 3).await?);
        }
        Ok(vectors)
    }

    async fn embed_query(&self, text: &str) -> Result<Vec<f32>> {
        self.embed_with_retry(text, 3).await
    }
}
