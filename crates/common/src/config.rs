use crate::error::ProdSearchError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// ProdSearch application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Ollama API base URL
    pub ollama_base_url: String,

    /// Embedding model name
    pub embedding_model: String,

    /// Path to the product catalog JSON file
    pub catalog_path: PathBuf,

    /// Number of results returned per query
    pub top_k: usize,

    /// Log level
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            ollama_base_url: "http://localhost:11434".to_string(),
            embedding_model: "nomic-embed-text".to_string(),
            catalog_path: PathBuf::from("./catalog.json"),
            top_k: 3,
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    pub fn from_env() -> Result<Self, ProdSearchError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            ollama_base_url: std::env::var("OLLAMA_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:11434".to_string()),
            embedding_model: std::env::var("EMBEDDING_MODEL")
                .unwrap_or_else(|_| "nomic-embed-text".to_string()),
            catalog_path: std::env::var("CATALOG_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("./catalog.json")),
            top_k: std::env::var("TOP_K")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(3),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ProdSearchError> {
        // Validate Ollama URL
        if !self.ollama_base_url.starts_with("http://")
            && !self.ollama_base_url.starts_with("https://") {
            return Err(ProdSearchError::config(
                "Ollama base URL must start with http:// or https://"
            ));
        }

        // Validate embedding model name
        if self.embedding_model.is_empty() {
            return Err(ProdSearchError::config("Embedding model name cannot be empty"));
        }

        // Validate result count
        if self.top_k == 0 {
            return Err(ProdSearchError::config("TOP_K cannot be 0"));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.top_k, 3);
        assert_eq!(config.embedding_model, "nomic-embed-text");
    }

    #[test]
    fn test_validate() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());

        let mut invalid_config = AppConfig::default();
        invalid_config.embedding_model = String::new();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.ollama_base_url = "localhost:11434".to_string();
        assert!(invalid_config.validate().is_err());

        let mut invalid_config = AppConfig::default();
        invalid_config.top_k = 0;
        assert!(invalid_config.validate().is_err());
    }
}
