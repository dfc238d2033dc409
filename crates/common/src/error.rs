/// ProdSearch error types
#[derive(Debug, thiserror::Error)]
pub enum ProdSearchError {
    /// Vector length inconsistent with the store's established dimension
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// Document identifier out of range
    #[error("not found: {0}")]
    NotFound(String),

    /// Embedding provider returned a different number of vectors than
    /// texts submitted
    #[error("provider contract violation: {0}")]
    ProviderContract(String),

    /// Embedding provider failure (network, quota, malformed input)
    #[error("embedding provider error: {0}")]
    Provider(String),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Catalog loading error
    #[error("catalog error: {0}")]
    Catalog(String),

    /// Invalid input
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General error (anyhow integration)
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl ProdSearchError {
    /// Create not found error
    pub fn not_found<S: Into<String>>(msg: S) -> Self {
        Self::NotFound(msg.into())
    }

    /// Create provider contract violation error
    pub fn provider_contract<S: Into<String>>(msg: S) -> Self {
        Self::ProviderContract(msg.into())
    }

    /// Create embedding provider error
    pub fn provider<S: Into<String>>(msg: S) -> Self {
        Self::Provider(msg.into())
    }

    /// Create config error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }

    /// Create catalog error
    pub fn catalog<S: Into<String>>(msg: S) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create invalid input error
    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        Self::InvalidInput(msg.into())
    }
}
