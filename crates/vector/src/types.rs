use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// A stored document: the text that was embedded plus opaque metadata
///
/// Metadata carries at minimum a `source` key linking back to the
/// originating catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Text content (for display/audit)
    pub content: String,

    /// Arbitrary key-value metadata
    pub metadata: HashMap<String, Value>,
}

impl DocumentRecord {
    pub fn new(content: impl Into<String>, metadata: HashMap<String, Value>) -> Self {
        Self {
            content: content.into(),
            metadata,
        }
    }
}

/// Search result: a document flattened together with its similarity score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Document metadata
    pub metadata: HashMap<String, Value>,

    /// Document content
    pub content: String,

    /// Cosine similarity score
    pub score: f32,
}

impl SearchResult {
    pub fn new(record: &DocumentRecord, score: f32) -> Self {
        Self {
            metadata: record.metadata.clone(),
            content: record.content.clone(),
            score,
        }
    }
}
