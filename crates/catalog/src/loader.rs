use prodsearch_common::{ProdSearchError, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::HashMap;
use std::path::Path;
use tracing::info;

/// One product entry from the catalog file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Catalog identifier (carried into document metadata as `source`)
    pub id: String,

    /// Product name
    pub name: String,

    /// Product description
    pub description: String,

    /// Price; kept as a JSON number so integer prices render without a
    /// trailing `.0`
    pub price: Number,
}

impl CatalogItem {
    /// Assemble the text that gets embedded
    ///
    /// The `"<name> - <description> - <price>"` convention is contractual;
    /// search behavior depends on it.
    pub fn content(&self) -> String {
        format!("{} - {} - {}", self.name, self.description, self.price)
    }

    /// Document metadata: the `source` identifier linking back to this item
    pub fn metadata(&self) -> HashMap<String, Value> {
        let mut metadata = HashMap::new();
        metadata.insert("source".to_string(), Value::String(self.id.clone()));
        metadata
    }

    /// (text, metadata) pair as the ingestion pipeline expects it
    pub fn into_document(self) -> (String, HashMap<String, Value>) {
        let content = self.content();
        let metadata = self.metadata();
        (content, metadata)
    }
}

/// Load the catalog from a JSON array file
pub fn load_catalog(path: &Path) -> Result<Vec<CatalogItem>> {
    let data = std::fs::read_to_string(path).map_err(|e| {
        ProdSearchError::catalog(format!("Failed to read {}: {}", path.display(), e))
    })?;

    let items: Vec<CatalogItem> = serde_json::from_str(&data).map_err(|e| {
        ProdSearchError::catalog(format!("Failed to parse {}: {}", path.display(), e))
    })?;

    info!("Loaded {} catalog items from {}", items.len(), path.display());
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_catalog_array() {
        let data = r#"[
            {"id": "p1", "name": "Watch", "description": "Steel watch", "price": 500},
            {"id": "p2", "name": "Bag", "description": "Leather bag", "price": 120.5}
        ]"#;

        let items: Vec<CatalogItem> = serde_json::from_str(data).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].id, "p1");
        assert_eq!(items[1].name, "Bag");
    }

    #[test]
    fn test_content_assembly_integer_price() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id": "p1", "name": "Watch", "description": "Steel watch", "price": 500}"#,
        )
        .unwrap();
        assert_eq!(item.content(), "Watch - Steel watch - 500");
    }

    #[test]
    fn test_content_assembly_float_price() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id": "p2", "name": "Bag", "description": "Leather bag", "price": 120.5}"#,
        )
        .unwrap();
        assert_eq!(item.content(), "Bag - Leather bag - 120.5");
    }

    #[test]
    fn test_metadata_carries_source() {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id": "p1", "name": "Watch", "description": "Steel watch", "price": 500}"#,
        )
        .unwrap();
        assert_eq!(item.metadata()["source"], json!("p1"));
    }

    #[test]
    fn test_load_catalog_missing_file() {
        let err = load_catalog(Path::new("/nonexistent/catalog.json")).unwrap_err();
        assert!(matches!(err, ProdSearchError::Catalog(_)));
    }
}
