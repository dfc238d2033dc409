//! Product catalog loading and document text assembly.

pub mod loader;

pub use loader::{load_catalog, CatalogItem};
