//! services/api/src/adapters/catalog.rs
//!
//! Loads the static catalog (categories and products) from JSON files at
//! startup and serves it read-only afterwards. A load failure is fatal;
//! the process does not start without its seed data.

use basket_core::domain::{Category, Product};
use serde::de::DeserializeOwned;
use std::path::Path;

use crate::error::ApiError;

/// The immutable catalog loaded at process start.
pub struct CatalogStore {
    categories: Vec<Category>,
    products: Vec<Product>,
}

impl CatalogStore {
    /// Reads `categories.json` and `products.json` from `dir`.
    pub fn load(dir: &Path) -> Result<Self, ApiError> {
        let categories = read_json(&dir.join("categories.json"))?;
        let products = read_json(&dir.join("products.json"))?;
        Ok(Self {
            categories,
            products,
        })
    }

    /// Builds a catalog from already-parsed collections. Used by tests.
    pub fn from_parts(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories,
            products,
        }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, ApiError> {
    let raw = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_fails_on_missing_directory() {
        let result = CatalogStore::load(Path::new("/nonexistent/catalog"));
        assert!(matches!(result, Err(ApiError::Io(_))));
    }
}
