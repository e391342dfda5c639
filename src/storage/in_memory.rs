//! In-memory implementation of ProductStore for testing and development

use crate::core::product::{Product, ProductFields};
use crate::core::store::ProductStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// In-memory product store.
///
/// Useful for testing and development. Uses RwLock for thread-safe access
/// and an `IndexMap` so that `list` preserves insertion order without a
/// per-call sort.
#[derive(Clone)]
pub struct InMemoryProductStore {
    products: Arc<RwLock<IndexMap<Uuid, Product>>>,
}

impl InMemoryProductStore {
    /// Create a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            products: Arc::new(RwLock::new(IndexMap::new())),
        }
    }

    /// Create a store pre-seeded with a small demo catalog.
    ///
    /// Handy for local development so the dashboard has something to show
    /// on first launch.
    pub fn with_demo_products() -> Self {
        let demo = [
            ("Wireless Headphones", 99.99, "Electronics", true),
            ("Ergonomic Office Chair", 199.50, "Furniture", true),
            ("Mechanical Keyboard", 120.00, "Electronics", false),
            ("Ceramic Coffee Mug", 12.99, "Kitchen", true),
        ];

        let mut products = IndexMap::new();
        for (name, price, category, in_stock) in demo {
            let product = Product::new(ProductFields {
                name: name.to_string(),
                price,
                category: category.to_string(),
                in_stock,
            });
            products.insert(product.id, product);
        }

        Self {
            products: Arc::new(RwLock::new(products)),
        }
    }
}

impl Default for InMemoryProductStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn list(&self) -> Result<Vec<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.values().cloned().collect())
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Product>> {
        let products = self
            .products
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(products.get(id).cloned())
    }

    async fn insert(&self, fields: ProductFields) -> Result<Product> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let product = Product::new(fields);
        products.insert(product.id, product.clone());

        Ok(product)
    }

    async fn update(&self, id: &Uuid, fields: ProductFields) -> Result<Product> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let product = products
            .get_mut(id)
            .ok_or_else(|| anyhow!("Product not found: {}", id))?;

        product.apply(fields);

        Ok(product.clone())
    }

    async fn remove(&self, id: &Uuid) -> Result<()> {
        let mut products = self
            .products
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        // shift_remove keeps the remaining records in insertion order
        products.shift_remove(id);

        Ok(())
    }
}
