//! The catalog service: validation, lookup, and store orchestration.
//!
//! [`CatalogService`] sits between the HTTP handlers and a [`ProductStore`].
//! It owns the write rules — create requires a complete payload, update
//! merges a partial payload onto the stored record, both mutations verify
//! existence before touching the store — and classifies failures into
//! [`CatalogError`] variants so handlers can map them onto the wire contract.
//!
//! The service holds its store behind `Arc<dyn ProductStore>` and is `Clone`,
//! so one instance can be shared across the router and background tasks.

use std::sync::Arc;

use uuid::Uuid;

use crate::core::error::CatalogError;
use crate::core::product::{Product, ProductPayload};
use crate::core::store::ProductStore;
use crate::core::validation;

/// Orchestrates catalog reads and writes over a pluggable store.
#[derive(Clone)]
pub struct CatalogService {
    store: Arc<dyn ProductStore>,
}

impl CatalogService {
    /// Create a service over the given store.
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// List every product in insertion order.
    pub async fn list(&self) -> Result<Vec<Product>, CatalogError> {
        Ok(self.store.list().await?)
    }

    /// Create a product from a client payload.
    ///
    /// The payload must carry all four business fields; the store assigns
    /// the identifier and timestamps.
    pub async fn create(&self, payload: ProductPayload) -> Result<Product, CatalogError> {
        let fields = validation::validate_new(payload)?;
        Ok(self.store.insert(fields).await?)
    }

    /// Update an existing product from a partial client payload.
    ///
    /// Fields the payload leaves out keep their stored values. Fails with
    /// [`CatalogError::NotFound`] before any validation if the id is unknown,
    /// so an update to a missing record never reports a field error.
    pub async fn update(&self, id: Uuid, payload: ProductPayload) -> Result<Product, CatalogError> {
        let existing = self.store.get(&id).await?.ok_or(CatalogError::NotFound)?;

        let fields = validation::validate_patch(existing.fields(), payload)?;
        Ok(self.store.update(&id, fields).await?)
    }

    /// Delete a product by id.
    ///
    /// Fails with [`CatalogError::NotFound`] if the id is unknown; the
    /// store-level remove itself is idempotent.
    pub async fn delete(&self, id: Uuid) -> Result<(), CatalogError> {
        self.store.get(&id).await?.ok_or(CatalogError::NotFound)?;

        Ok(self.store.remove(&id).await?)
    }
}
