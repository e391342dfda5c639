//! The storage abstraction for product records.
//!
//! [`ProductStore`] is the seam between the catalog service and a concrete
//! backend. Two implementations ship with the crate:
//!
//! - `InMemoryProductStore` — default, for development and tests
//! - `MongoProductStore` — behind the `mongodb_backend` feature flag
//!
//! The trait speaks in validated [`ProductFields`]; identifier and timestamp
//! assignment is the store's job, so a backend is the single writer of
//! everything a client cannot supply. Errors are `anyhow` at this layer and
//! are classified (404 vs 500) by the service above.

use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

use crate::core::product::{Product, ProductFields};

/// Persistence contract for catalog products.
///
/// # Ordering
///
/// `list` returns records in insertion order, oldest first. Backends that
/// have no natural insertion order must sort by creation time.
///
/// # Example
///
/// ```rust
/// use catalog::core::product::ProductFields;
/// use catalog::core::store::ProductStore;
/// use catalog::storage::InMemoryProductStore;
///
/// # async fn demo() -> anyhow::Result<()> {
/// let store = InMemoryProductStore::new();
/// let stored = store
///     .insert(ProductFields {
///         name: "Mechanical Keyboard".to_string(),
///         price: 120.0,
///         category: "Electronics".to_string(),
///         in_stock: false,
///     })
///     .await?;
/// assert!(store.get(&stored.id).await?.is_some());
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// List all products in insertion order.
    async fn list(&self) -> Result<Vec<Product>>;

    /// Fetch a product by id. `Ok(None)` if it does not exist.
    async fn get(&self, id: &Uuid) -> Result<Option<Product>>;

    /// Persist a new product, assigning its id and timestamps.
    async fn insert(&self, fields: ProductFields) -> Result<Product>;

    /// Replace the business fields of an existing product and bump its
    /// `updated_at`. Errors if the id does not exist.
    async fn update(&self, id: &Uuid, fields: ProductFields) -> Result<Product>;

    /// Delete a product by id. Succeeds silently if it does not exist
    /// (idempotent).
    async fn remove(&self, id: &Uuid) -> Result<()>;
}
