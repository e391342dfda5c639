//! MongoDB-backed [`MongoProductStore`], compiled only with the
//! `mongodb_backend` feature:
//!
//! ```toml
//! [dependencies]
//! catalog-rs = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! All products share one `products` collection, and `list` sorts on
//! `createdAt` ascending so callers see the same insertion order the
//! in-memory backend gives them.
//!
//! Documents go through a `serde_json::Value` intermediate on both paths,
//! which keeps ids and timestamps as plain strings in BSON (uuid and
//! RFC 3339 text) instead of driver-specific types, with the domain `id`
//! living in Mongo's `_id` slot.

use crate::core::product::{Product, ProductFields};
use crate::core::store::ProductStore;
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::Database;
use mongodb::bson::{Bson, Document, doc};
use uuid::Uuid;

/// Name of the MongoDB collection holding product documents.
pub const PRODUCTS_COLLECTION: &str = "products";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// JSON object → BSON document, moving `id` into Mongo's `_id` slot.
fn json_to_document(json: serde_json::Value) -> Result<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(anyhow!("Expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    Ok(doc)
}

/// BSON document → JSON object, moving `_id` back to the domain's `id`.
fn document_to_json(mut doc: Document) -> serde_json::Value {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    Bson::Document(doc).into_relaxed_extjson()
}

/// Query key for a product id; ids are stored as plain strings.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

// ---------------------------------------------------------------------------
// MongoProductStore
// ---------------------------------------------------------------------------

/// Product storage on a MongoDB database.
///
/// # Example
///
/// ```rust,ignore
/// use catalog::storage::MongoProductStore;
/// use mongodb::Client;
///
/// let client = Client::with_uri_str("mongodb://127.0.0.1:27017").await?;
/// let store = MongoProductStore::new(client.database("catalog"));
/// let stored = store.insert(fields).await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoProductStore {
    database: Database,
}

impl MongoProductStore {
    pub fn new(database: Database) -> Self {
        Self { database }
    }

    /// The database this store writes to.
    pub fn database(&self) -> &Database {
        &self.database
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(PRODUCTS_COLLECTION)
    }

    fn product_to_document(product: &Product) -> Result<Document> {
        let json = serde_json::to_value(product)
            .map_err(|e| anyhow!("Failed to serialize product: {}", e))?;
        json_to_document(json)
    }

    fn document_to_product(doc: Document) -> Result<Product> {
        let json = document_to_json(doc);
        serde_json::from_value(json)
            .map_err(|e| anyhow!("Failed to deserialize product from document: {}", e))
    }
}

#[async_trait]
impl ProductStore for MongoProductStore {
    /// List all products, ordered by creation time (oldest first).
    async fn list(&self) -> Result<Vec<Product>> {
        let cursor = self
            .collection()
            .find(doc! {})
            .sort(doc! { "createdAt": 1 })
            .await
            .map_err(|e| anyhow!("Failed to list products: {}", e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect products: {}", e))?;

        docs.into_iter().map(Self::document_to_product).collect()
    }

    /// Fetch a product by UUID.
    ///
    /// Returns `Ok(None)` if the product does not exist.
    async fn get(&self, id: &Uuid) -> Result<Option<Product>> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| anyhow!("Failed to get product: {}", e))?;

        match doc {
            Some(d) => Ok(Some(Self::document_to_product(d)?)),
            None => Ok(None),
        }
    }

    /// Insert a new product into the collection.
    ///
    /// Inserts the document and reads it back to return the stored version.
    async fn insert(&self, fields: ProductFields) -> Result<Product> {
        let product = Product::new(fields);
        let doc = Self::product_to_document(&product)?;
        let id_bson = uuid_bson(&product.id);

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to insert product: {}", e))?;

        // Read back the inserted product
        let stored = self
            .collection()
            .find_one(doc! { "_id": id_bson })
            .await
            .map_err(|e| anyhow!("Failed to read back inserted product: {}", e))?
            .ok_or_else(|| anyhow!("Product not found after insert"))?;

        Self::document_to_product(stored)
    }

    /// Update an existing product's fields.
    ///
    /// Returns `Err` if the product does not exist (no document matched).
    async fn update(&self, id: &Uuid, fields: ProductFields) -> Result<Product> {
        let mut product = self
            .get(id)
            .await?
            .ok_or_else(|| anyhow!("Product not found: {}", id))?;

        product.apply(fields);

        let doc = Self::product_to_document(&product)?;
        let result = self
            .collection()
            .replace_one(doc! { "_id": uuid_bson(id) }, doc)
            .await
            .map_err(|e| anyhow!("Failed to update product: {}", e))?;

        if result.matched_count == 0 {
            return Err(anyhow!("Product not found: {}", id));
        }

        Ok(product)
    }

    /// Delete a product by UUID.
    ///
    /// Silently succeeds if the product does not exist (idempotent).
    async fn remove(&self, id: &Uuid) -> Result<()> {
        self.collection()
            .delete_one(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| anyhow!("Failed to delete product: {}", e))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_to_document_renames_id() {
        let json = json!({ "id": "abc-123", "name": "Mug" });
        let doc = json_to_document(json).unwrap();

        assert_eq!(doc.get_str("_id").unwrap(), "abc-123");
        assert!(doc.get("id").is_none());
        assert_eq!(doc.get_str("name").unwrap(), "Mug");
    }

    #[test]
    fn document_to_json_restores_id() {
        let doc = doc! { "_id": "abc-123", "name": "Mug" };
        let json = document_to_json(doc);

        assert_eq!(json["id"], "abc-123");
        assert!(json.get("_id").is_none());
    }

    #[test]
    fn json_to_document_rejects_non_objects() {
        assert!(json_to_document(json!("just a string")).is_err());
    }

    #[test]
    fn product_roundtrips_through_document() {
        let product = Product::new(ProductFields {
            name: "Mechanical Keyboard".to_string(),
            price: 120.0,
            category: "Electronics".to_string(),
            in_stock: false,
        });

        let doc = MongoProductStore::product_to_document(&product).unwrap();
        assert!(doc.get("_id").is_some());
        assert!(doc.get("createdAt").is_some());

        let back = MongoProductStore::document_to_product(doc).unwrap();
        assert_eq!(back, product);
    }
}
