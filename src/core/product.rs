//! The product record and its wire representations.
//!
//! A [`Product`] is the canonical stored record. Client-supplied bodies are
//! deserialized into a [`ProductPayload`] where every business field is
//! optional; validation decides what a missing field means for the operation
//! at hand (reject on create, keep the stored value on update).
//!
//! # Wire format
//!
//! JSON field names follow the public API convention: `inStock`, `createdAt`
//! and `updatedAt` are camelCase, everything else is a single lowercase word.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A stored catalog product.
///
/// The identifier and both timestamps are assigned by the storage backend;
/// callers never supply them. `updated_at` moves on every successful update,
/// `created_at` never changes after insert.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub price: f64,
    pub category: String,
    #[serde(rename = "inStock")]
    pub in_stock: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl Product {
    /// Build a fresh record from validated fields, assigning a new UUID and
    /// setting both timestamps to now.
    pub fn new(fields: ProductFields) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: fields.name,
            price: fields.price,
            category: fields.category,
            in_stock: fields.in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    /// Copy out the business fields (everything a client may write).
    pub fn fields(&self) -> ProductFields {
        ProductFields {
            name: self.name.clone(),
            price: self.price,
            category: self.category.clone(),
            in_stock: self.in_stock,
        }
    }

    /// Overwrite the business fields and bump `updated_at`.
    ///
    /// `id` and `created_at` are left untouched.
    pub fn apply(&mut self, fields: ProductFields) {
        self.name = fields.name;
        self.price = fields.price;
        self.category = fields.category;
        self.in_stock = fields.in_stock;
        self.touch();
    }

    /// Bump `updated_at` to now.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// The validated, complete set of writable product fields.
///
/// Produced by validation (see [`crate::core::validation`]); storage backends
/// accept this rather than raw payloads so that nothing unvalidated can reach
/// a store.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductFields {
    pub name: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

/// A client-supplied product body, as sent to create and update endpoints.
///
/// Every field is optional: create requires all four to be present, update
/// treats a missing field as "keep the stored value". Unknown JSON keys are
/// ignored. `None` fields are omitted when the payload is serialized, so a
/// partial update sends only what it intends to change.
///
/// # Example
///
/// ```rust
/// use catalog::core::product::ProductPayload;
///
/// let patch = ProductPayload {
///     price: Some(150.0),
///     ..ProductPayload::default()
/// };
/// assert!(patch.name.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductPayload {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "inStock", skip_serializing_if = "Option::is_none")]
    pub in_stock: Option<bool>,
}

impl ProductPayload {
    /// A payload with all four fields present, as a product form submits it.
    pub fn full(name: &str, price: f64, category: &str, in_stock: bool) -> Self {
        Self {
            name: Some(name.to_string()),
            price: Some(price),
            category: Some(category.to_string()),
            in_stock: Some(in_stock),
        }
    }
}
