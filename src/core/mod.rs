//! Core module containing the product model, validation, errors, and the
//! storage contract.

pub mod envelope;
pub mod error;
pub mod product;
pub mod store;
pub mod validation;

pub use envelope::Envelope;
pub use error::CatalogError;
pub use product::{Product, ProductFields, ProductPayload};
pub use store::ProductStore;
