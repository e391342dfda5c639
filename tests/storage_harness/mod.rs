//! Shared test harness for product storage backend testing
//!
//! Provides field builders and the `product_store_tests!` macro, which
//! generates a full `ProductStore` conformance suite against any backend
//! factory.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! product_store_tests!(InMemoryProductStore::new());
//! ```

#![allow(dead_code)]

#[macro_use]
mod product_store_tests;

use catalog::core::product::ProductFields;

/// Build product fields with every value explicit.
pub fn fields(name: &str, price: f64, category: &str, in_stock: bool) -> ProductFields {
    ProductFields {
        name: name.to_string(),
        price,
        category: category.to_string(),
        in_stock,
    }
}

/// Build product fields varying only the name, for tests that care about
/// identity and ordering rather than values.
pub fn named_fields(name: &str) -> ProductFields {
    fields(name, 9.99, "Electronics", true)
}
