//! `ProductStore` conformance suite run against the in-memory backend.
//!
//! The whole suite comes from `product_store_tests!`; a fresh store per test
//! keeps cases independent.

#[macro_use]
mod storage_harness;

use catalog::storage::InMemoryProductStore;
use storage_harness::*;

product_store_tests!(InMemoryProductStore::new());
