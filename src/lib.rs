//! # catalog-rs
//!
//! A product catalog service and a headless admin dashboard core, in one
//! crate.
//!
//! ## What's inside
//!
//! - **REST API**: CRUD over `/products` with a uniform response envelope
//!   (`success` / `message` / `data` / `count` / `error`)
//! - **Swappable storage**: in-memory by default, MongoDB behind the
//!   `mongodb_backend` feature flag, both conforming to one `ProductStore`
//!   contract
//! - **Merge-style updates**: `PUT` bodies may be partial; omitted fields
//!   keep their stored values
//! - **Dashboard core**: a frontend-agnostic controller with load/edit/submit
//!   state, refetch-after-mutation, stale-response discard, pure list
//!   projection (search, category filter, price sort), and durable category
//!   options
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use catalog::prelude::*;
//! use std::sync::Arc;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let store = Arc::new(InMemoryProductStore::with_demo_products());
//!     let service = CatalogService::new(store);
//!     catalog::server::serve("127.0.0.1:5001", service).await
//! }
//! ```
//!
//! Driving the dashboard against a running server:
//!
//! ```rust,no_run
//! use catalog::prelude::*;
//!
//! # async fn demo() {
//! let api = HttpCatalogApi::new("http://127.0.0.1:5001");
//! let mut dashboard = Dashboard::new(api, CategoryStore::in_memory());
//!
//! dashboard.refresh().await;
//! let view = ProductView {
//!     search: "head".to_string(),
//!     ..ProductView::default()
//! };
//! for product in dashboard.visible(&view) {
//!     println!("{} — {:.2}", product.name, product.price);
//! }
//! # }
//! ```

pub mod config;
pub mod core;
pub mod dashboard;
pub mod server;
pub mod service;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        envelope::Envelope,
        error::CatalogError,
        product::{Product, ProductFields, ProductPayload},
        store::ProductStore,
    };

    // === Service & Server ===
    pub use crate::server::{AppState, build_router};
    pub use crate::service::CatalogService;

    // === Storage ===
    pub use crate::storage::InMemoryProductStore;
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::MongoProductStore;

    // === Dashboard ===
    pub use crate::dashboard::{
        ApiError, CatalogApi, CategoryFilter, CategoryStore, Dashboard, DashboardError,
        HttpCatalogApi, LoadState, ProductForm, ProductView, SortOrder,
    };

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
