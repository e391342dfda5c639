//! Headless core for the catalog admin dashboard.
//!
//! This module contains everything a frontend needs short of rendering:
//!
//! - [`controller`] — the [`Dashboard`](controller::Dashboard) state machine
//!   (load, edit, submit, refetch-after-mutation)
//! - [`projection`] — pure derivation of visible rows from view controls
//! - [`categories`] — durable category options for the product form
//! - [`client`] — the [`CatalogApi`](client::CatalogApi) seam and its
//!   `reqwest` implementation

pub mod categories;
pub mod client;
pub mod controller;
pub mod projection;

pub use categories::{CategoryStore, DEFAULT_CATEGORIES};
pub use client::{ApiError, CatalogApi, HttpCatalogApi};
pub use controller::{
    Dashboard, DashboardError, LOAD_ERROR_MESSAGE, LoadState, ProductForm, RefreshTicket,
};
pub use projection::{CategoryFilter, ProductView, SortOrder, category_options};
