//! Typed error handling for catalog operations.
//!
//! [`CatalogError`] is the error type returned by the service layer. Each
//! variant maps to a fixed HTTP status and a fixed failure envelope shape, so
//! handlers stay thin and the wire contract lives in one place.
//!
//! # Variants and their HTTP mapping
//!
//! - [`CatalogError::MissingFields`] — 400, create body missing required fields
//! - [`CatalogError::Invalid`] — 400, a supplied field failed a constraint
//! - [`CatalogError::NotFound`] — 404, no record with the requested id
//! - [`CatalogError::Store`] — 500, the storage backend failed

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::Value;
use thiserror::Error;

use crate::core::envelope::Envelope;

/// Errors produced by catalog operations.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// A create body left out one or more required fields.
    #[error("Please provide all required fields: name, price, category, inStock")]
    MissingFields,

    /// A supplied field value failed validation; the string names the rule.
    #[error("{0}")]
    Invalid(String),

    /// No product exists with the requested identifier.
    #[error("Product not found")]
    NotFound,

    /// The storage backend failed.
    #[error(transparent)]
    Store(#[from] anyhow::Error),
}

impl CatalogError {
    /// The HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            CatalogError::MissingFields => StatusCode::BAD_REQUEST,
            CatalogError::Invalid(_) => StatusCode::BAD_REQUEST,
            CatalogError::NotFound => StatusCode::NOT_FOUND,
            CatalogError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The failure envelope for this error.
    ///
    /// `context` is the operation-level message used when a field value is
    /// rejected, e.g. `"Failed to create product"`; the variants with fixed
    /// wording ignore it. Store failures always report `"Server Error"` with
    /// the backend detail in `error`.
    pub fn to_envelope(&self, context: &str) -> Envelope<Value> {
        match self {
            CatalogError::MissingFields => Envelope::failure(self.to_string()),
            CatalogError::Invalid(reason) => Envelope::failure_with(context, reason.clone()),
            CatalogError::NotFound => Envelope::failure(self.to_string()),
            CatalogError::Store(err) => Envelope::failure_with("Server Error", err.to_string()),
        }
    }

    /// Build the full HTTP response (status + failure envelope).
    ///
    /// Store failures are logged here so every route reports them the same
    /// way; the other variants are ordinary client errors and stay quiet.
    pub fn into_response_with(self, context: &str) -> Response {
        if let CatalogError::Store(err) = &self {
            tracing::error!(error = %err, context, "storage failure");
        }
        let status = self.status_code();
        let body = Json(self.to_envelope(context));
        (status, body).into_response()
    }
}
