//! HTTP handlers for the product catalog API.
//!
//! Every handler returns the shared [`Envelope`] shape. Success payloads and
//! failure wording are part of the public contract:
//!
//! | Route                  | Success                                       |
//! |------------------------|-----------------------------------------------|
//! | `GET /products`        | 200, `data` = all products, `count` set       |
//! | `POST /products`       | 201, "Product created successfully"           |
//! | `PUT /products/{id}`   | 200, "Product updated successfully"           |
//! | `DELETE /products/{id}`| 200, "Product deleted successfully", `data={}`|
//!
//! Failures map through [`CatalogError::into_response_with`], with the
//! operation-level context message fixed per route.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::{Value, json};
use uuid::Uuid;

use crate::core::envelope::Envelope;
use crate::core::product::ProductPayload;
use crate::service::CatalogService;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
}

/// `GET /products` — list the full catalog in insertion order.
pub async fn list_products(State(state): State<AppState>) -> Response {
    match state.catalog.list().await {
        Ok(products) => Json(Envelope::list(products)).into_response(),
        Err(err) => err.into_response_with("Server Error"),
    }
}

/// `POST /products` — create a product from a complete payload.
pub async fn create_product(
    State(state): State<AppState>,
    Json(payload): Json<ProductPayload>,
) -> Response {
    match state.catalog.create(payload).await {
        Ok(product) => (
            StatusCode::CREATED,
            Json(Envelope::message_with("Product created successfully", product)),
        )
            .into_response(),
        Err(err) => err.into_response_with("Failed to create product"),
    }
}

/// `PUT /products/{id}` — merge a partial payload onto an existing product.
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<ProductPayload>,
) -> Response {
    match state.catalog.update(id, payload).await {
        Ok(product) => Json(Envelope::message_with(
            "Product updated successfully",
            product,
        ))
        .into_response(),
        Err(err) => err.into_response_with("Failed to update product"),
    }
}

/// `DELETE /products/{id}` — remove a product.
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Response {
    match state.catalog.delete(id).await {
        Ok(()) => Json(Envelope::message_with(
            "Product deleted successfully",
            json!({}),
        ))
        .into_response(),
        Err(err) => err.into_response_with("Failed to delete product"),
    }
}

/// Health check endpoint handler
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": "catalog-rs"
    }))
}
