//! HTTP access to the catalog API for the dashboard.
//!
//! [`CatalogApi`] is the seam the dashboard controller talks through; tests
//! substitute scripted implementations, production uses [`HttpCatalogApi`]
//! over `reqwest`. The client decodes the shared [`Envelope`] and turns both
//! transport failures and `success: false` bodies into [`ApiError`] values,
//! so the controller never inspects raw HTTP.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use thiserror::Error;
use uuid::Uuid;

use crate::core::envelope::Envelope;
use crate::core::product::{Product, ProductPayload};

/// Errors surfaced by catalog API calls.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service answered with a failure envelope or an unexpected status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// The service could not be reached or its response could not be read.
    #[error("could not reach the catalog service: {0}")]
    Network(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Network(err.to_string())
    }
}

/// The four catalog operations the dashboard performs.
#[async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetch the full product list.
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError>;

    /// Create a product; returns the stored record.
    async fn create_product(&self, payload: ProductPayload) -> Result<Product, ApiError>;

    /// Update a product; returns the stored record after the merge.
    async fn update_product(&self, id: Uuid, payload: ProductPayload)
    -> Result<Product, ApiError>;

    /// Delete a product.
    async fn delete_product(&self, id: Uuid) -> Result<(), ApiError>;
}

/// `reqwest`-backed implementation of [`CatalogApi`].
///
/// # Example
///
/// ```rust,no_run
/// use catalog::dashboard::client::{CatalogApi, HttpCatalogApi};
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let api = HttpCatalogApi::new("http://127.0.0.1:5001");
/// let products = api.fetch_products().await?;
/// println!("{} products", products.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct HttpCatalogApi {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalogApi {
    /// Create a client against the given base URL, e.g.
    /// `http://127.0.0.1:5001`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Decode a response into an envelope, mapping failure envelopes and
    /// non-success statuses to [`ApiError::Api`].
    async fn read_envelope<T: DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<Envelope<T>, ApiError> {
        let status = response.status();

        if !status.is_success() {
            // Failure bodies still carry the envelope; prefer its wording.
            let message = response
                .json::<Envelope<serde_json::Value>>()
                .await
                .ok()
                .and_then(|envelope| envelope.message.or(envelope.error))
                .unwrap_or_else(|| format!("unexpected status {status}"));
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope = response.json::<Envelope<T>>().await?;
        if !envelope.success {
            let message = envelope
                .message
                .or(envelope.error)
                .unwrap_or_else(|| "request failed".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(envelope)
    }

    fn require_data<T>(envelope: Envelope<T>) -> Result<T, ApiError> {
        envelope.data.ok_or(ApiError::Api {
            status: 200,
            message: "response missing data".to_string(),
        })
    }
}

#[async_trait]
impl CatalogApi for HttpCatalogApi {
    async fn fetch_products(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.client.get(self.url("/products")).send().await?;
        let envelope = Self::read_envelope::<Vec<Product>>(response).await?;
        Ok(envelope.data.unwrap_or_default())
    }

    async fn create_product(&self, payload: ProductPayload) -> Result<Product, ApiError> {
        let response = self
            .client
            .post(self.url("/products"))
            .json(&payload)
            .send()
            .await?;
        let envelope = Self::read_envelope::<Product>(response).await?;
        Self::require_data(envelope)
    }

    async fn update_product(
        &self,
        id: Uuid,
        payload: ProductPayload,
    ) -> Result<Product, ApiError> {
        let response = self
            .client
            .put(self.url(&format!("/products/{id}")))
            .json(&payload)
            .send()
            .await?;
        let envelope = Self::read_envelope::<Product>(response).await?;
        Self::require_data(envelope)
    }

    async fn delete_product(&self, id: Uuid) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("/products/{id}")))
            .send()
            .await?;
        Self::read_envelope::<serde_json::Value>(response).await?;
        Ok(())
    }
}
