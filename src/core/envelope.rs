//! The JSON response envelope shared by every catalog endpoint.
//!
//! Every response body, success or failure, has the same outer shape:
//!
//! ```json
//! { "success": true, "message": "...", "data": ..., "count": 3, "error": "..." }
//! ```
//!
//! `success` is always present; the other four fields are emitted only when
//! they carry a value. List responses set `count` to the number of returned
//! records, mutation responses set `message`, failures set `message` and
//! sometimes `error` with backend detail. Clients branch on `success`, not on
//! HTTP status alone.

use serde::{Deserialize, Serialize};

/// Uniform response wrapper for the catalog API.
///
/// Generic over the payload so list endpoints can carry `Vec<Product>`,
/// single-record endpoints a `Product`, and delete an empty object.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> Envelope<T> {
    /// Success with a payload and no message (used by list, with [`Self::counted`]).
    pub fn data(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
            count: None,
            error: None,
        }
    }

    /// Success with a human-readable message and a payload (create/update/delete).
    pub fn message_with(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
            data: Some(data),
            count: None,
            error: None,
        }
    }

    /// Failure with a message only.
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            count: None,
            error: None,
        }
    }

    /// Failure with a message and backend error detail.
    pub fn failure_with(message: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: Some(message.into()),
            data: None,
            count: None,
            error: Some(error.into()),
        }
    }

    /// Set `count`, consuming and returning the envelope.
    pub fn counted(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }
}

impl<T> Envelope<Vec<T>> {
    /// A list response: payload plus `count` set to its length.
    pub fn list(data: Vec<T>) -> Self {
        let count = data.len();
        Self::data(data).counted(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    #[test]
    fn list_envelope_carries_count() {
        let envelope = Envelope::list(vec![1, 2, 3]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            json!({ "success": true, "count": 3, "data": [1, 2, 3] })
        );
    }

    #[test]
    fn empty_list_has_count_zero() {
        let envelope: Envelope<Vec<i32>> = Envelope::list(vec![]);
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["count"], json!(0));
        assert_eq!(json["data"], json!([]));
    }

    #[test]
    fn absent_fields_are_omitted_not_null() {
        let envelope: Envelope<Value> = Envelope::failure("Product not found");
        let json = serde_json::to_string(&envelope).unwrap();
        assert_eq!(
            json,
            r#"{"success":false,"message":"Product not found"}"#
        );
    }

    #[test]
    fn failure_with_detail_sets_error() {
        let envelope: Envelope<Value> =
            Envelope::failure_with("Server Error", "connection refused");
        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(
            json,
            json!({
                "success": false,
                "message": "Server Error",
                "error": "connection refused"
            })
        );
    }

    #[test]
    fn message_envelope_roundtrips() {
        let envelope = Envelope::message_with("Product created successfully", json!({"id": 1}));
        let text = serde_json::to_string(&envelope).unwrap();
        let back: Envelope<Value> = serde_json::from_str(&text).unwrap();
        assert_eq!(back, envelope);
    }

    #[test]
    fn deserializes_with_missing_optional_fields() {
        let envelope: Envelope<Vec<Value>> =
            serde_json::from_str(r#"{"success":true,"count":0,"data":[]}"#).unwrap();
        assert!(envelope.success);
        assert_eq!(envelope.count, Some(0));
        assert!(envelope.message.is_none());
        assert!(envelope.error.is_none());
    }
}
