// SPDX-License-Identifier: Apache-2.0

use rosewood_model::RecordId;
use serde::Serialize;
use serde_json::{json, Value};
use std::fmt;

/// Stable machine-readable error codes. Variant names serialize verbatim, so
/// renaming one is a wire-contract break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ApiErrorCode {
    ValidationFailed,
    InvalidParameter,
    NotFound,
    Internal,
}

/// One field-level violation inside a `ValidationFailed` error.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub value: Value,
}

impl FieldViolation {
    #[must_use]
    pub fn new(field: &str, reason: impl Into<String>, value: Value) -> Self {
        Self {
            field: field.to_string(),
            reason: reason.into(),
            value,
        }
    }
}

/// Error payload; the HTTP layer wraps it in an `{"error": ...}` envelope
/// and derives the status code from `code`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiError {
    pub code: ApiErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Value::is_null")]
    pub details: Value,
}

impl ApiError {
    #[must_use]
    pub fn new(code: ApiErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Value::Null,
        }
    }

    #[must_use]
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// `resource` is the display name used in the message ("Guest").
    #[must_use]
    pub fn not_found(resource: &str, id: RecordId) -> Self {
        Self::new(ApiErrorCode::NotFound, format!("{resource} not found"))
            .with_details(json!({ "id": id }))
    }

    #[must_use]
    pub fn invalid_param(name: &str, value: &str) -> Self {
        Self::new(
            ApiErrorCode::InvalidParameter,
            format!("invalid value for {name}"),
        )
        .with_details(json!({ "parameter": name, "value": value }))
    }

    /// Carries every violation found in the payload, never just the first.
    #[must_use]
    pub fn validation_failed(message: impl Into<String>, violations: Vec<FieldViolation>) -> Self {
        Self::new(ApiErrorCode::ValidationFailed, message)
            .with_details(json!({ "field_errors": violations }))
    }

    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ApiErrorCode::Internal, message)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}: {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_as_variant_names() {
        let value = serde_json::to_value(ApiErrorCode::ValidationFailed).expect("serialize code");
        assert_eq!(value, "ValidationFailed");
    }

    #[test]
    fn not_found_carries_the_id_in_details() {
        let err = ApiError::not_found("Guest", 42);
        let value = serde_json::to_value(&err).expect("serialize error");
        assert_eq!(value["code"], "NotFound");
        assert_eq!(value["message"], "Guest not found");
        assert_eq!(value["details"]["id"], 42);
    }

    #[test]
    fn validation_failed_lists_field_errors() {
        let err = ApiError::validation_failed(
            "Invalid guest data",
            vec![FieldViolation::new("name", "is required", Value::Null)],
        );
        let value = serde_json::to_value(&err).expect("serialize error");
        let field_errors = value["details"]["field_errors"]
            .as_array()
            .expect("field_errors array");
        assert_eq!(field_errors.len(), 1);
        assert_eq!(field_errors[0]["field"], "name");
        assert_eq!(field_errors[0]["reason"], "is required");
        // A null offending value is omitted rather than serialized.
        assert!(field_errors[0].get("value").is_none());
    }

    #[test]
    fn plain_errors_omit_details() {
        let value =
            serde_json::to_value(ApiError::internal("Failed to create guest")).expect("serialize");
        assert!(value.get("details").is_none());
    }
}
