// SPDX-License-Identifier: Apache-2.0

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use rosewood_api::{ApiError, ApiErrorCode};
use rosewood_model::RecordId;
use serde::Serialize;
use serde_json::{json, Value};

pub(crate) fn api_error_status(code: ApiErrorCode) -> StatusCode {
    match code {
        ApiErrorCode::ValidationFailed | ApiErrorCode::InvalidParameter => StatusCode::BAD_REQUEST,
        ApiErrorCode::NotFound => StatusCode::NOT_FOUND,
        ApiErrorCode::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub(crate) fn api_error_response(err: &ApiError) -> Response {
    (api_error_status(err.code), Json(json!({ "error": err }))).into_response()
}

pub(crate) fn ok_json<T: Serialize>(status: StatusCode, body: &T) -> Response {
    (status, Json(body)).into_response()
}

/// Path ids must be plain unsigned integers; anything else is a caller bug
/// reported as 400, never a phantom 404.
pub(crate) fn parse_record_id(raw: &str) -> Result<RecordId, ApiError> {
    raw.parse::<RecordId>()
        .map_err(|_| ApiError::invalid_param("id", raw))
}

pub(crate) fn parse_json_body(body: &[u8]) -> Result<Value, ApiError> {
    serde_json::from_slice::<Value>(body).map_err(|_| {
        ApiError::new(
            ApiErrorCode::ValidationFailed,
            "request body is not valid JSON",
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_mapping_matches_the_error_taxonomy() {
        assert_eq!(
            api_error_status(ApiErrorCode::ValidationFailed),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api_error_status(ApiErrorCode::InvalidParameter),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(api_error_status(ApiErrorCode::NotFound), StatusCode::NOT_FOUND);
        assert_eq!(
            api_error_status(ApiErrorCode::Internal),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn record_ids_parse_strictly() {
        assert_eq!(parse_record_id("42").expect("plain integer"), 42);
        parse_record_id("abc").expect_err("letters");
        parse_record_id("4.5").expect_err("fraction");
        parse_record_id("-3").expect_err("negative");
        parse_record_id("").expect_err("empty");
    }

    #[test]
    fn json_body_errors_are_validation_failures() {
        let err = parse_json_body(b"{not json").expect_err("malformed body");
        assert_eq!(err.code, ApiErrorCode::ValidationFailed);
    }
}
