// SPDX-License-Identifier: Apache-2.0

use crate::http::support::{api_error_response, ok_json, parse_json_body, parse_record_id};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use rosewood_api::{payload, ApiError};
use serde_json::json;

pub(crate) async fn list(State(state): State<AppState>) -> Response {
    ok_json(StatusCode::OK, &state.store.guests().await)
}

pub(crate) async fn get(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    match state.store.guest(id).await {
        Some(guest) => ok_json(StatusCode::OK, &guest),
        None => api_error_response(&ApiError::not_found("Guest", id)),
    }
}

pub(crate) async fn create(State(state): State<AppState>, body: Bytes) -> Response {
    match parse_json_body(&body).and_then(|value| payload::new_guest(&value)) {
        Ok(fields) => ok_json(StatusCode::CREATED, &state.store.create_guest(fields).await),
        Err(err) => api_error_response(&err),
    }
}

pub(crate) async fn update(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    body: Bytes,
) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    let patch = match parse_json_body(&body).and_then(|value| payload::guest_patch(&value)) {
        Ok(patch) => patch,
        Err(err) => return api_error_response(&err),
    };
    match state.store.update_guest(id, patch).await {
        Some(guest) => ok_json(StatusCode::OK, &guest),
        None => api_error_response(&ApiError::not_found("Guest", id)),
    }
}

pub(crate) async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    if state.store.delete_guest(id).await {
        ok_json(StatusCode::OK, &json!({ "message": "Guest deleted successfully" }))
    } else {
        api_error_response(&ApiError::not_found("Guest", id))
    }
}
