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
    ok_json(StatusCode::OK, &state.store.seating_tables().await)
}

pub(crate) async fn get(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    match state.store.seating_table(id).await {
        Some(table) => ok_json(StatusCode::OK, &table),
        None => api_error_response(&ApiError::not_found("Seating table", id)),
    }
}

pub(crate) async fn create(State(state): State<AppState>, body: Bytes) -> Response {
    match parse_json_body(&body).and_then(|value| payload::new_seating_table(&value)) {
        Ok(fields) => ok_json(
            StatusCode::CREATED,
            &state.store.create_seating_table(fields).await,
        ),
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
    let patch =
        match parse_json_body(&body).and_then(|value| payload::seating_table_patch(&value)) {
            Ok(patch) => patch,
            Err(err) => return api_error_response(&err),
        };
    match state.store.update_seating_table(id, patch).await {
        Some(table) => ok_json(StatusCode::OK, &table),
        None => api_error_response(&ApiError::not_found("Seating table", id)),
    }
}

pub(crate) async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    if state.store.delete_seating_table(id).await {
        ok_json(
            StatusCode::OK,
            &json!({ "message": "Seating table deleted successfully" }),
        )
    } else {
        api_error_response(&ApiError::not_found("Seating table", id))
    }
}

/// Seat counts per table, derived from guest assignments on the fly.
///
/// Assignments reference tables by number, not by record id, and nothing
/// clears them when a table goes away. The view reports those guests in the
/// `dangling` count instead of hiding them.
pub(crate) async fn occupancy(State(state): State<AppState>) -> Response {
    let tables = state.store.seating_tables().await;
    let guests = state.store.guests().await;
    ok_json(
        StatusCode::OK,
        &rosewood_stats::seating_overview(&tables, &guests),
    )
}
