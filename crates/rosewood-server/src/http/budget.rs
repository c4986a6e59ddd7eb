use crate::http::support::{api_error_response, ok_json, parse_json_body, parse_record_id};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use rosewood_api::{payload, ApiError};
use serde_json::json;

pub(crate) async fn list(State(state): State<AppState>) -> Response {
    ok_json(StatusCode::OK, &state.store.budget_items().await)
}

pub(crate) async fn get(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    match state.store.budget_item(id).await {
        Some(item) => ok_json(StatusCode::OK, &item),
        None => api_error_response(&ApiError::not_found("Budget item", id)),
    }
}

pub(crate) async fn create(State(state): State<AppState>, body: Bytes) -> Response {
    match parse_json_body(&body).and_then(|value| payload::new_budget_item(&value)) {
        Ok(fields) => ok_json(
            StatusCode::CREATED,
            &state.store.create_budget_item(fields).await,
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
    let patch = match parse_json_body(&body).and_then(|value| payload::budget_item_patch(&value)) {
        Ok(patch) => patch,
        Err(err) => return api_error_response(&err),
    };
    match state.store.update_budget_item(id, patch).await {
        Some(item) => ok_json(StatusCode::OK, &item),
        None => api_error_response(&ApiError::not_found("Budget item", id)),
    }
}

pub(crate) async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    if state.store.delete_budget_item(id).await {
        ok_json(
            StatusCode::OK,
            &json!({ "message": "Budget item deleted successfully" }),
        )
    } else {
        api_error_response(&ApiError::not_found("Budget item", id))
    }
}
