use crate::http::support::{api_error_response, ok_json, parse_json_body, parse_record_id};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Response;
use rosewood_api::{payload, ApiError};
use serde_json::json;

pub(crate) async fn list(State(state): State<AppState>) -> Response {
    ok_json(StatusCode::OK, &state.store.timeline_events().await)
}

pub(crate) async fn get(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    match state.store.timeline_event(id).await {
        Some(event) => ok_json(StatusCode::OK, &event),
        None => api_error_response(&ApiError::not_found("Timeline event", id)),
    }
}

pub(crate) async fn create(State(state): State<AppState>, body: Bytes) -> Response {
    match parse_json_body(&body).and_then(|value| payload::new_timeline_event(&value)) {
        Ok(fields) => ok_json(
            StatusCode::CREATED,
            &state.store.create_timeline_event(fields).await,
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
        match parse_json_body(&body).and_then(|value| payload::timeline_event_patch(&value)) {
            Ok(patch) => patch,
            Err(err) => return api_error_response(&err),
        };
    match state.store.update_timeline_event(id, patch).await {
        Some(event) => ok_json(StatusCode::OK, &event),
        None => api_error_response(&ApiError::not_found("Timeline event", id)),
    }
}

pub(crate) async fn delete(State(state): State<AppState>, Path(raw_id): Path<String>) -> Response {
    let id = match parse_record_id(&raw_id) {
        Ok(id) => id,
        Err(err) => return api_error_response(&err),
    };
    if state.store.delete_timeline_event(id).await {
        ok_json(
            StatusCode::OK,
            &json!({ "message": "Timeline event deleted successfully" }),
        )
    } else {
        api_error_response(&ApiError::not_found("Timeline event", id))
    }
}
