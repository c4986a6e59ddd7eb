// SPDX-License-Identifier: Apache-2.0

use crate::http::support::{api_error_response, ok_json, parse_json_body};
use crate::AppState;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;
use rosewood_api::payload;

pub(crate) async fn get_details(State(state): State<AppState>) -> Response {
    ok_json(StatusCode::OK, &state.store.wedding_details().await)
}

pub(crate) async fn update_details(State(state): State<AppState>, body: Bytes) -> Response {
    match parse_json_body(&body).and_then(|value| payload::wedding_details_patch(&value)) {
        Ok(patch) => ok_json(
            StatusCode::OK,
            &state.store.update_wedding_details(patch).await,
        ),
        Err(err) => api_error_response(&err),
    }
}
