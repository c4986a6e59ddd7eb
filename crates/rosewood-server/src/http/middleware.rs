// SPDX-License-Identifier: Apache-2.0

use crate::AppState;
use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::atomic::Ordering;
use std::time::Instant;
use tracing::info;

/// Stamps every response with an `x-request-id` and, when enabled, emits one
/// audit line per request after the handler has run.
pub(crate) async fn request_context(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Response {
    let started = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let request_id = make_request_id(&state);
    let response = with_request_id(next.run(req).await, &request_id);
    if state.api.enable_audit_log {
        info!(
            target: "rosewood_audit",
            method = %method,
            path = %path,
            status = response.status().as_u16(),
            latency_ms = started.elapsed().as_millis() as u64,
            request_id = %request_id,
            "audit"
        );
    }
    response
}

pub(crate) fn make_request_id(state: &AppState) -> String {
    let id = state.request_id_seed.fetch_add(1, Ordering::Relaxed);
    format!("req-{id:016x}")
}

pub(crate) fn with_request_id(mut response: Response, request_id: &str) -> Response {
    if let Ok(value) = HeaderValue::from_str(request_id) {
        response.headers_mut().insert("x-request-id", value);
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use rosewood_store::PlannerStore;
    use std::sync::Arc;

    #[test]
    fn request_ids_are_sequential_hex() {
        let state = AppState::new(Arc::new(PlannerStore::new()));
        assert_eq!(make_request_id(&state), "req-0000000000000001");
        assert_eq!(make_request_id(&state), "req-0000000000000002");
    }
}
