// SPDX-License-Identifier: Apache-2.0

mod budget;
mod dashboard;
mod guests;
mod middleware;
mod seating;
mod support;
mod tasks;
mod timeline;
mod vendors;
mod wedding;

use crate::AppState;
use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::response::Response;
use axum::routing::get;
use axum::Router;
use serde_json::json;
use support::ok_json;

/// The full route table. Every collection gets the same five operations;
/// the singleton gets GET and PUT only.
pub fn build_router(state: AppState) -> Router {
    let max_body_bytes = state.api.max_body_bytes;
    Router::new()
        .route("/healthz", get(health))
        .route("/api/guests", get(guests::list).post(guests::create))
        .route(
            "/api/guests/:id",
            get(guests::get).put(guests::update).delete(guests::delete),
        )
        .route("/api/budget", get(budget::list).post(budget::create))
        .route(
            "/api/budget/:id",
            get(budget::get).put(budget::update).delete(budget::delete),
        )
        .route("/api/timeline", get(timeline::list).post(timeline::create))
        .route(
            "/api/timeline/:id",
            get(timeline::get)
                .put(timeline::update)
                .delete(timeline::delete),
        )
        .route("/api/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/api/tasks/:id",
            get(tasks::get).put(tasks::update).delete(tasks::delete),
        )
        .route("/api/vendors", get(vendors::list).post(vendors::create))
        .route(
            "/api/vendors/:id",
            get(vendors::get).put(vendors::update).delete(vendors::delete),
        )
        // Static segment, so it wins over the :id capture below it.
        .route("/api/seating/occupancy", get(seating::occupancy))
        .route("/api/seating", get(seating::list).post(seating::create))
        .route(
            "/api/seating/:id",
            get(seating::get).put(seating::update).delete(seating::delete),
        )
        .route(
            "/api/wedding-details",
            get(wedding::get_details).put(wedding::update_details),
        )
        .route("/api/dashboard", get(dashboard::planning))
        .layer(from_fn_with_state(state.clone(), middleware::request_context))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .with_state(state)
}

async fn health() -> Response {
    ok_json(StatusCode::OK, &json!({ "status": "ok" }))
}
