use crate::http::support::ok_json;
use crate::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Response;

/// One aggregated snapshot for the planning dashboard. Each collection is
/// read independently, so the numbers are consistent per collection rather
/// than a single point-in-time cut across all of them.
pub(crate) async fn planning(State(state): State<AppState>) -> Response {
    let wedding = state.store.wedding_details().await;
    let guests = state.store.guests().await;
    let budget_items = state.store.budget_items().await;
    let tasks = state.store.tasks().await;
    let vendors = state.store.vendors().await;
    let summary = rosewood_stats::planning_summary(
        wedding,
        &guests,
        &budget_items,
        &tasks,
        &vendors,
        chrono::Utc::now(),
    );
    ok_json(StatusCode::OK, &summary)
}
