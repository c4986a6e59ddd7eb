#![forbid(unsafe_code)]

//! HTTP runtime for the Rosewood planner.
//!
//! [`build_router`] wires one resource group per collection plus the
//! wedding-details singleton and the read-only derived views. All state is
//! carried in [`AppState`]; nothing reaches for globals, so tests construct
//! a fresh store per router.

mod config;
mod http;

pub use config::{ApiConfig, DEFAULT_MAX_BODY_BYTES};
pub use http::build_router;

use rosewood_store::PlannerStore;
use std::sync::atomic::AtomicU64;
use std::sync::Arc;

pub const CRATE_NAME: &str = "rosewood-server";

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PlannerStore>,
    pub api: ApiConfig,
    pub request_id_seed: Arc<AtomicU64>,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<PlannerStore>) -> Self {
        Self::with_config(store, ApiConfig::default())
    }

    #[must_use]
    pub fn with_config(store: Arc<PlannerStore>, api: ApiConfig) -> Self {
        Self {
            store,
            api,
            request_id_seed: Arc::new(AtomicU64::new(1)),
        }
    }
}
