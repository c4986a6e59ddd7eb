#![forbid(unsafe_code)]
//! Wire contract for the Rosewood planner API.
//!
//! [`errors`] defines the error envelope every non-2xx response carries;
//! [`payload`] turns untyped JSON bodies into the typed create/patch shapes
//! from `rosewood-model`, reporting the complete set of field violations
//! rather than stopping at the first.

pub mod errors;
pub mod payload;

pub use errors::{ApiError, ApiErrorCode, FieldViolation};

pub const CRATE_NAME: &str = "rosewood-api";
