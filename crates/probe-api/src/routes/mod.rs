//! Route definitions
//!
//! One route per backend probe; every other path is answered by the greeting.

use axum::{routing::any, Router};
use probe_core::Backend;

use crate::handlers::{probe, root};
use crate::state::AppState;

/// Create the router with all probe routes and the greeting fallback
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route(Backend::Postgres.path(), any(probe::postgres))
        .route(Backend::MySql.path(), any(probe::mysql))
        .route(Backend::Redis.path(), any(probe::redis))
        .route(Backend::Mongo.path(), any(probe::mongo))
        .fallback(root::greet)
}
