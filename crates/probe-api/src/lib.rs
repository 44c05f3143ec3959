//! # probe-api
//!
//! HTTP server built with Axum that reports whether the configured backends
//! are reachable.

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, run, run_server};
pub use state::AppState;
