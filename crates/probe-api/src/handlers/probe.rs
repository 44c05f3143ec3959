//! Probe handlers
//!
//! Each handler resolves its backend's target from state and runs the
//! generic connect/ping/close probe with the matching connector.

use axum::extract::State;
use probe_cache::RedisConnector;
use probe_core::{check, Backend, Connector, SUCCESS_MESSAGE};
use probe_db::{MySqlConnector, PostgresConnector};
use probe_docstore::MongoConnector;

use crate::response::ApiResult;
use crate::state::AppState;

async fn run_probe<C: Connector>(
    state: &AppState,
    backend: Backend,
    connector: &C,
) -> ApiResult<&'static str> {
    check(backend, state.targets().get(backend), connector).await?;
    Ok(SUCCESS_MESSAGE)
}

/// PostgreSQL reachability
///
/// ANY /postgres
pub async fn postgres(State(state): State<AppState>) -> ApiResult<&'static str> {
    run_probe(&state, Backend::Postgres, &PostgresConnector::new()).await
}

/// MySQL reachability
///
/// ANY /mysql
pub async fn mysql(State(state): State<AppState>) -> ApiResult<&'static str> {
    run_probe(&state, Backend::MySql, &MySqlConnector::new()).await
}

/// Redis reachability
///
/// ANY /redis
pub async fn redis(State(state): State<AppState>) -> ApiResult<&'static str> {
    run_probe(&state, Backend::Redis, &RedisConnector::new()).await
}

/// MongoDB reachability
///
/// ANY /mongo
pub async fn mongo(State(state): State<AppState>) -> ApiResult<&'static str> {
    run_probe(&state, Backend::Mongo, &MongoConnector::new()).await
}
