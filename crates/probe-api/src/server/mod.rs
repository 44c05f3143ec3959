//! Server setup and initialization
//!
//! Provides the application builder and server runner.

use std::net::SocketAddr;

use axum::Router;
use probe_common::{AppConfig, AppError, AppResult};
use probe_core::{redact_target, Backend};
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::apply_middleware;
use crate::routes::create_router;
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let router = create_router();
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Bind `addr` and serve `app` until the server fails
pub async fn run_server(app: Router, addr: SocketAddr) -> AppResult<()> {
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| AppError::Bind { addr, source })?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app).await.map_err(AppError::Server)?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> AppResult<()> {
    let addr = config.server.address();
    let state = AppState::new(config);

    for backend in Backend::ALL {
        match state.targets().get(backend) {
            Some(target) => info!(
                backend = %backend,
                path = backend.path(),
                target = %redact_target(target),
                "Probe configured"
            ),
            None => info!(
                backend = %backend,
                path = backend.path(),
                var = backend.env_var(),
                "Probe not configured"
            ),
        }
    }

    info!(
        name = %state.config().app.name,
        env = ?state.config().app.env,
        %addr,
        "Starting probe server"
    );

    let app = create_app(state);
    run_server(app, addr).await
}
