//! Probe API Server entry point
//!
//! Run with:
//! ```bash
//! PORT=8080 REDIS_URL=redis://localhost:6379 cargo run -p probe-api
//! ```
//!
//! Configuration is loaded from environment variables or a `.env` file.

use probe_common::{
    try_init_tracing, try_init_tracing_with_config, AppConfig, AppError, TracingConfig,
};
use tracing::error;

#[tokio::main]
async fn main() {
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing();
            let e = AppError::from(e);
            error!(error = %e, "Failed to load configuration");
            std::process::exit(e.exit_code());
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(&TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {e}");
    }

    // Run the server; failing to bind is fatal
    if let Err(e) = probe_api::run(config).await {
        error!(error = %e, "Server failed");
        std::process::exit(e.exit_code());
    }
}
