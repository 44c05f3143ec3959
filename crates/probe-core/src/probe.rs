//! Generic probe operation
//!
//! One function serves every backend: resolve the target, connect, ping,
//! and always close an opened session before reporting the outcome.

use tracing::{debug, info, instrument, warn};

use crate::backend::Backend;
use crate::error::{ProbeError, ProbeResult};
use crate::traits::{Connector, Session};

/// Body returned for a successful probe
pub const SUCCESS_MESSAGE: &str = "Successfully connected and pinged.";

/// Connect to `target`, ping it and close the connection.
///
/// The session is closed on both ping success and ping failure. A failed
/// close is logged and does not change the result.
pub async fn probe<C: Connector>(connector: &C, target: &str) -> ProbeResult<()> {
    let mut session = connector.connect(target).await?;
    debug!("Connection established");

    let outcome = session.ping().await;

    if let Err(ProbeError::Unreachable { stage, reason }) = session.close().await {
        warn!(%stage, error = %reason, "Failed to close connection");
    }

    outcome
}

/// Probe `backend` at the configured `target`.
///
/// An absent or empty target is reported as [`ProbeError::NotConfigured`]
/// without touching the network.
#[instrument(skip(target, connector), fields(family = %backend.family()))]
pub async fn check<C: Connector>(
    backend: Backend,
    target: Option<&str>,
    connector: &C,
) -> ProbeResult<()> {
    let target = match target.map(str::trim) {
        Some(t) if !t.is_empty() => t,
        _ => {
            return Err(ProbeError::NotConfigured {
                var: backend.env_var(),
            })
        }
    };

    debug!(target = %redact_target(target), "Probing backend");

    probe(connector, target).await?;
    info!("Backend reachable");
    Ok(())
}

/// Strip credentials from a connection URI for logging
#[must_use]
pub fn redact_target(target: &str) -> String {
    let (scheme, rest) = match target.split_once("://") {
        Some((scheme, rest)) => (Some(scheme), rest),
        None => (None, target),
    };
    let host = rest.rsplit('@').next().unwrap_or(rest);

    match scheme {
        Some(scheme) => format!("{scheme}://{host}"),
        None => host.to_string(),
    }
}
