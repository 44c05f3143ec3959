//! Response types and error handling for the probe endpoints
//!
//! Responses are plain text: the body is exactly the message the caller sees.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use probe_core::ProbeError;
use thiserror::Error;
use tracing::{error, warn};

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

impl ApiError {
    /// Get HTTP status code for this error
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Probe(ProbeError::NotConfigured { .. }) => StatusCode::NOT_IMPLEMENTED,
            Self::Probe(ProbeError::Unreachable { .. }) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match &self {
            Self::Probe(ProbeError::NotConfigured { var }) => {
                warn!(var = %var, "Probe requested for unconfigured backend");
            }
            Self::Probe(ProbeError::Unreachable { stage, reason }) => {
                error!(stage = %stage, error = %reason, "Backend unreachable");
            }
        }

        (status, self.to_string()).into_response()
    }
}

/// Type alias for API results
pub type ApiResult<T> = Result<T, ApiError>;
