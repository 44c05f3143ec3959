//! Probe errors - the two failure kinds a probe can report

use std::fmt;

use thiserror::Error;

/// Step of the probe that failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStage {
    Connect,
    Ping,
    Close,
}

impl fmt::Display for ProbeStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Connect => f.write_str("connect"),
            Self::Ping => f.write_str("ping"),
            Self::Close => f.write_str("close"),
        }
    }
}

/// Probe failure
///
/// The display text is what callers see in the response body, so the
/// driver's error text is kept verbatim.
#[derive(Debug, Error)]
pub enum ProbeError {
    /// No connection target was configured for the backend
    #[error("no {var} env var")]
    NotConfigured { var: &'static str },

    /// Connecting to or pinging the backend failed
    #[error("error connecting to the database: {reason}")]
    Unreachable { stage: ProbeStage, reason: String },
}

impl ProbeError {
    /// Connection could not be established
    pub fn connect(err: impl fmt::Display) -> Self {
        Self::Unreachable {
            stage: ProbeStage::Connect,
            reason: err.to_string(),
        }
    }

    /// Connection was established but the liveness check failed
    pub fn ping(err: impl fmt::Display) -> Self {
        Self::Unreachable {
            stage: ProbeStage::Ping,
            reason: err.to_string(),
        }
    }

    /// Connection could not be released cleanly
    pub fn close(err: impl fmt::Display) -> Self {
        Self::Unreachable {
            stage: ProbeStage::Close,
            reason: err.to_string(),
        }
    }

    /// Failing stage, if the backend was contacted at all
    #[must_use]
    pub fn stage(&self) -> Option<ProbeStage> {
        match self {
            Self::NotConfigured { .. } => None,
            Self::Unreachable { stage, .. } => Some(*stage),
        }
    }
}

/// Result type for probe operations
pub type ProbeResult<T> = Result<T, ProbeError>;
