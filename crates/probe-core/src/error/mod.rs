//! Probe error types

mod probe_error;

pub use probe_error::{ProbeError, ProbeResult, ProbeStage};
