//! # probe-core
//!
//! Domain layer for the reachability probes: the supported backend kinds,
//! the probe error taxonomy, the connector traits drivers implement, and the
//! generic connect/ping/close operation built on top of them.
//! This crate has no dependency on any driver or web framework.

pub mod backend;
pub mod error;
pub mod probe;
pub mod traits;

// Re-export commonly used types at crate root
pub use backend::{Backend, BackendFamily};
pub use error::{ProbeError, ProbeResult, ProbeStage};
pub use probe::{check, probe, redact_target, SUCCESS_MESSAGE};
pub use traits::{Connector, Session};
