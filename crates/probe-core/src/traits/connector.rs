//! Connector and session traits
//!
//! Driver crates implement these for their client types. The domain layer
//! only needs to open a connection, ping it and close it again.

use async_trait::async_trait;

use crate::error::ProbeResult;

/// Opens short-lived connections to one kind of backend
#[async_trait]
pub trait Connector: Send + Sync {
    /// Live connection produced by this connector
    type Session: Session;

    /// Open a connection to `target` (a connection URI)
    async fn connect(&self, target: &str) -> ProbeResult<Self::Session>;
}

/// An open connection to a backend
#[async_trait]
pub trait Session: Send {
    /// Issue a no-op round trip to the backend
    async fn ping(&mut self) -> ProbeResult<()>;

    /// Release the connection
    async fn close(self) -> ProbeResult<()>;
}
