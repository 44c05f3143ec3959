//! Redis connector using a dedicated multiplexed connection.

use async_trait::async_trait;
use probe_core::{Connector, ProbeError, ProbeResult, Session};
use redis::aio::MultiplexedConnection;

/// Redis connector (`redis://` and `rediss://` URIs)
#[derive(Debug, Clone, Copy, Default)]
pub struct RedisConnector;

impl RedisConnector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Connector for RedisConnector {
    type Session = RedisSession;

    async fn connect(&self, target: &str) -> ProbeResult<RedisSession> {
        // Client::open only parses the URI; the socket is opened below
        let client = redis::Client::open(target).map_err(ProbeError::connect)?;
        let connection = client
            .get_multiplexed_async_connection()
            .await
            .map_err(ProbeError::connect)?;
        Ok(RedisSession { connection })
    }
}

/// An open Redis connection
pub struct RedisSession {
    connection: MultiplexedConnection,
}

impl std::fmt::Debug for RedisSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisSession").finish_non_exhaustive()
    }
}

#[async_trait]
impl Session for RedisSession {
    async fn ping(&mut self) -> ProbeResult<()> {
        let reply = redis::cmd("PING")
            .query_async::<String>(&mut self.connection)
            .await
            .map_err(ProbeError::ping)?;
        tracing::trace!(reply = %reply, "Redis answered PING");
        Ok(())
    }

    async fn close(self) -> ProbeResult<()> {
        // The driver task shuts the socket down once the last handle is dropped
        drop(self.connection);
        Ok(())
    }
}
