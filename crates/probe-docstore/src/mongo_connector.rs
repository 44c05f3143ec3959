//! MongoDB connector
//!
//! The driver connects lazily: building the client only parses the URI and
//! starts server monitoring, so unreachable hosts surface on the first
//! command, i.e. the ping.

use async_trait::async_trait;
use mongodb::{
    bson::doc,
    options::{ReadPreference, SelectionCriteria},
    Client,
};
use probe_core::{Connector, ProbeError, ProbeResult, Session};

/// Database the `ping` command is sent to
const ADMIN_DATABASE: &str = "admin";

/// MongoDB connector (`mongodb://` and `mongodb+srv://` URIs)
#[derive(Debug, Clone, Copy, Default)]
pub struct MongoConnector;

impl MongoConnector {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Connector for MongoConnector {
    type Session = MongoSession;

    async fn connect(&self, target: &str) -> ProbeResult<MongoSession> {
        let client = Client::with_uri_str(target)
            .await
            .map_err(ProbeError::connect)?;
        Ok(MongoSession { client })
    }
}

/// A MongoDB client used for a single probe
#[derive(Debug)]
pub struct MongoSession {
    client: Client,
}

#[async_trait]
impl Session for MongoSession {
    async fn ping(&mut self) -> ProbeResult<()> {
        self.client
            .database(ADMIN_DATABASE)
            .run_command(doc! { "ping": 1 })
            .selection_criteria(SelectionCriteria::ReadPreference(ReadPreference::Primary))
            .await
            .map_err(ProbeError::ping)?;
        Ok(())
    }

    async fn close(self) -> ProbeResult<()> {
        // Stops the monitoring tasks and closes pooled sockets
        self.client.shutdown().await;
        Ok(())
    }
}
