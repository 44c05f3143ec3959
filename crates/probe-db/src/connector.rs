//! SQL connector shared by every SQLx driver

use std::fmt;
use std::marker::PhantomData;

use async_trait::async_trait;
use probe_core::{Connector, ProbeError, ProbeResult, Session};
use sqlx::{mysql::MySqlConnection, postgres::PgConnection, Connection};

/// Opens a single connection of type `C` per probe
///
/// The URI is parsed into the driver's connect options, which split it into
/// host, port, credentials and database name.
pub struct SqlConnector<C> {
    _connection: PhantomData<fn() -> C>,
}

/// PostgreSQL connector (`postgres://` URIs)
pub type PostgresConnector = SqlConnector<PgConnection>;

/// MySQL connector (`mysql://` URIs)
pub type MySqlConnector = SqlConnector<MySqlConnection>;

impl<C> SqlConnector<C> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _connection: PhantomData,
        }
    }
}

impl<C> Default for SqlConnector<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Clone for SqlConnector<C> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<C> Copy for SqlConnector<C> {}

impl<C> fmt::Debug for SqlConnector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SqlConnector")
            .field("connection", &std::any::type_name::<C>())
            .finish()
    }
}

#[async_trait]
impl<C> Connector for SqlConnector<C>
where
    C: Connection + 'static,
{
    type Session = SqlSession<C>;

    async fn connect(&self, target: &str) -> ProbeResult<SqlSession<C>> {
        let options: C::Options = target.parse().map_err(ProbeError::connect)?;
        let connection = C::connect_with(&options)
            .await
            .map_err(ProbeError::connect)?;
        Ok(SqlSession { connection })
    }
}

/// An open SQLx connection
pub struct SqlSession<C> {
    connection: C,
}

#[async_trait]
impl<C> Session for SqlSession<C>
where
    C: Connection + 'static,
{
    async fn ping(&mut self) -> ProbeResult<()> {
        self.connection.ping().await.map_err(ProbeError::ping)
    }

    async fn close(self) -> ProbeResult<()> {
        // Sends the protocol terminate message instead of just dropping the socket
        self.connection.close().await.map_err(ProbeError::close)
    }
}
