//! Backend kinds the service can probe

use std::fmt;

/// Broad category of a backend data store
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BackendFamily {
    RelationalDatabase,
    KeyValueCache,
    DocumentStore,
}

impl BackendFamily {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RelationalDatabase => "relational_database",
            Self::KeyValueCache => "key_value_cache",
            Self::DocumentStore => "document_store",
        }
    }
}

impl fmt::Display for BackendFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A concrete backend with its own route and configuration variable
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    Postgres,
    MySql,
    Redis,
    Mongo,
}

impl Backend {
    /// Every supported backend, in route registration order
    pub const ALL: [Backend; 4] = [Self::Postgres, Self::MySql, Self::Redis, Self::Mongo];

    /// Environment variable holding the connection URI
    #[must_use]
    pub fn env_var(&self) -> &'static str {
        match self {
            Self::Postgres => "POSTGRES_URL",
            Self::MySql => "MYSQL_URL",
            Self::Redis => "REDIS_URL",
            Self::Mongo => "MONGODB_URL",
        }
    }

    /// HTTP path serving this backend's probe
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Self::Postgres => "/postgres",
            Self::MySql => "/mysql",
            Self::Redis => "/redis",
            Self::Mongo => "/mongo",
        }
    }

    #[must_use]
    pub fn family(&self) -> BackendFamily {
        match self {
            Self::Postgres | Self::MySql => BackendFamily::RelationalDatabase,
            Self::Redis => BackendFamily::KeyValueCache,
            Self::Mongo => BackendFamily::DocumentStore,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Postgres => "postgres",
            Self::MySql => "mysql",
            Self::Redis => "redis",
            Self::Mongo => "mongo",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
