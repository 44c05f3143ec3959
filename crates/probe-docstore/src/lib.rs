//! # probe-docstore
//!
//! MongoDB connector for the reachability probe.

mod mongo_connector;

pub use mongo_connector::{MongoConnector, MongoSession};
