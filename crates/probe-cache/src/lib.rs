//! # probe-cache
//!
//! Redis connector for the reachability probe.
//!
//! Opens one multiplexed connection per probe and issues `PING`.

mod redis_connector;

pub use redis_connector::{RedisConnector, RedisSession};
