//! Connector traits (ports) implemented by the driver crates

mod connector;

pub use connector::{Connector, Session};
