//! Route handlers

pub mod probe;
pub mod root;
