//! Proposal lifecycle
//!
//! Creation and editing of persisted proposals. Every data change goes
//! through the aggregator and is diffed against the creation snapshot.

mod lifecycle;

pub use lifecycle::*;
