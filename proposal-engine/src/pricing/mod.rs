//! Proposal Pricing Module
//!
//! Service-level calculation, proposal-level aggregation and change
//! tracking between proposal snapshots. Everything here is pure: inputs
//! in, new values out, no I/O.

mod aggregator;
mod change_tracker;
pub mod money;
mod service_calculator;

pub use aggregator::*;
pub use change_tracker::*;
pub use service_calculator::*;
