//! Shared types for the proposal engine
//!
//! Data model for event-staffing proposals: services, day buckets,
//! proposal payloads and the persisted proposal wrapper, plus the
//! change records produced when two proposal snapshots are compared.
//!
//! Nothing in this crate performs calculations; derived fields are
//! written by `proposal-engine`.

pub mod error;
pub mod models;
pub mod util;

// Re-exports
pub use error::{ProposalError, ProposalResult};
pub use models::*;
pub use serde::{Deserialize, Serialize};
