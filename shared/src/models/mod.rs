//! Data models
//!
//! Shared between proposal-engine and the frontend (via JSON).
//! Wire format is camelCase to match stored proposal documents.

pub mod change;
pub mod client;
pub mod event_date;
pub mod proposal;
pub mod proposal_data;
pub mod service;

// Re-exports
pub use change::*;
pub use client::*;
pub use event_date::*;
pub use proposal::*;
pub use proposal_data::*;
pub use service::*;
