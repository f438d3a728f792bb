//! Error types for the shared crate
//!
//! The calculation core never fails; these errors cover the proposal
//! workflow and JSON decoding around it.

use crate::models::ProposalStatus;
use thiserror::Error;
use uuid::Uuid;

/// Proposal error types
#[derive(Debug, Error)]
pub enum ProposalError {
    /// Workflow transition not allowed from the current status
    #[error("Cannot move proposal from {from} to {to}")]
    InvalidTransition {
        from: ProposalStatus,
        to: ProposalStatus,
    },

    /// Proposal is locked (approved or marked read-only)
    #[error("Proposal {0} is not editable")]
    NotEditable(Uuid),

    /// Share-link password did not match
    #[error("Incorrect proposal password")]
    PasswordMismatch,

    /// Malformed JSON document
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for proposal operations
pub type ProposalResult<T> = Result<T, ProposalError>;
