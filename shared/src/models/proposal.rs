//! Proposal Model
//!
//! Persisted, shareable wrapper around a [`ProposalData`] with review
//! workflow state. Construction and edits that need recalculation live in
//! `proposal-engine`; the transitions here only touch metadata.

use super::proposal_data::ProposalData;
use crate::error::{ProposalError, ProposalResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;
use uuid::Uuid;

/// Review workflow status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum ProposalStatus {
    #[default]
    Draft,
    Pending,
    Approved,
    Rejected,
}

impl ProposalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProposalStatus::Draft => "draft",
            ProposalStatus::Pending => "pending",
            ProposalStatus::Approved => "approved",
            ProposalStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ProposalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Badge shown in proposal listings
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum DisplayStatus {
    Approved,
    /// Client edited the proposal and sent it back for review
    ChangesSubmitted,
    Rejected,
    Draft,
}

/// Presentation options chosen when the proposal was generated
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalCustomization {
    #[serde(default)]
    pub contact_first_name: String,
    #[serde(default)]
    pub contact_last_name: String,
    #[serde(default)]
    pub custom_note: String,
    #[serde(default = "default_include_pricing")]
    pub include_pricing: bool,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

fn default_include_pricing() -> bool {
    true
}

fn default_is_editable() -> bool {
    true
}

impl Default for ProposalCustomization {
    fn default() -> Self {
        Self {
            contact_first_name: String::new(),
            contact_last_name: String::new(),
            custom_note: String::new(),
            include_pricing: true,
            extra: Map::new(),
        }
    }
}

/// Persisted proposal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Proposal {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub data: ProposalData,
    #[serde(default)]
    pub customization: ProposalCustomization,
    #[serde(default = "default_is_editable")]
    pub is_editable: bool,
    #[serde(default)]
    pub status: ProposalStatus,
    #[serde(default)]
    pub pending_review: bool,
    #[serde(default)]
    pub has_changes: bool,
    /// Snapshot taken at creation; baseline for change tracking
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_data: Option<ProposalData>,
    /// Share-link password
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl Proposal {
    /// Whether the share link asks for a password
    pub fn requires_password(&self) -> bool {
        self.password.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Check a share-link password attempt
    pub fn unlock(&self, attempt: &str) -> ProposalResult<()> {
        match self.password.as_deref() {
            Some(expected) if !expected.is_empty() && expected != attempt => {
                tracing::debug!(proposal_id = %self.id, "Rejected proposal password attempt");
                Err(ProposalError::PasswordMismatch)
            }
            _ => Ok(()),
        }
    }

    /// Set or clear the share-link password (empty clears)
    pub fn set_password(&mut self, password: Option<String>) {
        self.password = password.filter(|p| !p.is_empty());
        self.updated_at = Utc::now();
    }

    /// Whether data edits are currently accepted
    pub fn accepts_edits(&self) -> bool {
        self.is_editable && self.status != ProposalStatus::Approved
    }

    /// Draft/Rejected → Pending
    pub fn submit_for_review(&mut self) -> ProposalResult<()> {
        match self.status {
            ProposalStatus::Draft | ProposalStatus::Rejected => {
                self.transition(ProposalStatus::Pending);
                self.pending_review = true;
                Ok(())
            }
            from => Err(ProposalError::InvalidTransition {
                from,
                to: ProposalStatus::Pending,
            }),
        }
    }

    /// Pending → Approved; approved proposals are locked
    pub fn approve(&mut self) -> ProposalResult<()> {
        self.resolve_review(ProposalStatus::Approved)?;
        self.is_editable = false;
        Ok(())
    }

    /// Pending → Rejected
    pub fn reject(&mut self) -> ProposalResult<()> {
        self.resolve_review(ProposalStatus::Rejected)
    }

    fn resolve_review(&mut self, to: ProposalStatus) -> ProposalResult<()> {
        if self.status != ProposalStatus::Pending {
            return Err(ProposalError::InvalidTransition {
                from: self.status,
                to,
            });
        }
        self.transition(to);
        self.pending_review = false;
        Ok(())
    }

    fn transition(&mut self, to: ProposalStatus) {
        tracing::info!(proposal_id = %self.id, from = %self.status, to = %to, "Proposal status changed");
        self.status = to;
        self.updated_at = Utc::now();
    }

    /// Listing badge: approval wins, then submitted changes, then rejection
    pub fn display_status(&self) -> DisplayStatus {
        if self.status == ProposalStatus::Approved {
            DisplayStatus::Approved
        } else if self.has_changes && self.pending_review {
            DisplayStatus::ChangesSubmitted
        } else if self.status == ProposalStatus::Rejected {
            DisplayStatus::Rejected
        } else {
            DisplayStatus::Draft
        }
    }
}
