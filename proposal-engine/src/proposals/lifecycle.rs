use chrono::Utc;
use shared::error::{ProposalError, ProposalResult};
use shared::models::{ChangeSet, Proposal, ProposalCustomization, ProposalData, ProposalStatus};
use uuid::Uuid;

use crate::pricing::{calculate_changes, into_recalculated};

/// Create a draft proposal
///
/// The data is recalculated first, and the result doubles as the immutable
/// `original_data` baseline.
pub fn generate_proposal(data: ProposalData, customization: ProposalCustomization) -> Proposal {
    let data = into_recalculated(data);
    let now = Utc::now();
    let proposal = Proposal {
        id: Uuid::new_v4(),
        created_at: now,
        updated_at: now,
        original_data: Some(data.clone()),
        data,
        customization,
        is_editable: true,
        status: ProposalStatus::Draft,
        pending_review: false,
        has_changes: false,
        password: None,
    };

    tracing::info!(
        proposal_id = %proposal.id,
        client = %proposal.data.client_name,
        total_event_cost = proposal.data.summary.total_event_cost,
        "Generated proposal"
    );
    proposal
}

/// Replace the proposal data with an edited version
///
/// Recalculates `data`, diffs it against the creation snapshot and updates
/// `has_changes`. Returns the detected changes.
pub fn apply_edit(proposal: &mut Proposal, data: ProposalData) -> ProposalResult<ChangeSet> {
    if !proposal.accepts_edits() {
        return Err(ProposalError::NotEditable(proposal.id));
    }

    let data = into_recalculated(data);
    let changes = proposal
        .original_data
        .as_ref()
        .map(|original| calculate_changes(original, &data))
        .unwrap_or_default();

    proposal.data = data;
    proposal.has_changes = !changes.is_empty();
    proposal.updated_at = Utc::now();

    tracing::info!(
        proposal_id = %proposal.id,
        changes = changes.len(),
        "Applied proposal edit"
    );
    Ok(changes)
}

/// Changes between the current data and the creation snapshot
pub fn proposal_changes(proposal: &Proposal) -> ChangeSet {
    proposal
        .original_data
        .as_ref()
        .map(|original| calculate_changes(original, &proposal.data))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ChangeField, ChangeKey, EventDate, Service};

    fn sample_data() -> ProposalData {
        let mut data = ProposalData::new("Acme");
        data.push_service(
            "HQ",
            Service {
                app_time: 30.0,
                num_pros: 1.0,
                total_hours: 2.0,
                pro_hourly: 50.0,
                retouching_cost: 10.0,
                ..Service::new("headshot", "2024-03-01")
            },
        );
        data
    }

    fn bump_pros(data: &mut ProposalData) {
        let bucket = data
            .services
            .get_mut("HQ")
            .and_then(|dates| dates.get_mut(&EventDate::new("2024-03-01")))
            .unwrap();
        bucket.services[0].num_pros = 2.0;
    }

    #[test]
    fn test_generate_draft() {
        let proposal = generate_proposal(sample_data(), ProposalCustomization::default());

        assert_eq!(proposal.status, ProposalStatus::Draft);
        assert!(proposal.is_editable);
        assert!(!proposal.pending_review);
        assert!(!proposal.has_changes);
        assert_eq!(proposal.created_at, proposal.updated_at);
        assert_eq!(proposal.data.summary.total_event_cost, 140.0);
        assert_eq!(proposal.original_data.as_ref(), Some(&proposal.data));
        assert!(proposal_changes(&proposal).is_empty());
    }

    #[test]
    fn test_apply_edit_tracks_changes() {
        let mut proposal = generate_proposal(sample_data(), ProposalCustomization::default());
        let mut edited = proposal.data.clone();
        bump_pros(&mut edited);

        let changes = apply_edit(&mut proposal, edited).unwrap();
        assert!(proposal.has_changes);
        assert!(changes.contains_key(&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Pros)));
        assert!(changes.contains_key(&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Cost)));

        // 2h * 2 pros * 50 + 8 appointments * 10
        assert_eq!(proposal.data.summary.total_event_cost, 280.0);
        // Baseline untouched
        assert_eq!(
            proposal.original_data.as_ref().unwrap().summary.total_event_cost,
            140.0
        );
        assert_eq!(proposal_changes(&proposal), changes);
    }

    #[test]
    fn test_reverting_edit_clears_has_changes() {
        let mut proposal = generate_proposal(sample_data(), ProposalCustomization::default());
        let mut edited = proposal.data.clone();
        bump_pros(&mut edited);
        apply_edit(&mut proposal, edited).unwrap();

        let changes = apply_edit(&mut proposal, sample_data()).unwrap();
        assert!(changes.is_empty());
        assert!(!proposal.has_changes);
    }

    #[test]
    fn test_approved_proposal_rejects_edits() {
        let mut proposal = generate_proposal(sample_data(), ProposalCustomization::default());
        proposal.submit_for_review().unwrap();
        proposal.approve().unwrap();

        let result = apply_edit(&mut proposal, sample_data());
        assert!(matches!(result, Err(ProposalError::NotEditable(id)) if id == proposal.id));
    }

    #[test]
    fn test_edit_without_baseline() {
        let mut proposal = generate_proposal(sample_data(), ProposalCustomization::default());
        proposal.original_data = None;
        let mut edited = proposal.data.clone();
        bump_pros(&mut edited);

        let changes = apply_edit(&mut proposal, edited).unwrap();
        assert!(changes.is_empty());
        assert!(!proposal.has_changes);
        assert_eq!(proposal.data.summary.total_event_cost, 280.0);
    }
}
