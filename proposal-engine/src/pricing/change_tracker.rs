//! Change Tracker
//!
//! Compare an edited proposal with its original snapshot, service by
//! service. Services are matched by position inside their day bucket; a
//! service with no counterpart at the same index is skipped.
//!
//! Tracked fields:
//! - `pros`: raw `num_pros`
//! - `hours`: raw `total_hours`
//! - `cost`: `service_cost` recomputed for both sides

use shared::models::{
    ChangeField, ChangeKey, ChangeRecord, ChangeSet, EventDate, ProposalData, Service,
};

use super::money::round_currency;
use super::service_calculator::calculate_service_results;

/// Percent change relative to `original`; `None` when original is zero
fn percent_change(original: f64, updated: f64) -> Option<f64> {
    if original == 0.0 {
        return None;
    }
    let percent = (updated - original) / original * 100.0;
    percent.is_finite().then_some(percent)
}

/// Detect changes between `original` and `updated`
pub fn calculate_changes(original: &ProposalData, updated: &ProposalData) -> ChangeSet {
    let mut changes = ChangeSet::new();

    for (location, dates) in &updated.services {
        for (date, bucket) in dates {
            for (index, service) in bucket.services.iter().enumerate() {
                match find_original(original, location, date, index) {
                    Some(original_service) => {
                        diff_service(&mut changes, location, date, index, original_service, service)
                    }
                    None => {
                        tracing::trace!(location = %location, date = %date, index, "No original service at position, skipping");
                    }
                }
            }
        }
    }

    tracing::debug!(changes = changes.len(), "Calculated proposal changes");
    changes
}

fn find_original<'a>(
    original: &'a ProposalData,
    location: &str,
    date: &EventDate,
    index: usize,
) -> Option<&'a Service> {
    original
        .services
        .get(location)?
        .get(date)?
        .services
        .get(index)
}

fn diff_service(
    changes: &mut ChangeSet,
    location: &str,
    date: &EventDate,
    index: usize,
    original: &Service,
    updated: &Service,
) {
    let key = |field| ChangeKey::new(location, date.as_str(), index, field);

    if updated.num_pros != original.num_pros {
        changes.insert(
            key(ChangeField::Pros),
            ChangeRecord {
                original: original.num_pros,
                updated: updated.num_pros,
                percent_change: percent_change(original.num_pros, updated.num_pros),
            },
        );
    }

    if updated.total_hours != original.total_hours {
        changes.insert(
            key(ChangeField::Hours),
            ChangeRecord {
                original: original.total_hours,
                updated: updated.total_hours,
                percent_change: percent_change(original.total_hours, updated.total_hours),
            },
        );
    }

    let original_cost = calculate_service_results(original).service_cost;
    let updated_cost = calculate_service_results(updated).service_cost;
    if updated_cost != original_cost {
        changes.insert(
            key(ChangeField::Cost),
            ChangeRecord {
                original: original_cost,
                updated: updated_cost,
                percent_change: percent_change(original_cost, updated_cost).map(round_currency),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn massage(date: &str) -> Service {
        Service {
            app_time: 20.0,
            num_pros: 2.0,
            total_hours: 3.0,
            hourly_rate: 20.0,
            pro_hourly: 15.0,
            ..Service::new("massage", date)
        }
    }

    fn proposal(services: Vec<(&str, Service)>) -> ProposalData {
        let mut data = ProposalData::new("Acme");
        for (location, service) in services {
            data.push_service(location, service);
        }
        data
    }

    fn service_mut(data: &mut ProposalData, index: usize) -> &mut Service {
        &mut data
            .services
            .get_mut("HQ")
            .unwrap()
            .get_mut(&EventDate::new("2024-03-01"))
            .unwrap()
            .services[index]
    }

    #[test]
    fn test_identical_proposals_have_no_changes() {
        let original = proposal(vec![("HQ", massage("2024-03-01"))]);
        assert!(calculate_changes(&original, &original.clone()).is_empty());
    }

    #[test]
    fn test_num_pros_change() {
        let original = proposal(vec![
            ("HQ", massage("2024-03-01")),
            ("HQ", massage("2024-03-01")),
        ]);
        let mut updated = original.clone();
        service_mut(&mut updated, 1).num_pros = 3.0;

        let changes = calculate_changes(&original, &updated);
        assert_eq!(changes.len(), 2);

        let pros = &changes[&ChangeKey::new("HQ", "2024-03-01", 1, ChangeField::Pros)];
        assert_eq!(pros.original, 2.0);
        assert_eq!(pros.updated, 3.0);
        assert_eq!(pros.percent_change, Some(50.0));

        // 3h * $20 * 2 pros = 120 → 3 pros = 180
        let cost = &changes[&ChangeKey::new("HQ", "2024-03-01", 1, ChangeField::Cost)];
        assert_eq!(cost.original, 120.0);
        assert_eq!(cost.updated, 180.0);
        assert_eq!(cost.percent_change, Some(50.0));
    }

    #[test]
    fn test_hours_change_rounds_cost_percent_only() {
        let original = proposal(vec![("HQ", massage("2024-03-01"))]);
        let mut updated = original.clone();
        service_mut(&mut updated, 0).total_hours = 4.0;

        let changes = calculate_changes(&original, &updated);
        let hours = &changes[&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Hours)];
        assert_eq!(hours.percent_change, Some((4.0 - 3.0) / 3.0 * 100.0));

        let cost = &changes[&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Cost)];
        assert_eq!(cost.original, 120.0);
        assert_eq!(cost.updated, 160.0);
        assert_eq!(cost.percent_change, Some(33.33));
    }

    #[test]
    fn test_zero_original_omits_percent() {
        let mut free = massage("2024-03-01");
        free.hourly_rate = 0.0;
        let original = proposal(vec![("HQ", free)]);

        let mut updated = original.clone();
        service_mut(&mut updated, 0).hourly_rate = 25.0;

        let changes = calculate_changes(&original, &updated);
        assert_eq!(changes.len(), 1);
        let cost = &changes[&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Cost)];
        assert_eq!(cost.original, 0.0);
        assert_eq!(cost.updated, 150.0);
        assert_eq!(cost.percent_change, None);
    }

    #[test]
    fn test_zero_pros_original_omits_percent() {
        let mut empty = massage("2024-03-01");
        empty.num_pros = 0.0;
        let original = proposal(vec![("HQ", empty)]);
        let updated = proposal(vec![("HQ", massage("2024-03-01"))]);

        let changes = calculate_changes(&original, &updated);
        let pros = &changes[&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Pros)];
        assert_eq!(pros.percent_change, None);
    }

    #[test]
    fn test_added_services_and_locations_skipped() {
        let original = proposal(vec![("HQ", massage("2024-03-01"))]);
        let updated = proposal(vec![
            ("HQ", massage("2024-03-01")),
            ("HQ", massage("2024-03-01")),
            ("HQ", massage("2024-03-02")),
            ("Annex", massage("2024-03-01")),
        ]);

        assert!(calculate_changes(&original, &updated).is_empty());
    }

    #[test]
    fn test_removed_service_shifts_positions() {
        let mut first = massage("2024-03-01");
        first.num_pros = 1.0;
        let original = proposal(vec![("HQ", first), ("HQ", massage("2024-03-01"))]);
        // Removing the first service makes the second one compare against it
        let updated = proposal(vec![("HQ", massage("2024-03-01"))]);

        let changes = calculate_changes(&original, &updated);
        assert!(changes.contains_key(&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Pros)));
        assert!(changes.contains_key(&ChangeKey::new("HQ", "2024-03-01", 0, ChangeField::Cost)));
    }
}
