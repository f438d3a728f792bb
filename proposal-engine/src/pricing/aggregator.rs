//! Proposal Aggregator
//!
//! Rebuild every derived value in a [`ProposalData`]:
//! 1. Per service: appointments, cost and revenue from the service calculator
//! 2. Per day bucket: `total_cost` (rounded) and `total_appointments`
//! 3. Per proposal: summary totals, net profit and margin
//!
//! Day buckets are keyed by [`EventDate`], so iteration is chronological.
//! Day subtotals are summed in f64 service by service, and the proposal sums
//! add up the unrounded day subtotals; rounding happens once at the end.

use shared::models::{
    ClientCalculation, DayBucket, EventDate, LocationMap, ProposalData, ProposalSummary,
};
use std::collections::{BTreeMap, BTreeSet};

use super::money::round_currency;
use super::service_calculator::calculate_service_results;

/// Recalculate all derived fields and the summary
///
/// Returns a new snapshot; `proposal_data` is left untouched. Running this on
/// its own output yields the same value.
pub fn recalculate_service_totals(proposal_data: &ProposalData) -> ProposalData {
    into_recalculated(proposal_data.clone())
}

/// Owned variant of [`recalculate_service_totals`]
pub fn into_recalculated(mut data: ProposalData) -> ProposalData {
    let mut total_appointments: u64 = 0;
    let mut total_event_cost = 0.0_f64;
    let mut total_pro_revenue = 0.0_f64;
    let mut event_dates = BTreeSet::new();

    for (location, dates) in data.services.iter_mut() {
        for (date, bucket) in dates.iter_mut() {
            if date.parsed().is_none() {
                tracing::warn!(location = %location, date = %date, "Unparseable event date, ordering it after dated buckets");
            }
            event_dates.insert(date.clone());

            let day = recalculate_day(bucket);
            total_appointments = total_appointments.saturating_add(day.appointments);
            total_event_cost += day.cost;
            total_pro_revenue += day.pro_revenue;
        }
    }

    let net_profit = round_currency(total_event_cost - total_pro_revenue);
    let profit_margin = if total_event_cost > 0.0 {
        round_currency(net_profit / total_event_cost * 100.0)
    } else {
        0.0
    };

    data.event_dates = event_dates.into_iter().collect();
    data.summary = ProposalSummary {
        total_appointments,
        total_event_cost: round_currency(total_event_cost),
        total_pro_revenue: round_currency(total_pro_revenue),
        net_profit,
        profit_margin,
    };

    tracing::debug!(
        client = %data.client_name,
        locations = data.services.len(),
        services = data.service_count(),
        total_event_cost = data.summary.total_event_cost,
        profit_margin = data.summary.profit_margin,
        "Recalculated proposal totals"
    );

    data
}

/// Unrounded day subtotals folded into the proposal totals
struct DayTotals {
    appointments: u64,
    cost: f64,
    pro_revenue: f64,
}

/// Refresh the services of one bucket and its stored totals
fn recalculate_day(bucket: &mut DayBucket) -> DayTotals {
    let mut totals = DayTotals {
        appointments: 0,
        cost: 0.0,
        pro_revenue: 0.0,
    };

    for service in bucket.services.iter_mut() {
        let results = calculate_service_results(service);
        results.write_to(service);

        totals.appointments = totals.appointments.saturating_add(results.total_appointments);
        totals.cost += results.service_cost;
        totals.pro_revenue += results.pro_revenue;
    }

    bucket.total_cost = round_currency(totals.cost);
    bucket.total_appointments = totals.appointments;
    totals
}

/// Build a proposal from a client's calculator input
///
/// Services are grouped per location by date (chronologically) in the order
/// events and services appear, then everything is derived through
/// [`into_recalculated`].
pub fn prepare_proposal_from_calculation(client: &ClientCalculation) -> ProposalData {
    let mut services: BTreeMap<String, LocationMap> = BTreeMap::new();

    for (location, events) in &client.events {
        let by_date = services.entry(location.clone()).or_default();
        for service in events.iter().flat_map(|event| event.services.iter()) {
            by_date
                .entry(EventDate::new(service.date.clone()))
                .or_insert_with(|| DayBucket::new(Vec::new()))
                .services
                .push(service.clone());
        }
    }

    tracing::debug!(
        client = %client.name,
        locations = services.len(),
        "Preparing proposal from calculation"
    );

    into_recalculated(ProposalData {
        client_name: client.name.clone(),
        event_dates: Vec::new(),
        locations: client.locations.clone(),
        services,
        summary: ProposalSummary::default(),
    })
}
