//! Proposal Payload
//!
//! `ProposalData` is the document the calculator reads and writes:
//! location name → date → [`DayBucket`] → services, plus a cached summary.

use super::event_date::EventDate;
use super::service::Service;
use crate::error::ProposalResult;
use crate::util::{count_or_zero, null_as_default, number_or_zero};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Services scheduled on one date at one location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayBucket {
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    /// Sum of service costs, rounded to cents
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_cost: f64,
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_appointments: u64,
}

impl DayBucket {
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            services,
            ..Default::default()
        }
    }
}

/// Day buckets for one location, always in chronological order
pub type LocationMap = BTreeMap<EventDate, DayBucket>;

/// Proposal-wide totals (a cache; always derivable from the services)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalSummary {
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_appointments: u64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_event_cost: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_pro_revenue: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub net_profit: f64,
    /// Net profit as a percentage of event cost
    #[serde(default, deserialize_with = "number_or_zero")]
    pub profit_margin: f64,
}

/// Proposal payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProposalData {
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_name: String,
    /// Sorted, de-duplicated union of all bucket dates
    #[serde(default, deserialize_with = "null_as_default")]
    pub event_dates: Vec<EventDate>,
    /// Location names carried over from the client record
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
    /// Location name → date → day bucket
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: BTreeMap<String, LocationMap>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub summary: ProposalSummary,
}

impl ProposalData {
    pub fn new(client_name: impl Into<String>) -> Self {
        Self {
            client_name: client_name.into(),
            ..Default::default()
        }
    }

    pub fn from_json(json: &str) -> ProposalResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json_pretty(&self) -> ProposalResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Append a service to the bucket for `location` on the service's date
    pub fn push_service(&mut self, location: impl Into<String>, service: Service) {
        let date = EventDate::new(service.date.clone());
        self.services
            .entry(location.into())
            .or_default()
            .entry(date)
            .or_default()
            .services
            .push(service);
    }

    /// Iterate every service with its location and date
    pub fn iter_services(&self) -> impl Iterator<Item = (&str, &EventDate, &Service)> {
        self.services.iter().flat_map(|(location, dates)| {
            dates.iter().flat_map(move |(date, bucket)| {
                bucket
                    .services
                    .iter()
                    .map(move |service| (location.as_str(), date, service))
            })
        })
    }

    /// Number of services across all locations and dates
    pub fn service_count(&self) -> usize {
        self.services
            .values()
            .flat_map(|dates| dates.values())
            .map(|bucket| bucket.services.len())
            .sum()
    }

    /// Names of locations that have at least one day bucket, sorted
    pub fn location_names(&self) -> Vec<&str> {
        self.services
            .iter()
            .filter(|(_, dates)| !dates.is_empty())
            .map(|(name, _)| name.as_str())
            .collect()
    }
}
