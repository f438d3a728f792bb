//! Service Model
//!
//! One staffing line item. Inputs come from the proposal form; the three
//! derived fields (`total_appointments`, `service_cost`, `pro_revenue`) are
//! overwritten on every recalculation and never edited directly.

use crate::util::{count_or_zero, null_as_default, number_or_zero};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

/// Tag value that selects headshot pricing
pub const SERVICE_TYPE_HEADSHOT: &str = "headshot";

/// Service category
///
/// Only `headshot` changes the pricing rules; every other tag is priced as
/// a generic hourly service and kept verbatim for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceType {
    Headshot,
    Generic(String),
}

impl ServiceType {
    pub fn as_str(&self) -> &str {
        match self {
            ServiceType::Headshot => SERVICE_TYPE_HEADSHOT,
            ServiceType::Generic(tag) => tag,
        }
    }

    pub fn is_headshot(&self) -> bool {
        matches!(self, ServiceType::Headshot)
    }
}

impl Default for ServiceType {
    fn default() -> Self {
        ServiceType::Generic(String::new())
    }
}

impl From<String> for ServiceType {
    fn from(tag: String) -> Self {
        if tag == SERVICE_TYPE_HEADSHOT {
            ServiceType::Headshot
        } else {
            ServiceType::Generic(tag)
        }
    }
}

impl From<&str> for ServiceType {
    fn from(tag: &str) -> Self {
        Self::from(tag.to_string())
    }
}

impl From<ServiceType> for String {
    fn from(service_type: ServiceType) -> Self {
        match service_type {
            ServiceType::Headshot => SERVICE_TYPE_HEADSHOT.to_string(),
            ServiceType::Generic(tag) => tag,
        }
    }
}

impl fmt::Display for ServiceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Staffing service (one engagement on one date)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Service {
    #[serde(default, deserialize_with = "null_as_default")]
    pub service_type: ServiceType,
    /// Service date (ISO string, matches the day bucket key)
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: String,
    /// Minutes per appointment
    #[serde(default, deserialize_with = "number_or_zero")]
    pub app_time: f64,
    /// Number of professionals staffed
    #[serde(default, deserialize_with = "number_or_zero")]
    pub num_pros: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub total_hours: f64,
    /// Client-facing hourly rate per pro (generic services)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub hourly_rate: f64,
    /// Hourly pay per pro
    #[serde(default, deserialize_with = "number_or_zero")]
    pub pro_hourly: f64,
    /// Per-appointment retouching fee (headshot services)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub retouching_cost: f64,
    /// Flat early-arrival fee per pro (generic services)
    #[serde(default, deserialize_with = "number_or_zero")]
    pub early_arrival: f64,
    /// Client discount, 0-100
    #[serde(default, deserialize_with = "number_or_zero")]
    pub discount_percent: f64,

    // === Derived ===
    #[serde(default, deserialize_with = "count_or_zero")]
    pub total_appointments: u64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub service_cost: f64,
    #[serde(default, deserialize_with = "number_or_zero")]
    pub pro_revenue: f64,

    /// Form fields the engine does not interpret (labels, notes, ...)
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Service {
    /// Blank service of the given type on the given date
    pub fn new(service_type: impl Into<ServiceType>, date: impl Into<String>) -> Self {
        Self {
            service_type: service_type.into(),
            date: date.into(),
            ..Default::default()
        }
    }
}
