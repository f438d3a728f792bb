//! Client Calculation Input
//!
//! Shape produced by the calculator form before a proposal exists: a client
//! with events grouped per location, each event listing its services.

use super::service::Service;
use crate::util::null_as_default;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// One event at a location
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientEvent {
    #[serde(default, deserialize_with = "null_as_default")]
    pub services: Vec<Service>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Client record with its events
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientCalculation {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub locations: Vec<String>,
    /// Location name → events at that location
    #[serde(default, deserialize_with = "null_as_default")]
    pub events: BTreeMap<String, Vec<ClientEvent>>,
}
