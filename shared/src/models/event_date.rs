//! Event Date Key
//!
//! Date keys are stored as the ISO strings the user entered, but ordered by
//! their parsed calendar value. Keying a `BTreeMap` by [`EventDate`] keeps
//! every location's day buckets chronological without a separate sort step.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// A service date as entered, with its parsed calendar value
///
/// Ordering: parsed dates chronologically, then unparseable strings
/// (lexically). Ties on the calendar value fall back to the raw string so
/// that `Ord` stays consistent with `Eq`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct EventDate {
    raw: String,
    parsed: Option<NaiveDate>,
}

impl EventDate {
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let parsed = parse_event_date(&raw);
        Self { raw, parsed }
    }

    /// The string as stored in the proposal document
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Calendar value, if the string is a recognisable date
    pub fn parsed(&self) -> Option<NaiveDate> {
        self.parsed
    }
}

/// Parse `YYYY-MM-DD`, RFC 3339 timestamps, or naive `YYYY-MM-DDTHH:MM:SS`
pub fn parse_event_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_utc().date());
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S")
        .ok()
        .map(|dt| dt.date())
}

impl Ord for EventDate {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.parsed, other.parsed) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.raw.cmp(&other.raw)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.raw.cmp(&other.raw),
        }
    }
}

impl PartialOrd for EventDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<String> for EventDate {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for EventDate {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}

impl From<EventDate> for String {
    fn from(date: EventDate) -> Self {
        date.raw
    }
}

impl fmt::Display for EventDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_orders_by_calendar_value() {
        let mut dates = vec![
            EventDate::new("2024-12-01"),
            EventDate::new("2024-01-01"),
            EventDate::new("2024-02-10"),
            EventDate::new("2024-02-2"),
        ];
        dates.sort();
        let raw: Vec<&str> = dates.iter().map(EventDate::as_str).collect();
        // "2024-02-2" parses as Feb 2nd, so it lands before Feb 10th
        assert_eq!(raw, vec!["2024-01-01", "2024-02-2", "2024-02-10", "2024-12-01"]);
    }

    #[test]
    fn test_unparseable_sorts_last() {
        let mut dates = vec![EventDate::new("TBD"), EventDate::new("2030-05-05")];
        dates.sort();
        assert_eq!(dates[0].as_str(), "2030-05-05");
        assert!(dates[1].parsed().is_none());
    }

    #[test]
    fn test_timestamp_forms() {
        assert_eq!(
            parse_event_date("2024-03-04T10:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
        assert_eq!(
            parse_event_date("2024-03-04T10:00:00"),
            NaiveDate::from_ymd_opt(2024, 3, 4)
        );
    }

    #[test]
    fn test_map_key_round_trip() {
        let mut map = BTreeMap::new();
        map.insert(EventDate::new("2024-12-01"), 1);
        map.insert(EventDate::new("2024-01-01"), 2);

        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"2024-01-01":2,"2024-12-01":1}"#);

        let back: BTreeMap<EventDate, i32> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, map);
    }
}
