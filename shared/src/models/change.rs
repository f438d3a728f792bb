//! Change Records
//!
//! Output of comparing an edited proposal against its original snapshot.
//! Keys render as `{location}-{date}-{index}-{field}`, the form stored
//! alongside proposals and read by the review screens.

use serde::{Deserialize, Serialize, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Tracked service field
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeField {
    /// Number of professionals
    Pros,
    /// Total hours
    Hours,
    /// Derived service cost
    Cost,
}

impl ChangeField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChangeField::Pros => "pros",
            ChangeField::Hours => "hours",
            ChangeField::Cost => "cost",
        }
    }
}

impl fmt::Display for ChangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Position of a change: location, date, service index, field
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChangeKey {
    pub location: String,
    pub date: String,
    /// Index of the service inside its day bucket
    pub index: usize,
    pub field: ChangeField,
}

impl ChangeKey {
    pub fn new(
        location: impl Into<String>,
        date: impl Into<String>,
        index: usize,
        field: ChangeField,
    ) -> Self {
        Self {
            location: location.into(),
            date: date.into(),
            index,
            field,
        }
    }
}

impl fmt::Display for ChangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}-{}-{}", self.location, self.date, self.index, self.field)
    }
}

// Location names and dates both contain '-', so the flat key cannot be
// split back reliably; keys are write-only on the wire. Distinct keys can
// also flatten to the same string ("A-2024-01-01" on "2024-01-02" and "A" on
// "2024-01-01-2024-01-02"); a serialized ChangeSet then repeats that JSON key.
// Lookups should use the typed ChangeKey.
impl Serialize for ChangeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Before/after values for one field of one service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeRecord {
    pub original: f64,
    pub updated: f64,
    /// Omitted when the original value is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percent_change: Option<f64>,
}

/// Sparse map of detected changes
pub type ChangeSet = BTreeMap<ChangeKey, ChangeRecord>;
