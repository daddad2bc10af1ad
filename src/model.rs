/// Core data types for the disaster risk dashboard transforms.
///
/// This module defines the shared domain model imported by all other
/// modules. It contains the record type handed across the loading
/// boundary and the error type raised by the severity scorer — no I/O,
/// no transform logic.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Record type
// ---------------------------------------------------------------------------

/// One row of the cleaned EM-DAT extract.
///
/// Produced by the external CSV loading/cleaning stage. Impact fields are
/// optional because the source dataset leaves them blank for many events;
/// missing magnitudes are treated as 0 by the accessors below, which is a
/// documented default rather than an error.
///
/// Impact counts are signed even though negative values are not physically
/// meaningful: a negative count is an upstream data-quality bug, and the
/// severity scorer surfaces it as `InvalidMagnitude` instead of letting an
/// unsigned cast silently wrap it into a huge positive impact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisasterRecord {
    /// EM-DAT disaster type label, e.g. "Flood", "Road Traffic Accident".
    pub disaster_type: String,
    pub country: String,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    /// When both dates are present, `end_date >= start_date` — the
    /// external loading stage guarantees this ordering; it is not
    /// re-validated here.
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub total_deaths: Option<i64>,
    #[serde(default)]
    pub total_affected: Option<i64>,
    /// Adjusted USD.
    #[serde(default)]
    pub economic_loss_usd: Option<f64>,
    /// Derived composite impact score in [0, 100]. `None` until the record
    /// has been through `analysis::severity::assign_severity`. Never
    /// persisted independently of its inputs — recompute after any change
    /// to the impact fields or to the batch the record is compared against.
    #[serde(default)]
    pub severity: Option<f64>,
}

impl DisasterRecord {
    /// Casualty count feeding the severity formula: `total_deaths`, falling
    /// back to `total_affected` when deaths are unreported, else 0.
    pub fn casualties(&self) -> i64 {
        self.total_deaths.or(self.total_affected).unwrap_or(0)
    }

    /// Economic loss in adjusted USD, 0 when unreported.
    pub fn economic_loss(&self) -> f64 {
        self.economic_loss_usd.unwrap_or(0.0)
    }

    /// Calendar year of the event, taken from `start_date`.
    pub fn year(&self) -> Option<i32> {
        self.start_date.map(|d| d.year())
    }
}

// ---------------------------------------------------------------------------
// Error types
// ---------------------------------------------------------------------------

/// Errors raised by the severity scorer.
///
/// Missing magnitudes are not errors (they default to 0); only negative
/// magnitudes fail, because they indicate a broken upstream cleaning step
/// rather than a transient condition. Fail fast, no retry.
#[derive(Debug, PartialEq)]
pub enum SeverityError {
    /// A casualty or loss magnitude was negative.
    InvalidMagnitude { field: &'static str, value: f64 },
}

impl std::fmt::Display for SeverityError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeverityError::InvalidMagnitude { field, value } => {
                write!(f, "invalid magnitude: {} = {} (must be non-negative)", field, value)
            }
        }
    }
}

impl std::error::Error for SeverityError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
