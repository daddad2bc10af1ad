/// View filtering: the sidebar filter logic of the dashboard.
///
/// A `ViewFilter` narrows the full record table to whatever slice the
/// user selected — a year range, a set of disaster types, one country.
/// Unset dimensions pass everything (the dashboard's "All World" country
/// choice becomes `country: None` here). Filters compose conjunctively
/// and preserve original record order.

use crate::model::DisasterRecord;

/// Filter criteria for one dashboard view. `None` on any dimension means
/// that dimension is unconstrained.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewFilter {
    /// Inclusive (first, last) calendar year range, matched against the
    /// record's start year. Records with no start date fail a year test.
    pub year_range: Option<(i32, i32)>,
    /// Disaster type labels to keep, exact match.
    pub disaster_types: Option<Vec<String>>,
    /// Single country to keep, exact match.
    pub country: Option<String>,
}

impl ViewFilter {
    /// A filter with no constraints — passes every record.
    pub fn all() -> Self {
        Self::default()
    }

    /// Whether `record` satisfies every set dimension.
    pub fn matches(&self, record: &DisasterRecord) -> bool {
        if let Some((first, last)) = self.year_range {
            match record.year() {
                Some(year) if year >= first && year <= last => {}
                _ => return false,
            }
        }
        if let Some(types) = &self.disaster_types {
            if !types.iter().any(|t| t == &record.disaster_type) {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if country != &record.country {
                return false;
            }
        }
        true
    }

    /// Applies the filter, preserving original order.
    pub fn apply<'a>(&self, records: &'a [DisasterRecord]) -> Vec<&'a DisasterRecord> {
        records.iter().filter(|r| self.matches(r)).collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
