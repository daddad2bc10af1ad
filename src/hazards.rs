/// Natural-hazard whitelist for geospatial risk views.
///
/// Technological and man-made categories (transport accidents, industrial
/// incidents) dominate raw event counts by sheer ubiquity, which drowns
/// out geophysical risk in density maps. The whitelist restricts a record
/// set to natural-hazard types before geospatial aggregation.
///
/// The whitelist is an explicit configuration value passed to the filter,
/// not a hidden process-wide constant — callers can substitute alternate
/// whitelists (or load one from `hazards.toml`) without touching this
/// module. `NATURAL_HAZARDS` below is the canonical default set.

use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;

use crate::model::DisasterRecord;

// ---------------------------------------------------------------------------
// Default registry
// ---------------------------------------------------------------------------

/// The EM-DAT disaster type labels considered natural hazards.
///
/// Labels must match the cleaned extract exactly — matching is
/// case-sensitive with no synonym handling, so a drift in upstream
/// labeling shows up as silently excluded records rather than bad data.
pub static NATURAL_HAZARDS: &[&str] = &[
    "Flood",
    "Storm",
    "Earthquake",
    "Drought",
    "Wildfire",
    "Landslide",
    "Extreme Temperature",
    "Volcanic Activity",
];

// ---------------------------------------------------------------------------
// Whitelist type
// ---------------------------------------------------------------------------

/// An immutable set of disaster type labels accepted by the filter.
///
/// Closed-world: a label not in the set is excluded, including unknown or
/// misspelled labels. An empty whitelist is valid and excludes everything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HazardWhitelist {
    types: HashSet<String>,
}

/// Root configuration structure for TOML parsing (`hazards.toml`).
#[derive(Debug, Deserialize)]
struct WhitelistConfig {
    whitelist: WhitelistSection,
}

#[derive(Debug, Deserialize)]
struct WhitelistSection {
    types: Vec<String>,
}

impl HazardWhitelist {
    /// The default natural-hazard whitelist (`NATURAL_HAZARDS`).
    pub fn natural() -> Self {
        Self::from_labels(NATURAL_HAZARDS.iter().copied())
    }

    /// Builds a whitelist from arbitrary labels. Duplicates collapse.
    pub fn from_labels<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        HazardWhitelist {
            types: labels.into_iter().map(Into::into).collect(),
        }
    }

    /// Loads a whitelist from a TOML configuration file:
    ///
    /// ```toml
    /// [whitelist]
    /// types = ["Flood", "Storm", ...]
    /// ```
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let config: WhitelistConfig = toml::from_str(&contents)?;
        Ok(Self::from_labels(config.whitelist.types))
    }

    /// Exact, case-sensitive membership test.
    pub fn contains(&self, disaster_type: &str) -> bool {
        self.types.contains(disaster_type)
    }

    /// Number of labels in the whitelist.
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Whether the whitelist admits no labels at all.
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Restricts `records` to whitelisted types, preserving original order.
    ///
    /// No record is mutated and no error path exists: an empty whitelist or
    /// empty input yields an empty output. Idempotent — filtering the
    /// output again with the same whitelist returns it unchanged.
    pub fn filter_records<'a>(&self, records: &'a [DisasterRecord]) -> Vec<&'a DisasterRecord> {
        records
            .iter()
            .filter(|r| self.contains(&r.disaster_type))
            .collect()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
