/// Impact summary: the KPI numbers at the top of the dashboard.
///
/// Aggregates whatever view the caller assembled (full table, a
/// `ViewFilter` result, a whitelist subset) into event count, total
/// casualties, and total economic loss. Pure fold, no error path —
/// missing magnitudes count as 0 per the model's defaulting rules.

use crate::model::DisasterRecord;

/// Aggregate impact figures for one view.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactSummary {
    pub total_events: usize,
    pub total_casualties: i64,
    pub total_loss_usd: f64,
}

impl ImpactSummary {
    /// Economic loss in billions of USD, the unit the KPI card displays.
    pub fn total_loss_billions(&self) -> f64 {
        self.total_loss_usd / 1.0e9
    }
}

/// Folds a view into its summary. Accepts any iterator of record
/// references so both owned tables (`table.iter()`) and filtered views
/// (`view.iter().copied()`) summarize without cloning.
pub fn summarize<'a, I>(records: I) -> ImpactSummary
where
    I: IntoIterator<Item = &'a DisasterRecord>,
{
    let mut summary = ImpactSummary {
        total_events: 0,
        total_casualties: 0,
        total_loss_usd: 0.0,
    };
    for record in records {
        summary.total_events += 1;
        summary.total_casualties += record.casualties();
        summary.total_loss_usd += record.economic_loss();
    }
    summary
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn record(deaths: Option<i64>, loss: Option<f64>) -> DisasterRecord {
        DisasterRecord {
            disaster_type: "Storm".to_string(),
            country: "Philippines".to_string(),
            start_date: None,
            end_date: None,
            total_deaths: deaths,
            total_affected: None,
            economic_loss_usd: loss,
            severity: None,
        }
    }

    #[test]
    fn test_summarize_totals_match_hand_computed_sums() {
        let table = vec![
            record(Some(120), Some(2.0e9)),
            record(Some(30), Some(5.0e8)),
            record(Some(0), Some(0.0)),
        ];
        let summary = summarize(&table);
        assert_eq!(summary.total_events, 3);
        assert_eq!(summary.total_casualties, 150);
        assert_eq!(summary.total_loss_usd, 2.5e9);
    }

    #[test]
    fn test_missing_magnitudes_count_as_zero() {
        let table = vec![record(None, None), record(Some(10), Some(1.0e6))];
        let summary = summarize(&table);
        assert_eq!(summary.total_events, 2, "a record with no impact data is still an event");
        assert_eq!(summary.total_casualties, 10);
        assert_eq!(summary.total_loss_usd, 1.0e6);
    }

    #[test]
    fn test_empty_view_summarizes_to_zeros() {
        let summary = summarize(&[] as &[DisasterRecord]);
        assert_eq!(summary.total_events, 0);
        assert_eq!(summary.total_casualties, 0);
        assert_eq!(summary.total_loss_usd, 0.0);
    }

    #[test]
    fn test_loss_billions_converts_from_usd() {
        let table = vec![record(None, Some(34.0e9))];
        let summary = summarize(&table);
        assert!((summary.total_loss_billions() - 34.0).abs() < 1e-9);
    }

    #[test]
    fn test_summarize_accepts_a_filtered_view() {
        let table = vec![record(Some(5), Some(1.0e6)), record(Some(7), Some(2.0e6))];
        let view: Vec<&DisasterRecord> = table.iter().collect();
        let summary = summarize(view.iter().copied());
        assert_eq!(summary.total_casualties, 12);
    }
}
