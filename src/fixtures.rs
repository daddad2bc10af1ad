/// Test fixtures: representative record payloads from the cleaned extract.
///
/// These fixtures mirror the JSON shape the external loading stage hands
/// across the boundary — one object per `DisasterRecord`, ISO 8601 dates,
/// blank spreadsheet cells as absent keys or nulls. They are truncated to
/// the minimum needed to exercise the transforms.
///
/// Cleaned extract record shape:
///   disaster_type       — EM-DAT category label (string)
///   country             — country name (string)
///   start_date/end_date — "YYYY-MM-DD", may be absent
///   total_deaths        — integer, may be absent or null
///   total_affected      — integer, may be absent or null
///   economic_loss_usd   — adjusted USD as a number, may be absent
///
/// `severity` never appears in the extract; it exists only after scoring.

/// Mixed batch: four natural-hazard events plus one road traffic accident,
/// spanning 2019–2023 with one record missing all impact fields.
#[cfg(test)]
pub(crate) fn fixture_mixed_extract_json() -> &'static str {
    r#"[
      {
        "disaster_type": "Flood",
        "country": "Bangladesh",
        "start_date": "2019-07-01",
        "end_date": "2019-07-18",
        "total_deaths": 119,
        "total_affected": 7600000,
        "economic_loss_usd": 1000000000.0
      },
      {
        "disaster_type": "Road Traffic Accident",
        "country": "Kenya",
        "start_date": "2021-03-12",
        "total_deaths": 24
      },
      {
        "disaster_type": "Earthquake",
        "country": "Turkey",
        "start_date": "2023-02-06",
        "end_date": "2023-02-06",
        "total_deaths": 50783,
        "total_affected": 9100000,
        "economic_loss_usd": 34000000000.0
      },
      {
        "disaster_type": "Storm",
        "country": "Philippines",
        "start_date": "2021-12-16",
        "end_date": "2021-12-18",
        "total_deaths": 405,
        "total_affected": 10600000,
        "economic_loss_usd": 1080000000.0
      },
      {
        "disaster_type": "Drought",
        "country": "Somalia",
        "start_date": "2022-01-01",
        "total_deaths": null,
        "total_affected": null
      }
    ]"#
}

/// Single-record extract — exercises the singleton normalization rule.
#[cfg(test)]
pub(crate) fn fixture_single_record_json() -> &'static str {
    r#"[
      {
        "disaster_type": "Wildfire",
        "country": "Australia",
        "start_date": "2020-01-02",
        "total_deaths": 34,
        "economic_loss_usd": 4400000000.0
      }
    ]"#
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DisasterRecord;

    #[test]
    fn test_mixed_fixture_parses_into_records() {
        let records: Vec<DisasterRecord> =
            serde_json::from_str(fixture_mixed_extract_json()).expect("fixture should parse");
        assert_eq!(records.len(), 5);
        assert_eq!(records[0].disaster_type, "Flood");
        assert_eq!(records[2].casualties(), 50_783);
        assert_eq!(records[4].casualties(), 0, "null impact fields default to 0");
        assert!(records.iter().all(|r| r.severity.is_none()));
    }

    #[test]
    fn test_fixture_dates_honor_loading_stage_ordering() {
        // The loading stage guarantees end_date >= start_date when both
        // are present; the fixtures must model a well-formed extract.
        let records: Vec<DisasterRecord> =
            serde_json::from_str(fixture_mixed_extract_json()).unwrap();
        for r in &records {
            if let (Some(start), Some(end)) = (r.start_date, r.end_date) {
                assert!(
                    end >= start,
                    "{} in {}: end_date {} precedes start_date {}",
                    r.disaster_type,
                    r.country,
                    end,
                    start
                );
            }
        }
    }

    #[test]
    fn test_single_record_fixture_parses() {
        let records: Vec<DisasterRecord> =
            serde_json::from_str(fixture_single_record_json()).expect("fixture should parse");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].country, "Australia");
    }
}
