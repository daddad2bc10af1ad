/// Severity scoring: bounded composite impact score per record.
///
/// Maps each record's casualty and economic-loss magnitudes to a single
/// score in [0, 100] so records of very different scales can share one
/// visual axis.
///
/// # Scoring process
///
/// 1. **Raw score** — `ln(1 + casualties) + ln(1 + economic_loss_usd)`.
///    `ln(1 + x)` rather than `ln(x)` keeps zero-impact records in the
///    domain and compresses the heavy-tailed (power-law) distribution of
///    disaster impacts so a handful of catastrophes do not flatten every
///    other record against the axis.
/// 2. **Normalization** — min-max scale the raw scores to [0, 100] across
///    the batch. A degenerate batch (all raw scores equal, including a
///    singleton) scores every record 0 rather than dividing by zero.
///
/// # Scores are batch-relative
///
/// Normalization runs over exactly the collection supplied in one call,
/// so the same record can score differently depending on which other
/// records it is batched with. This is an algorithmic choice, not a bug:
/// severity is always "severity within a chosen comparison set", e.g. the
/// dashboard's current filtered view. Rescore after any change to the
/// comparison set.

use crate::model::{DisasterRecord, SeverityError};

/// Raw log-compressed impact score for one record's magnitudes.
///
/// Callers must pass non-negative magnitudes; `assign_severity` validates
/// before calling this.
pub fn raw_impact(casualties: i64, economic_loss_usd: f64) -> f64 {
    (1.0 + casualties as f64).ln() + (1.0 + economic_loss_usd).ln()
}

/// Scores every record in `records`, writing `severity` in place.
///
/// No record is dropped or reordered, and no field other than `severity`
/// is touched. An empty slice is a valid no-op.
///
/// Fails with `InvalidMagnitude` if any record carries a negative casualty
/// or loss value; validation runs before any scoring, so a failed call
/// leaves the whole batch unscored rather than half-written.
pub fn assign_severity(records: &mut [DisasterRecord]) -> Result<(), SeverityError> {
    for record in records.iter() {
        let casualties = record.casualties();
        if casualties < 0 {
            return Err(SeverityError::InvalidMagnitude {
                field: "casualties",
                value: casualties as f64,
            });
        }
        let loss = record.economic_loss();
        if loss < 0.0 {
            return Err(SeverityError::InvalidMagnitude {
                field: "economic_loss_usd",
                value: loss,
            });
        }
    }

    if records.is_empty() {
        return Ok(());
    }

    let raw: Vec<f64> = records
        .iter()
        .map(|r| raw_impact(r.casualties(), r.economic_loss()))
        .collect();

    let min = raw.iter().copied().fold(f64::INFINITY, f64::min);
    let max = raw.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let span = max - min;

    for (record, raw) in records.iter_mut().zip(&raw) {
        record.severity = Some(if span > 0.0 {
            100.0 * (raw - min) / span
        } else {
            // Degenerate batch: every raw score identical (or singleton).
            0.0
        });
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
