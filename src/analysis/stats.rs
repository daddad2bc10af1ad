/// Batch statistics shared by the comparison charts.
///
/// Z-score normalization puts differently-scaled magnitudes (deaths vs.
/// dollars) on one radar/heatmap axis; percentage shares back the
/// sunburst and share-of-total views. Both follow the same degenerate
/// rule as severity scoring: when the batch has no spread (or no total),
/// every output is 0 rather than NaN.

/// Population z-scores for `values`. Zero standard deviation — including
/// empty and singleton input — yields all zeros.
pub fn zscore(values: &[f64]) -> Vec<f64> {
    if values.is_empty() {
        return Vec::new();
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();
    if std_dev == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| (v - mean) / std_dev).collect()
}

/// Each element's share of the batch total, in percent. A zero total
/// yields all zeros.
pub fn percentage_shares(values: &[f64]) -> Vec<f64> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return vec![0.0; values.len()];
    }
    values.iter().map(|v| 100.0 * v / total).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
