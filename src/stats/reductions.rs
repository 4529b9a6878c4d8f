use super::StatsError;
use crate::dataset::{RankedTrackTable, TrackField};

/// Sums `field` over the first `limit` ranked rows, or all rows when
/// `limit` is `None`.
pub fn sum(
    field: TrackField,
    table: &RankedTrackTable,
    limit: Option<usize>,
) -> Result<f64, StatsError> {
    if table.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let rows = match limit {
        Some(n) => table.top(n),
        None => table.tracks(),
    };
    Ok(rows.iter().map(|t| field.value_of(t)).sum())
}

pub fn mean(field: TrackField, table: &RankedTrackTable) -> Result<f64, StatsError> {
    if table.is_empty() {
        return Err(StatsError::EmptyInput);
    }
    let total: f64 = table.tracks().iter().map(|t| field.value_of(t)).sum();
    Ok(total / table.len() as f64)
}

pub fn max(field: TrackField, table: &RankedTrackTable) -> Result<f64, StatsError> {
    table
        .tracks()
        .iter()
        .map(|t| field.value_of(t))
        .fold(None, |acc: Option<f64>, v| {
            Some(match acc {
                Some(m) => m.max(v),
                None => v,
            })
        })
        .ok_or(StatsError::EmptyInput)
}
