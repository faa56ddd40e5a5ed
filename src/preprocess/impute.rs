//! Missing-value imputation from observed column statistics.

use tracing::debug;

use super::record::{Column, Record, Value};
use super::schema::{ColumnDescriptor, ColumnKind};

/// Median of `values`; the mean of the two middle values for an even count.
///
/// Returns `None` for an empty slice.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let n = sorted.len();
    Some(if n % 2 == 1 {
        sorted[n / 2]
    } else {
        (sorted[n / 2 - 1] + sorted[n / 2]) / 2.0
    })
}

/// Most frequent label; ties go to the label seen first.
pub fn mode<I>(labels: I) -> Option<String>
where
    I: IntoIterator<Item = String>,
{
    let mut counts: Vec<(String, usize)> = Vec::new();
    for label in labels {
        match counts.iter_mut().find(|(l, _)| *l == label) {
            Some((_, count)) => *count += 1,
            None => counts.push((label, 1)),
        }
    }

    let mut best: Option<(String, usize)> = None;
    for (label, count) in counts {
        if best.as_ref().map_or(true, |(_, c)| count > *c) {
            best = Some((label, count));
        }
    }
    best.map(|(label, _)| label)
}

/// Fill value chosen for one column.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnFill {
    pub column: Column,
    pub value: Value,
}

/// Compute the fill value of every non-excluded column.
///
/// Numerical columns use the median of observed values (0 when none are
/// observed); categorical columns use the mode of observed, non-empty values
/// (the empty string when none are observed).
pub fn fit_fills(records: &[Record], columns: &[ColumnDescriptor]) -> Vec<ColumnFill> {
    columns
        .iter()
        .filter(|d| !d.excluded)
        .map(|d| {
            let value = match d.kind {
                ColumnKind::Numerical => {
                    let observed: Vec<f64> =
                        records.iter().filter_map(|r| r.get(&d.column).as_f64()).collect();
                    Value::Float(median(&observed).unwrap_or(0.0))
                }
                ColumnKind::Categorical => {
                    let observed = records.iter().filter_map(|r| r.get(&d.column).as_category());
                    Value::Text(mode(observed).unwrap_or_default())
                }
            };
            ColumnFill {
                column: d.column.clone(),
                value,
            }
        })
        .collect()
}

/// Replace missing cells of the selected columns with their fill values.
///
/// Excluded columns (identifier, outcome, name, ticket, cabin) are never
/// touched.
pub fn impute_missing_values(records: &[Record], columns: &[ColumnDescriptor]) -> Vec<Record> {
    let fills = fit_fills(records, columns);
    for fill in &fills {
        debug!(column = %fill.column, value = ?fill.value, "imputation fill");
    }

    records
        .iter()
        .map(|record| {
            let mut out = record.clone();
            for fill in &fills {
                if record.get(&fill.column).is_missing() {
                    out.set(&fill.column, fill.value.clone());
                }
            }
            out
        })
        .collect()
}
