//! One-hot encoding of mixed numeric/categorical records.

use super::record::{Column, Record};
use super::schema::{infer_columns, ColumnKind, FeatureSchema};
use crate::matrix::Matrix;

/// Encode `records` into a dense matrix, expanding `categorical` one-hot.
///
/// Every other non-excluded column that holds numbers is copied as a
/// numerical feature, in discovery order. Returns the matrix together with
/// the schema that defines its columns.
pub fn one_hot_encode(records: &[Record], categorical: &[Column]) -> (Matrix, FeatureSchema) {
    let numerical: Vec<Column> = infer_columns(records)
        .into_iter()
        .filter(|d| {
            !d.excluded && d.kind == ColumnKind::Numerical && !categorical.contains(&d.column)
        })
        .map(|d| d.column)
        .collect();

    let schema = FeatureSchema::fit(records, &numerical, categorical);
    let matrix = schema.encode(records);
    (matrix, schema)
}
