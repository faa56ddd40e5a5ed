//! End-to-end preprocessing: records in, standardised matrix out.

use serde::{Deserialize, Serialize};
use tracing::info;

use super::encode::one_hot_encode;
use super::features::engineer_features;
use super::impute::impute_missing_values;
use super::record::{Column, Record};
use super::scale::standardize;
use super::schema::{infer_columns, ColumnKind, FeatureSchema};
use crate::matrix::Matrix;

/// Output of [`preprocess`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preprocessed {
    /// The input records, unmodified and in input order.
    pub original: Vec<Record>,
    /// Standardised feature matrix; row `i` is `original[i]`.
    pub processed: Matrix,
    pub schema: FeatureSchema,
    pub numerical_columns: Vec<Column>,
    pub categorical_columns: Vec<Column>,
    /// Set when the records carry the outcome flag.
    pub outcome_column: Option<Column>,
}

impl Preprocessed {
    /// Outcome flag of each row, if the dataset has one.
    pub fn outcomes(&self) -> Option<Vec<Option<i64>>> {
        self.outcome_column
            .as_ref()
            .map(|_| self.original.iter().map(|r| r.survived).collect())
    }
}

/// Engineer features, impute, one-hot encode and standardise `raw`.
///
/// Deterministic for a fixed input order: running it twice on the same
/// records yields bit-identical matrices.
pub fn preprocess(raw: &[Record]) -> Preprocessed {
    let engineered = engineer_features(raw);
    let descriptors = infer_columns(&engineered);

    let mut numerical_columns = Vec::new();
    let mut categorical_columns = Vec::new();
    for d in descriptors.iter().filter(|d| !d.excluded) {
        match d.kind {
            ColumnKind::Numerical => numerical_columns.push(d.column.clone()),
            ColumnKind::Categorical => categorical_columns.push(d.column.clone()),
        }
    }

    let imputed = impute_missing_values(&engineered, &descriptors);
    let (encoded, schema) = one_hot_encode(&imputed, &categorical_columns);
    let processed = standardize(&encoded);

    let outcome_column = raw
        .iter()
        .any(|r| r.survived.is_some())
        .then_some(Column::Survived);

    info!(
        rows = processed.nrows(),
        numerical = numerical_columns.len(),
        categorical = categorical_columns.len(),
        features = schema.width(),
        "preprocessed records"
    );

    Preprocessed {
        original: raw.to_vec(),
        processed,
        schema,
        numerical_columns,
        categorical_columns,
        outcome_column,
    }
}
