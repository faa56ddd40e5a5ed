//! Column descriptors and the one-hot feature schema.

use serde::{Deserialize, Serialize};

use super::record::{dataset_columns, Column, Record};
use crate::matrix::Matrix;

/// Whether a column is encoded as a number or expanded one-hot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ColumnKind {
    Numerical,
    Categorical,
}

/// Describes one dataset column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnDescriptor {
    pub column: Column,
    pub kind: ColumnKind,
    /// Identifier-like and free-text columns never enter the matrix.
    pub excluded: bool,
}

impl ColumnDescriptor {
    pub fn numerical(column: Column) -> Self {
        let excluded = column.is_excluded();
        Self {
            column,
            kind: ColumnKind::Numerical,
            excluded,
        }
    }

    pub fn categorical(column: Column) -> Self {
        let excluded = column.is_excluded();
        Self {
            column,
            kind: ColumnKind::Categorical,
            excluded,
        }
    }
}

/// Describe every column that has at least one observed value.
///
/// A column is numerical when all of its observations are integers or
/// floats, otherwise categorical. Columns with no observation at all are
/// left out. Order follows [`dataset_columns`].
pub fn infer_columns(records: &[Record]) -> Vec<ColumnDescriptor> {
    dataset_columns(records)
        .into_iter()
        .filter_map(|column| {
            let mut seen = false;
            let mut numeric = true;
            for record in records {
                if let Some(is_numeric) = record.get(&column).numeric_or_text() {
                    seen = true;
                    numeric &= is_numeric;
                }
            }
            seen.then(|| {
                if numeric {
                    ColumnDescriptor::numerical(column)
                } else {
                    ColumnDescriptor::categorical(column)
                }
            })
        })
        .collect()
}

/// One categorical source column and its discovered values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoricalBlock {
    pub column: Column,
    /// Values in first-seen order; one output column each.
    pub values: Vec<String>,
}

/// Ordered layout of the numeric matrix.
///
/// Numerical columns come first, in the order given, then one
/// `"<column>_<value>"` column per categorical value in discovery order.
/// A schema is fitted once and reused for every later encode, so matrix
/// column `j` always means the same feature.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FeatureSchema {
    pub numerical: Vec<Column>,
    pub categorical: Vec<CategoricalBlock>,
}

impl FeatureSchema {
    /// Discover categorical values with one pass over `records`.
    pub fn fit(records: &[Record], numerical: &[Column], categorical: &[Column]) -> Self {
        let mut blocks: Vec<CategoricalBlock> = categorical
            .iter()
            .map(|column| CategoricalBlock {
                column: column.clone(),
                values: Vec::new(),
            })
            .collect();

        for record in records {
            for block in &mut blocks {
                if let Some(value) = record.get(&block.column).as_category() {
                    if !block.values.contains(&value) {
                        block.values.push(value);
                    }
                }
            }
        }

        Self {
            numerical: numerical.to_vec(),
            categorical: blocks,
        }
    }

    /// Number of matrix columns.
    pub fn width(&self) -> usize {
        self.numerical.len() + self.categorical.iter().map(|b| b.values.len()).sum::<usize>()
    }

    /// Output column names in matrix order.
    pub fn feature_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.numerical.iter().map(|c| c.name().to_string()).collect();
        for block in &self.categorical {
            for value in &block.values {
                names.push(format!("{}_{}", block.column.name(), value));
            }
        }
        names
    }

    /// Matrix column range of a categorical block.
    pub fn block_range(&self, column: &Column) -> Option<std::ops::Range<usize>> {
        let mut start = self.numerical.len();
        for block in &self.categorical {
            if &block.column == column {
                return Some(start..start + block.values.len());
            }
            start += block.values.len();
        }
        None
    }

    /// Encode `records` with this schema.
    ///
    /// Numerical cells are copied (missing cells become 0). Each categorical
    /// block gets a 1 at the position of the record's value; a value the
    /// schema has not seen leaves the whole block at 0.
    pub fn encode(&self, records: &[Record]) -> Matrix {
        let mut out = Matrix::zeros((records.len(), self.width()));
        for (i, record) in records.iter().enumerate() {
            for (j, column) in self.numerical.iter().enumerate() {
                out[[i, j]] = record.get(column).as_f64().unwrap_or(0.0);
            }
            let mut offset = self.numerical.len();
            for block in &self.categorical {
                if let Some(value) = record.get(&block.column).as_category() {
                    if let Some(pos) = block.values.iter().position(|v| *v == value) {
                        out[[i, offset + pos]] = 1.0;
                    }
                }
                offset += block.values.len();
            }
        }
        out
    }
}
