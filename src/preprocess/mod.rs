//! Tabular preprocessing.
//!
//! Turns heterogeneous records into a dense numeric matrix:
//!
//! ```text
//! records -> engineer_features -> impute_missing_values -> one_hot_encode -> standardize
//! ```
//!
//! [`preprocess`] runs the whole chain and is the usual entry point. The
//! individual stages are public so callers can re-use a fitted
//! [`FeatureSchema`] or [`StandardScaler`] on new records.

mod encode;
mod features;
mod impute;
mod pipeline;
mod record;
mod scale;
mod schema;

pub use encode::one_hot_encode;
pub use features::{engineer_features, extract_title, UNKNOWN_TITLE};
pub use impute::{fit_fills, impute_missing_values, median, mode, ColumnFill};
pub use pipeline::{preprocess, Preprocessed};
pub use record::{dataset_columns, Column, Record, Value};
pub use scale::{standardize, StandardScaler};
pub use schema::{infer_columns, CategoricalBlock, ColumnDescriptor, ColumnKind, FeatureSchema};
