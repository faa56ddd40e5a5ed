//! Passenger-style tabular records.
//!
//! A [`Record`] carries the recognised core columns as typed optional fields,
//! the engineered columns as their own typed fields, and any other column as
//! an ordered `(name, value)` list. Columns are addressed through [`Column`],
//! so iteration order never depends on a hash map.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell value.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    /// Whether the cell is missing. Empty strings and non-finite floats
    /// count as missing.
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Text(s) => s.is_empty(),
            Self::Float(x) => !x.is_finite(),
            Self::Int(_) => false,
        }
    }

    /// Numeric view of the cell.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Int(i) => Some(*i as f64),
            Self::Float(x) if x.is_finite() => Some(*x),
            _ => None,
        }
    }

    /// Category label of the cell, or `None` when missing.
    pub fn as_category(&self) -> Option<String> {
        match self {
            Self::Text(s) if !s.is_empty() => Some(s.clone()),
            Self::Int(i) => Some(i.to_string()),
            Self::Float(x) if x.is_finite() => Some(x.to_string()),
            _ => None,
        }
    }

    fn is_numeric(&self) -> bool {
        matches!(self, Self::Int(_) | Self::Float(_))
    }

    pub(crate) fn numeric_or_text(&self) -> Option<bool> {
        if self.is_missing() {
            None
        } else {
            Some(self.is_numeric())
        }
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Self::Float(x)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Null, Into::into)
    }
}

/// Column address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Column {
    PassengerId,
    Survived,
    Pclass,
    Name,
    Sex,
    Age,
    SibSp,
    Parch,
    Ticket,
    Fare,
    Cabin,
    Embarked,
    FamilySize,
    Title,
    HasCabin,
    Extra(String),
}

impl Column {
    /// Core columns in canonical order.
    pub const CORE: [Column; 12] = [
        Column::PassengerId,
        Column::Survived,
        Column::Pclass,
        Column::Name,
        Column::Sex,
        Column::Age,
        Column::SibSp,
        Column::Parch,
        Column::Ticket,
        Column::Fare,
        Column::Cabin,
        Column::Embarked,
    ];

    /// Columns added by feature engineering, in the order they are attached.
    pub const ENGINEERED: [Column; 3] = [Column::FamilySize, Column::Title, Column::HasCabin];

    /// Header name of the column.
    pub fn name(&self) -> &str {
        match self {
            Self::PassengerId => "PassengerId",
            Self::Survived => "Survived",
            Self::Pclass => "Pclass",
            Self::Name => "Name",
            Self::Sex => "Sex",
            Self::Age => "Age",
            Self::SibSp => "SibSp",
            Self::Parch => "Parch",
            Self::Ticket => "Ticket",
            Self::Fare => "Fare",
            Self::Cabin => "Cabin",
            Self::Embarked => "Embarked",
            Self::FamilySize => "family_size",
            Self::Title => "title",
            Self::HasCabin => "has_cabin",
            Self::Extra(name) => name,
        }
    }

    /// Resolve a header name; unknown names become [`Column::Extra`].
    pub fn from_name(name: &str) -> Self {
        Self::CORE
            .iter()
            .chain(Self::ENGINEERED.iter())
            .find(|c| c.name() == name)
            .cloned()
            .unwrap_or_else(|| Self::Extra(name.to_string()))
    }

    /// Identifier-like and free-text columns that never enter the matrix.
    pub fn is_excluded(&self) -> bool {
        matches!(
            self,
            Self::PassengerId | Self::Survived | Self::Name | Self::Ticket | Self::Cabin
        )
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One row of a dataset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Record {
    pub passenger_id: Option<i64>,
    pub survived: Option<i64>,
    pub pclass: Option<f64>,
    pub name: Option<String>,
    pub sex: Option<String>,
    pub age: Option<f64>,
    pub sib_sp: Option<f64>,
    pub parch: Option<f64>,
    pub ticket: Option<String>,
    pub fare: Option<f64>,
    pub cabin: Option<String>,
    pub embarked: Option<String>,
    pub family_size: Option<f64>,
    pub title: Option<String>,
    pub has_cabin: Option<f64>,
    /// Columns outside the recognised set, in header order.
    pub extra: Vec<(String, Value)>,
}

impl Record {
    /// Build a record from decoded `(header, value)` pairs.
    ///
    /// This is the hand-off point from a text decoder: recognised headers
    /// fill the typed fields, everything else lands in [`Record::extra`].
    pub fn from_fields<I, K>(fields: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: AsRef<str>,
    {
        let mut record = Self::default();
        for (key, value) in fields {
            record.set(&Column::from_name(key.as_ref()), value);
        }
        record
    }

    /// Read a cell.
    pub fn get(&self, column: &Column) -> Value {
        match column {
            Column::PassengerId => self.passenger_id.into(),
            Column::Survived => self.survived.into(),
            Column::Pclass => self.pclass.into(),
            Column::Name => self.name.clone().into(),
            Column::Sex => self.sex.clone().into(),
            Column::Age => self.age.into(),
            Column::SibSp => self.sib_sp.into(),
            Column::Parch => self.parch.into(),
            Column::Ticket => self.ticket.clone().into(),
            Column::Fare => self.fare.into(),
            Column::Cabin => self.cabin.clone().into(),
            Column::Embarked => self.embarked.clone().into(),
            Column::FamilySize => self.family_size.into(),
            Column::Title => self.title.clone().into(),
            Column::HasCabin => self.has_cabin.into(),
            Column::Extra(name) => self
                .extra
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
                .unwrap_or_default(),
        }
    }

    /// Write a cell, coercing the value to the field's type.
    ///
    /// A numeric field given text that does not parse as a number, or a
    /// missing value, is cleared.
    pub fn set(&mut self, column: &Column, value: Value) {
        match column {
            Column::PassengerId => self.passenger_id = as_int(&value),
            Column::Survived => self.survived = as_int(&value),
            Column::Pclass => self.pclass = as_float(&value),
            Column::Name => self.name = as_text(&value),
            Column::Sex => self.sex = as_text(&value),
            Column::Age => self.age = as_float(&value),
            Column::SibSp => self.sib_sp = as_float(&value),
            Column::Parch => self.parch = as_float(&value),
            Column::Ticket => self.ticket = as_text(&value),
            Column::Fare => self.fare = as_float(&value),
            Column::Cabin => self.cabin = as_text(&value),
            Column::Embarked => self.embarked = as_text(&value),
            Column::FamilySize => self.family_size = as_float(&value),
            Column::Title => self.title = as_text(&value),
            Column::HasCabin => self.has_cabin = as_float(&value),
            Column::Extra(name) => match self.extra.iter_mut().find(|(k, _)| k == name) {
                Some((_, slot)) => *slot = value,
                None => self.extra.push((name.clone(), value)),
            },
        }
    }
}

fn as_float(value: &Value) -> Option<f64> {
    match value {
        Value::Text(s) => s.trim().parse().ok().filter(|x: &f64| x.is_finite()),
        other => other.as_f64(),
    }
}

fn as_int(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Float(x) if x.fract() == 0.0 => Some(*x as i64),
        Value::Text(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn as_text(value: &Value) -> Option<String> {
    value.as_category()
}

/// Every column present in `records`: core columns, then engineered columns,
/// then extra columns in first-seen order.
pub fn dataset_columns(records: &[Record]) -> Vec<Column> {
    let mut columns: Vec<Column> = Column::CORE.to_vec();
    columns.extend(Column::ENGINEERED.iter().cloned());
    for record in records {
        for (name, _) in &record.extra {
            let column = Column::Extra(name.clone());
            if !columns.contains(&column) {
                columns.push(column);
            }
        }
    }
    columns
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fields_routes_known_and_extra_columns() {
        let r = Record::from_fields([
            ("PassengerId", Value::Int(1)),
            ("Name", Value::from("Braund, Mr. Owen Harris")),
            ("Age", Value::Float(22.0)),
            ("SibSp", Value::Int(1)),
            ("Cabin", Value::from("")),
            ("Deck", Value::from("C")),
        ]);
        assert_eq!(r.passenger_id, Some(1));
        assert_eq!(r.age, Some(22.0));
        assert_eq!(r.sib_sp, Some(1.0));
        assert_eq!(r.cabin, None);
        assert_eq!(r.get(&Column::Extra("Deck".into())), Value::from("C"));
        assert_eq!(r.get(&Column::Fare), Value::Null);
    }

    #[test]
    fn test_numeric_text_is_parsed() {
        let r = Record::from_fields([("Fare", Value::from(" 7.25 ")), ("Survived", Value::from("1"))]);
        assert_eq!(r.fare, Some(7.25));
        assert_eq!(r.survived, Some(1));
    }

    #[test]
    fn test_column_names_round_trip() {
        for column in Column::CORE.iter().chain(Column::ENGINEERED.iter()) {
            assert_eq!(&Column::from_name(column.name()), column);
        }
        assert_eq!(Column::from_name("Deck"), Column::Extra("Deck".into()));
    }

    #[test]
    fn test_value_missing() {
        assert!(Value::Null.is_missing());
        assert!(Value::Float(f64::INFINITY).is_missing());
        assert_eq!(Value::Float(f64::NEG_INFINITY).as_f64(), None);
        assert_eq!(Record::from_fields([("Fare", Value::from("inf"))]).fare, None);
        assert!(Value::from("").is_missing());
        assert!(Value::Float(f64::NAN).is_missing());
        assert!(!Value::Int(0).is_missing());
        assert_eq!(Value::Int(3).as_category().as_deref(), Some("3"));
    }

    #[test]
    fn test_dataset_columns_order() {
        let mut a = Record::default();
        a.set(&Column::Extra("Deck".into()), Value::from("C"));
        let mut b = Record::default();
        b.set(&Column::Extra("Boat".into()), Value::Int(4));
        b.set(&Column::Extra("Deck".into()), Value::from("E"));

        let columns = dataset_columns(&[a, b]);
        assert_eq!(columns.len(), 17);
        assert_eq!(columns[15], Column::Extra("Deck".into()));
        assert_eq!(columns[16], Column::Extra("Boat".into()));
    }
}
