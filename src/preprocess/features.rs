//! Feature engineering: synthetic columns derived from raw records.

use std::sync::LazyLock;

use regex::Regex;

use super::record::Record;

/// Title that follows the surname: `"Braund, Mr. Owen"` -> `"Mr"`.
static TITLE_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r",\s*([^\s.]+)\.").ok());

/// Title used when a name carries none.
pub const UNKNOWN_TITLE: &str = "Unknown";

/// Extract the honorific from a `"Surname, Title. Given"` name.
pub fn extract_title(name: &str) -> String {
    TITLE_PATTERN
        .as_ref()
        .and_then(|re| re.captures(name))
        .and_then(|c| c.get(1))
        .map_or_else(|| UNKNOWN_TITLE.to_string(), |m| m.as_str().to_string())
}

/// Attach `family_size`, `title` and `has_cabin` to every record.
///
/// - `family_size = SibSp + Parch + 1`, missing counts taken as 0.
/// - `title` is left unset when the record has no name.
/// - `has_cabin` is 1 when the cabin is present and non-empty, else 0.
pub fn engineer_features(records: &[Record]) -> Vec<Record> {
    records
        .iter()
        .map(|record| {
            let mut out = record.clone();
            out.family_size =
                Some(record.sib_sp.unwrap_or(0.0) + record.parch.unwrap_or(0.0) + 1.0);
            out.title = record.name.as_deref().map(extract_title);
            out.has_cabin = Some(match record.cabin.as_deref() {
                Some(cabin) if !cabin.is_empty() => 1.0,
                _ => 0.0,
            });
            out
        })
        .collect()
}
