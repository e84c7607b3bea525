//! Reads the static item catalog from a JSON file.
//!
//! - A missing or unreadable file yields an empty catalog plus the error.
//! - Entries are validated one by one; bad entries are reported and skipped.

use std::{
    collections::HashSet,
    fs,
    io,
    path::{Path, PathBuf},
};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::domain::ItemRecord;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog source {} unavailable: {source}", .path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("catalog source {} is not a list of items: {source}", .path.display())]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("entry is not an object")]
    NotAnObject,
    #[error("entry has unexpected field types: {0}")]
    Shape(#[from] serde_json::Error),
    #[error("entry has no name")]
    MissingName,
    #[error("value {0} is not a non-negative integer")]
    InvalidValue(String),
    #[error("name {0:?} already used by an earlier entry")]
    DuplicateName(String),
}

#[derive(Debug)]
pub struct RejectedRecord {
    /// Position of the entry in the source list.
    pub index: usize,
    pub reason: RecordError,
}

/// Everything a load produced. `records` is empty whenever `error` is set.
#[derive(Debug)]
pub struct CatalogLoad {
    pub path: PathBuf,
    pub records: Vec<ItemRecord>,
    pub rejected: Vec<RejectedRecord>,
    pub error: Option<CatalogError>,
}

impl CatalogLoad {
    pub fn is_available(&self) -> bool {
        self.error.is_none()
    }
}

pub fn load_catalog(path: &Path) -> CatalogLoad {
    let path_buf = path.to_path_buf();
    let data = match fs::read_to_string(path) {
        Ok(data) => data,
        Err(source) => {
            let error = CatalogError::SourceUnavailable {
                path: path_buf.clone(),
                source,
            };
            warn!("{error}; continuing with an empty catalog");
            return CatalogLoad {
                path: path_buf,
                records: Vec::new(),
                rejected: Vec::new(),
                error: Some(error),
            };
        }
    };

    match parse_catalog(&data) {
        Ok((records, rejected)) => {
            for entry in &rejected {
                warn!(index = entry.index, "skipping catalog entry: {}", entry.reason);
            }
            info!(
                path = %path.display(),
                items = records.len(),
                rejected = rejected.len(),
                "catalog loaded"
            );
            CatalogLoad {
                path: path_buf,
                records,
                rejected,
                error: None,
            }
        }
        Err(source) => {
            let error = CatalogError::Malformed {
                path: path_buf.clone(),
                source,
            };
            warn!("{error}; continuing with an empty catalog");
            CatalogLoad {
                path: path_buf,
                records: Vec::new(),
                rejected: Vec::new(),
                error: Some(error),
            }
        }
    }
}

/// Parses a JSON array of item objects. Fails only when the document itself
/// is not an array; individual entries are validated separately.
pub fn parse_catalog(
    data: &str,
) -> Result<(Vec<ItemRecord>, Vec<RejectedRecord>), serde_json::Error> {
    let entries: Vec<Value> = serde_json::from_str(data)?;

    let mut records = Vec::with_capacity(entries.len());
    let mut rejected = Vec::new();
    let mut seen = HashSet::with_capacity(entries.len());

    for (index, entry) in entries.into_iter().enumerate() {
        let outcome = ItemRecord::try_from_json(entry).and_then(|record| {
            if seen.insert(record.name.clone()) {
                Ok(record)
            } else {
                Err(RecordError::DuplicateName(record.name))
            }
        });
        match outcome {
            Ok(record) => records.push(record),
            Err(reason) => rejected.push(RejectedRecord { index, reason }),
        }
    }

    Ok((records, rejected))
}

#[derive(Debug, Deserialize)]
struct ItemDto {
    #[serde(default)]
    name: Option<String>,
    #[serde(default)]
    value: Option<Value>,
    #[serde(default)]
    image: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    trend: Option<String>,
}

impl ItemRecord {
    fn try_from_json(entry: Value) -> Result<Self, RecordError> {
        if !entry.is_object() {
            return Err(RecordError::NotAnObject);
        }
        ItemRecord::try_from(serde_json::from_value::<ItemDto>(entry)?)
    }
}

impl TryFrom<ItemDto> for ItemRecord {
    type Error = RecordError;

    fn try_from(dto: ItemDto) -> Result<Self, Self::Error> {
        let name = dto
            .name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .ok_or(RecordError::MissingName)?;
        let value = match dto.value {
            None => 0,
            Some(raw) => value_from_json(&raw).ok_or_else(|| RecordError::InvalidValue(raw.to_string()))?,
        };

        Ok(ItemRecord {
            name,
            value,
            image: dto.image.unwrap_or_default(),
            category: dto.category.unwrap_or_default(),
            trend: dto.trend.unwrap_or_default(),
        })
    }
}

/// Accepts non-negative integers, including integral floats such as `1e6`.
fn value_from_json(raw: &Value) -> Option<u64> {
    let Value::Number(number) = raw else {
        return None;
    };
    if let Some(value) = number.as_u64() {
        return Some(value);
    }
    let float = number.as_f64()?;
    if float.is_finite() && float >= 0.0 && float.fract() == 0.0 && float < u64::MAX as f64 {
        Some(float as u64)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_parse_valid_entries_in_order() {
        let data = r#"[
            {"name": "Kitsune", "value": 200000000, "image": "k.png", "category": "Mythical", "trend": "Overpaid"},
            {"name": "Rocket", "value": 5000, "image": "r.png", "category": "Common", "trend": "Stable"}
        ]"#;
        let (records, rejected) = parse_catalog(data).expect("array parses");
        assert!(rejected.is_empty());
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].name, "Kitsune");
        assert_eq!(records[0].value, 200_000_000);
        assert_eq!(records[0].category, "Mythical");
        assert_eq!(records[1].trend, "Stable");
    }

    #[test]
    fn test_missing_value_defaults_to_zero() {
        let data = r#"[{"name": "Spin"}, {"name": "Gas", "value": null}, {"name": "Ice", "value": 1.5e6}]"#;
        let (records, rejected) = parse_catalog(data).expect("array parses");
        assert!(rejected.is_empty());
        assert_eq!(records[0].value, 0);
        assert_eq!(records[0].image, "");
        assert_eq!(records[1].value, 0);
        assert_eq!(records[2].value, 1_500_000);
    }

    #[test]
    fn test_bad_entries_are_rejected() {
        let data = r#"[
            {"value": 10},
            {"name": "   ", "value": 10},
            {"name": "Neg", "value": -5},
            {"name": "Frac", "value": 2.5},
            {"name": "Text", "value": "lots"},
            {"name": 42},
            "Kitsune",
            {"name": "Dragon", "value": 3},
            {"name": "Dragon", "value": 4},
            {"name": "Huge", "value": 18446744073709551616}
        ]"#;
        let (records, rejected) = parse_catalog(data).expect("array parses");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].value, 3);

        let reasons: Vec<_> = rejected.iter().map(|r| (r.index, &r.reason)).collect();
        assert_eq!(reasons.len(), 9);
        assert!(matches!(reasons[0], (0, RecordError::MissingName)));
        assert!(matches!(reasons[1], (1, RecordError::MissingName)));
        assert!(matches!(reasons[2], (2, RecordError::InvalidValue(_))));
        assert!(matches!(reasons[3], (3, RecordError::InvalidValue(_))));
        assert!(matches!(reasons[4], (4, RecordError::InvalidValue(_))));
        assert!(matches!(reasons[5], (5, RecordError::Shape(_))));
        assert!(matches!(reasons[6], (6, RecordError::NotAnObject)));
        assert!(matches!(reasons[7], (8, RecordError::DuplicateName(_))));
        assert!(matches!(reasons[8], (9, RecordError::InvalidValue(_))));
    }

    #[test]
    fn test_non_array_document_is_malformed() {
        assert!(parse_catalog(r#"{"name": "Kitsune"}"#).is_err());
        assert!(parse_catalog("not json").is_err());
        let (records, _) = parse_catalog("[]").expect("empty list parses");
        assert!(records.is_empty());
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().expect("tempdir");
        let load = load_catalog(&dir.path().join("fruits_data.json"));
        assert!(!load.is_available());
        assert!(load.records.is_empty());
        assert!(matches!(load.error, Some(CatalogError::SourceUnavailable { .. })));
    }

    #[test]
    fn test_load_malformed_file_is_empty() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "{{ broken").expect("write");
        let load = load_catalog(file.path());
        assert!(load.records.is_empty());
        assert!(matches!(load.error, Some(CatalogError::Malformed { .. })));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, r#"[{{"name": "Buddha", "value": 12000000}}, {{"value": 1}}]"#).expect("write");
        let load = load_catalog(file.path());
        assert!(load.is_available());
        assert_eq!(load.records.len(), 1);
        assert_eq!(load.rejected.len(), 1);
        assert_eq!(load.path, file.path());
    }
}
