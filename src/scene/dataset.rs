//! JSON dataset loading.
//!
//! Three layouts are accepted:
//!
//! - rows: `[["Beijing", 39.9, 116.4, 0.8, "https://…"], …]` (the trailing
//!   locator is optional)
//! - objects: `[{"label": "Beijing", "lat": 39.9, "lng": 116.4}, …]`
//! - flat: `["Beijing", 39.9, 116.4, 0.8, "Paris", 48.8, 2.3, 0.2, …]`, four
//!   values per point and no locators

use std::path::Path;

use serde_json::Value;

use super::point::PointRecord;
use crate::error::GlobeError;

/// Values per point in the flat layout.
const FLAT_STRIDE: usize = 4;

/// Parse a dataset from a JSON string.
pub fn parse_records(json: &str) -> Result<Vec<PointRecord>, GlobeError> {
    let items: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| GlobeError::DatasetParse(e.to_string()))?;

    if items.first().is_some_and(Value::is_string) {
        return parse_flat(&items);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Array(row) => parse_row(i, &row),
            obj @ Value::Object(_) => serde_json::from_value(obj)
                .map_err(|e| GlobeError::DatasetParse(format!("record {i}: {e}"))),
            other => Err(GlobeError::DatasetParse(format!(
                "record {i}: expected array or object, got {other}"
            ))),
        })
        .collect()
}

/// Read and parse a dataset file.
pub fn load_records(path: &Path) -> Result<Vec<PointRecord>, GlobeError> {
    let content = std::fs::read_to_string(path)?;
    parse_records(&content)
}

fn parse_row(i: usize, row: &[Value]) -> Result<PointRecord, GlobeError> {
    if !(4..=5).contains(&row.len()) {
        return Err(GlobeError::DatasetParse(format!(
            "record {i}: expected 4 or 5 fields, got {}",
            row.len()
        )));
    }
    let action_ref = match row.get(4) {
        None | Some(Value::Null) => None,
        Some(v) => Some(string_field(i, v)?),
    };
    Ok(PointRecord {
        label: string_field(i, &row[0])?,
        lat: number_field(i, &row[1])?,
        lng: number_field(i, &row[2])?,
        weight: number_field(i, &row[3])?,
        action_ref,
    })
}

fn parse_flat(items: &[Value]) -> Result<Vec<PointRecord>, GlobeError> {
    if items.len() % FLAT_STRIDE != 0 {
        return Err(GlobeError::DatasetParse(format!(
            "flat dataset length {} is not a multiple of {FLAT_STRIDE}",
            items.len()
        )));
    }
    items
        .chunks_exact(FLAT_STRIDE)
        .enumerate()
        .map(|(i, chunk)| parse_row(i, chunk))
        .collect()
}

fn string_field(i: usize, v: &Value) -> Result<String, GlobeError> {
    v.as_str().map(str::to_owned).ok_or_else(|| {
        GlobeError::DatasetParse(format!("record {i}: expected string, got {v}"))
    })
}

fn number_field(i: usize, v: &Value) -> Result<f32, GlobeError> {
    v.as_f64().map(|n| n as f32).ok_or_else(|| {
        GlobeError::DatasetParse(format!("record {i}: expected number, got {v}"))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_with_and_without_locator() {
        let records = parse_records(
            r#"[["Beijing", 39.9, 116.4, 0.8, "https://example.org/bj"],
                ["Paris", 48.8, 2.3, 0.2]]"#,
        )
        .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "Beijing");
        assert_eq!(
            records[0].action_ref.as_deref(),
            Some("https://example.org/bj")
        );
        assert_eq!(records[1].action_ref, None);
        assert!((records[1].weight - 0.2).abs() < 1e-6);
    }

    #[test]
    fn parses_objects() {
        let records = parse_records(
            r#"[{"label": "Oslo", "lat": 59.9, "lng": 10.7, "weight": 0.1}]"#,
        )
        .unwrap();
        assert_eq!(records[0].label, "Oslo");
        assert!((records[0].lat - 59.9).abs() < 1e-4);
    }

    #[test]
    fn parses_flat_layout() {
        let records =
            parse_records(r#"["Rome", 41.9, 12.5, 0.3, "Cairo", 30.0, 31.2, 0.9]"#)
                .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].label, "Cairo");
        assert_eq!(records[1].action_ref, None);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!(parse_records("not json").is_err());
        assert!(parse_records(r#"["Rome", 41.9, 12.5]"#).is_err());
        assert!(parse_records(r#"[["Rome", "north", 12.5, 0.3]]"#).is_err());
        assert!(parse_records("[42]").is_err());
    }

    #[test]
    fn empty_dataset_is_fine() {
        assert!(parse_records("[]").unwrap().is_empty());
    }
}
