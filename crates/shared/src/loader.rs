use serde_json::Value;

use crate::error::LoadError;
use crate::models::{CampusInfo, CampusRecord};

/// Markers plus the distinct campus types seen while flattening.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoadedDataset {
    pub markers: Vec<CampusRecord>,
    pub available_types: Vec<String>,
}

/// Flatten `school -> campus -> {coord, type}` into one record per campus,
/// in source order.
pub fn flatten_dataset(data: &Value) -> Result<Vec<CampusRecord>, LoadError> {
    let schools = data
        .as_object()
        .ok_or_else(|| LoadError::NotEnumerable("dataset".to_string()))?;

    let mut records = Vec::new();
    for (school_name, campuses) in schools {
        let campuses = campuses
            .as_object()
            .ok_or_else(|| LoadError::NotEnumerable(format!("school {school_name}")))?;
        for (campus_name, info) in campuses {
            let info: CampusInfo =
                serde_json::from_value(info.clone()).map_err(|source| LoadError::Campus {
                    school: school_name.clone(),
                    campus: campus_name.clone(),
                    source,
                })?;
            records.push(CampusRecord {
                school_name: school_name.clone(),
                campus_name: campus_name.clone(),
                coord: info.coord,
                campus_type: info.campus_type,
            });
        }
    }
    Ok(records)
}

/// Campus types in first-seen order, without duplicates.
pub fn distinct_types(records: &[CampusRecord]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for record in records {
        if !types.contains(&record.campus_type) {
            types.push(record.campus_type.clone());
        }
    }
    types
}

/// Flatten a fetched dataset. Shape errors are logged and yield an empty dataset.
pub fn load_dataset(data: &Value) -> LoadedDataset {
    match flatten_dataset(data) {
        Ok(markers) => {
            let available_types = distinct_types(&markers);
            tracing::info!(
                markers = markers.len(),
                types = available_types.len(),
                "Loaded campus dataset"
            );
            LoadedDataset {
                markers,
                available_types,
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "Campus dataset has an unexpected shape");
            LoadedDataset::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "Tampere University": {
                "City Centre": { "coord": { "lat": 61.4941, "lon": 23.7790 }, "type": "main" },
                "Hervanta": { "coord": { "lat": 61.4498, "lon": 23.8572 }, "type": "technology" },
                "Kauppi": { "coord": { "lat": 61.5066, "lon": 23.8130 }, "type": "medicine" }
            },
            "University of Helsinki": {
                "Kumpula": { "coord": { "lat": 60.2050, "lon": 24.9623 }, "type": "technology" }
            }
        })
    }

    #[test]
    fn test_flatten_keeps_every_campus_in_order() {
        let records = flatten_dataset(&sample()).unwrap();
        let keys: Vec<_> = records.iter().map(|r| r.key()).collect();
        assert_eq!(
            keys,
            vec![
                ("Tampere University", "City Centre"),
                ("Tampere University", "Hervanta"),
                ("Tampere University", "Kauppi"),
                ("University of Helsinki", "Kumpula"),
            ]
        );
        assert!((records[1].coord.lon - 23.8572).abs() < 1e-9);
    }

    #[test]
    fn test_distinct_types_first_seen_order() {
        let records = flatten_dataset(&sample()).unwrap();
        assert_eq!(distinct_types(&records), vec!["main", "technology", "medicine"]);
    }

    #[test]
    fn test_flatten_rejects_non_object() {
        let err = flatten_dataset(&json!([1, 2, 3])).unwrap_err();
        assert!(matches!(err, LoadError::NotEnumerable(_)));
    }

    #[test]
    fn test_flatten_rejects_non_object_school() {
        let err = flatten_dataset(&json!({ "A": "oops" })).unwrap_err();
        assert!(err.to_string().contains("school A"));
    }

    #[test]
    fn test_flatten_names_bad_campus() {
        let err = flatten_dataset(&json!({ "A": { "C1": { "type": "uni" } } })).unwrap_err();
        match err {
            LoadError::Campus { school, campus, .. } => {
                assert_eq!(school, "A");
                assert_eq!(campus, "C1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_dataset_degrades_to_empty() {
        let loaded = load_dataset(&Value::Null);
        assert!(loaded.markers.is_empty());
        assert!(loaded.available_types.is_empty());
    }

    #[test]
    fn test_load_dataset_empty_object() {
        let loaded = load_dataset(&json!({}));
        assert_eq!(loaded, LoadedDataset::default());
    }
}
