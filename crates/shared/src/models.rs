use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParseKindError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

/// Leaf of the nested dataset: `school -> campus -> CampusInfo`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusInfo {
    pub coord: Coordinate,
    #[serde(rename = "type")]
    pub campus_type: String,
}

/// One mappable campus. Identity is `(school_name, campus_name)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CampusRecord {
    pub school_name: String,
    pub campus_name: String,
    pub coord: Coordinate,
    #[serde(rename = "type")]
    pub campus_type: String,
}

impl CampusRecord {
    pub fn key(&self) -> (&str, &str) {
        (&self.school_name, &self.campus_name)
    }
}

/// Which dataset a page shows. Also the favourites namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DatasetKind {
    University,
    College,
}

impl DatasetKind {
    pub const ALL: [DatasetKind; 2] = [DatasetKind::University, DatasetKind::College];

    pub fn as_str(&self) -> &'static str {
        match self {
            DatasetKind::University => "university",
            DatasetKind::College => "college",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DatasetKind::University => "Universities",
            DatasetKind::College => "Universities of applied sciences",
        }
    }
}

impl fmt::Display for DatasetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DatasetKind {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "university" => Ok(DatasetKind::University),
            "college" => Ok(DatasetKind::College),
            _ => Err(ParseKindError(s.to_string())),
        }
    }
}

/// One element of the `/api/wherestudy` payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldEntry {
    pub field: String,
    pub universities: Vec<String>,
}

/// Field of study -> universities offering it. Read-only after load.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldOfStudyMap {
    entries: Vec<FieldEntry>,
}

impl FieldOfStudyMap {
    pub fn new(entries: Vec<FieldEntry>) -> Self {
        Self { entries }
    }

    /// First entry matching `field`, in source order.
    pub fn universities_for(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.universities.as_slice())
    }

    pub fn fields(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.field.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}

impl From<Vec<FieldEntry>> for FieldOfStudyMap {
    fn from(entries: Vec<FieldEntry>) -> Self {
        Self::new(entries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_kind_round_trips_through_str() {
        for kind in DatasetKind::ALL {
            assert_eq!(kind.as_str().parse::<DatasetKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_dataset_kind_parse_is_case_insensitive() {
        assert_eq!("College".parse::<DatasetKind>().unwrap(), DatasetKind::College);
    }

    #[test]
    fn test_dataset_kind_rejects_unknown() {
        let err = "hospital".parse::<DatasetKind>().unwrap_err();
        assert_eq!(err.0, "hospital");
    }

    #[test]
    fn test_campus_info_uses_type_on_the_wire() {
        let json = r#"{"coord":{"lat":61.49,"lon":23.78},"type":"main"}"#;
        let info: CampusInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.campus_type, "main");
        assert!((info.coord.lat - 61.49).abs() < 1e-9);
    }

    #[test]
    fn test_field_map_returns_first_match() {
        let map = FieldOfStudyMap::new(vec![
            FieldEntry {
                field: "Medicine".to_string(),
                universities: vec!["Tampere University".to_string()],
            },
            FieldEntry {
                field: "Medicine".to_string(),
                universities: vec!["Other".to_string()],
            },
        ]);
        assert_eq!(
            map.universities_for("Medicine"),
            Some(&["Tampere University".to_string()][..])
        );
        assert!(map.universities_for("Law").is_none());
    }

    #[test]
    fn test_field_entry_deserializes() {
        let json = r#"[{"field":"Law","universities":["University of Helsinki","University of Turku"]}]"#;
        let entries: Vec<FieldEntry> = serde_json::from_str(json).unwrap();
        let map = FieldOfStudyMap::from(entries);
        assert_eq!(map.len(), 1);
        assert_eq!(map.fields().collect::<Vec<_>>(), vec!["Law"]);
    }
}
