use std::collections::HashSet;

use crate::models::{CampusRecord, FieldOfStudyMap};

/// Universities allowed by the selected field of study.
///
/// Empty means "no restriction". That covers both no selection and a selected
/// field that is missing from `fields`.
pub fn allowed_schools(selected_field: Option<&str>, fields: &FieldOfStudyMap) -> HashSet<String> {
    selected_field
        .and_then(|field| fields.universities_for(field))
        .map(|unis| unis.iter().cloned().collect())
        .unwrap_or_default()
}

/// Markers whose type is selected and whose school passes the allowlist.
pub fn visible_markers(
    markers: &[CampusRecord],
    selected_types: &HashSet<String>,
    allowed: &HashSet<String>,
) -> Vec<CampusRecord> {
    markers
        .iter()
        .filter(|m| {
            selected_types.contains(&m.campus_type)
                && (allowed.is_empty() || allowed.contains(&m.school_name))
        })
        .cloned()
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub available_types: Vec<String>,
    pub selected_types: HashSet<String>,
    pub selected_field: Option<String>,
}

impl FilterState {
    /// Replace the available types after a load and select all of them.
    pub fn reset_types(&mut self, available: Vec<String>) {
        self.selected_types = available.iter().cloned().collect();
        self.available_types = available;
    }

    /// Flip one type. Types outside `available_types` are ignored.
    pub fn toggle_type(&mut self, campus_type: &str) {
        if !self.available_types.iter().any(|t| t == campus_type) {
            return;
        }
        if !self.selected_types.remove(campus_type) {
            self.selected_types.insert(campus_type.to_string());
        }
    }

    pub fn is_type_selected(&self, campus_type: &str) -> bool {
        self.selected_types.contains(campus_type)
    }

    /// Empty string clears the selection, matching an unselected dropdown.
    pub fn select_field(&mut self, field: Option<String>) {
        self.selected_field = field.filter(|f| !f.is_empty());
    }

    pub fn visible(&self, markers: &[CampusRecord], fields: &FieldOfStudyMap) -> Vec<CampusRecord> {
        let allowed = allowed_schools(self.selected_field.as_deref(), fields);
        visible_markers(markers, &self.selected_types, &allowed)
    }
}
