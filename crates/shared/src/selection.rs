use std::time::Duration;

use crate::models::{CampusRecord, Coordinate};

/// Zoom level used when centring on a selected school.
pub const RECENTER_ZOOM: u8 = 13;

/// Lets the panel close and the map settle before panning.
pub const RECENTER_DELAY: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RecenterCommand {
    pub target: Coordinate,
    pub zoom: u8,
    pub delay: Duration,
}

/// Which school the detail panel shows.
///
/// The panel is open only while a school is selected.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Selection {
    selected_school: Option<String>,
    panel_open: bool,
}

impl Selection {
    pub fn selected_school(&self) -> Option<&str> {
        self.selected_school.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.panel_open && self.selected_school.is_some()
    }

    /// Close, then open on `school`. Returns a recentre command when asked for
    /// and the school has a campus in `markers`.
    pub fn select(
        &mut self,
        school: &str,
        recenter: bool,
        markers: &[CampusRecord],
    ) -> Option<RecenterCommand> {
        self.close();

        let command = if recenter {
            markers
                .iter()
                .find(|m| m.school_name == school)
                .map(|m| RecenterCommand {
                    target: m.coord,
                    zoom: RECENTER_ZOOM,
                    delay: RECENTER_DELAY,
                })
        } else {
            None
        };

        self.selected_school = Some(school.to_string());
        self.panel_open = true;
        command
    }

    pub fn close(&mut self) {
        self.selected_school = None;
        self.panel_open = false;
    }
}
