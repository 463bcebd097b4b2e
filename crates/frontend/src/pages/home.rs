use campusmap_shared::favourites::Favourites;
use campusmap_shared::filter::FilterState;
use campusmap_shared::geo::Viewport;
use campusmap_shared::grades::{self, Grade, SUBJECTS};
use campusmap_shared::loader;
use campusmap_shared::models::{CampusRecord, DatasetKind, FieldEntry, FieldOfStudyMap};
use campusmap_shared::selection::{RecenterCommand, Selection};
use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;

use crate::api::{self, ApiError};
use crate::components::header::Header;
use crate::components::favourites_list::FavouritesList;
use crate::components::grade_filter::GradeFilter;
use crate::components::map_view::{map_is_mounted, MapView};
use crate::components::search_bar::SearchBar;
use crate::components::side_panel::SidePanel;
use crate::components::type_filter::TypeFilter;
use crate::storage::LocalStorageStore;
use crate::Route;

/// School names in first-seen order.
fn unique_schools(markers: &[CampusRecord]) -> Vec<String> {
    let mut schools: Vec<String> = Vec::new();
    for marker in markers {
        if !schools.contains(&marker.school_name) {
            schools.push(marker.school_name.clone());
        }
    }
    schools
}

fn campuses_of(markers: &[CampusRecord], school: &str) -> Vec<CampusRecord> {
    markers
        .iter()
        .filter(|m| m.school_name == school)
        .cloned()
        .collect()
}

/// Field data for the filter. A failed fetch leaves the map unrestricted.
fn field_map_or_empty(result: Result<Vec<FieldEntry>, ApiError>) -> FieldOfStudyMap {
    match result {
        Ok(entries) => FieldOfStudyMap::new(entries),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to fetch field-of-study data");
            FieldOfStudyMap::default()
        }
    }
}

/// Viewport a deferred recentre should apply once its delay has passed.
///
/// `ticket` is the selection that issued it and `latest` the newest selection
/// since. A superseded or unmounted recentre does nothing.
fn recenter_outcome(
    command: &RecenterCommand,
    ticket: u64,
    latest: u64,
    mounted: bool,
) -> Option<Viewport> {
    (ticket == latest && mounted).then(|| Viewport::new(command.target, command.zoom))
}

#[component]
pub fn HomePage(kind: DatasetKind) -> Element {
    let namespace = kind.as_str();

    // Data
    let mut markers = use_signal(Vec::<CampusRecord>::new);
    let mut fields = use_signal(FieldOfStudyMap::default);

    // UI state
    let mut filter = use_signal(FilterState::default);
    let mut selection = use_signal(Selection::default);
    let mut favourites = use_signal(move || Favourites::new(LocalStorageStore).list(namespace));
    let mut viewport = use_signal(Viewport::default);
    let grades = use_signal(|| vec![None::<Grade>; SUBJECTS.len()]);
    let mut recenter_task = use_signal(|| None::<Task>);
    let mut selection_generation = use_signal(|| 0u64);

    let _dataset_loader = use_resource(move || async move {
        match api::fetch_dataset(kind).await {
            Ok(data) => {
                let loaded = loader::load_dataset(&data);
                filter.write().reset_types(loaded.available_types);
                markers.set(loaded.markers);
            }
            Err(e) => {
                // Leaves an empty map rather than surfacing the failure.
                tracing::error!(%kind, error = %e, "Failed to fetch campus dataset");
            }
        }
    });

    let _fields_loader = use_resource(move || async move {
        fields.set(field_map_or_empty(api::fetch_fields().await));
    });

    let visible = use_memo(move || filter.read().visible(&markers.read(), &fields.read()));

    let mut select_school = move |school: String, recenter: bool| {
        let command = selection
            .write()
            .select(&school, recenter, &markers.peek());

        // A newer selection supersedes a pending recentre.
        let ticket = *selection_generation.peek() + 1;
        selection_generation.set(ticket);
        if let Some(task) = recenter_task.write().take() {
            task.cancel();
        }
        if let Some(command) = command {
            let task = spawn(async move {
                TimeoutFuture::new(command.delay.as_millis() as u32).await;
                let latest = *selection_generation.peek();
                match recenter_outcome(&command, ticket, latest, map_is_mounted()) {
                    Some(next) => viewport.set(next),
                    None => tracing::debug!(ticket, latest, "Skipping stale recentre"),
                }
            });
            recenter_task.set(Some(task));
        }
    };

    let mut toggle_favourite = move |school: String| {
        let updated = Favourites::new(LocalStorageStore).toggle(namespace, &school);
        favourites.set(updated);
    };

    let all_markers = markers.read().clone();
    let schools = unique_schools(&all_markers);
    let field_names: Vec<String> = fields.read().fields().map(String::from).collect();
    let selected_field = filter.read().selected_field.clone();
    let points = grades::total_points(&grades.read());
    let favourite_list = favourites.read().clone();
    let panel_school = if selection.read().is_open() {
        selection.read().selected_school().map(String::from)
    } else {
        None
    };

    rsx! {
        Header {}
        div { class: "home",
            aside { class: "sidebar",
                h2 { "{kind.display_name()}" }

                SearchBar {
                    schools: schools,
                    on_select: move |school: String| select_school(school, true),
                }
                TypeFilter { filter }
                FavouritesList {
                    favourites: favourite_list.clone(),
                    on_toggle: move |school: String| toggle_favourite(school),
                    on_select: move |school: String| select_school(school, true),
                }
                GradeFilter {
                    fields: field_names,
                    selected_field: selected_field,
                    on_field_selected: move |field: Option<String>| filter.write().select_field(field),
                    grades,
                }
                if points > 0 {
                    p { class: "points", "Total points: {points}" }
                }

                button {
                    class: "back",
                    onclick: move |_| {
                        navigator().push(Route::Landing {});
                    },
                    "Back to title screen"
                }
            }

            main { class: "map-area",
                MapView {
                    markers: visible(),
                    favourites: favourite_list.clone(),
                    viewport,
                    on_toggle_favourite: move |school: String| toggle_favourite(school),
                    on_open_panel: move |school: String| select_school(school, false),
                }

                if let Some(school) = panel_school {
                    SidePanel {
                        key: "{school}",
                        campuses: campuses_of(&all_markers, &school),
                        is_favourite: favourite_list.contains(&school),
                        points: points,
                        on_toggle_favourite: {
                            let school = school.clone();
                            move |_: ()| toggle_favourite(school.clone())
                        },
                        on_close: move |_: ()| selection.write().close(),
                        school: school,
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use campusmap_shared::models::Coordinate;
    use campusmap_shared::selection::{RECENTER_DELAY, RECENTER_ZOOM};

    fn record(school: &str, campus: &str) -> CampusRecord {
        CampusRecord {
            school_name: school.to_string(),
            campus_name: campus.to_string(),
            coord: Coordinate { lat: 61.5, lon: 23.8 },
            campus_type: "main".to_string(),
        }
    }

    #[test]
    fn test_unique_schools_first_seen_order() {
        let markers = vec![
            record("Tampere University", "Hervanta"),
            record("Aalto University", "Otaniemi"),
            record("Tampere University", "Kauppi"),
        ];
        assert_eq!(
            unique_schools(&markers),
            vec!["Tampere University", "Aalto University"]
        );
    }

    #[test]
    fn test_campuses_of_school() {
        let markers = vec![
            record("Tampere University", "Hervanta"),
            record("Aalto University", "Otaniemi"),
            record("Tampere University", "Kauppi"),
        ];
        let campuses = campuses_of(&markers, "Tampere University");
        let names: Vec<&str> = campuses.iter().map(|c| c.campus_name.as_str()).collect();
        assert_eq!(names, vec!["Hervanta", "Kauppi"]);
        assert!(campuses_of(&markers, "Unknown").is_empty());
    }

    fn command() -> RecenterCommand {
        RecenterCommand {
            target: Coordinate { lat: 61.4498, lon: 23.8568 },
            zoom: RECENTER_ZOOM,
            delay: RECENTER_DELAY,
        }
    }

    #[test]
    fn test_recenter_applies_when_current_and_mounted() {
        let vp = recenter_outcome(&command(), 3, 3, true).unwrap();
        assert_eq!(vp.center, command().target);
        assert_eq!(vp.zoom, RECENTER_ZOOM);
    }

    #[test]
    fn test_recenter_skipped_after_unmount() {
        assert_eq!(recenter_outcome(&command(), 3, 3, false), None);
    }

    #[test]
    fn test_newer_selection_cancels_pending_recenter() {
        // Issued by selection 1, but selection 2 happened during the delay.
        assert_eq!(recenter_outcome(&command(), 1, 2, true), None);
    }

    #[test]
    fn test_failed_field_fetch_degrades_to_empty() {
        let fields = field_map_or_empty(Err(ApiError::Status(502)));
        assert!(fields.is_empty());
    }

    #[test]
    fn test_field_fetch_builds_map() {
        let fields = field_map_or_empty(Ok(vec![FieldEntry {
            field: "Medicine".to_string(),
            universities: vec!["Tampere University".to_string()],
        }]));
        assert_eq!(fields.len(), 1);
        assert_eq!(
            fields.universities_for("Medicine"),
            Some(&["Tampere University".to_string()][..])
        );
    }
}
