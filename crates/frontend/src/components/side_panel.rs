use campusmap_shared::models::CampusRecord;
use dioxus::prelude::*;

use crate::components::star_toggle::StarToggle;

/// Detail panel for one school.
#[component]
pub fn SidePanel(
    school: String,
    campuses: Vec<CampusRecord>,
    is_favourite: bool,
    points: u32,
    on_toggle_favourite: EventHandler<()>,
    on_close: EventHandler<()>,
) -> Element {
    let rows: Vec<(String, String, String)> = campuses
        .iter()
        .map(|c| {
            (
                c.campus_name.clone(),
                c.campus_type.clone(),
                format!("{:.4}, {:.4}", c.coord.lat, c.coord.lon),
            )
        })
        .collect();

    rsx! {
        aside { class: "side-panel", role: "dialog", "aria-label": "{school}",
            div { class: "side-panel-header",
                StarToggle {
                    filled: is_favourite,
                    on_toggle: move |_| on_toggle_favourite.call(()),
                }
                h2 { "{school}" }
                button {
                    class: "secondary close",
                    "aria-label": "Close panel",
                    onclick: move |_| on_close.call(()),
                    "✕"
                }
            }
            h3 { "Campuses" }
            if rows.is_empty() {
                p { class: "dim", "No campuses in the current dataset." }
            }
            ul { class: "campus-list",
                for (name, campus_type, coord) in rows {
                    li { key: "{name}",
                        strong { "{name}" }
                        span { class: "dim", " ({campus_type})" }
                        div { class: "coord", "{coord}" }
                    }
                }
            }
            if points != 0 {
                p { class: "points", "Your points: {points}" }
            }
        }
    }
}
