use dioxus::prelude::*;

use crate::components::star_toggle::StarToggle;

#[component]
pub fn FavouritesList(
    favourites: Vec<String>,
    on_toggle: EventHandler<String>,
    on_select: EventHandler<String>,
) -> Element {
    rsx! {
        div { class: "panel",
            h3 { "Favourites" }
            if favourites.is_empty() {
                p { class: "dim", "Star a campus on the map to keep it here." }
            }
            for school in favourites {
                div { key: "{school}", class: "favourite-row",
                    StarToggle {
                        filled: true,
                        on_toggle: {
                            let school = school.clone();
                            move |_| on_toggle.call(school.clone())
                        },
                    }
                    button {
                        class: "link",
                        onclick: {
                            let school = school.clone();
                            move |_| on_select.call(school.clone())
                        },
                        "{school}"
                    }
                }
            }
        }
    }
}
