use campusmap_shared::models::DatasetKind;
use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn LandingPage() -> Element {
    rsx! {
        div { class: "landing",
            h2 { "Where do you want to study?" }
            p { class: "dim",
                "Browse campuses on the map, filter them by type and field of study, and keep a short list of favourites."
            }
            div { class: "landing-choices",
                for kind in DatasetKind::ALL {
                    Link {
                        to: Route::Home { kind: kind.as_str().to_string() },
                        class: "choice",
                        "{kind.display_name()}"
                    }
                }
            }
        }
    }
}
