use dioxus::prelude::*;

use crate::Route;

#[component]
pub fn Header() -> Element {
    rsx! {
        div { class: "header",
            Link { to: Route::Landing {}, class: "brand",
                h1 { "Campus Map" }
            }
        }
    }
}
