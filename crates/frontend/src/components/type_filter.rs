use campusmap_shared::filter::FilterState;
use dioxus::prelude::*;

#[component]
pub fn TypeFilter(filter: Signal<FilterState>) -> Element {
    let available = filter.read().available_types.clone();

    rsx! {
        div { class: "panel",
            h3 { "Campus type" }
            if available.is_empty() {
                p { class: "dim", "No campuses loaded." }
            }
            for campus_type in available {
                label { key: "{campus_type}", class: "checkbox-row",
                    input {
                        r#type: "checkbox",
                        checked: filter.read().is_type_selected(&campus_type),
                        onchange: {
                            let campus_type = campus_type.clone();
                            move |_| filter.write().toggle_type(&campus_type)
                        },
                    }
                    "{campus_type}"
                }
            }
        }
    }
}
