use dioxus::prelude::*;

const MAX_RESULTS: usize = 8;

/// Schools whose name contains `query`, case-insensitively. Blank queries match nothing.
fn matching_schools<'a>(schools: &'a [String], query: &str) -> Vec<&'a String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    schools
        .iter()
        .filter(|s| s.to_lowercase().contains(&needle))
        .take(MAX_RESULTS)
        .collect()
}

#[component]
pub fn SearchBar(schools: Vec<String>, on_select: EventHandler<String>) -> Element {
    let mut query = use_signal(String::new);
    let current = query.read().clone();
    let results: Vec<String> = matching_schools(&schools, &current)
        .into_iter()
        .cloned()
        .collect();

    rsx! {
        div { class: "panel search-bar",
            input {
                r#type: "search",
                placeholder: "Search schools...",
                "aria-label": "Search schools",
                value: "{current}",
                oninput: move |evt: Event<FormData>| query.set(evt.value()),
            }
            if !results.is_empty() {
                ul { class: "search-results",
                    for school in results {
                        li { key: "{school}",
                            button {
                                class: "link",
                                onclick: {
                                    let school = school.clone();
                                    move |_| {
                                        query.set(String::new());
                                        on_select.call(school.clone());
                                    }
                                },
                                "{school}"
                            }
                        }
                    }
                }
            }
        }
    }
}
