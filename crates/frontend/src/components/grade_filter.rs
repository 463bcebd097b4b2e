use campusmap_shared::grades::{Grade, SUBJECTS};
use dioxus::prelude::*;

#[component]
pub fn GradeFilter(
    fields: Vec<String>,
    selected_field: Option<String>,
    on_field_selected: EventHandler<Option<String>>,
    grades: Signal<Vec<Option<Grade>>>,
) -> Element {
    let current_field = selected_field.unwrap_or_default();

    rsx! {
        div { class: "panel",
            h3 { "Field of study" }
            select {
                "aria-label": "Select field of study",
                value: "{current_field}",
                onchange: move |evt: Event<FormData>| {
                    let value = evt.value();
                    on_field_selected.call((!value.is_empty()).then_some(value));
                },
                option { value: "", "-- Any field --" }
                for field in fields {
                    option {
                        key: "{field}",
                        value: "{field}",
                        selected: current_field == field,
                        "{field}"
                    }
                }
            }

            h3 { "Grades" }
            for (i, subject) in SUBJECTS.iter().enumerate() {
                div { key: "{subject}", class: "grade-row",
                    label { "{subject}" }
                    select {
                        "aria-label": "{subject} grade",
                        onchange: move |evt: Event<FormData>| {
                            let grade = evt.value().parse::<Grade>().ok();
                            if let Some(slot) = grades.write().get_mut(i) {
                                *slot = grade;
                            }
                        },
                        option { value: "", "-" }
                        for grade in Grade::ALL {
                            option {
                                value: "{grade}",
                                selected: grades.read().get(i).copied().flatten() == Some(grade),
                                "{grade}"
                            }
                        }
                    }
                }
            }
        }
    }
}
