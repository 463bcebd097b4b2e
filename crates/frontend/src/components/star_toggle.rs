use dioxus::prelude::*;

#[component]
pub fn StarToggle(filled: bool, on_toggle: EventHandler<()>) -> Element {
    let label = if filled { "Remove from favourites" } else { "Add to favourites" };
    rsx! {
        button {
            class: if filled { "star filled" } else { "star" },
            title: "{label}",
            "aria-label": "{label}",
            "aria-pressed": "{filled}",
            onclick: move |evt: Event<MouseData>| {
                evt.stop_propagation();
                on_toggle.call(());
            },
            if filled { "★" } else { "☆" }
        }
    }
}
