mod api;
mod components;
mod pages;
mod storage;

use campusmap_shared::models::DatasetKind;
use dioxus::prelude::*;

#[derive(Routable, Clone, PartialEq)]
enum Route {
    #[route("/")]
    Landing {},
    #[route("/home/:kind")]
    Home { kind: String },
}

#[component]
fn Landing() -> Element {
    rsx! {
        components::header::Header {}
        pages::landing::LandingPage {}
    }
}

/// Dataset kind named by a `/home/:kind` URL segment.
fn kind_from_segment(segment: &str) -> Option<DatasetKind> {
    match segment.parse::<DatasetKind>() {
        Ok(kind) => Some(kind),
        Err(e) => {
            tracing::warn!(%segment, "{e}");
            None
        }
    }
}

#[component]
fn Home(kind: String) -> Element {
    let Some(parsed) = kind_from_segment(&kind) else {
        return rsx! {
            components::header::Header {}
            pages::landing::LandingPage {}
        };
    };
    rsx! {
        // Sole root node so the key applies: switching kind remounts the page,
        // resetting its state and refetching its data.
        pages::home::HomePage { key: "{parsed}", kind: parsed }
    }
}

const CSS: Asset = asset!("/assets/main.css");
const FAVICON: Asset = asset!("/assets/favicon.svg");

#[allow(non_snake_case)]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Stylesheet { href: CSS }
        Router::<Route> {}
    }
}

fn main() {
    launch(App);
}
