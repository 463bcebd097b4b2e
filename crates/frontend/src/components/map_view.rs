use campusmap_shared::geo::{self, Viewport};
use campusmap_shared::models::CampusRecord;
use dioxus::html::geometry::WheelDelta;
use dioxus::html::input_data::MouseButton;
use dioxus::prelude::*;

use crate::components::star_toggle::StarToggle;

const MAP_CONTAINER_ID: &str = "campus-map-container";

/// Drag threshold in pixels. Movement below this is treated as a click.
const DRAG_THRESHOLD: f64 = 3.0;

/// Wheel movement (in pixels) below this is ignored.
const WHEEL_DEADZONE: f64 = 1.0;

/// Size assumed until the container has been measured.
const FALLBACK_SIZE: (f64, f64) = (960.0, 720.0);

/// Markers this far outside the container are still drawn so they slide in while panning.
const MARKER_MARGIN: f64 = 32.0;

// ---------------------------------------------------------------------------
// DOM helpers
// ---------------------------------------------------------------------------

/// Get the bounding client rect of the map container element.
fn container_rect() -> Option<web_sys::DomRect> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(MAP_CONTAINER_ID)?;
    Some(element.get_bounding_client_rect())
}

/// Whether the map surface is still in the DOM. Deferred work checks this before touching the view.
pub fn map_is_mounted() -> bool {
    container_rect().is_some()
}

fn measure(size: &mut Signal<(f64, f64)>) {
    if let Some(rect) = container_rect() {
        let measured = (rect.width(), rect.height());
        if measured.0 > 0.0 && measured.1 > 0.0 && *size.peek() != measured {
            size.set(measured);
        }
    }
}

// ---------------------------------------------------------------------------
// Pure helpers
// ---------------------------------------------------------------------------

/// Convert a wheel delta (pixels / lines / pages) to a uniform pixel-like value.
fn wheel_delta_y(delta: WheelDelta) -> f64 {
    match delta {
        WheelDelta::Pixels(d) => d.y,
        WheelDelta::Lines(d) => d.y * 40.0,
        WheelDelta::Pages(d) => d.y * 400.0,
    }
}

/// Scrolling up zooms in one level, down zooms out.
fn zoom_step(delta_y: f64) -> i8 {
    if delta_y.abs() < WHEEL_DEADZONE {
        0
    } else if delta_y < 0.0 {
        1
    } else {
        -1
    }
}

#[derive(Debug, Clone, PartialEq)]
struct PlacedMarker {
    school: String,
    campus: String,
    x: f64,
    y: f64,
}

/// Element key for a campus marker. The unit separator cannot occur in names.
fn marker_key(school: &str, campus: &str) -> String {
    format!("{school}\u{1f}{campus}")
}

/// Screen positions for markers inside (or just outside) the container.
fn place_markers(markers: &[CampusRecord], viewport: &Viewport, width: f64, height: f64) -> Vec<PlacedMarker> {
    markers
        .iter()
        .filter_map(|m| {
            let (x, y) = viewport.to_screen(m.coord, width, height);
            let inside = x >= -MARKER_MARGIN
                && x <= width + MARKER_MARGIN
                && y >= -MARKER_MARGIN
                && y <= height + MARKER_MARGIN;
            inside.then(|| PlacedMarker {
                school: m.school_name.clone(),
                campus: m.campus_name.clone(),
                x,
                y,
            })
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

#[component]
pub fn MapView(
    markers: Vec<CampusRecord>,
    favourites: Vec<String>,
    viewport: Signal<Viewport>,
    on_toggle_favourite: EventHandler<String>,
    on_open_panel: EventHandler<String>,
) -> Element {
    let mut size = use_signal(|| FALLBACK_SIZE);

    // Drag state (mouse)
    let mut is_dragging = use_signal(|| false);
    let mut did_drag = use_signal(|| false);
    let mut drag_start = use_signal(|| (0.0_f64, 0.0_f64));
    let mut drag_start_viewport = use_signal(Viewport::default);

    // (school, campus) of the marker whose popup is showing
    let mut open_popup = use_signal(|| None::<(String, String)>);

    let (width, height) = *size.read();
    let vp = *viewport.read();
    let tiles = vp.visible_tiles(width, height);
    let placed = place_markers(&markers, &vp, width, height);
    let popup = open_popup.read().clone();

    let container_class = if *is_dragging.read() && *did_drag.read() {
        "map-container dragging"
    } else {
        "map-container"
    };

    rsx! {
        div {
            id: MAP_CONTAINER_ID,
            class: "{container_class}",

            onmounted: move |_| measure(&mut size),

            onwheel: move |evt: Event<WheelData>| {
                evt.prevent_default();
                measure(&mut size);

                let step = zoom_step(wheel_delta_y(evt.data().delta()));
                if step == 0 {
                    return;
                }
                let Some(rect) = container_rect() else { return };
                let client = evt.data().client_coordinates();
                let (w, h) = *size.read();
                let next = viewport
                    .read()
                    .zoom_at(client.x - rect.left(), client.y - rect.top(), w, h, step);
                viewport.set(next);
            },

            onmousedown: move |evt: Event<MouseData>| {
                // Only track drag/click for left mouse button
                if evt.trigger_button() != Some(MouseButton::Primary) {
                    return;
                }
                measure(&mut size);
                let client = evt.client_coordinates();
                is_dragging.set(true);
                did_drag.set(false);
                drag_start.set((client.x, client.y));
                drag_start_viewport.set(*viewport.read());
            },

            onmousemove: move |evt: Event<MouseData>| {
                if !*is_dragging.read() {
                    return;
                }
                let client = evt.client_coordinates();
                let (sx, sy) = *drag_start.read();
                let dx = client.x - sx;
                let dy = client.y - sy;

                if !*did_drag.read() && (dx.abs() > DRAG_THRESHOLD || dy.abs() > DRAG_THRESHOLD) {
                    did_drag.set(true);
                }
                if *did_drag.read() {
                    let next = drag_start_viewport.read().pan_by(dx, dy);
                    viewport.set(next);
                }
            },

            onmouseup: move |_| {
                let was_click = *is_dragging.read() && !*did_drag.read();
                is_dragging.set(false);
                // A click on bare map dismisses any open popup
                if was_click {
                    open_popup.set(None);
                }
            },

            onmouseleave: move |_| {
                is_dragging.set(false);
            },

            ondoubleclick: move |evt: Event<MouseData>| {
                evt.prevent_default();
                let Some(rect) = container_rect() else { return };
                let client = evt.client_coordinates();
                let (w, h) = *size.read();
                let next = viewport
                    .read()
                    .zoom_at(client.x - rect.left(), client.y - rect.top(), w, h, 1);
                viewport.set(next);
            },

            div { class: "tile-layer",
                for tile in tiles {
                    img {
                        key: "{tile.z}/{tile.x}/{tile.y}/{tile.left}",
                        class: "tile",
                        src: "{tile.url()}",
                        draggable: "false",
                        alt: "",
                        style: "left:{tile.left}px;top:{tile.top}px;",
                    }
                }
            }

            div { class: "marker-layer",
                for marker in placed {
                    {
                        let is_favourite = favourites.contains(&marker.school);
                        let key = (marker.school.clone(), marker.campus.clone());
                        let is_open = popup.as_ref() == Some(&key);
                        let PlacedMarker { school, campus, x, y } = marker;
                        let element_key = marker_key(&school, &campus);
                        let on_star = {
                            let school = school.clone();
                            move |_: ()| on_toggle_favourite.call(school.clone())
                        };
                        let on_open = {
                            let school = school.clone();
                            move |_: Event<MouseData>| on_open_panel.call(school.clone())
                        };

                        rsx! {
                            div {
                                key: "{element_key}",
                                class: "marker-anchor",
                                style: "left:{x}px;top:{y}px;",
                                onmousedown: move |evt: Event<MouseData>| evt.stop_propagation(),
                                onmouseup: move |evt: Event<MouseData>| evt.stop_propagation(),
                                ondoubleclick: move |evt: Event<MouseData>| evt.stop_propagation(),

                                div {
                                    class: if is_favourite { "marker favourite" } else { "marker" },
                                    title: "{campus}",
                                    onclick: move |evt: Event<MouseData>| {
                                        evt.stop_propagation();
                                        if is_open {
                                            open_popup.set(None);
                                        } else {
                                            open_popup.set(Some(key.clone()));
                                        }
                                    },
                                }
                                if is_open {
                                    div { class: "popup",
                                        StarToggle { filled: is_favourite, on_toggle: on_star }
                                        button { class: "popup-open", onclick: on_open,
                                            strong { "{campus}" }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }

            div { class: "attribution", "{geo::ATTRIBUTION}" }
        }
    }
}
