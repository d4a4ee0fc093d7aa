//! Points of interest and the click-to-load area map
//!
//! The map image is only requested after the visitor asks for it. What gets
//! shown comes from a `MapProvider`; when it answers `Unavailable` the
//! section shows the reason instead.

use dioxus::prelude::*;
use estate_common::MapView;

use crate::components::icons::{AlertTriangleIcon, LayersIcon, MapPinIcon};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::PointOfInterest;

#[component]
pub fn NeighborhoodSection(points: Vec<PointOfInterest>, map: MapView) -> Element {
    let mut map_requested = use_signal(|| false);

    rsx! {
        section { class: "py-20 bg-[#f6f5f4]", aria_labelledby: "neighborhood-title",
            div { class: "max-w-7xl mx-auto px-6",
                h2 {
                    id: "neighborhood-title",
                    class: "text-4xl font-bold text-[#121212] mb-10",
                    "Neighborhood & Location"
                }

                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-12",
                    div { class: "space-y-4",
                        for (i , point) in points.iter().enumerate() {
                            article {
                                key: "{i}",
                                class: "flex items-start gap-4 p-5 rounded-xl bg-white shadow-sm",
                                MapPinIcon { class: "w-6 h-6 text-[#b19762] flex-shrink-0 mt-1" }
                                div {
                                    div { class: "flex items-baseline justify-between gap-4",
                                        h3 { class: "font-semibold text-[#121212]", "{point.title}" }
                                        span { class: "text-sm text-[#b19762] whitespace-nowrap", "{point.distance}" }
                                    }
                                    p { class: "text-sm text-[#6b6b6b] mt-1", "{point.description}" }
                                }
                            }
                        }
                    }

                    div {
                        h3 { class: "text-lg font-semibold mb-4", "Area Map" }
                        div { class: "relative rounded-xl overflow-hidden min-h-[400px] bg-white",
                            if map_requested() {
                                MapPanel { view: map.clone() }
                            } else {
                                div { class: "absolute inset-0 flex flex-col items-center justify-center text-center p-6",
                                    MapPinIcon { class: "w-12 h-12 text-[#b19762] mb-4" }
                                    h4 { class: "font-semibold mb-2", "Area Map" }
                                    p { class: "text-sm text-[#6b6b6b] mb-4 max-w-xs",
                                        "Load the map to see the property and nearby amenities."
                                    }
                                    Button {
                                        variant: ButtonVariant::Primary,
                                        size: ButtonSize::Medium,
                                        aria_label: Some("Load area map".to_string()),
                                        onclick: move |_| map_requested.set(true),
                                        "Load Map"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn MapPanel(view: MapView) -> Element {
    match view {
        MapView::Static { image_url, markers } => rsx! {
            img {
                src: "{image_url}",
                alt: "Satellite map of the property and nearby amenities",
                class: "w-full h-full object-cover",
            }
            div { class: "absolute bottom-4 left-4 bg-white/95 rounded-lg shadow-lg p-4 max-w-xs",
                div { class: "flex items-center gap-2 mb-2",
                    LayersIcon { class: "w-4 h-4 text-[#b19762]" }
                    h4 { class: "font-semibold text-sm", "Nearby" }
                }
                ul { class: "space-y-1",
                    for (i , marker) in markers.iter().enumerate() {
                        li {
                            key: "{i}",
                            class: "flex items-center gap-2 text-xs",
                            title: "{marker.description}",
                            span {
                                class: "w-3 h-3 rounded-full flex-shrink-0",
                                style: "background-color: #{marker.color}",
                            }
                            "{marker.label}"
                        }
                    }
                }
            }
        },
        MapView::Unavailable { reason } => rsx! {
            div { class: "absolute inset-0 flex flex-col items-center justify-center text-center p-6",
                AlertTriangleIcon { class: "w-10 h-10 text-amber-500 mb-3" }
                h4 { class: "font-semibold mb-1", "Map unavailable" }
                p { class: "text-sm text-[#6b6b6b] max-w-xs", "{reason}" }
            }
        },
    }
}
