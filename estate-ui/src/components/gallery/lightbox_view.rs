//! Full-screen lightbox markup
//!
//! Pure view over a [`BrowserLightbox`]: every click is forwarded to the
//! controller and nothing here keeps state of its own.

use dioxus::prelude::*;
use estate_common::{LightboxControl, PointerTarget};

use super::film_strip::BrowserLightbox;
use crate::components::icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
use crate::components::utils::{src_set, PHOTO_WIDTHS, THUMBNAIL_WIDTHS};
use crate::components::ChromelessButton;

const NAV_BUTTON_CLASS: &str = "absolute top-1/2 -translate-y-1/2 w-14 h-14 bg-white/10 hover:bg-white/20 rounded-full flex items-center justify-center transition-colors z-10 focus:outline-none focus-visible:ring-2 focus-visible:ring-[#b19762]";

struct Slide {
    source: String,
    alt: String,
    caption: String,
}

/// Renders nothing while the controller is closed.
#[component]
pub fn GalleryLightbox(mut lightbox: Signal<BrowserLightbox>, scope: String) -> Element {
    let (index, total, slide, thumbnails) = {
        let state = lightbox.read();
        let Some(index) = state.focused_index() else {
            return rsx! {};
        };
        let Ok(image) = state.collection().get(index) else {
            return rsx! {};
        };
        let slide = Slide {
            source: image.source().to_string(),
            alt: image.accessible_text().to_string(),
            caption: image.caption().to_string(),
        };
        let thumbnails: Vec<(String, String)> = state
            .collection()
            .iter()
            .map(|i| (i.source().to_string(), i.accessible_text().to_string()))
            .collect();
        (index, state.collection().len(), slide, thumbnails)
    };

    let position = index + 1;

    rsx! {
        div {
            class: "fixed inset-0 z-50 bg-black/95 flex items-center justify-center",
            role: "dialog",
            aria_modal: "true",
            aria_label: "Image lightbox",
            onclick: move |_| lightbox.write().handle_pointer(PointerTarget::Backdrop),

            ChromelessButton {
                id: Some(LightboxControl::Close.dom_id(&scope)),
                class: Some(
                    "absolute top-4 right-4 p-2 text-white/70 hover:text-white transition-colors z-10 focus:outline-none focus-visible:ring-2 focus-visible:ring-[#b19762] rounded-full"
                        .to_string(),
                ),
                aria_label: Some("Close lightbox".to_string()),
                onclick: move |e: MouseEvent| {
                    e.stop_propagation();
                    lightbox.write().close();
                },
                XIcon { class: "w-8 h-8" }
            }

            if total > 1 {
                ChromelessButton {
                    id: Some(LightboxControl::Previous.dom_id(&scope)),
                    class: Some(format!("{NAV_BUTTON_CLASS} left-4")),
                    aria_label: Some("Previous image".to_string()),
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        lightbox.write().previous();
                    },
                    ChevronLeftIcon { class: "w-8 h-8 text-white -translate-x-0.5", stroke_width: "1.5" }
                }
                ChromelessButton {
                    id: Some(LightboxControl::Next.dom_id(&scope)),
                    class: Some(format!("{NAV_BUTTON_CLASS} right-4")),
                    aria_label: Some("Next image".to_string()),
                    onclick: move |e: MouseEvent| {
                        e.stop_propagation();
                        lightbox.write().next();
                    },
                    ChevronRightIcon { class: "w-8 h-8 text-white translate-x-0.5", stroke_width: "1.5" }
                }
            }

            div {
                class: "flex flex-col items-center max-w-[90vw]",
                onclick: move |e| {
                    e.stop_propagation();
                    lightbox.write().handle_pointer(PointerTarget::Content);
                },
                img {
                    src: "{slide.source}",
                    srcset: src_set(&slide.source, PHOTO_WIDTHS),
                    sizes: "(max-width: 768px) 90vw, (max-width: 1024px) 80vw, 70vw",
                    alt: "{slide.alt}",
                    class: "max-w-[90vw] max-h-[75vh] object-contain rounded-lg shadow-2xl",
                }
                div { class: "mt-4 text-center",
                    if !slide.caption.is_empty() {
                        p { class: "text-white text-lg", "{slide.caption}" }
                    }
                    p { class: "text-white/60 text-sm mt-1", aria_live: "polite", "{position} of {total}" }
                }

                if total > 1 {
                    div { class: "mt-6 flex gap-2 overflow-x-auto max-w-[90vw] p-1",
                        for (i , (source , alt)) in thumbnails.into_iter().enumerate() {
                            ChromelessButton {
                                key: "{i}",
                                id: Some(LightboxControl::Thumbnail(i).dom_id(&scope)),
                                class: Some(
                                    format!(
                                        "flex-shrink-0 w-20 h-14 rounded overflow-hidden focus:outline-none focus-visible:ring-2 focus-visible:ring-[#b19762] {}",
                                        if i == index { "ring-2 ring-[#b19762]" } else { "opacity-60 hover:opacity-100" },
                                    ),
                                ),
                                aria_label: Some(format!("Show {alt}")),
                                aria_current: if i == index { Some("true") } else { None },
                                onclick: move |_| {
                                    let _ = lightbox.write().open(i);
                                },
                                img {
                                    src: "{source}",
                                    srcset: src_set(&source, THUMBNAIL_WIDTHS),
                                    sizes: "80px",
                                    alt: "",
                                    class: "w-full h-full object-cover",
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
