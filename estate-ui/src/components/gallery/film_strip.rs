//! Thumbnail strip that opens the lightbox
//!
//! The strip owns a [`LightboxController`] in a signal. While the lightbox is
//! open a document `keydown` listener routes arrows, Escape and Tab into the
//! controller; it is dropped as soon as the lightbox closes. Unmounting the
//! strip drops the controller, which closes it and releases the scroll lock.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;
use estate_common::{
    KeyDisposition, LightboxController, LightboxKey, MediaCollection, ScrollLockRegistry,
};
use tracing::warn;

use super::lightbox_view::GalleryLightbox;
use crate::browser::{BodyScrollSurface, BrowserPlatform};
use crate::components::icons::MaximizeIcon;
use crate::components::utils::{src_set, THUMBNAIL_WIDTHS};
use crate::components::ChromelessButton;
use crate::wasm_utils::{document, DocumentKeyListener};

/// Lightbox controller bound to the DOM
pub type BrowserLightbox = LightboxController<BrowserPlatform>;

/// Counter for per-gallery DOM id scopes
static LIGHTBOX_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

#[component]
pub fn GalleryFilmStrip(
    images: MediaCollection,
    #[props(default = "Gallery".to_string())] title: String,
) -> Element {
    let scope = use_hook(|| {
        let id = LIGHTBOX_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("lightbox-{}", id)
    });

    // Galleries on one page share the app's registry; a standalone gallery
    // gets its own over the body.
    let registry = use_hook(|| {
        try_consume_context::<ScrollLockRegistry>()
            .unwrap_or_else(|| ScrollLockRegistry::new(BodyScrollSurface))
    });

    let mut lightbox = use_signal({
        let images = images.clone();
        let scope = scope.clone();
        move || LightboxController::new(images, BrowserPlatform::new(scope), registry)
    });

    // Sync when the parent passes a different collection
    if *lightbox.peek().collection() != images {
        lightbox.write().replace_collection(images.clone());
    }

    let is_open = use_memo(move || lightbox.read().is_open());
    let mut key_listener: Signal<Option<DocumentKeyListener>> = use_signal(|| None);

    use_effect(move || {
        if !is_open() {
            // Dropping the listener detaches it
            key_listener.set(None);
            return;
        }

        // The close button didn't exist yet when `open` asked for focus
        lightbox.write().platform_mut().flush_pending_focus();

        if key_listener.peek().is_some() {
            return;
        }
        let Some(document) = document() else {
            return;
        };
        let listener = DocumentKeyListener::new(document, move |event| {
            let key = LightboxKey::from_key_name(&event.key(), event.shift_key());
            if lightbox.write().handle_key(key) == KeyDisposition::Handled {
                event.prevent_default();
            }
        });
        key_listener.set(Some(listener));
    });

    let thumbnails: Vec<(String, String)> = images
        .iter()
        .map(|i| (i.source().to_string(), i.accessible_text().to_string()))
        .collect();

    rsx! {
        section {
            class: "py-16 bg-[#f6f5f4]",
            aria_label: "Property gallery",
            div { class: "max-w-7xl mx-auto px-6",
                h2 { class: "text-4xl font-bold text-center text-[#121212] mb-10", "{title}" }

                if thumbnails.is_empty() {
                    p { class: "text-center text-[#6b6b6b]", "Photos coming soon" }
                } else {
                    div { class: "flex gap-4 overflow-x-auto pb-4 snap-x",
                        for (i , (source , alt)) in thumbnails.into_iter().enumerate() {
                            ChromelessButton {
                                key: "{i}",
                                class: Some(
                                    "group relative flex-shrink-0 w-[240px] h-[160px] rounded-xl overflow-hidden snap-start focus:outline-none focus-visible:ring-2 focus-visible:ring-[#b19762]"
                                        .to_string(),
                                ),
                                aria_label: Some(format!("View {alt} in lightbox")),
                                onclick: move |_| {
                                    if let Err(e) = lightbox.write().open(i) {
                                        warn!("Could not open lightbox: {}", e);
                                    }
                                },
                                img {
                                    src: "{source}",
                                    srcset: src_set(&source, THUMBNAIL_WIDTHS),
                                    sizes: "240px",
                                    alt: "{alt}",
                                    loading: "lazy",
                                    class: "w-full h-full object-cover transition-transform duration-500 group-hover:scale-110",
                                }
                                div { class: "absolute inset-0 bg-black/0 group-hover:bg-black/30 flex items-center justify-center transition-colors",
                                    MaximizeIcon { class: "w-6 h-6 text-white opacity-0 group-hover:opacity-100 transition-opacity" }
                                }
                            }
                        }
                    }
                }
            }

            if is_open() {
                GalleryLightbox { lightbox, scope: scope.clone() }
            }
        }
    }
}
