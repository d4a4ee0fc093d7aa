//! Modal component using native HTML `<dialog>` element
//!
//! `showModal()` gives top-layer rendering, the browser's own focus handling,
//! Escape to close and `::backdrop` styling. `showModal()` throws when the
//! dialog is already open, so the effect checks the `open` attribute first.
//!
//! Used for the contact confirmation. The image lightbox is not a `<dialog>`
//! because its focus trap and Escape handling are driven by
//! `LightboxController`.

use std::sync::atomic::{AtomicU64, Ordering};

use dioxus::prelude::*;

use crate::wasm_utils::{call_method, document};

static MODAL_ID_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Wraps content in a native `<dialog>` element
#[component]
pub fn Modal(
    is_open: ReadSignal<bool>,
    /// Called on Escape or backdrop click
    on_close: EventHandler<()>,
    /// Accessible name of the dialog
    label: String,
    children: Element,
    #[props(default)] class: Option<String>,
) -> Element {
    let dialog_id = use_hook(|| {
        let id = MODAL_ID_COUNTER.fetch_add(1, Ordering::Relaxed);
        format!("modal-{}", id)
    });
    let dialog_id_for_effect = dialog_id.clone();

    use_effect(move || {
        let is_open = is_open();

        let Some(element) = document().and_then(|d| d.get_element_by_id(&dialog_id_for_effect))
        else {
            return;
        };

        let is_dialog_open = element.has_attribute("open");
        if is_open && !is_dialog_open {
            call_method(&element, "showModal");
        } else if !is_open && is_dialog_open {
            call_method(&element, "close");
        }
    });

    let dialog_class = class.unwrap_or_default();

    // Don't put display classes on the dialog itself, they override the
    // native display:none of a closed dialog. Layout goes on the inner div.
    rsx! {
        dialog {
            id: "{dialog_id}",
            class: "p-0 bg-transparent backdrop:bg-black/70 {dialog_class}",
            aria_label: "{label}",
            oncancel: move |evt| {
                evt.prevent_default();
                on_close.call(());
            },
            if is_open() {
                div {
                    class: "fixed inset-0 flex items-center justify-center p-4",
                    onclick: move |_| on_close.call(()),
                    div { onclick: move |evt| evt.stop_propagation(), {children} }
                }
            }
        }
    }
}
