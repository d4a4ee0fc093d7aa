//! WASM utilities for browser interop
//!
//! # Listener lifetime
//!
//! A JavaScript listener backed by a Rust `Closure` must not outlive the
//! closure. Instead of `closure.forget()`, which leaks and leaves the listener
//! attached for good, [`DocumentKeyListener`] owns its closure and detaches on
//! `Drop`:
//!
//! ```ignore
//! let listener = DocumentKeyListener::new(document, move |event| { ... });
//! // Detached here
//! drop(listener);
//! ```
//!
//! With Dioxus, keep it in a `Signal<Option<DocumentKeyListener>>` and set the
//! signal to `None` to unsubscribe.

use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

/// `keydown` listener on the document that removes itself when dropped.
pub struct DocumentKeyListener {
    document: web_sys_x::Document,
    callback: Closure<dyn FnMut(JsValue)>,
}

impl DocumentKeyListener {
    const EVENT: &'static str = "keydown";

    /// Attaches `on_key` to the document's `keydown` event.
    ///
    /// Events that aren't `KeyboardEvent`s are skipped.
    pub fn new(
        document: web_sys_x::Document,
        mut on_key: impl FnMut(web_sys_x::KeyboardEvent) + 'static,
    ) -> Self {
        let callback: Closure<dyn FnMut(JsValue)> = Closure::wrap(Box::new(move |e: JsValue| {
            if let Ok(event) = e.dyn_into::<web_sys_x::KeyboardEvent>() {
                on_key(event);
            }
        }));

        if document
            .add_event_listener_with_callback(Self::EVENT, callback.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("Failed to attach document keydown listener");
        }

        Self { document, callback }
    }
}

impl Drop for DocumentKeyListener {
    fn drop(&mut self) {
        let _ = self
            .document
            .remove_event_listener_with_callback(Self::EVENT, self.callback.as_ref().unchecked_ref());
    }
}

/// Calls a zero-argument method such as `showModal` or `focus` by name.
///
/// Returns `false` when the method is missing or throws.
pub fn call_method(target: &JsValue, name: &str) -> bool {
    let Ok(method) = js_sys_x::Reflect::get(target, &name.into()) else {
        return false;
    };
    match method.dyn_ref::<js_sys_x::Function>() {
        Some(func) => func.call0(target).is_ok(),
        None => false,
    }
}

pub fn document() -> Option<web_sys_x::Document> {
    web_sys_x::window()?.document()
}

/// Scroll the element with `id` into view. Returns `false` if it's
/// not on the page.
pub fn scroll_to_id(id: &str) -> bool {
    match document().and_then(|d| d.get_element_by_id(id)) {
        Some(element) => {
            element.scroll_into_view();
            true
        }
        None => false,
    }
}
