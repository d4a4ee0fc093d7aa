//! Browser implementations of the lightbox platform traits

use estate_common::{LightboxControl, LightboxPlatform, ScrollSurface};
use tracing::{debug, warn};
use wasm_bindgen_x::prelude::*;
use wasm_bindgen_x::JsCast;

use crate::wasm_utils::{call_method, document};

/// DOM-backed [`LightboxPlatform`] for one gallery.
///
/// Control ids are namespaced by `scope` so several galleries can share a
/// page. Focus requested before the lightbox markup exists is parked and
/// applied by [`flush_pending_focus`](Self::flush_pending_focus) after the
/// next render.
pub struct BrowserPlatform {
    scope: String,
    pending_focus: Option<LightboxControl>,
}

impl BrowserPlatform {
    pub fn new(scope: impl Into<String>) -> Self {
        Self {
            scope: scope.into(),
            pending_focus: None,
        }
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    /// Focus the parked control, if any. Call once the lightbox is rendered.
    pub fn flush_pending_focus(&mut self) {
        if let Some(control) = self.pending_focus.take() {
            if !self.try_focus(control) {
                debug!("Lightbox control {:?} not rendered, dropping focus request", control);
            }
        }
    }

    fn try_focus(&self, control: LightboxControl) -> bool {
        document()
            .and_then(|d| d.get_element_by_id(&control.dom_id(&self.scope)))
            .map(|element| call_method(&element, "focus"))
            .unwrap_or(false)
    }
}

impl LightboxPlatform for BrowserPlatform {
    type FocusTarget = web_sys_x::Element;

    fn preload_image(&mut self, source: &str) {
        let Ok(image) = web_sys_x::HtmlImageElement::new() else {
            warn!("Could not create image element for preload");
            return;
        };
        let failed = source.to_string();
        let on_error = Closure::<dyn FnMut()>::once(move || {
            debug!("Preload failed for {}", failed);
        })
        .into_js_value();
        image.set_onerror(Some(on_error.unchecked_ref()));
        image.set_src(source);
        debug!("Preloading {}", source);
    }

    fn active_element(&self) -> Option<web_sys_x::Element> {
        document()?.active_element()
    }

    fn restore_focus(&mut self, target: web_sys_x::Element) {
        if !call_method(&target, "focus") {
            debug!("Previously focused element can no longer take focus");
        }
    }

    fn active_control(&self) -> Option<LightboxControl> {
        let id = document()?.active_element()?.id();
        LightboxControl::from_dom_id(&self.scope, &id)
    }

    fn focus_control(&mut self, control: LightboxControl) {
        if self.try_focus(control) {
            self.pending_focus = None;
        } else {
            self.pending_focus = Some(control);
        }
    }
}

/// Toggles `overflow: hidden` on `document.body`.
#[derive(Debug, Default, Clone, Copy)]
pub struct BodyScrollSurface;

impl ScrollSurface for BodyScrollSurface {
    fn set_scroll_enabled(&mut self, enabled: bool) {
        let Some(body) = document().and_then(|d| d.body()) else {
            warn!("No document body to lock scrolling on");
            return;
        };
        let style = body.style();
        let result = if enabled {
            style.remove_property("overflow").map(|_| ())
        } else {
            style.set_property("overflow", "hidden")
        };
        if result.is_err() {
            warn!("Failed to update body overflow");
        }
    }
}
