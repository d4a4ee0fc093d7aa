//! Lightbox state machine
//!
//! `LightboxController` owns which image is shown and whether the viewer is
//! open, and drives the side effects tied to those transitions: page scroll
//! lock, focus capture and restoration, focus trapping, and neighbor preload.
//! Browser primitives are reached through [`LightboxPlatform`] so the state
//! machine runs (and is tested) without a DOM.

use std::collections::HashSet;

use tracing::{debug, info};

use crate::focus_trap::{FocusTrap, LightboxControl};
use crate::media::{ImageDescriptor, MediaCollection, OutOfRangeError};
use crate::scroll_lock::{ScrollLockGuard, ScrollLockRegistry};

/// Browser capabilities the lightbox needs.
pub trait LightboxPlatform {
    /// Handle to whatever had focus before the lightbox opened.
    type FocusTarget;

    /// Ask the browser to fetch `source` into its image cache. Fire and
    /// forget: failures are the platform's to log, never the controller's.
    fn preload_image(&mut self, source: &str);

    /// Currently focused page element, if any.
    fn active_element(&self) -> Option<Self::FocusTarget>;

    /// Give focus back to an element captured by [`active_element`](Self::active_element).
    fn restore_focus(&mut self, target: Self::FocusTarget);

    /// Lightbox control that currently has focus, if focus is inside the lightbox.
    fn active_control(&self) -> Option<LightboxControl>;

    fn focus_control(&mut self, control: LightboxControl);
}

/// Keys the lightbox reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    ArrowLeft,
    ArrowRight,
    Escape,
    Tab { shift: bool },
    Other,
}

impl LightboxKey {
    /// Map a DOM `KeyboardEvent.key` value.
    pub fn from_key_name(key: &str, shift: bool) -> Self {
        match key {
            "ArrowLeft" => LightboxKey::ArrowLeft,
            "ArrowRight" => LightboxKey::ArrowRight,
            "Escape" | "Esc" => LightboxKey::Escape,
            "Tab" => LightboxKey::Tab { shift },
            _ => LightboxKey::Other,
        }
    }
}

/// Whether the caller should suppress the browser default for the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyDisposition {
    /// Consumed by the lightbox; call `preventDefault`.
    Handled,
    Ignored,
}

/// Where a pointer click landed while the lightbox is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The dimmed area around the image.
    Backdrop,
    /// The image, its caption, or any control.
    Content,
}

struct LightboxState<F> {
    /// `Some` exactly while the viewer is open.
    focused_index: Option<usize>,
    /// Sources already handed to the platform. Grow-only.
    preloaded: HashSet<String>,
    scroll_lock: Option<ScrollLockGuard>,
    return_focus: Option<F>,
}

/// Full-screen image viewer controller, one per mounted gallery.
pub struct LightboxController<P: LightboxPlatform> {
    collection: MediaCollection,
    focus_trap: FocusTrap,
    scroll_locks: ScrollLockRegistry,
    platform: P,
    state: LightboxState<P::FocusTarget>,
}

impl<P: LightboxPlatform> LightboxController<P> {
    pub fn new(collection: MediaCollection, platform: P, scroll_locks: ScrollLockRegistry) -> Self {
        let focus_trap = FocusTrap::for_lightbox(collection.len());
        Self {
            collection,
            focus_trap,
            scroll_locks,
            platform,
            state: LightboxState {
                focused_index: None,
                preloaded: HashSet::new(),
                scroll_lock: None,
                return_focus: None,
            },
        }
    }

    pub fn collection(&self) -> &MediaCollection {
        &self.collection
    }

    pub fn focus_trap(&self) -> &FocusTrap {
        &self.focus_trap
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn is_open(&self) -> bool {
        self.state.focused_index.is_some()
    }

    pub fn focused_index(&self) -> Option<usize> {
        self.state.focused_index
    }

    pub fn focused_image(&self) -> Option<&ImageDescriptor> {
        self.state
            .focused_index
            .and_then(|i| self.collection.get(i).ok())
    }

    pub fn is_preloaded(&self, source: &str) -> bool {
        self.state.preloaded.contains(source)
    }

    pub fn preloaded_count(&self) -> usize {
        self.state.preloaded.len()
    }

    /// Open the viewer on `index mod len`.
    ///
    /// Fails on an empty collection and leaves the viewer closed. When the
    /// viewer is already open this only moves to the new image; the scroll
    /// lock and the captured focus stay as they were.
    pub fn open(&mut self, index: usize) -> Result<(), OutOfRangeError> {
        if self.collection.is_empty() {
            return Err(OutOfRangeError { index });
        }
        let index = index % self.collection.len();

        if self.state.focused_index.is_some() {
            debug!("Lightbox already open, moving to image {}", index);
            self.show(index);
            return Ok(());
        }

        info!("Opening lightbox at image {}", index);
        self.state.focused_index = Some(index);
        self.state.scroll_lock = Some(self.scroll_locks.acquire());
        self.state.return_focus = self.platform.active_element();
        self.platform.focus_control(LightboxControl::Close);
        self.show(index);
        Ok(())
    }

    /// Show the following image, wrapping to the first. No-op while closed.
    pub fn next(&mut self) {
        let Some(current) = self.state.focused_index else {
            return;
        };
        self.show(self.collection.next_index(current));
    }

    /// Show the preceding image, wrapping to the last. No-op while closed.
    pub fn previous(&mut self) {
        let Some(current) = self.state.focused_index else {
            return;
        };
        self.show(self.collection.previous_index(current));
    }

    /// Close the viewer, release the scroll lock and hand focus back to the
    /// element that had it before `open`. No-op while closed.
    pub fn close(&mut self) {
        let Some(index) = self.state.focused_index.take() else {
            return;
        };
        info!("Closing lightbox from image {}", index);
        self.state.scroll_lock = None;
        if let Some(target) = self.state.return_focus.take() {
            self.platform.restore_focus(target);
        }
    }

    /// Route a key press. Every key is ignored while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> KeyDisposition {
        if !self.is_open() {
            return KeyDisposition::Ignored;
        }
        match key {
            LightboxKey::ArrowRight => self.next(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::Escape => self.close(),
            LightboxKey::Tab { shift } => {
                let current = self.platform.active_control();
                if let Some(target) = self.focus_trap.next_control(current, shift) {
                    self.platform.focus_control(target);
                }
            }
            LightboxKey::Other => return KeyDisposition::Ignored,
        }
        KeyDisposition::Handled
    }

    pub fn handle_pointer(&mut self, target: PointerTarget) {
        if target == PointerTarget::Backdrop {
            self.close();
        }
    }

    /// Swap in a new collection. An open viewer is closed first since its
    /// index belongs to the old collection.
    pub fn replace_collection(&mut self, collection: MediaCollection) {
        if self.collection == collection {
            return;
        }
        self.close();
        self.focus_trap = FocusTrap::for_lightbox(collection.len());
        self.collection = collection;
    }

    /// Focus `index` and preload both of its neighbors. The shown image is
    /// fetched by the renderer, so it only gets recorded.
    fn show(&mut self, index: usize) {
        self.state.focused_index = Some(index);
        if let Ok(image) = self.collection.get(index) {
            self.state.preloaded.insert(image.source().to_string());
        }
        let previous = self.collection.previous_index(index);
        let next = self.collection.next_index(index);
        self.preload(previous);
        self.preload(next);
    }

    fn preload(&mut self, index: usize) {
        let Ok(image) = self.collection.get(index) else {
            return;
        };
        if self.state.preloaded.insert(image.source().to_string()) {
            debug!("Preloading image {} ({})", index, image.source());
            self.platform.preload_image(image.source());
        }
    }
}

impl<P: LightboxPlatform> Drop for LightboxController<P> {
    fn drop(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scroll_lock::ScrollSurface;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct FakePlatform {
        preloads: Vec<String>,
        active: Option<&'static str>,
        focused_control: Option<LightboxControl>,
        restored: Vec<&'static str>,
    }

    impl LightboxPlatform for FakePlatform {
        type FocusTarget = &'static str;

        fn preload_image(&mut self, source: &str) {
            self.preloads.push(source.to_string());
        }

        fn active_element(&self) -> Option<&'static str> {
            self.active
        }

        fn restore_focus(&mut self, target: &'static str) {
            self.restored.push(target);
        }

        fn active_control(&self) -> Option<LightboxControl> {
            self.focused_control
        }

        fn focus_control(&mut self, control: LightboxControl) {
            self.focused_control = Some(control);
        }
    }

    #[derive(Clone, Default)]
    struct CountingSurface {
        locks: Rc<RefCell<usize>>,
        unlocks: Rc<RefCell<usize>>,
    }

    impl ScrollSurface for CountingSurface {
        fn set_scroll_enabled(&mut self, enabled: bool) {
            if enabled {
                *self.unlocks.borrow_mut() += 1;
            } else {
                *self.locks.borrow_mut() += 1;
            }
        }
    }

    fn images(names: &[&str]) -> MediaCollection {
        names
            .iter()
            .map(|n| ImageDescriptor::new(*n, format!("{n} view"), "").unwrap())
            .collect::<Vec<_>>()
            .into()
    }

    fn controller(names: &[&str]) -> (LightboxController<FakePlatform>, CountingSurface) {
        let surface = CountingSurface::default();
        let registry = ScrollLockRegistry::new(surface.clone());
        let platform = FakePlatform {
            active: Some("thumb-button"),
            ..Default::default()
        };
        (LightboxController::new(images(names), platform, registry), surface)
    }

    #[test]
    fn test_open_empty_collection_fails_and_stays_closed() {
        let (mut lb, surface) = controller(&[]);
        assert_eq!(lb.open(0), Err(OutOfRangeError { index: 0 }));
        assert!(!lb.is_open());
        assert_eq!(lb.focused_index(), None);
        assert_eq!(*surface.locks.borrow(), 0);
    }

    #[test]
    fn test_open_normalizes_index() {
        let (mut lb, _) = controller(&["A", "B", "C"]);
        lb.open(7).unwrap();
        assert!(lb.is_open());
        assert_eq!(lb.focused_index(), Some(1));
    }

    #[test]
    fn test_open_moves_focus_to_close_control() {
        let (mut lb, _) = controller(&["A", "B"]);
        lb.open(0).unwrap();
        assert_eq!(lb.platform().focused_control, Some(LightboxControl::Close));
    }

    #[test]
    fn test_open_preloads_immediate_neighbors_only() {
        let (mut lb, _) = controller(&["A", "B", "C"]);
        lb.open(1).unwrap();
        assert_eq!(lb.platform().preloads, vec!["A", "C"]);
    }

    #[test]
    fn test_next_preloads_one_step_ahead() {
        let (mut lb, _) = controller(&["A", "B", "C", "D", "E"]);
        lb.open(0).unwrap();
        assert_eq!(lb.platform().preloads, vec!["E", "B"]);
        lb.next();
        assert_eq!(lb.platform().preloads, vec!["E", "B", "C"]);
    }

    #[test]
    fn test_preload_is_deduplicated() {
        let (mut lb, _) = controller(&["A", "B", "C"]);
        lb.open(0).unwrap();
        lb.next();
        lb.next();
        lb.next();
        lb.previous();
        assert_eq!(lb.preloaded_count(), 3);
        assert_eq!(lb.platform().preloads, vec!["C", "B"]);
    }

    #[test]
    fn test_navigation_scenario_wraps_both_ways() {
        let (mut lb, _) = controller(&["A", "B", "C"]);
        lb.open(0).unwrap();
        assert_eq!(lb.focused_image().unwrap().source(), "A");
        lb.next();
        assert_eq!(lb.focused_image().unwrap().source(), "B");
        lb.next();
        assert_eq!(lb.focused_image().unwrap().source(), "C");
        lb.next();
        assert_eq!(lb.focused_image().unwrap().source(), "A");
        lb.previous();
        assert_eq!(lb.focused_image().unwrap().source(), "C");
    }

    #[test]
    fn test_navigation_while_closed_is_noop() {
        let (mut lb, _) = controller(&["A", "B"]);
        lb.next();
        lb.previous();
        assert!(!lb.is_open());
        assert!(lb.platform().preloads.is_empty());
    }

    #[test]
    fn test_close_releases_lock_once_and_restores_focus() {
        let (mut lb, surface) = controller(&["A", "B", "C"]);
        lb.open(2).unwrap();
        lb.next();
        lb.close();
        lb.close();

        assert!(!lb.is_open());
        assert_eq!(lb.focused_index(), None);
        assert_eq!(*surface.locks.borrow(), 1);
        assert_eq!(*surface.unlocks.borrow(), 1);
        assert_eq!(lb.platform().restored, vec!["thumb-button"]);
    }

    #[test]
    fn test_reopen_while_open_keeps_single_lock() {
        let (mut lb, surface) = controller(&["A", "B", "C"]);
        lb.open(0).unwrap();
        lb.platform_mut().active = Some("close-button");
        lb.open(2).unwrap();
        assert_eq!(lb.focused_index(), Some(2));
        lb.close();

        assert_eq!(*surface.locks.borrow(), 1);
        assert_eq!(*surface.unlocks.borrow(), 1);
        assert_eq!(lb.platform().restored, vec!["thumb-button"]);
    }

    #[test]
    fn test_keys_route_while_open() {
        let (mut lb, _) = controller(&["A", "B", "C"]);
        lb.open(0).unwrap();
        assert_eq!(lb.handle_key(LightboxKey::ArrowRight), KeyDisposition::Handled);
        assert_eq!(lb.focused_index(), Some(1));
        assert_eq!(lb.handle_key(LightboxKey::ArrowLeft), KeyDisposition::Handled);
        assert_eq!(lb.focused_index(), Some(0));
        assert_eq!(lb.handle_key(LightboxKey::Other), KeyDisposition::Ignored);
        assert_eq!(lb.handle_key(LightboxKey::Escape), KeyDisposition::Handled);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_keys_ignored_while_closed() {
        let (mut lb, _) = controller(&["A", "B"]);
        assert_eq!(lb.handle_key(LightboxKey::ArrowRight), KeyDisposition::Ignored);
        assert_eq!(lb.handle_key(LightboxKey::Escape), KeyDisposition::Ignored);
        assert_eq!(lb.focused_index(), None);
    }

    #[test]
    fn test_tab_cycles_inside_trap() {
        let (mut lb, _) = controller(&["A", "B"]);
        lb.open(0).unwrap();
        lb.handle_key(LightboxKey::Tab { shift: false });
        assert_eq!(lb.platform().focused_control, Some(LightboxControl::Previous));
        lb.handle_key(LightboxKey::Tab { shift: true });
        lb.handle_key(LightboxKey::Tab { shift: true });
        assert_eq!(
            lb.platform().focused_control,
            Some(LightboxControl::Thumbnail(1))
        );
    }

    #[test]
    fn test_backdrop_closes_content_does_not() {
        let (mut lb, _) = controller(&["A", "B"]);
        lb.open(1).unwrap();
        lb.handle_pointer(PointerTarget::Content);
        assert!(lb.is_open());
        lb.handle_pointer(PointerTarget::Backdrop);
        assert!(!lb.is_open());
    }

    #[test]
    fn test_drop_releases_scroll_lock() {
        let (mut lb, surface) = controller(&["A", "B"]);
        lb.open(0).unwrap();
        drop(lb);
        assert_eq!(*surface.unlocks.borrow(), 1);
    }

    #[test]
    fn test_replace_collection_closes_viewer() {
        let (mut lb, surface) = controller(&["A", "B"]);
        lb.open(1).unwrap();
        lb.replace_collection(images(&["X"]));
        assert!(!lb.is_open());
        assert_eq!(*surface.unlocks.borrow(), 1);
        assert_eq!(lb.focus_trap().controls(), &[LightboxControl::Close]);
    }

    #[test]
    fn test_key_names() {
        assert_eq!(LightboxKey::from_key_name("Escape", false), LightboxKey::Escape);
        assert_eq!(
            LightboxKey::from_key_name("Tab", true),
            LightboxKey::Tab { shift: true }
        );
        assert_eq!(LightboxKey::from_key_name("a", false), LightboxKey::Other);
    }
}
