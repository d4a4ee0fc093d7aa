//! End-to-end lightbox sessions against a recording page.
//!
//! Tests:
//! - Escape returns focus to the thumbnail that opened the viewer
//! - Two galleries share the page scroll lock
//! - Unmounting an open gallery re-enables scrolling
//! - Keyboard focus never leaves the lightbox controls while open

use std::cell::RefCell;
use std::rc::Rc;

use estate_common::{
    ImageDescriptor, KeyDisposition, LightboxControl, LightboxController, LightboxKey,
    LightboxPlatform, MediaCollection, PointerTarget, ScrollLockRegistry, ScrollSurface,
};

/// Initialize tracing for tests
fn tracing_init() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_line_number(true)
        .with_target(false)
        .with_file(true)
        .try_init();
}

/// Shared view of the fake document.
#[derive(Default)]
struct Page {
    scroll_enabled: bool,
    scroll_toggles: usize,
    focused: Option<String>,
    preloads: Vec<String>,
}

type SharedPage = Rc<RefCell<Page>>;

struct PageSurface(SharedPage);

impl ScrollSurface for PageSurface {
    fn set_scroll_enabled(&mut self, enabled: bool) {
        let mut page = self.0.borrow_mut();
        page.scroll_enabled = enabled;
        page.scroll_toggles += 1;
    }
}

struct PagePlatform {
    page: SharedPage,
    scope: &'static str,
}

impl LightboxPlatform for PagePlatform {
    type FocusTarget = String;

    fn preload_image(&mut self, source: &str) {
        self.page.borrow_mut().preloads.push(source.to_string());
    }

    fn active_element(&self) -> Option<String> {
        self.page.borrow().focused.clone()
    }

    fn restore_focus(&mut self, target: String) {
        self.page.borrow_mut().focused = Some(target);
    }

    fn active_control(&self) -> Option<LightboxControl> {
        let page = self.page.borrow();
        let id = page.focused.as_deref()?;
        LightboxControl::from_dom_id(self.scope, id)
    }

    fn focus_control(&mut self, control: LightboxControl) {
        self.page.borrow_mut().focused = Some(control.dom_id(self.scope));
    }
}

fn new_page() -> (SharedPage, ScrollLockRegistry) {
    let page = Rc::new(RefCell::new(Page {
        scroll_enabled: true,
        ..Default::default()
    }));
    let registry = ScrollLockRegistry::new(PageSurface(page.clone()));
    (page, registry)
}

fn villa_images() -> MediaCollection {
    ["pool", "terrace", "kitchen"]
        .iter()
        .map(|name| {
            ImageDescriptor::new(
                format!("https://cdn.example.com/{name}.jpg"),
                format!("Villa {name}"),
                format!("The {name}"),
            )
            .unwrap()
        })
        .collect::<Vec<_>>()
        .into()
}

fn gallery(
    page: &SharedPage,
    registry: &ScrollLockRegistry,
    scope: &'static str,
) -> LightboxController<PagePlatform> {
    LightboxController::new(
        villa_images(),
        PagePlatform {
            page: page.clone(),
            scope,
        },
        registry.clone(),
    )
}

#[test]
fn test_escape_restores_focus_to_opener() {
    tracing_init();
    let (page, registry) = new_page();
    let mut lightbox = gallery(&page, &registry, "lightbox-0");

    page.borrow_mut().focused = Some("thumb-1".to_string());
    lightbox.open(1).unwrap();
    assert_eq!(page.borrow().focused.as_deref(), Some("lightbox-0-close"));
    assert!(!page.borrow().scroll_enabled);

    assert_eq!(
        lightbox.handle_key(LightboxKey::Escape),
        KeyDisposition::Handled
    );
    assert!(!lightbox.is_open());
    assert_eq!(page.borrow().focused.as_deref(), Some("thumb-1"));
    assert!(page.borrow().scroll_enabled);
    assert_eq!(page.borrow().scroll_toggles, 2);
}

#[test]
fn test_open_preloads_neighbors_of_middle_image() {
    tracing_init();
    let (page, registry) = new_page();
    let mut lightbox = gallery(&page, &registry, "lightbox-0");

    lightbox.open(1).unwrap();
    assert_eq!(
        page.borrow().preloads,
        vec![
            "https://cdn.example.com/pool.jpg",
            "https://cdn.example.com/kitchen.jpg",
        ]
    );
}

#[test]
fn test_two_galleries_share_scroll_lock() {
    tracing_init();
    let (page, registry) = new_page();
    let mut first = gallery(&page, &registry, "lightbox-0");
    let mut second = gallery(&page, &registry, "lightbox-1");

    first.open(0).unwrap();
    second.open(2).unwrap();
    first.handle_pointer(PointerTarget::Backdrop);

    assert!(!first.is_open());
    assert!(!page.borrow().scroll_enabled);

    second.close();
    assert!(page.borrow().scroll_enabled);
    assert_eq!(page.borrow().scroll_toggles, 2);
}

#[test]
fn test_unmount_while_open_releases_scroll() {
    tracing_init();
    let (page, registry) = new_page();
    let mut lightbox = gallery(&page, &registry, "lightbox-0");
    lightbox.open(0).unwrap();
    drop(lightbox);

    assert!(page.borrow().scroll_enabled);
    assert!(!registry.is_locked());
}

#[test]
fn test_tab_never_escapes_lightbox() {
    tracing_init();
    let (page, registry) = new_page();
    let mut lightbox = gallery(&page, &registry, "lightbox-0");
    page.borrow_mut().focused = Some("hero-cta".to_string());
    lightbox.open(0).unwrap();

    let trap: Vec<String> = lightbox
        .focus_trap()
        .controls()
        .iter()
        .map(|c| c.dom_id("lightbox-0"))
        .collect();

    for step in 0..(trap.len() * 2) {
        let shift = step % 3 == 0;
        lightbox.handle_key(LightboxKey::Tab { shift });
        let focused = page.borrow().focused.clone().unwrap();
        assert!(trap.contains(&focused), "focus escaped to {focused}");
    }

    lightbox.close();
    assert_eq!(page.borrow().focused.as_deref(), Some("hero-cta"));
}

#[test]
fn test_arrow_keys_after_close_do_nothing() {
    tracing_init();
    let (page, registry) = new_page();
    let mut lightbox = gallery(&page, &registry, "lightbox-0");
    lightbox.open(0).unwrap();
    lightbox.close();
    let preloads_before = page.borrow().preloads.len();

    assert_eq!(
        lightbox.handle_key(LightboxKey::ArrowRight),
        KeyDisposition::Ignored
    );
    assert_eq!(lightbox.focused_index(), None);
    assert_eq!(page.borrow().preloads.len(), preloads_before);
}
