pub mod config;
pub mod pages;

use dioxus::prelude::*;
use estate_common::ScrollLockRegistry;
use estate_ui::BodyScrollSurface;
use pages::{ListingPage, NotFound};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    ListingPage {},
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

#[component]
pub fn App() -> Element {
    // One scroll lock for the whole page, shared by every gallery
    use_context_provider(|| ScrollLockRegistry::new(BodyScrollSurface));

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        document::Link { rel: "stylesheet", href: TAILWIND_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
