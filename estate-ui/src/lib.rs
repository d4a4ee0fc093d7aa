//! estate-ui - View components for the villa listing
//!
//! Dioxus components for each page section plus the browser adapters that
//! connect the lightbox state machine in `estate-common` to the DOM.

pub mod browser;
pub mod components;
pub mod display_types;
pub mod wasm_utils;

pub use browser::{BodyScrollSurface, BrowserPlatform};
pub use components::*;
pub use display_types::*;
