//! Photo gallery: thumbnail strip plus full-screen lightbox

mod film_strip;
mod lightbox_view;

pub use film_strip::{BrowserLightbox, GalleryFilmStrip};
pub use lightbox_view::GalleryLightbox;
