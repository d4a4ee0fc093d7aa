use std::rc::Rc;

use crate::config::{self, ConfigError, ListingConfig, MAPBOX_TOKEN};
use dioxus::prelude::*;
use estate_common::{provider_for_token, ContactSubmission, MapView};
use estate_ui::wasm_utils::scroll_to_id;
use estate_ui::{
    AlertTriangleIcon, ContactSection, Footer, GalleryFilmStrip, HeroSection, InvestmentDocument,
    NeighborhoodSection, RoiFinancing, SpecsGrid,
};
use tracing::{error, info, warn};

fn scroll_to(id: &str) {
    if !scroll_to_id(id) {
        warn!("No section with id {} on the page", id);
    }
}

fn map_view(listing: &Result<ListingConfig, ConfigError>) -> MapView {
    match listing {
        Ok(listing) => {
            provider_for_token(MAPBOX_TOKEN).render(listing.location, &listing.amenities)
        }
        Err(_) => MapView::Unavailable {
            reason: "Listing configuration failed to load".to_string(),
        },
    }
}

#[component]
pub fn ListingPage() -> Element {
    let listing = use_hook(|| Rc::new(config::load()));
    let map = use_hook({
        let listing = listing.clone();
        move || map_view(&listing)
    });

    let listing = match &*listing {
        Ok(listing) => listing,
        Err(e) => {
            error!("Failed to load listing: {}", e);
            return rsx! {
                LoadError { message: e.to_string() }
            };
        }
    };

    rsx! {
        main { id: "main-content",
            HeroSection {
                content: listing.hero.clone(),
                on_primary: move |_| scroll_to("contact"),
                on_secondary: move |_| scroll_to("investment"),
            }
            GalleryFilmStrip { images: listing.gallery.clone() }
            SpecsGrid {
                specs: listing.specs.clone(),
                features: listing.features.clone(),
            }
            NeighborhoodSection {
                points: listing.points_of_interest.clone(),
                map,
            }
            RoiFinancing {
                metrics: listing.roi.clone(),
                costs: listing.financing.clone(),
                on_request: move |requested: InvestmentDocument| {
                    info!("Requested {:?}, routing to contact form", requested);
                    scroll_to("contact");
                },
            }
            ContactSection {
                info: listing.contact.clone(),
                fields: listing.contact_fields.clone(),
                on_submit: move |submission: ContactSubmission| {
                    info!(
                        "Viewing request from {} <{}>",
                        submission.text("name").unwrap_or_default(),
                        submission.text("email").unwrap_or_default(),
                    );
                },
            }
        }
        Footer { info: listing.contact.clone() }
    }
}

#[component]
fn LoadError(message: String) -> Element {
    rsx! {
        main { class: "min-h-screen flex items-center justify-center px-6",
            div { class: "flex items-start gap-3 max-w-lg p-6 rounded-lg border border-red-200 bg-red-50",
                AlertTriangleIcon { class: "w-6 h-6 text-red-600 flex-shrink-0" }
                div {
                    h1 { class: "font-semibold text-red-800 mb-1", "This listing could not be loaded" }
                    p { class: "text-sm text-red-700", "{message}" }
                }
            }
        }
    }
}
