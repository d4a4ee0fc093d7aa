//! Full-bleed hero banner

use dioxus::prelude::*;

use crate::components::utils::{src_set, PHOTO_WIDTHS};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::HeroContent;

#[component]
pub fn HeroSection(
    content: HeroContent,
    on_primary: EventHandler<()>,
    on_secondary: EventHandler<()>,
) -> Element {
    rsx! {
        section { class: "relative h-screen w-full overflow-hidden", role: "banner",
            a {
                href: "#main-content",
                class: "sr-only focus:not-sr-only focus:absolute focus:top-4 focus:left-4 bg-[#b19762] text-white px-4 py-2 rounded-md z-50",
                "Skip to main content"
            }

            img {
                src: "{content.image}",
                srcset: src_set(&content.image, PHOTO_WIDTHS),
                sizes: "100vw",
                alt: "{content.image_alt}",
                loading: "eager",
                class: "absolute inset-0 w-full h-full object-cover",
            }
            div {
                class: "absolute inset-0 bg-gradient-to-b from-black/40 via-black/30 to-black/70",
                aria_hidden: "true",
            }

            div { class: "absolute inset-0 flex items-center justify-center z-10",
                div { class: "text-center max-w-4xl mx-auto px-6",
                    h1 { class: "text-4xl md:text-6xl font-bold text-white drop-shadow-2xl mb-6 leading-tight",
                        "{content.title}"
                    }
                    p { class: "text-2xl md:text-4xl text-amber-200", "{content.subtitle}" }

                    div { class: "flex flex-col sm:flex-row gap-6 justify-center items-center mt-8",
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            class: Some("min-w-[280px]".to_string()),
                            onclick: move |_| on_primary.call(()),
                            "{content.primary_cta}"
                        }
                        Button {
                            variant: ButtonVariant::Overlay,
                            size: ButtonSize::Large,
                            class: Some("min-w-[280px]".to_string()),
                            onclick: move |_| on_secondary.call(()),
                            "{content.secondary_cta}"
                        }
                    }

                    p { class: "text-white/70 text-sm mt-6", "{content.trust_line}" }
                }
            }
        }
    }
}
