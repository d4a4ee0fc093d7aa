//! Page footer with agency details

use dioxus::prelude::*;

use crate::components::icons::{MailIcon, MapPinIcon, PhoneIcon};
use crate::display_types::ContactInfo;

#[component]
pub fn Footer(info: ContactInfo) -> Element {
    rsx! {
        footer { class: "bg-[#121212] text-white py-16",
            div { class: "max-w-7xl mx-auto px-6 grid md:grid-cols-3 gap-12",
                div {
                    h3 { class: "text-xl font-bold", "{info.company}" }
                    p { class: "text-white/70 text-sm", "{info.tagline}" }
                }
                div { class: "space-y-3",
                    h4 { class: "text-lg font-semibold mb-2", "Contact {info.agent_name}" }
                    a {
                        href: info.phone_href(),
                        class: "flex items-center gap-3 hover:text-[#b19762]",
                        PhoneIcon { class: "w-4 h-4 text-[#b19762]" }
                        "{info.phone}"
                    }
                    a {
                        href: info.email_href(),
                        class: "flex items-center gap-3 hover:text-[#b19762]",
                        MailIcon { class: "w-4 h-4 text-[#b19762]" }
                        "{info.email}"
                    }
                }
                div { class: "flex items-start gap-3 text-white/70",
                    MapPinIcon { class: "w-4 h-4 text-[#b19762] mt-1" }
                    "{info.office}"
                }
            }
            p { class: "text-center text-white/50 text-sm mt-12", "© {info.company}. All rights reserved." }
        }
    }
}
