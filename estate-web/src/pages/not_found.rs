use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        main { class: "min-h-screen flex flex-col items-center justify-center bg-[#f6f5f4] px-6 text-center",
            h1 { class: "text-6xl font-bold text-[#121212] mb-4", "404" }
            p { class: "text-lg text-[#6b6b6b] mb-8", "Nothing lives at /{path}" }
            Link {
                to: Route::ListingPage {},
                class: "px-6 py-3 rounded-xl bg-[#b19762] text-white font-semibold hover:bg-[#a08856]",
                "Back to the listing"
            }
        }
    }
}
