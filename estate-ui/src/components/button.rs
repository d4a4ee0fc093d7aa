//! Reusable button components

use dioxus::prelude::*;

/// Button without visual styling. Handles disabled state and accessibility
/// attributes; used directly by the lightbox controls and by [`Button`].
#[component]
pub fn ChromelessButton(
    #[props(default)] disabled: bool,
    #[props(default)] id: Option<String>,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    #[props(default)] aria_current: Option<&'static str>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    rsx! {
        button {
            class: class.as_deref(),
            id: id.as_deref(),
            r#type: r#type.unwrap_or("button"),
            disabled,
            aria_label: aria_label.as_deref(),
            aria_current,
            aria_disabled: if disabled { Some("true") } else { None },
            onclick: move |e| {
                if !disabled {
                    onclick.call(e);
                }
            },
            {children}
        }
    }
}

/// Button visual variant
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonVariant {
    /// Gold gradient - main calls to action
    Primary,
    /// Gold outline - secondary downloads
    Outline,
    /// Translucent white border - on top of photography
    Overlay,
}

/// Button size
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonSize {
    Medium,
    Large,
}

/// Styled button used across the listing sections
#[component]
pub fn Button(
    variant: ButtonVariant,
    size: ButtonSize,
    #[props(default)] disabled: bool,
    #[props(default)] class: Option<String>,
    #[props(default)] r#type: Option<&'static str>,
    #[props(default)] aria_label: Option<String>,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let base = "inline-flex items-center justify-center gap-2 font-semibold rounded-xl transition-all duration-300 focus:outline-none focus-visible:ring-2 focus-visible:ring-amber-300";

    let padding = match size {
        ButtonSize::Medium => "px-6 py-3",
        ButtonSize::Large => "px-8 py-4 text-lg",
    };

    let variant_class = match variant {
        ButtonVariant::Primary => {
            "bg-gradient-to-b from-[#b19762] to-[#a08856] text-white shadow-lg hover:scale-105 disabled:opacity-50 disabled:cursor-not-allowed"
        }
        ButtonVariant::Outline => "border-2 border-[#b19762] text-[#b19762] hover:bg-[#b19762]/10",
        ButtonVariant::Overlay => "border-2 border-white/30 text-white hover:bg-white/10 hover:scale-105",
    };

    let computed_class = match &class {
        Some(extra) => format!("{base} {padding} {variant_class} {extra}"),
        None => format!("{base} {padding} {variant_class}"),
    };

    rsx! {
        ChromelessButton {
            disabled,
            class: Some(computed_class),
            r#type,
            aria_label,
            onclick,
            {children}
        }
    }
}
