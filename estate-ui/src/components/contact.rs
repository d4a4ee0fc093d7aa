//! Private viewing request form with confirmation dialog

use dioxus::prelude::*;
use estate_common::{ContactForm, ContactSubmission, FieldKind, FormField};
use tracing::debug;

use crate::components::icons::{AlertTriangleIcon, CheckIcon, ClockIcon, MailIcon, PhoneIcon};
use crate::components::{Button, ButtonSize, ButtonVariant, Modal};
use crate::display_types::ContactInfo;

const INPUT_CLASS: &str = "w-full px-4 py-3 rounded-lg border border-gray-200 focus:outline-none focus:ring-2 focus:ring-[#b19762]";

#[component]
pub fn ContactSection(
    info: ContactInfo,
    /// Empty means the default viewing-request fields
    #[props(default)]
    fields: Vec<FormField>,
    on_submit: EventHandler<ContactSubmission>,
) -> Element {
    let mut form = use_signal(|| ContactForm::new(fields.clone()));
    let mut show_success = use_signal(|| false);
    let is_submitted = form.read().is_submitted();
    let form_fields = form.read().fields().to_vec();

    rsx! {
        section {
            id: "contact",
            class: "py-20 bg-white",
            aria_labelledby: "contact-title",
            div { class: "max-w-6xl mx-auto px-6",
                h2 {
                    id: "contact-title",
                    class: "text-4xl font-bold text-[#121212] mb-10 text-center",
                    "Schedule a Private Viewing"
                }

                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-12",
                    form {
                        class: "lg:col-span-2 space-y-5",
                        novalidate: true,
                        onsubmit: move |evt| {
                            evt.prevent_default();
                            let result = form.write().submit();
                            match result {
                                Ok(Some(submission)) => {
                                    on_submit.call(submission);
                                    show_success.set(true);
                                }
                                Ok(None) => debug!("Contact form already submitted"),
                                Err(errors) => debug!("Contact form rejected: {}", errors),
                            }
                        },
                        for field in form_fields {
                            FieldInput { key: "{field.name}", field: field.clone(), form }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Large,
                            r#type: Some("submit"),
                            disabled: is_submitted,
                            class: Some("w-full".to_string()),
                            onclick: move |_| {},
                            if is_submitted {
                                "Request Received"
                            } else {
                                "Request Private Viewing"
                            }
                        }
                    }

                    aside { class: "p-6 rounded-xl bg-[#f6f5f4] space-y-4 h-fit",
                        h3 { class: "text-lg font-semibold text-[#121212]", "Contact {info.agent_name}" }
                        a {
                            href: info.phone_href(),
                            class: "flex items-center gap-3 text-[#121212] hover:text-[#b19762]",
                            PhoneIcon { class: "w-5 h-5 text-[#b19762]" }
                            "{info.phone}"
                        }
                        a {
                            href: info.email_href(),
                            class: "flex items-center gap-3 text-[#121212] hover:text-[#b19762]",
                            MailIcon { class: "w-5 h-5 text-[#b19762]" }
                            "{info.email}"
                        }
                        p { class: "flex items-center gap-3 text-sm text-[#6b6b6b]",
                            ClockIcon { class: "w-5 h-5 text-[#b19762]" }
                            "Replies within 24 hours"
                        }
                        p { class: "text-sm font-medium text-[#121212]", "{info.company}" }
                    }
                }

                div { class: "mt-12 p-6 rounded-lg border border-gray-200 flex items-start gap-3",
                    AlertTriangleIcon { class: "w-5 h-5 text-[#b19762] mt-1 flex-shrink-0" }
                    div {
                        h4 { class: "font-semibold mb-2", "Qualification Required" }
                        p { class: "text-sm text-[#6b6b6b]",
                            "Proof of funds or broker introduction is required for private viewings."
                        }
                    }
                }
            }

            Modal {
                is_open: show_success,
                on_close: move |_| show_success.set(false),
                label: "Request received".to_string(),
                div { class: "bg-white rounded-2xl p-8 max-w-md text-center shadow-2xl",
                    CheckIcon { class: "w-12 h-12 text-[#b19762] mx-auto mb-4" }
                    h3 { class: "text-xl font-semibold mb-4", "Thank You for Your Interest" }
                    p { class: "text-[#6b6b6b] mb-6",
                        "Your request has been received. We'll contact you within 24 hours."
                    }
                    ul { class: "text-sm text-[#6b6b6b] space-y-1 text-left mb-6",
                        li { "Personal consultation within 24 hours" }
                        li { "Detailed property brochure delivery" }
                        li { "Private viewing scheduling" }
                    }
                    Button {
                        variant: ButtonVariant::Primary,
                        size: ButtonSize::Medium,
                        onclick: move |_| show_success.set(false),
                        "Continue"
                    }
                }
            }
        }
    }
}

/// One labelled control plus its validation message
#[component]
fn FieldInput(field: FormField, mut form: Signal<ContactForm>) -> Element {
    let input_id = format!("contact-{}", field.name);
    let error_id = format!("{input_id}-error");
    let error = form.read().error(&field.name).map(str::to_string);
    let described_by = error.as_ref().map(|_| error_id.clone());
    let invalid = if error.is_some() { "true" } else { "false" };
    let text = form.read().text(&field.name).to_string();
    let checked = form.read().checked(&field.name);
    let name = field.name.clone();
    let required_mark = if field.required { " *" } else { "" };

    let control = match &field.kind {
        FieldKind::Checkbox => rsx! {
            label { class: "flex items-start gap-3 text-sm text-[#121212]",
                input {
                    id: "{input_id}",
                    r#type: "checkbox",
                    class: "mt-1 accent-[#b19762]",
                    checked,
                    aria_invalid: invalid,
                    aria_describedby: described_by,
                    onchange: move |evt| form.write().set_checked(&name, evt.checked()),
                }
                "{field.label}{required_mark}"
            }
        },
        FieldKind::Select { placeholder, options } => rsx! {
            label { r#for: "{input_id}", class: "block text-sm font-medium mb-1", "{field.label}{required_mark}" }
            select {
                id: "{input_id}",
                class: INPUT_CLASS,
                value: "{text}",
                aria_invalid: invalid,
                aria_describedby: described_by,
                onchange: move |evt| form.write().set_text(&name, evt.value()),
                option { value: "", disabled: true, "{placeholder}" }
                for opt in options.iter() {
                    option { key: "{opt.value}", value: "{opt.value}", "{opt.label}" }
                }
            }
        },
        FieldKind::Textarea => rsx! {
            label { r#for: "{input_id}", class: "block text-sm font-medium mb-1", "{field.label}{required_mark}" }
            textarea {
                id: "{input_id}",
                class: INPUT_CLASS,
                rows: "4",
                value: "{text}",
                aria_invalid: invalid,
                aria_describedby: described_by,
                oninput: move |evt| form.write().set_text(&name, evt.value()),
            }
        },
        kind => rsx! {
            label { r#for: "{input_id}", class: "block text-sm font-medium mb-1", "{field.label}{required_mark}" }
            input {
                id: "{input_id}",
                r#type: kind.input_type(),
                class: INPUT_CLASS,
                value: "{text}",
                aria_invalid: invalid,
                aria_describedby: described_by,
                oninput: move |evt| form.write().set_text(&name, evt.value()),
            }
        },
    };

    rsx! {
        div {
            {control}
            if let Some(message) = error {
                p { id: "{error_id}", class: "mt-1 text-sm text-red-600", role: "alert", "{message}" }
            }
        }
    }
}
