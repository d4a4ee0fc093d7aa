//! Rental returns and the sample financing table

use dioxus::prelude::*;

use crate::components::icons::{DownloadIcon, FileTextIcon, TrendingUpIcon};
use crate::components::utils::{format_usd, monthly_total};
use crate::components::{Button, ButtonSize, ButtonVariant};
use crate::display_types::{FinancingCost, RoiMetrics};

/// Downloads offered by the investment section
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InvestmentDocument {
    RoiAnalysis,
    InvestmentGuide,
    PersonalizedAnalysis,
}

#[component]
pub fn RoiFinancing(
    metrics: RoiMetrics,
    costs: Vec<FinancingCost>,
    on_request: EventHandler<InvestmentDocument>,
) -> Element {
    let total = format_usd(monthly_total(&costs));

    rsx! {
        section {
            id: "investment",
            class: "py-20 bg-[#f6f5f4]",
            aria_labelledby: "investment-title",
            div { class: "max-w-7xl mx-auto px-6",
                div { class: "text-center mb-12",
                    h2 {
                        id: "investment-title",
                        class: "text-4xl font-bold text-[#121212] mb-6",
                        "Investment Analysis & Financing"
                    }
                    p { class: "text-lg max-w-3xl mx-auto text-[#6b6b6b]",
                        "Rental income history and a sample financing scenario"
                    }
                }

                div { class: "grid grid-cols-1 lg:grid-cols-2 gap-12",
                    div { class: "bg-white rounded-xl shadow-sm p-8 space-y-6",
                        div { class: "flex items-center gap-3",
                            TrendingUpIcon { class: "w-8 h-8 text-[#b19762]" }
                            h3 { class: "text-2xl font-semibold text-[#121212]", "ROI Potential" }
                        }
                        div { class: "grid grid-cols-2 gap-4",
                            Metric { value: metrics.annual_gross_income.clone(), label: "Annual Gross Income" }
                            Metric { value: metrics.monthly_average.clone(), label: "Monthly Average" }
                            Metric { value: metrics.net_annual_cash_flow.clone(), label: "Net Annual Cash Flow" }
                            Metric { value: metrics.gross_rental_yield.clone(), label: "Gross Rental Yield" }
                            Metric { value: metrics.net_rental_yield.clone(), label: "Net Rental Yield" }
                        }
                        div { class: "p-4 rounded-lg bg-[#b19762]/10 text-center",
                            div { class: "text-3xl font-bold text-[#b19762] mb-2", "{metrics.annualized_return}" }
                            div { class: "text-sm font-medium text-[#121212]", "5-Year Annualized Return" }
                            div { class: "text-sm mt-1 text-[#6b6b6b]",
                                "Total Return: {metrics.five_year_total_return}"
                            }
                        }
                        Button {
                            variant: ButtonVariant::Primary,
                            size: ButtonSize::Medium,
                            class: Some("w-full".to_string()),
                            onclick: move |_| on_request.call(InvestmentDocument::RoiAnalysis),
                            DownloadIcon { class: "w-5 h-5" }
                            "Download ROI Analysis PDF"
                        }
                    }

                    div { class: "bg-white rounded-xl shadow-sm p-8 space-y-6",
                        h3 { class: "text-2xl font-semibold text-[#121212]", "Financing Details" }
                        table { class: "w-full text-sm",
                            thead {
                                tr { class: "bg-[#f6f5f4]",
                                    th { class: "text-left p-3", scope: "col", "Cost Item" }
                                    th { class: "text-right p-3", scope: "col", "Monthly USD" }
                                }
                            }
                            tbody {
                                for (i , cost) in costs.iter().enumerate() {
                                    tr { key: "{i}", class: "border-b border-gray-100",
                                        td { class: "p-3 text-[#6b6b6b]", "{cost.item}" }
                                        td { class: "p-3 text-right font-medium text-[#121212]",
                                            {format_usd(cost.monthly_usd)}
                                        }
                                    }
                                }
                            }
                            tfoot {
                                tr {
                                    th { class: "text-left p-3", scope: "row", "Total monthly" }
                                    td { class: "p-3 text-right font-bold text-[#b19762]", "{total}" }
                                }
                            }
                        }
                        div { class: "space-y-3",
                            Button {
                                variant: ButtonVariant::Outline,
                                size: ButtonSize::Medium,
                                class: Some("w-full".to_string()),
                                onclick: move |_| on_request.call(InvestmentDocument::InvestmentGuide),
                                FileTextIcon { class: "w-5 h-5" }
                                "Download Smart Investment Guide"
                            }
                            Button {
                                variant: ButtonVariant::Primary,
                                size: ButtonSize::Medium,
                                class: Some("w-full".to_string()),
                                onclick: move |_| on_request.call(InvestmentDocument::PersonalizedAnalysis),
                                "Get Your Personalized Analysis"
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Metric(value: String, label: &'static str) -> Element {
    rsx! {
        div { class: "text-center p-4 rounded-lg bg-[#f6f5f4]",
            div { class: "text-xl font-bold text-[#b19762]", "{value}" }
            div { class: "text-sm text-[#6b6b6b]", "{label}" }
        }
    }
}
