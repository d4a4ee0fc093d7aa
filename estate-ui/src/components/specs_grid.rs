//! Property figures and feature highlights

use dioxus::prelude::*;

use crate::components::utils::format_number;
use crate::display_types::{FeatureCard, PropertySpecs};

/// Label/value pairs in display order.
pub fn spec_rows(specs: &PropertySpecs) -> Vec<(&'static str, String)> {
    let baths = if specs.half_baths > 0 {
        format!("{} full, {} half", specs.baths, specs.half_baths)
    } else {
        specs.baths.to_string()
    };
    vec![
        ("Bedrooms", specs.bedrooms.to_string()),
        ("Bathrooms", baths),
        (
            "Living Area",
            format!(
                "{} sq ft ({} m²)",
                format_number(specs.area_sqft.into()),
                format_number(specs.area_m2.into())
            ),
        ),
        (
            "Lot Size",
            format!(
                "{} sq ft ({} m²)",
                format_number(specs.lot_sqft.into()),
                format_number(specs.lot_m2.into())
            ),
        ),
        ("Year Built", specs.year_built.to_string()),
        ("View", specs.view.clone()),
        ("Pool", if specs.pool { "Private pool" } else { "None" }.to_string()),
    ]
}

#[component]
pub fn SpecsGrid(specs: PropertySpecs, features: Vec<FeatureCard>) -> Element {
    let rows = spec_rows(&specs);

    rsx! {
        section { class: "py-20 bg-white", aria_labelledby: "specs-title",
            div { class: "max-w-7xl mx-auto px-6",
                h2 {
                    id: "specs-title",
                    class: "text-4xl font-bold text-[#121212] mb-10",
                    "Property Details & Specifications"
                }

                dl { class: "grid grid-cols-2 md:grid-cols-4 gap-6 mb-16",
                    for (label , value) in rows {
                        div { key: "{label}", class: "p-4 rounded-lg bg-[#f6f5f4]",
                            dt { class: "text-sm text-[#6b6b6b]", "{label}" }
                            dd { class: "text-lg font-semibold text-[#121212] mt-1", "{value}" }
                        }
                    }
                }

                if !features.is_empty() {
                    div { class: "grid grid-cols-1 md:grid-cols-3 gap-8",
                        for (i , feature) in features.iter().enumerate() {
                            article {
                                key: "{i}",
                                class: "p-6 rounded-xl border border-gray-100 shadow-sm hover:shadow-lg transition-shadow",
                                h3 { class: "text-xl font-semibold text-[#121212] mb-2", "{feature.label}" }
                                p { class: "text-[#6b6b6b]", "{feature.benefit}" }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn villa() -> PropertySpecs {
        PropertySpecs {
            bedrooms: 6,
            baths: 6,
            half_baths: 3,
            area_sqft: 10204,
            area_m2: 948,
            lot_sqft: 33045,
            lot_m2: 3070,
            year_built: 2004,
            view: "Golf course".into(),
            pool: true,
        }
    }

    #[test]
    fn test_spec_rows() {
        let rows = spec_rows(&villa());
        assert_eq!(rows[1], ("Bathrooms", "6 full, 3 half".to_string()));
        assert_eq!(rows[2].1, "10,204 sq ft (948 m²)");
        assert_eq!(rows[6].1, "Private pool");
    }

    #[test]
    fn test_no_half_baths() {
        let specs = PropertySpecs {
            half_baths: 0,
            ..villa()
        };
        assert_eq!(spec_rows(&specs)[1].1, "6");
    }
}
