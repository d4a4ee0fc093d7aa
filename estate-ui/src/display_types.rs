//! Display types for the listing sections
//!
//! Plain data the section components render. They deserialize straight from
//! the listing configuration so the page can be rebuilt for another property
//! without touching the views.

use serde::Deserialize;

/// Hero banner copy and background image
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroContent {
    pub image: String,
    pub image_alt: String,
    pub title: String,
    pub subtitle: String,
    pub primary_cta: String,
    pub secondary_cta: String,
    pub trust_line: String,
}

/// Headline property figures
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PropertySpecs {
    pub bedrooms: u32,
    pub baths: u32,
    #[serde(default)]
    pub half_baths: u32,
    pub area_sqft: u32,
    pub area_m2: u32,
    pub lot_sqft: u32,
    pub lot_m2: u32,
    pub year_built: u16,
    pub view: String,
    #[serde(default)]
    pub pool: bool,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FeatureCard {
    pub label: String,
    pub benefit: String,
}

/// Nearby place shown as a card next to the map
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PointOfInterest {
    pub title: String,
    pub distance: String,
    pub description: String,
}

/// Rental performance figures, already formatted for display
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RoiMetrics {
    pub annual_gross_income: String,
    pub monthly_average: String,
    pub net_annual_cash_flow: String,
    pub gross_rental_yield: String,
    pub net_rental_yield: String,
    pub five_year_total_return: String,
    pub annualized_return: String,
}

/// One row of the sample financing table
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct FinancingCost {
    pub item: String,
    /// Whole US dollars per month
    pub monthly_usd: u64,
}

/// Listing agent details for the contact section and footer
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ContactInfo {
    pub company: String,
    pub tagline: String,
    pub agent_name: String,
    pub phone: String,
    pub email: String,
    pub office: String,
}

impl ContactInfo {
    /// `tel:` link with spaces stripped.
    pub fn phone_href(&self) -> String {
        let digits: String = self.phone.chars().filter(|c| !c.is_whitespace()).collect();
        format!("tel:{digits}")
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_specs_optional_fields_default() {
        let specs: PropertySpecs = serde_json::from_str(
            r#"{"bedrooms":6,"baths":6,"area_sqft":10204,"area_m2":948,
                "lot_sqft":33045,"lot_m2":3070,"year_built":2004,"view":"Golf"}"#,
        )
        .unwrap();
        assert_eq!(specs.half_baths, 0);
        assert!(!specs.pool);
    }

    #[test]
    fn test_phone_href_strips_spaces() {
        let info = ContactInfo {
            company: "Exell Dream Estate".into(),
            tagline: "Luxury Real Estate".into(),
            agent_name: "Sam Vekemans".into(),
            phone: "+32 476 87 22 40".into(),
            email: "sam@exell.marketing".into(),
            office: "Casa de Campo, La Romana".into(),
        };
        assert_eq!(info.phone_href(), "tel:+32476872240");
        assert_eq!(info.email_href(), "mailto:sam@exell.marketing");
    }
}
