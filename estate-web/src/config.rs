//! Listing configuration
//!
//! Everything property-specific lives in `listing.json`, embedded at compile
//! time. The Mapbox token is read from `ESTATE_MAPBOX_TOKEN` when building.

use estate_common::{
    Amenity, AmenityKind, DescriptorError, FieldKind, FormField, ImageDescriptor, LngLat,
    MediaCollection, SelectOption,
};
use estate_ui::{
    ContactInfo, FeatureCard, FinancingCost, HeroContent, PointOfInterest, PropertySpecs,
    RoiMetrics,
};
use serde::Deserialize;
use thiserror::Error;
use tracing::info;

const LISTING_JSON: &str = include_str!("../listing.json");

/// Mapbox access token, if one was set when building.
pub const MAPBOX_TOKEN: Option<&str> = option_env!("ESTATE_MAPBOX_TOKEN");

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Listing configuration is not valid: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("Gallery image {index} is invalid")]
    Image {
        index: usize,
        #[source]
        source: DescriptorError,
    },
}

/// Everything the listing page renders
#[derive(Clone, Debug, PartialEq)]
pub struct ListingConfig {
    pub hero: HeroContent,
    pub gallery: MediaCollection,
    pub specs: PropertySpecs,
    pub features: Vec<FeatureCard>,
    pub location: LngLat,
    pub points_of_interest: Vec<PointOfInterest>,
    pub amenities: Vec<Amenity>,
    pub roi: RoiMetrics,
    pub financing: Vec<FinancingCost>,
    pub contact: ContactInfo,
    /// Empty means the default viewing-request fields
    pub contact_fields: Vec<FormField>,
}

#[derive(Deserialize)]
struct RawListing {
    hero: HeroContent,
    gallery: Vec<RawImage>,
    specs: PropertySpecs,
    #[serde(default)]
    features: Vec<FeatureCard>,
    location: RawLocation,
    #[serde(default)]
    points_of_interest: Vec<PointOfInterest>,
    #[serde(default)]
    amenities: Vec<RawAmenity>,
    roi: RoiMetrics,
    #[serde(default)]
    financing: Vec<FinancingCost>,
    contact: ContactInfo,
    #[serde(default)]
    contact_fields: Vec<RawField>,
}

#[derive(Deserialize)]
struct RawImage {
    source: String,
    alt: String,
    #[serde(default)]
    caption: String,
}

#[derive(Deserialize, Clone, Copy)]
struct RawLocation {
    lng: f64,
    lat: f64,
}

impl From<RawLocation> for LngLat {
    fn from(raw: RawLocation) -> Self {
        LngLat::new(raw.lng, raw.lat)
    }
}

#[derive(Deserialize)]
struct RawAmenity {
    name: String,
    #[serde(flatten)]
    location: RawLocation,
    kind: RawAmenityKind,
}

#[derive(Deserialize, Clone, Copy)]
#[serde(rename_all = "lowercase")]
enum RawAmenityKind {
    Property,
    Golf,
    Marina,
    Dining,
    Shopping,
    Airport,
    Recreation,
}

impl From<RawAmenityKind> for AmenityKind {
    fn from(raw: RawAmenityKind) -> Self {
        match raw {
            RawAmenityKind::Property => AmenityKind::Property,
            RawAmenityKind::Golf => AmenityKind::Golf,
            RawAmenityKind::Marina => AmenityKind::Marina,
            RawAmenityKind::Dining => AmenityKind::Dining,
            RawAmenityKind::Shopping => AmenityKind::Shopping,
            RawAmenityKind::Airport => AmenityKind::Airport,
            RawAmenityKind::Recreation => AmenityKind::Recreation,
        }
    }
}

#[derive(Deserialize)]
struct RawField {
    name: String,
    label: String,
    #[serde(default)]
    required: bool,
    #[serde(flatten)]
    kind: RawFieldKind,
}

#[derive(Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
enum RawFieldKind {
    Text,
    Email,
    Tel,
    Textarea,
    Checkbox,
    Select {
        placeholder: String,
        options: Vec<RawOption>,
    },
}

#[derive(Deserialize)]
struct RawOption {
    value: String,
    label: String,
}

impl From<RawField> for FormField {
    fn from(raw: RawField) -> Self {
        let kind = match raw.kind {
            RawFieldKind::Text => FieldKind::Text,
            RawFieldKind::Email => FieldKind::Email,
            RawFieldKind::Tel => FieldKind::Tel,
            RawFieldKind::Textarea => FieldKind::Textarea,
            RawFieldKind::Checkbox => FieldKind::Checkbox,
            RawFieldKind::Select {
                placeholder,
                options,
            } => FieldKind::Select {
                placeholder,
                options: options
                    .into_iter()
                    .map(|o| SelectOption {
                        value: o.value,
                        label: o.label,
                    })
                    .collect(),
            },
        };
        FormField {
            name: raw.name,
            label: raw.label,
            kind,
            required: raw.required,
        }
    }
}

impl ListingConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawListing = serde_json::from_str(json)?;

        let images = raw
            .gallery
            .into_iter()
            .enumerate()
            .map(|(index, image)| {
                ImageDescriptor::new(image.source, image.alt, image.caption)
                    .map_err(|source| ConfigError::Image { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let amenities = raw
            .amenities
            .into_iter()
            .map(|a| Amenity {
                name: a.name,
                coordinates: a.location.into(),
                kind: a.kind.into(),
            })
            .collect();

        Ok(Self {
            hero: raw.hero,
            gallery: MediaCollection::new(images),
            specs: raw.specs,
            features: raw.features,
            location: raw.location.into(),
            points_of_interest: raw.points_of_interest,
            amenities,
            roi: raw.roi,
            financing: raw.financing,
            contact: raw.contact,
            contact_fields: raw.contact_fields.into_iter().map(FormField::from).collect(),
        })
    }
}

/// Parse the embedded listing.
pub fn load() -> Result<ListingConfig, ConfigError> {
    let config = ListingConfig::from_json(LISTING_JSON)?;
    info!(
        "Loaded listing with {} gallery images and {} amenities",
        config.gallery.len(),
        config.amenities.len()
    );
    Ok(config)
}
