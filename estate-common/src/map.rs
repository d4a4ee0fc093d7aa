//! Neighborhood map as an injected capability
//!
//! Views depend on [`MapProvider`] only. When no Mapbox token is configured
//! the fallback provider answers with [`MapView::Unavailable`] and the page
//! renders its placeholder instead of a map.

use tracing::{info, warn};

const MAPBOX_STYLE: &str = "mapbox/satellite-streets-v12";
const MAP_ZOOM: f64 = 11.5;
const MAP_WIDTH: u32 = 800;
const MAP_HEIGHT: u32 = 500;

/// Longitude/latitude pair, in that order (Mapbox convention).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AmenityKind {
    Property,
    Golf,
    Marina,
    Dining,
    Shopping,
    Airport,
    Recreation,
}

impl AmenityKind {
    /// Marker color as a hex string without the leading `#`.
    pub fn color(&self) -> &'static str {
        match self {
            AmenityKind::Property => "b19762",
            AmenityKind::Golf => "22c55e",
            AmenityKind::Marina | AmenityKind::Recreation => "3b82f6",
            AmenityKind::Dining => "f59e0b",
            AmenityKind::Shopping => "8b5cf6",
            AmenityKind::Airport => "ef4444",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AmenityKind::Property => "Your luxury estate with golf course frontage",
            AmenityKind::Golf => "Caribbean's #1 rated golf course",
            AmenityKind::Marina => "Full-service marina with fine dining",
            AmenityKind::Dining => "Exclusive beachfront dining",
            AmenityKind::Shopping => "Luxury shopping and services",
            AmenityKind::Airport => "Private and commercial connections",
            AmenityKind::Recreation => "World-class facilities",
        }
    }

    pub fn legend_label(&self) -> &'static str {
        match self {
            AmenityKind::Property => "Property",
            AmenityKind::Golf => "Golf Course",
            AmenityKind::Marina | AmenityKind::Recreation => "Recreation & Marina",
            AmenityKind::Dining => "Dining",
            AmenityKind::Shopping => "Shopping",
            AmenityKind::Airport => "Airport",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Amenity {
    pub name: String,
    pub coordinates: LngLat,
    pub kind: AmenityKind,
}

/// A marker as the view should label it.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub label: String,
    pub description: String,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub enum MapView {
    Static {
        image_url: String,
        markers: Vec<MapMarker>,
    },
    Unavailable {
        reason: String,
    },
}

pub trait MapProvider {
    fn render(&self, center: LngLat, amenities: &[Amenity]) -> MapView;
}

/// Renders through the Mapbox Static Images API.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapboxStaticProvider {
    access_token: String,
}

impl MapboxStaticProvider {
    pub fn new(access_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
        }
    }

    fn pin(amenity: &Amenity) -> String {
        let size = if amenity.kind == AmenityKind::Property {
            "l"
        } else {
            "s"
        };
        format!(
            "pin-{}+{}({:.4},{:.4})",
            size,
            amenity.kind.color(),
            amenity.coordinates.lng,
            amenity.coordinates.lat
        )
    }
}

impl MapProvider for MapboxStaticProvider {
    fn render(&self, center: LngLat, amenities: &[Amenity]) -> MapView {
        let overlay = amenities
            .iter()
            .map(Self::pin)
            .collect::<Vec<_>>()
            .join(",");
        let position = format!("{:.4},{:.4},{}", center.lng, center.lat, MAP_ZOOM);
        let image_url = if overlay.is_empty() {
            format!(
                "https://api.mapbox.com/styles/v1/{MAPBOX_STYLE}/static/{position}/{MAP_WIDTH}x{MAP_HEIGHT}@2x?access_token={}",
                urlencoding::encode(&self.access_token)
            )
        } else {
            format!(
                "https://api.mapbox.com/styles/v1/{MAPBOX_STYLE}/static/{}/{position}/{MAP_WIDTH}x{MAP_HEIGHT}@2x?access_token={}",
                urlencoding::encode(&overlay),
                urlencoding::encode(&self.access_token)
            )
        };
        let markers = amenities
            .iter()
            .map(|a| MapMarker {
                label: a.name.clone(),
                description: a.kind.description().to_string(),
                color: a.kind.color(),
            })
            .collect();
        MapView::Static { image_url, markers }
    }
}

/// Stand-in used when the map can't be shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnavailableMapProvider {
    reason: String,
}

impl UnavailableMapProvider {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl MapProvider for UnavailableMapProvider {
    fn render(&self, _center: LngLat, _amenities: &[Amenity]) -> MapView {
        MapView::Unavailable {
            reason: self.reason.clone(),
        }
    }
}

/// Pick a provider for the configured token. Blank tokens count as missing.
pub fn provider_for_token(token: Option<&str>) -> Box<dyn MapProvider> {
    match token.map(str::trim).filter(|t| !t.is_empty()) {
        Some(token) => {
            info!("Using Mapbox static map provider");
            Box::new(MapboxStaticProvider::new(token))
        }
        None => {
            warn!("Mapbox token not configured, map will show its fallback");
            Box::new(UnavailableMapProvider::new(
                "Set ESTATE_MAPBOX_TOKEN at build time to show the area map",
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VILLA: LngLat = LngLat::new(-68.4565, 18.4206);

    fn amenities() -> Vec<Amenity> {
        vec![
            Amenity {
                name: "Villa".into(),
                coordinates: VILLA,
                kind: AmenityKind::Property,
            },
            Amenity {
                name: "Teeth of the Dog".into(),
                coordinates: LngLat::new(-68.8875, 18.421),
                kind: AmenityKind::Golf,
            },
        ]
    }

    #[test]
    fn test_missing_token_falls_back() {
        for token in [None, Some(""), Some("   ")] {
            let view = provider_for_token(token).render(VILLA, &amenities());
            assert!(matches!(view, MapView::Unavailable { .. }));
        }
    }

    #[test]
    fn test_static_url_carries_pins_and_token() {
        let view = provider_for_token(Some("pk.abc")).render(VILLA, &amenities());
        let MapView::Static { image_url, markers } = view else {
            panic!("Expected static map");
        };
        assert!(image_url.starts_with("https://api.mapbox.com/styles/v1/mapbox/satellite-streets-v12/static/"));
        assert!(image_url.contains("pin-l%2Bb19762%28-68.4565%2C18.4206%29"));
        assert!(image_url.contains("pin-s%2B22c55e%28-68.8875%2C18.4210%29"));
        assert!(image_url.contains("/-68.4565,18.4206,11.5/"));
        assert!(image_url.ends_with("access_token=pk.abc"));
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].description, "Caribbean's #1 rated golf course");
    }

    #[test]
    fn test_no_amenities_has_no_overlay() {
        let view = MapboxStaticProvider::new("t").render(VILLA, &[]);
        let MapView::Static { image_url, .. } = view else {
            panic!("Expected static map");
        };
        assert!(image_url.contains("/static/-68.4565,18.4206,11.5/800x500@2x"));
    }
}
