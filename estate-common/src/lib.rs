pub mod contact_form;
pub mod focus_trap;
pub mod lightbox;
pub mod map;
pub mod media;
pub mod scroll_lock;

pub use contact_form::{
    default_fields, ContactForm, ContactSubmission, FieldKind, FieldValue, FormField,
    SelectOption, ValidationErrors,
};
pub use focus_trap::{FocusTrap, LightboxControl};
pub use lightbox::{
    KeyDisposition, LightboxController, LightboxKey, LightboxPlatform, PointerTarget,
};
pub use map::{
    provider_for_token, Amenity, AmenityKind, LngLat, MapMarker, MapProvider, MapView,
    MapboxStaticProvider, UnavailableMapProvider,
};
pub use media::{DescriptorError, ImageDescriptor, MediaCollection, OutOfRangeError};
pub use scroll_lock::{ScrollLockGuard, ScrollLockRegistry, ScrollSurface};
