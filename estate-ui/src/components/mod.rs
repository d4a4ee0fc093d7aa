//! Listing page components

pub mod button;
pub mod contact;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod icons;
pub mod modal;
pub mod neighborhood;
pub mod roi_financing;
pub mod specs_grid;
pub mod utils;

pub use button::{Button, ButtonSize, ButtonVariant, ChromelessButton};
pub use contact::ContactSection;
pub use footer::Footer;
pub use gallery::{BrowserLightbox, GalleryFilmStrip, GalleryLightbox};
pub use hero::HeroSection;
pub use icons::{
    AlertTriangleIcon, CheckIcon, ChevronLeftIcon, ChevronRightIcon, ClockIcon, DownloadIcon,
    FileTextIcon, LayersIcon, MailIcon, MapPinIcon, MaximizeIcon, PhoneIcon, TrendingUpIcon,
    XIcon,
};
pub use modal::Modal;
pub use neighborhood::NeighborhoodSection;
pub use roi_financing::{InvestmentDocument, RoiFinancing};
pub use specs_grid::{spec_rows, SpecsGrid};
pub use utils::{format_number, format_usd, monthly_total, src_set};
