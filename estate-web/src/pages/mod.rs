mod listing;
mod not_found;

pub use listing::ListingPage;
pub use not_found::NotFound;
