pub mod currency;
mod loader;
pub mod models;

pub use currency::{format_brl, parse_area_token, parse_money};
pub use loader::load_listings;
#[cfg(test)]
pub use loader::parse_export;
pub use models::RawListing;
