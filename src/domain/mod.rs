pub mod aggregate;
pub mod description;
pub mod listing;
pub mod logic;

pub use aggregate::{aggregate, GroupAggregate, GroupBy};
pub use listing::Listing;
pub use logic::CoarseType;
