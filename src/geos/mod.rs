mod boundaries;
pub mod join;
pub mod states;

pub use boundaries::{load_boundaries, BoundarySet};
pub use join::{join_state_aggregates, normalize_code, JoinedLayer, RegionValue};
pub use states::state_name;
