// join.rs
use crate::domain::{CoarseType, GroupAggregate};
use crate::geos::{state_name, BoundarySet};
use log::warn;
use std::collections::BTreeMap;

/// Upper-cases and trims a region code so "sp " and "SP" are the same key.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// One boundary feature with whatever aggregate matched it.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionValue {
    pub code: String,
    pub name: Option<&'static str>,
    pub mean_price_per_area: Option<f64>,
    pub listings: usize,
}

/// State means for one category laid over the boundary features.
#[derive(Debug, Clone, PartialEq)]
pub struct JoinedLayer {
    pub coarse_type: CoarseType,
    /// One entry per boundary feature, in feature order.
    pub regions: Vec<RegionValue>,
    /// Aggregates whose code has no boundary; they are not drawn.
    pub unmatched: Vec<RegionValue>,
}

/// Joins state-level aggregates of one category to the boundaries by
/// normalised code. Aggregates that collapse onto the same code are merged
/// into a listing-weighted mean.
pub fn join_state_aggregates(
    boundaries: &BoundarySet,
    aggregates: &[GroupAggregate],
    coarse_type: CoarseType,
) -> JoinedLayer {
    let mut by_code: BTreeMap<String, (f64, usize)> = BTreeMap::new();
    for aggregate in aggregates.iter().filter(|a| a.coarse_type == coarse_type) {
        let entry = by_code.entry(normalize_code(&aggregate.key)).or_insert((0.0, 0));
        entry.0 += aggregate.mean_price_per_area * aggregate.listings as f64;
        entry.1 += aggregate.listings;
    }

    let regions = boundaries
        .codes
        .iter()
        .map(|code| {
            let matched = by_code.get(code);
            RegionValue {
                code: code.clone(),
                name: state_name(code),
                mean_price_per_area: matched.map(|(sum, count)| sum / *count as f64),
                listings: matched.map(|(_, count)| *count).unwrap_or(0),
            }
        })
        .collect();

    let unmatched: Vec<RegionValue> = by_code
        .iter()
        .filter(|(code, _)| !boundaries.codes.contains(*code))
        .map(|(code, (sum, count))| RegionValue {
            code: code.clone(),
            name: state_name(code),
            mean_price_per_area: Some(sum / *count as f64),
            listings: *count,
        })
        .collect();

    for region in &unmatched {
        warn!(
            "No boundary for state code '{}' ({}); not drawn",
            region.code,
            coarse_type.label()
        );
    }

    JoinedLayer {
        coarse_type,
        regions,
        unmatched,
    }
}
