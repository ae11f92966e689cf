// src/domain/aggregate.rs

use crate::config::AggregateOptions;
use crate::domain::listing::Listing;
use crate::domain::logic::CoarseType;
use log::debug;
use std::collections::BTreeMap;

const LOW_QUANTILE: f64 = 0.01;
const HIGH_QUANTILE: f64 = 0.99;

/// Region attribute listings are grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    State,
    City,
    Neighborhood,
}

impl GroupBy {
    pub fn key(self, listing: &Listing) -> &str {
        match self {
            GroupBy::State => &listing.state,
            GroupBy::City => &listing.city,
            GroupBy::Neighborhood => &listing.neighborhood,
        }
    }
}

/// Mean price per area for one (region, category) pair.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAggregate {
    pub key: String,
    pub coarse_type: CoarseType,
    pub mean_price_per_area: f64,
    pub listings: usize,
}

/// Averages the metric per (region, category) after dropping unusable values,
/// values above the configured ceiling and, optionally, everything outside the
/// 1st..99th percentile of what is left. Output is ordered by key, then
/// category; groups left empty are not reported.
pub fn aggregate<'a, I>(listings: I, group_by: GroupBy, options: &AggregateOptions) -> Vec<GroupAggregate>
where
    I: IntoIterator<Item = &'a Listing>,
{
    let mut kept: Vec<(&Listing, f64)> = listings
        .into_iter()
        .filter_map(|l| l.aggregatable_metric().map(|v| (l, v)))
        .filter(|(_, v)| *v <= options.max_price_per_area)
        .collect();

    if options.use_quantiles {
        let mut values: Vec<f64> = kept.iter().map(|(_, v)| *v).collect();
        values.sort_by(|a, b| a.total_cmp(b));

        if let (Some(low), Some(high)) = (
            percentile(&values, LOW_QUANTILE),
            percentile(&values, HIGH_QUANTILE),
        ) {
            debug!("Quantile window for {group_by:?}: [{low}, {high}]");
            kept.retain(|(_, v)| *v >= low && *v <= high);
        }
    }

    let mut groups: BTreeMap<(&str, CoarseType), (f64, usize)> = BTreeMap::new();
    for (listing, value) in kept {
        let entry = groups
            .entry((group_by.key(listing), listing.coarse_type))
            .or_insert((0.0, 0));
        entry.0 += value;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|((key, coarse_type), (sum, count))| GroupAggregate {
            key: key.to_string(),
            coarse_type,
            mean_price_per_area: sum / count as f64,
            listings: count,
        })
        .collect()
}

/// Percentile of an ascending slice, interpolating linearly between the two
/// nearest order statistics. `None` for an empty slice.
pub fn percentile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }

    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = (lower + 1).min(sorted.len() - 1);
    let fraction = position - lower as f64;

    Some(sorted[lower] + (sorted[upper] - sorted[lower]) * fraction)
}
