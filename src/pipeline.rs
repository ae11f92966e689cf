// pipeline.rs
//
// load -> derive -> aggregate -> join -> render. Every stage below is a plain
// function over owned or borrowed data; `run` is the only place with effects.

use crate::config::{AggregateOptions, Config};
use crate::domain::{aggregate, GroupAggregate, GroupBy, Listing};
use crate::errors::PipelineResult;
use crate::figure::{choropleth_figure, MAPPED_TYPES};
use crate::geos::{join_state_aggregates, load_boundaries, BoundarySet, JoinedLayer};
use crate::loader::{load_listings, RawListing};
use crate::outputs::{open_in_browser, write_page, write_workbook};
use crate::spreadsheets::export_workbook;
use crate::templates::{choropleth_page, ReportVm};
use log::{debug, info};
use maud::Markup;
use std::collections::BTreeMap;
use std::path::PathBuf;

pub const MAP_TITLE: &str = "Preço médio por m² por Estado";

/// The three tables computed per run.
#[derive(Debug, Clone, PartialEq)]
pub struct AggregateTables {
    pub by_state: Vec<GroupAggregate>,
    pub by_city: Vec<GroupAggregate>,
    /// Only listings of the configured city.
    pub by_neighborhood: Vec<GroupAggregate>,
}

#[derive(Debug)]
pub struct RunSummary {
    pub listings: usize,
    pub page_path: PathBuf,
    pub xlsx_path: Option<PathBuf>,
}

pub fn derive_listings(rows: &[RawListing]) -> Vec<Listing> {
    let listings: Vec<Listing> = rows.iter().map(Listing::from_raw).collect();

    let mut by_type: BTreeMap<&str, usize> = BTreeMap::new();
    for listing in &listings {
        *by_type.entry(listing.property_type.label()).or_default() += 1;
    }
    debug!("Listings by type: {by_type:?}");

    listings
}

pub fn aggregate_tables(
    listings: &[Listing],
    options: &AggregateOptions,
    neighborhood_city: &str,
) -> AggregateTables {
    let city = neighborhood_city.trim();
    AggregateTables {
        by_state: aggregate(listings, GroupBy::State, options),
        by_city: aggregate(listings, GroupBy::City, options),
        by_neighborhood: aggregate(
            listings.iter().filter(|l| l.city.trim() == city),
            GroupBy::Neighborhood,
            options,
        ),
    }
}

pub fn state_layers(boundaries: &BoundarySet, by_state: &[GroupAggregate]) -> Vec<JoinedLayer> {
    MAPPED_TYPES
        .iter()
        .map(|coarse_type| join_state_aggregates(boundaries, by_state, *coarse_type))
        .collect()
}

pub fn render_report(
    listings: &[Listing],
    boundaries: &BoundarySet,
    by_state: &[GroupAggregate],
    generated_at: String,
) -> Markup {
    let layers = state_layers(boundaries, by_state);
    let figure = choropleth_figure(&layers, MAP_TITLE);

    choropleth_page(&ReportVm {
        title: MAP_TITLE,
        figure: &figure,
        boundaries,
        layers: &layers,
        listings_total: listings.len(),
        listings_used: listings
            .iter()
            .filter(|l| l.aggregatable_metric().is_some())
            .count(),
        generated_at,
    })
}

/// Runs every stage once. The first failure ends the run; nothing is written
/// to disk until every fallible stage has succeeded.
pub fn run(config: &Config) -> PipelineResult<RunSummary> {
    let rows = load_listings(&config.input_path)?;
    let listings = derive_listings(&rows);

    let tables = aggregate_tables(&listings, &config.aggregate, &config.neighborhood_city);
    info!(
        "📊 {} state, {} city and {} neighborhood groups",
        tables.by_state.len(),
        tables.by_city.len(),
        tables.by_neighborhood.len()
    );

    let workbook = match &config.xlsx_path {
        Some(path) => Some((path, export_workbook(&listings, &tables)?)),
        None => None,
    };

    let boundaries = load_boundaries(&config.boundary_source, config.http_timeout)?;

    let generated_at = chrono::Local::now().format("%d/%m/%Y %H:%M").to_string();
    let page = render_report(&listings, &boundaries, &tables.by_state, generated_at);

    let page_path = write_page(page, config.output_path.as_deref())?;
    info!("✅ Map written to {}", page_path.display());

    let xlsx_path = match workbook {
        Some((path, buffer)) => {
            write_workbook(&buffer, path)?;
            info!("Workbook written to {}", path.display());
            Some(path.clone())
        }
        None => None,
    };

    if config.open_browser {
        open_in_browser(&page_path)?;
    }

    Ok(RunSummary {
        listings: listings.len(),
        page_path,
        xlsx_path,
    })
}
