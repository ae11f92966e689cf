use crate::domain::description::{parse_description, PropertyType};
use crate::domain::logic::{group_type, price_per_area, CoarseType};
use crate::loader::{parse_money, RawListing};

/// A listing with every derived attribute filled in. Built once per run and
/// never changed afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Listing {
    pub listing_number: Option<String>,
    pub address: Option<String>,
    pub description: String,

    // Region keys, as exported
    pub state: String,
    pub city: String,
    pub neighborhood: String,

    pub price: Option<f64>,
    pub appraisal_value: Option<f64>,

    pub private_area: f64,
    pub lot_area: f64,
    pub property_type: PropertyType,
    pub coarse_type: CoarseType,
    pub price_per_area: Option<f64>,
}

impl Listing {
    pub fn from_raw(raw: &RawListing) -> Self {
        let parsed = parse_description(&raw.description);
        let price = parse_money(&raw.price);
        let coarse_type = group_type(parsed.property_type);

        Listing {
            listing_number: raw.listing_number.clone(),
            address: raw.address.clone(),
            description: raw.description.clone(),
            state: raw.state.clone(),
            city: raw.city.clone(),
            neighborhood: raw.neighborhood.clone(),
            price,
            appraisal_value: parse_money(&raw.appraisal_value),
            private_area: parsed.private_area,
            lot_area: parsed.lot_area,
            property_type: parsed.property_type,
            coarse_type,
            price_per_area: price_per_area(
                coarse_type,
                price,
                parsed.private_area,
                parsed.lot_area,
            ),
        }
    }

    /// The metric when this listing may take part in an average: the price
    /// parsed and the metric is a finite number.
    pub fn aggregatable_metric(&self) -> Option<f64> {
        self.price
            .and(self.price_per_area)
            .filter(|v| v.is_finite())
    }
}
