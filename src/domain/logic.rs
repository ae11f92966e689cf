// src/domain/logic.rs

use crate::domain::description::PropertyType;

/// Coarse category the price metric is computed and averaged by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CoarseType {
    Construction,
    Land,
    Other,
}

impl CoarseType {
    pub fn label(self) -> &'static str {
        match self {
            CoarseType::Construction => "Construção",
            CoarseType::Land => "Terreno",
            CoarseType::Other => "Outro",
        }
    }
}

pub fn group_type(property_type: PropertyType) -> CoarseType {
    match property_type {
        PropertyType::House
        | PropertyType::Apartment
        | PropertyType::Store
        | PropertyType::Commercial => CoarseType::Construction,
        PropertyType::Land => CoarseType::Land,
        PropertyType::Other => CoarseType::Other,
    }
}

/// Price per square metre. Buildings divide by private area, land by lot
/// area. A zero area or an `Other` listing gives 0; a missing price gives
/// `None` only when a division would actually happen.
pub fn price_per_area(
    coarse_type: CoarseType,
    price: Option<f64>,
    private_area: f64,
    lot_area: f64,
) -> Option<f64> {
    let area = match coarse_type {
        CoarseType::Construction => private_area,
        CoarseType::Land => lot_area,
        CoarseType::Other => return Some(0.0),
    };

    if area > 0.0 {
        price.map(|p| p / area)
    } else {
        Some(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grouping_is_total() {
        assert_eq!(group_type(PropertyType::House), CoarseType::Construction);
        assert_eq!(group_type(PropertyType::Apartment), CoarseType::Construction);
        assert_eq!(group_type(PropertyType::Store), CoarseType::Construction);
        assert_eq!(group_type(PropertyType::Commercial), CoarseType::Construction);
        assert_eq!(group_type(PropertyType::Land), CoarseType::Land);
        assert_eq!(group_type(PropertyType::Other), CoarseType::Other);
    }

    #[test]
    fn uses_the_area_matching_the_category() {
        assert_eq!(
            price_per_area(CoarseType::Construction, Some(300_000.0), 120.0, 999.0),
            Some(2500.0)
        );
        assert_eq!(
            price_per_area(CoarseType::Land, Some(100_000.0), 999.0, 500.0),
            Some(200.0)
        );
    }

    #[test]
    fn zero_area_is_guarded() {
        assert_eq!(price_per_area(CoarseType::Construction, Some(1.0), 0.0, 50.0), Some(0.0));
        assert_eq!(price_per_area(CoarseType::Land, Some(1.0), 50.0, 0.0), Some(0.0));
    }

    #[test]
    fn other_is_always_zero() {
        for price in [None, Some(0.0), Some(1.0), Some(1e12)] {
            assert_eq!(price_per_area(CoarseType::Other, price, 100.0, 100.0), Some(0.0));
        }
    }

    #[test]
    fn missing_price_with_area_is_undefined() {
        assert_eq!(price_per_area(CoarseType::Construction, None, 80.0, 0.0), None);
    }
}
