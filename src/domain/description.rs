// src/domain/description.rs

use crate::loader::parse_area_token;
use once_cell::sync::Lazy;
use regex::Regex;

static PRIVATE_AREA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\d,.]+) de área privativa").unwrap());
static LOT_AREA_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([\d,.]+) de área do terreno").unwrap());

/// Fine-grained property type read from a listing description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    House,
    Apartment,
    Store,
    Commercial,
    Land,
    Other,
}

impl PropertyType {
    pub fn label(self) -> &'static str {
        match self {
            PropertyType::House => "Casa",
            PropertyType::Apartment => "Apartamento",
            PropertyType::Store => "Loja",
            PropertyType::Commercial => "Comercial",
            PropertyType::Land => "Terreno",
            PropertyType::Other => "Outro",
        }
    }
}

/// Keyword table, checked top to bottom against the lower-cased description.
/// The first row with any keyword present decides the type, so a description
/// mentioning both "casa" and "terreno" is a house.
pub const TYPE_KEYWORDS: [(PropertyType, &[&str]); 5] = [
    (PropertyType::House, &["casa"]),
    (PropertyType::Apartment, &["apartamento", "apto"]),
    (PropertyType::Store, &["loja"]),
    (PropertyType::Commercial, &["comercial"]),
    (PropertyType::Land, &["terreno", "lote"]),
];

/// What a description yields. Areas are 0 when the phrase is absent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedDescription {
    pub private_area: f64,
    pub lot_area: f64,
    pub property_type: PropertyType,
}

pub fn parse_description(text: &str) -> ParsedDescription {
    ParsedDescription {
        private_area: first_area(&PRIVATE_AREA_PATTERN, text),
        lot_area: first_area(&LOT_AREA_PATTERN, text),
        property_type: classify(text),
    }
}

pub fn classify(text: &str) -> PropertyType {
    let lower = text.to_lowercase();
    TYPE_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(property_type, _)| *property_type)
        .unwrap_or(PropertyType::Other)
}

fn first_area(pattern: &Regex, text: &str) -> f64 {
    pattern
        .captures(text)
        .and_then(|caps| caps.get(1))
        .and_then(|m| parse_area_token(m.as_str()))
        .unwrap_or(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_areas() {
        let cases: [(&str, f64, f64); 8] = [
            ("120,5 de área privativa", 120.5, 0.0),
            ("500 de área do terreno", 0.0, 500.0),
            ("1.234,5 de área privativa", 1234.5, 0.0),
            (
                "Casa, 0.00 de área total, 68.00 de área privativa, 160.00 de área do terreno, 2 qto(s)",
                68.0,
                160.0,
            ),
            (
                "Apartamento, 49.95 de área privativa, 2 qto(s), 1 vaga(s) na garagem",
                49.95,
                0.0,
            ),
            ("Terreno, 1.200 de área do terreno", 0.0, 1200.0),
            ("sem metragem informada", 0.0, 0.0),
            ("", 0.0, 0.0),
        ];

        for (text, private_area, lot_area) in cases {
            let parsed = parse_description(text);
            assert_eq!(parsed.private_area, private_area, "private area of {text:?}");
            assert_eq!(parsed.lot_area, lot_area, "lot area of {text:?}");
        }
    }

    #[test]
    fn first_private_area_wins() {
        let parsed = parse_description("10 de área privativa, depois 20 de área privativa");
        assert_eq!(parsed.private_area, 10.0);
    }

    #[test]
    fn classifies_by_priority() {
        let cases = [
            ("Casa, 70.00 de área privativa", PropertyType::House),
            ("CASA TÉRREA", PropertyType::House),
            ("Apartamento, 2 qto(s)", PropertyType::Apartment),
            ("apto 31, bloco B", PropertyType::Apartment),
            ("Loja, 30.00 de área privativa", PropertyType::Store),
            ("Sala comercial", PropertyType::Commercial),
            ("Terreno, 300.00 de área do terreno", PropertyType::Land),
            ("Lote 12 quadra 4", PropertyType::Land),
            ("Casa em terreno de esquina", PropertyType::House),
            ("Apartamento sobre loja comercial", PropertyType::Apartment),
            ("Galpão industrial", PropertyType::Other),
            ("", PropertyType::Other),
        ];

        for (text, expected) in cases {
            assert_eq!(classify(text), expected, "type of {text:?}");
        }
    }

    #[test]
    fn labels_carry_no_stray_whitespace() {
        for (property_type, _) in TYPE_KEYWORDS {
            let label = property_type.label();
            assert_eq!(label, label.trim());
        }
        assert_eq!(PropertyType::Apartment.label(), "Apartamento");
    }
}
