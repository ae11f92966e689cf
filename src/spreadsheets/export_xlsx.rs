use crate::domain::{GroupAggregate, Listing};
use crate::errors::{PipelineError, PipelineResult};
use crate::pipeline::AggregateTables;
use rust_xlsxwriter::Workbook;

const HEADERS: [&str; 4] = ["Região", "Tipo", "Preço médio (R$/m²)", "Imóveis"];

const LISTING_HEADERS: [&str; 13] = [
    "N° do imóvel",
    "UF",
    "Cidade",
    "Bairro",
    "Endereço",
    "Tipo",
    "Categoria",
    "Preço",
    "Valor de avaliação",
    "Área privativa",
    "Área do terreno",
    "Preço por m²",
    "Descrição",
];

/// One worksheet per aggregate table plus one with every derived listing,
/// returned as XLSX bytes.
pub fn export_workbook(listings: &[Listing], tables: &AggregateTables) -> PipelineResult<Vec<u8>> {
    let mut workbook = Workbook::new();

    let sheets: [(&str, &[GroupAggregate]); 3] = [
        ("Estados", tables.by_state.as_slice()),
        ("Cidades", tables.by_city.as_slice()),
        ("Bairros", tables.by_neighborhood.as_slice()),
    ];

    for (name, rows) in sheets {
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(name)
            .map_err(|e| PipelineError::Xlsx(format!("Failed to name sheet '{name}': {e}")))?;

        for (col, header) in HEADERS.iter().enumerate() {
            worksheet
                .write_string(0, col as u16, *header)
                .map_err(|e| {
                    PipelineError::Xlsx(format!("Failed to write header '{}': {}", header, e))
                })?;
        }

        for (i, row) in rows.iter().enumerate() {
            let r = (i + 1) as u32;

            worksheet
                .write_string(r, 0, &row.key)
                .map_err(|e| PipelineError::Xlsx(format!("Failed to write region: {}", e)))?;

            worksheet
                .write_string(r, 1, row.coarse_type.label())
                .map_err(|e| PipelineError::Xlsx(format!("Failed to write type: {}", e)))?;

            worksheet
                .write_number(r, 2, row.mean_price_per_area)
                .map_err(|e| PipelineError::Xlsx(format!("Failed to write mean: {}", e)))?;

            worksheet
                .write_number(r, 3, row.listings as f64)
                .map_err(|e| PipelineError::Xlsx(format!("Failed to write count: {}", e)))?;
        }
    }

    write_listings_sheet(&mut workbook, listings)?;

    workbook
        .save_to_buffer()
        .map_err(|e| PipelineError::Xlsx(format!("Failed to save workbook: {}", e)))
}

fn write_listings_sheet(workbook: &mut Workbook, listings: &[Listing]) -> PipelineResult<()> {
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name("Imóveis")
        .map_err(|e| PipelineError::Xlsx(format!("Failed to name sheet: {e}")))?;

    for (col, header) in LISTING_HEADERS.iter().enumerate() {
        worksheet
            .write_string(0, col as u16, *header)
            .map_err(|e| PipelineError::Xlsx(format!("Failed to write header '{}': {}", header, e)))?;
    }

    for (i, listing) in listings.iter().enumerate() {
        let r = (i + 1) as u32;

        let text_cells: [(u16, &str); 7] = [
            (0, listing.listing_number.as_deref().unwrap_or("")),
            (1, listing.state.as_str()),
            (2, listing.city.as_str()),
            (3, listing.neighborhood.as_str()),
            (4, listing.address.as_deref().unwrap_or("")),
            (5, listing.property_type.label()),
            (6, listing.coarse_type.label()),
        ];
        for (col, value) in text_cells {
            worksheet
                .write_string(r, col, value)
                .map_err(|e| PipelineError::Xlsx(format!("Failed to write row {r}: {e}")))?;
        }

        // Missing numbers stay blank
        let number_cells: [(u16, Option<f64>); 5] = [
            (7, listing.price),
            (8, listing.appraisal_value),
            (9, Some(listing.private_area)),
            (10, Some(listing.lot_area)),
            (11, listing.price_per_area),
        ];
        for (col, value) in number_cells {
            if let Some(value) = value.filter(|v| v.is_finite()) {
                worksheet
                    .write_number(r, col, value)
                    .map_err(|e| PipelineError::Xlsx(format!("Failed to write row {r}: {e}")))?;
            }
        }

        worksheet
            .write_string(r, 12, &listing.description)
            .map_err(|e| PipelineError::Xlsx(format!("Failed to write description: {}", e)))?;
    }

    Ok(())
}
