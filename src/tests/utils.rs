use crate::geos::BoundarySet;
use encoding_rs::WINDOWS_1252;
use serde_json::json;
use std::path::{Path, PathBuf};

pub const HEADER: &str = "N° do imóvel;UF;Cidade;Bairro;Endereço;Preço;Valor de avaliação;Desconto;Descrição;Modalidade de venda;Link de acesso";

/// One export line with the columns the pipeline reads filled in.
pub fn export_row(state: &str, city: &str, neighborhood: &str, price: &str, description: &str) -> String {
    format!("0;{state};{city};{neighborhood};RUA X;{price};;0;{description};Venda Online;http://x")
}

/// Export bytes as the real file has them: Latin-1 with a title line.
pub fn export_bytes(rows: &[String]) -> Vec<u8> {
    let mut text = format!(" Lista de Imóveis\n{HEADER}\n");
    for row in rows {
        text.push_str(row);
        text.push('\n');
    }
    let (bytes, _, _) = WINDOWS_1252.encode(&text);
    bytes.into_owned()
}

pub fn write_export(dir: &Path, rows: &[String]) -> PathBuf {
    let path = dir.join("Lista_imoveis_geral.csv");
    std::fs::write(&path, export_bytes(rows)).unwrap_or_else(|e| panic!("write export: {e}"));
    path
}

/// A boundary collection with a unit square per code.
pub fn boundaries_json(codes: &[&str]) -> serde_json::Value {
    let features: Vec<_> = codes
        .iter()
        .enumerate()
        .map(|(i, code)| {
            let x = i as f64;
            json!({
                "type": "Feature",
                "properties": { "sigla": code, "name": code },
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[x, 0.0], [x + 1.0, 0.0], [x + 1.0, 1.0], [x, 1.0], [x, 0.0]]]
                }
            })
        })
        .collect();
    json!({ "type": "FeatureCollection", "features": features })
}

pub fn boundaries(codes: &[&str]) -> BoundarySet {
    BoundarySet::from_value(boundaries_json(codes)).unwrap_or_else(|e| panic!("boundaries: {e}"))
}
