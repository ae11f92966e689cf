use crate::geos::{JoinedLayer, RegionValue};
use crate::loader::format_brl;
use maud::{html, Markup};

/// State means of every layer, one row per (state, category) with data.
/// Codes that had no boundary are listed too, flagged as not drawn.
pub fn region_table(layers: &[JoinedLayer]) -> Markup {
    let mut rows: Vec<(&RegionValue, &str, bool)> = Vec::new();
    for layer in layers {
        let label = layer.coarse_type.label();
        rows.extend(
            layer
                .regions
                .iter()
                .filter(|r| r.mean_price_per_area.is_some())
                .map(|r| (r, label, true)),
        );
        rows.extend(layer.unmatched.iter().map(|r| (r, label, false)));
    }
    rows.sort_by(|a, b| a.0.code.cmp(&b.0.code).then(a.1.cmp(b.1)));

    html! {
        @if rows.is_empty() {
            p class="microcopy" { "Nenhum estado com dados suficientes." }
        } @else {
            table class="region-table" {
                thead {
                    tr {
                        th scope="col" { "UF" }
                        th scope="col" { "Estado" }
                        th scope="col" { "Tipo" }
                        th scope="col" { "Preço médio (R$/m²)" }
                        th scope="col" { "Imóveis" }
                    }
                }
                tbody {
                    @for (region, label, drawn) in &rows {
                        tr class=[(!drawn).then_some("not-drawn")] {
                            td { (region.code) }
                            td { (region.name.unwrap_or("-")) }
                            td { (label) }
                            td class="num" {
                                @if let Some(mean) = region.mean_price_per_area {
                                    (format_brl(mean))
                                }
                            }
                            td class="num" { (region.listings) }
                        }
                    }
                }
            }
        }
    }
}
