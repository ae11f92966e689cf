use crate::figure::Figure;
use crate::geos::{BoundarySet, JoinedLayer};
use crate::templates::{card, region_table, report_layout};
use maud::{html, Markup, PreEscaped};
use serde_json::Value;

pub const MAP_ELEMENT_ID: &str = "map";

pub struct ReportVm<'a> {
    pub title: &'a str,
    pub figure: &'a Figure,
    pub boundaries: &'a BoundarySet,
    pub layers: &'a [JoinedLayer],
    pub listings_total: usize,
    pub listings_used: usize,
    pub generated_at: String,
}

pub fn choropleth_page(vm: &ReportVm) -> Markup {
    let not_drawn: Vec<&str> = vm
        .layers
        .iter()
        .flat_map(|layer| layer.unmatched.iter().map(|r| r.code.as_str()))
        .collect();

    report_layout(
        vm.title,
        html! {
            main {
                div id=(MAP_ELEMENT_ID) {}
                script { (PreEscaped(plot_script(vm.figure, &vm.boundaries.geojson))) }

                @if !not_drawn.is_empty() {
                    p class="microcopy not-drawn" {
                        "Sem fronteira no mapa: " (not_drawn.join(", "))
                    }
                }

                (card("Preço médio por estado", region_table(vm.layers)))

                p class="microcopy" {
                    (vm.listings_used) " de " (vm.listings_total)
                    " imóveis com preço por m² utilizável. Gerado em " (vm.generated_at) "."
                }
            }
        },
    )
}

fn plot_script(figure: &Figure, geojson: &Value) -> String {
    format!(
        "const boundaries = {};\nconst data = {};\nconst layout = {};\n\
         data.forEach(function (trace) {{ trace.geojson = boundaries; }});\n\
         Plotly.newPlot(\"{MAP_ELEMENT_ID}\", data, layout, {{ responsive: true }});",
        script_json(geojson),
        script_json(&Value::Array(figure.data.clone())),
        script_json(&figure.layout),
    )
}

/// JSON text that can sit inside a `<script>` element.
pub fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn script_json_cannot_close_the_element() {
        let text = script_json(&json!({ "name": "</script><script>alert(1)</script>" }));
        assert!(!text.contains("</script>"));
        let back: Value = serde_json::from_str(&text).unwrap();
        assert_eq!(back["name"], "</script><script>alert(1)</script>");
    }
}
