// figure.rs
//
// Plotly description of the choropleth. The boundary collection itself is not
// copied into every trace; the page attaches it once on the client side.

use crate::domain::CoarseType;
use crate::geos::JoinedLayer;
use crate::loader::format_brl;
use serde_json::{json, Value};

/// Categories that get a map layer. `Other` is always 0 and is left off.
pub const MAPPED_TYPES: [CoarseType; 2] = [CoarseType::Construction, CoarseType::Land];

pub const FEATURE_ID_KEY: &str = "properties.sigla";
pub const COLOR_SCALE: &str = "Plasma";
pub const HOVER_TEMPLATE: &str =
    "<b>%{location} - %{customdata[0]}</b><br>Preço médio: %{customdata[1]}/m²<extra></extra>";
const NO_DATA: &str = "sem dados";

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

pub fn choropleth_figure(layers: &[JoinedLayer], title: &str) -> Figure {
    let data = layers
        .iter()
        .enumerate()
        .map(|(index, layer)| choropleth_trace(layer, index == 0))
        .collect();

    let mut layout = json!({
        "title": { "text": title, "x": 0.5 },
        "margin": { "r": 0, "t": 50, "l": 0, "b": 0 },
        "geo": { "fitbounds": "locations", "visible": false }
    });

    if layers.len() > 1 {
        layout["updatemenus"] = json!([{
            "type": "buttons",
            "direction": "right",
            "x": 0.5,
            "xanchor": "center",
            "y": 0,
            "yanchor": "top",
            "buttons": layer_buttons(layers)
        }]);
    }

    Figure { data, layout }
}

fn choropleth_trace(layer: &JoinedLayer, visible: bool) -> Value {
    let locations: Vec<&str> = layer.regions.iter().map(|r| r.code.as_str()).collect();
    let z: Vec<Option<f64>> = layer
        .regions
        .iter()
        .map(|r| r.mean_price_per_area)
        .collect();
    let customdata: Vec<[String; 2]> = layer
        .regions
        .iter()
        .map(|r| {
            [
                r.name.map(str::to_string).unwrap_or_else(|| r.code.clone()),
                r.mean_price_per_area
                    .map(format_brl)
                    .unwrap_or_else(|| NO_DATA.to_string()),
            ]
        })
        .collect();

    json!({
        "type": "choropleth",
        "name": layer.coarse_type.label(),
        "visible": visible,
        "locations": locations,
        "z": z,
        "featureidkey": FEATURE_ID_KEY,
        "customdata": customdata,
        "hovertemplate": HOVER_TEMPLATE,
        "colorscale": COLOR_SCALE,
        "marker": { "line": { "width": 1, "color": "white" } },
        "colorbar": {
            "title": { "text": "R$/m²" },
            "tickprefix": "R$ ",
            "ticks": "outside"
        }
    })
}

fn layer_buttons(layers: &[JoinedLayer]) -> Vec<Value> {
    (0..layers.len())
        .map(|shown| {
            let visible: Vec<bool> = (0..layers.len()).map(|i| i == shown).collect();
            json!({
                "label": layers[shown].coarse_type.label(),
                "method": "restyle",
                "args": [{ "visible": visible }]
            })
        })
        .collect()
}
