// boundaries.rs
use crate::config::BoundarySource;
use crate::errors::{PipelineError, PipelineResult};
use crate::geos::normalize_code;
use log::{debug, info};
use reqwest::blocking::Client;
use serde_json::Value;
use std::path::Path;
use std::time::{Duration, Instant};
use url::Url;

const USER_AGENT: &str = concat!("price_map/", env!("CARGO_PKG_VERSION"));

// FeatureCollection
//  └── features[]
//       ├── geometry          (passed through untouched)
//       └── properties
//            ├── sigla        two-letter state code, the join key
//            └── name

/// Region boundaries with every `properties.sigla` normalised in place, plus
/// the codes in feature order.
#[derive(Debug, Clone)]
pub struct BoundarySet {
    pub geojson: Value,
    pub codes: Vec<String>,
}

impl BoundarySet {
    pub fn from_value(mut geojson: Value) -> PipelineResult<Self> {
        let features = geojson
            .get_mut("features")
            .and_then(Value::as_array_mut)
            .ok_or(PipelineError::UnexpectedShape(
                "features missing from boundary collection".to_string(),
            ))?;

        let mut codes = Vec::with_capacity(features.len());
        for (index, feature) in features.iter_mut().enumerate() {
            let properties = feature
                .get_mut("properties")
                .and_then(Value::as_object_mut)
                .ok_or_else(|| {
                    PipelineError::UnexpectedShape(format!("feature {index} has no properties"))
                })?;

            let code = properties
                .get("sigla")
                .and_then(Value::as_str)
                .map(normalize_code)
                .ok_or_else(|| {
                    PipelineError::UnexpectedShape(format!("feature {index} has no properties.sigla"))
                })?;

            properties.insert("sigla".to_string(), Value::String(code.clone()));
            codes.push(code);
        }

        Ok(Self { geojson, codes })
    }

    pub fn from_json(text: &str) -> PipelineResult<Self> {
        let value: Value =
            serde_json::from_str(text).map_err(|e| PipelineError::JsonParse(e.to_string()))?;
        Self::from_value(value)
    }
}

pub struct BoundaryClient {
    client: Client,
}

impl BoundaryClient {
    pub fn new(timeout: Duration) -> PipelineResult<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        Ok(Self { client })
    }

    /// One GET, no retry. Any failure ends the run.
    pub fn fetch(&self, url: &Url) -> PipelineResult<BoundarySet> {
        let start = Instant::now();

        let resp = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        let status = resp.status();
        let text = resp
            .text()
            .map_err(|e| PipelineError::Network(e.to_string()))?;

        if !status.is_success() {
            return Err(PipelineError::Network(format!("HTTP {status} from {url}")));
        }

        debug!("Fetched {} bytes from {url} in {:?}", text.len(), start.elapsed());
        BoundarySet::from_json(&text)
    }
}

pub fn load_boundaries(source: &BoundarySource, timeout: Duration) -> PipelineResult<BoundarySet> {
    let boundaries = match source {
        BoundarySource::Url(url) => BoundaryClient::new(timeout)?.fetch(url)?,
        BoundarySource::File(path) => read_boundaries(path)?,
    };
    info!("🗺️ {} boundary features loaded", boundaries.codes.len());
    Ok(boundaries)
}

fn read_boundaries(path: &Path) -> PipelineResult<BoundarySet> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| PipelineError::Io(format!("Failed to read {}: {e}", path.display())))?;
    BoundarySet::from_json(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn normalises_codes_in_place() {
        let set = BoundarySet::from_value(json!({
            "type": "FeatureCollection",
            "features": [
                { "type": "Feature", "properties": { "sigla": " sp", "name": "São Paulo" }, "geometry": null },
                { "type": "Feature", "properties": { "sigla": "RJ" }, "geometry": null }
            ]
        }))
        .unwrap();

        assert_eq!(set.codes, vec!["SP", "RJ"]);
        assert_eq!(set.geojson["features"][0]["properties"]["sigla"], "SP");
        assert_eq!(set.geojson["features"][0]["properties"]["name"], "São Paulo");
    }

    #[test]
    fn malformed_collections_are_rejected() {
        let no_features = BoundarySet::from_value(json!({ "type": "FeatureCollection" }));
        assert!(matches!(no_features, Err(PipelineError::UnexpectedShape(_))));

        let no_sigla = BoundarySet::from_value(json!({
            "features": [ { "properties": { "name": "Acre" } } ]
        }));
        assert!(matches!(no_sigla, Err(PipelineError::UnexpectedShape(_))));

        assert!(matches!(
            BoundarySet::from_json("<html>rate limited</html>"),
            Err(PipelineError::JsonParse(_))
        ));
    }

    #[test]
    fn reads_a_local_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(
            &mut file,
            br#"{"features":[{"properties":{"sigla":"ac"},"geometry":null}]}"#,
        )
        .unwrap();

        let source = BoundarySource::File(file.path().to_path_buf());
        let set = load_boundaries(&source, Duration::from_secs(1)).unwrap();
        assert_eq!(set.codes, vec!["AC"]);
    }
}
