use crate::errors::{PipelineError, PipelineResult};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_INPUT: &str = "Lista_imoveis_geral.csv";
pub const DEFAULT_BOUNDARY_URL: &str = "https://raw.githubusercontent.com/codeforamerica/click_that_hood/master/public/data/brazil-states.geojson";
pub const DEFAULT_MAX_PRICE_PER_AREA: f64 = 50_000.0;
pub const DEFAULT_NEIGHBORHOOD_CITY: &str = "São Paulo";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Where region boundaries come from.
#[derive(Debug, Clone, PartialEq)]
pub enum BoundarySource {
    Url(Url),
    File(PathBuf),
}

/// Knobs for the outlier filter applied before averaging.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AggregateOptions {
    pub max_price_per_area: f64,
    pub use_quantiles: bool,
}

impl Default for AggregateOptions {
    fn default() -> Self {
        Self {
            max_price_per_area: DEFAULT_MAX_PRICE_PER_AREA,
            use_quantiles: true,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input_path: PathBuf,
    pub boundary_source: BoundarySource,
    pub http_timeout: Duration,
    pub aggregate: AggregateOptions,
    pub neighborhood_city: String,
    pub output_path: Option<PathBuf>,
    pub xlsx_path: Option<PathBuf>,
    pub open_browser: bool,
}

impl Config {
    /// Reads the process environment, after loading `.env` if one exists.
    pub fn from_env() -> PipelineResult<Self> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup, so tests don't touch the process env.
    pub fn from_lookup<F>(lookup: F) -> PipelineResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let boundary_source = match get("PRICE_MAP_BOUNDARY_FILE") {
            Some(path) => BoundarySource::File(PathBuf::from(path)),
            None => {
                let raw = get("PRICE_MAP_BOUNDARY_URL")
                    .unwrap_or_else(|| DEFAULT_BOUNDARY_URL.to_string());
                let url = Url::parse(&raw).map_err(|e| {
                    PipelineError::Config(format!("PRICE_MAP_BOUNDARY_URL '{raw}': {e}"))
                })?;
                BoundarySource::Url(url)
            }
        };

        let timeout_secs = match get("PRICE_MAP_HTTP_TIMEOUT_SECS") {
            Some(v) => v.parse::<u64>().map_err(|e| {
                PipelineError::Config(format!("PRICE_MAP_HTTP_TIMEOUT_SECS '{v}': {e}"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let max_price_per_area = match get("PRICE_MAP_MAX_PRICE_PER_AREA") {
            Some(v) => v
                .parse::<f64>()
                .ok()
                .filter(|n| n.is_finite() && *n >= 0.0)
                .ok_or_else(|| {
                    PipelineError::Config(format!("PRICE_MAP_MAX_PRICE_PER_AREA '{v}' is not a non-negative number"))
                })?,
            None => DEFAULT_MAX_PRICE_PER_AREA,
        };

        let use_quantiles = parse_flag("PRICE_MAP_USE_QUANTILES", get("PRICE_MAP_USE_QUANTILES"), true)?;
        let open_browser = parse_flag("PRICE_MAP_OPEN_BROWSER", get("PRICE_MAP_OPEN_BROWSER"), true)?;

        Ok(Config {
            input_path: PathBuf::from(get("PRICE_MAP_INPUT").unwrap_or_else(|| DEFAULT_INPUT.to_string())),
            boundary_source,
            http_timeout: Duration::from_secs(timeout_secs),
            aggregate: AggregateOptions {
                max_price_per_area,
                use_quantiles,
            },
            neighborhood_city: get("PRICE_MAP_NEIGHBORHOOD_CITY")
                .unwrap_or_else(|| DEFAULT_NEIGHBORHOOD_CITY.to_string()),
            output_path: get("PRICE_MAP_OUTPUT").map(PathBuf::from),
            xlsx_path: get("PRICE_MAP_XLSX").map(PathBuf::from),
            open_browser,
        })
    }
}

fn parse_flag(key: &str, value: Option<String>, default: bool) -> PipelineResult<bool> {
    let Some(v) = value else {
        return Ok(default);
    };
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(PipelineError::Config(format!("{key} '{v}' is not a boolean"))),
    }
}
