use crate::config::Config;
use log::{error, info};

mod config;
mod domain;
mod errors;
mod figure;
mod geos;
mod loader;
mod outputs;
mod pipeline;
mod spreadsheets;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // 1️⃣ Read configuration
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("❌ {e}");
            std::process::exit(1);
        }
    };

    // 2️⃣ Run the pipeline once
    match pipeline::run(&config) {
        Ok(summary) => {
            info!(
                "Processed {} listings; map at {}",
                summary.listings,
                summary.page_path.display()
            );
            if let Some(path) = summary.xlsx_path {
                info!("Aggregates workbook at {}", path.display());
            }
        }
        Err(e) => {
            error!("❌ Pipeline failed: {e}");
            std::process::exit(1);
        }
    }
}
