pub mod components;
pub mod layouts;
pub mod pages;

// Re-exports for convenience
pub use components::{card, region_table};
pub use layouts::report::report_layout;
pub use pages::{choropleth_page, ReportVm};
