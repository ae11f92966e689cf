pub mod choropleth;

pub use choropleth::{choropleth_page, ReportVm};
