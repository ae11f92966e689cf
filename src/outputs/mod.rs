pub mod browser;
pub mod html;
pub mod xlsx;

pub use browser::open_in_browser;
pub use html::write_page;
pub use xlsx::write_workbook;
