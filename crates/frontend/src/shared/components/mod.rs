pub mod filter_panel;
pub mod page_header;
pub mod table_checkbox;
pub mod ui;
