pub mod comparison;
pub mod export_actions;
pub mod filters;
pub mod grade_badge;
pub mod list;
pub mod page;
pub mod table;

pub use page::MaterialPage;
