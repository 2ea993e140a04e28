pub mod aggregate;
pub mod catalog;

pub use aggregate::{MaterialId, MaterialRecord, NumericValue};
pub use catalog::{parse_catalog, Catalog, CatalogError};
