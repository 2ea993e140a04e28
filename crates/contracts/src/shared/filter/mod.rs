pub mod coerce;
pub mod criteria;
pub mod engine;
pub mod error;
pub mod field;

pub use criteria::FilterCriteria;
pub use engine::{evaluate, filter_materials, FilterOutcome, FilterPlan};
pub use error::CriteriaError;
pub use field::{FieldKind, FilterField};
