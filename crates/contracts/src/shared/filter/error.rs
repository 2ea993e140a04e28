use thiserror::Error;

use super::FilterField;

/// Ошибки построения критериев фильтра
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CriteriaError {
    #[error("invalid value '{value}' for filter {}", .field.key())]
    InvalidChoice { field: FilterField, value: String },

    #[error("unknown filter field '{0}'")]
    UnknownField(String),
}
