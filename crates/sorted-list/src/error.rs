use thiserror::Error;

use crate::value::ElementKind;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortedListError {
    /// Kind tag is neither `integer` nor `text`.
    #[error("invalid element kind: {0:?}")]
    InvalidKind(String),
    #[error("type mismatch: list holds {expected} values, got {found}")]
    TypeMismatch {
        expected: ElementKind,
        found: ElementKind,
    },
}

pub type Result<T> = std::result::Result<T, SortedListError>;
