use thiserror::Error;

/// Why a column width string could not become a size hint.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum WidthError {
    #[error("column width {raw:?} does not start with an integer")]
    NotANumber { raw: String },
    #[error("column width {raw:?} must be greater than zero")]
    NonPositive { raw: String },
}

impl WidthError {
    pub fn not_a_number(raw: impl Into<String>) -> Self {
        Self::NotANumber { raw: raw.into() }
    }

    pub fn non_positive(raw: impl Into<String>) -> Self {
        Self::NonPositive { raw: raw.into() }
    }
}
