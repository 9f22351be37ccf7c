use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("invalid ISO 3166-1 alpha-2 code: {value:?}")]
    InvalidCountryCode { value: String },

    #[error("visit record has no wonder, WHS, or TWHS target")]
    VisitWithoutTarget,

    #[error("visit record sets more than one of wonder, WHS, and TWHS")]
    AmbiguousVisitTarget,
}

pub type Result<T> = std::result::Result<T, ModelError>;
