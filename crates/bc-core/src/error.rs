use thiserror::Error;

pub type BcResult<T> = Result<T, BcError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum BcError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Invariant violated: {what}")]
    Invariant { what: String },
}
