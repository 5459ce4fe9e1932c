//! Engine error type.
//!
//! Out-of-range numbers are clamped and never reach this type. What remains
//! is either a value the schema cannot interpret or a lookup by an id that
//! does not exist, which is a programming error in the host.
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// A value cannot be interpreted in its parameter's domain.
    #[error("{parameter}: {reason}")]
    OutOfDomain { parameter: String, reason: String },

    #[error("unknown calculator id: {0}")]
    UnknownCalculatorId(String),

    #[error("unknown parameter id: {0}")]
    UnknownParameterId(String),

    /// Bracket ceilings must strictly increase and grants strictly decrease.
    #[error("invalid bracket table: {0}")]
    InvalidBracketTable(String),

    /// A parameter declaration is inconsistent: empty range, start value
    /// outside its domain, or a derived bound with no usable source.
    #[error("invalid parameter {parameter}: {reason}")]
    InvalidParameter { parameter: String, reason: String },

    #[error("invalid validation pattern for {parameter}: {reason}")]
    InvalidPattern { parameter: String, reason: String },

    #[error("configuration error: {0}")]
    Config(String),
}

impl EngineError {
    pub(crate) fn out_of_domain(parameter: &str, reason: impl Into<String>) -> Self {
        Self::OutOfDomain {
            parameter: parameter.to_string(),
            reason: reason.into(),
        }
    }
}
