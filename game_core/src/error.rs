use thiserror::Error;

/// Errors surfaced by the optional validation paths.
///
/// The metric and the response policy never fail; these only come from
/// strict parameter parsing and configuration checks.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("parameter {name} is not a number: {raw:?}")]
    InvalidParameter { name: &'static str, raw: String },

    #[error("invalid response policy: {0}")]
    InvalidPolicy(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, TuningError>;
