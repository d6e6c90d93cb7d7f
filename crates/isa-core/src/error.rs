use thiserror::Error;

pub type IsaResult<T> = Result<T, IsaError>;

/// Workspace-wide error. Crate-level errors convert into this at the
/// boundary so callers juggling both evaluators can use one `?` type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum IsaError {
    #[error("Non-finite numeric value for {what}: {value}")]
    NonFinite { what: &'static str, value: f64 },

    #[error("Value for {what} outside the supported domain: {value}")]
    Domain { what: &'static str, value: f64 },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: String },
}
