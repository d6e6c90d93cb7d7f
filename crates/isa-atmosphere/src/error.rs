//! Atmosphere evaluation errors.

use isa_core::IsaError;
use thiserror::Error;

/// Result type for atmosphere operations.
pub type AtmosphereResult<T> = Result<T, AtmosphereError>;

/// Errors raised while validating atmosphere inputs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AtmosphereError {
    /// Altitude outside the supported layered range, or not a usable number.
    #[error("{what} (got {value})")]
    Domain { what: &'static str, value: f64 },

    /// Sweep bounds or point count are unusable.
    #[error("Invalid sweep: {what}")]
    InvalidSweep { what: &'static str },
}

impl From<AtmosphereError> for IsaError {
    fn from(err: AtmosphereError) -> Self {
        match err {
            AtmosphereError::Domain { what, value } => IsaError::Domain { what, value },
            AtmosphereError::InvalidSweep { what } => IsaError::InvalidArg {
                what: format!("altitude sweep: {what}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = AtmosphereError::Domain {
            what: "geopotential altitude above 32000 m",
            value: 32_000.5,
        };
        let msg = err.to_string();
        assert!(msg.contains("32000 m"));
        assert!(msg.contains("32000.5"));
    }

    #[test]
    fn error_to_isa_error() {
        let err: IsaError = AtmosphereError::InvalidSweep {
            what: "need at least 2 points",
        }
        .into();
        assert!(matches!(err, IsaError::InvalidArg { .. }));
    }
}
