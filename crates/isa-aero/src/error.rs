//! Aerodynamic evaluation errors.

use isa_atmosphere::AtmosphereError;
use isa_core::IsaError;
use thiserror::Error;

/// Result type for aerodynamic operations.
pub type AeroResult<T> = Result<T, AeroError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum AeroError {
    /// Non-physical speed or reference length.
    #[error("{what} (got {value})")]
    Domain { what: &'static str, value: f64 },

    /// Speed type text that is not TAS, EAS or Mach.
    #[error("Invalid speed type '{given}' (expected TAS, EAS or mach)")]
    InvalidSpeedType { given: String },

    /// Batch inputs whose lengths neither match nor broadcast.
    #[error("Cannot broadcast {speeds} speeds against {atmospheres} atmospheric states")]
    ShapeMismatch { speeds: usize, atmospheres: usize },

    #[error(transparent)]
    Atmosphere(#[from] AtmosphereError),
}

impl From<AeroError> for IsaError {
    fn from(err: AeroError) -> Self {
        match err {
            AeroError::Domain { what, value } => IsaError::Domain { what, value },
            AeroError::InvalidSpeedType { given } => IsaError::InvalidArg {
                what: format!("speed type '{given}'"),
            },
            AeroError::ShapeMismatch {
                speeds,
                atmospheres,
            } => IsaError::InvalidArg {
                what: format!("{speeds} speeds vs {atmospheres} atmospheric states"),
            },
            AeroError::Atmosphere(inner) => inner.into(),
        }
    }
}
