//! isa-atmosphere: 1976 International Standard Atmosphere up to 32 km.
//!
//! Provides:
//! - Geometric/geopotential altitude conversion
//! - The three-layer standard table (troposphere, tropopause, lower stratosphere)
//! - Closed-form evaluation of temperature, pressure, density, speed of sound
//!   and Sutherland viscosity, for single altitudes or ordered batches
//! - A process-wide sea-level reference state
//! - Linear altitude sweeps for building profiles
//!
//! # Example
//!
//! ```
//! use isa_atmosphere::{AltitudeKind, evaluate};
//! use isa_core::units::m;
//!
//! let state = evaluate(m(10_000.0), AltitudeKind::Geometric).unwrap();
//! assert!((state.temperature_k() - 223.25).abs() < 0.01);
//! ```

pub mod altitude;
pub mod constants;
pub mod error;
pub mod evaluator;
pub mod layers;
pub mod state;
pub mod sweeps;

pub use altitude::{
    AltitudeKind, geometric_to_geopotential, geometric_to_geopotential_m,
    geopotential_to_geometric, geopotential_to_geometric_m,
};
pub use error::{AtmosphereError, AtmosphereResult};
pub use evaluator::{evaluate, evaluate_batch, sea_level};
pub use layers::{Layer, standard_layers};
pub use state::{AtmosphericState, StandardRatios};
pub use sweeps::AltitudeSweep;
