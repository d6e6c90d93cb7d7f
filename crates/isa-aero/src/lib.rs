//! isa-aero: airspeed conversion and flow quantities on top of the standard
//! atmosphere.
//!
//! Given a speed expressed as TAS, EAS or Mach, a reference length and an
//! [`AtmosphericState`](isa_atmosphere::AtmosphericState), derives true and
//! equivalent airspeed, Mach number, Reynolds number, dynamic pressure and
//! stagnation pressure. Every relation is closed-form.
//!
//! # Example
//!
//! ```
//! use isa_aero::{SpeedType, evaluate};
//! use isa_atmosphere::{AltitudeKind, evaluate as atmosphere};
//! use isa_core::units::m;
//!
//! let atm = atmosphere(m(10_000.0), AltitudeKind::Geometric).unwrap();
//! let aero = evaluate(250.0, SpeedType::Tas, &atm, m(1.0)).unwrap();
//! assert!((aero.mach() - 0.835).abs() < 0.005);
//! ```

pub mod error;
pub mod evaluator;
pub mod speed;
pub mod stagnation;
pub mod state;

pub use error::{AeroError, AeroResult};
pub use evaluator::{
    DEFAULT_CHARACTERISTIC_LENGTH_M, evaluate, evaluate_at_sea_level, evaluate_batch,
};
pub use speed::SpeedType;
pub use stagnation::{isentropic_total_pressure, pitot_total_pressure, stagnation_pressure};
pub use state::AerodynamicState;
