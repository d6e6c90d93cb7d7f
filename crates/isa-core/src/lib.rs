//! isa-core: shared foundation for the ISA toolkit.
//!
//! Contains:
//! - units (uom SI types + constructors, unit conversion constants)
//! - numeric (Real + tolerances + input checks)
//! - error (shared error type)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{IsaError, IsaResult};
pub use numeric::*;
pub use units::*;
