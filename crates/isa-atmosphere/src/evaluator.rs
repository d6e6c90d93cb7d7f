//! Closed-form evaluation of the layered standard atmosphere.

use crate::altitude::{AltitudeKind, geometric_to_geopotential_m, geopotential_to_geometric_m};
use crate::constants::{
    GAMMA_AIR, MAX_GEOPOTENTIAL_ALTITUDE_M, R_AIR, SUTHERLAND_MU_REF_PA_S, SUTHERLAND_S_K,
    SUTHERLAND_T_REF_K,
};
use crate::error::{AtmosphereError, AtmosphereResult};
use crate::layers::Layer;
use crate::state::AtmosphericState;
use isa_core::units::Length;
use rayon::prelude::*;
use std::sync::LazyLock;
use tracing::{debug, trace};

/// Batches at least this long are evaluated on the rayon pool.
const PARALLEL_THRESHOLD: usize = 1024;

static SEA_LEVEL: LazyLock<AtmosphericState> = LazyLock::new(|| state_at(0.0, 0.0));

/// Standard state at geometric altitude 0, computed once on first use.
pub fn sea_level() -> &'static AtmosphericState {
    &SEA_LEVEL
}

/// Evaluate the standard atmosphere at a single altitude.
///
/// Fails with [`AtmosphereError::Domain`] when the altitude is not finite or
/// its geopotential equivalent lies outside `0..=32000` m.
pub fn evaluate(altitude: Length, kind: AltitudeKind) -> AtmosphereResult<AtmosphericState> {
    let (z, h) = resolve(altitude.value, kind)?;
    let state = state_at(z, h);
    debug!(
        kind = kind.label(),
        layer = Layer::containing(h).name,
        state = %state.summary(),
        "evaluated atmosphere"
    );
    Ok(state)
}

/// Evaluate an ordered batch of altitudes.
///
/// Every element is validated before any state is computed, so a single bad
/// altitude fails the whole call with that element's error. Output order and
/// length match the input; each element is classified into its own layer.
pub fn evaluate_batch(
    altitudes: &[Length],
    kind: AltitudeKind,
) -> AtmosphereResult<Vec<AtmosphericState>> {
    let resolved = altitudes
        .iter()
        .map(|alt| resolve(alt.value, kind))
        .collect::<AtmosphereResult<Vec<_>>>()?;

    trace!(len = resolved.len(), kind = kind.label(), "evaluating atmosphere batch");

    let states = if resolved.len() >= PARALLEL_THRESHOLD {
        resolved.par_iter().map(|&(z, h)| state_at(z, h)).collect()
    } else {
        resolved.iter().map(|&(z, h)| state_at(z, h)).collect()
    };
    Ok(states)
}

/// Sutherland's law for air, dynamic viscosity [Pa·s] at `t` [K].
pub fn sutherland_viscosity(t: f64) -> f64 {
    SUTHERLAND_MU_REF_PA_S
        * (t / SUTHERLAND_T_REF_K).powf(1.5)
        * (SUTHERLAND_T_REF_K + SUTHERLAND_S_K)
        / (t + SUTHERLAND_S_K)
}

/// Validate an altitude and return `(geometric, geopotential)` in metres.
fn resolve(value: f64, kind: AltitudeKind) -> AtmosphereResult<(f64, f64)> {
    if !value.is_finite() {
        return Err(AtmosphereError::Domain {
            what: "altitude must be finite",
            value,
        });
    }

    let (z, h) = match kind {
        AltitudeKind::Geometric => {
            if value > geopotential_to_geometric_m(MAX_GEOPOTENTIAL_ALTITUDE_M) {
                return Err(AtmosphereError::Domain {
                    what: "geometric altitude above the 32000 m geopotential ceiling",
                    value,
                });
            }
            // The ceiling's geometric image converts back a few ULP above it.
            (
                value,
                geometric_to_geopotential_m(value).min(MAX_GEOPOTENTIAL_ALTITUDE_M),
            )
        }
        AltitudeKind::Geopotential => (geopotential_to_geometric_m(value), value),
    };

    if h.is_nan() || h < 0.0 {
        return Err(AtmosphereError::Domain {
            what: "geopotential altitude below sea level",
            value: h,
        });
    }
    if h > MAX_GEOPOTENTIAL_ALTITUDE_M {
        return Err(AtmosphereError::Domain {
            what: "geopotential altitude above 32000 m",
            value: h,
        });
    }
    Ok((z, h))
}

/// Infallible core: `h` must already be inside the layered range.
fn state_at(z: f64, h: f64) -> AtmosphericState {
    let layer = Layer::containing(h);
    let t = layer.temperature_at(h);
    let p = layer.pressure_at(h);
    let rho = p / (R_AIR * t);
    let a = (GAMMA_AIR * R_AIR * t).sqrt();
    let mu = sutherland_viscosity(t);
    let nu = mu / rho;

    AtmosphericState::from_si(z, h, t, p, rho, a, mu, nu)
}
