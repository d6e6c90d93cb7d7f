//! Airspeed conversion between TAS, EAS and Mach, plus Reynolds number and
//! dynamic/stagnation pressure.

use crate::error::{AeroError, AeroResult};
use crate::speed::SpeedType;
use crate::stagnation::stagnation_pressure;
use crate::state::AerodynamicState;
use isa_atmosphere::constants::GAMMA_AIR;
use isa_atmosphere::{AtmosphericState, sea_level};
use isa_core::numeric::{Real, ensure_non_negative, ensure_positive};
use isa_core::units::{Length, m};
use rayon::prelude::*;
use tracing::{debug, trace};

/// Reference length used when the caller has none in mind [m].
pub const DEFAULT_CHARACTERISTIC_LENGTH_M: f64 = 1.0;

const PARALLEL_THRESHOLD: usize = 1024;

/// Derive the aerodynamic state for `speed` in `atmosphere`.
///
/// `speed` is in m/s for TAS/EAS and dimensionless for Mach. Fails with
/// [`AeroError::Domain`] for a negative or non-finite speed, or a
/// non-positive or non-finite `characteristic_length`.
pub fn evaluate(
    speed: Real,
    speed_type: SpeedType,
    atmosphere: &AtmosphericState,
    characteristic_length: Length,
) -> AeroResult<AerodynamicState> {
    let length = check_length(characteristic_length)?;
    let speed = check_speed(speed)?;
    let state = compute(speed, speed_type, atmosphere, length);
    debug!(
        speed_type = speed_type.label(),
        speed,
        state = %state.summary(),
        "evaluated aerodynamic state"
    );
    Ok(state)
}

/// [`evaluate`] against the sea-level reference with a 1 m reference length.
pub fn evaluate_at_sea_level(speed: Real, speed_type: SpeedType) -> AeroResult<AerodynamicState> {
    evaluate(
        speed,
        speed_type,
        sea_level(),
        m(DEFAULT_CHARACTERISTIC_LENGTH_M),
    )
}

/// Evaluate paired speeds and atmospheric states.
///
/// Lengths must match, or one side must have exactly one element, in which
/// case it is reused for every element of the other side. All inputs are
/// validated before anything is computed; the output follows input order.
pub fn evaluate_batch(
    speeds: &[Real],
    speed_type: SpeedType,
    atmospheres: &[AtmosphericState],
    characteristic_length: Length,
) -> AeroResult<Vec<AerodynamicState>> {
    let len = broadcast_len(speeds.len(), atmospheres.len())?;
    let length = check_length(characteristic_length)?;
    for &speed in speeds {
        check_speed(speed)?;
    }

    trace!(len, speed_type = speed_type.label(), "evaluating aerodynamic batch");

    let pick = |i: usize| {
        let speed = if speeds.len() == 1 { speeds[0] } else { speeds[i] };
        let atmosphere = if atmospheres.len() == 1 {
            &atmospheres[0]
        } else {
            &atmospheres[i]
        };
        compute(speed, speed_type, atmosphere, length)
    };

    let states = if len >= PARALLEL_THRESHOLD {
        (0..len).into_par_iter().map(pick).collect()
    } else {
        (0..len).map(pick).collect()
    };
    Ok(states)
}

fn broadcast_len(speeds: usize, atmospheres: usize) -> AeroResult<usize> {
    if speeds == atmospheres {
        Ok(speeds)
    } else if speeds == 1 {
        Ok(atmospheres)
    } else if atmospheres == 1 {
        Ok(speeds)
    } else {
        Err(AeroError::ShapeMismatch {
            speeds,
            atmospheres,
        })
    }
}

fn check_speed(speed: Real) -> AeroResult<Real> {
    const WHAT: &str = "speed must be finite and non-negative";
    ensure_non_negative(speed, WHAT).map_err(|_| AeroError::Domain {
        what: WHAT,
        value: speed,
    })
}

fn check_length(length: Length) -> AeroResult<Real> {
    const WHAT: &str = "characteristic length must be finite and positive";
    ensure_positive(length.value, WHAT).map_err(|_| AeroError::Domain {
        what: WHAT,
        value: length.value,
    })
}

/// Inputs are already validated.
fn compute(
    speed: Real,
    speed_type: SpeedType,
    atmosphere: &AtmosphericState,
    length_m: Real,
) -> AerodynamicState {
    let rho = atmosphere.density_kg_m3();
    let a = atmosphere.speed_of_sound_m_s();
    let mu = atmosphere.dynamic_viscosity_pa_s();
    let p = atmosphere.pressure_pa();
    let sqrt_sigma = (rho / sea_level().density_kg_m3()).sqrt();

    let (tas, eas, mach) = match speed_type {
        SpeedType::Tas => (speed, speed * sqrt_sigma, speed / a),
        SpeedType::Eas => {
            let tas = speed / sqrt_sigma;
            (tas, speed, tas / a)
        }
        SpeedType::Mach => {
            let tas = speed * a;
            (tas, tas * sqrt_sigma, speed)
        }
    };

    let reynolds = rho * tas * length_m / mu;
    let dynamic_pressure = 0.5 * rho * tas * tas;
    let total_pressure = stagnation_pressure(p, mach, GAMMA_AIR);

    AerodynamicState::from_si(tas, eas, mach, reynolds, dynamic_pressure, total_pressure)
}
