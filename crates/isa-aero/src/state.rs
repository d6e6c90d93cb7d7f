//! Aerodynamic state returned by the evaluator.

use isa_core::units::{Pressure, Velocity, mps, pa};

/// Airspeeds and flow quantities derived from one speed and one
/// atmospheric state. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AerodynamicState {
    tas: Velocity,
    eas: Velocity,
    mach: f64,
    reynolds: f64,
    dynamic_pressure: Pressure,
    stagnation_pressure: Pressure,
}

impl AerodynamicState {
    pub(crate) fn from_si(
        tas_m_s: f64,
        eas_m_s: f64,
        mach: f64,
        reynolds: f64,
        dynamic_pressure_pa: f64,
        stagnation_pressure_pa: f64,
    ) -> Self {
        Self {
            tas: mps(tas_m_s),
            eas: mps(eas_m_s),
            mach,
            reynolds,
            dynamic_pressure: pa(dynamic_pressure_pa),
            stagnation_pressure: pa(stagnation_pressure_pa),
        }
    }

    /// True airspeed
    pub fn tas(&self) -> Velocity {
        self.tas
    }

    /// Equivalent airspeed
    pub fn eas(&self) -> Velocity {
        self.eas
    }

    pub fn mach(&self) -> f64 {
        self.mach
    }

    pub fn reynolds(&self) -> f64 {
        self.reynolds
    }

    pub fn dynamic_pressure(&self) -> Pressure {
        self.dynamic_pressure
    }

    pub fn stagnation_pressure(&self) -> Pressure {
        self.stagnation_pressure
    }

    pub fn tas_m_s(&self) -> f64 {
        self.tas.value
    }

    pub fn eas_m_s(&self) -> f64 {
        self.eas.value
    }

    pub fn dynamic_pressure_pa(&self) -> f64 {
        self.dynamic_pressure.value
    }

    pub fn stagnation_pressure_pa(&self) -> f64 {
        self.stagnation_pressure.value
    }

    pub fn is_supersonic(&self) -> bool {
        self.mach >= 1.0
    }

    pub fn summary(&self) -> String {
        format!(
            "Aero(TAS={:.2}m/s,EAS={:.2}m/s,M={:.4},Re={:.3e},q={:.1}Pa,p0={:.1}Pa)",
            self.tas_m_s(),
            self.eas_m_s(),
            self.mach,
            self.reynolds,
            self.dynamic_pressure_pa(),
            self.stagnation_pressure_pa()
        )
    }
}
