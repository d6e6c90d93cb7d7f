//! Atmospheric state returned by the evaluator.

use crate::evaluator::sea_level;
use isa_core::units::{
    Density, DynVisc, KinVisc, Length, Pressure, Temperature, Velocity, k, kg_m3, m, m2ps, mps,
    pa, pa_s,
};

/// Full atmospheric state at one altitude (SI units).
///
/// Constructed only by the evaluator; there are no setters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AtmosphericState {
    geometric_altitude: Length,
    geopotential_altitude: Length,
    temperature: Temperature,
    pressure: Pressure,
    density: Density,
    speed_of_sound: Velocity,
    dynamic_viscosity: DynVisc,
    kinematic_viscosity: KinVisc,
}

/// Temperature, pressure and density relative to the sea-level reference.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardRatios {
    /// T / T0
    pub theta: f64,
    /// p / p0
    pub delta: f64,
    /// ρ / ρ0
    pub sigma: f64,
}

impl AtmosphericState {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_si(
        geometric_altitude_m: f64,
        geopotential_altitude_m: f64,
        temperature_k: f64,
        pressure_pa: f64,
        density_kg_m3: f64,
        speed_of_sound_m_s: f64,
        dynamic_viscosity_pa_s: f64,
        kinematic_viscosity_m2_s: f64,
    ) -> Self {
        Self {
            geometric_altitude: m(geometric_altitude_m),
            geopotential_altitude: m(geopotential_altitude_m),
            temperature: k(temperature_k),
            pressure: pa(pressure_pa),
            density: kg_m3(density_kg_m3),
            speed_of_sound: mps(speed_of_sound_m_s),
            dynamic_viscosity: pa_s(dynamic_viscosity_pa_s),
            kinematic_viscosity: m2ps(kinematic_viscosity_m2_s),
        }
    }

    pub fn geometric_altitude(&self) -> Length {
        self.geometric_altitude
    }

    pub fn geopotential_altitude(&self) -> Length {
        self.geopotential_altitude
    }

    pub fn temperature(&self) -> Temperature {
        self.temperature
    }

    pub fn pressure(&self) -> Pressure {
        self.pressure
    }

    pub fn density(&self) -> Density {
        self.density
    }

    pub fn speed_of_sound(&self) -> Velocity {
        self.speed_of_sound
    }

    pub fn dynamic_viscosity(&self) -> DynVisc {
        self.dynamic_viscosity
    }

    pub fn kinematic_viscosity(&self) -> KinVisc {
        self.kinematic_viscosity
    }

    // Raw SI accessors, for formatting and closed-form arithmetic.

    pub fn geometric_altitude_m(&self) -> f64 {
        self.geometric_altitude.value
    }

    pub fn geopotential_altitude_m(&self) -> f64 {
        self.geopotential_altitude.value
    }

    pub fn temperature_k(&self) -> f64 {
        self.temperature.value
    }

    pub fn pressure_pa(&self) -> f64 {
        self.pressure.value
    }

    pub fn density_kg_m3(&self) -> f64 {
        self.density.value
    }

    pub fn speed_of_sound_m_s(&self) -> f64 {
        self.speed_of_sound.value
    }

    pub fn dynamic_viscosity_pa_s(&self) -> f64 {
        self.dynamic_viscosity.value
    }

    pub fn kinematic_viscosity_m2_s(&self) -> f64 {
        self.kinematic_viscosity.value
    }

    /// θ, δ and σ against the sea-level reference state.
    pub fn ratios(&self) -> StandardRatios {
        let reference = sea_level();
        StandardRatios {
            theta: self.temperature_k() / reference.temperature_k(),
            delta: self.pressure_pa() / reference.pressure_pa(),
            sigma: self.density_kg_m3() / reference.density_kg_m3(),
        }
    }

    /// One-line summary for logs.
    pub fn summary(&self) -> String {
        format!(
            "Atm(z={:.1}m,H={:.1}m,T={:.2}K,p={:.1}Pa,ρ={:.4}kg/m³,a={:.1}m/s)",
            self.geometric_altitude_m(),
            self.geopotential_altitude_m(),
            self.temperature_k(),
            self.pressure_pa(),
            self.density_kg_m3(),
            self.speed_of_sound_m_s()
        )
    }
}
