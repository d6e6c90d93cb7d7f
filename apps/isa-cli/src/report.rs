//! Table and JSON rendering of evaluator output.

use isa_aero::{AerodynamicState, SpeedType};
use isa_atmosphere::AtmosphericState;
use serde::Serialize;
use std::fmt::Write;

#[derive(Debug, Clone, Serialize)]
pub struct AtmosphereReport {
    pub geometric_altitude_m: f64,
    pub geopotential_altitude_m: f64,
    #[serde(rename = "temperature_K")]
    pub temperature_k: f64,
    #[serde(rename = "pressure_Pa")]
    pub pressure_pa: f64,
    pub density_kg_per_m3: f64,
    pub speed_of_sound_m_per_s: f64,
    #[serde(rename = "dynamic_viscosity_Pa_s")]
    pub dynamic_viscosity_pa_s: f64,
    pub kinematic_viscosity_m2_per_s: f64,
}

impl From<&AtmosphericState> for AtmosphereReport {
    fn from(s: &AtmosphericState) -> Self {
        Self {
            geometric_altitude_m: s.geometric_altitude_m(),
            geopotential_altitude_m: s.geopotential_altitude_m(),
            temperature_k: s.temperature_k(),
            pressure_pa: s.pressure_pa(),
            density_kg_per_m3: s.density_kg_m3(),
            speed_of_sound_m_per_s: s.speed_of_sound_m_s(),
            dynamic_viscosity_pa_s: s.dynamic_viscosity_pa_s(),
            kinematic_viscosity_m2_per_s: s.kinematic_viscosity_m2_s(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AeroReport {
    #[serde(rename = "TAS_m_per_s")]
    pub tas_m_per_s: f64,
    #[serde(rename = "EAS_m_per_s")]
    pub eas_m_per_s: f64,
    pub mach: f64,
    pub reynolds: f64,
    #[serde(rename = "dynamic_pressure_Pa")]
    pub dynamic_pressure_pa: f64,
    #[serde(rename = "stagnation_pressure_Pa")]
    pub stagnation_pressure_pa: f64,
}

impl From<&AerodynamicState> for AeroReport {
    fn from(s: &AerodynamicState) -> Self {
        Self {
            tas_m_per_s: s.tas_m_s(),
            eas_m_per_s: s.eas_m_s(),
            mach: s.mach(),
            reynolds: s.reynolds(),
            dynamic_pressure_pa: s.dynamic_pressure_pa(),
            stagnation_pressure_pa: s.stagnation_pressure_pa(),
        }
    }
}

/// One line of `batch` output.
#[derive(Debug, Clone, Serialize)]
pub struct BatchRow {
    pub atmosphere: AtmosphereReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aero: Option<AeroReport>,
}

pub fn atmosphere_table(s: &AtmosphericState) -> String {
    format!(
        "T = {:.2} K\np = {:.2} Pa\nrho = {:.4} kg/m^3\na = {:.2} m/s\nmu = {:.6e} Pa·s\nnu = {:.6e} m^2/s\n",
        s.temperature_k(),
        s.pressure_pa(),
        s.density_kg_m3(),
        s.speed_of_sound_m_s(),
        s.dynamic_viscosity_pa_s(),
        s.kinematic_viscosity_m2_s()
    )
}

pub fn aero_table(speed: f64, speed_type: SpeedType, s: &AerodynamicState) -> String {
    format!(
        "Input = {} {} [{}]\nTAS = {:.2} m/s\nEAS = {:.2} m/s\nMach = {:.4}\nReynolds = {:.2e}\nq = {:.2} Pa\np0 = {:.2} Pa\n",
        speed,
        speed_type,
        speed_type.unit_label(),
        s.tas_m_s(),
        s.eas_m_s(),
        s.mach(),
        s.reynolds(),
        s.dynamic_pressure_pa(),
        s.stagnation_pressure_pa()
    )
}

pub fn profile_table(states: &[AtmosphericState]) -> String {
    let mut out = format!(
        "{:>9} {:>9} {:>8} {:>10} {:>10} {:>8} {:>9} {:>9} {:>9}\n",
        "z [m]", "H [m]", "T [K]", "p [kPa]", "rho", "a [m/s]", "theta", "delta", "sigma"
    );
    for s in states {
        let r = s.ratios();
        let _ = writeln!(
            out,
            "{:>9.1} {:>9.1} {:>8.2} {:>10.3} {:>10.6} {:>8.1} {:>9.6} {:>9.6} {:>9.6}",
            s.geometric_altitude_m(),
            s.geopotential_altitude_m(),
            s.temperature_k(),
            s.pressure_pa() / 1000.0,
            s.density_kg_m3(),
            s.speed_of_sound_m_s(),
            r.theta,
            r.delta,
            r.sigma
        );
    }
    out
}

pub fn batch_table(rows: &[BatchRow]) -> String {
    let mut out = format!(
        "{:>9} {:>8} {:>10} {:>10} {:>9} {:>9} {:>8} {:>11}\n",
        "z [m]", "T [K]", "p [Pa]", "rho", "TAS", "EAS", "Mach", "Reynolds"
    );
    for row in rows {
        let atm = &row.atmosphere;
        let _ = write!(
            out,
            "{:>9.1} {:>8.2} {:>10.1} {:>10.6}",
            atm.geometric_altitude_m, atm.temperature_k, atm.pressure_pa, atm.density_kg_per_m3
        );
        match &row.aero {
            Some(aero) => {
                let _ = writeln!(
                    out,
                    " {:>9.2} {:>9.2} {:>8.4} {:>11.3e}",
                    aero.tas_m_per_s, aero.eas_m_per_s, aero.mach, aero.reynolds
                );
            }
            None => out.push('\n'),
        }
    }
    out
}
