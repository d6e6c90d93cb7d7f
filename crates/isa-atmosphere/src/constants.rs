//! Physical constants of the 1976 standard atmosphere (SI).

pub use isa_core::units::constants::G0_MPS2;

/// Specific gas constant for dry air [J/(kg·K)].
pub const R_AIR: f64 = 287.052_87;

/// Ratio of specific heats for air.
pub const GAMMA_AIR: f64 = 1.4;

/// Sea-level temperature [K].
pub const T0_K: f64 = 288.15;

/// Sea-level pressure [Pa].
pub const P0_PA: f64 = 101_325.0;

/// Sea-level density [kg/m³], from the ideal gas law.
pub const RHO0_KG_M3: f64 = P0_PA / (R_AIR * T0_K);

/// Earth radius used for the geopotential conversion [m].
pub const R_EARTH_M: f64 = 6_356_766.0;

/// Sutherland reference viscosity at `SUTHERLAND_T_REF_K` [Pa·s].
pub const SUTHERLAND_MU_REF_PA_S: f64 = 1.789_4e-5;

/// Sutherland reference temperature [K].
pub const SUTHERLAND_T_REF_K: f64 = T0_K;

/// Sutherland constant for air [K].
pub const SUTHERLAND_S_K: f64 = 110.4;

/// Top of the supported layered range, geopotential [m].
pub const MAX_GEOPOTENTIAL_ALTITUDE_M: f64 = 32_000.0;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sea_level_density_is_standard() {
        assert!((RHO0_KG_M3 - 1.225).abs() < 1e-5, "rho0 = {RHO0_KG_M3}");
    }
}
