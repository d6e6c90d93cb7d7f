//! Layer table for the standard atmosphere up to 32 km geopotential.
//!
//! Only the sea-level base is specified directly; each higher base
//! temperature and pressure is obtained by evaluating the layer below at its
//! top, so the profile is continuous across boundaries.

use crate::constants::{G0_MPS2, P0_PA, R_AIR, T0_K};
use std::sync::LazyLock;

/// One layer of the piecewise model: linear temperature in geopotential
/// altitude, hydrostatic pressure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layer {
    pub name: &'static str,
    /// Geopotential altitude of the layer base [m]
    pub base_altitude_m: f64,
    /// Temperature at the base [K]
    pub base_temperature_k: f64,
    /// dT/dH [K/m]
    pub lapse_rate_k_per_m: f64,
    /// Pressure at the base [Pa]
    pub base_pressure_pa: f64,
}

/// (name, base altitude, lapse rate)
const LAYER_DEFS: [(&str, f64, f64); 3] = [
    ("troposphere", 0.0, -0.0065),
    ("tropopause", 11_000.0, 0.0),
    ("stratosphere", 20_000.0, 0.001),
];

static STANDARD_LAYERS: LazyLock<[Layer; 3]> = LazyLock::new(|| {
    let mut layers = [Layer {
        name: LAYER_DEFS[0].0,
        base_altitude_m: LAYER_DEFS[0].1,
        base_temperature_k: T0_K,
        lapse_rate_k_per_m: LAYER_DEFS[0].2,
        base_pressure_pa: P0_PA,
    }; 3];

    for i in 1..LAYER_DEFS.len() {
        let (name, base, lapse) = LAYER_DEFS[i];
        let below = layers[i - 1];
        layers[i] = Layer {
            name,
            base_altitude_m: base,
            base_temperature_k: below.temperature_at(base),
            lapse_rate_k_per_m: lapse,
            base_pressure_pa: below.pressure_at(base),
        };
    }
    layers
});

/// The standard layers, ordered by base altitude.
pub fn standard_layers() -> &'static [Layer; 3] {
    &STANDARD_LAYERS
}

impl Layer {
    /// Layer whose base is the greatest base `<= h`.
    ///
    /// Altitudes below the first base fall back to the first layer; callers
    /// are expected to have range-checked `h` already.
    pub fn containing(h: f64) -> &'static Layer {
        let layers = standard_layers();
        layers
            .iter()
            .rev()
            .find(|layer| layer.base_altitude_m <= h)
            .unwrap_or(&layers[0])
    }

    pub fn is_isothermal(&self) -> bool {
        self.lapse_rate_k_per_m == 0.0
    }

    /// Temperature [K] at geopotential altitude `h` [m].
    pub fn temperature_at(&self, h: f64) -> f64 {
        self.base_temperature_k + self.lapse_rate_k_per_m * (h - self.base_altitude_m)
    }

    /// Pressure [Pa] at geopotential altitude `h` [m].
    pub fn pressure_at(&self, h: f64) -> f64 {
        if self.is_isothermal() {
            let exponent =
                -G0_MPS2 * (h - self.base_altitude_m) / (R_AIR * self.base_temperature_k);
            self.base_pressure_pa * exponent.exp()
        } else {
            let t = self.temperature_at(h);
            let exponent = -G0_MPS2 / (self.lapse_rate_k_per_m * R_AIR);
            self.base_pressure_pa * (t / self.base_temperature_k).powf(exponent)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derived_bases_match_standard() {
        let layers = standard_layers();
        assert_eq!(layers[0].base_temperature_k, 288.15);
        assert_eq!(layers[0].base_pressure_pa, 101_325.0);

        assert!((layers[1].base_temperature_k - 216.65).abs() < 1e-9);
        assert!((layers[1].base_pressure_pa - 22_632.0).abs() < 1.0);

        assert!((layers[2].base_temperature_k - 216.65).abs() < 1e-9);
        assert!((layers[2].base_pressure_pa - 5_474.9).abs() < 1.0);
    }

    #[test]
    fn containing_picks_greatest_base() {
        assert_eq!(Layer::containing(0.0).name, "troposphere");
        assert_eq!(Layer::containing(10_999.9).name, "troposphere");
        assert_eq!(Layer::containing(11_000.0).name, "tropopause");
        assert_eq!(Layer::containing(19_999.0).name, "tropopause");
        assert_eq!(Layer::containing(20_000.0).name, "stratosphere");
        assert_eq!(Layer::containing(32_000.0).name, "stratosphere");
    }

    #[test]
    fn profile_is_continuous_at_boundaries() {
        let layers = standard_layers();
        for pair in layers.windows(2) {
            let (lower, upper) = (pair[0], pair[1]);
            let h = upper.base_altitude_m;
            assert!((lower.temperature_at(h) - upper.temperature_at(h)).abs() < 1e-9);
            let rel = (lower.pressure_at(h) - upper.pressure_at(h)).abs() / upper.pressure_at(h);
            assert!(rel < 1e-12, "{} -> {}: rel = {rel}", lower.name, upper.name);
        }
    }

    #[test]
    fn only_tropopause_is_isothermal() {
        let flags: Vec<bool> = standard_layers().iter().map(Layer::is_isothermal).collect();
        assert_eq!(flags, vec![false, true, false]);
    }
}
