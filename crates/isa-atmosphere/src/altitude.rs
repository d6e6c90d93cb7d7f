//! Geometric/geopotential altitude conversion.
//!
//! Geopotential altitude treats gravity as constant with height. The two are
//! related through the Earth radius `R`:
//!
//! - `H = R·z / (R + z)`
//! - `z = R·H / (R − H)`

use crate::constants::R_EARTH_M;
use isa_core::units::{Length, m};
use std::fmt;
use std::str::FromStr;

/// How an altitude input should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum AltitudeKind {
    /// Height above mean sea level.
    #[default]
    Geometric,
    /// Height scaled for constant gravity.
    Geopotential,
}

impl AltitudeKind {
    pub fn label(self) -> &'static str {
        match self {
            Self::Geometric => "geometric",
            Self::Geopotential => "geopotential",
        }
    }
}

/// `true` selects geometric input.
impl From<bool> for AltitudeKind {
    fn from(geometric: bool) -> Self {
        if geometric {
            Self::Geometric
        } else {
            Self::Geopotential
        }
    }
}

impl fmt::Display for AltitudeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AltitudeKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "geometric" => Ok(Self::Geometric),
            "geopotential" => Ok(Self::Geopotential),
            other => Err(format!(
                "unknown altitude kind '{other}' (expected geometric or geopotential)"
            )),
        }
    }
}

#[inline]
pub fn geometric_to_geopotential_m(z: f64) -> f64 {
    R_EARTH_M * z / (R_EARTH_M + z)
}

#[inline]
pub fn geopotential_to_geometric_m(h: f64) -> f64 {
    R_EARTH_M * h / (R_EARTH_M - h)
}

pub fn geometric_to_geopotential(z: Length) -> Length {
    m(geometric_to_geopotential_m(z.value))
}

pub fn geopotential_to_geometric(h: Length) -> Length {
    m(geopotential_to_geometric_m(h.value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_maps_to_zero() {
        assert_eq!(geometric_to_geopotential_m(0.0), 0.0);
        assert_eq!(geopotential_to_geometric_m(0.0), 0.0);
    }

    #[test]
    fn geopotential_is_lower_than_geometric() {
        let h = geometric_to_geopotential_m(10_000.0);
        assert!(h < 10_000.0);
        assert!((h - 9_984.29).abs() < 0.01, "H = {h}");
    }

    #[test]
    fn length_wrappers_agree_with_raw() {
        let z = m(20_000.0);
        let h = geometric_to_geopotential(z);
        assert_eq!(h.value, geometric_to_geopotential_m(20_000.0));
        assert!((geopotential_to_geometric(h).value - 20_000.0).abs() < 1e-8);
    }

    #[test]
    fn kind_from_bool_and_str() {
        assert_eq!(AltitudeKind::from(true), AltitudeKind::Geometric);
        assert_eq!(AltitudeKind::from(false), AltitudeKind::Geopotential);
        assert_eq!(
            "Geopotential".parse::<AltitudeKind>().unwrap(),
            AltitudeKind::Geopotential
        );
        assert!("pressure".parse::<AltitudeKind>().is_err());
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn geometric_round_trip(z in 0.0_f64..=32_000.0) {
            let back = geopotential_to_geometric_m(geometric_to_geopotential_m(z));
            prop_assert!((back - z).abs() <= 1e-9 * z.max(1.0), "z = {z}, back = {back}");
        }

        #[test]
        fn geopotential_round_trip(h in 0.0_f64..=32_000.0) {
            let back = geometric_to_geopotential_m(geopotential_to_geometric_m(h));
            prop_assert!((back - h).abs() <= 1e-9 * h.max(1.0), "h = {h}, back = {back}");
        }
    }
}
