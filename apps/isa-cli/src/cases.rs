//! YAML case files for the `batch` subcommand.
//!
//! ```yaml
//! altitude_type: geometric
//! altitude_units: ft
//! altitudes: [0, 10000, 35000]
//! aero:
//!   speed_type: mach
//!   speeds: [0.78]
//!   characteristic_length: 3.5
//! ```

use crate::error::{CliError, CliResult};
use crate::report::BatchRow;
use crate::units::LengthUnits;
use isa_aero::{DEFAULT_CHARACTERISTIC_LENGTH_M, SpeedType};
use isa_atmosphere::AltitudeKind;
use isa_core::units::m;
use serde::Deserialize;
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CaseFile {
    #[serde(default)]
    pub altitude_type: AltitudeKind,
    #[serde(default)]
    pub altitude_units: LengthUnits,
    pub altitudes: Vec<f64>,
    #[serde(default)]
    pub aero: Option<AeroCase>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AeroCase {
    pub speed_type: SpeedType,
    pub speeds: Vec<f64>,
    #[serde(default = "default_characteristic_length")]
    pub characteristic_length: f64,
}

fn default_characteristic_length() -> f64 {
    DEFAULT_CHARACTERISTIC_LENGTH_M
}

pub fn load(path: &Path) -> CliResult<CaseFile> {
    let content = std::fs::read_to_string(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let cases = parse(&content)?;
    info!(
        path = %path.display(),
        altitudes = cases.altitudes.len(),
        aero = cases.aero.is_some(),
        "loaded case file"
    );
    Ok(cases)
}

pub fn parse(content: &str) -> CliResult<CaseFile> {
    Ok(serde_yaml::from_str(content)?)
}

impl CaseFile {
    /// Evaluate every case. With an `aero` section, speeds and altitudes are
    /// paired (or broadcast when one side has a single entry).
    pub fn run(&self) -> CliResult<Vec<BatchRow>> {
        let altitudes: Vec<_> = self
            .altitudes
            .iter()
            .map(|&alt| self.altitude_units.length(alt))
            .collect();
        let atmospheres = isa_atmosphere::evaluate_batch(&altitudes, self.altitude_type)?;

        let Some(aero) = &self.aero else {
            return Ok(atmospheres
                .iter()
                .map(|atm| BatchRow {
                    atmosphere: atm.into(),
                    aero: None,
                })
                .collect());
        };

        let states = isa_aero::evaluate_batch(
            &aero.speeds,
            aero.speed_type,
            &atmospheres,
            m(aero.characteristic_length),
        )?;
        let rows = states
            .iter()
            .enumerate()
            .map(|(i, state)| {
                let atm = if atmospheres.len() == 1 {
                    &atmospheres[0]
                } else {
                    &atmospheres[i]
                };
                BatchRow {
                    atmosphere: atm.into(),
                    aero: Some(state.into()),
                }
            })
            .collect();
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_file() {
        let cases = parse("altitudes: [0, 1000]").unwrap();
        assert_eq!(cases.altitude_type, AltitudeKind::Geometric);
        assert_eq!(cases.altitude_units, LengthUnits::M);
        assert!(cases.aero.is_none());
        assert_eq!(cases.run().unwrap().len(), 2);
    }

    #[test]
    fn parse_full_file() {
        let yaml = "
altitude_type: geopotential
altitude_units: ft
altitudes: [0, 10000, 35000]
aero:
  speed_type: Mach
  speeds: [0.78]
  characteristic_length: 3.5
";
        let cases = parse(yaml).unwrap();
        assert_eq!(cases.altitude_type, AltitudeKind::Geopotential);
        let aero = cases.aero.as_ref().unwrap();
        assert_eq!(aero.speed_type, SpeedType::Mach);

        let rows = cases.run().unwrap();
        assert_eq!(rows.len(), 3);
        let last = &rows[2];
        assert!((last.atmosphere.geopotential_altitude_m - 10_668.0).abs() < 1e-6);
        assert!((last.aero.as_ref().unwrap().mach - 0.78).abs() < 1e-12);
    }

    #[test]
    fn single_altitude_broadcasts_over_speeds() {
        let yaml = "
altitudes: [10000]
aero:
  speed_type: TAS
  speeds: [50, 100, 150]
";
        let rows = parse(yaml).unwrap().run().unwrap();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.atmosphere.geometric_altitude_m == 10_000.0));
    }

    #[test]
    fn unknown_speed_type_is_rejected() {
        let yaml = "
altitudes: [0]
aero:
  speed_type: CAS
  speeds: [100]
";
        let err = parse(yaml).unwrap_err();
        assert!(err.to_string().contains("CAS"), "{err}");
    }

    #[test]
    fn out_of_range_altitude_fails_run() {
        let cases = parse("altitudes: [0, 40000]").unwrap();
        assert!(matches!(cases.run(), Err(CliError::Atmosphere(_))));
    }
}
