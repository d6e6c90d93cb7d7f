//! Linear altitude sweeps.
//!
//! Generates evenly spaced altitude sequences for profile tables and plots.

use crate::altitude::AltitudeKind;
use crate::error::{AtmosphereError, AtmosphereResult};
use crate::evaluator::evaluate_batch;
use crate::state::AtmosphericState;
use isa_core::units::{Length, m};
use std::fmt;

/// Evenly spaced altitudes from `start` to `end`, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AltitudeSweep {
    start_m: f64,
    end_m: f64,
    num_points: usize,
}

impl AltitudeSweep {
    pub fn new(start: Length, end: Length, num_points: usize) -> AtmosphereResult<Self> {
        let (start_m, end_m) = (start.value, end.value);
        if !start_m.is_finite() || !end_m.is_finite() {
            return Err(AtmosphereError::InvalidSweep {
                what: "bounds must be finite",
            });
        }
        if num_points < 2 {
            return Err(AtmosphereError::InvalidSweep {
                what: "sweep must have at least 2 points",
            });
        }
        if (start_m - end_m).abs() < 1e-12 {
            return Err(AtmosphereError::InvalidSweep {
                what: "start and end must differ",
            });
        }
        Ok(Self {
            start_m,
            end_m,
            num_points,
        })
    }

    pub fn num_points(&self) -> usize {
        self.num_points
    }

    /// All altitudes in the sweep. The last point is exactly `end`.
    pub fn generate_points(&self) -> Vec<Length> {
        let delta = (self.end_m - self.start_m) / (self.num_points - 1) as f64;
        let mut points: Vec<Length> = (0..self.num_points)
            .map(|i| m(self.start_m + i as f64 * delta))
            .collect();
        points[self.num_points - 1] = m(self.end_m);
        points
    }

    /// Evaluate every altitude in the sweep as one batch.
    pub fn evaluate(&self, kind: AltitudeKind) -> AtmosphereResult<Vec<AtmosphericState>> {
        evaluate_batch(&self.generate_points(), kind)
    }
}

impl fmt::Display for AltitudeSweep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Sweep from {} m to {} m ({} points)",
            self.start_m, self.end_m, self.num_points
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_points_hit_both_ends() {
        let sweep = AltitudeSweep::new(m(0.0), m(20_000.0), 5).unwrap();
        let points = sweep.generate_points();
        let values: Vec<f64> = points.iter().map(|p| p.value).collect();
        assert_eq!(values, vec![0.0, 5_000.0, 10_000.0, 15_000.0, 20_000.0]);
    }

    #[test]
    fn descending_sweep_is_allowed() {
        let sweep = AltitudeSweep::new(m(3_000.0), m(0.0), 4).unwrap();
        let points = sweep.generate_points();
        assert!((points[1].value - 2_000.0).abs() < 1e-9);
        assert_eq!(points[3].value, 0.0);
    }

    #[test]
    fn reject_invalid_point_count() {
        assert!(matches!(
            AltitudeSweep::new(m(0.0), m(1_000.0), 1),
            Err(AtmosphereError::InvalidSweep { .. })
        ));
    }

    #[test]
    fn reject_identical_bounds() {
        assert!(AltitudeSweep::new(m(500.0), m(500.0), 3).is_err());
        assert!(AltitudeSweep::new(m(f64::NAN), m(500.0), 3).is_err());
    }

    #[test]
    fn evaluate_profile() {
        let sweep = AltitudeSweep::new(m(0.0), m(30_000.0), 7).unwrap();
        let states = sweep.evaluate(AltitudeKind::Geopotential).unwrap();
        assert_eq!(states.len(), 7);
        assert!(states.windows(2).all(|w| w[1].pressure_pa() < w[0].pressure_pa()));
        assert_eq!(sweep.to_string(), "Sweep from 0 m to 30000 m (7 points)");
    }

    #[test]
    fn evaluate_out_of_range_sweep_fails() {
        let sweep = AltitudeSweep::new(m(0.0), m(40_000.0), 3).unwrap();
        assert!(sweep.evaluate(AltitudeKind::Geopotential).is_err());
    }
}
