//! Checks against the 1976 U.S. Standard Atmosphere tables.
//!
//! Geopotential rows are compared tightly; the geometric rows reuse the
//! rounded table with looser tolerances since the table is tabulated in
//! geopotential altitude.

use isa_atmosphere::{
    AltitudeKind, AtmosphereError, evaluate, evaluate_batch, geometric_to_geopotential,
    geopotential_to_geometric, sea_level,
};
use isa_core::units::m;

/// (H [m], T [K], p [Pa], rho [kg/m³])
const GEOPOTENTIAL_TABLE: [(f64, f64, f64, f64); 6] = [
    (0.0, 288.15, 101_325.0, 1.2250),
    (1_000.0, 281.65, 89_874.6, 1.1117),
    (5_000.0, 255.65, 54_019.9, 0.73612),
    (11_000.0, 216.65, 22_632.1, 0.36392),
    (20_000.0, 216.65, 5_474.89, 0.088035),
    (32_000.0, 228.65, 868.019, 0.013225),
];

#[test]
fn geopotential_reference_rows() {
    for (h, t_ref, p_ref, rho_ref) in GEOPOTENTIAL_TABLE {
        let s = evaluate(m(h), AltitudeKind::Geopotential).unwrap();
        assert!(
            (s.temperature_k() - t_ref).abs() < 1e-6,
            "H={h}: T = {}",
            s.temperature_k()
        );
        assert!(
            (s.pressure_pa() - p_ref).abs() / p_ref < 1e-4,
            "H={h}: p = {}",
            s.pressure_pa()
        );
        assert!(
            (s.density_kg_m3() - rho_ref).abs() / rho_ref < 1e-3,
            "H={h}: rho = {}",
            s.density_kg_m3()
        );
    }
}

#[test]
fn geometric_reference_rows() {
    let table = [
        (0.0, 288.15, 101_325.0, 1.2250),
        (1_000.0, 281.65, 89_874.0, 1.1120),
        (5_000.0, 255.65, 54_019.0, 0.7364),
        (11_000.0, 216.65, 22_632.0, 0.3639),
        (20_000.0, 216.65, 5_474.0, 0.08803),
        (32_000.0, 228.65, 868.0, 0.01322),
    ];
    for (z, t_ref, p_ref, rho_ref) in table {
        let s = evaluate(m(z), AltitudeKind::Geometric).unwrap();
        assert!((s.temperature_k() - t_ref).abs() < 0.2, "z={z}: T");
        assert!((s.pressure_pa() - p_ref).abs() < 150.0, "z={z}: p");
        assert!((s.density_kg_m3() - rho_ref).abs() < 0.01, "z={z}: rho");
    }
}

#[test]
fn sea_level_reference_state() {
    let s = sea_level();
    assert_eq!(s.temperature_k(), 288.15);
    assert_eq!(s.pressure_pa(), 101_325.0);
    assert!((s.density_kg_m3() - 1.225).abs() < 1e-4);
    assert!((s.speed_of_sound_m_s() - 340.3).abs() / 340.3 < 1e-3);
}

#[test]
fn cruise_scenario() {
    let s = evaluate(m(10_000.0), AltitudeKind::Geometric).unwrap();
    assert!((s.temperature_k() - 223.25).abs() < 0.05);
    assert!((s.pressure_pa() - 26_500.0).abs() < 50.0);
    assert!((s.density_kg_m3() - 0.4135).abs() < 5e-4);
    assert!((s.geopotential_altitude_m() - 9_984.3).abs() < 0.1);
}

#[test]
fn boundary_at_top_of_range() {
    assert!(evaluate(m(32_000.0), AltitudeKind::Geopotential).is_ok());
    assert!(matches!(
        evaluate(m(32_000.001), AltitudeKind::Geopotential),
        Err(AtmosphereError::Domain { .. })
    ));
}

#[test]
fn conversion_round_trip_grid() {
    for i in 0..=320 {
        let z = m(i as f64 * 100.0);
        let back = geopotential_to_geometric(geometric_to_geopotential(z));
        assert!((back.value - z.value).abs() <= 1e-9 * z.value.max(1.0));
    }
}

#[test]
fn batch_in_arbitrary_order() {
    let forward: Vec<_> = [0.0, 1_000.0, 5_000.0, 12_000.0, 26_000.0]
        .into_iter()
        .map(m)
        .collect();
    let mut reversed = forward.clone();
    reversed.reverse();

    let a = evaluate_batch(&forward, AltitudeKind::Geometric).unwrap();
    let b = evaluate_batch(&reversed, AltitudeKind::Geometric).unwrap();
    for (x, y) in a.iter().zip(b.iter().rev()) {
        assert_eq!(x, y);
    }
    assert!(a.windows(2).all(|w| w[1].pressure_pa() < w[0].pressure_pa()));
}
