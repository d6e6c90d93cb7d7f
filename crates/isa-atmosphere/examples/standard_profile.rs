//! Print the standard atmosphere from sea level to 20 km, then the standard
//! ratios at a few reference altitudes.

use isa_atmosphere::{AltitudeKind, AltitudeSweep, evaluate, sea_level};
use isa_core::units::m;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let s0 = sea_level();
    println!("Sea level: {}", s0.summary());

    let cruise = evaluate(m(10_000.0), AltitudeKind::Geometric)?;
    println!("Cruise:    {}", cruise.summary());
    println!(
        "  mu = {:.3e} Pa·s, nu = {:.3e} m²/s",
        cruise.dynamic_viscosity_pa_s(),
        cruise.kinematic_viscosity_m2_s()
    );

    println!(
        "\n{:>8} {:>8} {:>10} {:>12} {:>9}",
        "Alt [m]", "T [K]", "p [kPa]", "rho [kg/m³]", "a [m/s]"
    );
    for s in AltitudeSweep::new(m(0.0), m(20_000.0), 5)?.evaluate(AltitudeKind::Geometric)? {
        println!(
            "{:8.0} {:8.2} {:10.2} {:12.6} {:9.1}",
            s.geometric_altitude_m(),
            s.temperature_k(),
            s.pressure_pa() / 1000.0,
            s.density_kg_m3(),
            s.speed_of_sound_m_s()
        );
    }

    println!("\n{:>8} {:>10} {:>10} {:>10}", "Alt [m]", "delta", "sigma", "theta");
    for alt in [5_000.0, 11_000.0, 15_000.0, 20_000.0] {
        let r = evaluate(m(alt), AltitudeKind::Geometric)?.ratios();
        println!("{alt:8.0} {:10.6} {:10.6} {:10.6}", r.delta, r.sigma, r.theta);
    }
    Ok(())
}
