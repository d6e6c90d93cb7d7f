//! Airspeed conversions at cruise altitude and Reynolds number against chord.

use isa_aero::{SpeedType, evaluate};
use isa_atmosphere::{AltitudeKind, evaluate as atmosphere, sea_level};
use isa_core::units::m;

const MPS_TO_KT: f64 = 1.0 / 0.514_444;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cruise = atmosphere(m(10_000.0), AltitudeKind::Geometric)?;

    println!("{:>10} {:>10} {:>8} {:>12}", "TAS [m/s]", "EAS [m/s]", "Mach", "Re (L=1m)");
    for tas in [50.0, 100.0, 150.0, 200.0, 250.0] {
        let s = evaluate(tas, SpeedType::Tas, &cruise, m(1.0))?;
        println!("{tas:10.0} {:10.1} {:8.4} {:12.2e}", s.eas_m_s(), s.mach(), s.reynolds());
    }

    println!(
        "\n{:>6} {:>10} {:>10} {:>10} {:>10}",
        "Mach", "TAS [m/s]", "TAS [kt]", "q [kPa]", "p0 [kPa]"
    );
    for mach in [0.3, 0.5, 0.7, 0.85, 0.95, 1.2] {
        let s = evaluate(mach, SpeedType::Mach, &cruise, m(1.0))?;
        println!(
            "{mach:6.2} {:10.1} {:10.1} {:10.2} {:10.2}",
            s.tas_m_s(),
            s.tas_m_s() * MPS_TO_KT,
            s.dynamic_pressure_pa() / 1000.0,
            s.stagnation_pressure_pa() / 1000.0
        );
    }

    println!("\n{:>10} {:>8} {:>12}", "Chord [m]", "Alt [m]", "Reynolds");
    for (label, atm) in [(0.0, *sea_level()), (10_000.0, cruise)] {
        for chord in [0.5, 1.0, 2.0, 5.0] {
            let s = evaluate(100.0, SpeedType::Tas, &atm, m(chord))?;
            println!("{chord:10.1} {label:8.0} {:12.2e}", s.reynolds());
        }
    }
    Ok(())
}
