//! Stagnation (total) pressure relations for a perfect gas.
//!
//! Below Mach 1 the flow is brought to rest isentropically. At and above
//! Mach 1 a pitot probe sits behind a normal shock, so the Rayleigh pitot
//! relation applies instead. Both give `p·((γ+1)/2)^(γ/(γ−1))` at Mach 1.

use tracing::warn;

/// Isentropic total pressure, valid for `mach < 1`.
pub fn isentropic_total_pressure(p: f64, mach: f64, gamma: f64) -> f64 {
    p * (1.0 + 0.5 * (gamma - 1.0) * mach * mach).powf(gamma / (gamma - 1.0))
}

/// Rayleigh pitot formula: total pressure behind a normal shock, for `mach >= 1`.
pub fn pitot_total_pressure(p: f64, mach: f64, gamma: f64) -> f64 {
    let m2 = mach * mach;
    let shock = (gamma + 1.0).powi(2) * m2 / (4.0 * gamma * m2 - 2.0 * (gamma - 1.0));
    let static_jump = (1.0 - gamma + 2.0 * gamma * m2) / (gamma + 1.0);
    p * shock.powf(gamma / (gamma - 1.0)) * static_jump
}

/// Total pressure measured by a pitot probe at free-stream `mach`.
pub fn stagnation_pressure(p: f64, mach: f64, gamma: f64) -> f64 {
    if mach < 1.0 {
        isentropic_total_pressure(p, mach, gamma)
    } else {
        warn!(mach, "supersonic stagnation pressure taken behind a normal shock");
        pitot_total_pressure(p, mach, gamma)
    }
}
