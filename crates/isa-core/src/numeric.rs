use crate::IsaError;

/// Floating point type used throughout the toolkit
pub type Real = f64;

/// Absolute/relative pair for float comparisons.
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-12,
            rel: 1e-9,
        }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, IsaError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(IsaError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`.
pub fn ensure_non_negative(v: Real, what: &'static str) -> Result<Real, IsaError> {
    ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(IsaError::Domain { what, value: v });
    }
    Ok(v)
}

/// Finite and strictly `> 0`.
pub fn ensure_positive(v: Real, what: &'static str) -> Result<Real, IsaError> {
    ensure_finite(v, what)?;
    if v <= 0.0 {
        return Err(IsaError::Domain { what, value: v });
    }
    Ok(v)
}
