use crate::{PfError, PfResult};

/// Floating point type used throughout system
pub type Real = f64;

/// One tolerance for everything
#[derive(Clone, Copy, Debug)]
pub struct Tolerances {
    pub abs: Real,
    pub rel: Real,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            abs: 1e-9,
            rel: 1e-9,
        }
    }
}

impl Tolerances {
    /// Purely absolute tolerance (relative part disabled).
    pub const fn absolute(abs: Real) -> Self {
        Self { abs, rel: 0.0 }
    }
}

pub fn nearly_equal(a: Real, b: Real, tol: Tolerances) -> bool {
    let diff = (a - b).abs();
    if diff <= tol.abs {
        return true;
    }
    diff <= tol.rel * a.abs().max(b.abs())
}

pub fn ensure_finite(v: Real, what: &'static str) -> PfResult<Real> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(PfError::NonFinite { what, value: v })
    }
}

/// Finite and `>= 0`. Edge weights must satisfy this for the searches to be correct.
pub fn ensure_non_negative(v: Real, what: &'static str) -> PfResult<Real> {
    let v = ensure_finite(v, what)?;
    if v < 0.0 {
        return Err(PfError::InvalidArg {
            what: format!("{what} must be non-negative (got {v})"),
        });
    }
    Ok(v)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nearly_equal_basic() {
        let tol = Tolerances {
            abs: 1e-12,
            rel: 1e-9,
        };
        assert!(nearly_equal(1.0, 1.0 + 1e-12, tol));
        assert!(nearly_equal(0.0, 1e-13, tol));
        assert!(!nearly_equal(1.0, 1.0 + 1e-6, tol));
    }

    #[test]
    fn absolute_tolerance_ignores_magnitude() {
        let tol = Tolerances::absolute(0.01);
        assert!(nearly_equal(1000.0, 1000.005, tol));
        assert!(!nearly_equal(1000.0, 1000.02, tol));
    }

    #[test]
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn ensure_non_negative_rejects_negative() {
        assert_eq!(ensure_non_negative(0.0, "weight").unwrap(), 0.0);
        let err = ensure_non_negative(-2.5, "weight").unwrap_err();
        assert!(matches!(err, PfError::InvalidArg { .. }));
        assert!(err.to_string().contains("weight"));
        assert!(matches!(
            ensure_non_negative(Real::INFINITY, "weight"),
            Err(PfError::NonFinite { .. })
        ));
    }
}
