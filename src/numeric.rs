//! Floating point comparison helpers, thin wrappers around the approx crate.

use approx::AbsDiffEq;

/// Targeted accuracy instantiated over `f64`
pub const ACC: f64 = 10e-11;

/// Largest acceptable drift of `s + i + r` away from 1 over a trajectory.
pub const CONSERVATION_TOLERANCE: f64 = 1e-9;

/// Compares if two floats are close via `approx::abs_diff_eq` using a maximum absolute difference
/// (epsilon) of `acc`.
#[must_use]
pub fn almost_eq(a: f64, b: f64, acc: f64) -> bool {
    if a.is_infinite() && b.is_infinite() {
        return a == b;
    }
    a.abs_diff_eq(&b, acc)
}

/// Compares if two floats are close via `approx::relative_eq!` with a maximum relative
/// difference of `max_relative`.
#[must_use]
pub fn relative_eq(a: f64, b: f64, max_relative: f64) -> bool {
    approx::relative_eq!(a, b, max_relative = max_relative)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_almost_eq;

    #[test]
    fn almost_eq_within_tolerance() {
        let a = 1.0;
        let b = 1.0 + 0.5e-11;
        // within ACC = 10e-11
        assert!(almost_eq(a, b, ACC));
    }

    #[test]
    fn almost_eq_outside_tolerance() {
        let a = 1.0;
        let b = 1.0 + 2e-10;
        // 2e-10 > 10e-11
        assert!(!almost_eq(a, b, ACC));
    }

    #[test]
    fn almost_eq_infinities() {
        assert!(almost_eq(f64::INFINITY, f64::INFINITY, ACC));
        assert!(!almost_eq(f64::INFINITY, f64::NEG_INFINITY, ACC));
    }

    #[test]
    fn almost_eq_nan_is_never_close() {
        assert!(!almost_eq(f64::NAN, f64::NAN, ACC));
        assert!(!almost_eq(f64::NAN, 1.0, CONSERVATION_TOLERANCE));
    }

    #[test]
    fn relative_eq_scales_with_magnitude() {
        assert!(relative_eq(7_900_000.0, 7_900_000.5, 1e-7));
        assert!(!relative_eq(1.0, 1.5, 1e-7));
    }

    #[test]
    fn assert_almost_eq_macro_passes() {
        // should not panic
        assert_almost_eq!(0.999_998_7, 0.999_998_8, 1e-6);
    }

    #[test]
    #[should_panic(expected = "assertion failed")]
    fn assert_almost_eq_macro_panics() {
        // difference is 1e-3, but prec=1e-4 → panic
        assert_almost_eq!(1.0, 1.001, 1e-4);
    }
}
