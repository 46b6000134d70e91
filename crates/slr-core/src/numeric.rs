use crate::SlrError;

/// Floating point type used throughout the workspace
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

pub fn ensure_finite(v: Real, what: &'static str) -> Result<Real, SlrError> {
    if v.is_finite() {
        Ok(v)
    } else {
        Err(SlrError::NonFinite { what, value: v })
    }
}

/// Smallest and largest value of a non-empty slice.
pub fn bounds(values: &[Real]) -> Option<(Real, Real)> {
    let first = *values.first()?;
    Some(
        values
            .iter()
            .fold((first, first), |(lo, hi), &v| (lo.min(v), hi.max(v))),
    )
}

/// Piecewise-linear interpolation of `y` over `x` at `at`.
///
/// Returns `None` when `at` is not bracketed by any pair of adjacent samples.
/// A sample sitting exactly on `at` is returned as stored.
pub fn interp_linear(x: &[Real], y: &[Real], at: Real) -> Option<Real> {
    if x.len() != y.len() {
        return None;
    }

    if let Some(i) = x.iter().position(|&xi| xi == at) {
        return Some(y[i]);
    }

    for i in 0..x.len().saturating_sub(1) {
        let (x0, x1) = (x[i], x[i + 1]);
        let (lo, hi) = if x0 <= x1 { (x0, x1) } else { (x1, x0) };
        if lo < at && at < hi {
            let w = (at - x0) / (x1 - x0);
            return Some(y[i] + (y[i + 1] - y[i]) * w);
        }
    }

    None
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
    fn ensure_finite_detects_nan() {
        let err = ensure_finite(Real::NAN, "test").unwrap_err();
        let msg = format!("{err}");
        assert!(msg.contains("Non-finite"));
    }

    #[test]
    fn interp_hits_samples_exactly() {
        let x = [2000.0, 2050.0, 2100.0];
        let y = [0.0, 0.1 + 0.2, 2.0];
        assert_eq!(interp_linear(&x, &y, 2050.0), Some(0.1 + 0.2));
        assert_eq!(interp_linear(&x, &y, 2000.0), Some(0.0));
        assert_eq!(interp_linear(&x, &y, 2100.0), Some(2.0));
    }

    #[test]
    fn interp_between_samples() {
        let x = [2000.0, 2050.0, 2100.0];
        let y = [0.0, 1.0, 2.0];
        assert_eq!(interp_linear(&x, &y, 2025.0), Some(0.5));
        let v = interp_linear(&x, &y, 2075.0).unwrap();
        assert!(nearly_equal(v, 1.5, Tolerances::default()));
        assert_eq!(interp_linear(&x, &y, 1999.0), None);
        assert_eq!(interp_linear(&x, &y, 2100.5), None);
    }

    #[test]
    fn bounds_of_unsorted() {
        assert_eq!(bounds(&[3.0, 1.0, 2.0]), Some((1.0, 3.0)));
        assert_eq!(bounds(&[]), None);
    }
}
