//! Paired year/value samples in one length unit.

use slr_core::{LengthUnit, SlrError, SlrResult, bounds, convert, ensure_finite, interp_linear};

/// Year markers `x` with projected magnitudes `y`, both non-empty and equally long.
///
/// `y` and `unit` only ever change together.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    x: Vec<f64>,
    y: Vec<f64>,
    unit: LengthUnit,
}

impl Series {
    pub fn new(x: Vec<f64>, y: Vec<f64>, unit: LengthUnit) -> SlrResult<Self> {
        if x.len() != y.len() {
            return Err(SlrError::LengthMismatch {
                x_len: x.len(),
                y_len: y.len(),
            });
        }
        if x.is_empty() {
            return Err(SlrError::EmptySeries);
        }
        for &v in &x {
            ensure_finite(v, "series year")?;
        }
        for &v in &y {
            ensure_finite(v, "series value")?;
        }
        Ok(Self { x, y, unit })
    }

    /// Build from a unit symbol such as `"cm"`.
    pub fn with_symbol(x: Vec<f64>, y: Vec<f64>, unit: &str) -> SlrResult<Self> {
        let unit = LengthUnit::parse(unit)?;
        Self::new(x, y, unit)
    }

    pub fn x(&self) -> &[f64] {
        &self.x
    }

    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().copied().zip(self.y.iter().copied())
    }

    /// Smallest and largest year.
    pub fn year_range(&self) -> (f64, f64) {
        // Non-empty by construction.
        bounds(&self.x).unwrap_or((f64::NAN, f64::NAN))
    }

    pub fn first_year(&self) -> f64 {
        self.x[0]
    }

    pub fn last_year(&self) -> f64 {
        self.x[self.x.len() - 1]
    }

    /// Rewrite `y` and `unit` in the target unit.
    pub fn convert_in_place(&mut self, to: LengthUnit) {
        let from = self.unit;
        for v in &mut self.y {
            *v = convert(*v, from, to);
        }
        self.unit = to;
    }

    /// `y` expressed in the target unit; `self` is untouched.
    pub fn converted_values(&self, to: LengthUnit) -> Vec<f64> {
        self.y.iter().map(|&v| convert(v, self.unit, to)).collect()
    }

    /// Detached copy in the target unit.
    pub fn to_unit(&self, to: LengthUnit) -> Series {
        Self {
            x: self.x.clone(),
            y: self.converted_values(to),
            unit: to,
        }
    }

    /// Linear interpolation at `year`, exact on sample years.
    pub fn interpolate_at(&self, year: f64) -> SlrResult<f64> {
        let (min, max) = self.year_range();
        if !(min..=max).contains(&year) {
            return Err(SlrError::OutOfRange { year, min, max });
        }
        interp_linear(&self.x, &self.y, year).ok_or(SlrError::OutOfRange { year, min, max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slr_core::{Tolerances, nearly_equal};

    fn series() -> Series {
        Series::new(vec![2000.0, 2050.0, 2100.0], vec![0.0, 1.0, 2.0], LengthUnit::Meter).unwrap()
    }

    #[test]
    fn length_mismatch() {
        let err = Series::new(vec![1.0, 2.0, 3.0], vec![1.0, 2.0], LengthUnit::Meter).unwrap_err();
        assert_eq!(err, SlrError::LengthMismatch { x_len: 3, y_len: 2 });
    }

    #[test]
    fn empty_is_rejected() {
        let err = Series::new(vec![], vec![], LengthUnit::Meter).unwrap_err();
        assert_eq!(err, SlrError::EmptySeries);
    }

    #[test]
    fn unknown_symbol_is_rejected() {
        let err = Series::with_symbol(vec![2000.0], vec![0.0], "km").unwrap_err();
        assert!(matches!(err, SlrError::InvalidUnit { .. }));
    }

    #[test]
    fn nan_values_are_rejected() {
        let err = Series::new(vec![2000.0], vec![f64::NAN], LengthUnit::Foot).unwrap_err();
        assert!(matches!(err, SlrError::NonFinite { .. }));
    }

    #[test]
    fn copy_conversion_leaves_original() {
        let s = series();
        let cm = s.converted_values(LengthUnit::Centimeter);
        assert_eq!(cm, vec![0.0, 100.0, 200.0]);
        assert_eq!(s.y(), &[0.0, 1.0, 2.0]);
        assert_eq!(s.unit(), LengthUnit::Meter);
    }

    #[test]
    fn in_place_conversion_moves_unit_and_values_together() {
        let mut s = series();
        s.convert_in_place(LengthUnit::Millimeter);
        assert_eq!(s.unit(), LengthUnit::Millimeter);
        assert_eq!(s.y(), &[0.0, 1000.0, 2000.0]);
        assert_eq!(s.x(), &[2000.0, 2050.0, 2100.0]);
    }

    #[test]
    fn conversions_compose() {
        let original = series();
        let mut s = original.clone();
        s.convert_in_place(LengthUnit::Foot);
        s.convert_in_place(LengthUnit::Meter);
        let tol = Tolerances::default();
        for (a, b) in s.y().iter().zip(original.y()) {
            assert!(nearly_equal(*a, *b, tol));
        }
    }

    #[test]
    fn out_of_range_reports_bounds() {
        let err = series().interpolate_at(2101.0).unwrap_err();
        assert_eq!(
            err,
            SlrError::OutOfRange {
                year: 2101.0,
                min: 2000.0,
                max: 2100.0
            }
        );
        assert!(err.to_string().contains("2000"));
        assert!(err.to_string().contains("2100"));
    }
}
