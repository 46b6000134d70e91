//! Scenario likelihood expressed as a CDF value.

use core::fmt;

use crate::error::{SlrError, SlrResult};

/// CDF probability attached to a scenario.
///
/// Scenarios without an associated likelihood (e.g. the H++ or NOAA trajectories)
/// carry `Unknown`; it is never coerced to zero or NaN.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum Probability {
    Known(f64),
    #[default]
    Unknown,
}

impl Probability {
    /// Validate an optional raw probability.
    pub fn new(value: Option<f64>) -> SlrResult<Self> {
        match value {
            None => Ok(Self::Unknown),
            Some(p) if (0.0..=1.0).contains(&p) => Ok(Self::Known(p)),
            Some(p) => Err(SlrError::InvalidProbability { value: p }),
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Self::Known(p) => Some(p),
            Self::Unknown => None,
        }
    }

    pub fn is_known(self) -> bool {
        matches!(self, Self::Known(_))
    }

    /// `"83.00%"` style label, `None` when unknown.
    pub fn percent_label(self) -> Option<String> {
        self.value().map(|p| format!("{:.2}%", 100.0 * p))
    }
}

impl fmt::Display for Probability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.percent_label() {
            Some(label) => f.write_str(&label),
            None => f.write_str("unknown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(Probability::new(Some(0.0)).unwrap(), Probability::Known(0.0));
        assert_eq!(Probability::new(Some(1.0)).unwrap(), Probability::Known(1.0));
    }

    #[test]
    fn out_of_range_is_rejected() {
        assert_eq!(
            Probability::new(Some(1.5)).unwrap_err(),
            SlrError::InvalidProbability { value: 1.5 }
        );
        assert!(Probability::new(Some(-0.01)).is_err());
        assert!(Probability::new(Some(f64::NAN)).is_err());
    }

    #[test]
    fn absent_is_unknown() {
        let p = Probability::new(None).unwrap();
        assert_eq!(p, Probability::Unknown);
        assert_eq!(p.value(), None);
        assert_eq!(p.to_string(), "unknown");
    }

    #[test]
    fn percent_label_has_two_decimals() {
        assert_eq!(
            Probability::Known(0.995).percent_label().as_deref(),
            Some("99.50%")
        );
    }
}
