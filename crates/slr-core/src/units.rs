// slr-core/src/units.rs

use core::fmt;
use core::str::FromStr;

use uom::si::f64::Length as UomLength;
use uom::si::length::{centimeter, foot, inch, meter, millimeter};

use crate::error::{SlrError, SlrResult};

/// Canonical SI length type (f64).
pub type Length = UomLength;

/// Length units a projection may be expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LengthUnit {
    #[cfg_attr(feature = "serde", serde(rename = "m"))]
    Meter,
    #[cfg_attr(feature = "serde", serde(rename = "cm"))]
    Centimeter,
    #[cfg_attr(feature = "serde", serde(rename = "mm"))]
    Millimeter,
    #[cfg_attr(feature = "serde", serde(rename = "ft"))]
    Foot,
    #[cfg_attr(feature = "serde", serde(rename = "in"))]
    Inch,
}

impl LengthUnit {
    pub const ALL: [LengthUnit; 5] = [
        LengthUnit::Meter,
        LengthUnit::Centimeter,
        LengthUnit::Millimeter,
        LengthUnit::Foot,
        LengthUnit::Inch,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Self::Meter => "m",
            Self::Centimeter => "cm",
            Self::Millimeter => "mm",
            Self::Foot => "ft",
            Self::Inch => "in",
        }
    }

    /// Parse a unit symbol such as `"ft"`.
    pub fn parse(symbol: &str) -> SlrResult<Self> {
        let trimmed = symbol.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|unit| unit.symbol() == trimmed)
            .ok_or_else(|| SlrError::InvalidUnit {
                unit: symbol.to_string(),
                valid: valid_symbols(),
            })
    }

    #[inline]
    pub fn length(self, value: f64) -> Length {
        match self {
            Self::Meter => Length::new::<meter>(value),
            Self::Centimeter => Length::new::<centimeter>(value),
            Self::Millimeter => Length::new::<millimeter>(value),
            Self::Foot => Length::new::<foot>(value),
            Self::Inch => Length::new::<inch>(value),
        }
    }

    #[inline]
    pub fn value_of(self, length: Length) -> f64 {
        match self {
            Self::Meter => length.get::<meter>(),
            Self::Centimeter => length.get::<centimeter>(),
            Self::Millimeter => length.get::<millimeter>(),
            Self::Foot => length.get::<foot>(),
            Self::Inch => length.get::<inch>(),
        }
    }

    /// Meters in one of this unit.
    pub fn meters_per_unit(self) -> f64 {
        self.length(1.0).get::<meter>()
    }

    /// Multiplier taking a value in `self` to a value in `to`.
    pub fn ratio_to(self, to: LengthUnit) -> f64 {
        if self == to {
            1.0
        } else {
            self.meters_per_unit() / to.meters_per_unit()
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for LengthUnit {
    type Err = SlrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Comma-separated list of the accepted unit symbols.
pub fn valid_symbols() -> String {
    LengthUnit::ALL
        .iter()
        .map(|unit| format!("'{}'", unit.symbol()))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Convert `value` from one unit to another. Identical units return `value` untouched.
#[inline]
pub fn convert(value: f64, from: LengthUnit, to: LengthUnit) -> f64 {
    if from == to {
        return value;
    }
    value * from.ratio_to(to)
}

/// String-typed variant of [`convert`] for values coming from user input.
pub fn convert_str(value: f64, from: &str, to: &str) -> SlrResult<f64> {
    let from = LengthUnit::parse(from)?;
    let to = LengthUnit::parse(to)?;
    Ok(convert(value, from, to))
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::numeric::{Tolerances, nearly_equal};
    use proptest::prelude::*;

    fn any_unit() -> impl Strategy<Value = LengthUnit> {
        prop::sample::select(LengthUnit::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn round_trip_is_identity(v in -1.0e6_f64..1.0e6_f64, a in any_unit(), b in any_unit()) {
            let back = convert(convert(v, a, b), b, a);
            let tol = Tolerances { abs: 1e-12, rel: 1e-9 };
            prop_assert!(nearly_equal(back, v, tol));
        }

        #[test]
        fn identity_conversion_is_bit_exact(v in any::<f64>(), a in any_unit()) {
            prop_assume!(v.is_finite());
            prop_assert_eq!(convert(v, a, a).to_bits(), v.to_bits());
        }
    }
}
