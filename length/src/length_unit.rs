/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use super::LengthError;

/// The supported length units. Magnitudes are always kept in
/// meters internally; the unit only determines how a length is
/// presented.
#[derive(
    Serialize,
    Deserialize,
    PartialEq,
    PartialOrd,
    Eq,
    Ord,
    Hash,
    Clone,
    Copy,
    Debug,
)]
#[serde(rename_all = "snake_case")]
pub enum LengthUnit {
    Millimeter,
    Meter,
    Kilometer,
}

const LENGTH_UNITS: [LengthUnit; 3] =
    [LengthUnit::Millimeter, LengthUnit::Meter, LengthUnit::Kilometer];

impl LengthUnit {
    /// All units, from smallest to largest.
    pub const LIST: &'static [Self] = &LENGTH_UNITS;
    /// The canonical unit.
    pub const REFERENCE: Self = LengthUnit::Meter;

    /// Decimal exponent of the SI prefix.
    pub fn power(&self) -> i32 {
        match self {
            LengthUnit::Millimeter => -3,
            LengthUnit::Meter => 0,
            LengthUnit::Kilometer => 3,
        }
    }

    /// Factor to convert a magnitude in this unit to meters.
    pub fn multiplier(&self) -> f64 {
        /* Divide for negative powers, so milli gives exactly 1e-3. */
        match self.power() {
            p if p < 0 => 1.0 / 10f64.powi(-p),
            p => 10f64.powi(p),
        }
    }

    pub fn to_meters(&self, n: f64) -> f64 {
        n * self.multiplier()
    }

    pub fn from_meters(&self, n: f64) -> f64 {
        n / self.multiplier()
    }

    pub fn name(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "millimeter",
            LengthUnit::Meter => "meter",
            LengthUnit::Kilometer => "kilometer",
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            LengthUnit::Millimeter => "mm",
            LengthUnit::Meter => "m",
            LengthUnit::Kilometer => "km",
        }
    }

    /// Canonical names of all supported units.
    pub fn names() -> Vec<&'static str> {
        Self::LIST.iter().map(|u| u.name()).collect()
    }

    /// Look up a unit by canonical name, plural name or symbol.
    pub fn parse(input: &str) -> Result<Self, LengthError> {
        Self::LIST
            .iter()
            .copied()
            .find(|u| {
                input == u.name()
                    || input == u.symbol()
                    || input.strip_suffix('s') == Some(u.name())
            })
            .ok_or_else(|| LengthError::InvalidUnit(input.to_string()))
    }
}

impl Display for LengthUnit {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "{}", self.name())
    }
}

impl FromStr for LengthUnit {
    type Err = LengthError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Anything that can name a length unit.
pub trait IntoLengthUnit {
    fn into_length_unit(self) -> Result<LengthUnit, LengthError>;
}

impl IntoLengthUnit for LengthUnit {
    fn into_length_unit(self) -> Result<LengthUnit, LengthError> {
        Ok(self)
    }
}

impl IntoLengthUnit for &LengthUnit {
    fn into_length_unit(self) -> Result<LengthUnit, LengthError> {
        Ok(*self)
    }
}

impl IntoLengthUnit for &str {
    fn into_length_unit(self) -> Result<LengthUnit, LengthError> {
        LengthUnit::parse(self)
    }
}

impl IntoLengthUnit for String {
    fn into_length_unit(self) -> Result<LengthUnit, LengthError> {
        LengthUnit::parse(&self)
    }
}

impl IntoLengthUnit for &String {
    fn into_length_unit(self) -> Result<LengthUnit, LengthError> {
        LengthUnit::parse(self)
    }
}

#[cfg(test)]
mod test {
    use super::LengthUnit;
    use crate::LengthError;

    #[test]
    fn multipliers() {
        assert_eq!(LengthUnit::Millimeter.multiplier(), 1e-3);
        assert_eq!(LengthUnit::Meter.multiplier(), 1.0);
        assert_eq!(LengthUnit::Kilometer.multiplier(), 1e3);
        assert_eq!(LengthUnit::Millimeter.power(), -3);
    }

    #[test]
    fn list_is_ordered_by_size() {
        assert!(LengthUnit::LIST
            .windows(2)
            .all(|w| w[0].multiplier() < w[1].multiplier()));
    }

    #[test]
    fn parse_names_and_symbols() {
        assert_eq!(LengthUnit::parse("meter"), Ok(LengthUnit::Meter));
        assert_eq!(LengthUnit::parse("km"), Ok(LengthUnit::Kilometer));
        assert_eq!(
            LengthUnit::parse("millimeters"),
            Ok(LengthUnit::Millimeter)
        );
        assert_eq!(
            "furlong".parse::<LengthUnit>(),
            Err(LengthError::InvalidUnit("furlong".to_string()))
        );
        assert!(LengthUnit::parse("").is_err());
    }

    #[test]
    fn names() {
        assert_eq!(
            LengthUnit::names(),
            vec!["millimeter", "meter", "kilometer"]
        );
        assert_eq!(LengthUnit::Kilometer.to_string(), "kilometer");
    }

    #[test]
    fn serde_uses_canonical_name() {
        assert_eq!(
            serde_json::to_string(&LengthUnit::Millimeter).unwrap(),
            "\"millimeter\""
        );
        assert_eq!(
            serde_json::from_str::<LengthUnit>("\"kilometer\"").unwrap(),
            LengthUnit::Kilometer
        );
    }
}
