/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use std::cmp::Ordering;
use std::fmt::{self, Display, Formatter};
use std::ops::{Add, Div, Mul, Sub};
use std::str::FromStr;

use crate::magnitude::{check_factor, check_magnitude};
use crate::parser::parse_length;

use super::{IntoLengthUnit, IntoMagnitude, LengthError, LengthUnit};

/// A non-negative length. The magnitude is stored in meters; the
/// unit only affects the value reported by [`Length::value`] and
/// the unit picked for the result of arithmetic.
#[derive(Clone, Copy, Debug)]
pub struct Length {
    meters: f64,
    unit: LengthUnit,
}

impl Length {
    pub fn new<M: IntoMagnitude, U: IntoLengthUnit>(
        value: M,
        unit: U,
    ) -> Result<Self, LengthError> {
        let unit = unit.into_length_unit()?;
        let value = value.into_magnitude()?;
        Ok(Length {
            meters: check_magnitude(unit.to_meters(value))?,
            unit,
        })
    }

    /// A length in meters.
    pub fn from_value<M: IntoMagnitude>(
        value: M,
    ) -> Result<Self, LengthError> {
        Self::new(value, LengthUnit::REFERENCE)
    }

    pub fn zero() -> Self {
        Length {
            meters: 0.0,
            unit: LengthUnit::REFERENCE,
        }
    }

    pub fn parse(input: &str) -> Result<Self, LengthError> {
        parse_length(input)
    }

    /// Build a length from the outcome of [`combine`]. A sum too
    /// large to represent saturates at `f64::MAX` meters.
    fn from_combined((value, unit): (f64, LengthUnit)) -> Self {
        let meters = unit.to_meters(value);
        let meters = match meters.is_finite() {
            true => meters,
            false => {
                log::warn!("length overflow ({}); saturated", meters);
                f64::MAX
            }
        };
        Length { meters, unit }
    }

    /// The magnitude, expressed in the display unit.
    pub fn value(&self) -> f64 {
        self.unit.from_meters(self.meters)
    }

    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// The magnitude, expressed in meters.
    pub fn meters(&self) -> f64 {
        self.meters
    }

    /// Change the display unit. The physical length is unchanged.
    pub fn convert_to<U: IntoLengthUnit>(
        &mut self,
        unit: U,
    ) -> Result<(), LengthError> {
        let unit = unit.into_length_unit()?;
        log::trace!("converting {} to {}", self, unit);
        self.unit = unit;
        Ok(())
    }

    /// Like [`Length::convert_to`], but returns a converted copy.
    pub fn converted<U: IntoLengthUnit>(
        &self,
        unit: U,
    ) -> Result<Self, LengthError> {
        let mut length = *self;
        length.convert_to(unit)?;
        Ok(length)
    }

    /// Grow by `amount`, given in the display unit.
    pub fn extend_by<M: IntoMagnitude>(
        &mut self,
        amount: M,
    ) -> Result<(), LengthError> {
        self.extend_by_in(amount, self.unit)
    }

    /// Grow by `amount`, given in `unit`.
    pub fn extend_by_in<M: IntoMagnitude, U: IntoLengthUnit>(
        &mut self,
        amount: M,
        unit: U,
    ) -> Result<(), LengthError> {
        let amount = Self::amount_in_meters(amount, unit)?;
        self.meters = check_magnitude(self.meters + amount)?;
        Ok(())
    }

    /// Shrink by `amount`, given in the display unit. Shrinking
    /// past zero leaves a zero length.
    pub fn shrink_by<M: IntoMagnitude>(
        &mut self,
        amount: M,
    ) -> Result<(), LengthError> {
        self.shrink_by_in(amount, self.unit)
    }

    /// Shrink by `amount`, given in `unit`.
    pub fn shrink_by_in<M: IntoMagnitude, U: IntoLengthUnit>(
        &mut self,
        amount: M,
        unit: U,
    ) -> Result<(), LengthError> {
        let amount = Self::amount_in_meters(amount, unit)?;
        self.meters = clamp(self.meters - amount);
        Ok(())
    }

    fn amount_in_meters<M: IntoMagnitude, U: IntoLengthUnit>(
        amount: M,
        unit: U,
    ) -> Result<f64, LengthError> {
        let unit = unit.into_length_unit()?;
        let amount = amount.into_magnitude()?;
        check_magnitude(unit.to_meters(amount))
    }

    /// Same as `self + other`.
    pub fn add(&self, other: &Length) -> Length {
        self + other
    }

    /// Same as `self - other`.
    pub fn subtract(&self, other: &Length) -> Length {
        self - other
    }

    pub fn multiply<F: IntoMagnitude>(
        &self,
        factor: F,
    ) -> Result<Length, LengthError> {
        let factor = check_factor(factor)?;
        self.scaled(self.value() * factor)
    }

    pub fn divide<F: IntoMagnitude>(
        &self,
        divisor: F,
    ) -> Result<Length, LengthError> {
        let divisor = check_divisor(divisor)?;
        self.scaled(self.value() / divisor)
    }

    /// Divide and round down, in the display unit.
    pub fn integer_divide<F: IntoMagnitude>(
        &self,
        divisor: F,
    ) -> Result<Length, LengthError> {
        let divisor = check_divisor(divisor)?;
        self.scaled((self.value() / divisor).floor())
    }

    fn scaled(&self, value: f64) -> Result<Length, LengthError> {
        Ok(Length {
            meters: self.unit.to_meters(check_magnitude(value)?),
            unit: self.unit,
        })
    }
}

fn check_divisor<F: IntoMagnitude>(
    divisor: F,
) -> Result<f64, LengthError> {
    match check_factor(divisor)? {
        d if d == 0.0 => Err(LengthError::DivisionByZero),
        d => Ok(d),
    }
}

/// Clamp negative results to zero. NaN only comes from subtracting
/// two overflowed display values and is treated as zero as well.
fn clamp(n: f64) -> f64 {
    if n < 0.0 || n.is_nan() {
        log::debug!("length would become negative ({}); clamped to 0", n);
        0.0
    } else {
        n
    }
}

/// Combine two (value, unit) pairs. Equal units are combined
/// directly; otherwise the result is expressed in the smaller of
/// both units. Negative results are clamped to zero.
pub(crate) fn combine<F: Fn(f64, f64) -> f64>(
    (lhs, lhs_unit): (f64, LengthUnit),
    (rhs, rhs_unit): (f64, LengthUnit),
    op: F,
) -> (f64, LengthUnit) {
    if lhs_unit == rhs_unit {
        return (clamp(op(lhs, rhs)), lhs_unit);
    }

    let unit = match lhs_unit.multiplier() <= rhs_unit.multiplier() {
        true => lhs_unit,
        false => rhs_unit,
    };
    let meters = op(lhs_unit.to_meters(lhs), rhs_unit.to_meters(rhs));
    (clamp(unit.from_meters(meters)), unit)
}

impl Display for Length {
    fn fmt(&self, f: &mut Formatter) -> Result<(), fmt::Error> {
        write!(f, "Length(value={:?},unit={})", self.value(), self.unit)
    }
}

impl FromStr for Length {
    type Err = LengthError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_length(s)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for Length {
    fn eq(&self, rhs: &Self) -> bool {
        self.meters == rhs.meters
    }
}

impl PartialOrd for Length {
    fn partial_cmp(&self, rhs: &Self) -> Option<Ordering> {
        self.meters.partial_cmp(&rhs.meters)
    }
}

impl Add<&Length> for &Length {
    type Output = Length;
    fn add(self, rhs: &Length) -> Length {
        Length::from_combined(combine(
            (self.value(), self.unit),
            (rhs.value(), rhs.unit),
            |a, b| a + b,
        ))
    }
}

impl Sub<&Length> for &Length {
    type Output = Length;
    fn sub(self, rhs: &Length) -> Length {
        Length::from_combined(combine(
            (self.value(), self.unit),
            (rhs.value(), rhs.unit),
            |a, b| a - b,
        ))
    }
}

impl Add<Length> for Length {
    type Output = Length;
    fn add(self, rhs: Length) -> Length {
        &self + &rhs
    }
}

impl Sub<Length> for Length {
    type Output = Length;
    fn sub(self, rhs: Length) -> Length {
        &self - &rhs
    }
}

impl Mul<f64> for Length {
    type Output = Result<Length, LengthError>;
    fn mul(self, rhs: f64) -> Result<Length, LengthError> {
        self.multiply(rhs)
    }
}

impl Div<f64> for Length {
    type Output = Result<Length, LengthError>;
    fn div(self, rhs: f64) -> Result<Length, LengthError> {
        self.divide(rhs)
    }
}
