/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use super::LengthError;

/// Anything that can be read as a non-negative, finite magnitude.
pub trait IntoMagnitude {
    fn into_magnitude(self) -> Result<f64, LengthError>;
}

/// Validate a raw float: it must be finite and not negative.
pub(crate) fn check_magnitude(n: f64) -> Result<f64, LengthError> {
    if !n.is_finite() {
        Err(LengthError::InvalidValue(format!("{:?}", n)))
    } else if n < 0.0 {
        Err(LengthError::NegativeValue(n))
    } else {
        // Drops the sign of -0.0.
        Ok(n + 0.0)
    }
}

/// Validate a scaling factor. Any rejection is reported as an
/// invalid factor rather than an invalid length.
pub(crate) fn check_factor<F: IntoMagnitude>(
    factor: F,
) -> Result<f64, LengthError> {
    factor.into_magnitude().map_err(|e| match e {
        LengthError::InvalidValue(s) => LengthError::InvalidFactor(s),
        LengthError::NegativeValue(n) => {
            LengthError::InvalidFactor(format!("{:?}", n))
        }
        e => e,
    })
}

impl IntoMagnitude for f64 {
    fn into_magnitude(self) -> Result<f64, LengthError> {
        check_magnitude(self)
    }
}

impl IntoMagnitude for f32 {
    fn into_magnitude(self) -> Result<f64, LengthError> {
        check_magnitude(self as f64)
    }
}

macro_rules! impl_into_magnitude {
    ($($int:ty),+) => {
        $(
            impl IntoMagnitude for $int {
                fn into_magnitude(self) -> Result<f64, LengthError> {
                    check_magnitude(self as f64)
                }
            }
        )+
    };
}

impl_into_magnitude!(i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl IntoMagnitude for &str {
    fn into_magnitude(self) -> Result<f64, LengthError> {
        let n = self
            .trim()
            .parse::<f64>()
            .map_err(|_| LengthError::InvalidValue(self.to_string()))?;
        check_magnitude(n)
    }
}

impl IntoMagnitude for String {
    fn into_magnitude(self) -> Result<f64, LengthError> {
        self.as_str().into_magnitude()
    }
}

impl IntoMagnitude for &String {
    fn into_magnitude(self) -> Result<f64, LengthError> {
        self.as_str().into_magnitude()
    }
}
