/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

pub mod error;
pub mod length;
pub mod length_unit;
pub mod magnitude;
pub mod parser;

pub use error::LengthError;
pub use length::Length;
pub use length_unit::{IntoLengthUnit, LengthUnit};
pub use magnitude::IntoMagnitude;
