/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize, Error, PartialEq, Clone, Debug)]
pub enum LengthError {
    #[error("invalid length unit: {0}")]
    InvalidUnit(String),
    #[error("invalid length value: {0}")]
    InvalidValue(String),
    #[error("negative length value: {0}")]
    NegativeValue(f64),
    #[error("invalid scaling factor: {0}")]
    InvalidFactor(String),
    #[error("division by zero")]
    DivisionByZero,
    #[error("length parse error: {0}")]
    ParseError(String),
}
