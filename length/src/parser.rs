/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use nom::{
    bytes::complete::take_while1,
    character::complete::space0,
    combinator::{map, opt},
    number::complete::double,
    sequence::{delimited, tuple},
    IResult,
};

use super::{Length, LengthError, LengthUnit};

/// Parse a string such as "7 km", "500mm" or "103" (meters) to
/// a length.
pub fn parse_length(input: &str) -> Result<Length, LengthError> {
    match length(input) {
        Ok(("", l)) => l,
        Ok((r, _)) => {
            Err(LengthError::ParseError(format!("Leftover input: {}", r)))
        }
        Err(err) => Err(LengthError::ParseError(format!("{}", err))),
    }
}

/// Parser for lengths. Validation of the magnitude and the unit
/// name is deferred to the result, so that an unknown unit is
/// reported as such instead of as a syntax error.
pub fn length(input: &str) -> IResult<&str, Result<Length, LengthError>> {
    map(
        tuple((delimited(space0, double, space0), opt(unit_name), space0)),
        |(value, unit, _)| match unit {
            Some(name) => Length::new(value, name),
            None => Length::new(value, LengthUnit::REFERENCE),
        },
    )(input)
}

/// Parser for a unit word.
pub fn unit_name(input: &str) -> IResult<&str, &str> {
    take_while1(|c: char| c.is_alphabetic())(input)
}
