/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use approx::assert_relative_eq;
use length::{Length, LengthError, LengthUnit};

#[test]
fn convert_to() {
    let mut l = Length::from_value(7103).unwrap();
    l.convert_to(LengthUnit::Kilometer).unwrap();
    assert_eq!(l.unit(), LengthUnit::Kilometer);
    assert_relative_eq!(l.value(), 7.103, max_relative = 1e-12);
    assert_eq!(l.meters(), 7103.0);

    l.convert_to("millimeter").unwrap();
    assert_relative_eq!(l.value(), 7_103_000.0, max_relative = 1e-12);
}

#[test]
fn convert_to_invalid_unit_keeps_state() {
    let mut l = Length::new(3, LengthUnit::Kilometer).unwrap();
    assert_eq!(
        l.convert_to("league"),
        Err(LengthError::InvalidUnit("league".to_string()))
    );
    assert_eq!(l.unit(), LengthUnit::Kilometer);
    assert_eq!(l.value(), 3.0);
}

#[test]
fn converted_leaves_original() {
    let l = Length::new(2, LengthUnit::Kilometer).unwrap();
    let m = l.converted(LengthUnit::Meter).unwrap();
    assert_eq!(m.value(), 2000.0);
    assert_eq!(l.unit(), LengthUnit::Kilometer);
    assert_eq!(l, m);
}

#[test]
fn extend_by() {
    let mut l = Length::new(7.103, LengthUnit::Kilometer).unwrap();
    l.extend_by(1).unwrap();
    assert_relative_eq!(l.value(), 8.103, max_relative = 1e-12);
    assert_eq!(l.unit(), LengthUnit::Kilometer);

    l.extend_by_in(101, LengthUnit::Millimeter).unwrap();
    assert_relative_eq!(l.meters(), 8103.101, max_relative = 1e-12);
    assert_eq!(l.unit(), LengthUnit::Kilometer);
}

#[test]
fn shrink_by() {
    let mut l = Length::new(8.103101, LengthUnit::Kilometer).unwrap();
    l.shrink_by(2).unwrap();
    assert_relative_eq!(l.value(), 6.103101, max_relative = 1e-12);

    l.shrink_by_in(303, "mm").unwrap();
    assert_relative_eq!(l.meters(), 6102.798, max_relative = 1e-12);
    assert_eq!(l.unit(), LengthUnit::Kilometer);
}

#[test]
fn shrink_by_clamps_to_zero() {
    let mut l = Length::from_value(1).unwrap();
    l.shrink_by_in(1, LengthUnit::Kilometer).unwrap();
    assert_eq!(l.value(), 0.0);
    assert_eq!(l.unit(), LengthUnit::Meter);
}

#[test]
fn failed_update_keeps_state() {
    let mut l = Length::from_value(10).unwrap();
    assert_eq!(l.extend_by(-1), Err(LengthError::NegativeValue(-1.0)));
    assert_eq!(
        l.shrink_by_in(1, "yard"),
        Err(LengthError::InvalidUnit("yard".to_string()))
    );
    assert!(matches!(
        l.shrink_by("lots"),
        Err(LengthError::InvalidValue(_))
    ));
    assert_eq!(l.value(), 10.0);
    assert_eq!(l.unit(), LengthUnit::Meter);
}

#[test]
fn comparisons() {
    let mm = Length::new(1000, LengthUnit::Millimeter).unwrap();
    let m = Length::from_value(1).unwrap();
    let km = Length::new(1, LengthUnit::Kilometer).unwrap();

    assert_eq!(mm, m);
    assert!(mm <= m);
    assert!(mm >= m);
    assert!(m < km);
    assert!(km > mm);
    assert!(!(km < m));
    assert_ne!(m, km);
}

#[test]
fn parse() {
    let l: Length = "7 km".parse().unwrap();
    assert_eq!(l, Length::from_value(7000).unwrap());
    assert_eq!(l.unit(), LengthUnit::Kilometer);
    assert_eq!(
        Length::parse("5 furlong"),
        Err(LengthError::InvalidUnit("furlong".to_string()))
    );
}
