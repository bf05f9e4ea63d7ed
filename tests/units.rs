//! 단위 변환/표시 회귀 테스트.
use approx::assert_abs_diff_eq;
use boiling_lab::conversion::{convert, parse_quantity, ConversionError};
use boiling_lab::quantity::QuantityKind;
use boiling_lab::units::{
    celsius_to_fahrenheit, convert_pressure, fahrenheit_to_celsius, format_temperature,
    PressureUnit, TemperatureUnit,
};

#[test]
fn fahrenheit_celsius_round_trip() {
    for x in [-273.15, -40.0, 0.0, 36.6, 100.0, 1234.5678, 1.0e6] {
        assert_abs_diff_eq!(fahrenheit_to_celsius(celsius_to_fahrenheit(x)), x, epsilon = 1e-9);
    }
    assert_eq!(celsius_to_fahrenheit(100.0), 212.0);
    assert_eq!(celsius_to_fahrenheit(-40.0), -40.0);
}

#[test]
fn temperature_formatting() {
    assert_eq!(format_temperature(100.0, TemperatureUnit::Celsius, 1), "100.0 °C");
    assert_eq!(format_temperature(100.0, TemperatureUnit::Fahrenheit, 0), "212 °F");
    assert_eq!(format_temperature(0.0, TemperatureUnit::Kelvin, 2), "273.15 K");
    assert_eq!(format_temperature(f64::NAN, TemperatureUnit::Celsius, 1), "-- °C");
}

#[test]
fn one_atmosphere_in_mmhg() {
    let mmhg = convert_pressure(101_325.0, PressureUnit::Pascal, PressureUnit::MmHg);
    assert_abs_diff_eq!(mmhg, 760.0, epsilon = 0.01);
    let atm = convert_pressure(760.0, PressureUnit::MmHg, PressureUnit::Atm);
    assert_abs_diff_eq!(atm, 1.0, epsilon = 1e-4);
}

#[test]
fn string_units_convert() {
    let f = convert(QuantityKind::Temperature, 37.0, "C", "F").expect("temp");
    assert_abs_diff_eq!(f, 98.6, epsilon = 1e-9);
    let g = convert(QuantityKind::Mass, 1.0, "lb", "g").expect("mass");
    assert_abs_diff_eq!(g, 453.59237, epsilon = 1e-9);
    let wh = convert(QuantityKind::Energy, 7200.0, "J", "Wh").expect("energy");
    assert_abs_diff_eq!(wh, 2.0, epsilon = 1e-12);
    let kpa = convert(QuantityKind::Pressure, 1.0, "atm", "kPa").expect("pressure");
    assert_abs_diff_eq!(kpa, 101.325, epsilon = 1e-12);
}

#[test]
fn unknown_units_and_quantities_are_errors() {
    assert!(matches!(
        convert(QuantityKind::Temperature, 1.0, "C", "furlong"),
        Err(ConversionError::UnknownUnit(u)) if u == "furlong"
    ));
    assert!(matches!(
        parse_quantity("viscosity"),
        Err(ConversionError::UnsupportedQuantity(_))
    ));
    assert_eq!(parse_quantity("Temp").ok(), Some(QuantityKind::Temperature));
}
