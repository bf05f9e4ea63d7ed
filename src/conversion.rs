use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
    /// 지원하지 않는 물리량
    UnsupportedQuantity(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "알 수 없는 단위: {u}"),
            ConversionError::UnsupportedQuantity(q) => write!(f, "지원하지 않는 물리량: {q}"),
        }
    }
}

impl std::error::Error for ConversionError {}

/// 물리량 이름 문자열을 해석한다.
pub fn parse_quantity(s: &str) -> Result<QuantityKind, ConversionError> {
    QuantityKind::parse(s).ok_or_else(|| ConversionError::UnsupportedQuantity(s.to_string()))
}

/// 문자열로 전달된 단위명을 enum으로 변환한 뒤 지정된 단위로 환산한다.
///
/// 단위 문자열 예시는 `C`, `F`, `kPa`, `mmHg`, `lb`, `kJ` 등을 사용할 수 있다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Temperature => {
            let from = parse_temperature_unit(from_unit_str)?;
            let to = parse_temperature_unit(to_unit_str)?;
            Ok(convert_temperature(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = parse_pressure_unit(from_unit_str)?;
            let to = parse_pressure_unit(to_unit_str)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Mass => {
            let from = parse_mass_unit(from_unit_str)?;
            let to = parse_mass_unit(to_unit_str)?;
            Ok(convert_mass(value, from, to))
        }
        QuantityKind::Energy => {
            let from = parse_energy_unit(from_unit_str)?;
            let to = parse_energy_unit(to_unit_str)?;
            Ok(convert_energy(value, from, to))
        }
    }
}

pub fn parse_temperature_unit(s: &str) -> Result<TemperatureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "k" | "kelvin" => Ok(TemperatureUnit::Kelvin),
        "c" | "celsius" | "°c" => Ok(TemperatureUnit::Celsius),
        "f" | "fahrenheit" | "°f" => Ok(TemperatureUnit::Fahrenheit),
        "r" | "rankine" => Ok(TemperatureUnit::Rankine),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_pressure_unit(s: &str) -> Result<PressureUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "pa" | "pascal" => Ok(PressureUnit::Pascal),
        "hpa" | "mbar" => Ok(PressureUnit::HectoPascal),
        "kpa" | "kilopascal" => Ok(PressureUnit::KiloPascal),
        "bar" => Ok(PressureUnit::Bar),
        "atm" => Ok(PressureUnit::Atm),
        "mmhg" | "torr" => Ok(PressureUnit::MmHg),
        "psi" => Ok(PressureUnit::Psi),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_mass_unit(s: &str) -> Result<MassUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "kg" => Ok(MassUnit::Kilogram),
        "g" => Ok(MassUnit::Gram),
        "lb" | "lbs" | "lbm" => Ok(MassUnit::Pound),
        "oz" => Ok(MassUnit::Ounce),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}

pub fn parse_energy_unit(s: &str) -> Result<EnergyUnit, ConversionError> {
    match s.to_lowercase().as_str() {
        "j" | "joule" => Ok(EnergyUnit::Joule),
        "kj" | "kilojoule" => Ok(EnergyUnit::Kilojoule),
        "kcal" | "kilocalorie" => Ok(EnergyUnit::KiloCalorie),
        "wh" | "watt-hour" => Ok(EnergyUnit::WattHour),
        _ => Err(ConversionError::UnknownUnit(s.to_string())),
    }
}
