use serde::{Deserialize, Serialize};

/// 온도 단위를 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Kelvin,
    Celsius,
    Fahrenheit,
    Rankine,
}

impl TemperatureUnit {
    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Fahrenheit => "°F",
            TemperatureUnit::Rankine => "°R",
        }
    }
}

/// 섭씨를 화씨로 변환한다.
pub fn celsius_to_fahrenheit(value_c: f64) -> f64 {
    value_c * 9.0 / 5.0 + 32.0
}

/// 화씨를 섭씨로 변환한다.
pub fn fahrenheit_to_celsius(value_f: f64) -> f64 {
    (value_f - 32.0) * 5.0 / 9.0
}

/// 주어진 값을 켈빈으로 변환한다.
pub fn to_kelvin(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value,
        TemperatureUnit::Celsius => value + 273.15,
        TemperatureUnit::Fahrenheit => (value + 459.67) * 5.0 / 9.0,
        TemperatureUnit::Rankine => value * 5.0 / 9.0,
    }
}

/// 켈빈 값을 원하는 단위로 변환한다.
pub fn from_kelvin(value_k: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Kelvin => value_k,
        TemperatureUnit::Celsius => value_k - 273.15,
        TemperatureUnit::Fahrenheit => value_k * 9.0 / 5.0 - 459.67,
        TemperatureUnit::Rankine => value_k * 9.0 / 5.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    // 섭씨<->화씨는 켈빈을 거치지 않아야 왕복 오차가 작다
    match (from, to) {
        (a, b) if a == b => value,
        (TemperatureUnit::Celsius, TemperatureUnit::Fahrenheit) => celsius_to_fahrenheit(value),
        (TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius) => fahrenheit_to_celsius(value),
        _ => from_kelvin(to_kelvin(value, from), to),
    }
}

/// 섭씨 값을 지정 단위로 바꿔 `"98.6 °F"` 형태의 문자열로 만든다.
pub fn format_temperature(value_c: f64, unit: TemperatureUnit, decimals: usize) -> String {
    if !value_c.is_finite() {
        return format!("-- {}", unit.symbol());
    }
    let v = convert_temperature(value_c, TemperatureUnit::Celsius, unit);
    format!("{v:.decimals$} {}", unit.symbol())
}
