//! 단위 정의 및 변환 모듈 모음.
//!
//! 시뮬레이션 코어는 항상 °C, Pa(절대압), kg, J 로 계산한다.
//! 여기의 변환 함수는 표시 계층과 CLI 입력 해석에서만 사용한다.

pub mod energy;
pub mod mass;
pub mod pressure;
pub mod temperature;

pub use energy::{convert_energy, EnergyUnit};
pub use mass::{convert_mass, MassUnit};
pub use pressure::{convert_pressure, PressureUnit};
pub use temperature::{
    celsius_to_fahrenheit, convert_temperature, fahrenheit_to_celsius, format_temperature,
    TemperatureUnit,
};
