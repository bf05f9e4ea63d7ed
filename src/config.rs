use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::substance::{SubstanceError, SubstanceProperties};
use crate::units::*;

/// 결과 표시용 단위 설정. 계산은 항상 °C/Pa/kg 로 한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayUnits {
    pub temperature: TemperatureUnit,
    pub pressure: PressureUnit,
    pub mass: MassUnit,
    pub energy: EnergyUnit,
}

impl Default for DisplayUnits {
    fn default() -> Self {
        Self {
            temperature: TemperatureUnit::Celsius,
            pressure: PressureUnit::KiloPascal,
            mass: MassUnit::Gram,
            energy: EnergyUnit::Kilojoule,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// 실내(주변) 온도 [°C]. 냉각의 하한이다.
    pub ambient_temp_c: f64,
    /// 틱 길이 [s]
    pub tick_seconds: f64,
    /// 기본 히터 출력 [W]
    pub heater_watts: f64,
    pub display: DisplayUnits,
    /// 내장 목록에 더할 사용자 정의 물질
    #[serde(default)]
    pub substances: Vec<SubstanceProperties>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ambient_temp_c: 20.0,
            tick_seconds: 0.1,
            heater_watts: 2000.0,
            display: DisplayUnits::default(),
            substances: Vec::new(),
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug)]
pub enum ConfigError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 역직렬화 오류
    Serde(toml::de::Error),
    /// TOML 직렬화 오류
    Serialize(toml::ser::Error),
    /// 사용자 정의 물질의 물성 오류
    Substance { name: String, source: SubstanceError },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "파일 입출력 오류: {e}"),
            ConfigError::Serde(e) => write!(f, "설정 파싱 오류: {e}"),
            ConfigError::Serialize(e) => write!(f, "설정 직렬화 오류: {e}"),
            ConfigError::Substance { name, source } => {
                write!(f, "물질 '{name}' 설정 오류: {source}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Serde(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Serialize(value)
    }
}

/// TOML 문자열에서 설정을 읽고 사용자 정의 물질을 검증한다.
pub fn parse_config(content: &str) -> Result<Config, ConfigError> {
    let cfg: Config = toml::from_str(content)?;
    for substance in &cfg.substances {
        substance
            .validate()
            .map_err(|source| ConfigError::Substance {
                name: substance.name.clone(),
                source,
            })?;
    }
    Ok(cfg)
}

/// 설정 파일을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if path.exists() {
        let content = fs::read_to_string(path)?;
        parse_config(&content)
    } else {
        let cfg = Config::default();
        cfg.save(path)?;
        Ok(cfg)
    }
}

impl Config {
    /// 설정을 파일에 저장한다.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
