//! 물질 열물성 정의와 내장 카탈로그.
//!
//! 값은 교육용 참고치이며 실험 설계에는 최신 데이터로 검증해야 한다.
//! 시뮬레이션 함수는 이 구조체를 읽기 전용으로만 사용한다.

use serde::{Deserialize, Serialize};

/// Antoine 식 `log10(Pvap[mmHg]) = A − B/(C+T[°C])` 의 계수.
///
/// `t_min_c`/`t_max_c`는 실험으로 검증된 범위일 뿐 물리적 한계가 아니다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AntoineCoefficients {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    #[serde(default)]
    pub t_min_c: Option<f64>,
    #[serde(default)]
    pub t_max_c: Option<f64>,
}

impl AntoineCoefficients {
    /// A/B/C가 모두 0이 아닌 유한값인지 확인한다. 0은 "미설정"을 뜻한다.
    pub fn is_usable(&self) -> bool {
        [self.a, self.b, self.c]
            .iter()
            .all(|v| v.is_finite() && *v != 0.0)
    }
}

/// 물질 하나의 열물성.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubstanceProperties {
    pub name: String,
    /// 비열 [J/(g·°C)]
    pub specific_heat: f64,
    /// 증발잠열 [kJ/kg]. 0이면 증발하지 않는 물질로 취급한다.
    #[serde(default)]
    pub heat_of_vaporization: f64,
    /// 해수면 끓는점 [°C]
    pub boiling_point_sea_level: f64,
    /// 고도당 끓는점 강하 [°C/m]. 없으면 기본값을 쓴다.
    #[serde(default)]
    pub altitude_lapse_rate: Option<f64>,
    #[serde(default)]
    pub antoine: Option<AntoineCoefficients>,
    /// 뉴턴 냉각 계수 [1/s]
    pub cooling_coefficient: f64,
    #[serde(default)]
    pub van_hoff_factor: Option<f64>,
    /// 용질 몰랄 농도 [mol/kg]
    #[serde(default)]
    pub molality: Option<f64>,
    /// 정적 끓는점 오름 [°C]. 용질 데이터가 없을 때만 쓴다.
    #[serde(default)]
    pub boiling_point_elevation: Option<f64>,
    #[serde(default = "default_can_boil")]
    pub can_boil: bool,
}

fn default_can_boil() -> bool {
    true
}

/// 물성 불변조건 위반.
#[derive(Debug, Clone, PartialEq)]
pub enum SubstanceError {
    /// 비열은 양의 유한값이어야 함
    InvalidSpecificHeat(f64),
    /// 증발잠열은 0 이상이어야 함
    InvalidHeatOfVaporization(f64),
    /// 냉각 계수는 양의 유한값이어야 함
    InvalidCoolingCoefficient(f64),
    /// 해수면 끓는점 누락
    MissingSeaLevelBoilingPoint,
    /// Antoine A/B/C 중 0이거나 유한하지 않은 값
    InvalidAntoineCoefficients,
    /// 검증 범위의 최소가 최대보다 큼
    InvertedVerifiedRange { min: f64, max: f64 },
}

impl std::fmt::Display for SubstanceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubstanceError::InvalidSpecificHeat(v) => write!(f, "비열이 올바르지 않음: {v}"),
            SubstanceError::InvalidHeatOfVaporization(v) => {
                write!(f, "증발잠열이 올바르지 않음: {v}")
            }
            SubstanceError::InvalidCoolingCoefficient(v) => {
                write!(f, "냉각 계수가 올바르지 않음: {v}")
            }
            SubstanceError::MissingSeaLevelBoilingPoint => {
                write!(f, "해수면 끓는점 데이터가 없습니다")
            }
            SubstanceError::InvalidAntoineCoefficients => {
                write!(f, "Antoine 계수 A/B/C는 0이 아닌 유한값이어야 합니다")
            }
            SubstanceError::InvertedVerifiedRange { min, max } => {
                write!(f, "Antoine 검증 범위가 뒤집힘: {min} > {max}")
            }
        }
    }
}

impl std::error::Error for SubstanceError {}

impl SubstanceProperties {
    /// 불변조건을 검사한다. 시뮬레이션 함수 자체는 검사 없이도 동작한다.
    pub fn validate(&self) -> Result<(), SubstanceError> {
        if !(self.specific_heat.is_finite() && self.specific_heat > 0.0) {
            return Err(SubstanceError::InvalidSpecificHeat(self.specific_heat));
        }
        if !(self.heat_of_vaporization.is_finite() && self.heat_of_vaporization >= 0.0) {
            return Err(SubstanceError::InvalidHeatOfVaporization(
                self.heat_of_vaporization,
            ));
        }
        if !(self.cooling_coefficient.is_finite() && self.cooling_coefficient > 0.0) {
            return Err(SubstanceError::InvalidCoolingCoefficient(
                self.cooling_coefficient,
            ));
        }
        if !self.boiling_point_sea_level.is_finite() {
            return Err(SubstanceError::MissingSeaLevelBoilingPoint);
        }
        if let Some(coeffs) = &self.antoine {
            if !coeffs.is_usable() {
                return Err(SubstanceError::InvalidAntoineCoefficients);
            }
            if let (Some(min), Some(max)) = (coeffs.t_min_c, coeffs.t_max_c) {
                if min > max {
                    return Err(SubstanceError::InvertedVerifiedRange { min, max });
                }
            }
        }
        Ok(())
    }

    /// 증발잠열을 J/kg로 반환한다. 증발 불가면 `None`.
    pub fn heat_of_vaporization_j_per_kg(&self) -> Option<f64> {
        let hv = self.heat_of_vaporization;
        (hv.is_finite() && hv > 0.0).then_some(hv * 1000.0)
    }
}

/// 물 (Antoine 1~100 °C 구간).
pub fn water() -> SubstanceProperties {
    SubstanceProperties {
        name: "water".into(),
        specific_heat: 4.186,
        heat_of_vaporization: 2257.0,
        boiling_point_sea_level: 100.0,
        altitude_lapse_rate: Some(0.0033),
        antoine: Some(AntoineCoefficients {
            a: 8.07131,
            b: 1730.63,
            c: 233.426,
            t_min_c: Some(1.0),
            t_max_c: Some(100.0),
        }),
        cooling_coefficient: 0.0015,
        van_hoff_factor: None,
        molality: None,
        boiling_point_elevation: None,
        can_boil: true,
    }
}

/// 약 3.5 wt% 소금물. 물과 같은 Antoine 계수에 NaCl(i=2) 끓는점 오름을 더한다.
pub fn saltwater() -> SubstanceProperties {
    SubstanceProperties {
        name: "saltwater".into(),
        specific_heat: 3.993,
        heat_of_vaporization: 2257.0,
        boiling_point_sea_level: 100.0,
        van_hoff_factor: Some(2.0),
        // 35 g NaCl / 965 g 물
        molality: Some(0.62),
        boiling_point_elevation: Some(0.64),
        ..water()
    }
}

/// 에탄올.
pub fn ethanol() -> SubstanceProperties {
    SubstanceProperties {
        name: "ethanol".into(),
        specific_heat: 2.44,
        heat_of_vaporization: 841.0,
        boiling_point_sea_level: 78.37,
        altitude_lapse_rate: Some(0.0029),
        antoine: Some(AntoineCoefficients {
            a: 8.20417,
            b: 1642.89,
            c: 230.300,
            t_min_c: Some(-57.0),
            t_max_c: Some(80.0),
        }),
        cooling_coefficient: 0.0018,
        van_hoff_factor: None,
        molality: None,
        boiling_point_elevation: None,
        can_boil: true,
    }
}

/// 이소프로필 알코올.
pub fn isopropanol() -> SubstanceProperties {
    SubstanceProperties {
        name: "isopropanol".into(),
        specific_heat: 2.68,
        heat_of_vaporization: 663.0,
        boiling_point_sea_level: 82.5,
        altitude_lapse_rate: Some(0.003),
        antoine: Some(AntoineCoefficients {
            a: 8.11778,
            b: 1580.92,
            c: 219.61,
            t_min_c: Some(-26.0),
            t_max_c: Some(83.0),
        }),
        cooling_coefficient: 0.0017,
        van_hoff_factor: None,
        molality: None,
        boiling_point_elevation: None,
        can_boil: true,
    }
}

/// 식용유. 증발 데이터가 없어 끓지 않고 끓는점 위로 계속 가열된다.
pub fn olive_oil() -> SubstanceProperties {
    SubstanceProperties {
        name: "olive_oil".into(),
        specific_heat: 1.97,
        heat_of_vaporization: 0.0,
        boiling_point_sea_level: 300.0,
        altitude_lapse_rate: None,
        antoine: None,
        cooling_coefficient: 0.0009,
        van_hoff_factor: None,
        molality: None,
        boiling_point_elevation: None,
        can_boil: false,
    }
}

/// 내장 물질 목록.
pub fn builtin_substances() -> Vec<SubstanceProperties> {
    vec![water(), saltwater(), ethanol(), isopropanol(), olive_oil()]
}

/// 이름(대소문자 무시)으로 물질을 찾는다. `extra`가 내장 목록보다 우선한다.
pub fn find_substance(name: &str, extra: &[SubstanceProperties]) -> Option<SubstanceProperties> {
    extra
        .iter()
        .find(|s| s.name.eq_ignore_ascii_case(name))
        .cloned()
        .or_else(|| {
            builtin_substances()
                .into_iter()
                .find(|s| s.name.eq_ignore_ascii_case(name))
        })
}
