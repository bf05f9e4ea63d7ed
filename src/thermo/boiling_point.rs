//! 고도·조성에 따른 끓는점 결정.

use tracing::debug;

use super::antoine::{solve_antoine, VerifiedRange};
use super::atmosphere::{pressure_at_altitude, sanitize_altitude};
use super::elevation::boiling_point_elevation;
use crate::substance::SubstanceProperties;

/// 물질별 감률이 없을 때 쓰는 끓는점 강하율 [°C/m] (물 기준 약 300 m당 1 °C).
pub const DEFAULT_LAPSE_RATE_C_PER_M: f64 = 0.0033;

/// 끓는점을 어떤 모델로 구했는지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoilingPointMethod {
    Antoine,
    LinearLapse,
}

/// 끓는점 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoilingPointResult {
    /// 끓는점 오름을 포함한 최종 끓는점 [°C]
    pub temperature_c: f64,
    /// 오름 적용 전 끓는점 [°C]
    pub base_boiling_point_c: f64,
    /// 끓는점 오름 [°C]
    pub elevation_c: f64,
    pub is_extrapolated: bool,
    pub verified_range: VerifiedRange,
    pub method: BoilingPointMethod,
    /// 계산에 쓴 대기압 [Pa]
    pub pressure_pa: f64,
}

/// 고도[m]에서 물질의 끓는점을 구한다.
///
/// Antoine 계수가 있으면 반드시 먼저 쓰고, 풀이가 실패할 때만 선형 근사로 넘어간다.
/// 해수면 끓는점이 없으면 물질 데이터가 쓸 수 없는 것이므로 `None`.
pub fn resolve_boiling_point(
    altitude_m: f64,
    substance: &SubstanceProperties,
) -> Option<BoilingPointResult> {
    if !substance.boiling_point_sea_level.is_finite() {
        return None;
    }

    let altitude_m = sanitize_altitude(altitude_m);
    let pressure_pa = pressure_at_altitude(altitude_m);

    if let Some(solution) = solve_antoine(pressure_pa, substance.antoine.as_ref()) {
        let base = solution.temperature_c;
        let elevation_c = boiling_point_elevation(base, substance);
        return Some(BoilingPointResult {
            temperature_c: base + elevation_c,
            base_boiling_point_c: base,
            elevation_c,
            is_extrapolated: solution.is_extrapolated,
            verified_range: solution.verified_range,
            method: BoilingPointMethod::Antoine,
            pressure_pa,
        });
    }

    if substance.antoine.is_some() {
        debug!(
            substance = %substance.name,
            pressure_pa,
            "Antoine solve failed, using linear lapse fallback"
        );
    }

    let lapse_rate = substance
        .altitude_lapse_rate
        .filter(|r| r.is_finite())
        .unwrap_or(DEFAULT_LAPSE_RATE_C_PER_M);
    let base = substance.boiling_point_sea_level - altitude_m * lapse_rate;
    let elevation_c = boiling_point_elevation(base, substance);
    Some(BoilingPointResult {
        temperature_c: base + elevation_c,
        base_boiling_point_c: base,
        elevation_c,
        is_extrapolated: false,
        verified_range: VerifiedRange::default(),
        method: BoilingPointMethod::LinearLapse,
        pressure_pa,
    })
}
