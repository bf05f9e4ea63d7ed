//! 용액의 끓는점 오름(총괄성).

use crate::substance::SubstanceProperties;

const GAS_CONSTANT: f64 = 8.314;

/// 용매 상수. Kb 계산에 쓰인다.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolventConstants {
    /// 몰질량 [g/mol]
    pub molar_mass_g_per_mol: f64,
    /// 몰 증발엔탈피 [kJ/mol]
    pub enthalpy_of_vaporization_kj_per_mol: f64,
}

impl SolventConstants {
    pub const WATER: SolventConstants = SolventConstants {
        molar_mass_g_per_mol: 18.015,
        enthalpy_of_vaporization_kj_per_mol: 40.66,
    };
}

/// 끓는점 `base_boiling_point_c`에서의 끓음오름 상수 Kb [K·kg/mol].
///
/// `Kb = R·Tb²·M / ΔHvap`. Tb가 압력에 따라 바뀌므로 고정값을 쓰지 않는다.
pub fn ebullioscopic_constant(base_boiling_point_c: f64, solvent: &SolventConstants) -> f64 {
    let tb_k = base_boiling_point_c + 273.15;
    let molar_mass_kg = solvent.molar_mass_g_per_mol / 1000.0;
    let dh_j = solvent.enthalpy_of_vaporization_kj_per_mol * 1000.0;
    GAS_CONSTANT * tb_k * tb_k * molar_mass_kg / dh_j
}

/// 끓는점 오름 [°C].
///
/// 반트호프 계수와 몰랄 농도가 모두 있으면 `i·Kb·b`로 동적으로 계산한다.
/// 용매는 물로 가정한다. 다른 용매의 동적 계산은 지원하지 않는다.
/// 용질 데이터가 없으면 정적 `boiling_point_elevation`, 그것도 없으면 0.
pub fn boiling_point_elevation(base_boiling_point_c: f64, substance: &SubstanceProperties) -> f64 {
    let finite = |v: Option<f64>| v.filter(|x| x.is_finite());
    match (finite(substance.van_hoff_factor), finite(substance.molality)) {
        (Some(i), Some(b)) => {
            i * ebullioscopic_constant(base_boiling_point_c, &SolventConstants::WATER) * b
        }
        _ => finite(substance.boiling_point_elevation).unwrap_or(0.0),
    }
}
