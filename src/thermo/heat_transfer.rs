//! 가한 열에너지를 온도 상승과 증발량으로 나눈다.

use crate::substance::SubstanceProperties;

/// 열 적용 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatResult {
    pub new_temp_c: f64,
    /// 증발에 쓰인 에너지 [J]
    pub energy_to_vaporization_j: f64,
    /// 생성된 증기 질량 [kg]
    pub steam_generated_kg: f64,
}

impl HeatResult {
    fn sensible(new_temp_c: f64) -> Self {
        Self {
            new_temp_c,
            energy_to_vaporization_j: 0.0,
            steam_generated_kg: 0.0,
        }
    }
}

/// 질량 `mass_kg`, 온도 `current_temp_c`인 액체에 `energy_j`를 가한다.
///
/// 끓는점에 못 미치면 전부 현열로 온도를 올린다. 증발 데이터나 끓는점이 없으면
/// 끓는점 위로도 계속 올라간다. 끓는점에 닿으면 `Q = m·c·ΔT`만큼만 현열로 쓰고
/// 나머지는 잠열로 증기를 만들며 온도는 끓는점에 고정된다.
///
/// 분할 계산은 틱 시작 시점의 질량을 쓴다. 틱 안에서 줄어드는 질량은 반영하지 않는다.
pub fn apply_heat_energy(
    mass_kg: f64,
    current_temp_c: f64,
    energy_j: f64,
    boiling_point_c: Option<f64>,
    substance: &SubstanceProperties,
) -> HeatResult {
    let c = substance.specific_heat;
    if !(c.is_finite() && c > 0.0) || !(mass_kg.is_finite() && mass_kg > 0.0) {
        return HeatResult::sensible(current_temp_c);
    }

    let mass_g = mass_kg * 1000.0;
    let potential_temp_c = current_temp_c + energy_j / (mass_g * c);

    let boiling_point_c = boiling_point_c.filter(|bp| bp.is_finite());
    let (Some(bp), Some(hv_j_per_kg)) =
        (boiling_point_c, substance.heat_of_vaporization_j_per_kg())
    else {
        return HeatResult::sensible(potential_temp_c);
    };
    if potential_temp_c < bp {
        return HeatResult::sensible(potential_temp_c);
    }

    // 끓는점보다 이미 뜨거우면 음수가 되어 과열분도 증발로 넘어간다
    let energy_to_boiling_j = mass_g * c * (bp - current_temp_c);
    let remaining_j = energy_j - energy_to_boiling_j;

    HeatResult {
        new_temp_c: bp,
        energy_to_vaporization_j: remaining_j.max(0.0),
        steam_generated_kg: (remaining_j / hv_j_per_kg).max(0.0),
    }
}
