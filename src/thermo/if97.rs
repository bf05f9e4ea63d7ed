//! IAPWS-IF97 포화선(Region 4)을 seuif97 크레이트로 위임한 래퍼.
//! 물의 Antoine 결과를 검증하는 기준값으로만 쓴다.
//! 입력/출력: 압력 Pa(절대), 온도 °C

use seuif97::{px, tx, OP, OT};

/// Region 4 임계점 [°C]
const CRITICAL_TEMP_C: f64 = 373.946;
/// Region 4 임계압 [Pa]
const CRITICAL_PRESSURE_PA: f64 = 22.064e6;
/// 삼중점 압력 [Pa]
const TRIPLE_POINT_PRESSURE_PA: f64 = 611.657;

/// 포화온도(°C) - 입력 압력은 Pa(절대). 포화선 밖이면 `None`.
pub fn water_saturation_temp_c(pressure_pa: f64) -> Option<f64> {
    if !(TRIPLE_POINT_PRESSURE_PA..=CRITICAL_PRESSURE_PA).contains(&pressure_pa) {
        return None;
    }
    let t_c = px(pressure_pa / 1.0e6, 0.0, OT);
    t_c.is_finite().then_some(t_c)
}

/// 포화압력(Pa 절대) - 입력 온도는 °C. 포화선 밖이면 `None`.
pub fn water_saturation_pressure_pa(temp_c: f64) -> Option<f64> {
    if !(0.01..=CRITICAL_TEMP_C).contains(&temp_c) {
        return None;
    }
    let p_mpa = tx(temp_c, 0.0, OP);
    p_mpa.is_finite().then_some(p_mpa * 1.0e6)
}
