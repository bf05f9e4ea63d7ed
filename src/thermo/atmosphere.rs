//! 국제표준대기(ISA) 대류권 모델.

/// 해수면 표준 온도 [K]
pub const SEA_LEVEL_TEMPERATURE_K: f64 = 288.15;
/// 대류권 기온 감률 [K/m]
pub const TEMPERATURE_LAPSE_RATE_K_PER_M: f64 = 0.0065;
/// 해수면 표준 기압 [Pa]
pub const SEA_LEVEL_PRESSURE_PA: f64 = 101_325.0;
/// 대류권 상한 [m]. 이 위로는 성층권 물리라서 모델을 고정한다.
pub const TROPOPAUSE_ALTITUDE_M: f64 = 11_000.0;

const GRAVITY: f64 = 9.80665;
const AIR_MOLAR_MASS: f64 = 0.0289644;
const GAS_CONSTANT: f64 = 8.31447;

/// 유한하지 않은 고도는 해수면으로 본다.
pub fn sanitize_altitude(altitude_m: f64) -> f64 {
    if altitude_m.is_finite() {
        altitude_m
    } else {
        0.0
    }
}

fn model_altitude(altitude_m: f64) -> f64 {
    sanitize_altitude(altitude_m).min(TROPOPAUSE_ALTITUDE_M)
}

/// 고도에서의 ISA 기온 [K]. 대류권계면 위로는 216.65 K로 고정된다.
pub fn temperature_at_altitude_k(altitude_m: f64) -> f64 {
    SEA_LEVEL_TEMPERATURE_K - TEMPERATURE_LAPSE_RATE_K_PER_M * model_altitude(altitude_m)
}

/// 고도[m]에서의 대기압[Pa].
///
/// `P = P0·(T/T0)^(gM/RL)`, `T = T0 − L·h`.
/// 11 km 위에서는 고도를 외삽하지 않고 대류권계면 기압(약 22632 Pa)을 반환한다.
/// 해수면 아래 고도는 식을 그대로 따른다.
pub fn pressure_at_altitude(altitude_m: f64) -> f64 {
    let exponent = GRAVITY * AIR_MOLAR_MASS / (GAS_CONSTANT * TEMPERATURE_LAPSE_RATE_K_PER_M);
    let t = temperature_at_altitude_k(altitude_m);
    SEA_LEVEL_PRESSURE_PA * (t / SEA_LEVEL_TEMPERATURE_K).powf(exponent)
}
