//! Antoine 증기압 식 풀이.

use crate::substance::AntoineCoefficients;
use crate::units::pressure::PA_PER_MMHG;

const DENOMINATOR_EPSILON: f64 = 1e-10;

/// 실험으로 검증된 온도 구간 [°C]. 데이터가 없는 쪽은 `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct VerifiedRange {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl VerifiedRange {
    /// 값이 구간 밖인지 판정한다. 경계가 없는 쪽은 검사하지 않는다.
    pub fn excludes(&self, value: f64) -> bool {
        self.min.is_some_and(|min| value < min) || self.max.is_some_and(|max| value > max)
    }
}

/// 주어진 압력에서의 Antoine 끓는 온도.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AntoineSolution {
    pub temperature_c: f64,
    pub is_extrapolated: bool,
    pub verified_range: VerifiedRange,
}

/// 증기압이 `pressure_pa`와 같아지는 온도를 구한다.
///
/// 계수가 없거나 A/B/C 중 0(미설정)이 있으면, 또는 분모 `A − log10(P)`가
/// 0에 가까우면 `None`을 반환하고 호출자는 선형 근사로 넘어간다.
/// 결과는 검증 범위로 자르지 않는다. 범위 밖이면 `is_extrapolated`만 켠다.
pub fn solve_antoine(
    pressure_pa: f64,
    coeffs: Option<&AntoineCoefficients>,
) -> Option<AntoineSolution> {
    let coeffs = coeffs.filter(|c| c.is_usable())?;
    if !(pressure_pa.is_finite() && pressure_pa > 0.0) {
        return None;
    }

    let log_p = (pressure_pa / PA_PER_MMHG).log10();
    let denominator = coeffs.a - log_p;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return None;
    }

    let temperature_c = coeffs.b / denominator - coeffs.c;
    if !temperature_c.is_finite() {
        return None;
    }

    let verified_range = VerifiedRange {
        min: coeffs.t_min_c,
        max: coeffs.t_max_c,
    };
    Some(AntoineSolution {
        temperature_c,
        is_extrapolated: verified_range.excludes(temperature_c),
        verified_range,
    })
}

/// 온도 [°C]에서의 증기압 [Pa].
pub fn vapor_pressure_pa(temp_c: f64, coeffs: &AntoineCoefficients) -> Option<f64> {
    if !coeffs.is_usable() || !temp_c.is_finite() {
        return None;
    }
    let denominator = coeffs.c + temp_c;
    if denominator.abs() < DENOMINATOR_EPSILON {
        return None;
    }
    let mmhg = 10f64.powf(coeffs.a - coeffs.b / denominator);
    mmhg.is_finite().then_some(mmhg * PA_PER_MMHG)
}
