use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 Pa(절대압)이다.
///
/// 대기압 모델과 Antoine 식이 모두 절대압을 다루므로 게이지 개념은 두지 않는다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Pascal,
    HectoPascal,
    KiloPascal,
    Bar,
    Atm,
    MmHg,
    Psi,
}

/// Antoine 계수와 동일한 환산값을 쓴다.
pub const PA_PER_MMHG: f64 = 133.322;
pub const PA_PER_ATM: f64 = 101_325.0;
const PA_PER_BAR: f64 = 100_000.0;
const PA_PER_PSI: f64 = 6_894.757;

impl PressureUnit {
    /// 표시용 기호.
    pub fn symbol(self) -> &'static str {
        match self {
            PressureUnit::Pascal => "Pa",
            PressureUnit::HectoPascal => "hPa",
            PressureUnit::KiloPascal => "kPa",
            PressureUnit::Bar => "bar",
            PressureUnit::Atm => "atm",
            PressureUnit::MmHg => "mmHg",
            PressureUnit::Psi => "psi",
        }
    }
}

/// 주어진 압력을 Pa 로 변환한다.
pub fn to_pascal(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value,
        PressureUnit::HectoPascal => value * 100.0,
        PressureUnit::KiloPascal => value * 1000.0,
        PressureUnit::Bar => value * PA_PER_BAR,
        PressureUnit::Atm => value * PA_PER_ATM,
        PressureUnit::MmHg => value * PA_PER_MMHG,
        PressureUnit::Psi => value * PA_PER_PSI,
    }
}

/// Pa 값을 원하는 단위로 변환한다.
pub fn from_pascal(value_pa: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Pascal => value_pa,
        PressureUnit::HectoPascal => value_pa / 100.0,
        PressureUnit::KiloPascal => value_pa / 1000.0,
        PressureUnit::Bar => value_pa / PA_PER_BAR,
        PressureUnit::Atm => value_pa / PA_PER_ATM,
        PressureUnit::MmHg => value_pa / PA_PER_MMHG,
        PressureUnit::Psi => value_pa / PA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let pa = to_pascal(value, from);
    from_pascal(pa, to)
}
