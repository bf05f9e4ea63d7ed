use serde::{Deserialize, Serialize};

/// 에너지 단위. 내부 기준은 줄(J)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EnergyUnit {
    Joule,
    Kilojoule,
    KiloCalorie,
    WattHour,
}

impl EnergyUnit {
    pub fn symbol(self) -> &'static str {
        match self {
            EnergyUnit::Joule => "J",
            EnergyUnit::Kilojoule => "kJ",
            EnergyUnit::KiloCalorie => "kcal",
            EnergyUnit::WattHour => "Wh",
        }
    }
}

fn to_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value * 1000.0,
        EnergyUnit::KiloCalorie => value * 4184.0,
        EnergyUnit::WattHour => value * 3600.0,
    }
}

fn from_joule(value: f64, unit: EnergyUnit) -> f64 {
    match unit {
        EnergyUnit::Joule => value,
        EnergyUnit::Kilojoule => value / 1000.0,
        EnergyUnit::KiloCalorie => value / 4184.0,
        EnergyUnit::WattHour => value / 3600.0,
    }
}

/// 에너지를 변환한다. 히터 출력(W)×시간(s) 누적값을 Wh 로 보여줄 때 쓴다.
pub fn convert_energy(value: f64, from: EnergyUnit, to: EnergyUnit) -> f64 {
    let j = to_joule(value, from);
    from_joule(j, to)
}
