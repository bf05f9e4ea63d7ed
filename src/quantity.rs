/// 변환기가 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Temperature,
    Pressure,
    Mass,
    Energy,
}

impl QuantityKind {
    /// CLI 인자 문자열을 물리량으로 해석한다.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "temperature" | "temp" | "t" => Some(QuantityKind::Temperature),
            "pressure" | "p" => Some(QuantityKind::Pressure),
            "mass" | "m" => Some(QuantityKind::Mass),
            "energy" | "e" => Some(QuantityKind::Energy),
            _ => None,
        }
    }
}
