use serde::{Deserialize, Serialize};

/// 압력 단위. 내부 기준은 항상 psi이다.
/// 막 공정 계산(공급압/농축압/삼투압)이 psi 기준이므로 psi를 기준 단위로 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PressureUnit {
    Psi,
    Bar,
    KiloPascal,
}

const BAR_PER_PSI: f64 = 0.0689476;
const KPA_PER_PSI: f64 = 6.89476;

impl PressureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            PressureUnit::Psi => "psi",
            PressureUnit::Bar => "bar",
            PressureUnit::KiloPascal => "kPa",
        }
    }
}

/// 주어진 압력을 psi 로 변환한다.
pub fn to_psi(value: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value,
        PressureUnit::Bar => value / BAR_PER_PSI,
        PressureUnit::KiloPascal => value / KPA_PER_PSI,
    }
}

/// psi 값을 원하는 단위로 변환한다.
pub fn from_psi(value_psi: f64, unit: PressureUnit) -> f64 {
    match unit {
        PressureUnit::Psi => value_psi,
        PressureUnit::Bar => value_psi * BAR_PER_PSI,
        PressureUnit::KiloPascal => value_psi * KPA_PER_PSI,
    }
}

/// 압력을 원하는 단위로 변환한다.
pub fn convert_pressure(value: f64, from: PressureUnit, to: PressureUnit) -> f64 {
    let psi = to_psi(value, from);
    from_psi(psi, to)
}
