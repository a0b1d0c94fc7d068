use serde::{Deserialize, Serialize};

/// 약품 주입량 단위. mg/L는 유량 기반 질량유량으로 환산해야 하므로
/// 일반 단위 변환기에는 포함하지 않고 주입 질량유량 계산에서만 다룬다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DoseUnit {
    MgPerL,
    LbPerHr,
    KgPerHr,
}

const KG_PER_LB: f64 = 0.4536;

impl DoseUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            DoseUnit::MgPerL => "mg/l",
            DoseUnit::LbPerHr => "lb/hr",
            DoseUnit::KgPerHr => "kg/hr",
        }
    }
}

/// 주입량을 약품 질량유량 [kg/h] 으로 환산한다.
/// mg/L 단위는 공급수 유량 [m³/h] 을 곱해 환산한다.
pub fn chemical_feed_kg_per_h(dose: f64, unit: DoseUnit, feed_flow_m3_per_h: f64) -> f64 {
    match unit {
        DoseUnit::MgPerL => dose * feed_flow_m3_per_h / 1000.0,
        DoseUnit::LbPerHr => dose * KG_PER_LB,
        DoseUnit::KgPerHr => dose,
    }
}
