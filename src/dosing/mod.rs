//! 전처리/후처리 약품 주입 평가 모듈 모음.

pub mod posttreatment;
pub mod pretreatment;

use serde::{Deserialize, Serialize};

pub use posttreatment::{evaluate_posttreatment, PostTreatmentInput, PostTreatmentResult};
pub use pretreatment::{evaluate_pretreatment, PretreatmentInput, PretreatmentResult};

/// 주입 약품 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChemicalType {
    None,
    Antiscalant,
    #[serde(rename = "SBS")]
    Sbs,
    Acid,
    Caustic,
}

impl ChemicalType {
    pub fn label(&self) -> &'static str {
        match self {
            ChemicalType::None => "없음",
            ChemicalType::Antiscalant => "안티스칼란트",
            ChemicalType::Sbs => "SBS (아황산수소나트륨)",
            ChemicalType::Acid => "황산 (H2SO4)",
            ChemicalType::Caustic => "가성소다 (NaOH)",
        }
    }
}

/// 월간 약품 사용량 (kg/월) = 유량(m³/h) × 주입 농도(mg/L) × 24 × 30 / 1000.
pub fn monthly_usage_kg(flow_m3_per_h: f64, dose_mg_per_l: f64) -> f64 {
    flow_m3_per_h * dose_mg_per_l * 24.0 * 30.0 / 1000.0
}
