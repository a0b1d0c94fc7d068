use crate::water::analysis::WaterAnalysis;

/// 탄산계 1단 해리 상수 pKa1 (H2CO3* ↔ HCO3-).
pub const PKA1: f64 = 6.35;
/// 탄산계 2단 해리 상수 pKa2 (HCO3- ↔ CO3^2-).
pub const PKA2: f64 = 10.33;
/// CO3 추정을 적용하는 최소 pH. 이보다 낮으면 0으로 본다.
pub const CO3_MIN_PH: f64 = 8.2;
/// 추정값 검출 한계 (mg/L).
pub const DETECTION_LIMIT_MG_PER_L: f64 = 0.001;

/// 탄산계 추정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarbonateEstimate {
    pub mg_per_l: f64,
    /// 검출 한계 미만 여부
    pub below_detection: bool,
}

impl CarbonateEstimate {
    fn from_value(value: f64) -> CarbonateEstimate {
        let v = if value.is_finite() { value.max(0.0) } else { 0.0 };
        CarbonateEstimate {
            mg_per_l: v,
            below_detection: v < DETECTION_LIMIT_MG_PER_L,
        }
    }
}

/// 알칼리도(HCO3)와 pH로 용존 CO2를 추정한다.
/// 평형식: CO2 = HCO3 × 10^(pKa1 - pH)
pub fn co2_from_alkalinity(hco3_mg_per_l: f64, ph: f64) -> CarbonateEstimate {
    if hco3_mg_per_l <= 0.0 {
        return CarbonateEstimate::from_value(0.0);
    }
    CarbonateEstimate::from_value(hco3_mg_per_l * 10f64.powf(PKA1 - ph))
}

/// 알칼리도(HCO3)와 pH로 CO3를 추정한다. pH 8.2 미만은 0으로 본다.
/// 평형식: CO3 = HCO3 × 10^(pH - pKa2)
pub fn co3_from_alkalinity(hco3_mg_per_l: f64, ph: f64) -> CarbonateEstimate {
    if hco3_mg_per_l <= 0.0 || ph < CO3_MIN_PH {
        return CarbonateEstimate::from_value(0.0);
    }
    CarbonateEstimate::from_value(hco3_mg_per_l * 10f64.powf(ph - PKA2))
}

/// 수질 분석의 CO2/CO3 필드를 현재 HCO3와 pH로 다시 추정해 채운다.
/// 사용자가 HCO3나 pH를 바꾼 뒤에 호출한다.
pub fn refresh_carbonate_estimates(water: &mut WaterAnalysis) {
    let co2 = co2_from_alkalinity(water.ions.hco3, water.ph);
    let co3 = co3_from_alkalinity(water.ions.hco3, water.ph);
    water.ions.co2 = co2.mg_per_l;
    water.ions.co3 = co3.mg_per_l;
}
