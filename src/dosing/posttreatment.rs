use crate::dosing::monthly_usage_kg;

/// CO2는 통과하고 알칼리도는 제거된 저알칼리도 생산수의 기준 pH.
pub const BASE_PERMEATE_PH: f64 = 6.2;
/// NaOH 주입 농도당 pH 상승 기울기 (pH per mg/L).
pub const NAOH_PH_SLOPE: f64 = 0.45;
/// 이 pH 미만이면 배관 부식성으로 본다.
pub const CORROSIVE_PH_LIMIT: f64 = 7.5;

/// 후처리 평가 입력.
#[derive(Debug, Clone, Copy)]
pub struct PostTreatmentInput {
    pub product_flow_m3_per_h: f64,
    pub caustic_dose_mg_per_l: f64,
}

/// 후처리 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PostTreatmentResult {
    pub final_ph: f64,
    pub corrosive: bool,
    pub naoh_monthly_kg: f64,
    pub warnings: Vec<String>,
}

/// 가성소다 주입 후 생산수 pH와 월간 사용량을 평가한다.
pub fn evaluate_posttreatment(input: &PostTreatmentInput) -> PostTreatmentResult {
    let dose = input.caustic_dose_mg_per_l.max(0.0);
    let final_ph = (BASE_PERMEATE_PH + dose * NAOH_PH_SLOPE).clamp(0.0, 14.0);
    let corrosive = final_ph < CORROSIVE_PH_LIMIT;

    let mut warnings = Vec::new();
    if corrosive {
        warnings.push(format!(
            "최종 pH {:.2}가 {} 미만입니다. 배관 부식 위험이 있으니 주입량을 늘리세요.",
            final_ph, CORROSIVE_PH_LIMIT
        ));
    }

    PostTreatmentResult {
        final_ph,
        corrosive,
        naoh_monthly_kg: monthly_usage_kg(input.product_flow_m3_per_h.max(0.0), dose),
        warnings,
    }
}
