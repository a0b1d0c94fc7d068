use crate::dosing::monthly_usage_kg;
use crate::projection::hydraulics::concentration_factor;
use crate::water::analysis::WaterAnalysis;
use crate::water::scaling::{
    langelier_index, silica_saturation_pct, LSI_DANGER_THRESHOLD, SILICA_SATURATION_LIMIT_PCT,
};

/// 전처리 간이 평가 입력.
#[derive(Debug, Clone, Copy)]
pub struct PretreatmentInput<'a> {
    pub water: &'a WaterAnalysis,
    /// 계획 회수율 (%)
    pub recovery_pct: f64,
    pub feed_flow_m3_per_h: f64,
    pub antiscalant_dose_mg_per_l: f64,
    pub sbs_dose_mg_per_l: f64,
}

/// 전처리 간이 평가 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct PretreatmentResult {
    pub concentration_factor: f64,
    pub concentrate_lsi: f64,
    pub silica_saturation_pct: f64,
    pub lsi_danger: bool,
    pub silica_danger: bool,
    pub antiscalant_monthly_kg: f64,
    pub sbs_monthly_kg: f64,
    pub warnings: Vec<String>,
}

/// 본 프로젝션 전에 농축수 스케일 위험을 간이 평가한다.
///
/// 농축 배율 CF = 1/(1-r)을 Ca/HCO3/실리카에 적용하고, TDS는 (Na+Cl)×CF
/// 근사치를 쓴다. 회수율 100% 이상 입력은 CF 1, 지수 0으로 처리한다.
pub fn evaluate_pretreatment(input: &PretreatmentInput) -> PretreatmentResult {
    let r = if input.recovery_pct.is_finite() {
        input.recovery_pct / 100.0
    } else {
        0.0
    };

    let (cf, lsi, silica) = if r >= 1.0 {
        (1.0, 0.0, 0.0)
    } else {
        let cf = concentration_factor(r.max(0.0));
        let ions = &input.water.ions;
        let ph = if input.water.ph.is_finite() && input.water.ph != 0.0 {
            input.water.ph
        } else {
            7.5
        };
        let temp = if input.water.temperature_c.is_finite() && input.water.temperature_c != 0.0 {
            input.water.temperature_c
        } else {
            25.0
        };
        let tds_proxy = (ions.na + ions.cl) * cf;
        let indices = langelier_index(ions.ca * cf, ions.hco3 * cf, tds_proxy, temp, ph);
        let silica = silica_saturation_pct(ions.sio2 * cf);
        (cf, indices.lsi, silica)
    };

    let lsi_danger = lsi > LSI_DANGER_THRESHOLD;
    let silica_danger = silica > SILICA_SATURATION_LIMIT_PCT;

    let feed_flow = input.feed_flow_m3_per_h.max(0.0);
    let as_dose = input.antiscalant_dose_mg_per_l.max(0.0);
    let sbs_dose = input.sbs_dose_mg_per_l.max(0.0);

    let mut warnings = Vec::new();
    if lsi_danger {
        warnings.push(format!(
            "농축수 LSI {:.2}가 {}를 초과합니다. 안티스칼란트 주입 또는 산 주입을 검토하세요.",
            lsi, LSI_DANGER_THRESHOLD
        ));
    }
    if silica_danger {
        warnings.push(format!(
            "농축수 실리카 포화도 {:.0}%가 한계를 초과합니다. 회수율을 낮추거나 실리카 분산제를 검토하세요.",
            silica
        ));
    }

    PretreatmentResult {
        concentration_factor: cf,
        concentrate_lsi: lsi,
        silica_saturation_pct: silica,
        lsi_danger,
        silica_danger,
        antiscalant_monthly_kg: monthly_usage_kg(feed_flow, as_dose),
        sbs_monthly_kg: monthly_usage_kg(feed_flow, sbs_dose),
        warnings,
    }
}
