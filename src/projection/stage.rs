use serde::{Deserialize, Serialize};

use crate::projection::hydraulics::osmotic_pressure_psi;

/// 엘리먼트 수를 플럭스 기준 유효 면적으로 바꾸는 환산 계수.
pub const ELEMENT_FLUX_FACTOR: f64 = 0.0556;
/// 베셀당 공급 유량이 이 값을 넘으면 난류 영역으로 보고 차압 지수를 올린다 (m³/h).
pub const VESSEL_FLOW_TURBULENT_M3_PER_H: f64 = 4.5;
/// 난류 영역에서 적용하는 최소 차압 지수.
pub const MIN_TURBULENT_DP_EXPONENT: f64 = 1.75;

/// 스테이지 구성 (저장/불러오기 대상).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StageConfig {
    /// 막 카탈로그 id
    pub membrane_id: String,
    pub elements_per_vessel: u32,
    pub vessels: u32,
}

impl Default for StageConfig {
    fn default() -> Self {
        StageConfig {
            membrane_id: crate::membrane_db::DEFAULT_MEMBRANE_ID.to_string(),
            elements_per_vessel: 7,
            vessels: 0,
        }
    }
}

impl StageConfig {
    /// 베셀과 엘리먼트가 모두 1 이상인 스테이지만 계산에 참여한다.
    pub fn is_active(&self) -> bool {
        self.vessels > 0 && self.elements_per_vessel > 0
    }
}

/// 스테이지 수리 계산 입력. 유량은 m³/h, 압력은 psi.
#[derive(Debug, Clone, Copy)]
pub struct StageComputeInput {
    /// 활성 스테이지 순번 (1부터)
    pub index: usize,
    pub vessels: u32,
    pub elements_per_vessel: u32,
    pub feed_flow_m3_per_h: f64,
    pub permeate_flow_m3_per_h: f64,
    pub feed_tds_mg_per_l: f64,
    pub temperature_c: f64,
    /// None이면 선두 스테이지로 보고 플럭스 기반으로 공급 압력을 산정한다.
    /// Some이면 앞 스테이지 농축수 압력을 그대로 이어받는다.
    pub inlet_pressure_psi: Option<f64>,
    pub a_value: f64,
    pub kfb: f64,
    pub dp_exponent: f64,
    pub flux_decline_pct_per_year: f64,
    pub age_years: f64,
    pub fouling_factor: f64,
}

/// 스테이지 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StageResult {
    pub index: usize,
    pub vessels: u32,
    pub elements_per_vessel: u32,
    pub feed_flow_m3_per_h: f64,
    pub permeate_flow_m3_per_h: f64,
    pub concentrate_flow_m3_per_h: f64,
    pub feed_flow_per_vessel_m3_per_h: f64,
    pub concentrate_flow_per_vessel_m3_per_h: f64,
    pub avg_flux_gfd: f64,
    pub highest_flux_gfd: f64,
    /// 농도분극 계수 beta
    pub beta: f64,
    pub stage_recovery_pct: f64,
    pub feed_pressure_psi: f64,
    pub concentrate_pressure_psi: f64,
    pub pressure_drop_psi: f64,
    pub feed_tds_mg_per_l: f64,
    pub concentrate_tds_mg_per_l: f64,
}

/// 단일 스테이지의 유량/플럭스/압력을 계산한다.
pub fn compute_stage(input: StageComputeInput) -> StageResult {
    let vessels = input.vessels as f64;
    let elements = input.elements_per_vessel as f64;

    let concentrate_flow = input.feed_flow_m3_per_h - input.permeate_flow_m3_per_h;
    let stage_recovery = if input.feed_flow_m3_per_h > 0.0 {
        input.permeate_flow_m3_per_h / input.feed_flow_m3_per_h
    } else {
        0.0
    };

    let feed_per_vessel = input.feed_flow_m3_per_h / vessels;
    let concentrate_per_vessel = concentrate_flow / vessels;
    let avg_per_vessel = (feed_per_vessel + concentrate_per_vessel) / 2.0;

    let effective_area = vessels * elements * ELEMENT_FLUX_FACTOR;
    let avg_flux = input.permeate_flow_m3_per_h / effective_area;
    let beta = (0.7 * stage_recovery).exp();
    let highest_flux = avg_flux * (1.0 + stage_recovery * 0.32);

    // 막 노화에 따른 투과계수 저하
    let mut a_effective =
        input.a_value * (1.0 - input.flux_decline_pct_per_year / 100.0).powf(input.age_years);
    if !a_effective.is_finite() || a_effective <= 0.0 {
        a_effective = input.a_value;
    }

    let feed_pressure = match input.inlet_pressure_psi {
        Some(p) => p,
        None => {
            (avg_flux / a_effective) * input.fouling_factor * ELEMENT_FLUX_FACTOR
                + osmotic_pressure_psi(input.feed_tds_mg_per_l, input.temperature_c)
        }
    };

    let mut dp_exponent = input.dp_exponent;
    if feed_per_vessel > VESSEL_FLOW_TURBULENT_M3_PER_H {
        dp_exponent = dp_exponent.max(MIN_TURBULENT_DP_EXPONENT);
    }
    let pressure_drop =
        elements * input.kfb * avg_per_vessel.powf(dp_exponent) * (1.0 + 0.1 * (beta - 1.0));
    let concentrate_pressure = feed_pressure - pressure_drop;

    let retained = (1.0 - stage_recovery).max(1e-9);
    let concentrate_tds = input.feed_tds_mg_per_l / retained;

    StageResult {
        index: input.index,
        vessels: input.vessels,
        elements_per_vessel: input.elements_per_vessel,
        feed_flow_m3_per_h: input.feed_flow_m3_per_h,
        permeate_flow_m3_per_h: input.permeate_flow_m3_per_h,
        concentrate_flow_m3_per_h: concentrate_flow,
        feed_flow_per_vessel_m3_per_h: feed_per_vessel,
        concentrate_flow_per_vessel_m3_per_h: concentrate_per_vessel,
        avg_flux_gfd: avg_flux,
        highest_flux_gfd: highest_flux,
        beta,
        stage_recovery_pct: stage_recovery * 100.0,
        feed_pressure_psi: feed_pressure,
        concentrate_pressure_psi: concentrate_pressure,
        pressure_drop_psi: pressure_drop,
        feed_tds_mg_per_l: input.feed_tds_mg_per_l,
        concentrate_tds_mg_per_l: concentrate_tds,
    }
}
