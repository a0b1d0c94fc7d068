use serde::{Deserialize, Serialize};

use crate::dosing::ChemicalType;
use crate::membrane_db::{membrane_or_default, MembraneData, DEFAULT_MEMBRANE};
use crate::projection::hydraulics::{
    balance_flows, clamp_recovery_pct, log_mean_concentration_factor, osmotic_pressure_psi,
};
use crate::projection::solutes::{compute_solute_passage, SolutePassageInput};
use crate::projection::stage::{
    compute_stage, StageComputeInput, StageConfig, StageResult, ELEMENT_FLUX_FACTOR,
    VESSEL_FLOW_TURBULENT_M3_PER_H,
};
use crate::units::{chemical_feed_kg_per_h, from_m3_per_h, to_m3_per_h, DoseUnit, FlowUnit};
use crate::water::analysis::{IonComposition, WaterAnalysis};
use crate::water::scaling::{langelier_index, saturation_levels, SaturationLevels, ScalingIndices};

/// 시스템 최고 플럭스 경고 한계 (gfd).
pub const HIGHEST_FLUX_LIMIT_GFD: f64 = 20.0;

/// TDS → 전기전도도 추정 계수 (µS/cm per mg/L).
pub const FEED_CONDUCTIVITY_FACTOR: f64 = 1.97;
pub const CONCENTRATE_CONDUCTIVITY_FACTOR: f64 = 1.78;
pub const PERMEATE_CONDUCTIVITY_FACTOR: f64 = 2.29;

/// TDS에서 전기전도도를 추정한다 (µS/cm). 표시용 근사치.
pub fn estimate_conductivity_us_per_cm(tds_mg_per_l: f64, factor: f64) -> f64 {
    tds_mg_per_l * factor
}

/// 시스템 구성 (저장/불러오기 대상).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// 목표 생산수량 (flow_unit 기준)
    pub permeate_flow: f64,
    pub flow_unit: FlowUnit,
    /// 시스템 회수율 (%)
    pub recovery_pct: f64,
    pub num_trains: u32,
    /// None이면 수질 분석의 pH를 쓴다.
    pub feed_ph: Option<f64>,
    pub membrane_age_years: f64,
    /// 연간 플럭스 감소율 (%/yr)
    pub flux_decline_pct_per_year: f64,
    pub fouling_factor: f64,
    /// 연간 염 통과 증가율 (%/yr)
    pub sp_increase_pct_per_year: f64,
    pub chemical: ChemicalType,
    pub chemical_dose: f64,
    pub dose_unit: DoseUnit,
    /// 약품 원액 농도 (%)
    pub chemical_strength_pct: f64,
    pub stages: Vec<StageConfig>,
}

impl Default for SystemConfig {
    fn default() -> Self {
        SystemConfig {
            permeate_flow: 0.0,
            flow_unit: FlowUnit::M3PerH,
            recovery_pct: 15.0,
            num_trains: 1,
            feed_ph: None,
            membrane_age_years: 0.0,
            flux_decline_pct_per_year: 0.0,
            fouling_factor: 1.0,
            sp_increase_pct_per_year: 0.0,
            chemical: ChemicalType::None,
            chemical_dose: 0.0,
            dose_unit: DoseUnit::MgPerL,
            chemical_strength_pct: 100.0,
            stages: vec![StageConfig {
                membrane_id: crate::membrane_db::DEFAULT_MEMBRANE_ID.to_string(),
                elements_per_vessel: 7,
                vessels: 3,
            }],
        }
    }
}

/// 흐름별 수질 (이온 조성 + TDS + pH).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamQuality {
    pub ions: IonComposition,
    pub tds_mg_per_l: f64,
    pub ph: f64,
}

/// 프로젝션 결과. 호출마다 새로 만들고 이후 수정하지 않는다.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub flow_unit: FlowUnit,
    pub recovery_pct: f64,
    pub num_trains: u32,
    pub feed_flow_m3_per_h: f64,
    pub permeate_flow_m3_per_h: f64,
    pub concentrate_flow_m3_per_h: f64,
    /// flow_unit 기준 표시용 유량
    pub feed_flow_display: f64,
    pub permeate_flow_display: f64,
    pub concentrate_flow_display: f64,
    pub total_plant_feed_flow_m3_per_h: f64,
    pub total_plant_product_flow_m3_per_h: f64,
    pub avg_flux_gfd: f64,
    pub highest_flux_gfd: f64,
    pub highest_beta: f64,
    /// 1단 공급 압력 (psi)
    pub feed_pressure_psi: f64,
    /// 마지막 단 농축수 압력 (psi)
    pub concentrate_pressure_psi: f64,
    pub feed_flow_per_vessel_m3_per_h: f64,
    pub concentrate_flow_per_vessel_m3_per_h: f64,
    pub feed_osmotic_pressure_psi: f64,
    pub concentrate_osmotic_pressure_psi: f64,
    /// 트레인당 약품 주입량 (kg/h)
    pub chemical_feed_kg_per_h: f64,
    pub stage_results: Vec<StageResult>,
    pub feed: StreamQuality,
    pub permeate: StreamQuality,
    pub concentrate: StreamQuality,
    pub concentrate_scaling: ScalingIndices,
    pub concentrate_saturation: SaturationLevels,
    pub design_warnings: Vec<String>,
}

/// 수질과 시스템 구성으로 전체 프로젝션을 수행한다.
///
/// 어떤 입력이든 결과를 돌려주는 전함수다. 범위를 벗어난 값은 정리하고
/// 설계상 문제는 경고 목록으로 알린다.
pub fn run_projection(water: &WaterAnalysis, config: &SystemConfig) -> ProjectionResult {
    let water = water.sanitized();
    let feed_tds = water.tds();
    let feed_ph = match config.feed_ph {
        Some(ph) if ph.is_finite() => ph.clamp(0.0, 14.0),
        _ => water.ph,
    };

    let recovery_pct = clamp_recovery_pct(config.recovery_pct);
    let r = recovery_pct / 100.0;

    let target_permeate = if config.permeate_flow.is_finite() && config.permeate_flow > 0.0 {
        config.permeate_flow
    } else {
        0.0
    };
    let permeate_m3h = to_m3_per_h(target_permeate, config.flow_unit);
    let balance = balance_flows(permeate_m3h, r);

    // 스테이지 캐스케이드: 앞 단 농축수가 다음 단 공급수가 된다.
    let active: Vec<&StageConfig> = config.stages.iter().filter(|s| s.is_active()).collect();
    let baseline_membrane: &MembraneData = active
        .first()
        .map(|s| membrane_or_default(&s.membrane_id))
        .unwrap_or(&DEFAULT_MEMBRANE);

    let fouling_factor = if config.fouling_factor.is_finite() && config.fouling_factor > 0.0 {
        config.fouling_factor
    } else {
        1.0
    };

    let mut stage_results: Vec<StageResult> = Vec::with_capacity(active.len());
    let mut stage_feed_flow = balance.feed_m3_per_h;
    let mut stage_feed_tds = feed_tds;
    let mut inlet_pressure: Option<f64> = None;

    for (i, stage) in active.iter().enumerate() {
        let membrane = membrane_or_default(&stage.membrane_id);
        let stage_permeate = if i == 0 {
            balance.permeate_m3_per_h
        } else {
            stage_feed_flow * r
        };

        let result = compute_stage(StageComputeInput {
            index: i + 1,
            vessels: stage.vessels,
            elements_per_vessel: stage.elements_per_vessel,
            feed_flow_m3_per_h: stage_feed_flow,
            permeate_flow_m3_per_h: stage_permeate,
            feed_tds_mg_per_l: stage_feed_tds,
            temperature_c: water.temperature_c,
            inlet_pressure_psi: inlet_pressure,
            a_value: membrane.a_value,
            kfb: membrane.kfb,
            dp_exponent: membrane.dp_exponent,
            flux_decline_pct_per_year: config.flux_decline_pct_per_year,
            age_years: config.membrane_age_years,
            fouling_factor,
        });

        stage_feed_flow = result.concentrate_flow_m3_per_h;
        stage_feed_tds = result.concentrate_tds_mg_per_l;
        inlet_pressure = Some(result.concentrate_pressure_psi);
        stage_results.push(result);
    }

    // 이온 통과는 스테이지별이 아니라 전체 트레인 기준으로 1회 계산한다.
    let passage = compute_solute_passage(&SolutePassageInput {
        feed_ions: &water.ions,
        feed_ph,
        recovery_fraction: r,
        base_rejection_pct: baseline_membrane.rejection_pct,
        overrides: baseline_membrane.overrides,
        age_years: config.membrane_age_years,
        sp_increase_pct_per_year: config.sp_increase_pct_per_year,
    });

    let cf = log_mean_concentration_factor(r);
    let permeate_ph = (feed_ph - 2.7).clamp(0.0, 14.0);
    let concentrate_ph = (feed_ph + cf.max(1.0).log10() * 0.3).clamp(0.0, 14.0);

    let concentrate_scaling = langelier_index(
        passage.concentrate.ca,
        passage.concentrate.hco3,
        passage.concentrate_tds_mg_per_l,
        water.temperature_c,
        concentrate_ph,
    );
    let concentrate_saturation = saturation_levels(&passage.concentrate);

    let feed_osmotic = osmotic_pressure_psi(feed_tds, water.temperature_c);
    let concentrate_osmotic =
        osmotic_pressure_psi(passage.concentrate_tds_mg_per_l, water.temperature_c);

    // 시스템 집계
    let total_area: f64 = stage_results
        .iter()
        .map(|s| s.vessels as f64 * s.elements_per_vessel as f64 * ELEMENT_FLUX_FACTOR)
        .sum();
    let total_stage_permeate: f64 = stage_results.iter().map(|s| s.permeate_flow_m3_per_h).sum();
    let avg_flux = if total_area > 0.0 {
        total_stage_permeate / total_area
    } else {
        0.0
    };
    let highest_flux = stage_results
        .iter()
        .map(|s| s.highest_flux_gfd)
        .fold(0.0, f64::max);
    let highest_beta = stage_results.iter().map(|s| s.beta).fold(0.0, f64::max);

    let feed_pressure = stage_results.first().map_or(0.0, |s| s.feed_pressure_psi);
    let concentrate_pressure = stage_results
        .last()
        .map_or(0.0, |s| s.concentrate_pressure_psi);
    let feed_per_vessel = stage_results
        .first()
        .map_or(0.0, |s| s.feed_flow_per_vessel_m3_per_h);
    let concentrate_per_vessel = stage_results
        .last()
        .map_or(0.0, |s| s.concentrate_flow_per_vessel_m3_per_h);

    let trains = config.num_trains.max(1);

    let dose = if config.chemical_dose.is_finite() && config.chemical_dose > 0.0 {
        config.chemical_dose
    } else {
        0.0
    };
    let dosing_flow = match config.chemical {
        ChemicalType::Caustic => balance.permeate_m3_per_h,
        _ => balance.feed_m3_per_h,
    };
    let chemical_feed = match config.chemical {
        ChemicalType::None => 0.0,
        _ => chemical_feed_kg_per_h(dose, config.dose_unit, dosing_flow),
    };

    let mut warnings = Vec::new();
    if highest_flux > HIGHEST_FLUX_LIMIT_GFD {
        warnings.push(format!(
            "최고 플럭스 {:.1} gfd가 한계 {:.0} gfd를 초과합니다.",
            highest_flux, HIGHEST_FLUX_LIMIT_GFD
        ));
    }
    for s in &stage_results {
        if s.feed_flow_per_vessel_m3_per_h > VESSEL_FLOW_TURBULENT_M3_PER_H {
            warnings.push(format!(
                "{}단 베셀당 공급 유량 {:.2} m³/h가 {} m³/h를 초과합니다.",
                s.index, s.feed_flow_per_vessel_m3_per_h, VESSEL_FLOW_TURBULENT_M3_PER_H
            ));
        }
        if s.concentrate_pressure_psi < 0.0 {
            warnings.push(format!(
                "{}단 농축수 압력이 음수입니다. 어레이 구성을 확인하세요.",
                s.index
            ));
        }
    }
    if !feed_osmotic.is_finite()
        || feed_osmotic < 0.0
        || !concentrate_osmotic.is_finite()
        || concentrate_osmotic < 0.0
    {
        warnings.push("삼투압 계산 결과가 유효하지 않습니다. 수질 입력을 확인하세요.".to_string());
    }

    ProjectionResult {
        flow_unit: config.flow_unit,
        recovery_pct,
        num_trains: trains,
        feed_flow_m3_per_h: balance.feed_m3_per_h,
        permeate_flow_m3_per_h: balance.permeate_m3_per_h,
        concentrate_flow_m3_per_h: balance.concentrate_m3_per_h,
        feed_flow_display: from_m3_per_h(balance.feed_m3_per_h, config.flow_unit),
        permeate_flow_display: from_m3_per_h(balance.permeate_m3_per_h, config.flow_unit),
        concentrate_flow_display: from_m3_per_h(balance.concentrate_m3_per_h, config.flow_unit),
        total_plant_feed_flow_m3_per_h: balance.feed_m3_per_h * trains as f64,
        total_plant_product_flow_m3_per_h: balance.permeate_m3_per_h * trains as f64,
        avg_flux_gfd: avg_flux,
        highest_flux_gfd: highest_flux,
        highest_beta,
        feed_pressure_psi: feed_pressure,
        concentrate_pressure_psi: concentrate_pressure,
        feed_flow_per_vessel_m3_per_h: feed_per_vessel,
        concentrate_flow_per_vessel_m3_per_h: concentrate_per_vessel,
        feed_osmotic_pressure_psi: feed_osmotic,
        concentrate_osmotic_pressure_psi: concentrate_osmotic,
        chemical_feed_kg_per_h: chemical_feed,
        stage_results,
        feed: StreamQuality {
            ions: water.ions,
            tds_mg_per_l: feed_tds,
            ph: feed_ph,
        },
        permeate: StreamQuality {
            ions: passage.permeate,
            tds_mg_per_l: passage.permeate_tds_mg_per_l,
            ph: permeate_ph,
        },
        concentrate: StreamQuality {
            ions: passage.concentrate,
            tds_mg_per_l: passage.concentrate_tds_mg_per_l,
            ph: concentrate_ph,
        },
        concentrate_scaling,
        concentrate_saturation,
        design_warnings: warnings,
    }
}
