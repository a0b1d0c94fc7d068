use std::io::{self, Write};

use crate::app::{AppError, Session};
use crate::config::Config;
use crate::conversion;
use crate::dosing::{
    evaluate_posttreatment, evaluate_pretreatment, ChemicalType, PostTreatmentInput,
    PretreatmentInput,
};
use crate::i18n::{keys, Translator};
use crate::membrane_db;
use crate::projection::engine::{
    estimate_conductivity_us_per_cm, run_projection, ProjectionResult, SystemConfig,
    CONCENTRATE_CONDUCTIVITY_FACTOR, FEED_CONDUCTIVITY_FACTOR, PERMEATE_CONDUCTIVITY_FACTOR,
};
use crate::projection::hydraulics::{balance_flows, clamp_recovery_pct};
use crate::projection::stage::StageConfig;
use crate::projection::validation::{validate_design, CheckStatus};
use crate::quantity::QuantityKind;
use crate::units::{to_m3_per_h, DoseUnit, FlowUnit, FluxUnit, PressureUnit};
use crate::water::analysis::{as_caco3, quick_osmotic_pressure_psi, Ion, WaterAnalysis};
use crate::water::balance::{auto_balance, ionic_balance};
use crate::water::carbonate::{
    self, co2_from_alkalinity, co3_from_alkalinity, CarbonateEstimate,
};
use crate::water::profiles;
use crate::water::scaling::{langelier_index, saturation_levels};

/// 메인 메뉴 선택지.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    UnitConversion,
    WaterAnalysis,
    Projection,
    PreTreatment,
    PostTreatment,
    Settings,
    Exit,
}

/// 메인 메뉴를 출력하고 유효한 선택이 나올 때까지 입력을 받는다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_UNIT_CONVERSION));
    println!("{}", tr.t(keys::MAIN_MENU_WATER));
    println!("{}", tr.t(keys::MAIN_MENU_PROJECTION));
    println!("{}", tr.t(keys::MAIN_MENU_PRETREATMENT));
    println!("{}", tr.t(keys::MAIN_MENU_POSTTREATMENT));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));

    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::UnitConversion),
            "2" => return Ok(MenuChoice::WaterAnalysis),
            "3" => return Ok(MenuChoice::Projection),
            "4" => return Ok(MenuChoice::PreTreatment),
            "5" => return Ok(MenuChoice::PostTreatment),
            "6" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 단위 변환기. 물리량 번호와 단위 문자열을 받아 변환 결과를 출력한다.
pub fn handle_unit_conversion(tr: &Translator) -> Result<(), AppError> {
    println!("{}", tr.t(keys::UNIT_CONVERSION_HEADING));
    println!("{}", tr.t(keys::HELP_UNIT_CONVERSION));
    println!("{}", tr.t(keys::UNIT_CONVERSION_OPTIONS));

    let kind = loop {
        let sel = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_KIND))?;
        match map_quantity(sel.trim()) {
            Some(kind) => break kind,
            None => println!("{}", tr.t(keys::UNIT_CONVERSION_UNSUPPORTED)),
        }
    };

    let value = read_f64(tr, tr.t(keys::UNIT_CONVERSION_PROMPT_VALUE))?;
    let from_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_FROM_UNIT))?;
    let to_unit = read_line(tr.t(keys::UNIT_CONVERSION_PROMPT_TO_UNIT))?;

    let converted = conversion::convert(kind, value, from_unit.trim(), to_unit.trim())?;
    println!(
        "{} {} {}",
        tr.t(keys::UNIT_CONVERSION_RESULT),
        converted,
        to_unit.trim()
    );
    Ok(())
}

fn map_quantity(sel: &str) -> Option<QuantityKind> {
    match sel {
        "1" => Some(QuantityKind::Flow),
        "2" => Some(QuantityKind::Flux),
        "3" => Some(QuantityKind::Pressure),
        "4" => Some(QuantityKind::Temperature),
        _ => None,
    }
}

/// 수질 분석 메뉴: 이온 입력, TDS 프로파일 합성, 자동 밸런스, 요약.
pub fn handle_water_analysis(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WATER_HEADING));
    println!("{}", tr.t(keys::HELP_WATER));
    println!("{}", tr.t(keys::WATER_OPTIONS));

    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => enter_ions(tr, session)?,
        "2" => synthesize_from_tds(tr, session)?,
        "3" => run_auto_balance(tr, session),
        "4" => print_water_summary(tr, &session.water),
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn enter_ions(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    for ion in Ion::ALL {
        // CO2/CO3는 입력받지 않고 pH와 HCO3에서 추정한다.
        if matches!(ion, Ion::Co2 | Ion::Co3) {
            continue;
        }
        let prompt = format!("  {} [mg/L]: ", ion.symbol());
        let value = read_f64(tr, &prompt)?;
        session.water.ions.set(ion, value);
    }
    session.water.ph = read_f64(tr, tr.t(keys::WATER_PROMPT_PH))?;
    session.water.temperature_c = read_f64(tr, tr.t(keys::WATER_PROMPT_TEMPERATURE))?;
    session.water = session.water.sanitized();
    carbonate::refresh_carbonate_estimates(&mut session.water);

    println!("TDS: {:.1} mg/L", session.water.tds());
    print_balance(tr, &session.water);
    Ok(())
}

fn synthesize_from_tds(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::WATER_PROFILE_HEADING));
    let list = profiles::profiles();
    for (i, profile) in list.iter().enumerate() {
        println!("{}) {}", i + 1, profile.name);
    }

    let sel = read_line(tr.t(keys::WATER_PROMPT_PROFILE))?;
    let profile = match sel.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= list.len() => &list[n - 1],
        _ => {
            println!("{}", tr.t(keys::INVALID_SELECTION_RETRY));
            return Ok(());
        }
    };

    let target_tds = read_f64(tr, tr.t(keys::WATER_PROMPT_TDS))?;
    profiles::apply_tds_profile(&mut session.water, target_tds, profile);
    carbonate::refresh_carbonate_estimates(&mut session.water);

    println!("{}: TDS {:.1} mg/L", profile.name, session.water.tds());
    print_balance(tr, &session.water);
    Ok(())
}

fn run_auto_balance(tr: &Translator, session: &mut Session) {
    let result = auto_balance(&mut session.water);
    match result.adjusted_ion {
        Some(ion) => println!("{} +{:.2} mg/L", ion.symbol(), result.added_mg_per_l),
        None => println!("{}", tr.t(keys::WATER_AUTO_BALANCE_NONE)),
    }
    print_balance(tr, &session.water);
}

fn print_balance(tr: &Translator, water: &WaterAnalysis) {
    let balance = ionic_balance(water);
    println!("{}", tr.t(keys::WATER_BALANCE_HEADING));
    println!(
        "  양이온 {:.3} meq/L / 음이온 {:.3} meq/L / 오차 {:+.2}%",
        balance.cations_meq, balance.anions_meq, balance.error_pct
    );
}

fn print_water_summary(tr: &Translator, water: &WaterAnalysis) {
    println!("{}", tr.t(keys::WATER_SUMMARY_HEADING));
    println!(
        "pH {:.2} / 수온 {:.1} °C / TDS {:.1} mg/L",
        water.ph,
        water.temperature_c,
        water.tds()
    );

    println!("{:<6} {:>10} {:>12}", "성분", "mg/L", "as CaCO3");
    for ion in Ion::ALL {
        let value = water.ions.get(ion);
        if value <= 0.0 {
            continue;
        }
        match as_caco3(ion, value) {
            Some(caco3) => println!("{:<6} {:>10.3} {:>12.3}", ion.symbol(), value, caco3),
            None => println!("{:<6} {:>10.3} {:>12}", ion.symbol(), value, "-"),
        }
    }
    println!(
        "전체 이온: 양이온 {:.3} meq/L / 음이온 {:.3} meq/L",
        water.ions.total_cations_meq(),
        water.ions.total_anions_meq()
    );
    print_balance(tr, water);

    let co2 = co2_from_alkalinity(water.ions.hco3, water.ph);
    let co3 = co3_from_alkalinity(water.ions.hco3, water.ph);
    println!("CO2 추정: {}", format_estimate(&co2));
    println!("CO3 추정: {}", format_estimate(&co3));

    let indices = langelier_index(
        water.ions.ca,
        water.ions.hco3,
        water.tds(),
        water.temperature_c,
        water.ph,
    );
    println!(
        "LSI {:.2} (pHs {:.2}) / CCPP {:.1} mg/L",
        indices.lsi, indices.ph_saturation, indices.ccpp_mg_per_l
    );

    let sat = saturation_levels(&water.ions);
    println!(
        "포화도[%]: CaSO4 {:.1} / BaSO4 {:.1} / SrSO4 {:.1} / SiO2 {:.1} / Ca3(PO4)2 {:.1} / CaF2 {:.1}",
        sat.caso4_pct, sat.baso4_pct, sat.srso4_pct, sat.sio2_pct, sat.ca3po42_pct, sat.caf2_pct
    );
    println!(
        "간이 삼투압: {:.1} psi",
        quick_osmotic_pressure_psi(water.tds())
    );
}

fn format_estimate(estimate: &CarbonateEstimate) -> String {
    if estimate.below_detection {
        format!("< {} mg/L", carbonate::DETECTION_LIMIT_MG_PER_L)
    } else {
        format!("{:.3} mg/L", estimate.mg_per_l)
    }
}

/// RO 프로젝션 메뉴: 시스템 구성과 실행.
pub fn handle_projection(tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PROJECTION_HEADING));
    println!("{}", tr.t(keys::HELP_PROJECTION));
    println!("{}", tr.t(keys::PROJECTION_OPTIONS));

    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    match sel.trim() {
        "1" => configure_system(tr, &mut session.system)?,
        "2" => {
            if session.system.stages.iter().any(StageConfig::is_active) {
                let result = run_projection(&session.water, &session.system);
                print_projection_result(tr, &session.system, &result);
            } else {
                println!("{}", tr.t(keys::PROJECTION_NO_ACTIVE_STAGE));
            }
        }
        _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
    }
    Ok(())
}

fn configure_system(tr: &Translator, system: &mut SystemConfig) -> Result<(), AppError> {
    system.permeate_flow = read_f64(tr, tr.t(keys::PROJECTION_PROMPT_PERMEATE))?;
    system.flow_unit = read_flow_unit(tr)?;
    system.recovery_pct = read_f64(tr, tr.t(keys::PROJECTION_PROMPT_RECOVERY))?;
    system.num_trains = read_u32(tr, tr.t(keys::PROJECTION_PROMPT_TRAINS))?.max(1);

    let stage_count = read_u32(tr, tr.t(keys::PROJECTION_PROMPT_STAGES))?.clamp(1, 6);
    system.stages.clear();
    for i in 0..stage_count {
        println!("{} {}", tr.t(keys::PROJECTION_STAGE_LABEL), i + 1);
        let vessels = read_u32(tr, tr.t(keys::PROJECTION_PROMPT_VESSELS))?;
        let elements = read_u32(tr, tr.t(keys::PROJECTION_PROMPT_ELEMENTS))?;
        let membrane_id = read_membrane(tr)?;
        system.stages.push(StageConfig {
            membrane_id,
            elements_per_vessel: elements,
            vessels,
        });
    }

    system.membrane_age_years = read_f64(tr, tr.t(keys::PROJECTION_PROMPT_AGE))?.max(0.0);
    system.flux_decline_pct_per_year =
        read_f64(tr, tr.t(keys::PROJECTION_PROMPT_FLUX_DECLINE))?.clamp(0.0, 100.0);
    system.fouling_factor = read_f64(tr, tr.t(keys::PROJECTION_PROMPT_FOULING))?.clamp(0.5, 1.0);
    system.sp_increase_pct_per_year =
        read_f64(tr, tr.t(keys::PROJECTION_PROMPT_SP_INCREASE))?.max(0.0);

    system.chemical = read_chemical(tr)?;
    if system.chemical != ChemicalType::None {
        system.chemical_dose = read_f64(tr, tr.t(keys::PROJECTION_PROMPT_DOSE))?.max(0.0);
        system.dose_unit = read_dose_unit(tr)?;
        system.chemical_strength_pct =
            read_f64(tr, tr.t(keys::PROJECTION_PROMPT_STRENGTH))?.clamp(1.0, 100.0);
    }

    println!("{}", tr.t(keys::PROJECTION_CONFIG_SAVED));
    Ok(())
}

/// 프로젝션 결과를 표 형태로 출력한다. 배치 모드에서도 같은 출력을 쓴다.
pub fn print_projection_result(tr: &Translator, system: &SystemConfig, result: &ProjectionResult) {
    println!("{}", tr.t(keys::PROJECTION_RESULT_HEADING));

    println!(
        "회수율 {:.1}% / 트레인 {}",
        result.recovery_pct, result.num_trains
    );
    println!(
        "공급 유량: {} ({:.2} m³/h)",
        format_flow(result.feed_flow_display, result.flow_unit),
        result.feed_flow_m3_per_h
    );
    println!(
        "생산 수량: {} ({:.2} m³/h)",
        format_flow(result.permeate_flow_display, result.flow_unit),
        result.permeate_flow_m3_per_h
    );
    println!(
        "농축 수량: {} ({:.2} m³/h)",
        format_flow(result.concentrate_flow_display, result.flow_unit),
        result.concentrate_flow_m3_per_h
    );
    if result.num_trains > 1 {
        println!(
            "전체 플랜트: 공급 {:.2} m³/h / 생산 {:.2} m³/h",
            result.total_plant_feed_flow_m3_per_h, result.total_plant_product_flow_m3_per_h
        );
    }
    println!(
        "평균 플럭스 {:.1} gfd / 최고 플럭스 {:.1} gfd / 최대 β {:.3}",
        result.avg_flux_gfd, result.highest_flux_gfd, result.highest_beta
    );
    println!(
        "공급 압력 {:.1} psi / 농축수 압력 {:.1} psi",
        result.feed_pressure_psi, result.concentrate_pressure_psi
    );
    println!(
        "베셀당 유량: 공급 {:.2} m³/h / 농축 {:.2} m³/h",
        result.feed_flow_per_vessel_m3_per_h, result.concentrate_flow_per_vessel_m3_per_h
    );
    println!(
        "삼투압: 원수 {:.1} psi / 농축수 {:.1} psi",
        result.feed_osmotic_pressure_psi, result.concentrate_osmotic_pressure_psi
    );
    if result.chemical_feed_kg_per_h > 0.0 {
        println!(
            "약품 주입량 ({}): {:.3} kg/h",
            system.chemical.label(),
            result.chemical_feed_kg_per_h
        );
        let strength = system.chemical_strength_pct;
        if strength.is_finite() && strength > 0.0 && strength < 100.0 {
            println!(
                "원액 기준 주입량: {:.3} kg/h ({:.0}%)",
                result.chemical_feed_kg_per_h / (strength / 100.0),
                strength
            );
        }
    }

    println!("\n단  베셀  회수율%   플럭스      β   공급압    차압   농축압");
    for stage in &result.stage_results {
        println!(
            "{:>2} {:>5} {:>8.1} {:>8.1} {:>6.3} {:>8.1} {:>7.1} {:>8.1}",
            stage.index,
            stage.vessels,
            stage.stage_recovery_pct,
            stage.avg_flux_gfd,
            stage.beta,
            stage.feed_pressure_psi,
            stage.pressure_drop_psi,
            stage.concentrate_pressure_psi
        );
    }

    println!("\n{:<6} {:>12} {:>13} {:>13}", "성분", "원수", "생산수", "농축수");
    for ion in Ion::ALL {
        let feed = result.feed.ions.get(ion);
        let permeate = result.permeate.ions.get(ion);
        let concentrate = result.concentrate.ions.get(ion);
        if feed <= 0.0 && permeate <= 0.0 && concentrate <= 0.0 {
            continue;
        }
        println!(
            "{:<6} {:>12.3} {:>13.3} {:>13.3}",
            ion.symbol(),
            feed,
            permeate,
            concentrate
        );
    }
    println!(
        "{:<6} {:>12.1} {:>13.1} {:>13.1}",
        "TDS",
        result.feed.tds_mg_per_l,
        result.permeate.tds_mg_per_l,
        result.concentrate.tds_mg_per_l
    );
    println!(
        "{:<6} {:>12.2} {:>13.2} {:>13.2}",
        "pH", result.feed.ph, result.permeate.ph, result.concentrate.ph
    );
    println!(
        "추정 전도도[µS/cm]: 원수 {:.0} / 생산수 {:.0} / 농축수 {:.0}",
        estimate_conductivity_us_per_cm(result.feed.tds_mg_per_l, FEED_CONDUCTIVITY_FACTOR),
        estimate_conductivity_us_per_cm(result.permeate.tds_mg_per_l, PERMEATE_CONDUCTIVITY_FACTOR),
        estimate_conductivity_us_per_cm(
            result.concentrate.tds_mg_per_l,
            CONCENTRATE_CONDUCTIVITY_FACTOR
        ),
    );

    println!(
        "\n농축수 LSI {:.2} (pHs {:.2}) / CCPP {:.1} mg/L",
        result.concentrate_scaling.lsi,
        result.concentrate_scaling.ph_saturation,
        result.concentrate_scaling.ccpp_mg_per_l
    );
    let sat = &result.concentrate_saturation;
    println!(
        "농축수 포화도[%]: CaSO4 {:.1} / BaSO4 {:.1} / SrSO4 {:.1} / SiO2 {:.1} / Ca3(PO4)2 {:.1} / CaF2 {:.1}",
        sat.caso4_pct, sat.baso4_pct, sat.srso4_pct, sat.sio2_pct, sat.ca3po42_pct, sat.caf2_pct
    );

    if !result.design_warnings.is_empty() {
        println!("\n경고:");
        for warning in &result.design_warnings {
            println!("- {warning}");
        }
    }

    println!("\n설계 검증:");
    for check in validate_design(result) {
        let tag = match check.status {
            CheckStatus::Success => "[OK]",
            CheckStatus::Warning => "[주의]",
            CheckStatus::Error => "[오류]",
        };
        println!("{} {}: {} - {}", tag, check.label, check.value, check.message);
    }
}

fn format_flow(value: f64, unit: FlowUnit) -> String {
    format!("{:.*} {}", unit.display_decimals(), value, unit.symbol())
}

/// 전처리 평가: 세션 수질과 회수율로 농축수 스케일 위험을 평가한다.
pub fn handle_pretreatment(tr: &Translator, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::PRETREATMENT_HEADING));
    println!("{}", tr.t(keys::HELP_PRETREATMENT));

    let antiscalant_dose = read_f64(tr, tr.t(keys::PRETREATMENT_PROMPT_AS))?;
    let sbs_dose = read_f64(tr, tr.t(keys::PRETREATMENT_PROMPT_SBS))?;

    let recovery_pct = clamp_recovery_pct(session.system.recovery_pct);
    let permeate_m3h = to_m3_per_h(
        session.system.permeate_flow.max(0.0),
        session.system.flow_unit,
    );
    let trains = session.system.num_trains.max(1) as f64;
    // 주입량은 플랜트 전체 공급 유량 기준.
    let feed_flow = balance_flows(permeate_m3h, recovery_pct / 100.0).feed_m3_per_h * trains;

    let result = evaluate_pretreatment(&PretreatmentInput {
        water: &session.water,
        recovery_pct,
        feed_flow_m3_per_h: feed_flow,
        antiscalant_dose_mg_per_l: antiscalant_dose,
        sbs_dose_mg_per_l: sbs_dose,
    });

    println!("농축 배율 CF: {:.2}", result.concentration_factor);
    println!("농축수 LSI: {:.2}", result.concentrate_lsi);
    println!("농축수 실리카 포화도: {:.1}%", result.silica_saturation_pct);
    println!("안티스칼란트 사용량: {:.1} kg/월", result.antiscalant_monthly_kg);
    println!("SBS 사용량: {:.1} kg/월", result.sbs_monthly_kg);
    for warning in &result.warnings {
        println!("- {warning}");
    }
    Ok(())
}

/// 후처리 평가: 생산수 가성소다 주입에 따른 최종 pH와 사용량.
pub fn handle_posttreatment(tr: &Translator, session: &Session) -> Result<(), AppError> {
    println!("{}", tr.t(keys::POSTTREATMENT_HEADING));
    println!("{}", tr.t(keys::HELP_POSTTREATMENT));

    let caustic_dose = read_f64(tr, tr.t(keys::POSTTREATMENT_PROMPT_CAUSTIC))?;
    // 주입량은 플랜트 전체 생산 유량 기준.
    let product_flow = to_m3_per_h(
        session.system.permeate_flow.max(0.0),
        session.system.flow_unit,
    ) * session.system.num_trains.max(1) as f64;

    let result = evaluate_posttreatment(&PostTreatmentInput {
        product_flow_m3_per_h: product_flow,
        caustic_dose_mg_per_l: caustic_dose,
    });

    println!("최종 pH: {:.2}", result.final_ph);
    println!("NaOH 사용량: {:.1} kg/월", result.naoh_monthly_kg);
    for warning in &result.warnings {
        println!("- {warning}");
    }
    Ok(())
}

/// 설정 메뉴: 언어와 기본 단위를 변경한다. 저장은 호출 측에서 한다.
pub fn handle_settings(tr: &Translator, config: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!("{}", tr.t(keys::HELP_SETTINGS));
    println!(
        "{} language={} / flow={} / dose={} / flux={} / pressure={}",
        tr.t(keys::SETTINGS_CURRENT),
        config.language,
        config.default_units.flow.symbol(),
        config.default_units.dose.symbol(),
        config.default_units.flux.symbol(),
        config.default_units.pressure.symbol()
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));

    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            println!("{}", tr.t(keys::SETTINGS_LANGUAGE_OPTIONS));
            let lang = read_line(tr.t(keys::PROMPT_SELECT))?;
            match lang.trim() {
                "1" => config.language = "ko".to_string(),
                "2" => config.language = "en-us".to_string(),
                _ => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
            println!("{}", tr.t(keys::SETTINGS_RESTART_NOTE));
        }
        "2" => config.default_units.flow = read_flow_unit(tr)?,
        "3" => config.default_units.dose = read_dose_unit(tr)?,
        "4" => config.default_units.flux = read_flux_unit(tr)?,
        "5" => config.default_units.pressure = read_pressure_unit(tr)?,
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

fn read_membrane(tr: &Translator) -> Result<String, AppError> {
    println!("{}", tr.t(keys::MEMBRANE_HEADING));
    let list = membrane_db::membranes();
    for (i, membrane) in list.iter().enumerate() {
        println!(
            "{}) {} [{}] {:.0} ft², 배제율 {:.1}%",
            i + 1,
            membrane.name,
            membrane.category,
            membrane.area_ft2,
            membrane.rejection_pct
        );
    }

    let sel = read_line(tr.t(keys::PROJECTION_PROMPT_MEMBRANE))?;
    let id = match sel.trim().parse::<usize>() {
        Ok(n) if n >= 1 && n <= list.len() => list[n - 1].id,
        _ => membrane_db::DEFAULT_MEMBRANE_ID,
    };
    Ok(id.to_string())
}

fn read_flow_unit(tr: &Translator) -> Result<FlowUnit, AppError> {
    println!("{}", tr.t(keys::FLOW_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => FlowUnit::M3PerH,
        "2" => FlowUnit::M3PerD,
        "3" => FlowUnit::Gpm,
        "4" => FlowUnit::Gpd,
        "5" => FlowUnit::Mgd,
        "6" => FlowUnit::Migd,
        "7" => FlowUnit::Mld,
        _ => FlowUnit::M3PerH,
    };
    Ok(unit)
}

fn read_dose_unit(tr: &Translator) -> Result<DoseUnit, AppError> {
    println!("{}", tr.t(keys::DOSE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "1" => DoseUnit::MgPerL,
        "2" => DoseUnit::LbPerHr,
        "3" => DoseUnit::KgPerHr,
        _ => DoseUnit::MgPerL,
    };
    Ok(unit)
}

fn read_flux_unit(tr: &Translator) -> Result<FluxUnit, AppError> {
    println!("{}", tr.t(keys::FLUX_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "2" => FluxUnit::Lmh,
        _ => FluxUnit::Gfd,
    };
    Ok(unit)
}

fn read_pressure_unit(tr: &Translator) -> Result<PressureUnit, AppError> {
    println!("{}", tr.t(keys::PRESSURE_UNIT_OPTIONS));
    let sel = read_line(tr.t(keys::PROMPT_SELECT))?;
    let unit = match sel.trim() {
        "2" => PressureUnit::Bar,
        "3" => PressureUnit::KiloPascal,
        _ => PressureUnit::Psi,
    };
    Ok(unit)
}

fn read_chemical(tr: &Translator) -> Result<ChemicalType, AppError> {
    println!("{}", tr.t(keys::CHEMICAL_OPTIONS));
    let sel = read_line(tr.t(keys::PROJECTION_PROMPT_CHEMICAL))?;
    let chemical = match sel.trim() {
        "1" => ChemicalType::None,
        "2" => ChemicalType::Antiscalant,
        "3" => ChemicalType::Sbs,
        "4" => ChemicalType::Acid,
        "5" => ChemicalType::Caustic,
        _ => ChemicalType::None,
    };
    Ok(chemical)
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

fn read_f64(tr: &Translator, prompt: &str) -> Result<f64, AppError> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32(tr: &Translator, prompt: &str) -> Result<u32, AppError> {
    loop {
        let line = read_line(prompt)?;
        match line.trim().parse::<u32>() {
            Ok(value) => return Ok(value),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}
