//! 전처리/후처리 약품 평가 회귀 테스트.

use ro_design_toolbox::dosing::{
    evaluate_posttreatment, evaluate_pretreatment, monthly_usage_kg, ChemicalType,
    PostTreatmentInput, PretreatmentInput,
};
use ro_design_toolbox::water::analysis::WaterAnalysis;

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn pre_input(water: &WaterAnalysis, recovery_pct: f64) -> PretreatmentInput<'_> {
    PretreatmentInput {
        water,
        recovery_pct,
        feed_flow_m3_per_h: 0.0,
        antiscalant_dose_mg_per_l: 0.0,
        sbs_dose_mg_per_l: 0.0,
    }
}

#[test]
fn concentration_factor_at_75_pct_recovery() {
    let water = WaterAnalysis::default();
    let result = evaluate_pretreatment(&pre_input(&water, 75.0));
    // CF = 1 / (1 - 0.75)
    assert_close("cf", result.concentration_factor, 4.0, 1e-12);
}

#[test]
fn full_recovery_short_circuits_evaluation() {
    let mut water = WaterAnalysis::default();
    water.ions.ca = 500.0;
    water.ions.hco3 = 500.0;
    water.ions.sio2 = 100.0;

    for recovery in [100.0, 150.0] {
        let result = evaluate_pretreatment(&pre_input(&water, recovery));
        assert_close("cf", result.concentration_factor, 1.0, 1e-12);
        assert_eq!(result.concentrate_lsi, 0.0);
        assert_eq!(result.silica_saturation_pct, 0.0);
        assert!(!result.lsi_danger);
        assert!(!result.silica_danger);
        assert!(result.warnings.is_empty());
    }
}

#[test]
fn concentrate_lsi_reference() {
    let mut water = WaterAnalysis::default();
    water.ions.ca = 200.0;
    water.ions.hco3 = 300.0;
    water.ions.na = 400.0;
    water.ions.cl = 600.0;
    water.ph = 8.0;
    water.temperature_c = 25.0;

    let result = evaluate_pretreatment(&pre_input(&water, 75.0));
    // CF 4 → Ca 800, HCO3 1200, TDS (400+600)×4 = 4000
    // pHs = (5 - log10(2000)) + (5 - log10(984)) + (0.260206 + 2.3) = 6.26618
    assert_close("lsi", result.concentrate_lsi, 1.7338, 1e-4);
    assert!(result.lsi_danger);
    assert!(result.warnings.iter().any(|w| w.contains("LSI")));
}

#[test]
fn silica_saturation_reference() {
    let mut water = WaterAnalysis::default();
    water.ions.sio2 = 40.0;

    let result = evaluate_pretreatment(&pre_input(&water, 75.0));
    // 40 × CF 4 = 160 mg/L, 용해도 120 mg/L 대비 133%
    assert_close("silica", result.silica_saturation_pct, 133.333, 1e-3);
    assert!(result.silica_danger);
    assert!(result.warnings.iter().any(|w| w.contains("실리카")));
}

#[test]
fn low_recovery_keeps_clean_water_safe() {
    let mut water = WaterAnalysis::default();
    water.ions.ca = 40.0;
    water.ions.hco3 = 60.0;
    water.ions.na = 50.0;
    water.ions.cl = 80.0;
    water.ions.sio2 = 10.0;

    let result = evaluate_pretreatment(&pre_input(&water, 50.0));
    assert!(!result.lsi_danger);
    assert!(!result.silica_danger);
    assert!(result.warnings.is_empty());
}

#[test]
fn monthly_chemical_usage() {
    // 100 m³/h × 3 mg/L × 24 × 30 / 1000
    assert_close("direct", monthly_usage_kg(100.0, 3.0), 216.0, 1e-12);

    let water = WaterAnalysis::default();
    let input = PretreatmentInput {
        antiscalant_dose_mg_per_l: 3.0,
        sbs_dose_mg_per_l: 5.0,
        feed_flow_m3_per_h: 100.0,
        ..pre_input(&water, 75.0)
    };
    let result = evaluate_pretreatment(&input);
    assert_close("antiscalant", result.antiscalant_monthly_kg, 216.0, 1e-12);
    assert_close("sbs", result.sbs_monthly_kg, 360.0, 1e-12);
}

#[test]
fn negative_doses_and_flows_floor_to_zero() {
    let water = WaterAnalysis::default();
    let input = PretreatmentInput {
        antiscalant_dose_mg_per_l: -5.0,
        sbs_dose_mg_per_l: -1.0,
        feed_flow_m3_per_h: -100.0,
        ..pre_input(&water, 75.0)
    };
    let result = evaluate_pretreatment(&input);
    assert_eq!(result.antiscalant_monthly_kg, 0.0);
    assert_eq!(result.sbs_monthly_kg, 0.0);
}

#[test]
fn zero_ph_falls_back_to_neutral_feed() {
    let mut unset = WaterAnalysis::default();
    unset.ions.ca = 100.0;
    unset.ions.hco3 = 100.0;
    unset.ions.na = 100.0;
    unset.ions.cl = 100.0;
    unset.ph = 0.0;
    unset.temperature_c = 0.0;

    let mut explicit = unset;
    explicit.ph = 7.5;
    explicit.temperature_c = 25.0;

    let from_fallback = evaluate_pretreatment(&pre_input(&unset, 50.0));
    let from_explicit = evaluate_pretreatment(&pre_input(&explicit, 50.0));
    assert_close(
        "fallback lsi",
        from_fallback.concentrate_lsi,
        from_explicit.concentrate_lsi,
        1e-12,
    );
}

#[test]
fn caustic_dose_raises_permeate_ph() {
    // 6.2 + 2 × 0.45 = 7.1 → 부식성
    let low = evaluate_posttreatment(&PostTreatmentInput {
        product_flow_m3_per_h: 50.0,
        caustic_dose_mg_per_l: 2.0,
    });
    assert_close("low ph", low.final_ph, 7.1, 1e-12);
    assert!(low.corrosive);
    assert_eq!(low.warnings.len(), 1);
    assert!(low.warnings[0].contains("부식"));

    // 6.2 + 3 × 0.45 = 7.55 → 7.5 이상이라 안전
    let enough = evaluate_posttreatment(&PostTreatmentInput {
        product_flow_m3_per_h: 50.0,
        caustic_dose_mg_per_l: 3.0,
    });
    assert_close("enough ph", enough.final_ph, 7.55, 1e-12);
    assert!(!enough.corrosive);
    assert!(enough.warnings.is_empty());
}

#[test]
fn caustic_monthly_usage() {
    let result = evaluate_posttreatment(&PostTreatmentInput {
        product_flow_m3_per_h: 50.0,
        caustic_dose_mg_per_l: 3.0,
    });
    // 50 × 3 × 24 × 30 / 1000
    assert_close("naoh", result.naoh_monthly_kg, 108.0, 1e-12);
}

#[test]
fn posttreatment_clamps_extreme_inputs() {
    let negative = evaluate_posttreatment(&PostTreatmentInput {
        product_flow_m3_per_h: -10.0,
        caustic_dose_mg_per_l: -1.0,
    });
    assert_close("floored ph", negative.final_ph, 6.2, 1e-12);
    assert!(negative.corrosive);
    assert_eq!(negative.naoh_monthly_kg, 0.0);

    let huge = evaluate_posttreatment(&PostTreatmentInput {
        product_flow_m3_per_h: 10.0,
        caustic_dose_mg_per_l: 100.0,
    });
    assert_close("clamped ph", huge.final_ph, 14.0, 1e-12);
}

#[test]
fn chemical_labels_are_korean() {
    assert_eq!(ChemicalType::None.label(), "없음");
    assert!(ChemicalType::Antiscalant.label().contains("안티스칼란트"));
    assert!(ChemicalType::Sbs.label().contains("SBS"));
    assert!(ChemicalType::Caustic.label().contains("NaOH"));
}
