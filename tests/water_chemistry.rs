use ro_design_toolbox::water::analysis::{
    as_caco3, quick_osmotic_pressure_psi, Ion, WaterAnalysis,
};
use ro_design_toolbox::water::balance::{auto_balance, ionic_balance};
use ro_design_toolbox::water::carbonate::{
    co2_from_alkalinity, co3_from_alkalinity, refresh_carbonate_estimates,
};
use ro_design_toolbox::water::apply_tds_profile;
use ro_design_toolbox::water::profiles::{find_profile, profiles, DEFAULT_PROFILE_ID};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn auto_balance_adds_chloride_on_cation_excess() {
    let mut water = WaterAnalysis::default();
    // Ca 40.08 mg/L = 2 meq/L, 음이온 없음
    water.ions.ca = 40.08;

    let result = auto_balance(&mut water);
    assert_eq!(result.adjusted_ion, Some(Ion::Cl));
    assert_close("added Cl", result.added_mg_per_l, 70.9, 1e-9);
    assert!(result.balance.error_pct.abs() < 1e-9);
    assert_close("cl mg/l", water.ions.cl, 70.9, 1e-9);
}

#[test]
fn auto_balance_adds_sodium_on_anion_excess() {
    let mut water = WaterAnalysis::default();
    // SO4 96.06 mg/L = 2 meq/L
    water.ions.so4 = 96.06;

    let result = auto_balance(&mut water);
    assert_eq!(result.adjusted_ion, Some(Ion::Na));
    assert_close("added Na", result.added_mg_per_l, 46.0, 1e-9);
    assert!(result.balance.error_pct.abs() < 1e-9);
}

#[test]
fn auto_balance_leaves_balanced_water_untouched() {
    let mut water = WaterAnalysis::default();
    water.ions.na = 23.0;
    water.ions.cl = 35.45;

    let before = ionic_balance(&water);
    assert!(before.error_pct.abs() < 1e-9);

    let result = auto_balance(&mut water);
    assert_eq!(result.adjusted_ion, None);
    assert_eq!(result.added_mg_per_l, 0.0);
}

#[test]
fn ratio_profile_synthesizes_exact_target_tds() {
    let profile = find_profile(DEFAULT_PROFILE_ID).expect("well profile");
    let mut water = WaterAnalysis::default();
    apply_tds_profile(&mut water, 1000.0, profile);

    // Well Water 비율 합이 1.0이므로 TDS가 목표와 일치한다.
    assert_close("tds", water.tds(), 1000.0, 1e-9);
    assert_close("ca", water.ions.ca, 120.0, 1e-9);
    assert_close("hco3", water.ions.hco3, 220.0, 1e-9);
}

#[test]
fn absolute_profile_rescales_to_target_tds() {
    let profile = find_profile("Sea Surface").expect("sea surface profile");
    let mut water = WaterAnalysis::default();
    apply_tds_profile(&mut water, 2000.0, profile);

    let sum = water.ions.na + water.ions.cl + water.ions.hco3;
    assert_close("na+cl+hco3", sum, 2000.0, 1e-6);
    assert_close("tds", water.tds(), 2000.0, 1e-6);
}

#[test]
fn profile_synthesis_preserves_trace_ions() {
    let profile = find_profile("brackish-well-nf").expect("profile");
    let mut water = WaterAnalysis::default();
    water.ions.ba = 0.05;
    water.ions.b = 0.4;
    water.ions.na = 999.0;

    apply_tds_profile(&mut water, 500.0, profile);

    assert_close("ba preserved", water.ions.ba, 0.05, 1e-12);
    assert_close("b preserved", water.ions.b, 0.4, 1e-12);
    assert_close("na overwritten", water.ions.na, 160.0, 1e-9);
}

#[test]
fn profile_synthesis_ignores_non_positive_target() {
    let profile = find_profile(DEFAULT_PROFILE_ID).expect("profile");
    let mut water = WaterAnalysis::default();
    water.ions.na = 100.0;

    apply_tds_profile(&mut water, 0.0, profile);
    assert_eq!(water.ions.na, 100.0);

    apply_tds_profile(&mut water, f64::NAN, profile);
    assert_eq!(water.ions.na, 100.0);
}

#[test]
fn catalog_lists_nine_profiles() {
    assert_eq!(profiles().len(), 9);
    assert!(find_profile("sea-well").is_some());
    assert!(find_profile("RO Permeate").is_some());
    assert!(find_profile("없는 수질").is_none());
}

#[test]
fn co2_estimate_from_alkalinity_at_neutral_ph() {
    // CO2 = 100 × 10^(6.35 - 7.0)
    let estimate = co2_from_alkalinity(100.0, 7.0);
    assert_close("co2", estimate.mg_per_l, 22.387, 1e-4);
    assert!(!estimate.below_detection);
}

#[test]
fn co3_estimate_zero_below_ph_threshold() {
    let estimate = co3_from_alkalinity(100.0, 8.0);
    assert_eq!(estimate.mg_per_l, 0.0);
    assert!(estimate.below_detection);
}

#[test]
fn co3_estimate_above_ph_threshold() {
    // CO3 = 100 × 10^(8.5 - 10.33)
    let estimate = co3_from_alkalinity(100.0, 8.5);
    assert_close("co3", estimate.mg_per_l, 1.4791, 1e-3);
    assert!(!estimate.below_detection);
}

#[test]
fn tiny_estimates_fall_below_detection_limit() {
    let estimate = co2_from_alkalinity(0.001, 7.0);
    assert!(estimate.below_detection);
    assert!(estimate.mg_per_l < 0.001);
}

#[test]
fn refresh_updates_carbonate_fields() {
    let mut water = WaterAnalysis::default();
    water.ions.hco3 = 100.0;
    water.ph = 7.0;

    refresh_carbonate_estimates(&mut water);
    assert_close("co2 field", water.ions.co2, 22.387, 1e-4);
    assert_eq!(water.ions.co3, 0.0);
}

#[test]
fn caco3_equivalents() {
    // Ca 40.08 mg/L = 2 meq/L = 100 mg/L as CaCO3
    assert_close("ca", as_caco3(Ion::Ca, 40.08).expect("ca eq"), 100.0, 1e-9);
    assert_close(
        "hco3",
        as_caco3(Ion::Hco3, 61.02).expect("hco3 eq"),
        50.0,
        1e-9,
    );
    assert!(as_caco3(Ion::B, 1.0).is_none());
    assert!(as_caco3(Ion::Sio2, 1.0).is_none());
}

#[test]
fn quick_osmotic_estimate() {
    assert_close("1000 mg/l", quick_osmotic_pressure_psi(1000.0), 11.5, 1e-9);
}

#[test]
fn sanitized_clamps_out_of_range_inputs() {
    let mut water = WaterAnalysis::default();
    water.ph = f64::NAN;
    water.ions.na = -5.0;
    water.temperature_c = f64::INFINITY;

    let clean = water.sanitized();
    assert_eq!(clean.ph, 7.0);
    assert_eq!(clean.ions.na, 0.0);
    assert_eq!(clean.temperature_c, 25.0);

    water.ph = 20.0;
    assert_eq!(water.sanitized().ph, 14.0);
}

#[test]
fn tds_sums_all_registered_species() {
    let mut water = WaterAnalysis::default();
    for ion in Ion::ALL {
        water.ions.set(ion, 1.0);
    }
    assert_close("tds", water.tds(), 17.0, 1e-12);
}

#[test]
fn full_meq_totals_count_every_charged_species() {
    let mut water = WaterAnalysis::default();
    // 각각 1 meq/L씩: Ca 20.04, NH4 18.04, HCO3 61.02, F 19.00
    water.ions.ca = 20.04;
    water.ions.nh4 = 18.04;
    water.ions.hco3 = 61.02;
    water.ions.f = 19.00;
    water.ions.b = 1.0; // 당량 중량 없음, 합계에서 제외

    assert_close("cations", water.ions.total_cations_meq(), 2.0, 1e-9);
    assert_close("anions", water.ions.total_anions_meq(), 2.0, 1e-9);

    // 주요 이온 밸런스는 4+4종만 집계한다.
    let balance = ionic_balance(&water);
    assert_close("balance cations", balance.cations_meq, 1.0, 1e-9);
    assert_close("balance anions", balance.anions_meq, 1.0, 1e-9);
}
