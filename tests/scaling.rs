use ro_design_toolbox::water::analysis::IonComposition;
use ro_design_toolbox::water::scaling::{
    langelier_index, saturation_levels, silica_saturation_pct, LSI_DANGER_THRESHOLD,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

#[test]
fn lsi_reference_point() {
    // Ca 40, HCO3 120, TDS 1000, 25°C, pH 7.5:
    //   pCa = 5 - log10(100) = 3.0
    //   pAlk = 5 - log10(98.4) = 3.007
    //   C = 0.2 + 2.3 = 2.5, pHs = 8.507
    let indices = langelier_index(40.0, 120.0, 1000.0, 25.0, 7.5);
    assert_close("pHs", indices.ph_saturation, 8.507, 1e-3);
    assert_close("lsi", indices.lsi, -1.007, 1e-3);
    assert_eq!(indices.ccpp_mg_per_l, 0.0);
    assert!(indices.lsi < LSI_DANGER_THRESHOLD);
}

#[test]
fn warm_water_raises_lsi_by_constant_step() {
    let cool = langelier_index(40.0, 120.0, 1000.0, 25.0, 7.5);
    let warm = langelier_index(40.0, 120.0, 1000.0, 26.0, 7.5);
    // 25°C 초과에서 온도항이 2.3 → 2.0으로 바뀐다.
    assert_close("lsi step", warm.lsi - cool.lsi, 0.3, 1e-9);
}

#[test]
fn positive_lsi_yields_ccpp() {
    let indices = langelier_index(200.0, 300.0, 1500.0, 25.0, 9.0);
    assert_close("lsi", indices.lsi, 1.5723, 1e-4);
    assert_close("ccpp", indices.ccpp_mg_per_l, indices.lsi * 50.0, 1e-12);
}

#[test]
fn lsi_survives_zero_inputs() {
    // 농도 0이어도 max() 바닥값 덕분에 유한한 지수가 나온다.
    let indices = langelier_index(0.0, 0.0, 0.0, 25.0, 7.0);
    assert!(indices.ph_saturation.is_finite());
    assert!(indices.lsi.is_finite());
    assert_eq!(indices.ccpp_mg_per_l, 0.0);
}

#[test]
fn saturation_ratios_use_documented_divisors() {
    let ions = IonComposition {
        ca: 100.0,
        so4: 200.0,
        ba: 0.05,
        sr: 8.0,
        sio2: 30.0,
        po4: 5.0,
        f: 2.0,
        ..IonComposition::default()
    };

    let sat = saturation_levels(&ions);
    assert_close("caso4", sat.caso4_pct, 20.0, 1e-9);
    assert_close("baso4", sat.baso4_pct, 0.2, 1e-9);
    assert_close("srso4", sat.srso4_pct, 0.8, 1e-9);
    assert_close("sio2", sat.sio2_pct, 25.0, 1e-9);
    assert_close("ca3po42", sat.ca3po42_pct, 5.0, 1e-9);
    assert_close("caf2", sat.caf2_pct, 0.4, 1e-9);
    assert!(!sat.any_oversaturated());
}

#[test]
fn oversaturation_flag_trips_past_100_pct() {
    let ions = IonComposition {
        sio2: 150.0,
        ..IonComposition::default()
    };
    let sat = saturation_levels(&ions);
    assert_close("sio2", sat.sio2_pct, 125.0, 1e-9);
    assert!(sat.any_oversaturated());
}

#[test]
fn silica_solubility_reference() {
    assert_close("120 mg/l", silica_saturation_pct(120.0), 100.0, 1e-12);
    assert_close("60 mg/l", silica_saturation_pct(60.0), 50.0, 1e-12);
}
