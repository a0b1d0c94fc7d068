use ro_design_toolbox::conversion::{convert, ConversionError};
use ro_design_toolbox::quantity::QuantityKind;
use ro_design_toolbox::units::{
    chemical_feed_kg_per_h, convert_flow, convert_flux, convert_pressure, convert_temperature,
    from_gfd, from_m3_per_h, from_psi, to_gfd, to_m3_per_h, to_psi, DoseUnit, FlowUnit, FluxUnit,
    PressureUnit, TemperatureUnit,
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
fn flow_factors_to_m3_per_h() {
    assert_close("gpm", to_m3_per_h(1.0, FlowUnit::Gpm), 0.2271, 1e-12);
    assert_close("gpd", to_m3_per_h(1.0, FlowUnit::Gpd), 0.0001577, 1e-12);
    assert_close("mgd", to_m3_per_h(1.0, FlowUnit::Mgd), 157.725, 1e-12);
    assert_close("migd", to_m3_per_h(1.0, FlowUnit::Migd), 189.27, 1e-12);
    assert_close("mld", to_m3_per_h(1.0, FlowUnit::Mld), 41.667, 1e-12);
    assert_close("m3/d", to_m3_per_h(24.0, FlowUnit::M3PerD), 1.0, 1e-12);
    assert_close("m3/h", to_m3_per_h(3.5, FlowUnit::M3PerH), 3.5, 1e-12);
}

#[test]
fn flow_conversion_round_trips() {
    let units = [
        FlowUnit::Gpm,
        FlowUnit::Gpd,
        FlowUnit::Mgd,
        FlowUnit::Migd,
        FlowUnit::M3PerH,
        FlowUnit::M3PerD,
        FlowUnit::Mld,
    ];
    for unit in units {
        let back = from_m3_per_h(to_m3_per_h(123.456, unit), unit);
        assert_close(unit.symbol(), back, 123.456, 1e-9);
    }
}

#[test]
fn flow_cross_conversions() {
    assert_close(
        "mgd to gpm",
        convert_flow(1.0, FlowUnit::Mgd, FlowUnit::Gpm),
        694.5178,
        1e-5,
    );
    // 계수가 반올림된 값이라 정확히 1440이 되지는 않는다.
    assert_close(
        "gpm to gpd",
        convert_flow(1.0, FlowUnit::Gpm, FlowUnit::Gpd),
        1440.0761,
        1e-5,
    );
}

#[test]
fn flow_display_decimals_per_unit() {
    assert_eq!(FlowUnit::Gpm.display_decimals(), 2);
    assert_eq!(FlowUnit::M3PerH.display_decimals(), 2);
    assert_eq!(FlowUnit::Gpd.display_decimals(), 1);
    assert_eq!(FlowUnit::M3PerD.display_decimals(), 1);
    assert_eq!(FlowUnit::Mgd.display_decimals(), 3);
    assert_eq!(FlowUnit::Migd.display_decimals(), 3);
    assert_eq!(FlowUnit::Mld.display_decimals(), 3);
}

#[test]
fn flux_conversions() {
    assert_close("lmh to gfd", to_gfd(1.0, FluxUnit::Lmh), 0.589, 1e-12);
    assert_close("gfd to lmh", from_gfd(1.0, FluxUnit::Lmh), 1.697793, 1e-5);
    assert_close(
        "convert 100 lmh",
        convert_flux(100.0, FluxUnit::Lmh, FluxUnit::Gfd),
        58.9,
        1e-9,
    );
}

#[test]
fn pressure_conversions() {
    assert_close("psi to bar", from_psi(1.0, PressureUnit::Bar), 0.0689476, 1e-12);
    assert_close(
        "psi to kpa",
        from_psi(1.0, PressureUnit::KiloPascal),
        6.89476,
        1e-12,
    );
    assert_close("bar to psi", to_psi(1.0, PressureUnit::Bar), 14.50377, 1e-5);
    // 1 bar = 100 kPa가 계수 정의상 정확히 성립한다.
    assert_close(
        "bar to kpa",
        convert_pressure(10.0, PressureUnit::Bar, PressureUnit::KiloPascal),
        1000.0,
        1e-9,
    );
}

#[test]
fn temperature_conversions() {
    assert_close(
        "c to k",
        convert_temperature(25.0, TemperatureUnit::Celsius, TemperatureUnit::Kelvin),
        298.15,
        1e-12,
    );
    assert_close(
        "f to c",
        convert_temperature(77.0, TemperatureUnit::Fahrenheit, TemperatureUnit::Celsius),
        25.0,
        1e-9,
    );
    assert_close(
        "k to f",
        convert_temperature(298.15, TemperatureUnit::Kelvin, TemperatureUnit::Fahrenheit),
        77.0,
        1e-9,
    );
}

#[test]
fn string_dispatch_accepts_aliases() {
    let flow = convert(QuantityKind::Flow, 1.0, "MGD", "m3/h").expect("flow");
    assert_close("MGD alias", flow, 157.725, 1e-9);

    let flow2 = convert(QuantityKind::Flow, 24.0, "cmd", "cmh").expect("flow alias");
    assert_close("cmd alias", flow2, 1.0, 1e-9);

    let pressure = convert(QuantityKind::Pressure, 1.0, "bar", "kpa").expect("pressure");
    assert_close("bar to kpa", pressure, 100.0, 1e-9);

    let temp = convert(QuantityKind::Temperature, 100.0, "C", "K").expect("temperature");
    assert_close("C alias", temp, 373.15, 1e-9);
}

#[test]
fn string_dispatch_rejects_unknown_unit() {
    let err = convert(QuantityKind::Flow, 1.0, "furlong", "m3/h").unwrap_err();
    match err {
        ConversionError::UnknownUnit(unit) => assert_eq!(unit, "furlong"),
    }
}

#[test]
fn chemical_feed_rate_by_dose_unit() {
    // 5 mg/L × 200 m³/h = 1000 g/h = 1 kg/h
    assert_close(
        "mg/l",
        chemical_feed_kg_per_h(5.0, DoseUnit::MgPerL, 200.0),
        1.0,
        1e-12,
    );
    assert_close(
        "lb/hr",
        chemical_feed_kg_per_h(10.0, DoseUnit::LbPerHr, 0.0),
        4.536,
        1e-12,
    );
    assert_close(
        "kg/hr",
        chemical_feed_kg_per_h(3.0, DoseUnit::KgPerHr, 123.0),
        3.0,
        1e-12,
    );
}
