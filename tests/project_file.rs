//! 프로젝트 파일(TOML) 파싱 테스트.

use std::path::Path;

use ro_design_toolbox::dosing::ChemicalType;
use ro_design_toolbox::project::{load_project, parse_project, ProjectError};
use ro_design_toolbox::units::{DoseUnit, FlowUnit};

const FULL_PROJECT: &str = r#"
[project]
name = "Demo Plant"
client = "ACME Water"

[water]
ph = 7.8
temperature_c = 18.0

[water.ions]
na = 460.0
cl = 710.0

[system]
permeate_flow = 120.0
flow_unit = "Gpm"
recovery_pct = 70.0
num_trains = 2
chemical = "Antiscalant"
chemical_dose = 3.0

[[system.stages]]
membrane_id = "cpa5ld"
vessels = 4
elements_per_vessel = 6

[[system.stages]]
membrane_id = "cpa5ld"
vessels = 2
elements_per_vessel = 6
"#;

#[test]
fn parses_full_project_file() {
    let file = parse_project(FULL_PROJECT).expect("parse full project");

    assert_eq!(file.project.name, "Demo Plant");
    assert_eq!(file.project.client, "ACME Water");
    assert_eq!(file.project.calculated_by, "");

    assert_eq!(file.water.ph, 7.8);
    assert_eq!(file.water.temperature_c, 18.0);
    assert_eq!(file.water.ions.na, 460.0);
    assert_eq!(file.water.ions.cl, 710.0);
    assert_eq!(file.water.ions.ca, 0.0);

    assert_eq!(file.system.permeate_flow, 120.0);
    assert_eq!(file.system.flow_unit, FlowUnit::Gpm);
    assert_eq!(file.system.recovery_pct, 70.0);
    assert_eq!(file.system.num_trains, 2);
    assert!(file.system.feed_ph.is_none());
    assert_eq!(file.system.chemical, ChemicalType::Antiscalant);
    assert_eq!(file.system.chemical_dose, 3.0);
    // 명시하지 않은 필드는 기본값으로 채워진다
    assert_eq!(file.system.dose_unit, DoseUnit::MgPerL);
    assert_eq!(file.system.chemical_strength_pct, 100.0);
    assert_eq!(file.system.fouling_factor, 1.0);

    assert_eq!(file.system.stages.len(), 2);
    assert_eq!(file.system.stages[0].membrane_id, "cpa5ld");
    assert_eq!(file.system.stages[0].vessels, 4);
    assert_eq!(file.system.stages[0].elements_per_vessel, 6);
    assert_eq!(file.system.stages[1].vessels, 2);
}

#[test]
fn empty_file_yields_defaults() {
    let file = parse_project("").expect("parse empty project");

    assert_eq!(file.project.name, "");
    assert_eq!(file.water.ph, 7.0);
    assert_eq!(file.water.temperature_c, 25.0);
    assert_eq!(file.system.recovery_pct, 15.0);
    assert_eq!(file.system.num_trains, 1);
    assert_eq!(file.system.flow_unit, FlowUnit::M3PerH);
    assert_eq!(file.system.stages.len(), 1);
    assert_eq!(file.system.stages[0].membrane_id, "espa2ld");
    assert_eq!(file.system.stages[0].vessels, 3);
}

#[test]
fn partial_tables_fill_missing_fields() {
    let file = parse_project(
        r#"
[water.ions]
ca = 100.0

[system]
feed_ph = 6.8
chemical = "SBS"
"#,
    )
    .expect("parse partial project");

    assert_eq!(file.water.ions.ca, 100.0);
    assert_eq!(file.water.ions.na, 0.0);
    assert_eq!(file.water.ph, 7.0);

    assert_eq!(file.system.feed_ph, Some(6.8));
    assert_eq!(file.system.chemical, ChemicalType::Sbs);
    assert_eq!(file.system.recovery_pct, 15.0);
}

#[test]
fn malformed_toml_is_a_parse_error() {
    let err = parse_project("project = [broken").expect_err("broken toml");
    assert!(matches!(err, ProjectError::Parse(_)));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_project(Path::new("no-such-project-file.toml")).expect_err("missing file");
    assert!(matches!(err, ProjectError::Io(_)));
}
