use serde::{Deserialize, Serialize};

/// 체적 유량 단위. 내부 기준은 항상 m³/h이다.
/// gpm/gpd/mgd/migd는 미국식, mld는 메가리터/일 기준이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowUnit {
    Gpm,
    Gpd,
    Mgd,
    Migd,
    M3PerH,
    M3PerD,
    Mld,
}

const M3H_PER_GPM: f64 = 0.2271;
const M3H_PER_GPD: f64 = 0.0001577;
const M3H_PER_MGD: f64 = 157.725;
const M3H_PER_MIGD: f64 = 189.27;
const M3H_PER_MLD: f64 = 41.667;

impl FlowUnit {
    /// 1 단위당 m³/h 환산 계수.
    pub fn factor_to_m3_per_h(&self) -> f64 {
        match self {
            FlowUnit::Gpm => M3H_PER_GPM,
            FlowUnit::Gpd => M3H_PER_GPD,
            FlowUnit::Mgd => M3H_PER_MGD,
            FlowUnit::Migd => M3H_PER_MIGD,
            FlowUnit::M3PerH => 1.0,
            FlowUnit::M3PerD => 1.0 / 24.0,
            FlowUnit::Mld => M3H_PER_MLD,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            FlowUnit::Gpm => "gpm",
            FlowUnit::Gpd => "gpd",
            FlowUnit::Mgd => "mgd",
            FlowUnit::Migd => "migd",
            FlowUnit::M3PerH => "m3/h",
            FlowUnit::M3PerD => "m3/d",
            FlowUnit::Mld => "mld",
        }
    }

    /// 단위별 표시 소수 자리수.
    pub fn display_decimals(&self) -> usize {
        match self {
            FlowUnit::Gpm | FlowUnit::M3PerH => 2,
            FlowUnit::Gpd | FlowUnit::M3PerD => 1,
            FlowUnit::Mgd | FlowUnit::Migd | FlowUnit::Mld => 3,
        }
    }
}

/// 주어진 유량을 m³/h 로 변환한다.
pub fn to_m3_per_h(value: f64, unit: FlowUnit) -> f64 {
    value * unit.factor_to_m3_per_h()
}

/// m³/h 값을 원하는 단위로 변환한다.
pub fn from_m3_per_h(value_m3_per_h: f64, unit: FlowUnit) -> f64 {
    value_m3_per_h / unit.factor_to_m3_per_h()
}

/// 유량을 원하는 단위로 변환한다.
pub fn convert_flow(value: f64, from: FlowUnit, to: FlowUnit) -> f64 {
    let base = to_m3_per_h(value, from);
    from_m3_per_h(base, to)
}
