use serde::{Deserialize, Serialize};

/// 막 플럭스 단위. 내부 기준은 gfd(gal/ft²/day)이다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FluxUnit {
    Gfd,
    Lmh,
}

/// LMH → gfd 환산 계수.
const GFD_PER_LMH: f64 = 0.589;

impl FluxUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            FluxUnit::Gfd => "gfd",
            FluxUnit::Lmh => "LMH",
        }
    }
}

/// 주어진 플럭스를 gfd 로 변환한다.
pub fn to_gfd(value: f64, unit: FluxUnit) -> f64 {
    match unit {
        FluxUnit::Gfd => value,
        FluxUnit::Lmh => value * GFD_PER_LMH,
    }
}

/// gfd 값을 원하는 단위로 변환한다.
pub fn from_gfd(value_gfd: f64, unit: FluxUnit) -> f64 {
    match unit {
        FluxUnit::Gfd => value_gfd,
        FluxUnit::Lmh => value_gfd / GFD_PER_LMH,
    }
}

/// 플럭스를 원하는 단위로 변환한다.
pub fn convert_flux(value: f64, from: FluxUnit, to: FluxUnit) -> f64 {
    let gfd = to_gfd(value, from);
    from_gfd(gfd, to)
}
