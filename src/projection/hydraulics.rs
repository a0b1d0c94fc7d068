use crate::units::celsius_to_kelvin;

/// 회수율 입력이 비었을 때 쓰는 기본값 (%).
pub const DEFAULT_RECOVERY_PCT: f64 = 15.0;

/// 전체 유량 밸런스 (모두 m³/h).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HydraulicBalance {
    pub feed_m3_per_h: f64,
    pub permeate_m3_per_h: f64,
    pub concentrate_m3_per_h: f64,
}

/// 회수율(%)을 정리한다. 0이나 비정상 입력은 기본값으로 바꾸고 1~99%로 제한한다.
pub fn clamp_recovery_pct(pct: f64) -> f64 {
    let p = if pct.is_finite() && pct != 0.0 {
        pct
    } else {
        DEFAULT_RECOVERY_PCT
    };
    p.clamp(1.0, 99.0)
}

/// 목표 생산수량과 회수율 분율로 공급/농축 유량을 계산한다.
pub fn balance_flows(permeate_m3_per_h: f64, recovery_fraction: f64) -> HydraulicBalance {
    let feed = permeate_m3_per_h / recovery_fraction;
    HydraulicBalance {
        feed_m3_per_h: feed,
        permeate_m3_per_h,
        concentrate_m3_per_h: feed - permeate_m3_per_h,
    }
}

/// 농축 배율 CF = 1/(1-r). 전처리 간이 평가에서 쓴다.
pub fn concentration_factor(recovery_fraction: f64) -> f64 {
    1.0 / (1.0 - recovery_fraction)
}

/// 막면 평균 농축 배율 cf = ln(1/(1-r))/r. 이온 통과 계산에서 쓴다.
pub fn log_mean_concentration_factor(recovery_fraction: f64) -> f64 {
    (1.0 / (1.0 - recovery_fraction)).ln() / recovery_fraction
}

/// 삼투압 (psi). van't Hoff 근사: 0.0385 × TDS × T(K) / 1000.
pub fn osmotic_pressure_psi(tds_mg_per_l: f64, temperature_c: f64) -> f64 {
    0.0385 * tds_mg_per_l * celsius_to_kelvin(temperature_c) / 1000.0
}
