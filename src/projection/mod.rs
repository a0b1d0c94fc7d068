//! RO 프로젝션 엔진 모듈 모음.
//! 유량 밸런스, 스테이지 수리 계산, 이온 통과 모델, 전체 오케스트레이션,
//! 설계 검증으로 구성한다.

pub mod engine;
pub mod hydraulics;
pub mod solutes;
pub mod stage;
pub mod validation;

pub use engine::{run_projection, ProjectionResult, StreamQuality, SystemConfig};
pub use hydraulics::{balance_flows, clamp_recovery_pct, osmotic_pressure_psi, HydraulicBalance};
pub use stage::{compute_stage, StageConfig, StageResult};
pub use validation::{validate_design, CheckStatus, DesignCheck};
