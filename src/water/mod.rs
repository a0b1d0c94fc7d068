//! 수질 분석 관련 모듈 모음.
//! 이온 조성, 이온 밸런스, 표준 수질 프로파일, 탄산계 추정, 스케일 지수로 구성한다.

pub mod analysis;
pub mod balance;
pub mod carbonate;
pub mod profiles;
pub mod scaling;

pub use analysis::{Ion, IonComposition, WaterAnalysis};
pub use balance::{auto_balance, ionic_balance, IonicBalance};
pub use profiles::{apply_tds_profile, find_profile, profiles, WaterTypeProfile};
pub use scaling::{langelier_index, saturation_levels, SaturationLevels, ScalingIndices};
