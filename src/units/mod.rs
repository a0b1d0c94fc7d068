//! 단위 정의 및 변환 모듈 모음.

pub mod dose;
pub mod flow;
pub mod flux;
pub mod pressure;
pub mod temperature;

pub use dose::{chemical_feed_kg_per_h, DoseUnit};
pub use flow::{convert_flow, from_m3_per_h, to_m3_per_h, FlowUnit};
pub use flux::{convert_flux, from_gfd, to_gfd, FluxUnit};
pub use pressure::{convert_pressure, from_psi, to_psi, PressureUnit};
pub use temperature::{
    celsius_to_kelvin, convert_temperature, from_celsius, to_celsius, TemperatureUnit,
};
