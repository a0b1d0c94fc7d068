use crate::quantity::QuantityKind;
use crate::units::*;

/// 단위 변환 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConversionError {
    /// 알 수 없는 단위 문자열
    UnknownUnit(String),
}

impl std::fmt::Display for ConversionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConversionError::UnknownUnit(u) => write!(f, "지원하지 않는 단위 문자열: {u}"),
        }
    }
}

impl std::error::Error for ConversionError {}

const FLOW_ALIASES: &[(&str, FlowUnit)] = &[
    ("gpm", FlowUnit::Gpm),
    ("gpd", FlowUnit::Gpd),
    ("mgd", FlowUnit::Mgd),
    ("migd", FlowUnit::Migd),
    ("m3/h", FlowUnit::M3PerH),
    ("m3h", FlowUnit::M3PerH),
    ("m^3/h", FlowUnit::M3PerH),
    ("cmh", FlowUnit::M3PerH),
    ("m3/d", FlowUnit::M3PerD),
    ("m3d", FlowUnit::M3PerD),
    ("m^3/d", FlowUnit::M3PerD),
    ("cmd", FlowUnit::M3PerD),
    ("mld", FlowUnit::Mld),
];

const FLUX_ALIASES: &[(&str, FluxUnit)] = &[("gfd", FluxUnit::Gfd), ("lmh", FluxUnit::Lmh)];

const PRESSURE_ALIASES: &[(&str, PressureUnit)] = &[
    ("psi", PressureUnit::Psi),
    ("bar", PressureUnit::Bar),
    ("kpa", PressureUnit::KiloPascal),
    ("kilopascal", PressureUnit::KiloPascal),
];

const TEMPERATURE_ALIASES: &[(&str, TemperatureUnit)] = &[
    ("c", TemperatureUnit::Celsius),
    ("celsius", TemperatureUnit::Celsius),
    ("°c", TemperatureUnit::Celsius),
    ("k", TemperatureUnit::Kelvin),
    ("kelvin", TemperatureUnit::Kelvin),
    ("f", TemperatureUnit::Fahrenheit),
    ("fahrenheit", TemperatureUnit::Fahrenheit),
    ("°f", TemperatureUnit::Fahrenheit),
];

/// 별칭 테이블에서 단위를 찾는다. 대소문자와 앞뒤 공백은 무시한다.
fn find_unit<T: Copy>(s: &str, table: &[(&str, T)]) -> Result<T, ConversionError> {
    let wanted = s.trim().to_lowercase();
    table
        .iter()
        .find(|(alias, _)| *alias == wanted)
        .map(|(_, unit)| *unit)
        .ok_or_else(|| ConversionError::UnknownUnit(s.to_string()))
}

/// 문자열로 전달된 단위명을 해석해 지정된 단위로 환산한다.
///
/// `gpm`, `m3/h`, `gfd`, `psi`, `C` 같은 흔한 표기를 별칭으로 받는다.
pub fn convert(
    kind: QuantityKind,
    value: f64,
    from_unit_str: &str,
    to_unit_str: &str,
) -> Result<f64, ConversionError> {
    match kind {
        QuantityKind::Flow => {
            let from = find_unit(from_unit_str, FLOW_ALIASES)?;
            let to = find_unit(to_unit_str, FLOW_ALIASES)?;
            Ok(convert_flow(value, from, to))
        }
        QuantityKind::Flux => {
            let from = find_unit(from_unit_str, FLUX_ALIASES)?;
            let to = find_unit(to_unit_str, FLUX_ALIASES)?;
            Ok(convert_flux(value, from, to))
        }
        QuantityKind::Pressure => {
            let from = find_unit(from_unit_str, PRESSURE_ALIASES)?;
            let to = find_unit(to_unit_str, PRESSURE_ALIASES)?;
            Ok(convert_pressure(value, from, to))
        }
        QuantityKind::Temperature => {
            let from = find_unit(from_unit_str, TEMPERATURE_ALIASES)?;
            let to = find_unit(to_unit_str, TEMPERATURE_ALIASES)?;
            Ok(convert_temperature(value, from, to))
        }
    }
}
