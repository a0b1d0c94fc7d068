use serde::{Deserialize, Serialize};

/// 온도 단위. 수질 입력이 °C 기준이므로 섭씨를 변환 기준으로 둔다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TemperatureUnit {
    Celsius,
    Kelvin,
    Fahrenheit,
}

impl TemperatureUnit {
    pub fn symbol(&self) -> &'static str {
        match self {
            TemperatureUnit::Celsius => "°C",
            TemperatureUnit::Kelvin => "K",
            TemperatureUnit::Fahrenheit => "°F",
        }
    }
}

/// 주어진 값을 섭씨로 환산한다.
pub fn to_celsius(value: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value,
        TemperatureUnit::Kelvin => value - 273.15,
        TemperatureUnit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
    }
}

/// 섭씨 값을 원하는 단위로 환산한다.
pub fn from_celsius(value_c: f64, unit: TemperatureUnit) -> f64 {
    match unit {
        TemperatureUnit::Celsius => value_c,
        TemperatureUnit::Kelvin => value_c + 273.15,
        TemperatureUnit::Fahrenheit => value_c * 9.0 / 5.0 + 32.0,
    }
}

/// 온도를 서로 다른 단위로 변환한다.
pub fn convert_temperature(value: f64, from: TemperatureUnit, to: TemperatureUnit) -> f64 {
    from_celsius(to_celsius(value, from), to)
}

/// 삼투압 계산처럼 절대온도가 필요한 곳에서 쓰는 섭씨 → 켈빈 환산.
pub fn celsius_to_kelvin(value_c: f64) -> f64 {
    value_c + 273.15
}
