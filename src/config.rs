use std::fs;
use std::io::ErrorKind;

use serde::{Deserialize, Serialize};

use crate::units::{DoseUnit, FlowUnit, FluxUnit, PressureUnit};

const CONFIG_FILE: &str = "config.toml";

/// 애플리케이션 설정. 실행 디렉터리의 config.toml과 대응된다.
/// 일부 키만 있는 파일도 허용하고 빠진 키는 기본값으로 채운다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 표시 언어 코드 ("auto"면 시스템 로캘 감지)
    pub language: String,
    /// 언어팩 디렉터리 경로 (없으면 locales/ 탐색)
    pub language_pack_dir: Option<String>,
    pub default_units: DefaultUnits,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            language: "auto".to_string(),
            language_pack_dir: None,
            default_units: DefaultUnits::default(),
        }
    }
}

/// 새 세션에 쓰이는 물리량별 기본 단위.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub flow: FlowUnit,
    pub flux: FluxUnit,
    pub pressure: PressureUnit,
    pub dose: DoseUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        DefaultUnits {
            flow: FlowUnit::M3PerH,
            flux: FluxUnit::Gfd,
            pressure: PressureUnit::Psi,
            dose: DoseUnit::MgPerL,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Encode(toml::ser::Error),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "설정 파일을 읽거나 쓰지 못했습니다: {e}"),
            ConfigError::Parse(e) => write!(f, "config.toml 형식이 잘못되었습니다: {e}"),
            ConfigError::Encode(e) => write!(f, "설정을 TOML로 만들지 못했습니다: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(value: std::io::Error) -> Self {
        ConfigError::Io(value)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(value: toml::de::Error) -> Self {
        ConfigError::Parse(value)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(value: toml::ser::Error) -> Self {
        ConfigError::Encode(value)
    }
}

impl Config {
    /// config.toml을 읽는다. 파일이 없으면 기본 설정을 만들어 저장한 뒤 반환한다.
    pub fn load_or_init() -> Result<Config, ConfigError> {
        match fs::read_to_string(CONFIG_FILE) {
            Ok(content) => Ok(toml::from_str(&content)?),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                let cfg = Config::default();
                cfg.save()?;
                Ok(cfg)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// 현재 설정을 config.toml에 기록한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(CONFIG_FILE, content)?;
        Ok(())
    }
}
