use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::projection::engine::SystemConfig;
use crate::water::analysis::WaterAnalysis;

/// 프로젝트 메타 정보.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectInfo {
    pub name: String,
    pub client: String,
    pub calculated_by: String,
    /// 표준 수질 프로파일 id (참고용)
    pub water_type: String,
}

/// 프로젝트 파일(TOML) 내용. 수질 분석과 시스템 구성을 한 벌로 담는다.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectFile {
    pub project: ProjectInfo,
    pub water: WaterAnalysis,
    pub system: SystemConfig,
}

/// 프로젝트 파일 로드 시 발생 가능한 오류.
#[derive(Debug)]
pub enum ProjectError {
    /// 파일 입출력 오류
    Io(std::io::Error),
    /// TOML 파싱 오류
    Parse(toml::de::Error),
}

impl std::fmt::Display for ProjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProjectError::Io(e) => write!(f, "프로젝트 파일 입출력 오류: {e}"),
            ProjectError::Parse(e) => write!(f, "프로젝트 파일 파싱 오류: {e}"),
        }
    }
}

impl std::error::Error for ProjectError {}

impl From<std::io::Error> for ProjectError {
    fn from(value: std::io::Error) -> Self {
        ProjectError::Io(value)
    }
}

impl From<toml::de::Error> for ProjectError {
    fn from(value: toml::de::Error) -> Self {
        ProjectError::Parse(value)
    }
}

/// TOML 문자열을 프로젝트로 파싱한다. 빠진 필드는 기본값으로 채운다.
pub fn parse_project(content: &str) -> Result<ProjectFile, ProjectError> {
    Ok(toml::from_str(content)?)
}

/// 경로에서 프로젝트 파일을 읽는다.
pub fn load_project(path: &Path) -> Result<ProjectFile, ProjectError> {
    let content = fs::read_to_string(path)?;
    parse_project(&content)
}
