use std::fmt;

use crate::config::{Config, ConfigError};
use crate::conversion::ConversionError;
use crate::i18n::{keys, Translator};
use crate::project::{ProjectError, ProjectFile, ProjectInfo};
use crate::projection::engine::{run_projection, SystemConfig};
use crate::projection::stage::StageConfig;
use crate::ui_cli::{self, MenuChoice};
use crate::water::analysis::WaterAnalysis;

/// 애플리케이션 공통 오류.
#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Config(ConfigError),
    Conversion(ConversionError),
    Project(ProjectError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Io(err) => write!(f, "입출력 오류: {err}"),
            AppError::Config(err) => write!(f, "설정 오류: {err}"),
            AppError::Conversion(err) => write!(f, "변환 오류: {err}"),
            AppError::Project(err) => write!(f, "프로젝트 파일 오류: {err}"),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<ConfigError> for AppError {
    fn from(err: ConfigError) -> Self {
        AppError::Config(err)
    }
}

impl From<ConversionError> for AppError {
    fn from(err: ConversionError) -> Self {
        AppError::Conversion(err)
    }
}

impl From<ProjectError> for AppError {
    fn from(err: ProjectError) -> Self {
        AppError::Project(err)
    }
}

/// 세션 상태. 대화형/배치 모두 수질과 시스템 구성을 여기에 둔다.
#[derive(Debug, Clone)]
pub struct Session {
    pub project: ProjectInfo,
    pub water: WaterAnalysis,
    pub system: SystemConfig,
}

impl Session {
    /// 설정의 기본 단위를 반영한 새 세션.
    pub fn new(config: &Config) -> Self {
        let system = SystemConfig {
            flow_unit: config.default_units.flow,
            dose_unit: config.default_units.dose,
            ..SystemConfig::default()
        };
        Session {
            project: ProjectInfo::default(),
            water: WaterAnalysis::default(),
            system,
        }
    }

    /// 프로젝트 파일 내용으로 세션을 만든다.
    pub fn from_project(file: ProjectFile) -> Self {
        Session {
            project: file.project,
            water: file.water.sanitized(),
            system: file.system,
        }
    }
}

/// 대화형 메인 루프. 종료 선택까지 메뉴를 반복한다.
pub fn run(config: &mut Config, tr: &Translator, session: &mut Session) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::UnitConversion => ui_cli::handle_unit_conversion(tr)?,
            MenuChoice::WaterAnalysis => ui_cli::handle_water_analysis(tr, session)?,
            MenuChoice::Projection => ui_cli::handle_projection(tr, session)?,
            MenuChoice::PreTreatment => ui_cli::handle_pretreatment(tr, session)?,
            MenuChoice::PostTreatment => ui_cli::handle_posttreatment(tr, session)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                println!("{}", tr.t(keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// 배치 모드. 불러온 프로젝트로 프로젝션을 1회 실행하고 결과만 출력한다.
pub fn run_batch(tr: &Translator, session: &Session) -> Result<(), AppError> {
    if !session.project.name.is_empty() {
        println!("{} {}", tr.t(keys::PROJECT_LABEL), session.project.name);
    }
    if !session.project.client.is_empty() {
        println!("{} {}", tr.t(keys::CLIENT_LABEL), session.project.client);
    }

    if session.system.stages.iter().any(StageConfig::is_active) {
        let result = run_projection(&session.water, &session.system);
        ui_cli::print_projection_result(tr, &session.system, &result);
    } else {
        println!("{}", tr.t(keys::PROJECTION_NO_ACTIVE_STAGE));
    }
    Ok(())
}
