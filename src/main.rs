use std::path::PathBuf;

use clap::Parser;

use ro_design_toolbox::app::{self, AppError, Session};
use ro_design_toolbox::config::Config;
use ro_design_toolbox::i18n::{resolve_language, Translator};
use ro_design_toolbox::project::load_project;

/// RO 시스템 설계 계산 툴박스.
#[derive(Debug, Parser)]
#[command(name = "ro_design_toolbox", version, about = "RO 시스템 설계 계산 툴박스 CLI")]
struct CliArgs {
    /// 표시 언어 (ko, en, auto)
    #[arg(long, default_value = "auto")]
    lang: String,

    /// 시작 시 불러올 프로젝트 파일 (TOML)
    #[arg(long)]
    project: Option<PathBuf>,

    /// 메뉴 없이 프로젝션 1회 실행 후 종료
    #[arg(long)]
    batch: bool,
}

fn main() {
    if let Err(err) = try_run() {
        eprintln!("오류: {err}");
    }
}

fn try_run() -> Result<(), AppError> {
    let args = CliArgs::parse();

    let mut config = Config::load_or_init()?;
    let lang = resolve_language(&args.lang, Some(config.language.as_str()));
    let tr = Translator::load(&lang, config.language_pack_dir.as_deref());

    let mut session = match &args.project {
        Some(path) => Session::from_project(load_project(path)?),
        None => Session::new(&config),
    };

    if args.batch {
        app::run_batch(&tr, &session)
    } else {
        app::run(&mut config, &tr, &mut session)
    }
}
