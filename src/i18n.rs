use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const APP_EXIT: &str = "general.app_exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const PROMPT_SELECT: &str = "prompt.select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_UNIT_CONVERSION: &str = "main_menu.unit_conversion";
    pub const MAIN_MENU_WATER: &str = "main_menu.water";
    pub const MAIN_MENU_PROJECTION: &str = "main_menu.projection";
    pub const MAIN_MENU_PRETREATMENT: &str = "main_menu.pretreatment";
    pub const MAIN_MENU_POSTTREATMENT: &str = "main_menu.posttreatment";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";

    pub const PROJECT_LABEL: &str = "project.name_label";
    pub const CLIENT_LABEL: &str = "project.client_label";

    pub const UNIT_CONVERSION_HEADING: &str = "unit_conversion.heading";
    pub const UNIT_CONVERSION_OPTIONS: &str = "unit_conversion.options";
    pub const UNIT_CONVERSION_PROMPT_KIND: &str = "unit_conversion.prompt_kind";
    pub const UNIT_CONVERSION_PROMPT_VALUE: &str = "unit_conversion.prompt_value";
    pub const UNIT_CONVERSION_PROMPT_FROM_UNIT: &str = "unit_conversion.prompt_from_unit";
    pub const UNIT_CONVERSION_PROMPT_TO_UNIT: &str = "unit_conversion.prompt_to_unit";
    pub const UNIT_CONVERSION_RESULT: &str = "unit_conversion.result";
    pub const UNIT_CONVERSION_UNSUPPORTED: &str = "unit_conversion.unsupported";

    pub const WATER_HEADING: &str = "water.heading";
    pub const WATER_OPTIONS: &str = "water.options";
    pub const WATER_PROMPT_PH: &str = "water.prompt_ph";
    pub const WATER_PROMPT_TEMPERATURE: &str = "water.prompt_temperature";
    pub const WATER_PROMPT_TDS: &str = "water.prompt_tds";
    pub const WATER_PROFILE_HEADING: &str = "water.profile_heading";
    pub const WATER_PROMPT_PROFILE: &str = "water.prompt_profile";
    pub const WATER_BALANCE_HEADING: &str = "water.balance_heading";
    pub const WATER_AUTO_BALANCE_NONE: &str = "water.auto_balance_none";
    pub const WATER_SUMMARY_HEADING: &str = "water.summary_heading";

    pub const PROJECTION_HEADING: &str = "projection.heading";
    pub const PROJECTION_OPTIONS: &str = "projection.options";
    pub const PROJECTION_PROMPT_PERMEATE: &str = "projection.prompt_permeate";
    pub const PROJECTION_PROMPT_RECOVERY: &str = "projection.prompt_recovery";
    pub const PROJECTION_PROMPT_TRAINS: &str = "projection.prompt_trains";
    pub const PROJECTION_PROMPT_STAGES: &str = "projection.prompt_stages";
    pub const PROJECTION_STAGE_LABEL: &str = "projection.stage_label";
    pub const PROJECTION_PROMPT_VESSELS: &str = "projection.prompt_vessels";
    pub const PROJECTION_PROMPT_ELEMENTS: &str = "projection.prompt_elements";
    pub const PROJECTION_PROMPT_MEMBRANE: &str = "projection.prompt_membrane";
    pub const PROJECTION_PROMPT_AGE: &str = "projection.prompt_age";
    pub const PROJECTION_PROMPT_FLUX_DECLINE: &str = "projection.prompt_flux_decline";
    pub const PROJECTION_PROMPT_FOULING: &str = "projection.prompt_fouling";
    pub const PROJECTION_PROMPT_SP_INCREASE: &str = "projection.prompt_sp_increase";
    pub const PROJECTION_PROMPT_CHEMICAL: &str = "projection.prompt_chemical";
    pub const PROJECTION_PROMPT_DOSE: &str = "projection.prompt_dose";
    pub const PROJECTION_PROMPT_STRENGTH: &str = "projection.prompt_strength";
    pub const PROJECTION_CONFIG_SAVED: &str = "projection.config_saved";
    pub const PROJECTION_RESULT_HEADING: &str = "projection.result_heading";
    pub const PROJECTION_NO_ACTIVE_STAGE: &str = "projection.no_active_stage";

    pub const MEMBRANE_HEADING: &str = "membrane.heading";
    pub const CHEMICAL_OPTIONS: &str = "chemical.options";
    pub const FLOW_UNIT_OPTIONS: &str = "unit.flow_options";
    pub const DOSE_UNIT_OPTIONS: &str = "unit.dose_options";
    pub const FLUX_UNIT_OPTIONS: &str = "unit.flux_options";
    pub const PRESSURE_UNIT_OPTIONS: &str = "unit.pressure_options";

    pub const PRETREATMENT_HEADING: &str = "pretreatment.heading";
    pub const PRETREATMENT_PROMPT_AS: &str = "pretreatment.prompt_antiscalant";
    pub const PRETREATMENT_PROMPT_SBS: &str = "pretreatment.prompt_sbs";

    pub const POSTTREATMENT_HEADING: &str = "posttreatment.heading";
    pub const POSTTREATMENT_PROMPT_CAUSTIC: &str = "posttreatment.prompt_caustic";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
    pub const SETTINGS_LANGUAGE_OPTIONS: &str = "settings.language_options";
    pub const SETTINGS_RESTART_NOTE: &str = "settings.restart_note";

    pub const HELP_UNIT_CONVERSION: &str = "help.unit_conversion";
    pub const HELP_WATER: &str = "help.water";
    pub const HELP_PROJECTION: &str = "help.projection";
    pub const HELP_PRETREATMENT: &str = "help.pretreatment";
    pub const HELP_POSTTREATMENT: &str = "help.posttreatment";
    pub const HELP_SETTINGS: &str = "help.settings";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let base = code
            .to_lowercase()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_string();
        if base == "en" {
            Language::En
        } else {
            Language::Ko
        }
    }
}

/// 런타임 언어 번들. 언어팩 파일이 내장 문자열보다 우선한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    pack: HashMap<String, String>,
}

impl Translator {
    /// 언어 코드와 언어팩 디렉터리로 번역기를 만든다.
    /// 디렉터리나 파일이 없으면 내장 문자열만 쓴다.
    pub fn load(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let mut pack = HashMap::new();
        if let Some(dir) = pack_dir {
            pack = load_pack(dir, lang_code);
        }
        if pack.is_empty() {
            pack = load_pack("locales", lang_code);
        }
        Translator {
            lang: Language::from_code(lang_code),
            pack,
        }
    }

    /// 키에 해당하는 문자열을 돌려준다. 영어에 없는 키는 한국어로 폴백한다.
    pub fn t(&self, key: &str) -> &'static str {
        if let Some(v) = self.pack.get(key) {
            return Box::leak(v.clone().into_boxed_str());
        }
        match self.lang {
            Language::En => en(key).unwrap_or_else(|| ko(key)),
            Language::Ko => ko(key),
        }
    }
}

/// CLI 플래그 → 설정 → 시스템 로캘 순으로 언어 코드를 정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    for candidate in [Some(cli_arg), config_lang].into_iter().flatten() {
        if let Some(code) = normalize_lang(candidate) {
            return code;
        }
    }
    system_language().unwrap_or_else(|| "en-us".to_string())
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    if c.is_empty() || c == "auto" {
        return None;
    }
    match c.split(['-', '_']).next().unwrap_or_default() {
        "ko" => Some(if c == "ko-kr" { "ko-kr".into() } else { "ko".into() }),
        "en" => Some(if c == "en" { "en".into() } else { "en-us".into() }),
        _ => None,
    }
}

fn base_language(locale: &str) -> Option<String> {
    let base = locale
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match base.as_str() {
        "ko" | "en" => Some(base),
        _ => None,
    }
}

/// 시스템 로캘과 LANG/LC_ALL 환경변수에서 언어를 추정한다.
fn system_language() -> Option<String> {
    let mut candidates = Vec::new();
    if let Some(loc) = get_locale() {
        candidates.push(loc);
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(var) {
            candidates.push(value);
        }
    }
    candidates.iter().find_map(|loc| base_language(loc))
}

/// 디렉터리에서 {코드}.toml → {기본 코드}.toml 순서로 언어팩을 찾는다.
fn load_pack(dir: &str, lang: &str) -> HashMap<String, String> {
    let mut names = vec![format!("{lang}.toml")];
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        names.push(format!("{base}.toml"));
    }
    for name in names {
        if let Ok(content) = fs::read_to_string(Path::new(dir).join(&name)) {
            let map = flatten_toml(&content);
            if !map.is_empty() {
                return map;
            }
        }
    }
    HashMap::new()
}

/// 중첩 테이블을 "섹션.키" 형태의 플랫 맵으로 푼다. 문자열 값만 취한다.
fn flatten_toml(src: &str) -> HashMap<String, String> {
    let mut map = HashMap::new();
    if let Ok(value) = src.parse::<toml::Value>() {
        if let Some(table) = value.as_table() {
            for (key, val) in table {
                collect_strings(key, val, &mut map);
            }
        }
    }
    map
}

fn collect_strings(prefix: &str, value: &toml::Value, out: &mut HashMap<String, String>) {
    match value {
        toml::Value::String(s) => {
            out.insert(prefix.to_string(), s.clone());
        }
        toml::Value::Table(table) => {
            for (key, val) in table {
                collect_strings(&format!("{prefix}.{key}"), val, out);
            }
        }
        _ => {}
    }
}

fn ko(key: &str) -> &'static str {
    use keys::*;
    match key {
        APP_EXIT => "프로그램을 종료합니다.",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        PROMPT_SELECT => "선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        MAIN_MENU_TITLE => "\n=== RO Design Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) 단위 변환기",
        MAIN_MENU_WATER => "2) 수질 분석",
        MAIN_MENU_PROJECTION => "3) RO 프로젝션",
        MAIN_MENU_PRETREATMENT => "4) 전처리 평가",
        MAIN_MENU_POSTTREATMENT => "5) 후처리 평가",
        MAIN_MENU_SETTINGS => "6) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROJECT_LABEL => "프로젝트:",
        CLIENT_LABEL => "고객사:",
        UNIT_CONVERSION_HEADING => "\n-- 단위 변환 --",
        UNIT_CONVERSION_OPTIONS => "1) 유량  2) 플럭스  3) 압력  4) 온도",
        UNIT_CONVERSION_PROMPT_KIND => "항목 번호를 입력: ",
        UNIT_CONVERSION_PROMPT_VALUE => "값 입력: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "입력 단위(ex: gpm, m3/h, psi): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "변환 단위(ex: m3/d, gfd, bar): ",
        UNIT_CONVERSION_RESULT => "변환 결과:",
        UNIT_CONVERSION_UNSUPPORTED => "지원하지 않는 번호입니다.",
        WATER_HEADING => "\n-- 수질 분석 --",
        WATER_OPTIONS => "1) 이온 직접 입력  2) TDS 프로파일 합성  3) 자동 밸런스  4) 분석 요약",
        WATER_PROMPT_PH => "pH: ",
        WATER_PROMPT_TEMPERATURE => "수온 [°C]: ",
        WATER_PROMPT_TDS => "목표 TDS [mg/L]: ",
        WATER_PROFILE_HEADING => "표준 수질 프로파일:",
        WATER_PROMPT_PROFILE => "프로파일 번호: ",
        WATER_BALANCE_HEADING => "이온 밸런스:",
        WATER_AUTO_BALANCE_NONE => "이미 균형 상태입니다. 보정하지 않습니다.",
        WATER_SUMMARY_HEADING => "\n-- 수질 분석 요약 --",
        PROJECTION_HEADING => "\n-- RO 프로젝션 --",
        PROJECTION_OPTIONS => "1) 시스템 구성  2) 프로젝션 실행",
        PROJECTION_PROMPT_PERMEATE => "목표 생산수량: ",
        PROJECTION_PROMPT_RECOVERY => "시스템 회수율 [%]: ",
        PROJECTION_PROMPT_TRAINS => "트레인 수: ",
        PROJECTION_PROMPT_STAGES => "스테이지 수 (1~6): ",
        PROJECTION_STAGE_LABEL => "스테이지",
        PROJECTION_PROMPT_VESSELS => "베셀 수: ",
        PROJECTION_PROMPT_ELEMENTS => "베셀당 엘리먼트 수: ",
        PROJECTION_PROMPT_MEMBRANE => "막 번호: ",
        PROJECTION_PROMPT_AGE => "막 사용 연수 [yr]: ",
        PROJECTION_PROMPT_FLUX_DECLINE => "연간 플럭스 감소율 [%/yr]: ",
        PROJECTION_PROMPT_FOULING => "파울링 계수 (0.5~1.0): ",
        PROJECTION_PROMPT_SP_INCREASE => "연간 염 통과 증가율 [%/yr]: ",
        PROJECTION_PROMPT_CHEMICAL => "약품 번호: ",
        PROJECTION_PROMPT_DOSE => "주입 농도: ",
        PROJECTION_PROMPT_STRENGTH => "원액 농도 [%]: ",
        PROJECTION_CONFIG_SAVED => "시스템 구성이 반영되었습니다.",
        PROJECTION_RESULT_HEADING => "\n-- 프로젝션 결과 --",
        PROJECTION_NO_ACTIVE_STAGE => "활성 스테이지가 없습니다. 먼저 시스템을 구성하세요.",
        MEMBRANE_HEADING => "막 카탈로그:",
        CHEMICAL_OPTIONS => "약품: 1=없음 2=안티스칼란트 3=SBS 4=황산 5=가성소다",
        FLOW_UNIT_OPTIONS => "유량 단위: 1=m3/h 2=m3/d 3=gpm 4=gpd 5=mgd 6=migd 7=mld",
        DOSE_UNIT_OPTIONS => "주입 단위: 1=mg/l 2=lb/hr 3=kg/hr",
        FLUX_UNIT_OPTIONS => "플럭스 단위: 1=gfd 2=LMH",
        PRESSURE_UNIT_OPTIONS => "압력 단위: 1=psi 2=bar 3=kPa",
        PRETREATMENT_HEADING => "\n-- 전처리 평가 --",
        PRETREATMENT_PROMPT_AS => "안티스칼란트 주입 농도 [mg/L]: ",
        PRETREATMENT_PROMPT_SBS => "SBS 주입 농도 [mg/L]: ",
        POSTTREATMENT_HEADING => "\n-- 후처리 평가 --",
        POSTTREATMENT_PROMPT_CAUSTIC => "가성소다 주입 농도 [mg/L]: ",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 설정:",
        SETTINGS_OPTIONS => "1) 언어  2) 기본 유량 단위  3) 기본 주입 단위  4) 기본 플럭스 단위  5) 기본 압력 단위",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정이 저장되었습니다.",
        SETTINGS_LANGUAGE_OPTIONS => "언어: 1=한국어 2=English",
        SETTINGS_RESTART_NOTE => "언어 변경은 다음 실행부터 적용됩니다.",
        HELP_UNIT_CONVERSION => {
            "도움말: 물리량 번호 → 값 → 입력/변환 단위 순으로 입력 (예: gpm/m3/h/mgd, gfd/lmh, psi/bar/kpa, C/K/F)."
        }
        HELP_WATER => "도움말: 이온 농도는 mg/L 기준입니다. TDS 프로파일 합성은 주요 이온만 덮어쓰고 미량 성분은 보존합니다.",
        HELP_PROJECTION => "도움말: 시스템 구성을 먼저 저장한 뒤 실행하세요. 스테이지는 앞 단 농축수가 다음 단 공급수가 됩니다.",
        HELP_PRETREATMENT => "도움말: 현재 세션의 수질과 회수율로 농축수 스케일 위험을 간이 평가합니다.",
        HELP_POSTTREATMENT => "도움말: 생산수에 가성소다를 주입했을 때의 최종 pH와 월간 사용량을 평가합니다.",
        HELP_SETTINGS => "도움말: 기본 단위는 새 세션의 초기값으로 쓰입니다.",
        _ => "[missing translation]",
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        APP_EXIT => "Exiting application.",
        PROMPT_MENU_SELECT => "Select menu: ",
        PROMPT_SELECT => "Select: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        MAIN_MENU_TITLE => "\n=== RO Design Toolbox ===",
        MAIN_MENU_UNIT_CONVERSION => "1) Unit Converter",
        MAIN_MENU_WATER => "2) Water Analysis",
        MAIN_MENU_PROJECTION => "3) RO Projection",
        MAIN_MENU_PRETREATMENT => "4) Pre-Treatment Advisor",
        MAIN_MENU_POSTTREATMENT => "5) Post-Treatment Advisor",
        MAIN_MENU_SETTINGS => "6) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROJECT_LABEL => "Project:",
        CLIENT_LABEL => "Client:",
        UNIT_CONVERSION_HEADING => "\n-- Unit Conversion --",
        UNIT_CONVERSION_OPTIONS => "1) Flow  2) Flux  3) Pressure  4) Temperature",
        UNIT_CONVERSION_PROMPT_KIND => "Enter item number: ",
        UNIT_CONVERSION_PROMPT_VALUE => "Value: ",
        UNIT_CONVERSION_PROMPT_FROM_UNIT => "From unit (ex: gpm, m3/h, psi): ",
        UNIT_CONVERSION_PROMPT_TO_UNIT => "To unit (ex: m3/d, gfd, bar): ",
        UNIT_CONVERSION_RESULT => "Result:",
        UNIT_CONVERSION_UNSUPPORTED => "Unsupported selection.",
        WATER_HEADING => "\n-- Water Analysis --",
        WATER_OPTIONS => "1) Enter ions  2) Synthesize from TDS  3) Auto-balance  4) Summary",
        WATER_PROMPT_PH => "pH: ",
        WATER_PROMPT_TEMPERATURE => "Temperature [°C]: ",
        WATER_PROMPT_TDS => "Target TDS [mg/L]: ",
        WATER_PROFILE_HEADING => "Standard water profiles:",
        WATER_PROMPT_PROFILE => "Profile number: ",
        WATER_BALANCE_HEADING => "Ionic balance:",
        WATER_AUTO_BALANCE_NONE => "Already balanced; nothing to adjust.",
        WATER_SUMMARY_HEADING => "\n-- Water Analysis Summary --",
        PROJECTION_HEADING => "\n-- RO Projection --",
        PROJECTION_OPTIONS => "1) Configure system  2) Run projection",
        PROJECTION_PROMPT_PERMEATE => "Target permeate flow: ",
        PROJECTION_PROMPT_RECOVERY => "System recovery [%]: ",
        PROJECTION_PROMPT_TRAINS => "Number of trains: ",
        PROJECTION_PROMPT_STAGES => "Number of stages (1-6): ",
        PROJECTION_STAGE_LABEL => "Stage",
        PROJECTION_PROMPT_VESSELS => "Vessels: ",
        PROJECTION_PROMPT_ELEMENTS => "Elements per vessel: ",
        PROJECTION_PROMPT_MEMBRANE => "Membrane number: ",
        PROJECTION_PROMPT_AGE => "Membrane age [yr]: ",
        PROJECTION_PROMPT_FLUX_DECLINE => "Flux decline [%/yr]: ",
        PROJECTION_PROMPT_FOULING => "Fouling factor (0.5-1.0): ",
        PROJECTION_PROMPT_SP_INCREASE => "Salt-passage increase [%/yr]: ",
        PROJECTION_PROMPT_CHEMICAL => "Chemical number: ",
        PROJECTION_PROMPT_DOSE => "Dose: ",
        PROJECTION_PROMPT_STRENGTH => "Chemical strength [%]: ",
        PROJECTION_CONFIG_SAVED => "System configuration updated.",
        PROJECTION_RESULT_HEADING => "\n-- Projection Result --",
        PROJECTION_NO_ACTIVE_STAGE => "No active stage. Configure the system first.",
        MEMBRANE_HEADING => "Membrane catalog:",
        CHEMICAL_OPTIONS => "Chemical: 1=None 2=Antiscalant 3=SBS 4=H2SO4 5=NaOH",
        FLOW_UNIT_OPTIONS => "Flow units: 1=m3/h 2=m3/d 3=gpm 4=gpd 5=mgd 6=migd 7=mld",
        DOSE_UNIT_OPTIONS => "Dose units: 1=mg/l 2=lb/hr 3=kg/hr",
        FLUX_UNIT_OPTIONS => "Flux units: 1=gfd 2=LMH",
        PRESSURE_UNIT_OPTIONS => "Pressure units: 1=psi 2=bar 3=kPa",
        PRETREATMENT_HEADING => "\n-- Pre-Treatment Advisor --",
        PRETREATMENT_PROMPT_AS => "Antiscalant dose [mg/L]: ",
        PRETREATMENT_PROMPT_SBS => "SBS dose [mg/L]: ",
        POSTTREATMENT_HEADING => "\n-- Post-Treatment Advisor --",
        POSTTREATMENT_PROMPT_CAUSTIC => "Caustic dose [mg/L]: ",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current settings:",
        SETTINGS_OPTIONS => "1) Language  2) Default flow unit  3) Default dose unit  4) Default flux unit  5) Default pressure unit",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        SETTINGS_LANGUAGE_OPTIONS => "Language: 1=한국어 2=English",
        SETTINGS_RESTART_NOTE => "Language change applies from the next run.",
        HELP_UNIT_CONVERSION => {
            "Help: choose quantity → enter value → from/to units (gpm/m3/h/mgd, gfd/lmh, psi/bar/kpa, C/K/F)."
        }
        HELP_WATER => "Help: ion concentrations are mg/L. TDS synthesis overwrites major ions only; trace species are preserved.",
        HELP_PROJECTION => "Help: configure the system first, then run. Each stage feeds on the previous stage's concentrate.",
        HELP_PRETREATMENT => "Help: quick concentrate scaling screen using the session water and recovery.",
        HELP_POSTTREATMENT => "Help: final pH and monthly usage when dosing caustic into the permeate.",
        HELP_SETTINGS => "Help: default units seed new sessions.",
        _ => return None,
    })
}
