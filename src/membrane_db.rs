//! 상용 RO/NF 요소의 공칭 사양 테이블을 제공한다.
//! 값은 참고용이며 실제 설계 시 제조사 최신 데이터시트로 검증해야 한다.

/// 이온 부류별 배제율 덮어쓰기 (%). None이면 공칭 배제율에서 유도한다.
#[derive(Debug, Clone, Copy, Default)]
pub struct RejectionOverrides {
    pub monovalent: Option<f64>,
    pub divalent: Option<f64>,
    pub alkalinity: Option<f64>,
    pub silica: Option<f64>,
    pub boron: Option<f64>,
    pub co2: Option<f64>,
}

impl RejectionOverrides {
    pub const NONE: RejectionOverrides = RejectionOverrides {
        monovalent: None,
        divalent: None,
        alkalinity: None,
        silica: None,
        boron: None,
        co2: None,
    };
}

/// 막 요소 사양.
#[derive(Debug, Clone, Copy)]
pub struct MembraneData {
    pub id: &'static str,
    pub name: &'static str,
    /// 용도 구분 (BW/NF/SW)
    pub category: &'static str,
    pub notes: &'static str,
    /// 유효 막면적 (ft²)
    pub area_ft2: f64,
    /// 물 투과계수 A (gfd/psi)
    pub a_value: f64,
    /// 농축측 마찰손실 계수
    pub kfb: f64,
    /// 마찰손실 유량 지수
    pub dp_exponent: f64,
    /// 공칭 염 배제율 (%)
    pub rejection_pct: f64,
    pub overrides: RejectionOverrides,
}

/// 카탈로그에 없는 막을 지정했을 때 쓰는 기준 사양.
pub const DEFAULT_AREA_FT2: f64 = 400.0;
pub const DEFAULT_A_VALUE: f64 = 0.12;
pub const DEFAULT_KFB: f64 = 0.315;
pub const DEFAULT_DP_EXPONENT: f64 = 1.75;
pub const DEFAULT_REJECTION_PCT: f64 = 99.7;
pub const DEFAULT_MEMBRANE_ID: &str = "espa2ld";

pub const DEFAULT_MEMBRANE: MembraneData = MembraneData {
    id: "generic",
    name: "Generic BW Element",
    category: "BW",
    notes: "카탈로그 외 지정 시 사용하는 기준 사양",
    area_ft2: DEFAULT_AREA_FT2,
    a_value: DEFAULT_A_VALUE,
    kfb: DEFAULT_KFB,
    dp_exponent: DEFAULT_DP_EXPONENT,
    rejection_pct: DEFAULT_REJECTION_PCT,
    overrides: RejectionOverrides::NONE,
};

pub fn membranes() -> &'static [MembraneData] {
    MEMBRANES
}

pub fn find_membrane(query: &str) -> Option<&'static MembraneData> {
    let q = query.trim();
    MEMBRANES
        .iter()
        .find(|m| m.id.eq_ignore_ascii_case(q) || m.name.eq_ignore_ascii_case(q))
}

/// id로 찾되 없으면 기준 사양을 돌려준다.
pub fn membrane_or_default(query: &str) -> &'static MembraneData {
    find_membrane(query).unwrap_or(&DEFAULT_MEMBRANE)
}

const MEMBRANES: &[MembraneData] = &[
    MembraneData {
        id: "espa2ld",
        name: "ESPA2-LD",
        category: "BW",
        notes: "저압 기수용 저차압; 참고용 공칭치",
        area_ft2: 400.0,
        a_value: 0.12,
        kfb: 0.315,
        dp_exponent: 1.75,
        rejection_pct: 99.6,
        overrides: RejectionOverrides::NONE,
    },
    MembraneData {
        id: "espa2max",
        name: "ESPA2 MAX",
        category: "BW",
        notes: "저압 기수용 대면적; 참고용 공칭치",
        area_ft2: 440.0,
        a_value: 0.13,
        kfb: 0.315,
        dp_exponent: 1.75,
        rejection_pct: 99.6,
        overrides: RejectionOverrides::NONE,
    },
    MembraneData {
        id: "cpa5ld",
        name: "CPA5-LD",
        category: "BW",
        notes: "기수용 고배제; 참고용 공칭치",
        area_ft2: 400.0,
        a_value: 0.11,
        kfb: 0.315,
        dp_exponent: 1.75,
        rejection_pct: 99.7,
        overrides: RejectionOverrides::NONE,
    },
    MembraneData {
        id: "cpa7ld",
        name: "CPA7-LD",
        category: "BW",
        notes: "기수용 최고 배제 등급; 참고용 공칭치",
        area_ft2: 425.0,
        a_value: 0.10,
        kfb: 0.315,
        dp_exponent: 1.75,
        rejection_pct: 99.8,
        overrides: RejectionOverrides::NONE,
    },
    MembraneData {
        id: "lfc3ld",
        name: "LFC3-LD",
        category: "BW",
        notes: "저파울링 표면처리 기수용; 참고용 공칭치",
        area_ft2: 400.0,
        a_value: 0.11,
        kfb: 0.315,
        dp_exponent: 1.75,
        rejection_pct: 99.7,
        overrides: RejectionOverrides::NONE,
    },
    MembraneData {
        id: "esna1ld2",
        name: "ESNA1-LD2",
        category: "NF",
        notes: "나노여과; 경도 위주 제거, 실리카/붕소 배제 낮음",
        area_ft2: 400.0,
        a_value: 0.15,
        kfb: 0.315,
        dp_exponent: 1.75,
        rejection_pct: 89.0,
        overrides: RejectionOverrides {
            silica: Some(82.0),
            boron: Some(60.0),
            ..RejectionOverrides::NONE
        },
    },
    MembraneData {
        id: "swc4b",
        name: "SWC4B",
        category: "SW",
        notes: "해수용 고배제; 참고용 공칭치",
        area_ft2: 400.0,
        a_value: 0.045,
        kfb: 0.35,
        dp_exponent: 1.75,
        rejection_pct: 99.8,
        overrides: RejectionOverrides {
            boron: Some(92.0),
            ..RejectionOverrides::NONE
        },
    },
    MembraneData {
        id: "swc5ld",
        name: "SWC5-LD",
        category: "SW",
        notes: "해수용 저차압; 참고용 공칭치",
        area_ft2: 400.0,
        a_value: 0.05,
        kfb: 0.35,
        dp_exponent: 1.75,
        rejection_pct: 99.8,
        overrides: RejectionOverrides {
            boron: Some(93.0),
            ..RejectionOverrides::NONE
        },
    },
];

// NOTE:
// - Element specs are nominal values adapted from public membrane datasheets (circa 2023) for reference.
// - A-values are lumped permeability coefficients for projection use; actual element performance varies with lot and test conditions.
// - Always verify against the manufacturer's latest datasheet and projection software for purchase decisions.
