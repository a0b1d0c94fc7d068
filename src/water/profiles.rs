use crate::water::analysis::{Ion, WaterAnalysis};

/// 프로파일 해석 방식.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileKind {
    /// 각 성분 값이 목표 TDS 대비 비율
    Ratio,
    /// 각 성분 값이 대표 수질의 절대 농도 (mg/L). 목표 TDS에 맞춰 재스케일한다.
    Absolute,
}

/// 표준 수질 프로파일. 목표 TDS 하나로 대표 이온 조성을 합성할 때 쓴다.
#[derive(Debug, Clone, Copy)]
pub struct WaterTypeProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: ProfileKind,
    pub ions: &'static [(Ion, f64)],
}

/// 기본 수질 종류.
pub const DEFAULT_PROFILE_ID: &str = "well";

/// 프로파일이 합성을 담당하는 주요 성분. 목록에 없는 성분은 0으로 초기화한다.
const SYNTHESIZED_IONS: [Ion; 9] = [
    Ion::Ca,
    Ion::Mg,
    Ion::Na,
    Ion::K,
    Ion::Hco3,
    Ion::So4,
    Ion::Cl,
    Ion::No3,
    Ion::Sio2,
];

const PROFILES: [WaterTypeProfile; 9] = [
    wp(
        "brackish-well-nf",
        "Brackish Well Non-Fouling",
        ProfileKind::Ratio,
        &[
            (Ion::Ca, 0.12),
            (Ion::Mg, 0.05),
            (Ion::Na, 0.32),
            (Ion::K, 0.01),
            (Ion::Hco3, 0.18),
            (Ion::So4, 0.07),
            (Ion::Cl, 0.23),
            (Ion::No3, 0.01),
            (Ion::Sio2, 0.01),
        ],
    ),
    wp(
        "brackish-well-hf",
        "Brackish Well High-Fouling",
        ProfileKind::Ratio,
        &[
            (Ion::Ca, 0.07),
            (Ion::Mg, 0.04),
            (Ion::Na, 0.25),
            (Ion::K, 0.0),
            (Ion::Hco3, 0.05),
            (Ion::So4, 0.04),
            (Ion::Cl, 0.62),
            (Ion::No3, 0.0),
            (Ion::Sio2, 0.0),
        ],
    ),
    wp(
        "brackish-surface",
        "Brackish Surface",
        ProfileKind::Ratio,
        &[
            (Ion::Ca, 0.10),
            (Ion::Mg, 0.06),
            (Ion::Na, 0.30),
            (Ion::K, 0.01),
            (Ion::Hco3, 0.20),
            (Ion::So4, 0.10),
            (Ion::Cl, 0.21),
            (Ion::No3, 0.01),
            (Ion::Sio2, 0.01),
        ],
    ),
    wp(
        "sea-well",
        "Sea Well",
        ProfileKind::Ratio,
        &[
            (Ion::Ca, 0.015),
            (Ion::Mg, 0.05),
            (Ion::Na, 0.305),
            (Ion::K, 0.01),
            (Ion::Hco3, 0.005),
            (Ion::So4, 0.045),
            (Ion::Cl, 0.565),
            (Ion::No3, 0.002),
            (Ion::Sio2, 0.003),
        ],
    ),
    wp(
        "sea-surface",
        "Sea Surface",
        ProfileKind::Absolute,
        &[(Ion::Na, 786.98), (Ion::Cl, 1212.92), (Ion::Hco3, 0.5)],
    ),
    wp(
        "municipal-waste",
        "Municipal Waste",
        ProfileKind::Absolute,
        &[(Ion::Na, 786.98), (Ion::Cl, 1212.92), (Ion::Hco3, 0.5)],
    ),
    wp(
        "industrial-waste",
        "Industrial Waste",
        ProfileKind::Ratio,
        &[
            (Ion::Ca, 0.08),
            (Ion::Mg, 0.04),
            (Ion::Na, 0.35),
            (Ion::K, 0.02),
            (Ion::Hco3, 0.12),
            (Ion::So4, 0.10),
            (Ion::Cl, 0.26),
            (Ion::No3, 0.01),
            (Ion::Sio2, 0.02),
        ],
    ),
    wp(
        "ro-permeate",
        "RO Permeate",
        ProfileKind::Ratio,
        &[(Ion::Na, 0.4), (Ion::Cl, 0.6)],
    ),
    wp(
        "well",
        "Well Water",
        ProfileKind::Ratio,
        &[
            (Ion::Ca, 0.12),
            (Ion::Mg, 0.08),
            (Ion::Na, 0.20),
            (Ion::K, 0.01),
            (Ion::Hco3, 0.22),
            (Ion::So4, 0.10),
            (Ion::Cl, 0.25),
            (Ion::No3, 0.01),
            (Ion::Sio2, 0.01),
        ],
    ),
];

/// 전체 프로파일 목록.
pub fn profiles() -> &'static [WaterTypeProfile] {
    &PROFILES
}

/// id 또는 이름으로 프로파일을 찾는다 (대소문자 무시).
pub fn find_profile(query: &str) -> Option<&'static WaterTypeProfile> {
    let q = query.trim();
    PROFILES
        .iter()
        .find(|p| p.id.eq_ignore_ascii_case(q) || p.name.eq_ignore_ascii_case(q))
}

/// 목표 TDS에 맞춰 프로파일 조성을 합성해 적용한다.
///
/// 주요 성분만 덮어쓰고 미량 성분(NH4, Sr, Ba, PO4, F, B, CO2, CO3)은 보존한다.
/// 목표 TDS가 0 이하이면 아무 것도 바꾸지 않는다.
pub fn apply_tds_profile(water: &mut WaterAnalysis, target_tds: f64, profile: &WaterTypeProfile) {
    if !(target_tds > 0.0) {
        return;
    }

    for ion in SYNTHESIZED_IONS {
        water.ions.set(ion, 0.0);
    }

    match profile.kind {
        ProfileKind::Ratio => {
            for (ion, frac) in profile.ions {
                water.ions.set(*ion, frac * target_tds);
            }
        }
        ProfileKind::Absolute => {
            let sum: f64 = profile.ions.iter().map(|(_, v)| v).sum();
            if sum > 0.0 {
                let scale = target_tds / sum;
                for (ion, value) in profile.ions {
                    water.ions.set(*ion, value * scale);
                }
            }
        }
    }
}

const fn wp(
    id: &'static str,
    name: &'static str,
    kind: ProfileKind,
    ions: &'static [(Ion, f64)],
) -> WaterTypeProfile {
    WaterTypeProfile {
        id,
        name,
        kind,
        ions,
    }
}
