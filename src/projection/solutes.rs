use crate::membrane_db::RejectionOverrides;
use crate::projection::hydraulics::log_mean_concentration_factor;
use crate::water::analysis::{Ion, IonComposition};

/// NH3 비이온화 램프 하한 pH (이하에서 NH3 분율 0).
const NH3_RAMP_LOW_PH: f64 = 7.2;
/// NH3 비이온화 램프 상한 pH (이상에서 NH3 분율 1).
const NH3_RAMP_HIGH_PH: f64 = 11.5;

/// 배제율 산정용 이온 부류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectionClass {
    Divalent,
    Monovalent,
    Alkalinity,
    Silica,
    Boron,
    Gas,
}

/// 성분별 배제율 부류.
pub fn class_of(ion: Ion) -> RejectionClass {
    match ion {
        Ion::Ca | Ion::Mg | Ion::Sr | Ion::Ba | Ion::So4 | Ion::Po4 => RejectionClass::Divalent,
        Ion::Na | Ion::K | Ion::Cl | Ion::No3 | Ion::F | Ion::Nh4 => RejectionClass::Monovalent,
        Ion::Hco3 | Ion::Co3 => RejectionClass::Alkalinity,
        Ion::Sio2 => RejectionClass::Silica,
        Ion::B => RejectionClass::Boron,
        Ion::Co2 => RejectionClass::Gas,
    }
}

/// 높은 pH에서 이온화되지 않는 암모니아 분율. pH 7.2~11.5 선형 램프.
pub fn unionized_ammonia_fraction(ph: f64) -> f64 {
    ((ph - NH3_RAMP_LOW_PH) / (NH3_RAMP_HIGH_PH - NH3_RAMP_LOW_PH)).clamp(0.0, 1.0)
}

/// 이온 통과 계산 입력.
#[derive(Debug, Clone, Copy)]
pub struct SolutePassageInput<'a> {
    pub feed_ions: &'a IonComposition,
    pub feed_ph: f64,
    /// 시스템 회수율 분율 (이미 1~99% 범위로 정리된 값)
    pub recovery_fraction: f64,
    /// 막 공칭 배제율 (%)
    pub base_rejection_pct: f64,
    pub overrides: RejectionOverrides,
    pub age_years: f64,
    /// 연간 염 통과 증가율 (%/yr)
    pub sp_increase_pct_per_year: f64,
}

/// 이온 통과 계산 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolutePassage {
    pub permeate: IonComposition,
    pub concentrate: IonComposition,
    pub permeate_tds_mg_per_l: f64,
    pub concentrate_tds_mg_per_l: f64,
}

/// 부류 배제율 (%)을 공칭 배제율과 덮어쓰기에서 유도한다.
///
/// 기본 오프셋: 1가 -6, 2가 0, 실리카 -1, 붕소 -8, 알칼리도 -0.2.
/// 80~99.9%로 제한하되 붕소는 60~99.9%. 덮어쓰기 값은 그대로 쓴다.
pub fn class_rejection_pct(
    class: RejectionClass,
    base_rejection_pct: f64,
    overrides: &RejectionOverrides,
) -> Option<f64> {
    let derived = |offset: f64, low: f64| (base_rejection_pct + offset).clamp(low, 99.9);
    match class {
        RejectionClass::Monovalent => {
            Some(overrides.monovalent.unwrap_or_else(|| derived(-6.0, 80.0)))
        }
        RejectionClass::Divalent => Some(overrides.divalent.unwrap_or_else(|| derived(0.0, 80.0))),
        RejectionClass::Alkalinity => {
            Some(overrides.alkalinity.unwrap_or_else(|| derived(-0.2, 80.0)))
        }
        RejectionClass::Silica => Some(overrides.silica.unwrap_or_else(|| derived(-1.0, 80.0))),
        RejectionClass::Boron => Some(overrides.boron.unwrap_or_else(|| derived(-8.0, 60.0))),
        // CO2는 기본적으로 막을 그대로 통과한다. 덮어쓰기가 있을 때만 배제율 적용.
        RejectionClass::Gas => overrides.co2,
    }
}

/// 전체 트레인 기준으로 이온별 통과를 계산해 생산수/농축수 조성을 만든다.
pub fn compute_solute_passage(input: &SolutePassageInput) -> SolutePassage {
    let r = input.recovery_fraction;
    let cf = log_mean_concentration_factor(r);
    let beta = (0.7 * r).exp();

    // 막 노화에 따른 염 통과 증가
    let mut ageing = (1.0 + input.sp_increase_pct_per_year / 100.0).powf(input.age_years);
    if !ageing.is_finite() || ageing <= 0.0 {
        ageing = 1.0;
    }

    let mut permeate = IonComposition::default();
    let mut concentrate = IonComposition::default();

    for ion in Ion::ALL {
        let feed = input.feed_ions.get(ion);
        let class = class_of(ion);

        let rejection_pct =
            match class_rejection_pct(class, input.base_rejection_pct, &input.overrides) {
                Some(pct) => pct,
                None => {
                    // 용존 가스: 양쪽 흐름에 원수 농도를 그대로 싣는다.
                    permeate.set(ion, feed);
                    concentrate.set(ion, feed);
                    continue;
                }
            };

        let rejection_pct = if ion == Ion::Nh4 {
            rejection_pct * (1.0 - unionized_ammonia_fraction(input.feed_ph))
        } else {
            rejection_pct
        };

        let passage = (1.0 - rejection_pct / 100.0) * cf * beta * ageing;
        permeate.set(ion, feed * passage);

        if class == RejectionClass::Gas {
            concentrate.set(ion, feed);
        } else {
            concentrate.set(ion, feed / (1.0 - r));
        }
    }

    SolutePassage {
        permeate_tds_mg_per_l: permeate.tds(),
        concentrate_tds_mg_per_l: concentrate.tds(),
        permeate,
        concentrate,
    }
}
