use crate::water::analysis::{Ion, WaterAnalysis};

/// 밸런스 판정에 쓰는 주요 양이온 4종.
pub const BALANCE_CATIONS: [Ion; 4] = [Ion::Ca, Ion::Mg, Ion::Na, Ion::K];
/// 밸런스 판정에 쓰는 주요 음이온 4종.
pub const BALANCE_ANIONS: [Ion; 4] = [Ion::Hco3, Ion::So4, Ion::Cl, Ion::No3];

/// 이온 밸런스 판정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IonicBalance {
    /// 주요 양이온 당량 합 (meq/L)
    pub cations_meq: f64,
    /// 주요 음이온 당량 합 (meq/L)
    pub anions_meq: f64,
    /// 밸런스 오차 (%): (C-A)/(C+A)*100
    pub error_pct: f64,
}

/// 자동 보정 결과.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoBalanceResult {
    /// 보정에 사용한 이온. 이미 균형이면 None.
    pub adjusted_ion: Option<Ion>,
    /// 추가된 농도 (mg/L)
    pub added_mg_per_l: f64,
    /// 보정 후 밸런스
    pub balance: IonicBalance,
}

/// 주요 이온 4+4종으로 이온 밸런스를 계산한다.
pub fn ionic_balance(water: &WaterAnalysis) -> IonicBalance {
    let cations: f64 = BALANCE_CATIONS.iter().map(|ion| water.ions.meq(*ion)).sum();
    let anions: f64 = BALANCE_ANIONS.iter().map(|ion| water.ions.meq(*ion)).sum();
    let total = cations + anions;
    let error_pct = if total > 0.0 {
        (cations - anions) / total * 100.0
    } else {
        0.0
    };
    IonicBalance {
        cations_meq: cations,
        anions_meq: anions,
        error_pct,
    }
}

/// 부족한 쪽에 반대 전하 이온을 1회 추가해 밸런스를 맞춘다.
/// 양이온 과잉이면 Cl을, 음이온 과잉이면 Na를 추가한다.
pub fn auto_balance(water: &mut WaterAnalysis) -> AutoBalanceResult {
    let before = ionic_balance(water);
    let diff_meq = before.cations_meq - before.anions_meq;

    let (adjusted_ion, added_mg_per_l) = if diff_meq > 0.0 {
        let added = diff_meq * 35.45;
        water.ions.cl += added;
        (Some(Ion::Cl), added)
    } else if diff_meq < 0.0 {
        let added = -diff_meq * 23.00;
        water.ions.na += added;
        (Some(Ion::Na), added)
    } else {
        (None, 0.0)
    };

    AutoBalanceResult {
        adjusted_ion,
        added_mg_per_l,
        balance: ionic_balance(water),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balanced_water_has_zero_error() {
        let mut water = WaterAnalysis::default();
        // Na 23 mg/L = 1 meq/L, Cl 35.45 mg/L = 1 meq/L
        water.ions.na = 23.0;
        water.ions.cl = 35.45;
        let balance = ionic_balance(&water);
        assert!(balance.error_pct.abs() < 1e-9);
    }

    #[test]
    fn empty_water_reports_zero_error() {
        let water = WaterAnalysis::default();
        let balance = ionic_balance(&water);
        assert_eq!(balance.error_pct, 0.0);
    }
}
