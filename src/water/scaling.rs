use crate::water::analysis::IonComposition;

/// LSI 주의 임계값. 이보다 크면 CaCO3 석출 경향으로 본다.
pub const LSI_DANGER_THRESHOLD: f64 = 0.2;
/// 실리카 포화도 한계 (%).
pub const SILICA_SATURATION_LIMIT_PCT: f64 = 100.0;
/// 실리카 용해도 기준값 (mg/L, 25°C 부근).
const SILICA_SOLUBILITY_MG_PER_L: f64 = 120.0;

/// CaCO3 스케일 지수 묶음.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScalingIndices {
    /// 포화 pH (pHs)
    pub ph_saturation: f64,
    /// Langelier Saturation Index = pH - pHs
    pub lsi: f64,
    /// CaCO3 석출 잠재량 추정 (mg/L). LSI ≤ 0이면 0.
    pub ccpp_mg_per_l: f64,
}

/// 난용성 염별 포화도 (%).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SaturationLevels {
    pub caso4_pct: f64,
    pub baso4_pct: f64,
    pub srso4_pct: f64,
    pub sio2_pct: f64,
    pub ca3po42_pct: f64,
    pub caf2_pct: f64,
}

impl SaturationLevels {
    /// 어느 한 항목이라도 100%를 넘는지.
    pub fn any_oversaturated(&self) -> bool {
        [
            self.caso4_pct,
            self.baso4_pct,
            self.srso4_pct,
            self.sio2_pct,
            self.ca3po42_pct,
            self.caf2_pct,
        ]
        .iter()
        .any(|pct| *pct > 100.0)
    }
}

/// Langelier 포화지수를 계산한다.
///
/// 간이식 (Ca, HCO3는 mg/L as ion):
///   pCa  = 5 - log10(Ca × 2.5)
///   pAlk = 5 - log10(HCO3 × 0.82)
///   C    = (log10(TDS) - 1)/10 + 2.0 (25°C 초과) 또는 2.3
///   pHs  = C + pCa + pAlk,  LSI = pH - pHs
pub fn langelier_index(
    ca_mg_per_l: f64,
    hco3_mg_per_l: f64,
    tds_mg_per_l: f64,
    temperature_c: f64,
    ph: f64,
) -> ScalingIndices {
    let p_ca = 5.0 - (ca_mg_per_l * 2.5).max(1e-4).log10();
    let p_alk = 5.0 - (hco3_mg_per_l * 0.82).max(1e-4).log10();
    let temp_term = if temperature_c > 25.0 { 2.0 } else { 2.3 };
    let c = (tds_mg_per_l.max(1.0).log10() - 1.0) / 10.0 + temp_term;
    let ph_saturation = c + p_ca + p_alk;
    let lsi = ph - ph_saturation;
    let ccpp_mg_per_l = if lsi > 0.0 { lsi * 50.0 } else { 0.0 };
    ScalingIndices {
        ph_saturation,
        lsi,
        ccpp_mg_per_l,
    }
}

/// 실리카 포화도 (%).
pub fn silica_saturation_pct(sio2_mg_per_l: f64) -> f64 {
    sio2_mg_per_l / SILICA_SOLUBILITY_MG_PER_L * 100.0
}

/// 난용성 염별 포화도를 간이 이온곱으로 추정한다.
pub fn saturation_levels(ions: &IonComposition) -> SaturationLevels {
    SaturationLevels {
        caso4_pct: ions.ca * ions.so4 / 1000.0,
        baso4_pct: ions.ba * ions.so4 / 50.0,
        srso4_pct: ions.sr * ions.so4 / 2000.0,
        sio2_pct: silica_saturation_pct(ions.sio2),
        ca3po42_pct: ions.ca * ions.po4 / 100.0,
        caf2_pct: ions.ca * ions.f / 500.0,
    }
}
