use serde::{Deserialize, Serialize};

/// 수질 분석에서 다루는 이온/용존 성분.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ion {
    Ca,
    Mg,
    Na,
    K,
    Nh4,
    Ba,
    Sr,
    Co3,
    Hco3,
    So4,
    Cl,
    No3,
    Po4,
    F,
    Sio2,
    B,
    Co2,
}

impl Ion {
    /// 전체 성분 나열 순서 (보고서 출력 순서와 동일).
    pub const ALL: [Ion; 17] = [
        Ion::Ca,
        Ion::Mg,
        Ion::Na,
        Ion::K,
        Ion::Nh4,
        Ion::Ba,
        Ion::Sr,
        Ion::Co3,
        Ion::Hco3,
        Ion::So4,
        Ion::Cl,
        Ion::No3,
        Ion::Po4,
        Ion::F,
        Ion::Sio2,
        Ion::B,
        Ion::Co2,
    ];

    /// 화학 기호 표기.
    pub fn symbol(&self) -> &'static str {
        match self {
            Ion::Ca => "Ca",
            Ion::Mg => "Mg",
            Ion::Na => "Na",
            Ion::K => "K",
            Ion::Nh4 => "NH4",
            Ion::Ba => "Ba",
            Ion::Sr => "Sr",
            Ion::Co3 => "CO3",
            Ion::Hco3 => "HCO3",
            Ion::So4 => "SO4",
            Ion::Cl => "Cl",
            Ion::No3 => "NO3",
            Ion::Po4 => "PO4",
            Ion::F => "F",
            Ion::Sio2 => "SiO2",
            Ion::B => "B",
            Ion::Co2 => "CO2",
        }
    }

    /// 당량 중량 (mg/meq). SiO2, B, CO2처럼 비이온성 성분은 None.
    pub fn equivalent_weight(&self) -> Option<f64> {
        match self {
            Ion::Ca => Some(20.04),
            Ion::Mg => Some(12.15),
            Ion::Na => Some(23.00),
            Ion::K => Some(39.10),
            Ion::Nh4 => Some(18.04),
            Ion::Ba => Some(68.67),
            Ion::Sr => Some(43.81),
            Ion::Co3 => Some(30.00),
            Ion::Hco3 => Some(61.02),
            Ion::So4 => Some(48.03),
            Ion::Cl => Some(35.45),
            Ion::No3 => Some(62.00),
            Ion::Po4 => Some(31.67),
            Ion::F => Some(19.00),
            Ion::Sio2 | Ion::B | Ion::Co2 => None,
        }
    }

    /// 양이온 여부.
    pub fn is_cation(&self) -> bool {
        matches!(
            self,
            Ion::Ca | Ion::Mg | Ion::Na | Ion::K | Ion::Nh4 | Ion::Ba | Ion::Sr
        )
    }

    /// 음이온 여부.
    pub fn is_anion(&self) -> bool {
        matches!(
            self,
            Ion::Co3 | Ion::Hco3 | Ion::So4 | Ion::Cl | Ion::No3 | Ion::Po4 | Ion::F
        )
    }
}

/// 이온 조성 (모든 값은 mg/L).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IonComposition {
    pub ca: f64,
    pub mg: f64,
    pub na: f64,
    pub k: f64,
    pub nh4: f64,
    pub ba: f64,
    pub sr: f64,
    pub co3: f64,
    pub hco3: f64,
    pub so4: f64,
    pub cl: f64,
    pub no3: f64,
    pub po4: f64,
    pub f: f64,
    pub sio2: f64,
    pub b: f64,
    pub co2: f64,
}

impl IonComposition {
    /// 성분 농도를 읽는다 (mg/L).
    pub fn get(&self, ion: Ion) -> f64 {
        match ion {
            Ion::Ca => self.ca,
            Ion::Mg => self.mg,
            Ion::Na => self.na,
            Ion::K => self.k,
            Ion::Nh4 => self.nh4,
            Ion::Ba => self.ba,
            Ion::Sr => self.sr,
            Ion::Co3 => self.co3,
            Ion::Hco3 => self.hco3,
            Ion::So4 => self.so4,
            Ion::Cl => self.cl,
            Ion::No3 => self.no3,
            Ion::Po4 => self.po4,
            Ion::F => self.f,
            Ion::Sio2 => self.sio2,
            Ion::B => self.b,
            Ion::Co2 => self.co2,
        }
    }

    /// 성분 농도를 설정한다. 음수 입력은 0으로 끌어올린다.
    pub fn set(&mut self, ion: Ion, value: f64) {
        let v = if value.is_finite() { value.max(0.0) } else { 0.0 };
        match ion {
            Ion::Ca => self.ca = v,
            Ion::Mg => self.mg = v,
            Ion::Na => self.na = v,
            Ion::K => self.k = v,
            Ion::Nh4 => self.nh4 = v,
            Ion::Ba => self.ba = v,
            Ion::Sr => self.sr = v,
            Ion::Co3 => self.co3 = v,
            Ion::Hco3 => self.hco3 = v,
            Ion::So4 => self.so4 = v,
            Ion::Cl => self.cl = v,
            Ion::No3 => self.no3 = v,
            Ion::Po4 => self.po4 = v,
            Ion::F => self.f = v,
            Ion::Sio2 => self.sio2 = v,
            Ion::B => self.b = v,
            Ion::Co2 => self.co2 = v,
        }
    }

    /// 전체 용존 고형물 (TDS, mg/L). 등록된 성분 전체의 합.
    pub fn tds(&self) -> f64 {
        Ion::ALL.iter().map(|ion| self.get(*ion)).sum()
    }

    /// 성분의 당량 농도 (meq/L). 당량 중량이 없는 성분은 0.
    pub fn meq(&self, ion: Ion) -> f64 {
        match ion.equivalent_weight() {
            Some(eq) => self.get(ion) / eq,
            None => 0.0,
        }
    }

    /// 양이온 당량 합 (meq/L).
    pub fn total_cations_meq(&self) -> f64 {
        Ion::ALL
            .iter()
            .filter(|ion| ion.is_cation())
            .map(|ion| self.meq(*ion))
            .sum()
    }

    /// 음이온 당량 합 (meq/L).
    pub fn total_anions_meq(&self) -> f64 {
        Ion::ALL
            .iter()
            .filter(|ion| ion.is_anion())
            .map(|ion| self.meq(*ion))
            .sum()
    }
}

/// 원수 분석 결과. 이온 조성과 pH/온도를 함께 담는다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WaterAnalysis {
    pub ions: IonComposition,
    /// pH (무차원)
    pub ph: f64,
    /// 수온 (°C)
    pub temperature_c: f64,
}

impl Default for WaterAnalysis {
    fn default() -> Self {
        WaterAnalysis {
            ions: IonComposition::default(),
            ph: 7.0,
            temperature_c: 25.0,
        }
    }
}

impl WaterAnalysis {
    /// 입력 정리본을 돌려준다. 음수/비정상 농도는 0, pH는 0~14로 제한한다.
    pub fn sanitized(&self) -> WaterAnalysis {
        let mut out = *self;
        for ion in Ion::ALL {
            out.ions.set(ion, self.ions.get(ion));
        }
        if !out.ph.is_finite() {
            out.ph = 7.0;
        }
        out.ph = out.ph.clamp(0.0, 14.0);
        if !out.temperature_c.is_finite() {
            out.temperature_c = 25.0;
        }
        out
    }

    /// TDS (mg/L).
    pub fn tds(&self) -> f64 {
        self.ions.tds()
    }
}

/// mg/L 농도를 CaCO3 환산 농도로 바꾼다. 당량 중량이 없는 성분은 None.
pub fn as_caco3(ion: Ion, mg_per_l: f64) -> Option<f64> {
    ion.equivalent_weight().map(|eq| mg_per_l * 50.0 / eq)
}

/// TDS 기반 간이 삼투압 (psi). 상세 계산 전 빠른 확인용.
pub fn quick_osmotic_pressure_psi(tds_mg_per_l: f64) -> f64 {
    tds_mg_per_l * 0.0115
}
