use crate::projection::engine::ProjectionResult;

/// 설계 검증 판정.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    Success,
    Warning,
    Error,
}

/// 개별 설계 검증 항목.
#[derive(Debug, Clone, PartialEq)]
pub struct DesignCheck {
    pub id: &'static str,
    pub label: &'static str,
    /// 표시용 측정값
    pub value: String,
    pub status: CheckStatus,
    pub message: &'static str,
}

/// 프로젝션 결과에 대해 독립적인 설계 검증 3종을 수행한다.
pub fn validate_design(result: &ProjectionResult) -> Vec<DesignCheck> {
    let mut checks = Vec::with_capacity(3);

    let flux = result.avg_flux_gfd;
    let (status, message) = if flux > 16.0 {
        (
            CheckStatus::Error,
            "평균 플럭스가 16 gfd를 초과합니다. 베셀/엘리먼트 수를 늘리세요.",
        )
    } else if flux > 14.0 {
        (
            CheckStatus::Warning,
            "평균 플럭스가 14 gfd를 초과합니다. 파울링 진행 시 여유가 부족합니다.",
        )
    } else {
        (CheckStatus::Success, "평균 플럭스가 권장 범위에 있습니다.")
    };
    checks.push(DesignCheck {
        id: "avg-flux",
        label: "평균 플럭스",
        value: format!("{flux:.1} gfd"),
        status,
        message,
    });

    // 8인치 베셀 수리 한계 기준
    let loading = match result.stage_results.first() {
        Some(first) if first.vessels > 0 => result.feed_flow_m3_per_h / first.vessels as f64,
        _ => 0.0,
    };
    let (status, message) = if loading > 17.0 {
        (
            CheckStatus::Error,
            "베셀당 공급 유량이 17 m³/h를 초과합니다. 1단 베셀 수를 늘리세요.",
        )
    } else if loading > 15.0 {
        (
            CheckStatus::Warning,
            "베셀당 공급 유량이 15 m³/h를 초과합니다. 차압 상승에 주의하세요.",
        )
    } else {
        (
            CheckStatus::Success,
            "베셀당 공급 유량이 권장 범위에 있습니다.",
        )
    };
    checks.push(DesignCheck {
        id: "vessel-loading",
        label: "베셀당 공급 유량",
        value: format!("{loading:.1} m³/h"),
        status,
        message,
    });

    let recovery = result.recovery_pct;
    let (status, message) = if recovery > 85.0 {
        (
            CheckStatus::Error,
            "회수율이 85%를 초과합니다. 스케일 위험이 매우 큽니다.",
        )
    } else if recovery > 75.0 {
        (
            CheckStatus::Warning,
            "회수율이 75%를 초과합니다. 스케일 관리가 필요합니다.",
        )
    } else {
        (CheckStatus::Success, "회수율이 권장 범위에 있습니다.")
    };
    checks.push(DesignCheck {
        id: "recovery",
        label: "시스템 회수율",
        value: format!("{recovery:.0}%"),
        status,
        message,
    });

    checks
}
