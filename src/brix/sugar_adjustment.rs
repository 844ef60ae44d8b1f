use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 당도를 조정할 펄프 배치. 질량 단위는 kg이다.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PulpBatch {
    pub mass_kg: f64,
}

impl PulpBatch {
    pub fn new(mass_kg: f64) -> Self {
        Self { mass_kg }
    }
}

/// °Brix 측정값(질량 백분율, 관례상 0~100).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BrixReading {
    pub percent: f64,
}

impl BrixReading {
    pub fn new(percent: f64) -> Self {
        Self { percent }
    }

    /// 백분율을 소수(0~1)로 바꾼다.
    pub fn fraction(&self) -> f64 {
        self.percent / 100.0
    }
}

/// 추가해야 할 설탕 질량 [kg].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SugarAdjustmentResult {
    pub mass_kg: f64,
}

/// 계산 전제 조건 위반.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    /// 목표 °Brix가 초기 °Brix보다 크지 않음
    #[error("final concentration must exceed initial concentration (initial {initial} °Bx, final {target} °Bx)")]
    TargetNotAboveInitial { initial: f64, target: f64 },
    /// 목표 °Brix가 100% 이상이면 분모(1 - c2)가 0 이하가 된다
    #[error("final concentration must be below 100% (final {target} °Bx)")]
    TargetNotBelowPureSugar { target: f64 },
}

/// 고형분 수지로 추가할 설탕 질량을 계산한다.
///
/// `m_pulp * c1 + m_sugar = (m_pulp + m_sugar) * c2` 를 풀면
/// `m_sugar = m_pulp * (c2 - c1) / (1 - c2)` 이고, 설탕은 100% 고형분으로 본다.
///
/// - `brix_final <= brix_initial` 이면 [`ValidationError::TargetNotAboveInitial`]
/// - `brix_final >= 100` 이면 [`ValidationError::TargetNotBelowPureSugar`]
///
/// 펄프 질량의 양수 여부와 °Brix 범위(0~100)는 입력 계층에서 검사한다.
/// 결과는 반올림하지 않는다.
#[allow(clippy::neg_cmp_op_on_partial_ord)]
pub fn compute(mass_pulp: f64, brix_initial: f64, brix_final: f64) -> Result<f64, ValidationError> {
    // NaN 도 여기서 걸러진다
    if !(brix_final > brix_initial) {
        return Err(ValidationError::TargetNotAboveInitial {
            initial: brix_initial,
            target: brix_final,
        });
    }
    if brix_final >= 100.0 {
        return Err(ValidationError::TargetNotBelowPureSugar { target: brix_final });
    }
    let c1 = brix_initial / 100.0;
    let c2 = brix_final / 100.0;
    Ok((mass_pulp * (c2 - c1)) / (1.0 - c2))
}

/// [`compute`]의 타입 버전.
pub fn sugar_to_add(
    batch: PulpBatch,
    initial: BrixReading,
    target: BrixReading,
) -> Result<SugarAdjustmentResult, ValidationError> {
    let mass_kg = compute(batch.mass_kg, initial.percent, target.percent)?;
    Ok(SugarAdjustmentResult { mass_kg })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn worked_example_fifty_kilograms() {
        let sugar = compute(50.0, 7.0, 10.0).unwrap();
        assert!((sugar - 1.5 / 0.9).abs() < 1e-12, "sugar={sugar}");
    }

    #[test]
    fn nan_target_is_rejected() {
        assert!(matches!(
            compute(50.0, 7.0, f64::NAN),
            Err(ValidationError::TargetNotAboveInitial { .. })
        ));
    }

    #[test]
    fn ordering_is_checked_before_saturation() {
        // 둘 다 위반이면 순서 오류를 먼저 보고한다
        let err = compute(10.0, 100.0, 100.0).unwrap_err();
        assert!(matches!(err, ValidationError::TargetNotAboveInitial { .. }));
    }

    #[test]
    fn typed_wrapper_matches_scalar() {
        let res = sugar_to_add(
            PulpBatch::new(100.0),
            BrixReading::new(5.0),
            BrixReading::new(12.0),
        )
        .unwrap();
        assert_eq!(res.mass_kg, compute(100.0, 5.0, 12.0).unwrap());
    }
}
