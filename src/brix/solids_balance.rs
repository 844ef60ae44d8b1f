use serde::{Deserialize, Serialize};

use super::sugar_adjustment::{BrixReading, PulpBatch, SugarAdjustmentResult};

/// 설탕 투입 전후의 고형분 수지 검산 결과.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SolidsBalance {
    /// 초기 펄프 질량 [kg]
    pub pulp_mass_kg: f64,
    /// 투입 설탕 질량 [kg]
    pub sugar_mass_kg: f64,
    /// 혼합 후 질량 [kg]
    pub final_mass_kg: f64,
    /// 펄프 고형분 + 설탕 [kg]
    pub solids_in_kg: f64,
    /// 혼합물 질량 × 목표 농도 [kg]
    pub solids_out_kg: f64,
    /// 투입 - 산출 고형분 [kg]. 계산 결과라면 0에 가깝다.
    pub residual_kg: f64,
}

impl SolidsBalance {
    /// 계산된 설탕량으로 고형분 수지를 구성한다.
    pub fn from_adjustment(
        batch: PulpBatch,
        initial: BrixReading,
        target: BrixReading,
        result: SugarAdjustmentResult,
    ) -> Self {
        let final_mass_kg = batch.mass_kg + result.mass_kg;
        let solids_in_kg = batch.mass_kg * initial.fraction() + result.mass_kg;
        let solids_out_kg = final_mass_kg * target.fraction();
        Self {
            pulp_mass_kg: batch.mass_kg,
            sugar_mass_kg: result.mass_kg,
            final_mass_kg,
            solids_in_kg,
            solids_out_kg,
            residual_kg: solids_in_kg - solids_out_kg,
        }
    }

    pub fn is_closed(&self, tolerance_kg: f64) -> bool {
        self.residual_kg.abs() <= tolerance_kg
    }
}

/// 주어진 설탕량을 넣었을 때 혼합물의 °Brix를 계산한다.
///
/// 전체 질량이 0이면 초기값을 그대로 돌려준다.
pub fn resulting_brix(batch: PulpBatch, initial: BrixReading, sugar_mass_kg: f64) -> BrixReading {
    let total = batch.mass_kg + sugar_mass_kg;
    if total == 0.0 {
        return initial;
    }
    let solids = batch.mass_kg * initial.fraction() + sugar_mass_kg;
    BrixReading::new(solids / total * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_sugar_keeps_initial_brix() {
        let b = resulting_brix(PulpBatch::new(20.0), BrixReading::new(8.5), 0.0);
        assert!((b.percent - 8.5).abs() < 1e-12);
    }

    #[test]
    fn empty_batch_returns_initial() {
        let b = resulting_brix(PulpBatch::new(0.0), BrixReading::new(4.0), 0.0);
        assert_eq!(b.percent, 4.0);
    }

    #[test]
    fn worked_example_balance_closes() {
        let sugar = SugarAdjustmentResult { mass_kg: 1.5 / 0.9 };
        let bal = SolidsBalance::from_adjustment(
            PulpBatch::new(50.0),
            BrixReading::new(7.0),
            BrixReading::new(10.0),
            sugar,
        );
        assert!((bal.final_mass_kg - 51.666_666_666_7).abs() < 1e-6);
        assert!((bal.solids_in_kg - 5.166_666_666_7).abs() < 1e-6);
        assert!(bal.is_closed(1e-9), "residual={}", bal.residual_kg);
    }
}
