//! 설탕 투입량 계산 시나리오 회귀 테스트.
use brix_sugar_calculator::brix::{
    compute, resulting_brix, sugar_to_add, BrixReading, PulpBatch, SolidsBalance, ValidationError,
};
use brix_sugar_calculator::form::format_mass;
use brix_sugar_calculator::units::MassUnit;

fn assert_close(label: &str, actual: f64, expected: f64, tol: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= tol,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.2e}, tol {tol})"
    );
}

#[test]
fn fifty_kg_from_seven_to_ten_brix() {
    // 50 * (0.10 - 0.07) / (1 - 0.10) = 1.5 / 0.9
    let sugar = compute(50.0, 7.0, 10.0).expect("valid inputs");
    assert_close("sugar", sugar, 1.666_666_666_666_7, 1e-9);
    assert_eq!(format_mass(sugar, MassUnit::Kilogram, 3), "1.667 kg");
}

#[test]
fn hundred_kg_from_five_to_twelve_brix() {
    let sugar = compute(100.0, 5.0, 12.0).expect("valid inputs");
    assert_close("sugar", sugar, 7.954_545_454_5, 1e-9);
}

#[test]
fn decreasing_brix_is_rejected() {
    let err = compute(50.0, 10.0, 7.0).unwrap_err();
    assert_eq!(
        err,
        ValidationError::TargetNotAboveInitial {
            initial: 10.0,
            target: 7.0
        }
    );
}

#[test]
fn equal_brix_is_rejected() {
    assert!(matches!(
        compute(50.0, 7.0, 7.0),
        Err(ValidationError::TargetNotAboveInitial { .. })
    ));
}

#[test]
fn target_of_one_hundred_percent_is_rejected() {
    let err = compute(50.0, 7.0, 100.0).unwrap_err();
    assert_eq!(err, ValidationError::TargetNotBelowPureSugar { target: 100.0 });
    assert_eq!(err.to_string(), "final concentration must be below 100% (final 100 °Bx)");
    assert!(compute(50.0, 7.0, 120.0).is_err());
}

#[test]
fn target_just_below_saturation_is_finite() {
    let sugar = compute(1.0, 0.0, 99.9).expect("below 100 is allowed");
    assert!(sugar.is_finite());
    assert_close("sugar", sugar, 0.999 / 0.001, 1e-6);
}

#[test]
fn non_positive_mass_is_not_checked_by_solver() {
    assert_eq!(compute(0.0, 7.0, 10.0), Ok(0.0));
    let negative = compute(-50.0, 7.0, 10.0).unwrap();
    assert!(negative < 0.0);
}

#[test]
fn out_of_range_initial_is_left_to_form_layer() {
    // 초기값 범위는 계산기가 보지 않는다
    let sugar = compute(10.0, -5.0, 10.0).unwrap();
    assert_close("sugar", sugar, 10.0 * 0.15 / 0.9, 1e-12);
}

#[test]
fn solved_sugar_restores_target_brix() {
    let batch = PulpBatch::new(100.0);
    let initial = BrixReading::new(5.0);
    let target = BrixReading::new(12.0);
    let result = sugar_to_add(batch, initial, target).unwrap();
    let mixed = resulting_brix(batch, initial, result.mass_kg);
    assert_close("brix", mixed.percent, 12.0, 1e-9);

    let bal = SolidsBalance::from_adjustment(batch, initial, target, result);
    assert_close("final mass", bal.final_mass_kg, 107.954_545_454_5, 1e-9);
    assert!(bal.is_closed(1e-9), "residual={}", bal.residual_kg);
}
