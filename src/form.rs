//! 입력 폼 모델. GUI(egui)와 CLI가 같은 제약·기본값·결과 표시 규칙을 쓰도록
//! 화면 프레임워크와 분리해 둔다.

use thiserror::Error;
use tracing::debug;

use crate::brix::{self, BrixReading, PulpBatch, SolidsBalance, ValidationError};
use crate::config::{Config, FormDefaults};
use crate::i18n::{keys, Translator};
use crate::units::{convert_mass, MassUnit};

/// 펄프 질량 하한 [kg]
pub const PULP_MASS_MIN_KG: f64 = 0.1;
pub const BRIX_MIN: f64 = 0.0;
pub const BRIX_MAX: f64 = 100.0;
pub const PULP_MASS_STEP: f64 = 1.0;
pub const BRIX_STEP: f64 = 0.1;
pub const DEFAULT_DECIMALS: usize = 3;
pub const MAX_DECIMALS: usize = 6;

/// °Brix 입력 필드 구분.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrixField {
    Initial,
    Target,
}

impl BrixField {
    pub fn label_key(&self) -> &'static str {
        match self {
            BrixField::Initial => keys::FIELD_INITIAL_BRIX,
            BrixField::Target => keys::FIELD_TARGET_BRIX,
        }
    }
}

/// 폼 입력 오류.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    #[error("pulp mass must be at least {min_kg} kg (got {value_kg} kg)")]
    PulpMassBelowMinimum { value_kg: f64, min_kg: f64 },
    #[error("{field:?} °Brix must be within 0..=100 (got {value})")]
    BrixOutOfRange { field: BrixField, value: f64 },
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl InputError {
    /// 화면에 보여줄 번역 메시지.
    pub fn localized(&self, tr: &Translator, unit: MassUnit, decimals: usize) -> String {
        match self {
            InputError::PulpMassBelowMinimum { min_kg, .. } => tr.tf(
                keys::ERROR_PULP_MASS_BELOW_MINIMUM,
                &[("min", format_mass(*min_kg, unit, decimals))],
            ),
            InputError::BrixOutOfRange { field, value } => tr.tf(
                keys::ERROR_BRIX_OUT_OF_RANGE,
                &[("field", tr.t(field.label_key())), ("value", value.to_string())],
            ),
            InputError::Validation(ValidationError::TargetNotAboveInitial { .. }) => {
                tr.t(keys::ERROR_TARGET_NOT_ABOVE_INITIAL)
            }
            InputError::Validation(ValidationError::TargetNotBelowPureSugar { .. }) => {
                tr.t(keys::ERROR_TARGET_NOT_BELOW_PURE)
            }
        }
    }
}

/// 검증을 통과한 계산 입력(kg 기준).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverInput {
    pub batch: PulpBatch,
    pub initial: BrixReading,
    pub target: BrixReading,
}

/// 성공 시 표시할 결과 지표.
#[derive(Debug, Clone, PartialEq)]
pub struct SugarMetric {
    /// 반올림하지 않은 계산값 [kg]
    pub sugar_mass_kg: f64,
    /// 표시 단위로 환산한 값
    pub sugar_mass_display: f64,
    pub unit: MassUnit,
    /// 예: "1.667 kg"
    pub display: String,
    pub balance: SolidsBalance,
    pub resulting_brix: BrixReading,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FormOutcome {
    Success(SugarMetric),
    Failure(InputError),
}

impl FormOutcome {
    pub fn metric(&self) -> Option<&SugarMetric> {
        match self {
            FormOutcome::Success(m) => Some(m),
            FormOutcome::Failure(_) => None,
        }
    }

    pub fn error(&self) -> Option<&InputError> {
        match self {
            FormOutcome::Failure(e) => Some(e),
            FormOutcome::Success(_) => None,
        }
    }
}

/// 설탕 투입량 입력 폼. 펄프 질량은 `mass_unit` 단위로 입력받는다.
#[derive(Debug, Clone, PartialEq)]
pub struct SugarForm {
    pub pulp_mass: f64,
    pub initial_brix: f64,
    pub target_brix: f64,
    pub mass_unit: MassUnit,
    pub decimals: usize,
}

impl SugarForm {
    pub fn new(mass_unit: MassUnit, decimals: usize) -> Self {
        Self::with_defaults(&FormDefaults::default(), mass_unit, decimals)
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::with_defaults(
            &cfg.form_defaults,
            cfg.default_units.mass,
            cfg.display_decimals,
        )
    }

    /// 설정의 기본값을 쓰되 입력 단위만 일회성으로 바꾼다(`--unit`).
    pub fn from_config_with_unit(cfg: &Config, unit_override: Option<MassUnit>) -> Self {
        let mut form = Self::from_config(cfg);
        if let Some(unit) = unit_override {
            form.set_mass_unit(unit);
        }
        form
    }

    fn with_defaults(defaults: &FormDefaults, mass_unit: MassUnit, decimals: usize) -> Self {
        Self {
            pulp_mass: convert_mass(defaults.pulp_mass_kg, MassUnit::Kilogram, mass_unit),
            initial_brix: defaults.initial_brix,
            target_brix: defaults.target_brix,
            mass_unit,
            decimals: decimals.min(MAX_DECIMALS),
        }
    }

    /// 표시 단위 기준 펄프 질량 하한.
    pub fn pulp_mass_min(&self) -> f64 {
        convert_mass(PULP_MASS_MIN_KG, MassUnit::Kilogram, self.mass_unit)
    }

    /// 표시 단위를 바꾸면서 입력값도 같이 환산한다.
    pub fn set_mass_unit(&mut self, unit: MassUnit) {
        self.pulp_mass = convert_mass(self.pulp_mass, self.mass_unit, unit);
        self.mass_unit = unit;
    }

    /// 범위 제한이 있는 숫자 입력처럼 값을 허용 범위로 맞춘다.
    /// NaN은 기본값으로 되돌린다.
    pub fn clamp_to_constraints(&mut self) {
        let defaults = FormDefaults::default();
        let min_mass = self.pulp_mass_min();
        self.pulp_mass = if self.pulp_mass.is_nan() {
            convert_mass(defaults.pulp_mass_kg, MassUnit::Kilogram, self.mass_unit)
        } else {
            self.pulp_mass.max(min_mass)
        };
        self.initial_brix = clamp_brix(self.initial_brix, defaults.initial_brix);
        self.target_brix = clamp_brix(self.target_brix, defaults.target_brix);
        self.decimals = self.decimals.min(MAX_DECIMALS);
    }

    /// 직접 입력한 값(CLI 플래그 등)을 엄격하게 검사한다. 순서 조건은 계산기가 본다.
    pub fn validate(&self) -> Result<SolverInput, InputError> {
        let mass_kg = convert_mass(self.pulp_mass, self.mass_unit, MassUnit::Kilogram);
        // 단위 환산 오차로 하한에서 튕기지 않도록 약간 여유를 둔다
        if !(mass_kg.is_finite() && mass_kg >= PULP_MASS_MIN_KG - 1e-9) {
            return Err(InputError::PulpMassBelowMinimum {
                value_kg: mass_kg,
                min_kg: PULP_MASS_MIN_KG,
            });
        }
        check_brix(BrixField::Initial, self.initial_brix)?;
        check_brix(BrixField::Target, self.target_brix)?;
        Ok(SolverInput {
            batch: PulpBatch::new(mass_kg),
            initial: BrixReading::new(self.initial_brix),
            target: BrixReading::new(self.target_brix),
        })
    }

    /// 계산 버튼 동작: 검증 → 계산 → 검산.
    pub fn submit(&self) -> FormOutcome {
        match self.try_submit() {
            Ok(metric) => FormOutcome::Success(metric),
            Err(err) => FormOutcome::Failure(err),
        }
    }

    fn try_submit(&self) -> Result<SugarMetric, InputError> {
        let input = self.validate()?;
        let result = brix::sugar_to_add(input.batch, input.initial, input.target)?;
        let balance =
            SolidsBalance::from_adjustment(input.batch, input.initial, input.target, result);
        let resulting_brix = brix::resulting_brix(input.batch, input.initial, result.mass_kg);
        debug!(
            pulp_kg = input.batch.mass_kg,
            initial = input.initial.percent,
            target = input.target.percent,
            sugar_kg = result.mass_kg,
            "sugar adjustment computed"
        );
        Ok(SugarMetric {
            sugar_mass_kg: result.mass_kg,
            sugar_mass_display: convert_mass(result.mass_kg, MassUnit::Kilogram, self.mass_unit),
            unit: self.mass_unit,
            display: format_mass(result.mass_kg, self.mass_unit, self.decimals),
            balance,
            resulting_brix,
        })
    }
}

fn clamp_brix(value: f64, fallback: f64) -> f64 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(BRIX_MIN, BRIX_MAX)
    }
}

fn check_brix(field: BrixField, value: f64) -> Result<(), InputError> {
    if !(BRIX_MIN..=BRIX_MAX).contains(&value) {
        return Err(InputError::BrixOutOfRange { field, value });
    }
    Ok(())
}

/// kg 값을 표시 단위로 환산해 "값 단위" 문자열로 만든다.
pub fn format_mass(mass_kg: f64, unit: MassUnit, decimals: usize) -> String {
    let value = convert_mass(mass_kg, MassUnit::Kilogram, unit);
    format!("{value:.decimals$} {}", unit.symbol())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nan_fields_reset_to_defaults_on_clamp() {
        let mut form = SugarForm::new(MassUnit::Kilogram, 3);
        form.pulp_mass = f64::NAN;
        form.target_brix = f64::NAN;
        form.clamp_to_constraints();
        assert_eq!(form.pulp_mass, 50.0);
        assert_eq!(form.target_brix, 10.0);
    }

    #[test]
    fn minimum_mass_in_grams() {
        let form = SugarForm::new(MassUnit::Gram, 3);
        assert!((form.pulp_mass_min() - 100.0).abs() < 1e-9);
        assert!((form.pulp_mass - 50_000.0).abs() < 1e-9);
    }

    #[test]
    fn decimals_are_capped() {
        let form = SugarForm::new(MassUnit::Kilogram, 12);
        assert_eq!(form.decimals, MAX_DECIMALS);
    }
}
