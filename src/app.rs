use std::io::{BufRead, Write};

use thiserror::Error;

use crate::config::{Config, ConfigError};
use crate::form::{FormOutcome, SugarForm};
use crate::i18n::{keys, Translator};
use crate::ui_cli::{self, Console, MenuChoice};
use crate::units::{MassUnit, UnknownMassUnit};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 콘솔 입출력 오류
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    /// 단위 문자열 오류
    #[error("unit error: {0}")]
    Unit(#[from] UnknownMassUnit),
    /// 값 입력 도중 표준입력이 닫힘
    #[error("input closed before a value was entered")]
    InputClosed,
}

/// 최상위 오류를 번역된 머리말과 함께 한 줄로 만든다.
pub fn error_line(tr: &Translator, err: &AppError) -> String {
    format!("{}: {err}", tr.t(keys::ERROR_PREFIX))
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
/// `unit_override`는 이번 실행에서만 쓰는 입력 단위이며 설정 파일에는 저장하지 않는다.
pub fn run<R: BufRead, W: Write>(
    config: &mut Config,
    tr: &Translator,
    con: &mut Console<R, W>,
    unit_override: Option<MassUnit>,
) -> Result<(), AppError> {
    let mut tr = tr.clone();
    let mut unit_override = unit_override;
    loop {
        match ui_cli::main_menu(con, &tr)? {
            MenuChoice::Calculate => {
                ui_cli::handle_sugar_calculation(con, &tr, config, unit_override)?;
            }
            MenuChoice::Methodology => ui_cli::handle_methodology(con, &tr)?,
            MenuChoice::Settings => {
                let units_before = config.default_units.clone();
                if let Some(new_tr) = ui_cli::handle_settings(con, &tr, config)? {
                    tr = new_tr;
                }
                // 설정에서 단위를 새로 고르면 일회성 단위는 버린다
                if config.default_units != units_before {
                    unit_override = None;
                }
                config.save()?;
                con.println(&tr.t(keys::SETTINGS_SAVED))?;
            }
            MenuChoice::Exit => {
                con.println(&tr.t(keys::APP_EXIT))?;
                break;
            }
        }
    }
    Ok(())
}

/// 플래그로 받은 값으로 한 번만 계산한다. 빠진 값은 설정의 기본값을 쓴다.
/// 질량 값은 `unit_override`(없으면 설정 단위) 기준이다. 성공하면 결과를 `con`에 출력한다.
pub fn run_once<R: BufRead, W: Write>(
    config: &Config,
    tr: &Translator,
    con: &mut Console<R, W>,
    mass: Option<f64>,
    initial: Option<f64>,
    target: Option<f64>,
    unit_override: Option<MassUnit>,
) -> Result<FormOutcome, AppError> {
    let mut sugar_form = SugarForm::from_config_with_unit(config, unit_override);
    if let Some(m) = mass {
        sugar_form.pulp_mass = m;
    }
    if let Some(bi) = initial {
        sugar_form.initial_brix = bi;
    }
    if let Some(bf) = target {
        sugar_form.target_brix = bf;
    }
    let outcome = sugar_form.submit();
    // 실패 메시지는 호출 측이 stderr로 낸다
    if outcome.metric().is_some() {
        ui_cli::print_outcome(con, tr, &sugar_form, &outcome)?;
    }
    Ok(outcome)
}
