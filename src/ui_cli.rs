use std::io::{self, BufRead, Write};

use crate::app::AppError;
use crate::config::{Config, UnitSystem};
use crate::form::{self, FormOutcome, SugarForm, SugarMetric, MAX_DECIMALS};
use crate::i18n::{self, keys, Translator};
use crate::units::MassUnit;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Calculate,
    Methodology,
    Settings,
    Exit,
}

/// 프롬프트 입출력. 테스트에서는 메모리 버퍼를 물린다.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    pub fn println(&mut self, text: &str) -> Result<(), AppError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    /// 한 줄을 읽는다. 입력이 끝났으면(EOF) `None`.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, AppError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    /// 숫자를 읽는다. 빈 입력이면 기본값을 쓴다.
    fn read_f64_or(&mut self, tr: &Translator, prompt: &str, default: f64) -> Result<f64, AppError> {
        loop {
            let Some(s) = self.read_line(prompt)? else {
                return Err(AppError::InputClosed);
            };
            if s.is_empty() {
                return Ok(default);
            }
            match s.replace(',', ".").parse::<f64>() {
                Ok(v) => return Ok(v),
                Err(_) => self.println(&tr.t(keys::ERROR_INVALID_NUMBER))?,
            }
        }
    }
}

/// 메인 메뉴를 표시하고 선택값을 반환한다. 입력이 끝나면 종료로 본다.
pub fn main_menu<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
) -> Result<MenuChoice, AppError> {
    for key in [
        keys::MAIN_MENU_TITLE,
        keys::MAIN_MENU_CALCULATE,
        keys::MAIN_MENU_METHODOLOGY,
        keys::MAIN_MENU_SETTINGS,
        keys::MAIN_MENU_EXIT,
    ] {
        con.println(&tr.t(key))?;
    }
    loop {
        let Some(sel) = con.read_line(&tr.t(keys::PROMPT_MENU_SELECT))? else {
            return Ok(MenuChoice::Exit);
        };
        match sel.as_str() {
            "1" => return Ok(MenuChoice::Calculate),
            "2" => return Ok(MenuChoice::Methodology),
            "3" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => con.println(&tr.t(keys::INVALID_SELECTION_RETRY))?,
        }
    }
}

/// 설탕 투입량 계산 메뉴를 처리한다. 각 항목은 엔터로 기본값을 쓴다.
pub fn handle_sugar_calculation<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    cfg: &Config,
    unit_override: Option<MassUnit>,
) -> Result<FormOutcome, AppError> {
    let mut sugar_form = SugarForm::from_config_with_unit(cfg, unit_override);
    con.println("")?;
    con.println(&format!("-- {} --", tr.t(keys::INPUT_HEADING)))?;
    con.println(&tr.t(keys::PROBLEM_EXAMPLE))?;

    let mass_label = format!("{} [{}]", tr.t(keys::FIELD_PULP_MASS), sugar_form.mass_unit.symbol());
    sugar_form.pulp_mass = con.read_f64_or(
        tr,
        &prompt_with_default(tr, &mass_label, sugar_form.pulp_mass),
        sugar_form.pulp_mass,
    )?;
    sugar_form.initial_brix = con.read_f64_or(
        tr,
        &prompt_with_default(tr, &tr.t(keys::FIELD_INITIAL_BRIX), sugar_form.initial_brix),
        sugar_form.initial_brix,
    )?;
    sugar_form.target_brix = con.read_f64_or(
        tr,
        &prompt_with_default(tr, &tr.t(keys::FIELD_TARGET_BRIX), sugar_form.target_brix),
        sugar_form.target_brix,
    )?;

    let outcome = sugar_form.submit();
    print_outcome(con, tr, &sugar_form, &outcome)?;
    Ok(outcome)
}

fn prompt_with_default(tr: &Translator, label: &str, default: f64) -> String {
    tr.tf(
        keys::PROMPT_DEFAULT_HINT,
        &[("label", label.to_string()), ("default", default.to_string())],
    )
}

/// 계산 결과 또는 오류 메시지를 출력한다.
pub fn print_outcome<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    sugar_form: &SugarForm,
    outcome: &FormOutcome,
) -> Result<(), AppError> {
    match outcome {
        FormOutcome::Success(metric) => {
            con.println(&tr.t(keys::RESULT_SUCCESS))?;
            con.println(&format!("{}: {}", tr.t(keys::RESULT_METRIC_LABEL), metric.display))?;
            print_balance(con, tr, sugar_form, metric)?;
        }
        FormOutcome::Failure(err) => {
            let msg = err.localized(tr, sugar_form.mass_unit, sugar_form.decimals);
            con.println(&format!("{}: {msg}", tr.t(keys::ERROR_PREFIX)))?;
        }
    }
    Ok(())
}

fn print_balance<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    sugar_form: &SugarForm,
    metric: &SugarMetric,
) -> Result<(), AppError> {
    let unit = sugar_form.mass_unit;
    let d = sugar_form.decimals;
    let bal = &metric.balance;
    con.println(&format!("-- {} --", tr.t(keys::RESULT_BALANCE_HEADING)))?;
    con.println(&tr.tf(
        keys::RESULT_FINAL_MASS,
        &[("value", form::format_mass(bal.final_mass_kg, unit, d))],
    ))?;
    con.println(&tr.tf(
        keys::RESULT_SOLIDS_IN,
        &[("value", form::format_mass(bal.solids_in_kg, unit, d))],
    ))?;
    con.println(&tr.tf(
        keys::RESULT_SOLIDS_OUT,
        &[("value", form::format_mass(bal.solids_out_kg, unit, d))],
    ))?;
    con.println(&tr.tf(
        keys::RESULT_RESULTING_BRIX,
        &[("value", format!("{:.2} °Bx", metric.resulting_brix.percent))],
    ))?;
    Ok(())
}

/// 계산 방법 설명을 출력한다.
pub fn handle_methodology<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
) -> Result<(), AppError> {
    con.println("")?;
    con.println(&format!("-- {} --", tr.t(keys::METHOD_HEADING)))?;
    con.println(&tr.t(keys::PROBLEM_DESCRIPTION))?;
    con.println(&tr.t(keys::METHOD_INTRO))?;
    con.println(&format!("\n[{}]", tr.t(keys::METHOD_BALANCE_HEADING)))?;
    con.println(&tr.t(keys::METHOD_BALANCE_TEXT))?;
    con.println(&format!("  {}", tr.t(keys::METHOD_BALANCE_FORMULA)))?;
    con.println(&format!("\n[{}]", tr.t(keys::METHOD_SOLVE_HEADING)))?;
    con.println(&tr.t(keys::METHOD_SOLVE_TEXT))?;
    con.println(&format!("  {}", tr.t(keys::METHOD_SOLVED_FORMULA)))?;
    con.println(&tr.t(keys::METHOD_LEGEND))?;
    Ok(())
}

/// 설정 메뉴를 처리한다. 언어를 바꾸면 새 번역기를 돌려준다.
pub fn handle_settings<R: BufRead, W: Write>(
    con: &mut Console<R, W>,
    tr: &Translator,
    cfg: &mut Config,
) -> Result<Option<Translator>, AppError> {
    con.println(&tr.t(keys::SETTINGS_HEADING))?;
    con.println(&tr.tf(
        keys::SETTINGS_CURRENT,
        &[
            ("system", format!("{:?}", cfg.unit_system)),
            ("decimals", cfg.display_decimals.to_string()),
            ("lang", cfg.language.clone()),
        ],
    ))?;

    con.println(&tr.t(keys::SETTINGS_UNIT_OPTIONS))?;
    let sel = con.read_line(&tr.t(keys::SETTINGS_PROMPT_UNIT))?.unwrap_or_default();
    match sel.as_str() {
        "" => {}
        "1" => cfg.apply_unit_system(UnitSystem::Metric),
        "2" => cfg.apply_unit_system(UnitSystem::Imperial),
        _ => con.println(&tr.t(keys::SETTINGS_INVALID))?,
    }

    let sel = con.read_line(&tr.t(keys::SETTINGS_PROMPT_DECIMALS))?.unwrap_or_default();
    if !sel.is_empty() {
        match sel.parse::<usize>() {
            Ok(n) if n <= MAX_DECIMALS => cfg.display_decimals = n,
            _ => con.println(&tr.t(keys::SETTINGS_INVALID))?,
        }
    }

    let sel = con.read_line(&tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?.unwrap_or_default();
    let mut new_tr = None;
    if !sel.is_empty() {
        let lang = sel.to_lowercase();
        if matches!(lang.as_str(), "auto" | "en" | "es" | "ko") {
            let resolved = i18n::resolve_language(&lang, None);
            new_tr = Some(Translator::new_with_pack(&resolved, cfg.language_pack_dir.as_deref()));
            cfg.language = lang;
        } else {
            con.println(&tr.t(keys::SETTINGS_INVALID))?;
        }
    }
    Ok(new_tr)
}
