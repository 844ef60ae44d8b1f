//! 메모리 입출력으로 CLI 대화 흐름을 검증한다.
use std::fs;
use std::io::Cursor;

use brix_sugar_calculator::app::{self, AppError};
use brix_sugar_calculator::config::{self, Config, UnitSystem};
use brix_sugar_calculator::form::FormOutcome;
use brix_sugar_calculator::i18n::Translator;
use brix_sugar_calculator::ui_cli::{self, Console, MenuChoice};
use brix_sugar_calculator::units::MassUnit;

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(con: Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
    String::from_utf8(con.into_output()).expect("utf-8 output")
}

#[test]
fn menu_retries_on_invalid_selection() {
    let tr = Translator::new("en");
    let mut con = console("9\nabc\n2\n");
    let choice = ui_cli::main_menu(&mut con, &tr).unwrap();
    assert_eq!(choice, MenuChoice::Methodology);
    let out = output(con);
    assert_eq!(out.matches("Invalid input. Please try again.").count(), 2);
}

#[test]
fn closed_input_exits_menu() {
    let tr = Translator::new("en");
    let mut con = console("");
    assert_eq!(ui_cli::main_menu(&mut con, &tr).unwrap(), MenuChoice::Exit);
}

#[test]
fn empty_answers_use_worked_example_defaults() {
    let tr = Translator::new("en");
    let cfg = Config::default();
    let mut con = console("\n\n\n");
    let outcome = ui_cli::handle_sugar_calculation(&mut con, &tr, &cfg, None).unwrap();
    assert!(matches!(outcome, FormOutcome::Success(_)));
    let out = output(con);
    assert!(out.contains("Sugar to add: 1.667 kg"), "{out}");
    assert!(out.contains("Resulting °Brix: 10.00 °Bx"), "{out}");
}

#[test]
fn non_numeric_answer_is_asked_again() {
    let tr = Translator::new("en");
    let cfg = Config::default();
    let mut con = console("lots\n100\n5\n12\n");
    ui_cli::handle_sugar_calculation(&mut con, &tr, &cfg, None).unwrap();
    let out = output(con);
    assert!(out.contains("Please enter a number."));
    assert!(out.contains("Sugar to add: 7.955 kg"), "{out}");
}

#[test]
fn invalid_order_prints_error_without_metric() {
    let tr = Translator::new("es");
    let cfg = Config::default();
    let mut con = console("50\n10\n7\n");
    let outcome = ui_cli::handle_sugar_calculation(&mut con, &tr, &cfg, None).unwrap();
    assert!(outcome.metric().is_none());
    let out = output(con);
    assert!(out.contains("Error: El °Brix final debe ser mayor que el °Brix inicial."));
    assert!(!out.contains("Azúcar a agregar:"));
}

#[test]
fn one_shot_prints_only_on_success() {
    let tr = Translator::new("en");
    let cfg = Config::default();

    let mut con = console("");
    let outcome = app::run_once(&cfg, &tr, &mut con, Some(100.0), Some(5.0), Some(12.0), None).unwrap();
    assert!(outcome.metric().is_some());
    assert!(output(con).contains("Sugar to add: 7.955 kg"));

    let mut con = console("");
    let outcome = app::run_once(&cfg, &tr, &mut con, None, Some(7.0), Some(7.0), None).unwrap();
    assert!(outcome.error().is_some());
    assert!(output(con).is_empty());
}

#[test]
fn settings_switch_language_and_units() {
    let tr = Translator::new("en");
    let mut cfg = Config::default();
    let mut con = console("2\n1\nes\n");
    let new_tr = ui_cli::handle_settings(&mut con, &tr, &mut cfg).unwrap();
    assert_eq!(cfg.default_units.mass.symbol(), "lb");
    assert_eq!(cfg.display_decimals, 1);
    assert_eq!(cfg.language, "es");
    assert_eq!(new_tr.map(|t| t.language_code()), Some("es"));
}

#[test]
fn full_session_runs_methodology_then_exits() {
    let tr = Translator::new("en");
    let mut cfg = Config::default();
    let mut con = console("2\n1\n\n\n\n0\n");
    app::run(&mut cfg, &tr, &mut con, None).unwrap();
    let out = output(con);
    assert!(out.contains("M_sugar = M_pulp × (Brix_final − Brix_initial) / (100 − Brix_final)"));
    assert!(out.contains("Sugar to add: 1.667 kg"));
    assert!(out.ends_with("Exiting application.\n"));
}

#[test]
fn unit_flag_applies_to_entry_but_is_not_saved() {
    let dir = std::env::temp_dir().join(format!("brix_cli_unit_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join("config.toml");
    let mut cfg = config::load_or_default_at(&path).unwrap();
    let tr = Translator::new("en");

    // 설정은 그대로 두고 저장, 그다음 기본값으로 계산
    let mut con = console("3\n\n\n\n1\n\n\n\n0\n");
    app::run(&mut cfg, &tr, &mut con, Some(MassUnit::Gram)).unwrap();
    let out = output(con);
    assert!(out.contains("Sugar to add: 1666.667 g"), "{out}");

    let again = config::load_or_default_at(&path).unwrap();
    assert_eq!(again.unit_system, UnitSystem::Metric);
    assert_eq!(again.default_units.mass, MassUnit::Kilogram);
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn one_shot_mass_is_read_in_override_unit() {
    let tr = Translator::new("en");
    let cfg = Config::default();
    let mut con = console("");
    let outcome = app::run_once(
        &cfg,
        &tr,
        &mut con,
        Some(50_000.0),
        Some(7.0),
        Some(10.0),
        Some(MassUnit::Gram),
    )
    .unwrap();
    let metric = outcome.metric().unwrap();
    assert!((metric.sugar_mass_kg - 1.5 / 0.9).abs() < 1e-9);
    assert_eq!(metric.display, "1666.667 g");
    assert_eq!(cfg.default_units.mass, MassUnit::Kilogram);
}

#[test]
fn picking_units_in_settings_replaces_unit_flag() {
    let dir = std::env::temp_dir().join(format!("brix_cli_pick_{}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    let mut cfg = config::load_or_default_at(dir.join("config.toml")).unwrap();
    let tr = Translator::new("en");

    let mut con = console("3\n2\n\n\n1\n100\n5\n12\n0\n");
    app::run(&mut cfg, &tr, &mut con, Some(MassUnit::Gram)).unwrap();
    let out = output(con);
    assert!(out.contains("Sugar to add: 7.955 lb"), "{out}");
    let _ = fs::remove_dir_all(&dir);
}

#[test]
fn top_level_errors_carry_localized_prefix() {
    let tr = Translator::new("ko");
    let line = app::error_line(&tr, &AppError::InputClosed);
    assert_eq!(line, "오류: input closed before a value was entered");
}
