use std::path::PathBuf;
use std::process::ExitCode;

use brix_sugar_calculator::form::FormOutcome;
use brix_sugar_calculator::i18n::{self, keys, Translator};
use brix_sugar_calculator::ui_cli::Console;
use brix_sugar_calculator::units::MassUnit;
use brix_sugar_calculator::{app, config, logging};
use clap::Parser;
use tracing::warn;

/// 펄프 °Brix 보정용 설탕 투입량 계산기(CLI).
#[derive(Debug, Parser)]
#[command(name = "brix_sugar_calculator_cli", version, about)]
struct Cli {
    /// 펄프 질량 (--unit 단위, 기본 kg)
    #[arg(short = 'm', long)]
    mass: Option<f64>,
    /// 초기 °Brix (%)
    #[arg(short = 'i', long)]
    initial: Option<f64>,
    /// 목표 °Brix (%)
    #[arg(short = 't', long)]
    target: Option<f64>,
    /// 질량 단위: kg, g, lb, t
    #[arg(short = 'u', long)]
    unit: Option<String>,
    /// 언어: auto, en, es, ko
    #[arg(short = 'L', long, default_value = "auto")]
    lang: String,
    /// 설정 파일 경로
    #[arg(short = 'c', long, default_value = config::DEFAULT_CONFIG_PATH)]
    config: PathBuf,
    /// 로그 상세도(-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let cfg = match config::load_or_default_at(&cli.config) {
        Ok(cfg) => cfg,
        Err(err) => {
            warn!(error = %err, "config unavailable, using defaults");
            config::Config::default()
        }
    };
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    match try_run(&cli, cfg, &tr) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{}", app::error_line(&tr, &err));
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: &Cli, mut cfg: config::Config, tr: &Translator) -> Result<ExitCode, app::AppError> {
    let unit_override = cli.unit.as_deref().map(MassUnit::from_code).transpose()?;

    if cli.mass.is_some() || cli.initial.is_some() || cli.target.is_some() {
        let mut con = Console::stdio();
        let outcome = app::run_once(
            &cfg,
            tr,
            &mut con,
            cli.mass,
            cli.initial,
            cli.target,
            unit_override,
        )?;
        return Ok(match outcome {
            FormOutcome::Success(_) => ExitCode::SUCCESS,
            FormOutcome::Failure(err) => {
                let unit = unit_override.unwrap_or(cfg.default_units.mass);
                let msg = err.localized(tr, unit, cfg.display_decimals);
                eprintln!("{}: {msg}", tr.t(keys::ERROR_PREFIX));
                ExitCode::FAILURE
            }
        });
    }

    let mut con = Console::stdio();
    app::run(&mut cfg, tr, &mut con, unit_override)?;
    Ok(ExitCode::SUCCESS)
}
