#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

//! eframe/egui 기반 데스크톱 GUI 진입점.

use brix_sugar_calculator::{
    config,
    form::{self, FormOutcome, SugarForm, SugarMetric},
    i18n::{self, keys},
    logging,
};
use clap::Parser;
use eframe::{egui, App, Frame};
use image::GenericImageView;
use rfd::FileDialog;
use std::{fs, path::Path};
use tracing::warn;

/// 펄프 °Brix 보정용 설탕 투입량 계산기(GUI).
#[derive(Debug, Parser)]
#[command(name = "brix_sugar_calculator", version, about)]
struct GuiArgs {
    /// 언어: auto, en, es, ko (설정값보다 우선)
    #[arg(short = 'L', long)]
    lang: Option<String>,
    /// 로그 상세도(-v, -vv)
    #[arg(short = 'v', long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<(), eframe::Error> {
    let args = GuiArgs::parse();
    logging::init(args.verbose);

    let icon_data = load_app_icon();
    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size([1100.0, 720.0])
        .with_transparent(true);
    if let Some(icon) = icon_data {
        viewport = viewport.with_icon(icon);
    }
    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };
    let app_cfg = config::load_or_default().unwrap_or_else(|err| {
        warn!(error = %err, "config unavailable, using defaults");
        config::Config::default()
    });
    eframe::run_native(
        "°Brix Mass-Balance Calculator",
        options,
        Box::new(move |cc| {
            let app = GuiApp::new(app_cfg, args.lang.as_deref());
            if let Err(e) = setup_fonts(&cc.egui_ctx, &app.config, app.tr.language_code()) {
                warn!(error = %e, "font setup failed, keeping egui defaults");
            }
            cc.egui_ctx.set_pixels_per_point(app.ui_scale);
            Box::new(app)
        }),
    )
}

fn load_app_icon() -> Option<egui::IconData> {
    let search = ["assets/icon.png", "icon.png", "../assets/icon.png"];
    let path = search.iter().find(|p| Path::new(*p).exists())?;
    let bytes = fs::read(path).ok()?;
    let img = match image::load_from_memory(&bytes) {
        Ok(img) => img,
        Err(err) => {
            warn!(path = %path, error = %err, "icon decode failed");
            return None;
        }
    };
    let (w, h) = img.dimensions();
    Some(egui::IconData {
        rgba: img.to_rgba8().into_raw(),
        width: w,
        height: h,
    })
}

fn label_with_tip(ui: &mut egui::Ui, text: &str, tip: &str) -> egui::Response {
    ui.label(text).on_hover_text(tip)
}

/// 공통: 바이너리 폰트 바이트를 egui에 등록.
fn apply_font_bytes(ctx: &egui::Context, bytes: Vec<u8>, name: &str) {
    let mut fonts = egui::FontDefinitions::default();
    let font_name = name.to_string();
    fonts
        .font_data
        .insert(font_name.clone(), egui::FontData::from_owned(bytes));
    fonts
        .families
        .entry(egui::FontFamily::Proportional)
        .or_default()
        .insert(0, font_name.clone());
    fonts
        .families
        .entry(egui::FontFamily::Monospace)
        .or_default()
        .push(font_name);
    ctx.set_fonts(fonts);
}

/// 사용자 폰트 → (한국어일 때) 시스템 CJK 폰트 순으로 적용한다.
/// 영어/스페인어는 egui 기본 폰트로 충분하다. `lang`은 화면에 쓰는 언어 코드.
fn setup_fonts(ctx: &egui::Context, cfg: &config::Config, lang: &str) -> Result<(), String> {
    if let Some(path) = cfg.custom_font_path.as_deref() {
        return load_custom_font(ctx, path);
    }
    if !lang.starts_with("ko") {
        return Ok(());
    }

    let mut candidates = vec![
        "/usr/share/fonts/opentype/noto/NotoSansCJK-Regular.ttc".to_string(),
        "/usr/share/fonts/noto-cjk/NotoSansCJK-Regular.ttc".to_string(),
        "/System/Library/Fonts/AppleSDGothicNeo.ttc".to_string(),
    ];
    if let Some(windir) = std::env::var_os("WINDIR") {
        let fonts = Path::new(&windir).join("Fonts");
        for cand in ["malgun.ttf", "gulim.ttc"] {
            candidates.insert(0, fonts.join(cand).display().to_string());
        }
    }
    for p in candidates {
        if Path::new(&p).exists() {
            let bytes =
                fs::read(&p).map_err(|e| format!("Failed to read system font ({p}): {e}"))?;
            apply_font_bytes(ctx, bytes, "korean_font");
            return Ok(());
        }
    }
    Err("Korean font not found. Please set a user font (.ttf/.ttc) in settings.".into())
}

/// 사용자가 선택한 경로의 폰트를 egui에 등록한다.
fn load_custom_font(ctx: &egui::Context, path: &str) -> Result<(), String> {
    let p = Path::new(path);
    if !p.exists() {
        return Err(format!("Font file not found: {path}"));
    }
    let bytes = fs::read(p).map_err(|e| format!("Failed to read font file: {e}"))?;
    apply_font_bytes(ctx, bytes, "user_font");
    Ok(())
}

/// 설정 창 슬라이더와 같은 범위.
const UI_SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.8..=1.6;
const WINDOW_ALPHA_RANGE: std::ops::RangeInclusive<f32> = 0.3..=1.0;

fn clamp_to(value: f32, range: &std::ops::RangeInclusive<f32>, fallback: f32) -> f32 {
    if value.is_nan() {
        fallback
    } else {
        value.clamp(*range.start(), *range.end())
    }
}

struct GuiApp {
    config: config::Config,
    /// 투명도를 적용하기 전의 배경색
    base_visuals: egui::Visuals,
    tr: i18n::Translator,
    form: SugarForm,
    outcome: Option<FormOutcome>,
    show_methodology: bool,
    show_settings_modal: bool,
    show_help_modal: bool,
    lang_input: String,
    ui_scale: f32,
    window_alpha: f32,
    settings_status: Option<String>,
}

impl GuiApp {
    fn new(config: config::Config, lang_override: Option<&str>) -> Self {
        let cli_lang = lang_override.unwrap_or("auto");
        let lang_code = i18n::resolve_language(cli_lang, Some(config.language.as_str()));
        let tr = i18n::Translator::new_with_pack(&lang_code, config.language_pack_dir.as_deref());
        Self {
            form: SugarForm::from_config(&config),
            tr,
            outcome: None,
            show_methodology: true,
            show_settings_modal: false,
            show_help_modal: false,
            base_visuals: egui::Visuals::dark(),
            lang_input: config.language.clone(),
            ui_scale: clamp_to(config.ui_scale, &UI_SCALE_RANGE, 1.0),
            window_alpha: clamp_to(config.window_alpha, &WINDOW_ALPHA_RANGE, 1.0),
            settings_status: None,
            config,
        }
    }

    /// 계산 버튼 동작.
    fn run_calculation(&mut self) {
        self.outcome = Some(self.form.submit());
    }

    fn apply_unit_preset(&mut self, system: config::UnitSystem) {
        self.config.apply_unit_system(system);
        self.form.set_mass_unit(self.config.default_units.mass);
        self.outcome = None;
    }

    fn apply_decimals(&mut self, decimals: usize) {
        self.config.display_decimals = decimals.min(form::MAX_DECIMALS);
        self.form.decimals = self.config.display_decimals;
        self.outcome = None;
    }

    fn ui_problem(&self, ui: &mut egui::Ui) {
        ui.heading(self.tr.t(keys::PROBLEM_HEADING));
        ui.add(egui::Label::new(self.tr.t(keys::PROBLEM_DESCRIPTION)).wrap(true));
        ui.add_space(4.0);
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.label(egui::RichText::new(self.tr.t(keys::PROBLEM_EXAMPLE)).italics());
        });
    }

    fn ui_inputs(&mut self, ui: &mut egui::Ui) {
        let tr = self.tr.clone();
        ui.heading(tr.t(keys::INPUT_HEADING));
        ui.add_space(8.0);
        let mut changed = false;
        egui::Frame::group(ui.style()).show(ui, |ui| {
            egui::Grid::new("sugar_form_grid")
                .num_columns(2)
                .spacing([12.0, 8.0])
                .show(ui, |ui| {
                    let unit = self.form.mass_unit;
                    label_with_tip(
                        ui,
                        &format!("{} ({})", tr.t(keys::FIELD_PULP_MASS), unit.symbol()),
                        &tr.t(keys::HELP_PULP_MASS),
                    );
                    let min_mass = self.form.pulp_mass_min();
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.form.pulp_mass)
                                .speed(form::PULP_MASS_STEP)
                                .clamp_range(min_mass..=f64::MAX)
                                .suffix(format!(" {}", unit.symbol())),
                        )
                        .on_hover_text(tr.t(keys::HELP_PULP_MASS))
                        .changed();
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &tr.t(keys::FIELD_INITIAL_BRIX),
                        &tr.t(keys::HELP_INITIAL_BRIX),
                    );
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.form.initial_brix)
                                .speed(form::BRIX_STEP)
                                .clamp_range(form::BRIX_MIN..=form::BRIX_MAX)
                                .suffix(" °Bx"),
                        )
                        .on_hover_text(tr.t(keys::HELP_INITIAL_BRIX))
                        .changed();
                    ui.end_row();

                    label_with_tip(
                        ui,
                        &tr.t(keys::FIELD_TARGET_BRIX),
                        &tr.t(keys::HELP_TARGET_BRIX),
                    );
                    changed |= ui
                        .add(
                            egui::DragValue::new(&mut self.form.target_brix)
                                .speed(form::BRIX_STEP)
                                .clamp_range(form::BRIX_MIN..=form::BRIX_MAX)
                                .suffix(" °Bx"),
                        )
                        .on_hover_text(tr.t(keys::HELP_TARGET_BRIX))
                        .changed();
                    ui.end_row();
                });
            ui.add_space(6.0);
            let button = egui::Button::new(
                egui::RichText::new(tr.t(keys::COMPUTE_BUTTON)).strong(),
            )
            .fill(ui.visuals().selection.bg_fill)
            .min_size(egui::vec2(ui.available_width(), 32.0));
            if ui.add(button).clicked() {
                self.form.clamp_to_constraints();
                self.run_calculation();
                changed = false;
            }
        });
        // 이전 결과는 입력이 바뀌면 지운다
        if changed {
            self.outcome = None;
        }
        ui.add_space(8.0);
        self.ui_result(ui);
    }

    fn ui_result(&self, ui: &mut egui::Ui) {
        match &self.outcome {
            Some(FormOutcome::Success(metric)) => {
                ui.colored_label(
                    egui::Color32::from_rgb(46, 160, 67),
                    self.tr.t(keys::RESULT_SUCCESS),
                );
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.label(egui::RichText::new(self.tr.t(keys::RESULT_METRIC_LABEL)).small());
                    ui.label(egui::RichText::new(&metric.display).size(30.0).strong());
                });
                self.ui_balance(ui, metric);
            }
            Some(FormOutcome::Failure(err)) => {
                let msg = err.localized(&self.tr, self.form.mass_unit, self.form.decimals);
                ui.colored_label(
                    ui.visuals().error_fg_color,
                    format!("{}: {msg}", self.tr.t(keys::ERROR_PREFIX)),
                );
            }
            None => {}
        }
    }

    fn ui_balance(&self, ui: &mut egui::Ui, metric: &SugarMetric) {
        let unit = self.form.mass_unit;
        let d = self.form.decimals;
        let bal = &metric.balance;
        egui::CollapsingHeader::new(self.tr.t(keys::RESULT_BALANCE_HEADING))
            .default_open(false)
            .show(ui, |ui| {
                ui.label(self.tr.tf(
                    keys::RESULT_FINAL_MASS,
                    &[("value", form::format_mass(bal.final_mass_kg, unit, d))],
                ));
                ui.label(self.tr.tf(
                    keys::RESULT_SOLIDS_IN,
                    &[("value", form::format_mass(bal.solids_in_kg, unit, d))],
                ));
                ui.label(self.tr.tf(
                    keys::RESULT_SOLIDS_OUT,
                    &[("value", form::format_mass(bal.solids_out_kg, unit, d))],
                ));
                ui.label(self.tr.tf(
                    keys::RESULT_RESULTING_BRIX,
                    &[("value", format!("{:.2} °Bx", metric.resulting_brix.percent))],
                ));
            });
    }

    fn ui_methodology(&self, ui: &mut egui::Ui) {
        let tr = &self.tr;
        ui.heading(tr.t(keys::METHOD_HEADING));
        ui.add(egui::Label::new(tr.t(keys::METHOD_INTRO)).wrap(true));
        ui.add_space(6.0);
        ui.strong(tr.t(keys::METHOD_BALANCE_HEADING));
        ui.add(egui::Label::new(tr.t(keys::METHOD_BALANCE_TEXT)).wrap(true));
        ui.code(tr.t(keys::METHOD_BALANCE_FORMULA));
        ui.add_space(6.0);
        ui.strong(tr.t(keys::METHOD_SOLVE_HEADING));
        ui.add(egui::Label::new(tr.t(keys::METHOD_SOLVE_TEXT)).wrap(true));
        ui.code(tr.t(keys::METHOD_SOLVED_FORMULA));
        ui.add_space(4.0);
        for line in tr.t(keys::METHOD_LEGEND).lines() {
            ui.small(format!("• {line}"));
        }
    }

    fn ui_settings(&mut self, ctx: &egui::Context) {
        let tr = self.tr.clone();
        let mut new_unit_system = self.config.unit_system;
        let mut new_decimals = self.config.display_decimals;
        let mut save_clicked = false;
        let mut pick_font = false;
        egui::Window::new(tr.t(keys::GUI_SETTINGS_TITLE))
            .collapsible(false)
            .resizable(true)
            .open(&mut self.show_settings_modal)
            .show(ctx, |ui| {
                ui.label(tr.t(keys::GUI_SETTINGS_UNIT_PRESET));
                ui.horizontal(|ui| {
                    for (label, us) in [
                        ("Metric (kg)", config::UnitSystem::Metric),
                        ("Imperial (lb)", config::UnitSystem::Imperial),
                    ] {
                        ui.selectable_value(&mut new_unit_system, us, label);
                    }
                });
                ui.separator();
                ui.label(tr.t(keys::GUI_SETTINGS_DECIMALS));
                ui.add(egui::Slider::new(&mut new_decimals, 0..=form::MAX_DECIMALS));
                ui.separator();
                ui.label(tr.t(keys::GUI_SETTINGS_UI_SCALE));
                let scale_slider =
                    egui::Slider::new(&mut self.ui_scale, UI_SCALE_RANGE).suffix(" x");
                if ui.add(scale_slider).changed() {
                    ctx.set_pixels_per_point(self.ui_scale);
                }
                ui.label(tr.t(keys::GUI_SETTINGS_ALPHA));
                ui.add(egui::Slider::new(&mut self.window_alpha, WINDOW_ALPHA_RANGE).text("alpha"));
                ui.separator();
                ui.label(tr.t(keys::GUI_SETTINGS_LANGUAGE));
                egui::ComboBox::from_id_source("lang_choice")
                    .selected_text(&self.lang_input)
                    .show_ui(ui, |ui| {
                        ui.selectable_value(
                            &mut self.lang_input,
                            "auto".into(),
                            tr.t(keys::GUI_SETTINGS_LANG_AUTO),
                        );
                        ui.selectable_value(&mut self.lang_input, "en".into(), "English");
                        ui.selectable_value(&mut self.lang_input, "es".into(), "Español");
                        ui.selectable_value(&mut self.lang_input, "ko".into(), "한국어");
                    });
                ui.separator();
                ui.label(tr.t(keys::GUI_SETTINGS_FONT));
                if ui.button(tr.t(keys::GUI_SETTINGS_FONT_PICK)).clicked() {
                    pick_font = true;
                }
                ui.separator();
                if ui.button(tr.t(keys::GUI_SETTINGS_SAVE)).clicked() {
                    save_clicked = true;
                }
                if let Some(msg) = &self.settings_status {
                    ui.label(msg);
                }
            });

        if new_unit_system != self.config.unit_system {
            self.apply_unit_preset(new_unit_system);
        }
        if new_decimals != self.config.display_decimals {
            self.apply_decimals(new_decimals);
        }
        if pick_font {
            if let Some(path) = FileDialog::new()
                .add_filter("Font", &["ttf", "ttc", "otf"])
                .pick_file()
            {
                let path = path.display().to_string();
                match load_custom_font(ctx, &path) {
                    Ok(()) => self.config.custom_font_path = Some(path),
                    Err(e) => self.settings_status = Some(e),
                }
            }
        }
        if save_clicked && self.save_settings() {
            if let Err(e) = setup_fonts(ctx, &self.config, self.tr.language_code()) {
                warn!(error = %e, "font setup failed after language change");
                self.settings_status = Some(e);
            }
        }
    }

    /// 설정을 반영하고 저장한다. 화면 언어가 바뀌었으면 `true`.
    fn save_settings(&mut self) -> bool {
        self.config.language = self.lang_input.clone();
        self.config.window_alpha = self.window_alpha;
        self.config.ui_scale = self.ui_scale;
        // 즉시 번역기 반영
        let previous = self.tr.language();
        let resolved = i18n::resolve_language(&self.config.language, None);
        self.tr =
            i18n::Translator::new_with_pack(&resolved, self.config.language_pack_dir.as_deref());
        self.settings_status = Some(match self.config.save() {
            Ok(()) => self.tr.t(keys::SETTINGS_SAVED),
            Err(e) => format!("{}: {e}", self.tr.t(keys::ERROR_PREFIX)),
        });
        self.tr.language() != previous
    }

    /// 기본 배경색에서 매 프레임 새로 계산한다.
    fn apply_style(&self, ctx: &egui::Context) {
        let mut style = (*ctx.style()).clone();
        style.interaction.selectable_labels = false;
        style.visuals.window_fill = self.base_visuals.window_fill.linear_multiply(self.window_alpha);
        style.visuals.panel_fill = self.base_visuals.panel_fill.linear_multiply(self.window_alpha);
        ctx.set_style(style);
    }
}

impl App for GuiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 투명도 적용 + 라벨 복사 방지 스타일
        self.apply_style(ctx);

        // 상단 바
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading(self.tr.t(keys::APP_TITLE));
                ui.separator();
                ui.toggle_value(
                    &mut self.show_methodology,
                    self.tr.t(keys::GUI_METHODOLOGY_BUTTON),
                );
                if ui.button(self.tr.t(keys::GUI_SETTINGS_TITLE)).clicked() {
                    self.show_settings_modal = true;
                }
                if ui.button(self.tr.t(keys::GUI_ABOUT_TITLE)).clicked() {
                    self.show_help_modal = true;
                }
            });
        });

        if self.show_settings_modal {
            self.ui_settings(ctx);
        }

        if self.show_help_modal {
            let tr = self.tr.clone();
            egui::Window::new(tr.t(keys::GUI_ABOUT_TITLE))
                .collapsible(false)
                .resizable(true)
                .open(&mut self.show_help_modal)
                .show(ctx, |ui| {
                    ui.heading(tr.t(keys::APP_TITLE));
                    ui.label(format!("Version: {}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.add(egui::Label::new(tr.t(keys::GUI_ABOUT_TEXT)).wrap(true));
                });
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| {
                    self.ui_problem(ui);
                    ui.separator();
                    if self.show_methodology {
                        ui.columns(2, |cols| {
                            self.ui_inputs(&mut cols[0]);
                            self.ui_methodology(&mut cols[1]);
                        });
                    } else {
                        self.ui_inputs(ui);
                    }
                });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brix_sugar_calculator::units::MassUnit;

    fn app() -> GuiApp {
        GuiApp::new(config::Config::default(), Some("en"))
    }

    #[test]
    fn starts_with_worked_example() {
        let app = app();
        assert_eq!(app.form.pulp_mass, 50.0);
        assert_eq!(app.form.initial_brix, 7.0);
        assert_eq!(app.form.target_brix, 10.0);
        assert!(app.outcome.is_none());
    }

    #[test]
    fn compute_shows_metric_with_three_decimals() {
        let mut app = app();
        app.run_calculation();
        let metric = app.outcome.as_ref().and_then(FormOutcome::metric).unwrap();
        assert_eq!(metric.display, "1.667 kg");
    }

    #[test]
    fn inverted_brix_shows_error_not_metric() {
        let mut app = app();
        app.form.initial_brix = 10.0;
        app.form.target_brix = 7.0;
        app.run_calculation();
        let outcome = app.outcome.as_ref().unwrap();
        assert!(outcome.metric().is_none());
        let msg = outcome
            .error()
            .unwrap()
            .localized(&app.tr, app.form.mass_unit, app.form.decimals);
        assert_eq!(msg, "The final °Brix must be greater than the initial °Brix.");
    }

    #[test]
    fn imperial_preset_converts_pulp_mass() {
        let mut app = app();
        app.run_calculation();
        app.apply_unit_preset(config::UnitSystem::Imperial);
        assert_eq!(app.form.mass_unit, MassUnit::Pound);
        assert!((app.form.pulp_mass - 110.231).abs() < 1e-3);
        assert!(app.outcome.is_none());
        app.run_calculation();
        let metric = app.outcome.as_ref().and_then(FormOutcome::metric).unwrap();
        assert_eq!(metric.display, "3.674 lb");
    }

    #[test]
    fn repeated_frames_keep_fill_alpha_steady() {
        let mut cfg = config::Config::default();
        cfg.window_alpha = 0.9;
        let app = GuiApp::new(cfg, Some("en"));
        let ctx = egui::Context::default();
        app.apply_style(&ctx);
        let first = ctx.style().visuals.panel_fill;
        for _ in 0..30 {
            app.apply_style(&ctx);
        }
        let after = ctx.style().visuals.panel_fill;
        assert_eq!(after, first);
        assert!((228..=231).contains(&after.a()), "alpha={}", after.a());
        assert_eq!(ctx.style().visuals.window_fill.a(), first.a());
    }

    #[test]
    fn out_of_range_scale_and_alpha_are_clamped() {
        let mut cfg = config::Config::default();
        cfg.ui_scale = 0.0;
        cfg.window_alpha = 7.5;
        let app = GuiApp::new(cfg, Some("en"));
        assert_eq!(app.ui_scale, 0.8);
        assert_eq!(app.window_alpha, 1.0);

        let mut cfg = config::Config::default();
        cfg.ui_scale = f32::NAN;
        cfg.window_alpha = 0.0;
        let app = GuiApp::new(cfg, Some("en"));
        assert_eq!(app.ui_scale, 1.0);
        assert_eq!(app.window_alpha, 0.3);
    }

    #[test]
    fn language_flag_decides_font_language() {
        let app = GuiApp::new(config::Config::default(), Some("ko"));
        assert_eq!(app.tr.language_code(), "ko");
    }

    #[test]
    fn saving_new_language_reports_change() {
        let dir = std::env::temp_dir().join(format!("brix_gui_lang_{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        let cfg = config::load_or_default_at(dir.join("config.toml")).unwrap();
        let mut app = GuiApp::new(cfg, Some("en"));
        app.lang_input = "ko".into();
        assert!(app.save_settings());
        assert_eq!(app.tr.language_code(), "ko");
        assert!(!app.save_settings());
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn decimals_setting_changes_display() {
        let mut app = app();
        app.apply_decimals(1);
        app.run_calculation();
        let metric = app.outcome.as_ref().and_then(FormOutcome::metric).unwrap();
        assert_eq!(metric.display, "1.7 kg");
    }
}
