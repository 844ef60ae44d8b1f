use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::{debug, warn};

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_TITLE: &str = "general.app_title";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_CALCULATE: &str = "main_menu.calculate";
    pub const MAIN_MENU_METHODOLOGY: &str = "main_menu.methodology";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";

    pub const PROBLEM_HEADING: &str = "problem.heading";
    pub const PROBLEM_DESCRIPTION: &str = "problem.description";
    pub const PROBLEM_EXAMPLE: &str = "problem.example";

    pub const INPUT_HEADING: &str = "input.heading";
    pub const FIELD_PULP_MASS: &str = "field.pulp_mass";
    pub const FIELD_INITIAL_BRIX: &str = "field.initial_brix";
    pub const FIELD_TARGET_BRIX: &str = "field.target_brix";
    pub const HELP_PULP_MASS: &str = "help.pulp_mass";
    pub const HELP_INITIAL_BRIX: &str = "help.initial_brix";
    pub const HELP_TARGET_BRIX: &str = "help.target_brix";
    pub const PROMPT_DEFAULT_HINT: &str = "prompt.default_hint";
    pub const COMPUTE_BUTTON: &str = "input.compute_button";

    pub const RESULT_SUCCESS: &str = "result.success";
    pub const RESULT_METRIC_LABEL: &str = "result.metric_label";
    pub const RESULT_BALANCE_HEADING: &str = "result.balance_heading";
    pub const RESULT_FINAL_MASS: &str = "result.final_mass";
    pub const RESULT_SOLIDS_IN: &str = "result.solids_in";
    pub const RESULT_SOLIDS_OUT: &str = "result.solids_out";
    pub const RESULT_RESULTING_BRIX: &str = "result.resulting_brix";

    pub const ERROR_TARGET_NOT_ABOVE_INITIAL: &str = "error.target_not_above_initial";
    pub const ERROR_TARGET_NOT_BELOW_PURE: &str = "error.target_not_below_pure";
    pub const ERROR_PULP_MASS_BELOW_MINIMUM: &str = "error.pulp_mass_below_minimum";
    pub const ERROR_BRIX_OUT_OF_RANGE: &str = "error.brix_out_of_range";

    pub const METHOD_HEADING: &str = "method.heading";
    pub const METHOD_INTRO: &str = "method.intro";
    pub const METHOD_BALANCE_HEADING: &str = "method.balance_heading";
    pub const METHOD_BALANCE_TEXT: &str = "method.balance_text";
    pub const METHOD_BALANCE_FORMULA: &str = "method.balance_formula";
    pub const METHOD_SOLVE_HEADING: &str = "method.solve_heading";
    pub const METHOD_SOLVE_TEXT: &str = "method.solve_text";
    pub const METHOD_SOLVED_FORMULA: &str = "method.solved_formula";
    pub const METHOD_LEGEND: &str = "method.legend";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_UNIT_OPTIONS: &str = "settings.unit_options";
    pub const SETTINGS_PROMPT_UNIT: &str = "settings.prompt_unit";
    pub const SETTINGS_PROMPT_DECIMALS: &str = "settings.prompt_decimals";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";

    pub const GUI_METHODOLOGY_BUTTON: &str = "gui.methodology_button";
    pub const GUI_SETTINGS_TITLE: &str = "gui.settings.title";
    pub const GUI_SETTINGS_UNIT_PRESET: &str = "gui.settings.unit_preset";
    pub const GUI_SETTINGS_DECIMALS: &str = "gui.settings.decimals";
    pub const GUI_SETTINGS_LANGUAGE: &str = "gui.settings.language";
    pub const GUI_SETTINGS_LANG_AUTO: &str = "gui.settings.lang_auto";
    pub const GUI_SETTINGS_UI_SCALE: &str = "gui.settings.ui_scale";
    pub const GUI_SETTINGS_ALPHA: &str = "gui.settings.alpha";
    pub const GUI_SETTINGS_FONT: &str = "gui.settings.font";
    pub const GUI_SETTINGS_FONT_PICK: &str = "gui.settings.font_pick";
    pub const GUI_SETTINGS_SAVE: &str = "gui.settings.save";
    pub const GUI_ABOUT_TITLE: &str = "gui.about.title";
    pub const GUI_ABOUT_TEXT: &str = "gui.about.text";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    En,
    Es,
    Ko,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("es") {
            Language::Es
        } else if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }

    pub fn as_code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
            Language::Ko => "ko",
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(en/es/ko)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 문자열만 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code));
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    pub fn language_code(&self) -> &'static str {
        self.lang.as_code()
    }

    /// 언어팩에만 있는 키를 조회한다.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 → 영어 순으로 찾는다.
    pub fn t(&self, key: &str) -> String {
        if let Some(v) = self.lookup(key) {
            return v;
        }
        let built_in = match self.lang {
            Language::En => en(key),
            Language::Es => es(key).or_else(|| en(key)),
            Language::Ko => ko(key).or_else(|| en(key)),
        };
        built_in.unwrap_or("[missing translation]").to_string()
    }

    /// `{name}` 자리표시자를 채운 번역을 돌려준다.
    pub fn tf(&self, key: &str, vars: &[(&str, String)]) -> String {
        fill_template(&self.t(key), vars)
    }
}

/// 템플릿의 `{key}` 를 값으로 치환한다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    let lang = normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en".to_string());
    debug!(cli = cli_arg, config = ?config_lang, resolved = %lang, "language resolved");
    lang
}

fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "auto" | "" => None,
        other if other.starts_with("en") => Some("en".into()),
        other if other.starts_with("es") => Some(other.replace('_', "-")),
        other if other.starts_with("ko") => Some("ko".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "en" | "es" | "ko" => Some(lang),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(loc) = get_locale() {
        if let Some(lang) = normalize_locale_string(&loc) {
            return Some(lang);
        }
    }
    for var in ["LANG", "LC_ALL"] {
        if let Ok(value) = std::env::var(var) {
            if let Some(code) = normalize_locale_string(&value) {
                return Some(code);
            }
        }
    }
    None
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 또는 [section] 테이블.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(&path).ok()?;
        let map = parse_toml_to_map(&content);
        if map.is_none() {
            warn!(path = %path.display(), "language pack ignored: not a string table");
        }
        map
    };

    // 1) full code (e.g., es-mx)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) base code (e.g., es)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

fn en(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "°Brix Mass-Balance Calculator",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== °Brix Mass-Balance Calculator ===",
        MAIN_MENU_CALCULATE => "1) Calculate sugar to add",
        MAIN_MENU_METHODOLOGY => "2) Methodology and equations",
        MAIN_MENU_SETTINGS => "3) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        PROBLEM_HEADING => "Problem description",
        PROBLEM_DESCRIPTION => "A plant processes fruit into pulp. The dissolved-solids (sugar) concentration, measured in degrees Brix (°Brix), must be adjusted to meet the quality standard of the final product. This tool computes how much sugar must be added to a quantity of pulp to reach a given °Brix.",
        PROBLEM_EXAMPLE => "Example: 50 kg of pulp at 7 °Brix must be brought to 10 °Brix. How much sugar must be added?",
        INPUT_HEADING => "Enter the data",
        FIELD_PULP_MASS => "Initial pulp mass",
        FIELD_INITIAL_BRIX => "Initial °Brix of the pulp (%)",
        FIELD_TARGET_BRIX => "Desired final °Brix (%)",
        HELP_PULP_MASS => "Enter the total amount of pulp to adjust.",
        HELP_INITIAL_BRIX => "Measure and record the current °Brix of your pulp.",
        HELP_TARGET_BRIX => "Enter the °Brix value you want to reach.",
        PROMPT_DEFAULT_HINT => "{label} [{default}]: ",
        COMPUTE_BUTTON => "Calculate sugar amount",
        RESULT_SUCCESS => "Calculation completed successfully!",
        RESULT_METRIC_LABEL => "Sugar to add",
        RESULT_BALANCE_HEADING => "Solids balance check",
        RESULT_FINAL_MASS => "Final mixture mass: {value}",
        RESULT_SOLIDS_IN => "Solids in (pulp + sugar): {value}",
        RESULT_SOLIDS_OUT => "Solids out (mixture × final °Brix): {value}",
        RESULT_RESULTING_BRIX => "Resulting °Brix: {value}",
        ERROR_TARGET_NOT_ABOVE_INITIAL => "The final °Brix must be greater than the initial °Brix.",
        ERROR_TARGET_NOT_BELOW_PURE => "The final °Brix must be below 100%.",
        ERROR_PULP_MASS_BELOW_MINIMUM => "The pulp mass must be at least {min}.",
        ERROR_BRIX_OUT_OF_RANGE => "{field} must be between 0 and 100 (got {value}).",
        METHOD_HEADING => "Methodology and equations",
        METHOD_INTRO => "The calculation is based on a mass balance, both overall and for the solids (sugar).",
        METHOD_BALANCE_HEADING => "Solids balance",
        METHOD_BALANCE_TEXT => "The solids in the initial pulp plus the added sugar (100% solids) must equal the solids in the final mixture.",
        METHOD_BALANCE_FORMULA => "(M_pulp × %Solids_initial) + M_sugar = (M_pulp + M_sugar) × %Solids_final",
        METHOD_SOLVE_HEADING => "Solving for the unknown",
        METHOD_SOLVE_TEXT => "Rearranging the equation for the sugar to add (M_sugar) gives:",
        METHOD_SOLVED_FORMULA => "M_sugar = M_pulp × (Brix_final − Brix_initial) / (100 − Brix_final)",
        METHOD_LEGEND => "M_pulp: initial pulp mass (kg)\nBrix_initial: initial solids concentration (%)\nBrix_final: desired solids concentration (%)",
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Current: unit system {system}, {decimals} decimals, language {lang}",
        SETTINGS_UNIT_OPTIONS => "Unit system: 1) Metric (kg)  2) Imperial (lb)",
        SETTINGS_PROMPT_UNIT => "Unit system number (enter to keep): ",
        SETTINGS_PROMPT_DECIMALS => "Display decimals 0-6 (enter to keep): ",
        SETTINGS_PROMPT_LANGUAGE => "Language auto/en/es/ko (enter to keep): ",
        SETTINGS_INVALID => "Invalid input; value unchanged.",
        SETTINGS_SAVED => "Settings saved.",
        GUI_METHODOLOGY_BUTTON => "Methodology",
        GUI_SETTINGS_TITLE => "Settings",
        GUI_SETTINGS_UNIT_PRESET => "Unit system preset",
        GUI_SETTINGS_DECIMALS => "Display decimals",
        GUI_SETTINGS_LANGUAGE => "Language",
        GUI_SETTINGS_LANG_AUTO => "System",
        GUI_SETTINGS_UI_SCALE => "UI scale",
        GUI_SETTINGS_ALPHA => "Window transparency",
        GUI_SETTINGS_FONT => "Custom font",
        GUI_SETTINGS_FONT_PICK => "Choose font file…",
        GUI_SETTINGS_SAVE => "Save settings",
        GUI_ABOUT_TITLE => "Help / About",
        GUI_ABOUT_TEXT => "Offline calculator for sugar additions to fruit pulp. Added sugar is treated as 100% solids.",
        _ => return None,
    })
}

fn es(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "Error",
        APP_TITLE => "Calculadora de Balance de Masa para °Brix",
        APP_EXIT => "Cerrando la aplicación.",
        MAIN_MENU_TITLE => "\n=== Calculadora de Balance de Masa para °Brix ===",
        MAIN_MENU_CALCULATE => "1) Calcular azúcar a agregar",
        MAIN_MENU_METHODOLOGY => "2) Metodología y ecuaciones",
        MAIN_MENU_SETTINGS => "3) Configuración",
        MAIN_MENU_EXIT => "0) Salir",
        PROMPT_MENU_SELECT => "Seleccione una opción: ",
        INVALID_SELECTION_RETRY => "Entrada inválida. Intente de nuevo.",
        ERROR_INVALID_NUMBER => "Ingrese un número.",
        PROBLEM_HEADING => "Descripción del problema",
        PROBLEM_DESCRIPTION => "Una empresa procesa fruta para obtener pulpa. El objetivo es ajustar la concentración de sólidos disueltos (azúcar), medida en grados Brix (°Brix), para cumplir con los estándares de calidad del producto final. Esta herramienta calcula la cantidad de azúcar que se debe agregar a una cantidad de pulpa para alcanzar un °Brix específico.",
        PROBLEM_EXAMPLE => "Problema de ejemplo: se tienen 50 kg de pulpa con 7 °Brix y se desea llevarla a 10 °Brix. ¿Cuánta azúcar se debe agregar?",
        INPUT_HEADING => "Ingrese los datos",
        FIELD_PULP_MASS => "Masa inicial de la pulpa",
        FIELD_INITIAL_BRIX => "°Brix iniciales de la pulpa (%)",
        FIELD_TARGET_BRIX => "°Brix finales deseados (%)",
        HELP_PULP_MASS => "Ingrese la cantidad total de pulpa que necesita ajustar.",
        HELP_INITIAL_BRIX => "Mida y anote los grados Brix actuales de su pulpa.",
        HELP_TARGET_BRIX => "Ingrese el valor de °Brix que desea alcanzar.",
        COMPUTE_BUTTON => "Calcular cantidad de azúcar",
        RESULT_SUCCESS => "¡Cálculo realizado con éxito!",
        RESULT_METRIC_LABEL => "Azúcar a agregar",
        RESULT_BALANCE_HEADING => "Verificación del balance de sólidos",
        RESULT_FINAL_MASS => "Masa final de la mezcla: {value}",
        RESULT_SOLIDS_IN => "Sólidos de entrada (pulpa + azúcar): {value}",
        RESULT_SOLIDS_OUT => "Sólidos de salida (mezcla × °Brix final): {value}",
        RESULT_RESULTING_BRIX => "°Brix resultante: {value}",
        ERROR_TARGET_NOT_ABOVE_INITIAL => "El °Brix final debe ser mayor que el °Brix inicial.",
        ERROR_TARGET_NOT_BELOW_PURE => "El °Brix final debe ser menor que 100%.",
        ERROR_PULP_MASS_BELOW_MINIMUM => "La masa de pulpa debe ser al menos {min}.",
        ERROR_BRIX_OUT_OF_RANGE => "{field} debe estar entre 0 y 100 (valor {value}).",
        METHOD_HEADING => "Metodología y ecuaciones",
        METHOD_INTRO => "El cálculo se basa en un balance de masa, tanto general como de sólidos (azúcar).",
        METHOD_BALANCE_HEADING => "Balance de sólidos",
        METHOD_BALANCE_TEXT => "La cantidad de sólidos en la pulpa inicial más el azúcar que agregamos (que es 100% sólidos) debe ser igual a la cantidad de sólidos en la mezcla final.",
        METHOD_SOLVE_HEADING => "Despejando la incógnita",
        METHOD_SOLVE_TEXT => "Al reorganizar la ecuación para resolver la cantidad de azúcar a agregar (M_azúcar), obtenemos:",
        METHOD_BALANCE_FORMULA => "(M_pulpa × %Sólidos_inicial) + M_azúcar = (M_pulpa + M_azúcar) × %Sólidos_final",
        METHOD_SOLVED_FORMULA => "M_azúcar = M_pulpa × (Brix_final − Brix_inicial) / (100 − Brix_final)",
        METHOD_LEGEND => "M_pulpa: masa inicial de la pulpa (kg)\nBrix_inicial: concentración inicial de sólidos (%)\nBrix_final: concentración deseada de sólidos (%)",
        SETTINGS_HEADING => "\n-- Configuración --",
        SETTINGS_CURRENT => "Actual: sistema {system}, {decimals} decimales, idioma {lang}",
        SETTINGS_UNIT_OPTIONS => "Sistema de unidades: 1) Métrico (kg)  2) Imperial (lb)",
        SETTINGS_PROMPT_UNIT => "Número de sistema (enter para mantener): ",
        SETTINGS_PROMPT_DECIMALS => "Decimales a mostrar 0-6 (enter para mantener): ",
        SETTINGS_PROMPT_LANGUAGE => "Idioma auto/en/es/ko (enter para mantener): ",
        SETTINGS_INVALID => "Entrada inválida; sin cambios.",
        SETTINGS_SAVED => "Configuración guardada.",
        GUI_METHODOLOGY_BUTTON => "Metodología",
        GUI_SETTINGS_TITLE => "Configuración",
        GUI_SETTINGS_UNIT_PRESET => "Sistema de unidades",
        GUI_SETTINGS_DECIMALS => "Decimales",
        GUI_SETTINGS_LANGUAGE => "Idioma",
        GUI_SETTINGS_LANG_AUTO => "Sistema",
        GUI_SETTINGS_SAVE => "Guardar configuración",
        GUI_ABOUT_TITLE => "Ayuda / Acerca de",
        GUI_ABOUT_TEXT => "Calculadora sin conexión para agregar azúcar a pulpa de fruta. El azúcar agregado se considera 100% sólidos.",
        _ => return None,
    })
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_TITLE => "°Brix 물질수지 계산기",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== °Brix 물질수지 계산기 ===",
        MAIN_MENU_CALCULATE => "1) 설탕 투입량 계산",
        MAIN_MENU_METHODOLOGY => "2) 계산 방법과 식",
        MAIN_MENU_SETTINGS => "3) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        INPUT_HEADING => "데이터 입력",
        FIELD_PULP_MASS => "초기 펄프 질량",
        FIELD_INITIAL_BRIX => "펄프 초기 °Brix (%)",
        FIELD_TARGET_BRIX => "목표 °Brix (%)",
        COMPUTE_BUTTON => "설탕량 계산",
        RESULT_SUCCESS => "계산이 완료되었습니다.",
        RESULT_METRIC_LABEL => "투입할 설탕",
        RESULT_BALANCE_HEADING => "고형분 수지 검산",
        ERROR_TARGET_NOT_ABOVE_INITIAL => "목표 °Brix는 초기 °Brix보다 커야 합니다.",
        ERROR_TARGET_NOT_BELOW_PURE => "목표 °Brix는 100% 미만이어야 합니다.",
        ERROR_PULP_MASS_BELOW_MINIMUM => "펄프 질량은 {min} 이상이어야 합니다.",
        ERROR_BRIX_OUT_OF_RANGE => "{field} 값은 0~100 이어야 합니다 (입력 {value}).",
        METHOD_HEADING => "계산 방법과 식",
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        GUI_SETTINGS_TITLE => "설정",
        GUI_SETTINGS_LANGUAGE => "언어",
        _ => return None,
    })
}
