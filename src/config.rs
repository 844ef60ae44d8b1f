use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::info;

use crate::form::DEFAULT_DECIMALS;
use crate::units::MassUnit;

/// 기본 설정 파일 경로.
pub const DEFAULT_CONFIG_PATH: &str = "config.toml";

/// 사용 가능한 단위 시스템 프리셋을 정의한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnitSystem {
    /// kg 기준. 내부 계산 기본값.
    Metric,
    /// 파운드 기준
    Imperial,
}

impl UnitSystem {
    /// 프리셋에 해당하는 기본 단위 세트.
    pub fn default_units(&self) -> DefaultUnits {
        match self {
            UnitSystem::Metric => DefaultUnits {
                mass: MassUnit::Kilogram,
            },
            UnitSystem::Imperial => DefaultUnits {
                mass: MassUnit::Pound,
            },
        }
    }
}

/// 물리량별 기본 단위 설정.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultUnits {
    pub mass: MassUnit,
}

impl Default for DefaultUnits {
    fn default() -> Self {
        UnitSystem::Metric.default_units()
    }
}

/// 입력 폼의 초기값.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormDefaults {
    pub pulp_mass_kg: f64,
    pub initial_brix: f64,
    pub target_brix: f64,
}

impl Default for FormDefaults {
    fn default() -> Self {
        // 예제 문제: 7 °Bx 펄프 50 kg을 10 °Bx로
        Self {
            pulp_mass_kg: 50.0,
            initial_brix: 7.0,
            target_brix: 10.0,
        }
    }
}

/// 애플리케이션 설정을 표현한다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub unit_system: UnitSystem,
    pub default_units: DefaultUnits,
    /// auto 또는 en/es/ko 등 언어 코드
    pub language: String,
    /// 외부 언어팩 디렉터리
    pub language_pack_dir: Option<String>,
    /// 결과 표시 소수 자릿수
    pub display_decimals: usize,
    pub form_defaults: FormDefaults,
    pub window_alpha: f32,
    pub ui_scale: f32,
    pub custom_font_path: Option<String>,
    #[serde(skip)]
    path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unit_system: UnitSystem::Metric,
            default_units: DefaultUnits::default(),
            language: "auto".to_string(),
            language_pack_dir: None,
            display_decimals: DEFAULT_DECIMALS,
            form_defaults: FormDefaults::default(),
            window_alpha: 1.0,
            ui_scale: 1.0,
            custom_font_path: None,
            path: None,
        }
    }
}

/// 설정 로드/저장 시 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config file I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("config serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// config.toml을 로드하거나 없으면 기본 설정을 생성한다.
pub fn load_or_default() -> Result<Config, ConfigError> {
    load_or_default_at(DEFAULT_CONFIG_PATH)
}

/// 지정한 경로의 설정을 로드한다. 파일이 없으면 기본값으로 새로 만든다.
pub fn load_or_default_at(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let mut cfg = if path.exists() {
        let content = fs::read_to_string(path)?;
        let cfg: Config = toml::from_str(&content)?;
        info!(path = %path.display(), "config loaded");
        cfg
    } else {
        let cfg = Config::default();
        save_config(&cfg, path)?;
        info!(path = %path.display(), "default config created");
        cfg
    };
    cfg.path = Some(path.to_path_buf());
    Ok(cfg)
}

fn save_config(cfg: &Config, path: &Path) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(cfg)?;
    fs::write(path, content)?;
    Ok(())
}

impl Config {
    /// 설정을 로드했던 파일(없으면 config.toml)에 저장한다.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = self
            .path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH));
        save_config(self, &path)?;
        info!(path = %path.display(), "config saved");
        Ok(())
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// 단위 프리셋을 바꾸고 기본 단위를 함께 갱신한다.
    pub fn apply_unit_system(&mut self, system: UnitSystem) {
        self.unit_system = system;
        self.default_units = system.default_units();
    }
}
