// src/core/config.rs
use crate::core::constants::{DEFAULT_MAX_ENTRIES, DEFAULT_POLL_RATE, MAX_POLL_RATE, MIN_POLL_RATE};
use crate::core::prelude::*;
use crate::ui::color::AppColor;
use crate::ui::style::{PanelStyle, TitleWeight};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// TOML Configuration Structure
#[derive(Debug, Serialize, Deserialize)]
struct ConfigFile {
    general: GeneralConfig,
    #[serde(default)]
    panel: Option<PanelConfigToml>,
}

#[derive(Debug, Serialize, Deserialize)]
struct GeneralConfig {
    #[serde(default = "default_max_entries")]
    max_entries: usize,
    #[serde(default = "default_poll_rate")]
    poll_rate: u64,
    #[serde(default = "default_log_level")]
    log_level: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct PanelConfigToml {
    #[serde(default = "default_padding")]
    padding: u16,
    #[serde(default = "default_title_font_size")]
    title_font_size: u16,
    #[serde(default = "default_title_weight")]
    title_weight: String,
    #[serde(default = "default_log_font_size")]
    log_font_size: u16,
    #[serde(default)]
    row_spacing: u16,
    #[serde(default = "default_background")]
    background_color: String,
    #[serde(default = "default_title_color")]
    title_color: String,
    #[serde(default = "default_text_color")]
    text_color: String,
}

// Default Functions
fn default_max_entries() -> usize {
    DEFAULT_MAX_ENTRIES
}
fn default_poll_rate() -> u64 {
    DEFAULT_POLL_RATE
}
fn default_log_level() -> String {
    "info".into()
}
fn default_padding() -> u16 {
    1
}
fn default_title_font_size() -> u16 {
    16
}
fn default_title_weight() -> String {
    "bold".into()
}
fn default_log_font_size() -> u16 {
    12
}
fn default_background() -> String {
    "Black".into()
}
fn default_title_color() -> String {
    "White".into()
}
fn default_text_color() -> String {
    "Gray".into()
}

#[derive(Debug, Clone)]
pub struct Config {
    config_path: Option<String>,
    pub max_entries: usize,
    pub poll_rate: Duration,
    pub log_level: String,
    pub panel: PanelStyle,
}

impl Config {
    pub async fn load() -> Result<Self> {
        let paths = crate::setup::setup_toml::get_config_paths();
        let config_dir = crate::setup::setup_toml::base_dir()?;
        Self::load_from(&paths, &config_dir).await
    }

    /// First existing file in `paths` wins and its errors are returned as is.
    /// Without any, a default config is written into `config_dir`.
    pub async fn load_from(paths: &[PathBuf], config_dir: &Path) -> Result<Self> {
        if let Some(path) = paths.iter().find(|path| path.exists()) {
            log::debug!("Loading config {}", path.display());
            return Self::from_file(path).await.map_err(|e| {
                log::error!("Invalid config {}: {}", path.display(), e);
                e
            });
        }

        let path = crate::setup::setup_toml::ensure_config_in(config_dir).await?;
        Self::from_file(&path).await
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = tokio::fs::read_to_string(&path)
            .await
            .map_err(AppError::Io)?;
        let file: ConfigFile =
            toml::from_str(&content).map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        let poll_rate = Self::clamp(
            file.general.poll_rate,
            MIN_POLL_RATE,
            MAX_POLL_RATE,
            DEFAULT_POLL_RATE,
        );
        let max_entries = if file.general.max_entries == 0 {
            DEFAULT_MAX_ENTRIES
        } else {
            file.general.max_entries
        };

        let panel = match &file.panel {
            Some(def) => PanelStyle::from_config(def)?,
            None => PanelStyle::default(),
        };
        panel.validate()?;

        let config = Self {
            config_path: Some(path.as_ref().to_string_lossy().into_owned()),
            max_entries,
            poll_rate: Duration::from_millis(poll_rate),
            log_level: file.general.log_level,
            panel,
        };

        // Auto-save corrected values
        if poll_rate != file.general.poll_rate || max_entries != file.general.max_entries {
            log::warn!("Correcting out-of-range values in {}", path.as_ref().display());
            if let Err(e) = config.save().await {
                log::warn!("Could not save corrected config: {}", e);
            }
        }

        Ok(config)
    }

    pub async fn save(&self) -> Result<()> {
        let Some(path) = &self.config_path else {
            return Ok(());
        };

        let file = ConfigFile {
            general: GeneralConfig {
                max_entries: self.max_entries,
                poll_rate: self.poll_rate.as_millis() as u64,
                log_level: self.log_level.clone(),
            },
            panel: Some(PanelConfigToml::from(&self.panel)),
        };

        let content = toml::to_string_pretty(&file)
            .map_err(|e| AppError::Config(format!("TOML: {}", e)))?;

        if let Some(parent) = PathBuf::from(path).parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(AppError::Io)?;
        }

        tokio::fs::write(path, content).await.map_err(AppError::Io)
    }

    pub fn config_path(&self) -> Option<&str> {
        self.config_path.as_deref()
    }

    fn clamp(value: u64, min: u64, max: u64, default: u64) -> u64 {
        if value < min || value > max {
            default
        } else {
            value
        }
    }
}

impl PanelStyle {
    fn from_config(def: &PanelConfigToml) -> Result<Self> {
        Ok(Self {
            padding: def.padding,
            title_font_size: def.title_font_size,
            title_weight: TitleWeight::from_string(&def.title_weight)?,
            log_font_size: def.log_font_size,
            row_spacing: def.row_spacing,
            background_color: AppColor::from_string(&def.background_color)?,
            title_color: AppColor::from_string(&def.title_color)?,
            text_color: AppColor::from_string(&def.text_color)?,
        })
    }
}

impl From<&PanelStyle> for PanelConfigToml {
    fn from(style: &PanelStyle) -> Self {
        Self {
            padding: style.padding,
            title_font_size: style.title_font_size,
            title_weight: style.title_weight.as_str().to_string(),
            log_font_size: style.log_font_size,
            row_spacing: style.row_spacing,
            background_color: style.background_color.to_config_string(),
            title_color: style.title_color.to_config_string(),
            text_color: style.text_color.to_config_string(),
        }
    }
}

crate::impl_default!(
    Config,
    Self {
        config_path: None,
        max_entries: DEFAULT_MAX_ENTRIES,
        poll_rate: Duration::from_millis(DEFAULT_POLL_RATE),
        log_level: "info".into(),
        panel: PanelStyle::default(),
    }
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::setup::setup_toml::DEFAULT_CONFIG;

    async fn write_config(dir: &tempfile::TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("console.toml");
        tokio::fs::write(&path, content).await.unwrap();
        path
    }

    #[tokio::test]
    async fn test_default_config_matches_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, DEFAULT_CONFIG).await;

        let config = Config::from_file(&path).await.unwrap();
        let defaults = Config::default();
        assert_eq!(config.max_entries, defaults.max_entries);
        assert_eq!(config.poll_rate, defaults.poll_rate);
        assert_eq!(config.log_level, defaults.log_level);
        assert_eq!(config.panel, defaults.panel);
    }

    #[tokio::test]
    async fn test_missing_panel_section_uses_default_style() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[general]\nmax_entries = 50\n").await;

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.max_entries, 50);
        assert_eq!(config.panel, PanelStyle::default());
    }

    #[tokio::test]
    async fn test_out_of_range_values_are_corrected_and_saved() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[general]\nmax_entries = 0\npoll_rate = 1\n").await;

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.poll_rate, Duration::from_millis(DEFAULT_POLL_RATE));
        assert_eq!(config.max_entries, DEFAULT_MAX_ENTRIES);

        let saved = tokio::fs::read_to_string(&path).await.unwrap();
        assert!(saved.contains("poll_rate = 16"));
        assert!(saved.contains("[panel]"));
    }

    #[tokio::test]
    async fn test_panel_section_is_parsed() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(
            &dir,
            r##"[general]
[panel]
padding = 2
title_weight = "normal"
row_spacing = 1
background_color = "#f0f0f0"
"##,
        )
        .await;

        let config = Config::from_file(&path).await.unwrap();
        assert_eq!(config.panel.padding, 2);
        assert_eq!(config.panel.title_weight, TitleWeight::Normal);
        assert_eq!(config.panel.row_spacing, 1);
        assert_eq!(
            config.panel.background_color,
            AppColor::new(Color::Rgb(0xf0, 0xf0, 0xf0))
        );
        assert_eq!(config.panel.title_font_size, 16);
    }

    #[tokio::test]
    async fn test_invalid_panel_values_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "[general]\n[panel]\ntext_color = \"sparkly\"\n").await;
        assert!(matches!(
            Config::from_file(&path).await,
            Err(AppError::Validation(_))
        ));

        let path = write_config(&dir, "[general]\n[panel]\nlog_font_size = 0\n").await;
        assert!(Config::from_file(&path).await.is_err());
    }

    #[tokio::test]
    async fn test_broken_toml_is_a_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, "general = [").await;
        assert!(matches!(
            Config::from_file(&path).await,
            Err(AppError::Config(_))
        ));
    }

    #[tokio::test]
    async fn test_load_creates_default_when_nothing_exists() {
        let dir = tempfile::tempdir().unwrap();
        let config_dir = dir.path().join(".console");
        let missing = vec![dir.path().join("nowhere.toml")];

        let config = Config::load_from(&missing, &config_dir).await.unwrap();
        assert_eq!(config.panel, PanelStyle::default());
        assert!(config_dir.join("console.toml").exists());
    }

    #[tokio::test]
    async fn test_load_reports_invalid_first_file() {
        let dir = tempfile::tempdir().unwrap();
        let broken = write_config(&dir, "general = [").await;
        let config_dir = dir.path().join(".console");

        let result = Config::load_from(&[broken.clone()], &config_dir).await;
        assert!(matches!(result, Err(AppError::Config(_))));
        // the broken file is left for the user to fix, no default is written over it
        assert_eq!(tokio::fs::read_to_string(&broken).await.unwrap(), "general = [");
        assert!(!config_dir.exists());
    }

    #[tokio::test]
    async fn test_save_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(&dir, DEFAULT_CONFIG).await;

        let mut config = Config::from_file(&path).await.unwrap();
        config.panel.row_spacing = 2;
        config.panel.background_color = AppColor::new(Color::Rgb(1, 2, 3));
        config.save().await.unwrap();

        let reloaded = Config::from_file(&path).await.unwrap();
        assert_eq!(reloaded.panel, config.panel);
    }
}
