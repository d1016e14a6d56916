// =====================================================
// FILE: src/setup/setup_toml.rs - DEFAULT CONFIG
// =====================================================

use crate::core::constants::{CONFIG_DIR, CONFIG_FILE, LOG_FILE};
use crate::core::prelude::*;
use std::path::{Path, PathBuf};
use tokio::fs;

pub const DEFAULT_CONFIG: &str = r##"[general]
# Oldest entries are dropped once this many are shown
max_entries = 1000
# Tick rate of the render loop in ms (16-1000)
poll_rate = 16
log_level = "info"

[panel]
padding = 1
title_font_size = 16
title_weight = "bold"
log_font_size = 12
row_spacing = 0
# Named terminal color or "#rrggbb"
background_color = "Black"
title_color = "White"
text_color = "Gray"
"##;

/// Directory next to the executable that holds config and log file.
pub fn base_dir() -> Result<PathBuf> {
    let exe_path = std::env::current_exe().map_err(AppError::Io)?;
    let base_dir = exe_path
        .parent()
        .ok_or_else(|| AppError::Config("Cannot determine executable directory".to_string()))?;
    Ok(base_dir.join(CONFIG_DIR))
}

pub fn log_file_path() -> Result<PathBuf> {
    Ok(base_dir()?.join(LOG_FILE))
}

pub async fn ensure_config_exists() -> Result<PathBuf> {
    ensure_config_in(&base_dir()?).await
}

pub async fn ensure_config_in(config_dir: &Path) -> Result<PathBuf> {
    if !config_dir.exists() {
        fs::create_dir_all(config_dir).await.map_err(AppError::Io)?;
        log::debug!("Created config dir {}", config_dir.display());
    }

    let config_path = config_dir.join(CONFIG_FILE);
    if !config_path.exists() {
        fs::write(&config_path, DEFAULT_CONFIG)
            .await
            .map_err(AppError::Io)?;
        log::info!("Created default config {}", config_path.display());
    }

    Ok(config_path)
}

pub fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();
    if let Ok(dir) = base_dir() {
        paths.push(dir.join(CONFIG_FILE));
    }
    #[cfg(debug_assertions)]
    {
        paths.push(PathBuf::from(CONFIG_FILE));
    }
    paths
}
