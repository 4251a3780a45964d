use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::utils::url::normalize_base_url;

/// Service used when nothing else names one.
pub const DEFAULT_BASE_URL: &str = "https://matiasrodriguezc-emotion-ai-api.hf.space";

/// Environment variable that overrides the configured base URL.
pub const BASE_URL_ENV: &str = "EMOTION_AI_API_URL";

#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq)]
pub struct Config {
    /// Root address of the inference service, without the `/analyze` suffix
    pub base_url: Option<String>,
    /// UI theme name ("dark", "light" or "monochrome")
    pub theme: Option<String>,
}

impl Config {
    pub fn print_all(&self) {
        println!("Current configuration:");
        match &self.base_url {
            Some(url) => println!("  base-url: {url}"),
            None => println!("  base-url: (unset, default {DEFAULT_BASE_URL})"),
        }
        match &self.theme {
            Some(theme) => println!("  theme: {theme}"),
            None => println!("  theme: (unset)"),
        }
        println!("  config file: {}", path_display(Self::get_config_path()));
    }
}

/// Pick the base URL: flag, then environment, then config file, then default.
///
/// Empty values at any level count as unset.
pub fn resolve_base_url(
    cli_override: Option<&str>,
    env_value: Option<String>,
    config: &Config,
) -> String {
    let chosen = cli_override
        .map(str::to_string)
        .filter(|value| !value.trim().is_empty())
        .or_else(|| env_value.filter(|value| !value.trim().is_empty()))
        .or_else(|| {
            config
                .base_url
                .clone()
                .filter(|value| !value.trim().is_empty())
        })
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
    normalize_base_url(chosen.trim())
}

pub fn path_display<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();

    #[cfg(unix)]
    {
        if let Some(home) = std::env::var_os("HOME") {
            let home_path = PathBuf::from(home);
            if let Ok(relative) = path.strip_prefix(&home_path) {
                return format!("~/{}", relative.display());
            }
        }
    }

    path.display().to_string()
}
