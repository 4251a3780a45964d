//! `set` / `unset` handling for the persisted configuration.

use std::error::Error;
use std::fmt;

use crate::core::config::Config;
use crate::ui::theme::Theme;

/// Errors that can occur when modifying configuration settings.
#[derive(Debug, PartialEq)]
pub enum SettingError {
    /// The provided setting key is not recognized.
    UnknownKey(String),
    /// The provided theme name was not found.
    UnknownTheme { input: String },
    /// The base URL is not an http(s) URL.
    InvalidUrl(String),
    /// Required arguments are missing.
    MissingArgs {
        hint: &'static str,
        example: &'static str,
    },
}

impl SettingError {
    /// Print the error message to stderr with appropriate formatting.
    pub fn print(&self) {
        match self {
            SettingError::UnknownKey(key) => {
                eprintln!("❌ Unknown config key: {key}");
                eprintln!("   Known keys: base-url, theme");
            }
            SettingError::UnknownTheme { input } => {
                eprintln!(
                    "❌ Unknown theme: {input}. Available themes: {}",
                    Theme::names().join(", ")
                );
            }
            SettingError::InvalidUrl(input) => {
                eprintln!("❌ Invalid base URL: {input}");
                eprintln!("   The URL must start with http:// or https://");
            }
            SettingError::MissingArgs { hint, example } => {
                eprintln!("⚠️  {hint}");
                eprintln!("Example: {example}");
            }
        }
    }
}

impl fmt::Display for SettingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SettingError::UnknownKey(key) => write!(f, "Unknown config key: {key}"),
            SettingError::UnknownTheme { input } => write!(f, "Unknown theme: {input}"),
            SettingError::InvalidUrl(input) => write!(f, "Invalid base URL: {input}"),
            SettingError::MissingArgs { hint, .. } => write!(f, "{hint}"),
        }
    }
}

impl std::error::Error for SettingError {}

/// Apply `set <key> <value>` to `config`, returning the confirmation message.
pub fn apply_set(config: &mut Config, key: &str, value: Option<&str>) -> Result<String, SettingError> {
    match key {
        "base-url" => {
            let Some(url) = value.map(str::trim).filter(|v| !v.is_empty()) else {
                return Err(SettingError::MissingArgs {
                    hint: "To set the base URL, provide the service address:",
                    example: "emotion-ai set base-url http://localhost:8000",
                });
            };
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                return Err(SettingError::InvalidUrl(url.to_string()));
            }
            let url = crate::utils::url::normalize_base_url(url);
            config.base_url = Some(url.clone());
            Ok(format!("✅ Set base-url to: {url}"))
        }
        "theme" => {
            let Some(name) = value.map(str::trim).filter(|v| !v.is_empty()) else {
                return Err(SettingError::MissingArgs {
                    hint: "To set a theme, provide its name:",
                    example: "emotion-ai set theme light",
                });
            };
            if Theme::find(name).is_none() {
                return Err(SettingError::UnknownTheme {
                    input: name.to_string(),
                });
            }
            let name = name.to_ascii_lowercase();
            config.theme = Some(name.clone());
            Ok(format!("✅ Set theme to: {name}"))
        }
        _ => Err(SettingError::UnknownKey(key.to_string())),
    }
}

pub fn apply_unset(config: &mut Config, key: &str) -> Result<String, SettingError> {
    match key {
        "base-url" => {
            config.base_url = None;
            Ok("✅ Unset base-url (will use default)".to_string())
        }
        "theme" => {
            config.theme = None;
            Ok("✅ Unset theme".to_string())
        }
        _ => Err(SettingError::UnknownKey(key.to_string())),
    }
}

pub fn run_set(key: &str, value: Option<String>) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;
    match apply_set(&mut config, key, value.as_deref()) {
        Ok(message) => {
            config.save()?;
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            err.print();
            std::process::exit(1);
        }
    }
}

pub fn run_unset(key: &str) -> Result<(), Box<dyn Error>> {
    let mut config = Config::load()?;
    match apply_unset(&mut config, key) {
        Ok(message) => {
            config.save()?;
            println!("{message}");
            Ok(())
        }
        Err(err) => {
            err.print();
            std::process::exit(1);
        }
    }
}
