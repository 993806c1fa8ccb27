//! FILENAME: app/src/config.rs
// PURPOSE: Runtime configuration for the calculator bridge.
// CONTEXT: Loaded once at startup from an optional JSON file, then
//          overridden by environment variables. Only display concerns are
//          configurable; the engine's behavior is fixed.

use std::path::{Path, PathBuf};

use engine::GroupingStyle;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Environment variable naming the config file.
pub const CONFIG_ENV: &str = "CALCULATOR_CONFIG";
/// Environment variable overriding the display locale.
pub const LOCALE_ENV: &str = "CALCULATOR_LOCALE";
/// Environment variable overriding the log file path.
pub const LOG_ENV: &str = "CALCULATOR_LOG";

pub const FALLBACK_LOCALE: &str = "en-US";
/// Locale value that asks for the operating system's locale.
pub const SYSTEM_LOCALE: &str = "system";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppConfig {
    /// BCP-47 tag used for digit grouping, or "system" to detect it.
    /// None = en-US.
    pub locale: Option<String>,
    /// Unified log file. None = temp dir default.
    pub log_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        serde_json::from_str(json).map_err(|e| AppError::Config(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::Config(format!("Failed to read {:?}: {}", path, e)))?;
        Self::from_json(&content)
    }

    /// Load from `path` (or the file named by CALCULATOR_CONFIG), then apply
    /// environment overrides. No file at all yields the defaults.
    pub fn load(path: Option<PathBuf>) -> Result<Self, AppError> {
        let path = path.or_else(|| std::env::var_os(CONFIG_ENV).map(PathBuf::from));
        let config = match path {
            Some(path) => Self::from_file(&path)?,
            None => Self::default(),
        };

        Ok(config.with_overrides(
            std::env::var(LOCALE_ENV).ok(),
            std::env::var_os(LOG_ENV).map(PathBuf::from),
        ))
    }

    /// Replace fields with any override that is set and non-empty.
    pub fn with_overrides(mut self, locale: Option<String>, log_path: Option<PathBuf>) -> Self {
        if let Some(locale) = locale.filter(|l| !l.trim().is_empty()) {
            self.locale = Some(locale);
        }
        if let Some(log_path) = log_path.filter(|p| !p.as_os_str().is_empty()) {
            self.log_path = Some(log_path);
        }
        self
    }

    /// Configured locale; en-US when unset. "system" is detected, falling
    /// back to en-US when the system reports nothing.
    pub fn resolved_locale(&self) -> String {
        match self.locale.as_deref() {
            Some(locale) if locale.eq_ignore_ascii_case(SYSTEM_LOCALE) => {
                sys_locale::get_locale().unwrap_or_else(|| FALLBACK_LOCALE.to_string())
            }
            Some(locale) => locale.to_string(),
            None => FALLBACK_LOCALE.to_string(),
        }
    }

    pub fn grouping(&self) -> GroupingStyle {
        GroupingStyle::for_locale(&self.resolved_locale())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_from_empty_object() {
        assert_eq!(AppConfig::from_json("{}").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_parse_camel_case_fields() {
        let config = AppConfig::from_json(r#"{"locale":"de-DE","logPath":"/tmp/calc.log"}"#).unwrap();
        assert_eq!(config.locale.as_deref(), Some("de-DE"));
        assert_eq!(config.log_path, Some(PathBuf::from("/tmp/calc.log")));
    }

    #[test]
    fn test_invalid_json_is_config_error() {
        assert!(matches!(AppConfig::from_json("{locale"), Err(AppError::Config(_))));
    }

    #[test]
    fn test_overrides_replace_set_values_only() {
        let base = AppConfig {
            locale: Some("fr-FR".to_string()),
            log_path: Some(PathBuf::from("a.log")),
        };
        let merged = base.clone().with_overrides(Some("sv-SE".to_string()), None);
        assert_eq!(merged.locale.as_deref(), Some("sv-SE"));
        assert_eq!(merged.log_path, Some(PathBuf::from("a.log")));

        let unchanged = base.clone().with_overrides(Some("  ".to_string()), Some(PathBuf::new()));
        assert_eq!(unchanged, base);
    }

    #[test]
    fn test_configured_locale_wins() {
        let config = AppConfig {
            locale: Some("fr-FR".to_string()),
            log_path: None,
        };
        assert_eq!(config.resolved_locale(), "fr-FR");
        assert_eq!(config.grouping().separator, "\u{202F}");
    }

    #[test]
    fn test_unconfigured_locale_is_en_us() {
        let config = AppConfig::default();
        assert_eq!(config.resolved_locale(), FALLBACK_LOCALE);
        assert_eq!(config.grouping(), GroupingStyle::en_us());
        assert_eq!(engine::format_operand_with("1234", &config.grouping()), "1,234");
    }

    #[test]
    fn test_system_locale_never_groups_with_dot() {
        let config = AppConfig {
            locale: Some(SYSTEM_LOCALE.to_string()),
            log_path: None,
        };
        assert!(!config.resolved_locale().is_empty());
        assert_ne!(config.grouping().separator, ".");
    }
}
