//! Configuration for nui-context.
//!
//! Configuration is loaded from `nuictx.toml` in the platform config directory
//! (`~/.config/nui-context/nuictx.toml` on Linux) and covers the demo window,
//! logging, popover behaviour, theming and the icon font stylesheet.

use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Result;
use etcetera::BaseStrategy;
use serde::Deserialize;

use crate::model::DEFAULT_COLOR_SCHEME;

/// Name of the application directory inside the platform config dir.
const APP_DIR: &str = "nui-context";
/// Configuration file name.
const CONFIG_FILE: &str = "nuictx.toml";

/// Top-level configuration loaded from `nuictx.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct NuiConfig {
    pub window: WindowConfig,
    pub logging: LoggingConfig,
    pub popover: PopoverConfig,
    pub theme: ThemeConfig,
    pub icons: IconConfig,
}

/// Window configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub log_file: Option<PathBuf>,
    pub level: String,
    pub suppressed_patterns: Vec<String>,
}

/// Hover popover behaviour. Also provided to components as Dioxus context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PopoverConfig {
    /// Delay before the popover opens, in milliseconds.
    pub open_delay_ms: u64,
    /// Maximum popover width in pixels.
    pub max_width: u32,
}

/// Theme configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    /// Progress bar color used when an option sets no `colorScheme`.
    pub color_scheme: String,
}

/// Icon font configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    /// Stylesheet URL for the icon font, injected into the page head.
    pub stylesheet: Option<String>,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "nui-context".to_string(),
            width: 420.0,
            height: 640.0,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            log_file: Some(std::env::temp_dir().join("nui-context.log")),
            level: "info".to_string(),
            suppressed_patterns: vec![
                "SelectionDidChange".to_string(),
                "Dispatched unknown event".to_string(),
                "mousemove".to_string(),
                "mouseenter".to_string(),
                "mouseleave".to_string(),
                "pointermove".to_string(),
            ],
        }
    }
}

impl Default for PopoverConfig {
    fn default() -> Self {
        Self {
            open_delay_ms: 200,
            max_width: 256,
        }
    }
}

impl PopoverConfig {
    #[must_use]
    pub fn open_delay(&self) -> Duration {
        Duration::from_millis(self.open_delay_ms)
    }
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            color_scheme: DEFAULT_COLOR_SCHEME.to_string(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            stylesheet: Some(
                "https://cdnjs.cloudflare.com/ajax/libs/font-awesome/6.5.2/css/all.min.css".to_string(),
            ),
        }
    }
}

impl NuiConfig {
    /// Path of the default configuration file.
    pub fn default_path() -> Result<PathBuf> {
        let strategy = etcetera::choose_base_strategy()?;
        Ok(strategy.config_dir().join(APP_DIR).join(CONFIG_FILE))
    }

    /// Load configuration from the default location.
    ///
    /// Falls back to defaults if the file doesn't exist.
    /// Returns an error only if the file exists but is malformed.
    pub fn load_default() -> Result<Self> {
        let config_path = Self::default_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = toml::from_str::<NuiConfig>(&content)?;
        Ok(config)
    }

    /// Set the window title.
    #[must_use]
    pub fn with_window_title(mut self, title: impl Into<String>) -> Self {
        self.window.title = title.into();
        self
    }

    /// Set the window dimensions.
    #[must_use]
    pub fn with_window_size(mut self, width: f64, height: f64) -> Self {
        self.window.width = width;
        self.window.height = height;
        self
    }

    /// Set the popover open delay.
    #[must_use]
    pub fn with_open_delay(mut self, delay: Duration) -> Self {
        self.popover.open_delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Set the default progress color token.
    #[must_use]
    pub fn with_color_scheme(mut self, token: impl Into<String>) -> Self {
        self.theme.color_scheme = token.into();
        self
    }

    /// Set the log file path.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.logging.log_file = Some(path.into());
        self
    }

    /// Set the log level (e.g., "info", "debug", "warn").
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.logging.level = level.into();
        self
    }

    /// Markup injected into the page head: the icon font stylesheet, if any.
    #[must_use]
    pub fn head_links(&self) -> String {
        self.icons
            .stylesheet
            .as_deref()
            .map(|href| format!("<link rel=\"stylesheet\" href=\"{href}\" />"))
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = NuiConfig::default();
        assert_eq!(config.window.title, "nui-context");
        assert!((config.window.width - 420.0).abs() < f64::EPSILON);
        assert_eq!(config.popover.open_delay_ms, 200);
        assert_eq!(config.popover.max_width, 256);
        assert_eq!(config.theme.color_scheme, "dark.3");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn builder_methods_override_defaults() {
        let config = NuiConfig::default()
            .with_window_title("Radial")
            .with_window_size(800.0, 600.0)
            .with_open_delay(Duration::from_millis(50))
            .with_color_scheme("violet.4")
            .with_log_level("debug");

        assert_eq!(config.window.title, "Radial");
        assert!((config.window.height - 600.0).abs() < f64::EPSILON);
        assert_eq!(config.popover.open_delay(), Duration::from_millis(50));
        assert_eq!(config.theme.color_scheme, "violet.4");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn deserialize_partial_config() {
        let toml_str = r#"
[popover]
open_delay_ms = 350

[theme]
color_scheme = "blue"
"#;
        let config = toml::from_str::<NuiConfig>(toml_str).expect("should deserialize");
        assert_eq!(config.popover.open_delay_ms, 350);
        // Width should be default
        assert_eq!(config.popover.max_width, 256);
        assert_eq!(config.theme.color_scheme, "blue");
        assert_eq!(config.window.title, "nui-context");
    }

    #[test]
    fn head_links_include_stylesheet() {
        let config = NuiConfig::default();
        assert!(config.head_links().contains("font-awesome"));

        let mut bare = NuiConfig::default();
        bare.icons.stylesheet = None;
        assert_eq!(bare.head_links(), "");
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[window]\ntitle = \"from file\"").expect("write config");

        let config = NuiConfig::load_from(file.path()).expect("config should load");
        assert_eq!(config.window.title, "from file");
    }

    #[test]
    fn load_from_malformed_file_is_error() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[popover\nopen_delay_ms = ").expect("write config");

        assert!(NuiConfig::load_from(file.path()).is_err());
    }

    #[test]
    fn load_from_nonexistent_path_returns_error() {
        let result = NuiConfig::load_from(Path::new("/nonexistent/nuictx.toml"));
        assert!(result.is_err());
    }
}
