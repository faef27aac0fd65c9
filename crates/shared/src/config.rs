//! Application configuration management.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Report presentation defaults applied before caller overrides.
    #[serde(default)]
    pub report: ReportSettings,
    /// Output configuration.
    #[serde(default)]
    pub output: OutputConfig,
    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Report presentation settings.
///
/// Every field is optional; unset fields keep the engine's built-in
/// defaults. Keys are snake_case so they survive environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReportSettings {
    /// Acting role (`client`, `provider`, `admin`).
    pub role: Option<String>,
    /// Accent color.
    pub primary_color: Option<String>,
    /// Company name shown in the header.
    pub company_name: Option<String>,
    /// Compact density tier.
    pub compact: Option<bool>,
    /// `@page` size.
    pub page_size: Option<String>,
    /// `@page` margins.
    pub margins: Option<String>,
    /// Currency symbol used for money figures.
    pub currency_symbol: Option<String>,
    /// IANA timezone used for timestamps.
    pub timezone: Option<String>,
    /// Per-section visibility.
    #[serde(default)]
    pub sections: BTreeMap<String, bool>,
}

/// Output configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OutputConfig {
    /// Directory receiving rendered documents. Standard output when unset.
    pub dir: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter directive, used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON log lines instead of human-readable ones.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "hireme=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_with_file(None)
    }

    /// Loads configuration, layering an explicit file between the mode
    /// files and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the explicit file is missing or any source is
    /// malformed.
    pub fn load_with_file(path: Option<&Path>) -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let mut builder = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false));

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let config = builder
            .add_source(
                config::Environment::with_prefix("HIREME")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults_without_sources() {
        temp_env::with_vars_unset(
            ["HIREME__REPORT__PRIMARY_COLOR", "HIREME__LOGGING__FILTER"],
            || {
                let config = AppConfig::load().unwrap();
                assert!(config.report.primary_color.is_none());
                assert!(config.report.sections.is_empty());
                assert!(config.output.dir.is_none());
                assert_eq!(config.logging.filter, "hireme=info");
                assert!(!config.logging.json);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("HIREME__REPORT__PRIMARY_COLOR", Some("#ff0000")),
                ("HIREME__REPORT__COMPACT", Some("false")),
                ("HIREME__REPORT__SECTIONS__TIMELINE", Some("false")),
                ("HIREME__OUTPUT__DIR", Some("/tmp/reports")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.report.primary_color.as_deref(), Some("#ff0000"));
                assert_eq!(config.report.compact, Some(false));
                assert_eq!(config.report.sections.get("timeline"), Some(&false));
                assert_eq!(config.output.dir, Some(PathBuf::from("/tmp/reports")));
            },
        );
    }

    #[test]
    fn test_explicit_file_is_layered() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[report]\ncompany_name = \"Acme Repairs\"\npage_size = \"Letter\"\n\n[report.sections]\nprint_buttons = false\n"
        )
        .unwrap();

        temp_env::with_vars_unset(["HIREME__REPORT__COMPANY_NAME"], || {
            let config = AppConfig::load_with_file(Some(file.path())).unwrap();
            assert_eq!(config.report.company_name.as_deref(), Some("Acme Repairs"));
            assert_eq!(config.report.page_size.as_deref(), Some("Letter"));
            assert_eq!(config.report.sections.get("print_buttons"), Some(&false));
        });
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let result = AppConfig::load_with_file(Some(Path::new("/nonexistent/hireme.toml")));
        assert!(result.is_err());
    }
}
