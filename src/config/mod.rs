#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::Validate;
use std::collections::HashMap;
use std::time::Duration;
use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

/// Effective settings after merging the config file with command-line overrides.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub timeout_seconds: u64,
    pub headers: HashMap<String, String>,
    pub literal_search: bool,
    pub verbose: bool,
    pub json_logs: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from(TomlConfig::default())
    }
}

impl From<TomlConfig> for Settings {
    fn from(config: TomlConfig) -> Self {
        let timeout_seconds = config.timeout_seconds();
        Self {
            base_url: config.api.base_url,
            timeout_seconds,
            headers: config.api.headers,
            literal_search: config.search.literal,
            verbose: config.logging.verbose,
            json_logs: config.logging.json,
        }
    }
}

#[cfg(feature = "cli")]
impl Settings {
    /// Reads the config file named on the command line, if any, applies the
    /// command-line values on top of it and validates the result.
    pub fn resolve(cli: &CliConfig) -> Result<Self> {
        let mut config = match &cli.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(base_url) = &cli.base_url {
            config.api.base_url = base_url.clone();
        }
        if let Some(timeout_seconds) = cli.timeout_seconds {
            config.api.timeout_seconds = Some(timeout_seconds);
        }
        config.search.literal |= cli.literal_search;
        config.logging.verbose |= cli.verbose;
        config.logging.json |= cli.json_logs;

        config.validate()?;
        Ok(Settings::from(config))
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn literal_search(&self) -> bool {
        self.literal_search
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use crate::utils::error::ContactBookError;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults_without_config_file() {
        let cli = CliConfig::parse_from(["contact-book", "list"]);
        let settings = Settings::resolve(&cli).unwrap();
        assert_eq!(settings.base_url, "http://localhost:3000");
        assert_eq!(settings.timeout(), Duration::from_secs(10));
        assert!(!settings.literal_search);
    }

    #[test]
    fn test_cli_overrides_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(
                br#"
[api]
base_url = "http://file.example:9000"
timeout_seconds = 30

[search]
literal = true
"#,
            )
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from([
            "contact-book",
            "--config",
            path.as_str(),
            "--base-url",
            "http://cli.example:7000",
            "search",
            "al",
        ]);
        let settings = Settings::resolve(&cli).unwrap();

        assert_eq!(settings.base_url, "http://cli.example:7000");
        assert_eq!(settings.timeout_seconds, 30);
        assert!(settings.literal_search);
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        let cli = CliConfig::parse_from(["contact-book", "--timeout-seconds", "0", "tags"]);
        assert!(Settings::resolve(&cli).is_err());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let cli = CliConfig::parse_from(["contact-book", "--base-url", "ftp://contacts", "list"]);
        let err = Settings::resolve(&cli).unwrap_err();
        assert!(matches!(
            err,
            ContactBookError::InvalidConfigValueError { ref field, .. } if field == "api.base_url"
        ));
    }

    #[test]
    fn test_blank_header_name_in_file_is_rejected() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[api.headers]\n\" \" = \"x\"\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let cli = CliConfig::parse_from(["contact-book", "--config", path.as_str(), "list"]);
        assert!(Settings::resolve(&cli).is_err());
    }
}
