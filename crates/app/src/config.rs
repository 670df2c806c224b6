//! Runtime configuration read from the environment.

use std::str::FromStr;

/// Environment variable holding the default tracing filter.
const LOG_ENV: &str = "REQNOTE_LOG";
/// Environment variable selecting how `apply` prints the saved record.
const OUTPUT_ENV: &str = "REQNOTE_OUTPUT";

const DEFAULT_LOG_FILTER: &str = "info";

/// Errors raised while reading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable holds a value outside its allowed set.
    #[error("{name} has invalid value {value:?} (expected one of: {expected})")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// Value found.
        value: String,
        /// Accepted values.
        expected: &'static str,
    },
}

/// How a saved record is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Raw request text.
    #[default]
    Text,
    /// The stored JSON document.
    Json,
}

impl FromStr for OutputFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(()),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tracing filter used when `RUST_LOG` is not set.
    pub log_filter: String,
    /// Output format for `apply`.
    pub output: OutputFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            output: OutputFormat::default(),
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Reads configuration through `lookup`, which returns a variable's value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(filter) = lookup(LOG_ENV).filter(|f| !f.trim().is_empty()) {
            config.log_filter = filter;
        }

        if let Some(value) = lookup(OUTPUT_ENV) {
            config.output = value.parse().map_err(|()| ConfigError::InvalidValue {
                name: OUTPUT_ENV,
                value,
                expected: "text, json",
            })?;
        }

        Ok(config)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.log_filter, "info");
        assert_eq!(config.output, OutputFormat::Text);
    }

    #[test]
    fn test_reads_variables() {
        let config = AppConfig::from_lookup(lookup(&[
            ("REQNOTE_LOG", "reqnote_application=debug"),
            ("REQNOTE_OUTPUT", "JSON"),
        ]))
        .unwrap();

        assert_eq!(config.log_filter, "reqnote_application=debug");
        assert_eq!(config.output, OutputFormat::Json);
    }

    #[test]
    fn test_blank_log_filter_keeps_default() {
        let config = AppConfig::from_lookup(lookup(&[("REQNOTE_LOG", "  ")])).unwrap();
        assert_eq!(config.log_filter, "info");
    }

    #[test]
    fn test_invalid_output() {
        let err = AppConfig::from_lookup(lookup(&[("REQNOTE_OUTPUT", "yaml")])).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"REQNOTE_OUTPUT has invalid value "yaml" (expected one of: text, json)"#
        );
    }
}
