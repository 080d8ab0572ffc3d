//! Configuration for the task list shell.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::theme::{ThemeName, UnknownTheme};
use std::env;
use tasklist_runtime::StoreConfig;
use thiserror::Error;

/// Environment variable selecting the colour theme
pub const THEME_VAR: &str = "TASKLIST_THEME";

/// Environment variable with the default log filter
pub const LOG_LEVEL_VAR: &str = "TASKLIST_LOG_LEVEL";

/// Environment variable bounding `Effect::Send` feedback chains
pub const MAX_FEEDBACK_DEPTH_VAR: &str = "TASKLIST_MAX_FEEDBACK_DEPTH";

/// Errors raised while loading configuration
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// `TASKLIST_THEME` named a theme that does not exist
    #[error("invalid TASKLIST_THEME: {0}")]
    UnknownTheme(#[from] UnknownTheme),
}

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Colour theme for the view
    pub theme: ThemeName,
    /// Log filter used when `RUST_LOG` is not set (trace, debug, info, warn, error)
    pub log_level: String,
    /// Maximum depth of feedback actions per dispatched action
    pub max_feedback_depth: usize,
}

impl Config {
    /// Loads configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownTheme`] if `TASKLIST_THEME` is set to an
    /// unknown theme. Unparsable numbers fall back to their defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, which maps a variable name to its value
    ///
    /// # Errors
    ///
    /// See [`Config::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let theme = match lookup(THEME_VAR) {
            Some(name) => name.parse::<ThemeName>()?,
            None => ThemeName::default(),
        };

        Ok(Self {
            theme,
            log_level: lookup(LOG_LEVEL_VAR).unwrap_or_else(|| "info".to_string()),
            max_feedback_depth: lookup(MAX_FEEDBACK_DEPTH_VAR)
                .and_then(|s| s.parse().ok())
                .unwrap_or(StoreConfig::DEFAULT_MAX_FEEDBACK_DEPTH),
        })
    }

    /// Store configuration derived from this configuration
    #[must_use]
    pub const fn store_config(&self) -> StoreConfig {
        StoreConfig::new(self.max_feedback_depth)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: ThemeName::default(),
            log_level: "info".to_string(),
            max_feedback_depth: StoreConfig::DEFAULT_MAX_FEEDBACK_DEPTH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_unset() {
        assert_eq!(Config::from_lookup(lookup(&[])), Ok(Config::default()));
    }

    #[test]
    fn reads_all_variables() {
        let config = Config::from_lookup(lookup(&[
            (THEME_VAR, "slate"),
            (LOG_LEVEL_VAR, "debug"),
            (MAX_FEEDBACK_DEPTH_VAR, "4"),
        ]));

        assert_eq!(
            config,
            Ok(Config {
                theme: ThemeName::Slate,
                log_level: "debug".to_string(),
                max_feedback_depth: 4,
            })
        );
    }

    #[test]
    fn bad_depth_falls_back_to_default() {
        let config = Config::from_lookup(lookup(&[(MAX_FEEDBACK_DEPTH_VAR, "lots")]));

        assert_eq!(
            config.map(|c| c.store_config()),
            Ok(StoreConfig::default())
        );
    }

    #[test]
    fn unknown_theme_is_an_error() {
        let config = Config::from_lookup(lookup(&[(THEME_VAR, "neon")]));

        assert_eq!(
            config,
            Err(ConfigError::UnknownTheme(UnknownTheme("neon".to_string())))
        );
    }
}
