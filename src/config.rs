//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/orgtree/orgtree.toml`
//! 3. Explicit config file (`--config`)
//! 4. Environment variables: `ORGTREE_*` prefix

use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;

/// When to emit ANSI styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color when the terminal supports it (respects NO_COLOR, CLICOLOR)
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    pub fn enabled(self) -> bool {
        match self {
            ColorMode::Auto => colored::control::SHOULD_COLORIZE.should_colorize(),
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!("invalid color mode: {other} (expected auto, always, never)")),
        }
    }
}

/// Raw settings for intermediate parsing (Option to detect "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub data_file: Option<PathBuf>,
    pub color: Option<ColorMode>,
    pub ascii_tree: Option<bool>,
}

/// Unified configuration for orgtree.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Organisation document to report on (default: built-in sample)
    pub data_file: Option<PathBuf>,
    /// ANSI styling of labels and tree glyphs
    pub color: ColorMode,
    /// Draw the tree with ASCII instead of box-drawing characters
    pub ascii_tree: bool,
}

/// Get the XDG config directory for orgtree.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "orgtree").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("orgtree.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; unknown variables leave the input as is.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            data_file: overlay.data_file.clone().or_else(|| self.data_file.clone()),
            color: overlay.color.unwrap_or(self.color),
            ascii_tree: overlay.ascii_tree.unwrap_or(self.ascii_tree),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(data_file) = &self.data_file {
            self.data_file = Some(PathBuf::from(expand_env_vars(
                data_file.to_string_lossy().as_ref(),
            )));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file, must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                current = current.merge_with(&load_raw_settings(&global_path)?);
            }
        }

        if let Some(path) = config_file {
            current = current.merge_with(&load_raw_settings(path)?);
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply ORGTREE_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("ORGTREE")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("data_file") {
            settings.data_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("color") {
            settings.color = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_bool("ascii_tree") {
            settings.ascii_tree = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# orgtree configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/orgtree/orgtree.toml
#   File:   --config <file>
#   Env:    ORGTREE_* environment variables (ORGTREE_DATA_FILE, ORGTREE_COLOR, ORGTREE_ASCII_TREE)

# Organisation document (TOML); the built-in sample is used when unset
# data_file = "~/org/company.toml"

# auto | always | never
# color = "auto"

# Draw the tree with |-- and `-- instead of box-drawing characters
# ascii_tree = false
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn given_defaults_when_created_then_uses_sample_and_auto_color() {
        let settings = Settings::default();
        assert_eq!(settings.data_file, None);
        assert_eq!(settings.color, ColorMode::Auto);
        assert!(!settings.ascii_tree);
    }

    #[test]
    fn given_overlay_when_merging_then_specified_values_win() {
        let base = Settings {
            data_file: Some(PathBuf::from("/base.toml")),
            color: ColorMode::Always,
            ascii_tree: false,
        };
        let overlay = RawSettings {
            data_file: None,
            color: Some(ColorMode::Never),
            ascii_tree: Some(true),
        };

        let result = base.merge_with(&overlay);

        assert_eq!(result.data_file, Some(PathBuf::from("/base.toml")));
        assert_eq!(result.color, ColorMode::Never);
        assert!(result.ascii_tree);
    }

    #[test]
    fn given_tilde_in_data_file_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            data_file: Some(PathBuf::from("~/org.toml")),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        let path = settings.data_file.expect("data_file set");
        assert!(path.to_string_lossy().starts_with(&home));
    }

    #[rstest]
    #[case("auto", ColorMode::Auto)]
    #[case("ALWAYS", ColorMode::Always)]
    #[case(" never ", ColorMode::Never)]
    fn given_color_string_when_parsing_then_maps_mode(#[case] input: &str, #[case] expected: ColorMode) {
        assert_eq!(input.parse::<ColorMode>().unwrap(), expected);
    }

    #[test]
    fn given_invalid_color_string_when_parsing_then_fails() {
        assert!("sometimes".parse::<ColorMode>().is_err());
    }

    #[test]
    fn given_template_when_parsed_then_is_valid_toml() {
        let raw: RawSettings = toml::from_str(&Settings::template()).expect("template parses");
        assert!(raw.data_file.is_none());
    }

    #[test]
    fn given_settings_when_serialized_then_round_trips() {
        let settings = Settings {
            data_file: Some(PathBuf::from("/org.toml")),
            color: ColorMode::Never,
            ascii_tree: true,
        };
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }
}
