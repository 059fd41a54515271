//! Tool configuration for `embedui.toml`.
//!
//! The configuration is deliberately small: default source/target locations
//! for `--auto` and the storage qualifier of the generated constants.
//! It is resolved once at startup and passed down by reference, never read
//! through ambient global state.
//!
//! | Section    | Purpose                                         |
//! |------------|-------------------------------------------------|
//! | `[paths]`  | Default directories used by `--auto`            |
//! | `[header]` | Generated header options (`PROGMEM` qualifier)  |

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::utils::path::normalize_path;

/// Config file looked up in the working directory.
pub const CONFIG_FILE: &str = "embedui.toml";

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error when reading `{0}`")]
    Io(PathBuf, #[source] std::io::Error),

    #[error("config file parsing error")]
    Toml(#[from] toml::de::Error),
}

/// On-disk shape of `embedui.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    paths: PathsSection,
    header: HeaderSection,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct PathsSection {
    source: Option<PathBuf>,
    target: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct HeaderSection {
    progmem: bool,
}

impl Default for HeaderSection {
    fn default() -> Self {
        Self { progmem: true }
    }
}

/// Resolved tool configuration.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    /// Default source directory for `--auto`.
    pub source_dir: PathBuf,
    /// Default target directory for `--auto`.
    pub target_dir: PathBuf,
    /// Emit the `PROGMEM` storage qualifier on generated constants.
    pub progmem: bool,
}

impl Default for ToolConfig {
    fn default() -> Self {
        // Conventional layout: the tool lives next to data/ and src/.
        let root = tool_root();
        Self {
            source_dir: root.join("..").join("data"),
            target_dir: root.join("..").join("src"),
            progmem: true,
        }
    }
}

impl ToolConfig {
    /// Load `embedui.toml` from the working directory, falling back to the
    /// compiled-in defaults when the file is absent.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.is_file() {
            return Ok(Self::default());
        }

        let text =
            fs::read_to_string(path).map_err(|e| ConfigError::Io(path.to_path_buf(), e))?;
        let raw: RawConfig = toml::from_str(&text)?;

        let defaults = Self::default();
        Ok(Self {
            source_dir: raw
                .paths
                .source
                .map_or(defaults.source_dir, |p| normalize_path(&p)),
            target_dir: raw
                .paths
                .target
                .map_or(defaults.target_dir, |p| normalize_path(&p)),
            progmem: raw.header.progmem,
        })
    }
}

/// Directory the compiled-in defaults are anchored to: the executable's
/// directory, falling back to the working directory.
fn tool_root() -> PathBuf {
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_config_file() {
        let dir = TempDir::new().unwrap();
        let config = ToolConfig::load_from(&dir.path().join("missing.toml")).unwrap();

        assert!(config.progmem);
        assert!(config.source_dir.ends_with("data"));
        assert!(config.target_dir.ends_with("src"));
    }

    #[test]
    fn test_load_overrides() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        fs::write(
            &file,
            r#"
[paths]
source = "assets"
target = "firmware"

[header]
progmem = false
"#,
        )
        .unwrap();

        let config = ToolConfig::load_from(&file).unwrap();
        assert!(config.source_dir.ends_with("assets"));
        assert!(config.target_dir.ends_with("firmware"));
        assert!(!config.progmem);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        fs::write(&file, "[header]\nprogmem = false\n").unwrap();

        let config = ToolConfig::load_from(&file).unwrap();
        assert!(!config.progmem);
        assert!(config.source_dir.ends_with("data"));
    }

    #[test]
    fn test_unknown_field_is_rejected() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join(CONFIG_FILE);
        fs::write(&file, "[bogus]\nkey = 1\n").unwrap();

        assert!(matches!(
            ToolConfig::load_from(&file),
            Err(ConfigError::Toml(_))
        ));
    }
}
