//! Vista configuration file handling
//!
//! `vista.toml` is optional. When present it may hold a `[window]` table and
//! a top-level `platform` override:
//!
//! ```toml
//! platform = "ios"
//!
//! [window]
//! title = "Cross Platform App"
//! width = 375
//! height = 812
//! resizable = true
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use vista_platform::{PlatformOs, WindowConfig};

/// Default config file name, looked up in the working directory
pub const CONFIG_FILE: &str = "vista.toml";

/// Top-level configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VistaConfig {
    /// Platform name to display instead of the detected one
    #[serde(default)]
    pub platform: Option<PlatformOs>,
    #[serde(default)]
    pub window: WindowSection,
}

/// `[window]` table
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WindowSection {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub resizable: bool,
}

impl Default for WindowSection {
    fn default() -> Self {
        let defaults = WindowConfig::default();
        Self {
            title: defaults.title,
            width: defaults.width,
            height: defaults.height,
            resizable: defaults.resizable,
        }
    }
}

impl VistaConfig {
    /// Load configuration from an explicit path, which must exist
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;

        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    /// Load `vista.toml` from a directory, falling back to defaults if absent
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            tracing::debug!("no {} in {}, using defaults", CONFIG_FILE, dir.display());
            return Ok(Self::default());
        }
        Self::load(&path)
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self> {
        let config: VistaConfig = toml::from_str(content)?;
        if config.window.width == 0 || config.window.height == 0 {
            anyhow::bail!(
                "window size must be non-zero, got {}x{}",
                config.window.width,
                config.window.height
            );
        }
        Ok(config)
    }

    /// Window configuration for the desktop backend
    pub fn window_config(&self) -> WindowConfig {
        WindowConfig::new(self.window.title.clone())
            .size(self.window.width, self.window.height)
            .resizable(self.window.resizable)
    }

    /// Platform to display: the override if set, else the compiled target
    pub fn platform(&self) -> PlatformOs {
        self.platform.unwrap_or_else(PlatformOs::current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{tempdir, NamedTempFile};

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = VistaConfig::parse("").unwrap();
        assert_eq!(config.window_config(), WindowConfig::default());
        assert_eq!(config.platform(), PlatformOs::current());
    }

    #[test]
    fn test_partial_window_table() {
        let config = VistaConfig::parse(
            r#"
            platform = "android"

            [window]
            width = 412
            height = 915
            "#,
        )
        .unwrap();

        assert_eq!(config.platform(), PlatformOs::Android);
        let window = config.window_config();
        assert_eq!((window.width, window.height), (412, 915));
        assert_eq!(window.title, WindowConfig::default().title);
        assert!(window.resizable);
    }

    #[test]
    fn test_rejects_unknown_platform() {
        assert!(VistaConfig::parse(r#"platform = "amiga""#).is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(VistaConfig::parse("[window]\ncolour = \"blue\"").is_err());
    }

    #[test]
    fn test_rejects_zero_size() {
        assert!(VistaConfig::parse("[window]\nwidth = 0").is_err());
    }

    #[test]
    fn test_load_from_dir_without_file() {
        let dir = tempdir().unwrap();
        let config = VistaConfig::load_from_dir(dir.path()).unwrap();
        assert!(config.platform.is_none());
    }

    #[test]
    fn test_load_from_dir_with_file() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE), "[window]\ntitle = \"Demo\"\n").unwrap();
        let config = VistaConfig::load_from_dir(dir.path()).unwrap();
        assert_eq!(config.window.title, "Demo");
    }

    #[test]
    fn test_load_reports_path_on_parse_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "[window").unwrap();
        let err = VistaConfig::load(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse"));
    }

    #[test]
    fn test_load_missing_explicit_path() {
        let dir = tempdir().unwrap();
        let err = VistaConfig::load(&dir.path().join("missing.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read"));
    }
}
