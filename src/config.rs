//! Contains everything related to configuration.
//!
//! At a minimum, [`Configuration::default()`] is sufficient for initializing the
//! editor. However, the normal process is to apply an optional configuration file on
//! top of the defaults.
//!
//! External configuration files are expected to be formatted according to the
//! [TOML specification](https://toml.io).
//!
//! The default method of loading an external configuration file via
//! [`Configuration::load()`] will try to locate files in the following locations in
//! order of precedence:
//!
//! * `$HOME/.redrc`
//! * `$HOME/.red/redrc`
//! * `$HOME/.config/red/redrc`

use crate::error::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// A configuration representing all aspects of the editing experience.
#[derive(Debug, Default)]
pub struct Configuration {
    pub settings: Settings,
}

#[derive(Debug, Eq, PartialEq)]
pub struct Settings {
    /// Paint into the alternate screen of the terminal, leaving it upon exit.
    pub alt_screen: bool,

    /// Erase the display when the editor is interrupted.
    pub clear_on_exit: bool,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalConfiguration {
    settings: Option<ExternalSettings>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct ExternalSettings {
    #[serde(rename = "alt-screen")]
    alt_screen: Option<bool>,

    #[serde(rename = "clear-on-exit")]
    clear_on_exit: Option<bool>,
}

impl Settings {
    /// Applies the external settings `ext` on top of `self`.
    fn apply(&mut self, ext: Option<ExternalSettings>) {
        if let Some(ext) = ext {
            self.alt_screen = ext.alt_screen.unwrap_or(self.alt_screen);
            self.clear_on_exit = ext.clear_on_exit.unwrap_or(self.clear_on_exit);
        }
    }
}

impl Default for Settings {
    fn default() -> Settings {
        Settings {
            alt_screen: false,
            clear_on_exit: true,
        }
    }
}

impl Configuration {
    /// A collection of resource files to try loading in order of precedence.
    const TRY_FILES: [&str; 3] = [".redrc", ".red/redrc", ".config/red/redrc"];

    /// Returns a configuration that is formed by attempting to load a resource file
    /// from well-known locations, or the default configuration if none exist.
    pub fn load() -> Result<Configuration> {
        if let Some(home) = env::var_os("HOME").map(PathBuf::from) {
            for try_path in Self::TRY_FILES {
                let path = home.join(try_path);
                if path.exists() {
                    return Self::load_file(&path);
                }
            }
        }
        Ok(Configuration::default())
    }

    /// Returns a configuration loaded from the resource file at `path`.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Configuration> {
        let path = path.as_ref();
        let name = path.display().to_string();
        let content = fs::read_to_string(path).map_err(|e| Error::io(&name, e))?;
        Self::parse(&name, &content)
    }

    /// Returns a configuration parsed from `content`, where `origin` names its source
    /// for the purpose of reporting errors.
    pub fn parse(origin: &str, content: &str) -> Result<Configuration> {
        let ext = toml::from_str::<ExternalConfiguration>(content)
            .map_err(|e| Error::configuration(origin, &e))?;
        let mut config = Configuration::default();
        config.apply(ext);
        Ok(config)
    }

    /// Applies the external configuration `ext` on top of `self`.
    fn apply(&mut self, ext: ExternalConfiguration) {
        self.settings.apply(ext.settings);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings() {
        let config = Configuration::default();
        assert!(!config.settings.alt_screen);
        assert!(config.settings.clear_on_exit);
    }

    #[test]
    fn parse_empty_keeps_defaults() {
        let config = Configuration::parse("test", "").unwrap();
        assert_eq!(config.settings, Settings::default());
    }

    #[test]
    fn parse_settings() {
        let content = r#"
            [settings]
            alt-screen = true
            clear-on-exit = false
        "#;
        let config = Configuration::parse("test", content).unwrap();
        assert!(config.settings.alt_screen);
        assert!(!config.settings.clear_on_exit);
    }

    #[test]
    fn parse_partial_settings() {
        let content = "[settings]\nalt-screen = true\n";
        let config = Configuration::parse("test", content).unwrap();
        assert!(config.settings.alt_screen);
        assert!(config.settings.clear_on_exit);
    }

    #[test]
    fn reject_unknown_fields() {
        let content = "[settings]\ntab-size = 4\n";
        assert!(matches!(
            Configuration::parse("test", content),
            Err(Error::Configuration { path, .. }) if path == "test"
        ));
        assert!(matches!(
            Configuration::parse("test", "[bindings]\n"),
            Err(Error::Configuration { .. })
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("redrc");
        fs::write(&path, "[settings]\nclear-on-exit = false\n").unwrap();
        let config = Configuration::load_file(&path).unwrap();
        assert!(!config.settings.clear_on_exit);
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing");
        assert!(matches!(
            Configuration::load_file(&path),
            Err(Error::Io { .. })
        ));
    }
}
