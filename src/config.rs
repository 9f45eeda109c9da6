//! A description of the optional configuration file.
//!
//! The sprites themselves cannot be configured, only how the program reports what it is doing.

use std::path::Path;

use anyhow::{Context, Result};

/// A description of the configuration file
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default)]
pub struct Config {
    /// A flexi_logger log specification, e.g. "info" or "warn, digit_sprites::sprite_table=trace"
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    fn load(path: &Path) -> Result<Self> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        toml::from_str(&source)
            .with_context(|| format!("Failed to parse config file {}", path.display()))
    }

    /// Falls back to the default config if the file can't be read or parsed
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        Self::load(path.as_ref()).unwrap_or_else(|err| {
            log::error!("{:#}", err);
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn log_level_is_read() {
        let config: Config = toml::from_str("log_level = \"trace\"\n").unwrap();
        assert_eq!(config.log_level, "trace");
    }

    #[test]
    fn empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn missing_file_gives_defaults() {
        let config = Config::from_file("this/config/file/does/not/exist.toml");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn config_file_is_read() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"log_level = \"debug\"\n").unwrap();

        assert_eq!(Config::from_file(file.path()).log_level, "debug");
    }

    #[test]
    fn invalid_file_gives_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"log_level = [\"unterminated\"\n").unwrap();

        assert_eq!(Config::from_file(file.path()), Config::default());
    }
}
