//! Configuration management

use crate::speech::dispatcher::{DEFAULT_LOCALE_PREFIX, DEFAULT_VOICE_WAIT};
use crate::speech::DispatchOptions;
use crate::{Result, VocalizeError};
use ini::Ini;
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Settings for the `vocalize` command
///
/// The dispatcher itself reads no configuration; the binary turns this
/// into [`DispatchOptions`].
pub struct Config {
    /// INI configuration storage
    ini: Ini,

    /// Config file path (~/.vocalize.cfg)
    path: PathBuf,
}

impl Config {
    /// Load configuration from ~/.vocalize.cfg, creating it if missing
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    /// Load configuration from `path`, creating it with defaults if missing
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        debug!("Loading config from {:?}", path);

        let ini = if path.exists() {
            Ini::load_from_file(&path)
                .map_err(|e| VocalizeError::IniParse(format!("Failed to load config: {}", e)))?
        } else {
            info!("Config file not found, creating default");
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            let default = Self::default_config();
            default
                .write_to_file(&path)
                .map_err(|e| VocalizeError::Config(format!("Failed to write config: {}", e)))?;
            default
        };

        Ok(Self { ini, path })
    }

    fn config_path() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".vocalize.cfg")
    }

    /// Expose the config file path for display
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn default_config() -> Ini {
        let mut ini = Ini::new();

        ini.with_section(Some("speech"))
            .set("locale_prefix", DEFAULT_LOCALE_PREFIX)
            .set("voice_wait_ms", DEFAULT_VOICE_WAIT.as_millis().to_string());

        ini
    }

    /// Get a string value from config
    pub fn get_string(&self, section: &str, key: &str, default: &str) -> String {
        self.ini
            .get_from(Some(section), key)
            .unwrap_or(default)
            .to_string()
    }

    /// Get an integer value from config
    pub fn get_int(&self, section: &str, key: &str, default: i64) -> i64 {
        self.ini
            .get_from(Some(section), key)
            .and_then(|v| v.trim().parse().ok())
            .unwrap_or(default)
    }

    /// Language tag prefix voices must match
    pub fn locale_prefix(&self) -> String {
        let prefix = self.get_string("speech", "locale_prefix", DEFAULT_LOCALE_PREFIX);
        if prefix.trim().is_empty() {
            DEFAULT_LOCALE_PREFIX.to_string()
        } else {
            prefix
        }
    }

    /// Upper bound on waiting for the engine's voice list
    pub fn voice_wait(&self) -> Duration {
        let default = DEFAULT_VOICE_WAIT.as_millis() as i64;
        u64::try_from(self.get_int("speech", "voice_wait_ms", default))
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_VOICE_WAIT)
    }

    pub fn dispatch_options(&self) -> DispatchOptions {
        DispatchOptions {
            locale_prefix: self.locale_prefix(),
            voice_wait: self.voice_wait(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_from(text: &str) -> Config {
        Config {
            ini: Ini::load_from_str(text).unwrap(),
            path: PathBuf::from("test.cfg"),
        }
    }

    #[test]
    fn test_defaults_when_keys_missing() {
        let config = config_from("[speech]\n");
        assert_eq!(config.dispatch_options(), DispatchOptions::default());
    }

    #[test]
    fn test_custom_values() {
        let config = config_from("[speech]\nlocale_prefix = en-GB\nvoice_wait_ms = 250\n");
        assert_eq!(config.locale_prefix(), "en-GB");
        assert_eq!(config.voice_wait(), Duration::from_millis(250));
    }

    #[test]
    fn test_invalid_values_fall_back() {
        let config = config_from("[speech]\nlocale_prefix =\nvoice_wait_ms = -5\n");
        assert_eq!(config.locale_prefix(), "en-");
        assert_eq!(config.voice_wait(), Duration::from_millis(100));

        let config = config_from("[speech]\nvoice_wait_ms = soon\n");
        assert_eq!(config.voice_wait(), Duration::from_millis(100));
    }
}
