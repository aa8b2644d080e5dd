use xdg::BaseDirectories;
use serde::Deserialize;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default base URL of the settings service
pub const DEFAULT_SETTINGS_URL: &str = "http://localhost:7070";

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    pub log_level: String,
    pub log_file: String,
    /// Base URL of the settings service (without the /api/app/settings path)
    pub settings_url: String,
    pub request_timeout_secs: u64,
    pub notification_display_ms: u64,
    pub notification_exit_ms: u64,
    pub initial_volume: u8,
    pub playlist: Vec<TrackConfig>,
}

/// A playlist entry as written in the config file
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct TrackConfig {
    pub title: String,
    pub artist: String,
    pub source: String,
    pub duration: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: "info".to_string(),
            log_file: "/dev/null".to_string(),
            settings_url: DEFAULT_SETTINGS_URL.to_string(),
            request_timeout_secs: 5,
            notification_display_ms: 3000,
            notification_exit_ms: 400,
            initial_volume: 70,
            playlist: default_playlist(),
        }
    }
}

impl Default for TrackConfig {
    fn default() -> Self {
        TrackConfig {
            title: "Unknown".to_string(),
            artist: "Unknown".to_string(),
            source: String::new(),
            duration: "0:00".to_string(),
        }
    }
}

impl Config {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    pub fn notification_display(&self) -> Duration {
        Duration::from_millis(self.notification_display_ms)
    }

    pub fn notification_exit(&self) -> Duration {
        Duration::from_millis(self.notification_exit_ms)
    }
}

/// Placeholder playlist shown until real tracks are configured
fn default_playlist() -> Vec<TrackConfig> {
    ["3:45", "4:20", "3:15"]
        .iter()
        .map(|duration| TrackConfig {
            duration: duration.to_string(),
            ..TrackConfig::default()
        })
        .collect()
}

pub fn get_config_path() -> Option<PathBuf> {
    let pgm = env!("CARGO_PKG_NAME");
    let xdg_dirs = BaseDirectories::with_prefix(pgm);
    let config_home = xdg_dirs.get_config_home()?;
    Some(config_home.join("config.toml"))
}

/// Read the config file; a missing or unreadable file yields the defaults
///
/// Malformed contents are returned as an error so the caller can report
/// them once logging is up.
pub fn read() -> Result<Config, toml::de::Error> {
    let config_path = match get_config_path() {
        Some(path) => path,
        None => return Ok(Config::default()),
    };

    if !config_path.exists() {
        return Ok(Config::default());
    }

    let content = match fs::read_to_string(&config_path) {
        Ok(content) => content,
        Err(_) => return Ok(Config::default()),
    };

    parse(&content)
}

pub fn parse(content: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(content)
}
