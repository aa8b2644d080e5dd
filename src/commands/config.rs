use crate::config::{self, Config};

/// Render the effective configuration and where it was read from
pub fn format_config(cfg: &Config, path: &str, exists: bool) -> String {
    let mut output = String::new();
    output.push_str(&format!(
        "Configuration File: {} (Exists: {})\n\n",
        path,
        if exists { "yes" } else { "no" }
    ));
    output.push_str("Current Configuration:\n");
    output.push_str("=====================\n");
    output.push_str(&format!("log_level: {}\n", cfg.log_level));
    output.push_str(&format!("log_file: {}\n", cfg.log_file));
    output.push_str(&format!("settings_url: {}\n", cfg.settings_url));
    output.push_str(&format!("request_timeout_secs: {}\n", cfg.request_timeout_secs));
    output.push_str(&format!("notification_display_ms: {}\n", cfg.notification_display_ms));
    output.push_str(&format!("notification_exit_ms: {}\n", cfg.notification_exit_ms));
    output.push_str(&format!("initial_volume: {}\n", cfg.initial_volume));

    output.push_str("\n[playlist]\n");
    for (i, track) in cfg.playlist.iter().enumerate() {
        let source = if track.source.is_empty() {
            "(no source)"
        } else {
            track.source.as_str()
        };
        output.push_str(&format!(
            "{}. {} - {} ({}) {}\n",
            i + 1,
            track.title,
            track.artist,
            track.duration,
            source
        ));
    }
    output
}

/// Handle the config command - display current configuration
pub fn run(cfg: &Config) {
    let (path, exists) = match config::get_config_path() {
        Some(path) => {
            let exists = path.exists();
            (path.display().to_string(), exists)
        }
        None => ("Unable to determine config path".to_string(), false),
    };

    print!("{}", format_config(cfg, &path, exists));
}
