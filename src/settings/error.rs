use thiserror::Error;

/// Failures talking to the settings service
///
/// Callers only branch on success vs. failure; the variants exist so the
/// message shown to the user and written to the log names the cause.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SettingsError {
    #[error("request timed out")]
    Timeout,

    #[error("network error: {0}")]
    Network(String),

    #[error("HTTP {status}{}", .message.as_ref().map(|m| format!(": {}", m)).unwrap_or_default())]
    HttpStatus { status: u16, message: Option<String> },

    #[error("{0}")]
    Application(String),

    #[error("invalid response: {0}")]
    Decode(String),

    #[error("response is missing '{0}'")]
    MissingField(&'static str),
}

impl From<reqwest::Error> for SettingsError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            SettingsError::Timeout
        } else if e.is_decode() {
            SettingsError::Decode(e.to_string())
        } else {
            SettingsError::Network(e.to_string())
        }
    }
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;
