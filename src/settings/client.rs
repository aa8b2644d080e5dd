use std::time::Duration;

use async_trait::async_trait;
use reqwest::RequestBuilder;
use tracing::{debug, warn};

use super::wire::{
    AllSettingsResponse, Envelope, OneSettingResponse, ThemesResponse, UpdateRequest,
    UpdateResponse,
};
use super::{
    SettingKey, SettingValue, Settings, SettingsError, SettingsProvider, SettingsResult,
    ThemeCatalog, UpdateAck,
};
use crate::config::Config;

/// Path of the settings API below the service base URL
const SETTINGS_PATH: &str = "/api/app/settings";

/// HTTP client for the settings service
///
/// Every request is bounded by the configured timeout; a timed-out request is
/// dropped (which aborts it) and reported as `SettingsError::Timeout`.
/// No retries are attempted.
#[derive(Clone)]
pub struct SettingsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SettingsClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> SettingsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SettingsError::Network(format!("Failed to create HTTP client: {}", e)))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!("SETTINGS: Client for {} (timeout {:?})", base_url, timeout);

        Ok(Self { client, base_url })
    }

    pub fn from_config(config: &Config) -> SettingsResult<Self> {
        Self::new(config.settings_url.clone(), config.request_timeout())
    }

    fn url(&self, suffix: Option<&str>) -> String {
        match suffix {
            Some(suffix) => format!("{}{}/{}", self.base_url, SETTINGS_PATH, suffix),
            None => format!("{}{}", self.base_url, SETTINGS_PATH),
        }
    }

    /// Send a request and unwrap the envelope it answers with
    ///
    /// Non-2xx responses are failures even when they carry a JSON body; the
    /// body's `error` text is kept for the message when it can be read.
    async fn execute<E: Envelope>(&self, request: RequestBuilder) -> SettingsResult<E::Payload> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let message = response
                .json::<E>()
                .await
                .ok()
                .and_then(|envelope| envelope.error_message().map(str::to_string));
            return Err(SettingsError::HttpStatus {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: E = response.json().await?;
        envelope.into_payload()
    }
}

fn log_failure<T>(operation: &str, result: SettingsResult<T>) -> SettingsResult<T> {
    if let Err(e) = &result {
        warn!("SETTINGS: {} failed: {}", operation, e);
    }
    result
}

#[async_trait]
impl SettingsProvider for SettingsClient {
    async fn fetch_all(&self) -> SettingsResult<Settings> {
        let result = self
            .execute::<AllSettingsResponse>(self.client.get(self.url(None)))
            .await;
        log_failure("fetch all", result)
    }

    async fn fetch_one(&self, key: SettingKey) -> SettingsResult<SettingValue> {
        let result = self
            .execute::<OneSettingResponse>(self.client.get(self.url(Some(key.as_str()))))
            .await;
        log_failure(&format!("fetch '{}'", key), result)
    }

    async fn update(&self, key: SettingKey, value: SettingValue) -> SettingsResult<UpdateAck> {
        debug!("SETTINGS: PUT {} = {}", key, value);
        let request = self
            .client
            .put(self.url(Some(key.as_str())))
            .json(&UpdateRequest { value: &value });
        let result = self.execute::<UpdateResponse>(request).await;
        log_failure(&format!("update '{}'", key), result)
    }

    async fn fetch_theme_catalog(&self) -> ThemeCatalog {
        let result = self
            .execute::<ThemesResponse>(self.client.get(self.url(Some("themes"))))
            .await;
        match log_failure("fetch themes", result) {
            Ok(catalog) => catalog,
            Err(_) => {
                debug!("SETTINGS: Using fallback theme catalog");
                ThemeCatalog::fallback()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;

    const TEST_TIMEOUT: Duration = Duration::from_millis(300);

    fn http_response(status: &str, body: &str) -> String {
        format!(
            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
            status,
            body.len(),
            body
        )
    }

    /// Read one full HTTP request (headers plus Content-Length body)
    async fn read_request(socket: &mut tokio::net::TcpStream) -> String {
        let mut data = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = socket.read(&mut chunk).await.unwrap_or(0);
            if n == 0 {
                break;
            }
            data.extend_from_slice(&chunk[..n]);
            let text = String::from_utf8_lossy(&data).to_string();
            if let Some(header_end) = text.find("\r\n\r\n") {
                let content_length = text[..header_end]
                    .lines()
                    .find_map(|line| {
                        let lower = line.to_lowercase();
                        lower
                            .strip_prefix("content-length:")
                            .map(|v| v.trim().parse::<usize>().unwrap_or(0))
                    })
                    .unwrap_or(0);
                if data.len() >= header_end + 4 + content_length {
                    return text;
                }
            }
        }
        String::from_utf8_lossy(&data).to_string()
    }

    /// Serve a single canned response; the received request text is sent back
    async fn serve_once(response: String) -> (String, oneshot::Receiver<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let (tx, rx) = oneshot::channel();
        tokio::spawn(async move {
            if let Ok((mut socket, _)) = listener.accept().await {
                let request = read_request(&mut socket).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
                let _ = tx.send(request);
            }
        });
        (format!("http://{}", addr), rx)
    }

    /// Accept connections and never answer
    async fn serve_stalled() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let mut held = Vec::new();
            while let Ok((socket, _)) = listener.accept().await {
                held.push(socket);
            }
        });
        format!("http://{}", addr)
    }

    /// An address nothing is listening on
    async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{}", addr)
    }

    #[test]
    fn test_url_building_trims_trailing_slash() {
        let client = SettingsClient::new("http://localhost:7070/", TEST_TIMEOUT).unwrap();
        assert_eq!(client.url(None), "http://localhost:7070/api/app/settings");
        assert_eq!(
            client.url(Some("theme")),
            "http://localhost:7070/api/app/settings/theme"
        );
    }

    #[tokio::test]
    async fn test_fetch_all_success() {
        let body = r#"{"success":true,"settings":{"theme":"orange","fullscreen":false,"notifications":true}}"#;
        let (url, request) = serve_once(http_response("200 OK", body)).await;
        let client = SettingsClient::new(url, TEST_TIMEOUT).unwrap();

        let settings = client.fetch_all().await.unwrap();

        assert_eq!(settings.theme, "orange");
        let request = request.await.unwrap();
        assert!(request.starts_with("GET /api/app/settings HTTP/1.1"));
    }

    #[tokio::test]
    async fn test_fetch_all_unsuccessful_envelope_is_failure() {
        let body = r#"{"success":false,"error":"store offline"}"#;
        let (url, _request) = serve_once(http_response("200 OK", body)).await;
        let client = SettingsClient::new(url, TEST_TIMEOUT).unwrap();

        let result = client.fetch_all().await;

        assert_eq!(result, Err(SettingsError::Application("store offline".into())));
    }

    #[tokio::test]
    async fn test_fetch_one_not_found_keeps_server_message() {
        let body = r#"{"success":false,"error":"Setting not found: theme"}"#;
        let (url, request) = serve_once(http_response("404 Not Found", body)).await;
        let client = SettingsClient::new(url, TEST_TIMEOUT).unwrap();

        let result = client.fetch_one(SettingKey::Theme).await;

        assert_eq!(
            result,
            Err(SettingsError::HttpStatus {
                status: 404,
                message: Some("Setting not found: theme".into()),
            })
        );
        assert!(request.await.unwrap().starts_with("GET /api/app/settings/theme "));
    }

    #[tokio::test]
    async fn test_server_error_without_json_body() {
        let (url, _request) = serve_once(http_response("500 Internal Server Error", "oops")).await;
        let client = SettingsClient::new(url, TEST_TIMEOUT).unwrap();

        let result = client.fetch_all().await;

        assert_eq!(result, Err(SettingsError::HttpStatus { status: 500, message: None }));
    }

    #[tokio::test]
    async fn test_update_sends_put_with_value_body() {
        let body = r#"{"success":true,"key":"fullscreen","oldValue":false,"newValue":true,"message":"Setting updated successfully"}"#;
        let (url, request) = serve_once(http_response("200 OK", body)).await;
        let client = SettingsClient::new(url, TEST_TIMEOUT).unwrap();

        let ack = client
            .update(SettingKey::Fullscreen, SettingValue::Flag(true))
            .await
            .unwrap();

        assert_eq!(ack.key.as_deref(), Some("fullscreen"));
        let request = request.await.unwrap();
        assert!(request.starts_with("PUT /api/app/settings/fullscreen HTTP/1.1"));
        assert!(request.ends_with(r#"{"value":true}"#));
    }

    #[tokio::test]
    async fn test_theme_catalog_success() {
        let body = r#"{"success":true,"themes":["dark","orange","night"],"current":"orange"}"#;
        let (url, _request) = serve_once(http_response("200 OK", body)).await;
        let client = SettingsClient::new(url, TEST_TIMEOUT).unwrap();

        let catalog = client.fetch_theme_catalog().await;

        assert_eq!(catalog.themes, vec!["dark", "orange", "night"]);
        assert_eq!(catalog.current, "orange");
    }

    #[tokio::test]
    async fn test_theme_catalog_falls_back_when_unreachable() {
        let client = SettingsClient::new(unreachable_url().await, TEST_TIMEOUT).unwrap();

        let catalog = client.fetch_theme_catalog().await;

        assert_eq!(catalog, ThemeCatalog::fallback());
    }

    #[tokio::test]
    async fn test_unreachable_service_is_network_failure() {
        let client = SettingsClient::new(unreachable_url().await, TEST_TIMEOUT).unwrap();

        let result = client.fetch_all().await;

        assert!(matches!(result, Err(SettingsError::Network(_))));
    }

    #[tokio::test]
    async fn test_stalled_service_times_out() {
        let client = SettingsClient::new(serve_stalled().await, TEST_TIMEOUT).unwrap();

        let started = tokio::time::Instant::now();
        let result = client.fetch_all().await;

        assert_eq!(result, Err(SettingsError::Timeout));
        assert!(started.elapsed() < Duration::from_secs(3));
    }
}
