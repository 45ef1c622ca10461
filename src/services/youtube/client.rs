//! YouTube Data API Client
//!
//! HTTP client for the OAuth2 token endpoint and `playlistItems.list`.

use async_trait::async_trait;
use lazy_static::lazy_static;
use prometheus::{register_int_counter, IntCounter};
use reqwest::Client;
use std::time::{Duration, Instant};
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, error};

use super::types::{PlaylistItemsPage, TokenResponse, YouTubeCredentials};
use super::{PlaylistPage, PlaylistSource};
use crate::config::Config;

/// Google OAuth2 token endpoint
const TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

/// playlistItems.list endpoint, snippet part
const PLAYLIST_ITEMS_URL: &str =
    "https://www.googleapis.com/youtube/v3/playlistItems?part=snippet";

/// Assumed token lifetime when the endpoint omits expires_in
const DEFAULT_TOKEN_TTL_SECS: u64 = 3600;

/// Refresh this many seconds before the token actually expires
const TOKEN_EXPIRY_SLACK_SECS: u64 = 60;

lazy_static! {
    static ref PAGE_REQUESTS: IntCounter = register_int_counter!(
        "youtube_page_requests_total",
        "Playlist pages requested from the YouTube API"
    )
    .unwrap();
    static ref TOKEN_REFRESHES: IntCounter = register_int_counter!(
        "youtube_token_refreshes_total",
        "OAuth2 refresh-token exchanges performed"
    )
    .unwrap();
    static ref FETCH_FAILURES: IntCounter = register_int_counter!(
        "youtube_fetch_failures_total",
        "Failed requests against the YouTube API"
    )
    .unwrap();
}

/// YouTube API error types
#[derive(Debug, Error)]
pub enum YouTubeError {
    /// Network/connection error
    #[error("Network error: {0}")]
    Network(String),
    /// HTTP error (non-2xx status)
    #[error("HTTP error: {0}")]
    Http(u16),
    /// OAuth2 token exchange failure
    #[error("Token exchange failed: {0}")]
    Token(String),
    /// JSON parsing error
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Access token with its refresh deadline
struct CachedToken {
    access_token: String,
    expires_at: Instant,
}

impl CachedToken {
    fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// YouTube API client
///
/// Exchanges the configured refresh token for access tokens transparently
/// and pages through the configured playlist.
pub struct YouTubeClient {
    http: Client,
    credentials: YouTubeCredentials,
    playlist_id: String,
    page_size: usize,
    token: Mutex<Option<CachedToken>>,
}

impl YouTubeClient {
    /// Create a new client from application configuration
    pub fn new(config: &Config) -> Self {
        let http = Client::builder()
            .timeout(Duration::from_millis(config.fetch_timeout_ms))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            credentials: YouTubeCredentials {
                client_id: config.google_client_id.clone(),
                client_secret: config.google_client_secret.clone(),
                refresh_token: config.youtube_refresh_token.clone(),
            },
            playlist_id: config.playlist_id.clone(),
            page_size: config.page_size,
            token: Mutex::new(None),
        }
    }

    /// Build the page URL for the configured playlist
    fn page_url(&self, page_token: Option<&str>) -> String {
        let mut url = format!(
            "{}&playlistId={}&maxResults={}",
            PLAYLIST_ITEMS_URL, self.playlist_id, self.page_size
        );
        if let Some(token) = page_token {
            url.push_str(&format!("&pageToken={}", token));
        }
        url
    }

    /// Return a valid access token, exchanging the refresh token if the
    /// cached one is missing or about to expire
    async fn access_token(&self) -> Result<String, YouTubeError> {
        let mut cached = self.token.lock().await;
        if let Some(token) = cached.as_ref() {
            if token.is_valid() {
                return Ok(token.access_token.clone());
            }
        }

        debug!("Exchanging refresh token for a new access token");
        TOKEN_REFRESHES.inc();

        let params = [
            ("client_id", self.credentials.client_id.as_str()),
            ("client_secret", self.credentials.client_secret.as_str()),
            ("refresh_token", self.credentials.refresh_token.as_str()),
            ("grant_type", "refresh_token"),
        ];

        let response = self
            .http
            .post(TOKEN_URL)
            .form(&params)
            .send()
            .await
            .map_err(|e| YouTubeError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Token endpoint returned {}: {}", status, body);
            return Err(YouTubeError::Token(format!(
                "token endpoint returned {}",
                status.as_u16()
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| YouTubeError::Parse(e.to_string()))?;

        let ttl = token
            .expires_in
            .unwrap_or(DEFAULT_TOKEN_TTL_SECS)
            .saturating_sub(TOKEN_EXPIRY_SLACK_SECS);
        let access_token = token.access_token.clone();
        *cached = Some(CachedToken {
            access_token: token.access_token,
            expires_at: Instant::now() + Duration::from_secs(ttl),
        });

        Ok(access_token)
    }
}

#[async_trait]
impl PlaylistSource for YouTubeClient {
    async fn fetch_page(
        &self,
        page_token: Option<&str>,
    ) -> Result<PlaylistPage, YouTubeError> {
        let access_token = match self.access_token().await {
            Ok(token) => token,
            Err(e) => {
                FETCH_FAILURES.inc();
                return Err(e);
            }
        };

        debug!(
            "YouTube API request: playlistItems page_token={:?}",
            page_token
        );
        PAGE_REQUESTS.inc();

        let response = self
            .http
            .get(self.page_url(page_token))
            .bearer_auth(&access_token)
            .send()
            .await
            .map_err(|e| {
                FETCH_FAILURES.inc();
                YouTubeError::Network(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            FETCH_FAILURES.inc();
            let body = response.text().await.unwrap_or_default();
            error!("YouTube API returned {}: {}", status, &body[..body.len().min(500)]);
            return Err(YouTubeError::Http(status.as_u16()));
        }

        let text = response
            .text()
            .await
            .map_err(|e| YouTubeError::Network(e.to_string()))?;

        let page: PlaylistItemsPage = serde_json::from_str(&text).map_err(|e| {
            FETCH_FAILURES.inc();
            error!("Failed to parse playlistItems response: {}", e);
            debug!("Response text: {}", &text[..text.len().min(500)]);
            YouTubeError::Parse(e.to_string())
        })?;

        Ok(PlaylistPage {
            videos: page.items.into_iter().map(Into::into).collect(),
            next_page_token: page.next_page_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_config() -> Config {
        Config {
            port: 3001,
            node_env: "test".to_string(),
            playlist_id: "PLtest123".to_string(),
            google_client_id: "client".to_string(),
            google_client_secret: "secret".to_string(),
            youtube_refresh_token: "refresh".to_string(),
            fetch_timeout_ms: 5_000,
            page_size: 50,
        }
    }

    #[test]
    fn test_page_url_first_page() {
        let client = YouTubeClient::new(&test_config());
        let url = client.page_url(None);
        assert!(url.starts_with("https://www.googleapis.com/youtube/v3/playlistItems"));
        assert!(url.contains("part=snippet"));
        assert!(url.contains("playlistId=PLtest123"));
        assert!(url.contains("maxResults=50"));
        assert!(!url.contains("pageToken"));
    }

    #[test]
    fn test_page_url_with_continuation_token() {
        let client = YouTubeClient::new(&test_config());
        let url = client.page_url(Some("CDIQAA"));
        assert!(url.contains("pageToken=CDIQAA"));
    }

    #[test]
    fn test_expired_token_is_invalid() {
        let token = CachedToken {
            access_token: "abc".to_string(),
            expires_at: Instant::now() - Duration::from_secs(1),
        };
        assert!(!token.is_valid());
    }
}
