use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    // Server
    pub port: u16,
    pub node_env: String,

    // YouTube playlist
    pub playlist_id: String,

    // OAuth2 credentials
    pub google_client_id: String,
    pub google_client_secret: String,
    pub youtube_refresh_token: String,

    // Fetching
    pub fetch_timeout_ms: u64,
    pub page_size: usize,
}

impl Config {
    /// Load configuration from environment variables with defaults
    pub fn from_env() -> Self {
        Self {
            // Server
            port: env::var("PORT")
                .unwrap_or_else(|_| "3001".to_string())
                .parse()
                .unwrap_or(3001),
            node_env: env::var("NODE_ENV").unwrap_or_else(|_| "development".to_string()),

            // YouTube playlist
            playlist_id: env::var("PLAYLIST_ID").unwrap_or_default(),

            // OAuth2 credentials - empty values fail at the token endpoint,
            // not at startup
            google_client_id: env::var("GOOGLE_CLIENT_ID").unwrap_or_default(),
            google_client_secret: env::var("GOOGLE_CLIENT_SECRET").unwrap_or_default(),
            youtube_refresh_token: env::var("YOUTUBE_REFRESH_TOKEN").unwrap_or_default(),

            // Fetching
            fetch_timeout_ms: env::var("FETCH_TIMEOUT_MS")
                .unwrap_or_else(|_| "30000".to_string())
                .parse()
                .unwrap_or(30_000), // 30 seconds

            page_size: env::var("PAGE_SIZE")
                .unwrap_or_else(|_| "50".to_string())
                .parse()
                .unwrap_or(50), // playlistItems maxResults cap
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
