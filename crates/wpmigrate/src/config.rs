use crate::prelude::*;

/// WordPress content-API configuration from environment variables.
#[derive(Debug, Clone)]
pub struct WordPressConfig {
    pub base_url: String,
    pub username: String,
    pub password: String,
}

impl WordPressConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            base_url: std::env::var("WORDPRESS_URL").map_err(|_| {
                Error::ConfigurationMissing("WORDPRESS_URL environment variable not set".into())
            })?,
            username: std::env::var("WORDPRESS_USERNAME").map_err(|_| {
                Error::ConfigurationMissing(
                    "WORDPRESS_USERNAME environment variable not set".into(),
                )
            })?,
            password: std::env::var("WORDPRESS_PASSWORD").map_err(|_| {
                Error::ConfigurationMissing(
                    "WORDPRESS_PASSWORD environment variable not set".into(),
                )
            })?,
        })
    }

    /// Apply CLI overrides to the configuration.
    pub fn with_overrides(mut self, base_url: Option<String>) -> Self {
        if let Some(url) = base_url {
            self.base_url = url;
        }
        self
    }

    /// Endpoint posts are submitted to.
    pub fn posts_url(&self) -> String {
        format!("{}/posts", self.base_url.trim_end_matches('/'))
    }
}

/// Create an authenticated HTTP client with Basic Auth headers.
pub fn create_authenticated_client(config: &WordPressConfig) -> Result<reqwest::Client> {
    use base64::Engine;
    use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};

    let auth_string = format!("{}:{}", config.username, config.password);
    let auth_encoded = base64::engine::general_purpose::STANDARD.encode(&auth_string);

    let mut headers = HeaderMap::new();
    headers.insert(
        AUTHORIZATION,
        HeaderValue::from_str(&format!("Basic {auth_encoded}"))
            .map_err(|e| eyre!("Invalid header value: {}", e))?,
    );
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    reqwest::Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| eyre!("Failed to build HTTP client: {}", e))
}
