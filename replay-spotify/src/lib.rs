mod error;
mod models;
mod token_cache;

pub use error::SpotifyError;
pub use models::{Album, Artist, Image, SearchResponse, Track, TrackPage};

use models::TokenGrant;
use reqwest::StatusCode;
use std::time::Duration;
use token_cache::{CachedToken, TokenCache};
use tracing::{debug, warn};

const ACCOUNTS_BASE_URL: &str = "https://accounts.spotify.com";
const API_BASE_URL: &str = "https://api.spotify.com";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Spotify Web API client using the client-credentials grant.
///
/// The app-level bearer token is cached and refreshed lazily; search calls
/// never trigger more than one concurrent exchange.
pub struct SpotifyClient {
    http_client: reqwest::Client,
    accounts_base_url: String,
    api_base_url: String,
    client_id: String,
    client_secret: String,
    token_cache: TokenCache,
}

impl SpotifyClient {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self::builder(client_id, client_secret).build()
    }

    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
    ) -> SpotifyClientBuilder {
        SpotifyClientBuilder {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            accounts_base_url: ACCOUNTS_BASE_URL.to_string(),
            api_base_url: API_BASE_URL.to_string(),
        }
    }

    /// Track search. A 401 means the cached token was revoked early; the
    /// cache is dropped and the search retried once with a fresh token.
    pub async fn search_tracks(&self, query: &str, limit: u32) -> Result<Vec<Track>, SpotifyError> {
        let token = self.bearer_token().await?;
        let response = self.execute_search(query, limit, &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            debug!("cached token rejected, fetching a fresh one");
            self.token_cache.clear().await;
            let token = self.bearer_token().await?;
            let response = self.execute_search(query, limit, &token).await?;
            return decode_search(response).await;
        }

        decode_search(response).await
    }

    async fn bearer_token(&self) -> Result<String, SpotifyError> {
        self.token_cache.get_or_fetch(|| self.fetch_token()).await
    }

    async fn fetch_token(&self) -> Result<CachedToken, SpotifyError> {
        let url = format!("{}/api/token", self.accounts_base_url);
        let response = self
            .http_client
            .post(&url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = status.as_u16(), "credentials exchange rejected");
            return Err(SpotifyError::TokenRequestRejected {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        let grant: TokenGrant = serde_json::from_slice(&bytes)?;
        debug!(expires_in = grant.expires_in, "app token fetched");
        Ok(CachedToken::new(grant.access_token, grant.expires_in))
    }

    async fn execute_search(
        &self,
        query: &str,
        limit: u32,
        token: &str,
    ) -> Result<reqwest::Response, SpotifyError> {
        let url = format!("{}/v1/search", self.api_base_url);
        let response = self
            .http_client
            .get(&url)
            .bearer_auth(token)
            .query(&[
                ("q", query),
                ("type", "track"),
                ("limit", &limit.to_string()),
            ])
            .send()
            .await?;
        Ok(response)
    }
}

async fn decode_search(response: reqwest::Response) -> Result<Vec<Track>, SpotifyError> {
    let status = response.status();
    if !status.is_success() {
        warn!(status = status.as_u16(), "track search rejected");
        return Err(SpotifyError::SearchFailed {
            status: status.as_u16(),
        });
    }

    let bytes = response.bytes().await?;
    let parsed: SearchResponse = serde_json::from_slice(&bytes)?;
    Ok(parsed.tracks.items)
}

pub struct SpotifyClientBuilder {
    client_id: String,
    client_secret: String,
    accounts_base_url: String,
    api_base_url: String,
}

impl SpotifyClientBuilder {
    pub fn accounts_base_url(mut self, url: impl Into<String>) -> Self {
        self.accounts_base_url = url.into();
        self
    }

    pub fn api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    pub fn build(self) -> SpotifyClient {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        SpotifyClient {
            http_client,
            accounts_base_url: self.accounts_base_url,
            api_base_url: self.api_base_url,
            client_id: self.client_id,
            client_secret: self.client_secret,
            token_cache: TokenCache::default(),
        }
    }
}
