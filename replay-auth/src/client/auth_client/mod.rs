mod models;

use crate::common::TokenPair;
use crate::error::AuthError;
use models::{KakaoLoginRequest, LoginResponse, RefreshResponse};
use reqwest::Client;
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Header carrying the refresh token on the exchange call. The exchange is
/// deliberately unauthenticated; the refresh token is the only credential.
pub const REFRESH_TOKEN_HEADER: &str = "X-Refresh-Token";

/// Client for the unauthenticated auth endpoints: social login exchange and
/// refresh-token exchange.
pub struct AuthClient {
    http_client: Client,
    base_url: String,
}

impl AuthClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        let http_client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http_client,
            base_url: base_url.into(),
        }
    }

    /// Exchange a Kakao access token for a first-party session.
    pub async fn login_with_kakao(&self, provider_token: &str) -> Result<TokenPair, AuthError> {
        let url = format!("{}/auth/kakao", self.base_url);
        let req = KakaoLoginRequest {
            access_token: provider_token.to_string(),
        };

        let resp = self.http_client.post(&url).json(&req).send().await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "login exchange rejected");
            return Err(AuthError::LoginRejected {
                status: status.as_u16(),
            });
        }

        let body = resp.json::<LoginResponse>().await?;
        Ok(TokenPair::new(body.access_token, body.refresh_token))
    }

    /// Trade the refresh token for a new pair. Any failure here means the
    /// session cannot be recovered by the caller.
    pub async fn exchange_refresh_token(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let url = format!("{}/jwt/exchange", self.base_url);

        let resp = self
            .http_client
            .post(&url)
            .header(REFRESH_TOKEN_HEADER, refresh_token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "refresh exchange rejected");
            return Err(AuthError::RefreshRejected {
                status: status.as_u16(),
            });
        }

        let body = resp.json::<RefreshResponse>().await?;
        tracing::debug!("refresh exchange completed");
        Ok(TokenPair::new(body.access_token, body.refresh_token))
    }
}
