use crate::error::ApiError;
use crate::request::{Request, RequestData};
use replay_auth::{AuthClient, SessionEvents, TokenStore};
use reqwest::{Response, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::{debug, warn};

/// Authenticated client for the Replay backend.
///
/// Attaches the stored bearer token, recovers from an expired access token
/// with a single refresh-and-retry, and reports dead sessions through
/// [`SessionEvents`] so callers never have to inspect auth failures
/// themselves.
pub struct Client {
    http_client: reqwest::Client,
    base_url: String,
    token_store: Arc<TokenStore>,
    auth_client: AuthClient,
    session_events: SessionEvents,
}

impl Client {
    pub fn new(
        base_url: impl Into<String>,
        token_store: Arc<TokenStore>,
        session_events: SessionEvents,
    ) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            http_client: reqwest::Client::new(),
            auth_client: AuthClient::new(base_url.clone()),
            base_url,
            token_store,
            session_events,
        }
    }

    pub fn session_events(&self) -> &SessionEvents {
        &self.session_events
    }

    pub async fn send<R>(&self, request: R) -> Result<R::Response, ApiError>
    where
        R: Request,
    {
        // Retry depth is hard-capped at one: the flag flips after the first
        // refresh and never flips back.
        let mut allow_token_refresh = true;

        loop {
            let bearer = if request.requires_auth() {
                match self.token_store.access_token() {
                    Some(token) => Some(token),
                    None => {
                        warn!(
                            endpoint = %request.endpoint(),
                            "authenticated request without a stored access token"
                        );
                        return Err(self.expire_session(ApiError::MissingAccessToken));
                    }
                }
            } else {
                None
            };

            let response = self.execute(&request, bearer.as_deref()).await?;
            let status = response.status();
            debug!(endpoint = %request.endpoint(), status = status.as_u16(), "received response");

            if status == StatusCode::UNAUTHORIZED && request.requires_auth() {
                if !allow_token_refresh {
                    return Err(self.expire_session(ApiError::Unauthorized));
                }
                self.refresh_session().await?;
                allow_token_refresh = false;
                continue;
            }

            if !status.is_success() {
                return Err(ApiError::ServerError {
                    status: status.as_u16(),
                    message: extract_message(response).await,
                });
            }

            return decode_body(response).await;
        }
    }

    async fn execute<R>(&self, request: &R, bearer: Option<&str>) -> Result<Response, ApiError>
    where
        R: Request,
    {
        let url = format!("{}{}", self.base_url, request.endpoint());
        let mut builder = self.http_client.request(R::METHOD, &url);

        if let Some(token) = bearer {
            builder = builder.bearer_auth(token);
        }

        builder = match request.data() {
            RequestData::Query(query) => builder.query(query),
            RequestData::Json(body) => builder.json(body),
            RequestData::Empty => builder,
        };

        debug!(method = %R::METHOD, %url, "sending request");
        builder.send().await.map_err(ApiError::InvalidResponse)
    }

    /// Exchange the stored refresh token for a new pair, persisting it
    /// before the caller retries.
    async fn refresh_session(&self) -> Result<(), ApiError> {
        let refresh_token = match self.token_store.refresh_token() {
            Some(token) => token,
            None => return Err(self.expire_session(ApiError::MissingRefreshToken)),
        };

        let pair = match self.auth_client.exchange_refresh_token(&refresh_token).await {
            Ok(pair) => pair,
            Err(err) => {
                warn!(error = %err, "token refresh failed");
                return Err(self.expire_session(ApiError::Unauthorized));
            }
        };

        if let Err(err) = self.token_store.save(&pair) {
            warn!(error = %err, "failed to persist refreshed tokens");
            return Err(self.expire_session(ApiError::Unauthorized));
        }

        debug!("access token refreshed");
        Ok(())
    }

    /// Tear down the stored session and announce it, then hand the error
    /// back for propagation.
    fn expire_session(&self, err: ApiError) -> ApiError {
        if let Err(store_err) = self.token_store.clear() {
            warn!(error = %store_err, "failed to clear stored session");
        }
        self.session_events.notify_expired();
        err
    }
}

async fn decode_body<T>(response: Response) -> Result<T, ApiError>
where
    T: DeserializeOwned,
{
    let bytes = response.bytes().await.map_err(ApiError::InvalidResponse)?;
    // Bodyless 2xx responses decode as `null` so EmptyResponse round-trips.
    let slice: &[u8] = if bytes.is_empty() {
        &b"null"[..]
    } else {
        bytes.as_ref()
    };
    serde_json::from_slice(slice).map_err(ApiError::DecodingFailed)
}

/// Best-effort extraction of the backend's `{"message": ...}` error
/// envelope, falling back to the raw body text.
async fn extract_message(response: Response) -> Option<String> {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        message: String,
    }

    let text = response.text().await.ok()?;
    if text.is_empty() {
        return None;
    }
    match serde_json::from_str::<ErrorEnvelope>(&text) {
        Ok(envelope) => Some(envelope.message),
        Err(_) => Some(text),
    }
}
