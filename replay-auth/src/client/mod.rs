pub mod auth_client;
mod config;
mod session_events;
mod token_store;

pub use auth_client::AuthClient;
pub use config::Settings;
pub use session_events::{SessionEvent, SessionEvents};
pub use token_store::TokenStore;

use crate::common::TokenPair;
use crate::error::AuthError;

/// Exchange a Kakao SDK access token for a backend session and persist it.
///
/// Obtaining the provider token is the platform SDK's job; this only covers
/// the exchange against our backend.
pub async fn login_with_kakao(
    auth_client: &AuthClient,
    token_store: &TokenStore,
    provider_token: &str,
) -> Result<TokenPair, AuthError> {
    let pair = auth_client.login_with_kakao(provider_token).await?;
    token_store.save(&pair)?;
    tracing::info!("login exchange completed");
    Ok(pair)
}

/// Drop the locally stored session. Backend sessions are stateless JWTs, so
/// logout never makes a network call.
pub fn logout(token_store: &TokenStore) -> Result<(), AuthError> {
    token_store.clear()
}

/// Whether a previously stored session can be resumed without logging in
/// again.
pub fn restore_session(token_store: &TokenStore) -> bool {
    token_store.has_valid_session()
}
