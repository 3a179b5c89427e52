use crate::Request;
use crate::client::Client;
use crate::endpoints::UserId;
use crate::endpoints::users::{Profile, UserStatics};
use crate::error::ApiError;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    #[error("That profile could not be found.")]
    NotFound,

    #[error("The profile could not be loaded: {0}")]
    Rejected(String),

    #[error("A network problem interrupted the request. Please try again.")]
    Offline,
}

impl From<ApiError> for UserError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingAccessToken
            | ApiError::MissingRefreshToken
            | ApiError::Unauthorized => Self::SessionExpired,
            ApiError::ServerError { status: 404, .. } => Self::NotFound,
            ApiError::ServerError { status, message } => {
                Self::Rejected(message.unwrap_or_else(|| format!("server status {status}")))
            }
            ApiError::DecodingFailed(_) => {
                Self::Rejected("the server sent an unexpected response".to_string())
            }
            ApiError::InvalidResponse(_) => Self::Offline,
        }
    }
}

pub struct UserService {
    client: Arc<Client>,
}

impl UserService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn my_profile(&self) -> Result<Profile, UserError> {
        self.client
            .send(Request::users().my_profile())
            .await
            .map_err(|err| {
                warn!(error = %err, "profile fetch failed");
                UserError::from(err)
            })
    }

    pub async fn statics(&self, user_id: UserId) -> Result<UserStatics, UserError> {
        self.client
            .send(Request::users().statics(user_id))
            .await
            .map_err(|err| {
                warn!(error = %err, user_id, "statics fetch failed");
                UserError::from(err)
            })
    }

    pub async fn update_nickname(&self, nickname: impl Into<String>) -> Result<Profile, UserError> {
        self.client
            .send(Request::users().update_nickname(nickname))
            .await
            .map_err(|err| {
                warn!(error = %err, "nickname update failed");
                UserError::from(err)
            })
    }
}
