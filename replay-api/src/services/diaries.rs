use crate::Request;
use crate::client::Client;
use crate::endpoints::diaries::{CreateDiary, Diary, UpdateDiary};
use crate::endpoints::{DiaryId, Page};
use crate::error::ApiError;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum DiaryError {
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    #[error("That diary entry could not be found.")]
    NotFound,

    #[error("The diary could not be saved: {0}")]
    Rejected(String),

    #[error("A network problem interrupted the request. Please try again.")]
    Offline,
}

impl From<ApiError> for DiaryError {
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

pub struct DiaryService {
    client: Arc<Client>,
}

impl DiaryService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    pub async fn list_my(&self, page: u32) -> Result<Page<Diary>, DiaryError> {
        self.client
            .send(Request::diaries().list_my().page(page))
            .await
            .map_err(|err| {
                warn!(error = %err, page, "diary listing failed");
                DiaryError::from(err)
            })
    }

    pub async fn create(&self, request: CreateDiary) -> Result<Diary, DiaryError> {
        self.client.send(request).await.map_err(|err| {
            warn!(error = %err, "diary creation failed");
            DiaryError::from(err)
        })
    }

    pub async fn update(&self, request: UpdateDiary) -> Result<Diary, DiaryError> {
        self.client.send(request).await.map_err(|err| {
            warn!(error = %err, "diary update failed");
            DiaryError::from(err)
        })
    }

    pub async fn delete(&self, id: DiaryId) -> Result<(), DiaryError> {
        self.client
            .send(Request::diaries().delete(id))
            .await
            .map(|_| ())
            .map_err(|err| {
                warn!(error = %err, id, "diary deletion failed");
                DiaryError::from(err)
            })
    }
}
