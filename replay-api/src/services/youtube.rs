use crate::Request;
use crate::client::Client;
use crate::endpoints::youtube::Video;
use crate::error::ApiError;
use std::sync::Arc;
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug)]
pub enum YoutubeError {
    #[error("Your session has expired. Please log in again.")]
    SessionExpired,

    #[error("Video search failed: {0}")]
    SearchFailed(String),

    #[error("A network problem interrupted the search. Please try again.")]
    Offline,
}

impl From<ApiError> for YoutubeError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::MissingAccessToken
            | ApiError::MissingRefreshToken
            | ApiError::Unauthorized => Self::SessionExpired,
            ApiError::ServerError { status, message } => {
                Self::SearchFailed(message.unwrap_or_else(|| format!("server status {status}")))
            }
            ApiError::DecodingFailed(_) => {
                Self::SearchFailed("the server sent an unexpected response".to_string())
            }
            ApiError::InvalidResponse(_) => Self::Offline,
        }
    }
}

pub struct YoutubeService {
    client: Arc<Client>,
}

impl YoutubeService {
    pub fn new(client: Arc<Client>) -> Self {
        Self { client }
    }

    /// Search for an embeddable video. Superseded in-flight searches are the
    /// caller's concern; type-ahead flows abandon stale futures.
    pub async fn search(
        &self,
        query: impl Into<String>,
        max_results: Option<u32>,
    ) -> Result<Vec<Video>, YoutubeError> {
        let mut request = Request::youtube().search(query);
        if let Some(max_results) = max_results {
            request = request.max_results(max_results);
        }

        self.client
            .send(request)
            .await
            .map(|response| response.items)
            .map_err(|err| {
                warn!(error = %err, "video search failed");
                YoutubeError::from(err)
            })
    }
}
