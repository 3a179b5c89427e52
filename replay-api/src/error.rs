use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    /// The request never produced an HTTP response.
    #[error("request transport failed: {0}")]
    InvalidResponse(#[source] reqwest::Error),

    #[error("no access token is stored")]
    MissingAccessToken,

    #[error("no refresh token is stored")]
    MissingRefreshToken,

    /// The session could not be refreshed; the stored pair has been cleared.
    #[error("session is no longer authorized")]
    Unauthorized,

    #[error("server returned status {status}")]
    ServerError { status: u16, message: Option<String> },

    #[error("response body could not be decoded: {0}")]
    DecodingFailed(#[source] serde_json::Error),
}
