use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpotifyError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Credentials exchange rejected with status {status}")]
    TokenRequestRejected { status: u16 },

    #[error("Search request failed with status {status}")]
    SearchFailed { status: u16 },

    #[error("Response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),
}
