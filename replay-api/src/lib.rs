mod client;
pub mod endpoints;
mod error;
mod macros;
pub mod repositories;
pub mod request;
pub mod services;

pub use crate::client::Client;
pub use crate::error::ApiError;
pub use crate::request::{EmptyResponse, Method, RequestData};
use repositories::*;

/// Entry point for building request descriptors.
pub struct Request;

impl Request {
    pub fn diaries() -> DiaryRepository {
        DiaryRepository::new()
    }

    pub fn users() -> UserRepository {
        UserRepository::new()
    }

    pub fn youtube() -> YoutubeRepository {
        YoutubeRepository::new()
    }
}
