use crate::macros::setter;
use crate::request::{Request, RequestData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

/// A candidate video for the diary's embedded player. Search runs through
/// our backend so the API key never ships with the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub video_id: String,
    pub title: String,
    pub channel_title: String,
    pub thumbnail_url: Option<String>,
    pub published_at: DateTime<Utc>,
}

impl Video {
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

// Requests

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchVideos {
    q: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_results: Option<u32>,
}

impl SearchVideos {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            q: query.into(),
            max_results: None,
        }
    }

    setter!(opt max_results: u32);
}

impl Request for SearchVideos {
    type Data = Self;
    type Response = VideosResponse;

    fn endpoint(&self) -> Cow<'_, str> {
        "/youtube".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

// Responses

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideosResponse {
    pub items: Vec<Video>,
}
