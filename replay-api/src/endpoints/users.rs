use super::UserId;
use crate::request::{Method, Request, RequestData};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

// Common

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: UserId,
    pub nickname: String,
    pub profile_image_url: Option<String>,
}

/// Aggregate listening-diary figures shown on a profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStatics {
    pub diary_count: u32,
    pub favorite_artist: Option<String>,
    pub favorite_genre: Option<String>,
}

// Requests

#[derive(Debug, Clone, Default, Serialize)]
pub struct GetMyProfile;

impl GetMyProfile {
    pub fn new() -> Self {
        Self
    }
}

impl Request for GetMyProfile {
    type Data = Self;
    type Response = Profile;

    fn endpoint(&self) -> Cow<'_, str> {
        "/users/my".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct GetUserStatics {
    #[serde(skip)]
    user_id: UserId,
}

impl GetUserStatics {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }
}

impl Request for GetUserStatics {
    type Data = Self;
    type Response = UserStatics;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/users/{}/statics", self.user_id).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNickname {
    nickname: String,
}

impl UpdateNickname {
    pub fn new(nickname: impl Into<String>) -> Self {
        Self {
            nickname: nickname.into(),
        }
    }
}

impl Request for UpdateNickname {
    type Data = Self;
    type Response = Profile;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        "/users/my".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Json(self)
    }
}
