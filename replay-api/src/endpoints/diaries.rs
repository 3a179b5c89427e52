use super::{DiaryId, Page};
use crate::macros::setter;
use crate::request::{EmptyResponse, Method, Request, RequestData};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

const DEFAULT_PAGE_SIZE: u32 = 20;

// Common

/// One killing-part diary entry: a song, the seconds-range that hooks, and
/// whatever the author wrote about it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Diary {
    pub id: DiaryId,
    pub title: String,
    pub artist: String,
    pub album_art_url: Option<String>,
    /// Spotify track the entry was created from, when search was used.
    pub track_id: Option<String>,
    /// YouTube video backing the in-app player, when one was attached.
    pub video_url: Option<String>,
    #[serde(flatten)]
    pub killing_part: KillingPart,
    pub content: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
}

/// The highlighted slice of the song, in whole seconds from track start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KillingPart {
    pub part_start_sec: u32,
    pub part_length_sec: u32,
}

impl KillingPart {
    pub fn new(part_start_sec: u32, part_length_sec: u32) -> Self {
        Self {
            part_start_sec,
            part_length_sec,
        }
    }

    pub fn end_sec(&self) -> u32 {
        self.part_start_sec + self.part_length_sec
    }
}

// Requests

#[derive(Debug, Clone, Serialize)]
pub struct ListMyDiaries {
    page: u32,
    size: u32,
}

impl ListMyDiaries {
    pub fn new() -> Self {
        Self {
            page: 0,
            size: DEFAULT_PAGE_SIZE,
        }
    }

    setter!(page: u32);
    setter!(size: u32);
}

impl Default for ListMyDiaries {
    fn default() -> Self {
        Self::new()
    }
}

impl Request for ListMyDiaries {
    type Data = Self;
    type Response = Page<Diary>;

    fn endpoint(&self) -> Cow<'_, str> {
        "/diaries/my".into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Query(self)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDiary {
    title: String,
    artist: String,
    album_art_url: Option<String>,
    track_id: Option<String>,
    video_url: Option<String>,
    part_start_sec: u32,
    part_length_sec: u32,
    content: Option<String>,
    is_public: bool,
}

#[derive(Debug, Clone)]
pub struct CreateDiary {
    diary: NewDiary,
}

impl CreateDiary {
    pub fn new(
        title: impl Into<String>,
        artist: impl Into<String>,
        killing_part: KillingPart,
    ) -> Self {
        Self {
            diary: NewDiary {
                title: title.into(),
                artist: artist.into(),
                album_art_url: None,
                track_id: None,
                video_url: None,
                part_start_sec: killing_part.part_start_sec,
                part_length_sec: killing_part.part_length_sec,
                content: None,
                is_public: false,
            },
        }
    }

    setter!(opt diary.album_art_url: String);
    setter!(opt diary.track_id: String);
    setter!(opt diary.video_url: String);
    setter!(opt diary.content: String);
    setter!(diary.is_public: bool);
}

impl Request for CreateDiary {
    type Data = NewDiary;
    type Response = Diary;
    const METHOD: Method = Method::POST;

    fn endpoint(&self) -> Cow<'_, str> {
        "/diaries".into()
    }

    fn data(&self) -> RequestData<&NewDiary> {
        RequestData::Json(&self.diary)
    }
}

/// Partial update; only the fields that were set are sent.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiaryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    video_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    part_start_sec: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    part_length_sec: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    is_public: Option<bool>,
}

#[derive(Debug, Clone)]
pub struct UpdateDiary {
    id: DiaryId,
    patch: DiaryPatch,
}

impl UpdateDiary {
    pub fn new(id: DiaryId) -> Self {
        Self {
            id,
            patch: DiaryPatch::default(),
        }
    }

    setter!(opt patch.title: String);
    setter!(opt patch.artist: String);
    setter!(opt patch.video_url: String);
    setter!(opt patch.part_start_sec: u32);
    setter!(opt patch.part_length_sec: u32);
    setter!(opt patch.content: String);
    setter!(opt patch.is_public: bool);
}

impl Request for UpdateDiary {
    type Data = DiaryPatch;
    type Response = Diary;
    const METHOD: Method = Method::PATCH;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/diaries/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&DiaryPatch> {
        RequestData::Json(&self.patch)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DeleteDiary {
    #[serde(skip)]
    id: DiaryId,
}

impl DeleteDiary {
    pub fn new(id: DiaryId) -> Self {
        Self { id }
    }
}

impl Request for DeleteDiary {
    type Data = Self;
    type Response = EmptyResponse;
    const METHOD: Method = Method::DELETE;

    fn endpoint(&self) -> Cow<'_, str> {
        format!("/diaries/{}", self.id).into()
    }

    fn data(&self) -> RequestData<&Self> {
        RequestData::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_diary_serializes_camel_case() {
        let request = CreateDiary::new("Ditto", "NewJeans", KillingPart::new(61, 15))
            .track_id("3r8RuvgbX9s7ammBn07D3W")
            .content("the chorus lives in my head");

        let RequestData::Json(body) = request.data() else {
            panic!("expected json payload");
        };
        let json = serde_json::to_value(body).expect("serialize");

        assert_eq!(json["title"], "Ditto");
        assert_eq!(json["partStartSec"], 61);
        assert_eq!(json["partLengthSec"], 15);
        assert_eq!(json["trackId"], "3r8RuvgbX9s7ammBn07D3W");
        assert_eq!(json["isPublic"], false);
    }

    #[test]
    fn patch_omits_unset_fields() {
        let request = UpdateDiary::new(7).content("sharper now").is_public(true);

        let RequestData::Json(body) = request.data() else {
            panic!("expected json payload");
        };
        let json = serde_json::to_value(body).expect("serialize");
        let object = json.as_object().expect("object");

        assert_eq!(object.len(), 2);
        assert_eq!(json["content"], "sharper now");
        assert_eq!(json["isPublic"], true);
    }

    #[test]
    fn diary_round_trips_flattened_killing_part() {
        let json = serde_json::json!({
            "id": 1,
            "title": "Ditto",
            "artist": "NewJeans",
            "albumArtUrl": null,
            "trackId": null,
            "videoUrl": null,
            "partStartSec": 61,
            "partLengthSec": 15,
            "content": null,
            "isPublic": false,
            "createdAt": "2024-05-02T12:00:00Z",
        });

        let diary: Diary = serde_json::from_value(json).expect("deserialize");
        assert_eq!(diary.killing_part, KillingPart::new(61, 15));
        assert_eq!(diary.killing_part.end_sec(), 76);
    }
}
