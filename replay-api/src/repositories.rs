use crate::endpoints::{
    DiaryId, UserId,
    diaries::{CreateDiary, DeleteDiary, KillingPart, ListMyDiaries, UpdateDiary},
    users::{GetMyProfile, GetUserStatics, UpdateNickname},
    youtube::SearchVideos,
};

#[derive(Default)]
pub struct DiaryRepository;

impl DiaryRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn list_my(&self) -> ListMyDiaries {
        ListMyDiaries::new()
    }

    pub fn create(
        &self,
        title: impl Into<String>,
        artist: impl Into<String>,
        killing_part: KillingPart,
    ) -> CreateDiary {
        CreateDiary::new(title, artist, killing_part)
    }

    pub fn update(&self, id: DiaryId) -> UpdateDiary {
        UpdateDiary::new(id)
    }

    pub fn delete(&self, id: DiaryId) -> DeleteDiary {
        DeleteDiary::new(id)
    }
}

#[derive(Default)]
pub struct UserRepository;

impl UserRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn my_profile(&self) -> GetMyProfile {
        GetMyProfile::new()
    }

    pub fn statics(&self, user_id: UserId) -> GetUserStatics {
        GetUserStatics::new(user_id)
    }

    pub fn update_nickname(&self, nickname: impl Into<String>) -> UpdateNickname {
        UpdateNickname::new(nickname)
    }
}

#[derive(Default)]
pub struct YoutubeRepository;

impl YoutubeRepository {
    pub fn new() -> Self {
        Self
    }

    pub fn search(&self, query: impl Into<String>) -> SearchVideos {
        SearchVideos::new(query)
    }
}
