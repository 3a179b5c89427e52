use serde::{Deserialize, Serialize};

// Mirror backend auth models

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KakaoLoginRequest {
    pub access_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub access_token: String,
    pub refresh_token: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RefreshResponse {
    pub access_token: String,
    pub refresh_token: String,
}
