use replay_api::Client;
use replay_api::services::{DiaryError, DiaryService, YoutubeService};
use replay_auth::{SessionEvents, TokenPair, TokenStore};
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn temp_store() -> Arc<TokenStore> {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let unique = format!(
        "replay-service-test-{}-{}",
        std::process::id(),
        COUNTER.fetch_add(1, Ordering::SeqCst)
    );
    let path = std::env::temp_dir().join(unique).join("session.json");
    Arc::new(TokenStore::at_path(path).expect("temp store"))
}

fn logged_in_client(server: &MockServer) -> Arc<Client> {
    let store = temp_store();
    store.save(&TokenPair::new("a1", "r1")).expect("save");
    Arc::new(Client::new(server.uri(), store, SessionEvents::new()))
}

#[tokio::test]
async fn diary_listing_returns_the_page() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/diaries/my"))
        .and(query_param("page", "0"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "content": [],
            "number": 0,
            "totalPages": 0,
            "last": true,
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = DiaryService::new(logged_in_client(&server));
    let page = service.list_my(0).await.expect("page");

    assert!(page.is_empty());
    assert_eq!(page.next_page(), None);
}

#[tokio::test]
async fn dead_session_maps_to_session_expired() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/diaries/my"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/jwt/exchange"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let service = DiaryService::new(logged_in_client(&server));
    let err = service.list_my(0).await.unwrap_err();

    assert!(matches!(err, DiaryError::SessionExpired));
}

#[tokio::test]
async fn missing_diary_maps_to_not_found() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/diaries/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let service = DiaryService::new(logged_in_client(&server));
    let err = service.delete(99).await.unwrap_err();

    assert!(matches!(err, DiaryError::NotFound));
}

#[tokio::test]
async fn video_search_forwards_limit_and_unwraps_items() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/youtube"))
        .and(query_param("q", "ditto live"))
        .and(query_param("maxResults", "3"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{
                "videoId": "V37zVDKqSVk",
                "title": "NewJeans - Ditto (Live)",
                "channelTitle": "HYBE LABELS",
                "thumbnailUrl": "https://i.ytimg.com/vi/V37zVDKqSVk/hq720.jpg",
                "publishedAt": "2023-01-02T10:00:00Z",
            }],
        })))
        .expect(1)
        .mount(&server)
        .await;

    let service = YoutubeService::new(logged_in_client(&server));
    let videos = service.search("ditto live", Some(3)).await.expect("videos");

    assert_eq!(videos.len(), 1);
    assert_eq!(
        videos[0].watch_url(),
        "https://www.youtube.com/watch?v=V37zVDKqSVk"
    );
}
