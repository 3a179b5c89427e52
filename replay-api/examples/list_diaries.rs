use replay_api::{Client, Request};
use replay_auth::{SessionEvents, TokenStore};
use std::sync::Arc;

#[tokio::main]
pub async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let token_store = Arc::new(TokenStore::new()?);
    let client = Client::new(
        "https://api.replaydiary.app",
        token_store,
        SessionEvents::new(),
    );

    let page = client.send(Request::diaries().list_my().size(10u32)).await?;
    for diary in page.content {
        println!("{} — {}", diary.artist, diary.title);
    }
    Ok(())
}
