use crate::error::SpotifyError;
use std::future::Future;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Tokens are considered dead this many seconds before Spotify says so, so a
/// token that passes the validity check still survives the request using it.
const EXPIRY_MARGIN_SECS: u64 = 60;

#[derive(Debug, Clone)]
pub(crate) struct CachedToken {
    pub token: String,
    expires_at: Instant,
}

impl CachedToken {
    pub fn new(token: String, expires_in_secs: u64) -> Self {
        let usable = expires_in_secs.saturating_sub(EXPIRY_MARGIN_SECS);
        Self {
            token,
            expires_at: Instant::now() + Duration::from_secs(usable),
        }
    }

    pub fn is_valid(&self) -> bool {
        Instant::now() < self.expires_at
    }
}

/// Single-flight cache for the app-level bearer token.
///
/// The slot lock is held across the exchange, so concurrent callers wait on
/// the one in-flight fetch instead of racing their own.
#[derive(Debug, Default)]
pub(crate) struct TokenCache {
    slot: Mutex<Option<CachedToken>>,
}

impl TokenCache {
    pub async fn get_or_fetch<F, Fut>(&self, fetch: F) -> Result<String, SpotifyError>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<CachedToken, SpotifyError>>,
    {
        let mut slot = self.slot.lock().await;

        if let Some(cached) = slot.as_ref() {
            if cached.is_valid() {
                return Ok(cached.token.clone());
            }
        }

        let fresh = fetch().await?;
        let token = fresh.token.clone();
        *slot = Some(fresh);
        Ok(token)
    }

    pub async fn clear(&self) {
        *self.slot.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[test]
    fn long_lived_token_is_valid() {
        let token = CachedToken::new("t".to_string(), 3600);
        assert!(token.is_valid());
    }

    #[test]
    fn margin_consumes_short_lifetimes() {
        // 45s lifetime minus the 60s margin saturates to zero.
        let token = CachedToken::new("t".to_string(), 45);
        assert!(!token.is_valid());
    }

    #[tokio::test]
    async fn fetch_result_is_cached() {
        let cache = TokenCache::default();
        let fetches = AtomicUsize::new(0);

        for _ in 0..3 {
            let token = cache
                .get_or_fetch(|| {
                    fetches.fetch_add(1, Ordering::SeqCst);
                    async { Ok(CachedToken::new("t1".to_string(), 3600)) }
                })
                .await
                .expect("token");
            assert_eq!(token, "t1");
        }

        assert_eq!(fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn expired_entry_is_refetched() {
        let cache = TokenCache::default();

        cache
            .get_or_fetch(|| async { Ok(CachedToken::new("t1".to_string(), 30)) })
            .await
            .expect("token");
        let second = cache
            .get_or_fetch(|| async { Ok(CachedToken::new("t2".to_string(), 3600)) })
            .await
            .expect("token");

        assert_eq!(second, "t2");
    }

    #[tokio::test]
    async fn cleared_entry_is_refetched() {
        let cache = TokenCache::default();

        cache
            .get_or_fetch(|| async { Ok(CachedToken::new("t1".to_string(), 3600)) })
            .await
            .expect("token");
        cache.clear().await;
        let second = cache
            .get_or_fetch(|| async { Ok(CachedToken::new("t2".to_string(), 3600)) })
            .await
            .expect("token");

        assert_eq!(second, "t2");
    }

    #[tokio::test]
    async fn failed_fetch_leaves_the_slot_empty() {
        let cache = TokenCache::default();

        let result = cache
            .get_or_fetch(|| async { Err(SpotifyError::TokenRequestRejected { status: 400 }) })
            .await;
        assert!(result.is_err());

        let recovered = cache
            .get_or_fetch(|| async { Ok(CachedToken::new("t1".to_string(), 3600)) })
            .await
            .expect("token");
        assert_eq!(recovered, "t1");
    }
}
