use crate::common::TokenPair;
use crate::error::AuthError;
use std::fs;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard};

pub struct TokenStore {
    session_path: PathBuf,
    // In-memory copy of the stored pair. All reads and write-throughs go
    // through this lock so concurrent in-flight requests see the pair
    // replaced or removed atomically.
    cached: Mutex<Option<TokenPair>>,
}

impl TokenStore {
    pub fn new() -> Result<Self, AuthError> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| AuthError::Configuration("Could not find cache directory".to_string()))?
            .join("replay");

        Self::at_path(cache_dir.join("session.json"))
    }

    /// Open a store backed by an explicit file path. Used directly by tests
    /// and by hosts that manage their own storage location.
    pub fn at_path(session_path: PathBuf) -> Result<Self, AuthError> {
        if let Some(dir) = session_path.parent() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to create session directory: {}", e))
                })?;
            }
        }

        // A missing or unreadable file simply means no session; a corrupt
        // one is treated the same way and overwritten on the next save.
        let cached = fs::read_to_string(&session_path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok());

        Ok(Self {
            session_path,
            cached: Mutex::new(cached),
        })
    }

    pub fn access_token(&self) -> Option<String> {
        self.lock()
            .as_ref()
            .map(|pair| pair.access_token.clone())
            .filter(|token| !is_blank(token))
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.lock()
            .as_ref()
            .map(|pair| pair.refresh_token.clone())
            .filter(|token| !is_blank(token))
    }

    /// True only when both tokens are present and non-blank.
    pub fn has_valid_session(&self) -> bool {
        self.lock()
            .as_ref()
            .is_some_and(|pair| !is_blank(&pair.access_token) && !is_blank(&pair.refresh_token))
    }

    /// Replace the stored pair. The file write happens under the lock so a
    /// concurrent reader never observes a half-updated pair.
    pub fn save(&self, tokens: &TokenPair) -> Result<(), AuthError> {
        let mut cached = self.lock();

        let json = serde_json::to_string_pretty(tokens)?;
        fs::write(&self.session_path, json)
            .map_err(|e| AuthError::TokenStorage(format!("Failed to save session: {}", e)))?;

        // Set permissions to 0600 (read/write for owner only)
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = fs::metadata(&self.session_path)
                .map_err(|e| {
                    AuthError::TokenStorage(format!("Failed to get file permissions: {}", e))
                })?
                .permissions();
            perms.set_mode(0o600);
            fs::set_permissions(&self.session_path, perms).map_err(|e| {
                AuthError::TokenStorage(format!("Failed to set file permissions: {}", e))
            })?;
        }

        *cached = Some(tokens.clone());
        Ok(())
    }

    /// Remove both tokens. The in-memory pair is dropped even if deleting
    /// the file fails, so a cleared session never resurrects.
    pub fn clear(&self) -> Result<(), AuthError> {
        let mut cached = self.lock();
        *cached = None;

        if self.session_path.exists() {
            fs::remove_file(&self.session_path)
                .map_err(|e| AuthError::TokenStorage(format!("Failed to delete session: {}", e)))?;
        }
        Ok(())
    }

    fn lock(&self) -> MutexGuard<'_, Option<TokenPair>> {
        self.cached.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    fn temp_store() -> TokenStore {
        static COUNTER: AtomicU32 = AtomicU32::new(0);
        let unique = format!(
            "replay-token-store-{}-{}",
            std::process::id(),
            COUNTER.fetch_add(1, Ordering::SeqCst)
        );
        let path = std::env::temp_dir().join(unique).join("session.json");
        TokenStore::at_path(path).expect("temp store")
    }

    #[test]
    fn save_then_read_back() {
        let store = temp_store();
        store.save(&TokenPair::new("a1", "r1")).expect("save");

        assert_eq!(store.access_token().as_deref(), Some("a1"));
        assert_eq!(store.refresh_token().as_deref(), Some("r1"));
        assert!(store.has_valid_session());
    }

    #[test]
    fn survives_reopen_from_disk() {
        let store = temp_store();
        store.save(&TokenPair::new("a1", "r1")).expect("save");

        let reopened = TokenStore::at_path(store.session_path.clone()).expect("reopen");
        assert_eq!(reopened.access_token().as_deref(), Some("a1"));
        assert!(reopened.has_valid_session());
    }

    #[test]
    fn clear_removes_both_tokens() {
        let store = temp_store();
        store.save(&TokenPair::new("a1", "r1")).expect("save");
        store.clear().expect("clear");

        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
        assert!(!store.has_valid_session());
        assert!(!store.session_path.exists());
    }

    #[test]
    fn blank_access_token_is_not_a_valid_session() {
        let store = temp_store();
        store.save(&TokenPair::new("", "abc")).expect("save");

        assert!(!store.has_valid_session());
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token().as_deref(), Some("abc"));
    }

    #[test]
    fn whitespace_tokens_are_treated_as_missing() {
        let store = temp_store();
        store.save(&TokenPair::new("   ", "\n")).expect("save");

        assert!(!store.has_valid_session());
        assert_eq!(store.access_token(), None);
        assert_eq!(store.refresh_token(), None);
    }

    #[test]
    fn empty_store_has_no_session() {
        let store = temp_store();
        assert!(!store.has_valid_session());
        assert_eq!(store.access_token(), None);
    }

    #[test]
    fn corrupt_file_reads_as_no_session() {
        let store = temp_store();
        std::fs::write(&store.session_path, "{not json").expect("write");

        let reopened = TokenStore::at_path(store.session_path.clone()).expect("reopen");
        assert!(!reopened.has_valid_session());
    }
}
