use anyhow::Result;
use cinemix_models::{Session, User};
use std::path::PathBuf;
use tracing::debug;

use crate::credentials::CredentialStore;

/// Single source of truth for "who is logged in", durable across runs.
///
/// The session blob persists as JSON under the config dir. Reads are
/// synchronous and never touch the network; the store is optimistic about
/// credential freshness and leaves correctness to request-time failures in
/// the gateway.
pub struct SessionStore {
    path: PathBuf,
    session: Session,
}

impl SessionStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            session: Session::anonymous(),
        }
    }

    /// Hydrate from disk. A missing or unreadable blob yields the anonymous
    /// session; the `authenticated` flag is always re-derived from `user`
    /// rather than trusted from storage.
    pub fn load(&mut self) -> Result<()> {
        if !self.path.exists() {
            self.session = Session::anonymous();
            return Ok(());
        }
        let content = std::fs::read_to_string(&self.path)?;
        self.session = match serde_json::from_str::<Session>(&content) {
            Ok(session) => session.normalized(),
            Err(err) => {
                debug!("Discarding unreadable session blob: {}", err);
                Session::anonymous()
            }
        };
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.session)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    /// Set the session user, derive the flag and persist the whole blob.
    pub fn set_user(&mut self, user: Option<User>) -> Result<()> {
        self.session.set_user(user);
        self.save()
    }

    /// Clear the session and remove both stored tokens. The tokens live in
    /// the credential store beside the blob, so logout reaches over.
    pub fn logout(&mut self, credentials: &mut CredentialStore) -> Result<()> {
        self.session.set_user(None);
        self.save()?;
        credentials.clear_tokens();
        credentials.save()?;
        Ok(())
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn user(&self) -> Option<&User> {
        self.session.user.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User {
            id: 7,
            username: "rita".to_string(),
            email: "rita@example.com".to_string(),
        }
    }

    #[test]
    fn test_set_user_persists_and_derives_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut store = SessionStore::new(path.clone());
        assert!(!store.is_authenticated());
        store.set_user(Some(sample_user())).unwrap();
        assert!(store.is_authenticated());

        let mut reloaded = SessionStore::new(path);
        reloaded.load().unwrap();
        assert!(reloaded.is_authenticated());
        assert_eq!(reloaded.user().unwrap().username, "rita");
    }

    #[test]
    fn test_logout_clears_session_and_tokens() {
        let dir = tempfile::tempdir().unwrap();
        let session_path = dir.path().join("session.json");
        let creds_path = dir.path().join("credentials.toml");

        let mut creds = CredentialStore::new(creds_path.clone());
        creds.set_access_token("access".to_string());
        creds.set_refresh_token("refresh".to_string());
        creds.save().unwrap();

        let mut store = SessionStore::new(session_path.clone());
        store.set_user(Some(sample_user())).unwrap();
        store.logout(&mut creds).unwrap();

        assert!(!store.is_authenticated());
        assert!(store.user().is_none());

        let mut reloaded_session = SessionStore::new(session_path);
        reloaded_session.load().unwrap();
        assert!(!reloaded_session.is_authenticated());

        let mut reloaded_creds = CredentialStore::new(creds_path);
        reloaded_creds.load().unwrap();
        assert!(reloaded_creds.get_access_token().is_none());
        assert!(reloaded_creds.get_refresh_token().is_none());
    }

    #[test]
    fn test_load_missing_blob_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = SessionStore::new(dir.path().join("session.json"));
        store.load().unwrap();
        assert!(!store.is_authenticated());
        assert!(store.user().is_none());
    }

    #[test]
    fn test_load_corrupt_blob_is_anonymous() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "{not json").unwrap();

        let mut store = SessionStore::new(path);
        store.load().unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn test_load_rederives_flag_from_user() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        // A blob claiming authentication without a user must hydrate
        // unauthenticated.
        std::fs::write(&path, r#"{"user": null, "authenticated": true}"#).unwrap();

        let mut store = SessionStore::new(path);
        store.load().unwrap();
        assert!(!store.is_authenticated());
    }
}
