use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;
use toml;

#[derive(Debug, Serialize, Deserialize, Default)]
struct CredentialsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Durable storage for the token pair, kept beside (not inside) the
/// session blob. Plain TOML key/value file under the config dir.
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

const ACCESS_TOKEN_KEY: &str = "access_token";
const REFRESH_TOKEN_KEY: &str = "refresh_token";

impl CredentialStore {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            credentials: HashMap::new(),
        }
    }

    pub fn load(&mut self) -> Result<()> {
        if self.path.exists() {
            let content = std::fs::read_to_string(&self.path)?;
            let creds_data: CredentialsData = toml::from_str(&content)?;
            self.credentials = creds_data.data;
        }
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let creds_data = CredentialsData {
            data: self.credentials.clone(),
        };
        let content = toml::to_string_pretty(&creds_data)?;
        std::fs::write(&self.path, content)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&String> {
        self.credentials.get(key)
    }

    pub fn set(&mut self, key: String, value: String) {
        self.credentials.insert(key, value);
    }

    pub fn remove(&mut self, key: &str) {
        self.credentials.remove(key);
    }

    pub fn get_access_token(&self) -> Option<&String> {
        self.get(ACCESS_TOKEN_KEY)
    }

    pub fn set_access_token(&mut self, token: String) {
        self.set(ACCESS_TOKEN_KEY.to_string(), token);
    }

    pub fn get_refresh_token(&self) -> Option<&String> {
        self.get(REFRESH_TOKEN_KEY)
    }

    pub fn set_refresh_token(&mut self, token: String) {
        self.set(REFRESH_TOKEN_KEY.to_string(), token);
    }

    /// Drop both tokens. Callers persist with [`CredentialStore::save`].
    pub fn clear_tokens(&mut self) {
        self.remove(ACCESS_TOKEN_KEY);
        self.remove(REFRESH_TOKEN_KEY);
    }

    pub fn has_access_token(&self) -> bool {
        self.get_access_token().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    #[test]
    fn test_credential_store_load_and_save() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut store = CredentialStore::new(path.clone());
        store.set_access_token("access-abc".to_string());
        store.set_refresh_token("refresh-def".to_string());
        store.save().unwrap();

        let mut loaded = CredentialStore::new(path);
        loaded.load().unwrap();
        assert_eq!(loaded.get_access_token(), Some(&"access-abc".to_string()));
        assert_eq!(loaded.get_refresh_token(), Some(&"refresh-def".to_string()));
    }

    #[test]
    fn test_load_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CredentialStore::new(dir.path().join("credentials.toml"));
        store.load().unwrap();
        assert!(!store.has_access_token());
        assert!(store.get_refresh_token().is_none());
    }

    #[test]
    fn test_clear_tokens_removes_both() {
        let file = NamedTempFile::new().unwrap();
        let path = file.path().to_path_buf();

        let mut store = CredentialStore::new(path.clone());
        store.set_access_token("access".to_string());
        store.set_refresh_token("refresh".to_string());
        store.clear_tokens();
        store.save().unwrap();

        let mut loaded = CredentialStore::new(path);
        loaded.load().unwrap();
        assert!(loaded.get_access_token().is_none());
        assert!(loaded.get_refresh_token().is_none());
    }
}
