use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

pub const API_KEY_ENV: &str = "TMDB_API_KEY";
pub const ACCESS_TOKEN_ENV: &str = "TMDB_ACCESS_TOKEN";

const API_KEY: &str = "tmdb_api_key";
const ACCESS_TOKEN: &str = "tmdb_access_token";

#[derive(Debug, Serialize, Deserialize, Default)]
struct CredentialsData {
    #[serde(flatten)]
    data: HashMap<String, String>,
}

/// Key/value credentials kept in `credentials.toml`
pub struct CredentialStore {
    path: PathBuf,
    credentials: HashMap<String, String>,
}

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

    pub fn get_api_key(&self) -> Option<&String> {
        self.get(API_KEY)
    }

    pub fn set_api_key(&mut self, key: String) {
        self.set(API_KEY.to_string(), key);
    }

    pub fn remove_api_key(&mut self) {
        self.remove(API_KEY);
    }

    pub fn get_access_token(&self) -> Option<&String> {
        self.get(ACCESS_TOKEN)
    }

    pub fn set_access_token(&mut self, token: String) {
        self.set(ACCESS_TOKEN.to_string(), token);
    }

    pub fn remove_access_token(&mut self) {
        self.remove(ACCESS_TOKEN);
    }
}

/// The two credential values sent with every catalog request.
///
/// Either may be absent; the catalog accepts an API key query parameter,
/// a bearer token, or both.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: Option<String>,
    pub access_token: Option<String>,
}

impl Credentials {
    pub fn new(api_key: Option<String>, access_token: Option<String>) -> Self {
        Self {
            api_key: api_key.filter(|s| !s.trim().is_empty()),
            access_token: access_token.filter(|s| !s.trim().is_empty()),
        }
    }

    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read credentials through a variable lookup, e.g. the process environment
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self::new(lookup(API_KEY_ENV), lookup(ACCESS_TOKEN_ENV))
    }

    /// Environment values win; the credential file fills whatever is missing
    pub fn resolve(env: Credentials, store: &CredentialStore) -> Self {
        Self::new(
            env.api_key.or_else(|| store.get_api_key().cloned()),
            env.access_token.or_else(|| store.get_access_token().cloned()),
        )
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() || self.access_token.is_some()
    }
}

// Never print secrets
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key.as_ref().map(|_| "***"))
            .field("access_token", &self.access_token.as_ref().map(|_| "***"))
            .finish()
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
        store.set_api_key("key123".to_string());
        store.set_access_token("token456".to_string());
        store.save().unwrap();

        let mut loaded_store = CredentialStore::new(path);
        loaded_store.load().unwrap();
        assert_eq!(loaded_store.get_api_key(), Some(&"key123".to_string()));
        assert_eq!(loaded_store.get_access_token(), Some(&"token456".to_string()));
    }

    #[test]
    fn test_credential_store_remove() {
        let mut store = CredentialStore::new(PathBuf::from("/tmp/test"));
        store.set("key1".to_string(), "value1".to_string());
        store.set("key2".to_string(), "value2".to_string());

        store.remove("key1");
        assert_eq!(store.get("key1"), None);
        assert_eq!(store.get("key2"), Some(&"value2".to_string()));
    }

    #[test]
    fn test_from_lookup_ignores_empty_values() {
        let creds = Credentials::from_lookup(|key| match key {
            API_KEY_ENV => Some("".to_string()),
            ACCESS_TOKEN_ENV => Some("bearer".to_string()),
            _ => None,
        });
        assert_eq!(creds.api_key, None);
        assert_eq!(creds.access_token, Some("bearer".to_string()));
        assert!(creds.is_configured());
    }

    #[test]
    fn test_resolve_prefers_environment() {
        let mut store = CredentialStore::new(PathBuf::from("/tmp/test"));
        store.set_api_key("file_key".to_string());
        store.set_access_token("file_token".to_string());

        let env = Credentials::new(Some("env_key".to_string()), None);
        let resolved = Credentials::resolve(env, &store);
        assert_eq!(resolved.api_key, Some("env_key".to_string()));
        assert_eq!(resolved.access_token, Some("file_token".to_string()));
    }

    #[test]
    fn test_debug_hides_secrets() {
        let creds = Credentials::new(Some("secret".to_string()), None);
        let printed = format!("{:?}", creds);
        assert!(!printed.contains("secret"));
        assert!(!Credentials::default().is_configured());
    }
}
