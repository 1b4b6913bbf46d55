use std::collections::HashMap;
use std::sync::Mutex;

use keyring::Entry;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{info, warn};

use crate::error::ChefsMenuError;
use crate::store::KeyValueStore;

/// Store key for the remembered email.
pub const EMAIL_KEY: &str = "email";
/// Plaintext password key written by older builds. Only ever deleted.
pub const LEGACY_PASSWORD_KEY: &str = "password";

const KEYRING_SERVICE: &str = "chefsmenu-login";

/// Secret storage for the remembered password, keyed by account (email).
pub trait CredentialVault {
    fn get(&self, account: &str) -> Result<Option<String>, ChefsMenuError>;
    fn set(&self, account: &str, secret: &str) -> Result<(), ChefsMenuError>;
    /// Deleting a missing entry is not an error.
    fn delete(&self, account: &str) -> Result<(), ChefsMenuError>;
}

/// Platform credential store via `keyring`: Keychain on macOS and iOS,
/// Credential Manager on Windows, the kernel keyring on Linux.
pub struct KeyringVault;

impl KeyringVault {
    fn entry(account: &str) -> Result<Entry, ChefsMenuError> {
        Entry::new(KEYRING_SERVICE, account).map_err(|e| {
            warn!("Failed to create keyring entry for {}: {}", account, e);
            ChefsMenuError::Storage(e.to_string())
        })
    }
}

impl CredentialVault for KeyringVault {
    fn get(&self, account: &str) -> Result<Option<String>, ChefsMenuError> {
        match Self::entry(account)?.get_password() {
            Ok(password) => Ok(Some(password)),
            Err(keyring::Error::NoEntry) => Ok(None),
            Err(e) => {
                warn!("Failed to get password for {}: {}", account, e);
                Err(ChefsMenuError::Storage(e.to_string()))
            }
        }
    }

    fn set(&self, account: &str, secret: &str) -> Result<(), ChefsMenuError> {
        Self::entry(account)?.set_password(secret).map_err(|e| {
            warn!("Failed to set password for {}: {}", account, e);
            ChefsMenuError::Storage(e.to_string())
        })
    }

    fn delete(&self, account: &str) -> Result<(), ChefsMenuError> {
        match Self::entry(account)?.delete_credential() {
            Ok(()) | Err(keyring::Error::NoEntry) => Ok(()),
            Err(e) => {
                warn!("Failed to delete credential for {}: {}", account, e);
                Err(ChefsMenuError::Storage(e.to_string()))
            }
        }
    }
}

/// In-memory vault for tests.
#[derive(Debug, Default)]
pub struct MemoryVault {
    secrets: Mutex<HashMap<String, String>>,
}

impl MemoryVault {
    pub fn new() -> Self {
        Self::default()
    }

    fn secrets(&self) -> std::sync::MutexGuard<'_, HashMap<String, String>> {
        self.secrets.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl CredentialVault for MemoryVault {
    fn get(&self, account: &str) -> Result<Option<String>, ChefsMenuError> {
        Ok(self.secrets().get(account).cloned())
    }

    fn set(&self, account: &str, secret: &str) -> Result<(), ChefsMenuError> {
        self.secrets().insert(account.to_string(), secret.to_string());
        Ok(())
    }

    fn delete(&self, account: &str) -> Result<(), ChefsMenuError> {
        self.secrets().remove(account);
        Ok(())
    }
}

/// Credentials used to pre-fill the login form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavedLogin {
    pub email: String,
    pub password: String,
}

/// "Remember me" persistence: email in the key-value store, password in
/// the credential vault. The two are written and cleared as a pair.
pub struct RememberedLogin<S, V> {
    kv: S,
    vault: V,
}

impl<S: KeyValueStore, V: CredentialVault> RememberedLogin<S, V> {
    pub fn new(kv: S, vault: V) -> Self {
        Self { kv, vault }
    }

    fn stored_email(&self) -> Option<String> {
        self.kv
            .get(EMAIL_KEY)
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .filter(|s| !s.is_empty())
    }

    /// Save credentials after a successful login with "remember me" set.
    pub fn remember(&self, email: &str, password: &str) -> Result<(), ChefsMenuError> {
        if let Some(previous) = self.stored_email().filter(|p| p != email) {
            self.vault.delete(&previous)?;
        }
        self.vault.set(email, password)?;
        self.kv.set(EMAIL_KEY, Value::String(email.to_string()));
        self.kv.delete(LEGACY_PASSWORD_KEY);
        self.kv.save()?;
        info!("Remembered login for {}", email);
        Ok(())
    }

    /// Clear any remembered credentials.
    pub fn forget(&self) -> Result<(), ChefsMenuError> {
        if let Some(email) = self.stored_email() {
            self.vault.delete(&email)?;
        }
        let had_email = self.kv.delete(EMAIL_KEY);
        let had_legacy = self.kv.delete(LEGACY_PASSWORD_KEY);
        if had_email || had_legacy {
            self.kv.save()?;
            info!("Cleared remembered login");
        }
        Ok(())
    }

    /// Credentials for pre-fill, only when both halves are present.
    ///
    /// A plaintext password left by an older build is moved into the vault.
    pub fn remembered(&self) -> Option<SavedLogin> {
        let email = self.stored_email()?;

        let legacy = self
            .kv
            .get(LEGACY_PASSWORD_KEY)
            .and_then(|v| v.as_str().map(|s| s.to_string()))
            .filter(|s| !s.is_empty());
        if let Some(password) = legacy {
            match self.remember(&email, &password) {
                Ok(()) => info!("Migrated plaintext password for {} to the vault", email),
                Err(e) => warn!("Failed to migrate plaintext password: {}", e),
            }
            return Some(SavedLogin { email, password });
        }

        match self.vault.get(&email) {
            Ok(Some(password)) => Some(SavedLogin { email, password }),
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to load credentials: {}", e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use std::sync::Arc;

    #[test]
    fn test_keyring_vault_reads_back_through_a_new_handle() {
        let account = format!("test-{}@example.com", crate::recipe::generate_recipe_id());
        if let Err(e) = KeyringVault.set(&account, "Password123") {
            // No credential service in this environment (e.g. a sandboxed CI box).
            eprintln!("skipping keyring round trip: {}", e);
            return;
        }

        let fetched = KeyringVault.get(&account);
        KeyringVault.delete(&account).unwrap();

        assert_eq!(fetched.unwrap().as_deref(), Some("Password123"));
        assert!(KeyringVault.get(&account).unwrap().is_none());
    }

    fn make_login() -> (RememberedLogin<Arc<MemoryStore>, MemoryVault>, Arc<MemoryStore>) {
        let kv = Arc::new(MemoryStore::new());
        (RememberedLogin::new(kv.clone(), MemoryVault::new()), kv)
    }

    #[test]
    fn test_remember_then_prefill() {
        let (login, kv) = make_login();
        login.remember("chef@example.com", "Password123").unwrap();

        let saved = login.remembered().unwrap();
        assert_eq!(saved.email, "chef@example.com");
        assert_eq!(saved.password, "Password123");
        // The password never lands in the key-value store.
        assert!(kv.get(LEGACY_PASSWORD_KEY).is_none());
    }

    #[test]
    fn test_forget_clears_both() {
        let (login, kv) = make_login();
        login.remember("chef@example.com", "Password123").unwrap();
        login.forget().unwrap();

        assert!(login.remembered().is_none());
        assert!(kv.get(EMAIL_KEY).is_none());
        assert!(login.vault.get("chef@example.com").unwrap().is_none());
    }

    #[test]
    fn test_forget_when_nothing_stored() {
        let (login, _kv) = make_login();
        login.forget().unwrap();
        assert!(login.remembered().is_none());
    }

    #[test]
    fn test_email_without_password_is_not_prefilled() {
        let (login, kv) = make_login();
        kv.set(EMAIL_KEY, serde_json::json!("chef@example.com"));
        assert!(login.remembered().is_none());
    }

    #[test]
    fn test_changing_account_drops_old_secret() {
        let (login, _kv) = make_login();
        login.remember("old@example.com", "a").unwrap();
        login.remember("new@example.com", "b").unwrap();

        assert!(login.vault.get("old@example.com").unwrap().is_none());
        assert_eq!(login.remembered().unwrap().email, "new@example.com");
    }

    #[test]
    fn test_legacy_plaintext_password_is_migrated() {
        let (login, kv) = make_login();
        kv.set(EMAIL_KEY, serde_json::json!("chef@example.com"));
        kv.set(LEGACY_PASSWORD_KEY, serde_json::json!("Password123"));

        let saved = login.remembered().unwrap();
        assert_eq!(saved.password, "Password123");
        assert!(kv.get(LEGACY_PASSWORD_KEY).is_none());
        assert_eq!(
            login.vault.get("chef@example.com").unwrap().as_deref(),
            Some("Password123")
        );
    }
}
