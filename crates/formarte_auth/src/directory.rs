// --- File: crates/formarte_auth/src/directory.rs ---
//! Account directory mirrored to one key-value entry, written before the
//! in-memory list is replaced.

use formarte_storage::SharedStore;
use tracing::{debug, info, warn};

use crate::error::AuthError;
use crate::models::Account;
use crate::password::{hash_password, verify_password};
use crate::validation::normalize_email;

pub struct AccountDirectory {
    kv: SharedStore,
    key: String,
    accounts: Vec<Account>,
}

impl std::fmt::Debug for AccountDirectory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccountDirectory")
            .field("key", &self.key)
            .field("accounts", &self.accounts.len())
            .finish()
    }
}

impl AccountDirectory {
    /// Unreadable or corrupt entries load as an empty directory.
    pub async fn load(kv: SharedStore, key: impl Into<String>) -> Self {
        let key = key.into();
        let accounts = match kv.get(&key).await {
            Ok(Some(raw)) => serde_json::from_str::<Vec<Account>>(&raw).unwrap_or_else(|e| {
                warn!("Could not parse stored accounts ({}), starting empty", e);
                Vec::new()
            }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read '{}' from storage: {}", key, e);
                Vec::new()
            }
        };
        info!("Loaded {} accounts from '{}'", accounts.len(), key);
        Self { kv, key, accounts }
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn find(&self, email: &str) -> Option<&Account> {
        let email = normalize_email(email);
        self.accounts.iter().find(|a| a.email == email)
    }

    pub async fn register(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<Account, AuthError> {
        if self.find(email).is_some() {
            return Err(AuthError::EmailTaken);
        }
        let account = Account {
            name: name.trim().to_string(),
            email: normalize_email(email),
            password_hash: hash_password(password),
        };
        let mut next = self.accounts.clone();
        next.push(account.clone());
        self.persist(&next).await?;
        self.accounts = next;
        info!("Registered account {}", account.email);
        Ok(account)
    }

    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Account, AuthError> {
        self.find(email)
            .filter(|a| verify_password(password, &a.password_hash))
            .ok_or(AuthError::InvalidCredentials)
    }

    pub async fn reset_password(&mut self, email: &str, password: &str) -> Result<(), AuthError> {
        let email = normalize_email(email);
        let index = self
            .accounts
            .iter()
            .position(|a| a.email == email)
            .ok_or(AuthError::AccountNotFound)?;
        let mut next = self.accounts.clone();
        next[index].password_hash = hash_password(password);
        self.persist(&next).await?;
        self.accounts = next;
        info!("Password reset for {}", email);
        Ok(())
    }

    async fn persist(&self, accounts: &[Account]) -> Result<(), AuthError> {
        let raw = serde_json::to_string(accounts)?;
        self.kv.set(&self.key, raw).await?;
        debug!("Persisted {} accounts to '{}'", accounts.len(), self.key);
        Ok(())
    }
}
