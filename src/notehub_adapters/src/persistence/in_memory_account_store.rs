use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use notehub_core::{
    Account, AccountStore, AccountStoreError, Email, PasswordHash, RecoveryState, RecoveryToken,
};
use tokio::sync::RwLock;

/// Map-backed account store for tests and local development.
///
/// Each operation takes the lock once and mutates synchronously, so the
/// duplicate check and the redeem-and-clear write have the same atomicity the
/// Postgres store gets from its constraint and conditional update.
#[derive(Default)]
pub struct InMemoryAccountStore {
    accounts: RwLock<HashMap<Email, Account>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountStore for InMemoryAccountStore {
    async fn add_account(&self, account: Account) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AccountStoreError::EmailAlreadyInUse);
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        self.accounts
            .read()
            .await
            .get(email)
            .cloned()
            .ok_or(AccountStoreError::AccountNotFound)
    }

    async fn store_recovery(
        &self,
        email: &Email,
        recovery: RecoveryState,
    ) -> Result<(), AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .get_mut(email)
            .ok_or(AccountStoreError::AccountNotFound)?;
        account.recovery = Some(recovery);
        account.updated_at = Utc::now();
        Ok(())
    }

    async fn redeem_recovery(
        &self,
        token: &RecoveryToken,
        now: DateTime<Utc>,
        new_password_hash: PasswordHash,
    ) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        let account = accounts
            .values_mut()
            .find(|a| {
                a.recovery
                    .as_ref()
                    .is_some_and(|r| &r.token == token && r.is_valid_at(now))
            })
            .ok_or(AccountStoreError::AccountNotFound)?;

        account.password_hash = new_password_hash;
        account.recovery = None;
        account.updated_at = now;
        Ok(account.clone())
    }
}
