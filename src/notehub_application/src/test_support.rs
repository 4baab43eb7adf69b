//! Hand-rolled port implementations shared by the use case tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use notehub_core::{
    Account, AccountStore, AccountStoreError, DeliveryError, DispatchError, DispatchOutcome,
    Email, EmailDispatcher, EmailMessage, Password, PasswordHash, PasswordHasher,
    PasswordHasherError, RecoveryState, RecoveryToken,
};
use secrecy::Secret;
use tokio::sync::RwLock;

/// Map-backed account store mirroring the real store contracts: atomic
/// duplicate rejection and conditional token redemption.
#[derive(Clone, Default)]
pub struct MockAccountStore {
    accounts: Arc<RwLock<HashMap<Email, Account>>>,
}

impl MockAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn pending_recovery(&self, email: &Email) -> Option<RecoveryState> {
        let accounts = self.accounts.read().await;
        accounts.get(email).and_then(|a| a.recovery.clone())
    }
}

#[async_trait]
impl AccountStore for MockAccountStore {
    async fn add_account(&self, account: Account) -> Result<Account, AccountStoreError> {
        let mut accounts = self.accounts.write().await;
        if accounts.contains_key(&account.email) {
            return Err(AccountStoreError::EmailAlreadyInUse);
        }
        accounts.insert(account.email.clone(), account.clone());
        Ok(account)
    }

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let accounts = self.accounts.read().await;
        accounts
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

/// Reversible stand-in for the adaptive hasher; tests only need hash/verify
/// to agree with each other.
#[derive(Clone, Default)]
pub struct PlainHasher;

#[async_trait]
impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        Ok(PasswordHash::new(Secret::from(format!(
            "plain:{}",
            password.expose()
        ))))
    }

    async fn verify(&self, candidate: &Password, hash: &PasswordHash) -> bool {
        hash.expose() == format!("plain:{}", candidate.expose())
    }
}

/// Dispatcher stub that records every message and answers with a canned
/// outcome.
#[derive(Clone)]
pub struct StubDispatcher {
    pub sent: Arc<RwLock<Vec<EmailMessage>>>,
    outcome: StubOutcome,
}

#[derive(Clone)]
enum StubOutcome {
    Delivered,
    Disabled,
    Failing,
}

impl StubDispatcher {
    pub fn delivering() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            outcome: StubOutcome::Delivered,
        }
    }

    pub fn disabled() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            outcome: StubOutcome::Disabled,
        }
    }

    pub fn failing() -> Self {
        Self {
            sent: Arc::new(RwLock::new(Vec::new())),
            outcome: StubOutcome::Failing,
        }
    }

    pub async fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl EmailDispatcher for StubDispatcher {
    async fn dispatch(&self, message: &EmailMessage) -> Result<DispatchOutcome, DispatchError> {
        match self.outcome {
            StubOutcome::Delivered => {
                self.sent.write().await.push(message.clone());
                Ok(DispatchOutcome::Delivered { channel: "stub" })
            }
            StubOutcome::Disabled => Ok(DispatchOutcome::Disabled),
            StubOutcome::Failing => Err(DispatchError::AllChannelsFailed(
                DeliveryError::SendFailed("stub outage".to_owned()).to_string(),
            )),
        }
    }
}

pub fn email(address: &str) -> Email {
    Email::try_from(address).unwrap()
}

pub fn password(raw: &str) -> Password {
    Password::try_from(Secret::from(raw.to_owned())).unwrap()
}
