use async_trait::async_trait;
use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::domain::{
    account::{Account, RecoveryState},
    email::Email,
    password::PasswordHash,
    recovery_token::RecoveryToken,
};

// AccountStore port trait and errors
#[derive(Debug, Error)]
pub enum AccountStoreError {
    #[error("Email already in use")]
    EmailAlreadyInUse,
    #[error("Account not found")]
    AccountNotFound,
    #[error("Unexpected error {0}")]
    UnexpectedError(String),
}

impl PartialEq for AccountStoreError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::EmailAlreadyInUse, Self::EmailAlreadyInUse) => true,
            (Self::AccountNotFound, Self::AccountNotFound) => true,
            (Self::UnexpectedError(_), Self::UnexpectedError(_)) => true,
            _ => false,
        }
    }
}

/// Durable mapping from account identity to hashed secret and recovery-token
/// state.
///
/// Uniqueness and recovery-token redemption are enforced atomically by the
/// implementation; callers must not rely on their own pre-checks under
/// concurrent access.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Persist a new account. Fails with [`AccountStoreError::EmailAlreadyInUse`]
    /// when the email is taken; the store-level constraint is authoritative.
    async fn add_account(&self, account: Account) -> Result<Account, AccountStoreError>;

    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError>;

    /// Persist a fresh recovery token/expiry pair, replacing any pending one
    /// (last-writer-wins). Creation-time validation rules do not apply here.
    async fn store_recovery(
        &self,
        email: &Email,
        recovery: RecoveryState,
    ) -> Result<(), AccountStoreError>;

    /// Redeem a recovery token: match the stored token with expiry strictly
    /// greater than `now`, and in the same write set the new password hash and
    /// clear the token/expiry pair. Unknown, expired and already-consumed
    /// tokens all yield [`AccountStoreError::AccountNotFound`].
    async fn redeem_recovery(
        &self,
        token: &RecoveryToken,
        now: DateTime<Utc>,
        new_password_hash: PasswordHash,
    ) -> Result<Account, AccountStoreError>;
}
