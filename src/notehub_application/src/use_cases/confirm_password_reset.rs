use chrono::Utc;
use notehub_core::{
    AccountStore, AccountStoreError, Password, PasswordHasher, PasswordHasherError, RecoveryToken,
};

/// Error types specific to the reset-confirm use case
#[derive(Debug, thiserror::Error)]
pub enum ConfirmPasswordResetError {
    #[error("Password must be at least 6 characters")]
    WeakPassword,
    /// Covers malformed, unknown, expired and already-consumed tokens alike.
    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
}

/// Reset-confirm use case - exchanges a recovery token for a new secret
pub struct ConfirmPasswordResetUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> ConfirmPasswordResetUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    pub fn new(account_store: &'a S, password_hasher: &'a H) -> Self {
        Self {
            account_store,
            password_hasher,
        }
    }

    /// Execute the reset-confirm use case.
    ///
    /// The store redeems the token and writes the new hash in one conditional
    /// update, so a token can never be replayed once consumed. No session
    /// token is issued; the user logs in again with the new password.
    #[tracing::instrument(name = "ConfirmPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        token: &str,
        new_password: Password,
    ) -> Result<(), ConfirmPasswordResetError> {
        if !new_password.meets_reset_policy() {
            return Err(ConfirmPasswordResetError::WeakPassword);
        }

        let token = RecoveryToken::try_from(token)
            .map_err(|_| ConfirmPasswordResetError::InvalidOrExpiredToken)?;

        let new_password_hash = self.password_hasher.hash(new_password).await?;

        self.account_store
            .redeem_recovery(&token, Utc::now(), new_password_hash)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountNotFound => {
                    ConfirmPasswordResetError::InvalidOrExpiredToken
                }
                other => ConfirmPasswordResetError::AccountStoreError(other),
            })?;

        Ok(())
    }
}
