use notehub_core::{Account, AccountStore, AccountStoreError, Email, Password, PasswordHasher};

/// Error types specific to the login use case
#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    /// Covers both unknown email and wrong password so responses cannot be
    /// used to enumerate accounts.
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

/// Login use case - verifies credentials and returns the account
pub struct LoginUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> LoginUseCase<'a, S, H>
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

    /// Execute the login use case. The caller issues a fresh session token on
    /// success; prior tokens stay valid until they expire.
    #[tracing::instrument(name = "LoginUseCase::execute", skip_all)]
    pub async fn execute(&self, email: Email, password: Password) -> Result<Account, LoginError> {
        let account = self
            .account_store
            .find_by_email(&email)
            .await
            .map_err(|e| match e {
                AccountStoreError::AccountNotFound => LoginError::InvalidCredentials,
                other => LoginError::UnexpectedError(other.to_string()),
            })?;

        if !self
            .password_hasher
            .verify(&password, &account.password_hash)
            .await
        {
            return Err(LoginError::InvalidCredentials);
        }

        Ok(account)
    }
}
