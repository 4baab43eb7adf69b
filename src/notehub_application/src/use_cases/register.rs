use notehub_core::{
    Account, AccountStore, AccountStoreError, Email, Password, PasswordHasher,
    PasswordHasherError, Phone, Role,
};

/// Error types specific to the register use case
#[derive(Debug, thiserror::Error)]
pub enum RegisterError {
    #[error("Email already in use")]
    EmailAlreadyInUse,
    #[error("Account store error: {0}")]
    AccountStoreError(AccountStoreError),
    #[error("Password hasher error: {0}")]
    PasswordHasherError(#[from] PasswordHasherError),
}

impl From<AccountStoreError> for RegisterError {
    fn from(error: AccountStoreError) -> Self {
        match error {
            AccountStoreError::EmailAlreadyInUse => RegisterError::EmailAlreadyInUse,
            other => RegisterError::AccountStoreError(other),
        }
    }
}

/// Register use case - creates a new account with a hashed secret
pub struct RegisterUseCase<'a, S, H>
where
    S: AccountStore + ?Sized,
    H: PasswordHasher + ?Sized,
{
    account_store: &'a S,
    password_hasher: &'a H,
}

impl<'a, S, H> RegisterUseCase<'a, S, H>
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

    /// Execute the register use case.
    ///
    /// The initial lookup is a fast-path rejection only; the store's unique
    /// constraint on email is what guarantees uniqueness under concurrent
    /// registrations.
    #[tracing::instrument(name = "RegisterUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        name: String,
        email: Email,
        password: Password,
        phone: Phone,
        role: Role,
    ) -> Result<Account, RegisterError> {
        if self.account_store.find_by_email(&email).await.is_ok() {
            return Err(RegisterError::EmailAlreadyInUse);
        }

        let password_hash = self.password_hasher.hash(password).await?;
        let account = Account::new(name, email, phone, role, password_hash);

        Ok(self.account_store.add_account(account).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{MockAccountStore, PlainHasher, email, password};

    #[tokio::test]
    async fn register_creates_account_with_hashed_secret() {
        let store = MockAccountStore::new();
        let hasher = PlainHasher;
        let use_case = RegisterUseCase::new(&store, &hasher);

        let account = use_case
            .execute(
                "Ann".to_owned(),
                email("ann@x.com"),
                password("secret1"),
                Phone::try_from("5551234567").unwrap(),
                Role::Student,
            )
            .await
            .unwrap();

        assert_eq!(account.role, Role::Student);
        assert_eq!(account.password_hash.expose(), "plain:secret1");
        assert!(account.recovery.is_none());

        let stored = store.find_by_email(&email("ann@x.com")).await.unwrap();
        assert_eq!(stored.id, account.id);
    }

    #[tokio::test]
    async fn second_registration_with_same_email_is_rejected() {
        let store = MockAccountStore::new();
        let hasher = PlainHasher;
        let use_case = RegisterUseCase::new(&store, &hasher);

        let register = |pw: &'static str| {
            use_case.execute(
                "Ann".to_owned(),
                email("ann@x.com"),
                password(pw),
                Phone::try_from("5551234567").unwrap(),
                Role::Faculty,
            )
        };

        register("secret1").await.unwrap();
        let second = register("other77").await;
        assert!(matches!(second, Err(RegisterError::EmailAlreadyInUse)));
    }

    #[tokio::test]
    async fn concurrent_registrations_persist_exactly_one_account() {
        let store = MockAccountStore::new();
        let hasher = PlainHasher;
        let use_case = RegisterUseCase::new(&store, &hasher);

        let register = |pw: &'static str| {
            use_case.execute(
                "Ann".to_owned(),
                email("ann@x.com"),
                password(pw),
                Phone::try_from("5551234567").unwrap(),
                Role::Student,
            )
        };

        // Both attempts can pass the advisory lookup; the store's atomic
        // insert decides the winner.
        let (first, second) = tokio::join!(register("secret1"), register("other77"));

        let failures = [&first, &second]
            .iter()
            .filter(|r| matches!(r, Err(RegisterError::EmailAlreadyInUse)))
            .count();
        assert_eq!(failures, 1);

        let winner = first.or(second).unwrap();
        let stored = store.find_by_email(&email("ann@x.com")).await.unwrap();
        assert_eq!(stored.id, winner.id);
        assert_eq!(stored.password_hash.expose(), winner.password_hash.expose());
    }
}
