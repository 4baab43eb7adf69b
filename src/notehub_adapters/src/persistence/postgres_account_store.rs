use async_trait::async_trait;
use chrono::{DateTime, Utc};
use notehub_core::{
    Account, AccountStore, AccountStoreError, Email, PasswordHash, Phone, RecoveryState,
    RecoveryToken, Role,
};
use secrecy::Secret;
use sqlx::{PgPool, Pool, Postgres};
use uuid::Uuid;

pub struct PostgresAccountStore {
    pool: PgPool,
}

impl PostgresAccountStore {
    pub fn new(pool: Pool<Postgres>) -> Self {
        PostgresAccountStore { pool }
    }
}

#[async_trait]
impl AccountStore for PostgresAccountStore {
    /// The unique index on `email` is the authoritative duplicate check.
    #[tracing::instrument(name = "Adding account to PostgreSQL", skip_all)]
    async fn add_account(&self, account: Account) -> Result<Account, AccountStoreError> {
        let query = sqlx::query(
            r#"
                INSERT INTO accounts
                    (id, name, email, phone, role, password_hash, created_at, updated_at)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            "#,
        )
        .bind(account.id)
        .bind(&account.name)
        .bind(account.email.expose())
        .bind(account.phone.as_str())
        .bind(account.role.as_str())
        .bind(account.password_hash.expose())
        .bind(account.created_at)
        .bind(account.updated_at);

        query.execute(&self.pool).await.map_err(|e| {
            if let Some(db_err) = e.as_database_error() {
                if db_err.constraint().is_some() {
                    return AccountStoreError::EmailAlreadyInUse;
                }
            }
            AccountStoreError::UnexpectedError(e.to_string())
        })?;

        Ok(account)
    }

    #[tracing::instrument(name = "Retrieving account from PostgreSQL", skip_all)]
    async fn find_by_email(&self, email: &Email) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                SELECT id, name, email, phone, role, password_hash,
                       recovery_token, recovery_expires_at, created_at, updated_at
                FROM accounts
                WHERE email = $1
            "#,
        )
        .bind(email.expose())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        row.into_account()
    }

    #[tracing::instrument(name = "Storing recovery token in PostgreSQL", skip_all)]
    async fn store_recovery(
        &self,
        email: &Email,
        recovery: RecoveryState,
    ) -> Result<(), AccountStoreError> {
        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET recovery_token = $1, recovery_expires_at = $2, updated_at = $3
                WHERE email = $4
            "#,
        )
        .bind(recovery.token.as_str())
        .bind(recovery.expires_at)
        .bind(Utc::now())
        .bind(email.expose())
        .execute(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        if result.rows_affected() == 0 {
            return Err(AccountStoreError::AccountNotFound);
        }

        Ok(())
    }

    /// One conditional update writes the new hash and clears the token/expiry
    /// pair, so a consumed or expired token can never be replayed.
    #[tracing::instrument(name = "Redeeming recovery token in PostgreSQL", skip_all)]
    async fn redeem_recovery(
        &self,
        token: &RecoveryToken,
        now: DateTime<Utc>,
        new_password_hash: PasswordHash,
    ) -> Result<Account, AccountStoreError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
                UPDATE accounts
                SET password_hash = $1,
                    recovery_token = NULL,
                    recovery_expires_at = NULL,
                    updated_at = $2
                WHERE recovery_token = $3 AND recovery_expires_at > $2
                RETURNING id, name, email, phone, role, password_hash,
                          recovery_token, recovery_expires_at, created_at, updated_at
            "#,
        )
        .bind(new_password_hash.expose())
        .bind(now)
        .bind(token.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let Some(row) = row else {
            return Err(AccountStoreError::AccountNotFound);
        };

        row.into_account()
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    id: Uuid,
    name: String,
    email: String,
    phone: String,
    role: String,
    password_hash: String,
    recovery_token: Option<String>,
    recovery_expires_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AccountRow {
    fn into_account(self) -> Result<Account, AccountStoreError> {
        let email = Email::try_from(self.email.as_str())
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let phone = Phone::try_from(self.phone.as_str())
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
        let role = Role::try_from(self.role.as_str())
            .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;

        let recovery = match (self.recovery_token, self.recovery_expires_at) {
            (Some(token), Some(expires_at)) => {
                let token = RecoveryToken::try_from(token.as_str())
                    .map_err(|e| AccountStoreError::UnexpectedError(e.to_string()))?;
                Some(RecoveryState { token, expires_at })
            }
            _ => None,
        };

        Ok(Account {
            id: self.id,
            name: self.name,
            email,
            phone,
            role,
            password_hash: PasswordHash::new(Secret::from(self.password_hash)),
            recovery,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
