use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use super::email::Email;
use super::password::PasswordHash;
use super::recovery_token::RecoveryToken;

/// A pending recovery token stays valid for one hour.
pub const RECOVERY_TOKEN_TTL_SECONDS: i64 = 3600;

#[derive(Debug, Error, PartialEq)]
pub enum AccountError {
    #[error("Name is required")]
    MissingName,
    #[error("Phone is required")]
    MissingPhone,
    #[error("Unknown role")]
    UnknownRole,
}

/// Non-empty contact phone number, required when the account is created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Phone {
    type Error = AccountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AccountError::MissingPhone);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Student,
    Faculty,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Faculty => "faculty",
        }
    }
}

impl TryFrom<&str> for Role {
    type Error = AccountError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "student" => Ok(Role::Student),
            "faculty" => Ok(Role::Faculty),
            _ => Err(AccountError::UnknownRole),
        }
    }
}

/// Pending password-recovery state.
///
/// Token and expiry live in one value object so they are always set and
/// cleared together; "token without expiry" is unrepresentable.
#[derive(Debug, Clone)]
pub struct RecoveryState {
    pub token: RecoveryToken,
    pub expires_at: DateTime<Utc>,
}

impl RecoveryState {
    /// Issue a fresh token expiring [`RECOVERY_TOKEN_TTL_SECONDS`] from `now`.
    pub fn issue(now: DateTime<Utc>) -> Self {
        Self {
            token: RecoveryToken::issue(),
            expires_at: now + Duration::seconds(RECOVERY_TOKEN_TTL_SECONDS),
        }
    }

    /// A token is usable only strictly before its expiry instant.
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        self.expires_at > now
    }
}

/// Durable account record. The raw password never appears here.
#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    pub name: String,
    pub email: Email,
    pub phone: Phone,
    pub role: Role,
    pub password_hash: PasswordHash,
    pub recovery: Option<RecoveryState>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn new(
        name: String,
        email: Email,
        phone: Phone,
        role: Role,
        password_hash: PasswordHash,
    ) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            role,
            password_hash,
            recovery: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Public projection returned to HTTP callers.
    pub fn view(&self) -> AccountView {
        AccountView {
            id: self.id,
            name: self.name.clone(),
            email: self.email.expose().to_owned(),
            phone: self.phone.as_str().to_owned(),
            role: self.role,
        }
    }
}

/// Public account projection, safe to serialize into responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub role: Role,
}

/// Claims carried by a session credential.
///
/// Stateless: a session is verified by signature and expiry only, never
/// revoked server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionClaims {
    /// Account id.
    pub sub: Uuid,
    pub role: Role,
    pub name: String,
    pub phone: String,
    pub iat: i64,
    pub exp: i64,
}
