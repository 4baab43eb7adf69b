use async_trait::async_trait;
use secrecy::Secret;
use thiserror::Error;

use crate::domain::{
    account::{Account, SessionClaims},
    notification::EmailMessage,
    password::{Password, PasswordHash},
};

// PasswordHasher port trait and errors
#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("Failed to hash password: {0}")]
    HashingFailed(String),
}

/// Adaptive, salted one-way hashing primitive.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// Hash a password with a per-call salt embedded in the output. Failure
    /// here is fatal to the calling operation.
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError>;

    /// Verify a candidate against a stored hash. Comparison is delegated to
    /// the hashing library (constant-time); a malformed stored hash returns
    /// `false`, never an error.
    async fn verify(&self, candidate: &Password, hash: &PasswordHash) -> bool;
}

// SessionIssuer port trait and errors
#[derive(Debug, Error)]
pub enum SessionTokenError {
    /// Deliberately covers bad signature, expiry and malformed tokens alike,
    /// so callers cannot distinguish them.
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Failed to sign session token: {0}")]
    SigningFailed(String),
}

/// Produces and verifies signed, time-bounded session credentials.
pub trait SessionIssuer: Send + Sync {
    fn issue(&self, account: &Account) -> Result<Secret<String>, SessionTokenError>;

    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError>;
}

// Delivery channel and dispatcher port traits and errors
#[derive(Debug, Error)]
pub enum DeliveryError {
    #[error("Delivery failed: {0}")]
    SendFailed(String),
}

/// One concrete way of transmitting a notification.
#[async_trait]
pub trait DeliveryChannel: Send + Sync {
    fn name(&self) -> &'static str;

    async fn deliver(&self, message: &EmailMessage) -> Result<(), DeliveryError>;

    /// Startup connectivity probe. Channels without a cheap check report
    /// ready; a failure never disables the channel for delivery.
    async fn verify(&self) -> Result<(), DeliveryError> {
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DispatchOutcome {
    /// Message handed to the named channel.
    Delivered { channel: &'static str },
    /// Dispatch is globally disabled; treated as a successful no-op.
    Disabled,
}

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No delivery channel configured")]
    NoChannelConfigured,
    #[error("All delivery channels failed: {0}")]
    AllChannelsFailed(String),
}

/// Delivers notifications through a prioritized chain of channels.
#[async_trait]
pub trait EmailDispatcher: Send + Sync {
    async fn dispatch(&self, message: &EmailMessage) -> Result<DispatchOutcome, DispatchError>;
}
