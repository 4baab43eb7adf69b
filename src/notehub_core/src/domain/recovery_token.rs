use rand::RngCore;
use thiserror::Error;

/// Hex length of a rendered token: 32 random bytes.
const TOKEN_HEX_LEN: usize = 64;

#[derive(Debug, Error, PartialEq)]
pub enum RecoveryTokenError {
    #[error("Malformed recovery token")]
    Malformed,
}

/// Single-use, time-bounded opaque secret proving control of an account's
/// registered email.
///
/// Issued from a CSPRNG, never derived from predictable inputs. Collision
/// probability at 256 bits is treated as negligible and not checked against
/// the store.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RecoveryToken(String);

impl RecoveryToken {
    /// Issue a fresh token: 32 random bytes, hex-encoded.
    pub fn issue() -> Self {
        let mut bytes = [0u8; TOKEN_HEX_LEN / 2];
        rand::rng().fill_bytes(&mut bytes);
        Self(hex::encode(bytes))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for RecoveryToken {
    type Error = RecoveryTokenError;

    /// Parse an inbound token string. Anything that is not exactly 64 hex
    /// characters can never match a stored token, so it is rejected up front.
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        if value.len() != TOKEN_HEX_LEN || !value.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(RecoveryTokenError::Malformed);
        }
        Ok(Self(value.to_ascii_lowercase()))
    }
}
