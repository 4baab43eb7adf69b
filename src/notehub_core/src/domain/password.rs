use secrecy::{ExposeSecret, Secret};
use thiserror::Error;

/// Minimum length enforced when a password is chosen through the reset flow.
pub const MIN_RESET_PASSWORD_LEN: usize = 6;

#[derive(Debug, Error, PartialEq)]
pub enum PasswordError {
    #[error("Password is required")]
    Missing,
}

/// Raw password as submitted by a caller. Never persisted.
///
/// Parsing only requires the value to be non-empty; the stricter length policy
/// applies to newly chosen passwords and is checked by the reset-confirm use
/// case, so an authentication attempt with a short (wrong) password still
/// fails as an invalid credential rather than invalid input.
#[derive(Clone)]
pub struct Password(Secret<String>);

impl Password {
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }

    pub fn meets_reset_policy(&self) -> bool {
        self.expose().len() >= MIN_RESET_PASSWORD_LEN
    }
}

impl TryFrom<Secret<String>> for Password {
    type Error = PasswordError;

    fn try_from(value: Secret<String>) -> Result<Self, Self::Error> {
        if value.expose_secret().is_empty() {
            return Err(PasswordError::Missing);
        }
        Ok(Self(value))
    }
}

impl AsRef<Secret<String>> for Password {
    fn as_ref(&self) -> &Secret<String> {
        &self.0
    }
}

impl std::fmt::Debug for Password {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Password([REDACTED])")
    }
}

/// Salted one-way hash of a password, in PHC string format.
///
/// The salt is embedded in the string so verification is self-contained.
#[derive(Clone)]
pub struct PasswordHash(Secret<String>);

impl PasswordHash {
    pub fn new(phc: Secret<String>) -> Self {
        Self(phc)
    }

    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl std::fmt::Debug for PasswordHash {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("PasswordHash([REDACTED])")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_password() {
        let result = Password::try_from(Secret::from(String::new()));
        assert!(matches!(result, Err(PasswordError::Missing)));
    }

    #[test]
    fn reset_policy_requires_six_chars() {
        let short = Password::try_from(Secret::from("five5".to_owned())).unwrap();
        assert!(!short.meets_reset_policy());

        let ok = Password::try_from(Secret::from("sixsix".to_owned())).unwrap();
        assert!(ok.meets_reset_policy());
    }
}
