use argon2::{
    Algorithm, Argon2, Params, PasswordVerifier, Version,
    password_hash::{PasswordHash as ParsedHash, PasswordHasher as _, SaltString, rand_core},
};
use async_trait::async_trait;
use notehub_core::{Password, PasswordHash, PasswordHasher, PasswordHasherError};
use secrecy::Secret;

/// Argon2id hasher with a fixed work factor. Hashing and verification run on
/// the blocking pool so request tasks are not stalled.
#[derive(Debug, Clone, Default)]
pub struct Argon2PasswordHasher;

impl Argon2PasswordHasher {
    pub fn new() -> Self {
        Self
    }
}

fn params() -> Result<Params, String> {
    Params::new(15000, 2, 1, None).map_err(|e| e.to_string())
}

#[async_trait]
impl PasswordHasher for Argon2PasswordHasher {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: Password) -> Result<PasswordHash, PasswordHasherError> {
        let current_span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(move || {
                let salt = SaltString::generate(rand_core::OsRng);
                let hasher = Argon2::new(Algorithm::Argon2id, Version::V0x13, params()?);
                hasher
                    .hash_password(password.expose().as_bytes(), &salt)
                    .map(|h| PasswordHash::new(Secret::from(h.to_string())))
                    .map_err(|e| e.to_string())
            })
        })
        .await
        .map_err(|e| e.to_string());

        match result {
            Ok(Ok(hash)) => Ok(hash),
            Ok(Err(e)) | Err(e) => Err(PasswordHasherError::HashingFailed(e)),
        }
    }

    /// Comparison is delegated to the argon2 library; a malformed stored hash
    /// verifies as `false` rather than erroring.
    #[tracing::instrument(name = "Verify password hash", skip_all)]
    async fn verify(&self, candidate: &Password, hash: &PasswordHash) -> bool {
        let candidate = candidate.clone();
        let hash = hash.clone();
        let current_span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let Ok(parsed) = ParsedHash::new(hash.expose()) else {
                    return false;
                };
                let Ok(params) = params() else {
                    return false;
                };
                Argon2::new(Algorithm::Argon2id, Version::V0x13, params)
                    .verify_password(candidate.expose().as_bytes(), &parsed)
                    .is_ok()
            })
        })
        .await
        .unwrap_or(false)
    }
}
