use chrono::Utc;
use jsonwebtoken::{DecodingKey, EncodingKey, Validation, decode, encode};
use notehub_core::{Account, SessionClaims, SessionIssuer, SessionTokenError};
use secrecy::{ExposeSecret, Secret};

/// Sessions live for 7 days from issue.
pub const SESSION_TOKEN_TTL_SECONDS: i64 = 7 * 24 * 3600;

#[derive(Clone)]
pub struct JwtConfig {
    pub jwt_secret: Secret<String>,
    pub token_ttl_seconds: i64,
}

impl JwtConfig {
    pub fn new(jwt_secret: Secret<String>) -> Self {
        Self {
            jwt_secret,
            token_ttl_seconds: SESSION_TOKEN_TTL_SECONDS,
        }
    }

    fn as_bytes(&self) -> &[u8] {
        self.jwt_secret.expose_secret().as_bytes()
    }
}

/// Issues and verifies HS256-signed session credentials.
///
/// Sessions are stateless: there is no revocation list, so multiple valid
/// tokens may coexist for one account and expiry is the only termination.
pub struct JwtSessionIssuer {
    config: JwtConfig,
}

impl JwtSessionIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }
}

impl SessionIssuer for JwtSessionIssuer {
    fn issue(&self, account: &Account) -> Result<Secret<String>, SessionTokenError> {
        let now = Utc::now();
        let delta = chrono::Duration::try_seconds(self.config.token_ttl_seconds).ok_or(
            SessionTokenError::SigningFailed("Failed to create token duration".to_owned()),
        )?;
        let exp = now
            .checked_add_signed(delta)
            .ok_or(SessionTokenError::SigningFailed(
                "Duration out of range".to_owned(),
            ))?
            .timestamp();

        let claims = SessionClaims {
            sub: account.id,
            role: account.role,
            name: account.name.clone(),
            phone: account.phone.as_str().to_owned(),
            iat: now.timestamp(),
            exp,
        };

        encode(
            &jsonwebtoken::Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map(Secret::from)
        .map_err(|e| SessionTokenError::SigningFailed(e.to_string()))
    }

    /// Every failure mode (bad signature, expired, malformed) collapses into
    /// one `Unauthorized` so callers cannot probe token structure.
    fn verify(&self, token: &str) -> Result<SessionClaims, SessionTokenError> {
        decode::<SessionClaims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map(|data| data.claims)
        .map_err(|_| SessionTokenError::Unauthorized)
    }
}
