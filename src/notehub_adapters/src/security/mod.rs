pub mod argon2_hasher;
pub mod jwt_session_issuer;

pub use argon2_hasher::Argon2PasswordHasher;
pub use jwt_session_issuer::{JwtConfig, JwtSessionIssuer, SESSION_TOKEN_TTL_SECONDS};
