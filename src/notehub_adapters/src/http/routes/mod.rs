pub mod error;
pub mod forgot_password;
pub mod login;
pub mod register;
pub mod reset_password;

use std::sync::Arc;

use axum::Router;
use axum::routing::post;
use notehub_core::{AccountStore, AccountView, EmailDispatcher, PasswordHasher, SessionIssuer};
use serde::{Deserialize, Serialize};

/// Shared handler state: ports behind `Arc` plus the immutable bits of
/// configuration the auth routes need.
#[derive(Clone)]
pub struct AppState {
    pub account_store: Arc<dyn AccountStore>,
    pub password_hasher: Arc<dyn PasswordHasher>,
    pub session_issuer: Arc<dyn SessionIssuer>,
    pub dispatcher: Arc<dyn EmailDispatcher>,
    /// External origin the recovery link is built on.
    pub client_origin: String,
}

/// Successful register/login body.
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: AccountView,
}

/// Plain acknowledgment body.
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn auth_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/register", post(register::register))
        .route("/api/auth/login", post(login::login))
        .route("/api/auth/forgot-password", post(forgot_password::forgot_password))
        .route("/api/auth/reset-password", post(reset_password::reset_password))
        .with_state(state)
}
