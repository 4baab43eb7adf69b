use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notehub_application::{
    ConfirmPasswordResetError, LoginError, RegisterError, RequestPasswordResetError,
};
use notehub_core::{AccountError, EmailError, PasswordError, SessionTokenError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum AuthApiError {
    #[error("Missing required fields: {0}")]
    MissingFields(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Email already in use")]
    EmailAlreadyInUse,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Password must be at least 6 characters")]
    WeakPassword,

    #[error("Invalid or expired token")]
    InvalidOrExpiredToken,

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl IntoResponse for AuthApiError {
    fn into_response(self) -> Response {
        let (status_code, error_message) = match self {
            AuthApiError::MissingFields(_)
            | AuthApiError::InvalidInput(_)
            | AuthApiError::WeakPassword
            | AuthApiError::InvalidOrExpiredToken => (StatusCode::BAD_REQUEST, self.to_string()),

            AuthApiError::EmailAlreadyInUse => (StatusCode::CONFLICT, self.to_string()),

            AuthApiError::InvalidCredentials => (StatusCode::UNAUTHORIZED, self.to_string()),

            AuthApiError::UnexpectedError(detail) => {
                // Never leak internals in the body.
                tracing::error!(%detail, "request failed unexpectedly");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_owned())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status_code, body).into_response()
    }
}

impl From<EmailError> for AuthApiError {
    fn from(error: EmailError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<PasswordError> for AuthApiError {
    fn from(error: PasswordError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<AccountError> for AuthApiError {
    fn from(error: AccountError) -> Self {
        AuthApiError::InvalidInput(error.to_string())
    }
}

impl From<SessionTokenError> for AuthApiError {
    fn from(error: SessionTokenError) -> Self {
        match error {
            SessionTokenError::Unauthorized => AuthApiError::InvalidCredentials,
            SessionTokenError::SigningFailed(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<RegisterError> for AuthApiError {
    fn from(error: RegisterError) -> Self {
        match error {
            RegisterError::EmailAlreadyInUse => AuthApiError::EmailAlreadyInUse,
            RegisterError::AccountStoreError(e) => AuthApiError::UnexpectedError(e.to_string()),
            RegisterError::PasswordHasherError(e) => AuthApiError::UnexpectedError(e.to_string()),
        }
    }
}

impl From<LoginError> for AuthApiError {
    fn from(error: LoginError) -> Self {
        match error {
            LoginError::InvalidCredentials => AuthApiError::InvalidCredentials,
            LoginError::UnexpectedError(e) => AuthApiError::UnexpectedError(e),
        }
    }
}

impl From<RequestPasswordResetError> for AuthApiError {
    fn from(error: RequestPasswordResetError) -> Self {
        match error {
            RequestPasswordResetError::AccountStoreError(e) => {
                AuthApiError::UnexpectedError(e.to_string())
            }
        }
    }
}

impl From<ConfirmPasswordResetError> for AuthApiError {
    fn from(error: ConfirmPasswordResetError) -> Self {
        match error {
            ConfirmPasswordResetError::WeakPassword => AuthApiError::WeakPassword,
            ConfirmPasswordResetError::InvalidOrExpiredToken => {
                AuthApiError::InvalidOrExpiredToken
            }
            ConfirmPasswordResetError::PasswordHasherError(e) => {
                AuthApiError::UnexpectedError(e.to_string())
            }
            ConfirmPasswordResetError::AccountStoreError(e) => {
                AuthApiError::UnexpectedError(e.to_string())
            }
        }
    }
}
