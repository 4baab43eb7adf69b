use axum::{Json, extract::State, response::IntoResponse};
use notehub_application::ConfirmPasswordResetUseCase;
use notehub_core::Password;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::AuthApiError;
use super::{AppState, MessageResponse};

pub const RESET_CONFIRM_MESSAGE: &str = "Password has been reset.";

#[derive(Deserialize)]
pub struct ResetPasswordRequest {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Reset password", skip_all)]
pub async fn reset_password(
    State(state): State<AppState>,
    Json(request): Json<ResetPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let mut missing = Vec::new();
    if request.token.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("token");
    }
    if request
        .password
        .as_ref()
        .is_none_or(|v| v.expose_secret().is_empty())
    {
        missing.push("password");
    }
    if !missing.is_empty() {
        return Err(AuthApiError::MissingFields(missing.join(", ")));
    }

    let (Some(token), Some(password)) = (request.token, request.password) else {
        return Err(AuthApiError::MissingFields("token, password".to_owned()));
    };

    let password = Password::try_from(password)?;

    let use_case = ConfirmPasswordResetUseCase::new(
        state.account_store.as_ref(),
        state.password_hasher.as_ref(),
    );
    use_case.execute(token.trim(), password).await?;

    // No session token here; the user logs in again with the new password.
    Ok(Json(MessageResponse {
        message: RESET_CONFIRM_MESSAGE.to_owned(),
    }))
}
