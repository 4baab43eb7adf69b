use axum::{Json, extract::State, response::IntoResponse};
use notehub_application::RequestPasswordResetUseCase;
use notehub_core::Email;
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::AuthApiError;
use super::{AppState, MessageResponse};

/// The one acknowledgment every reset request gets, whether or not the email
/// exists and whether or not delivery worked.
pub const RESET_REQUEST_MESSAGE: &str =
    "If an account with that email exists, a password reset link has been sent.";

#[derive(Deserialize)]
pub struct ForgotPasswordRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
}

#[tracing::instrument(name = "Forgot password", skip_all)]
pub async fn forgot_password(
    State(state): State<AppState>,
    Json(request): Json<ForgotPasswordRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let Some(email) = request
        .email
        .filter(|v| !v.expose_secret().trim().is_empty())
    else {
        return Err(AuthApiError::MissingFields("email".to_owned()));
    };

    // A malformed address cannot belong to any account; it gets the same
    // acknowledgment as an unknown one.
    if let Ok(email) = Email::try_from(email) {
        let use_case = RequestPasswordResetUseCase::new(
            state.account_store.as_ref(),
            state.dispatcher.as_ref(),
            &state.client_origin,
        );
        // Every outcome variant collapses into the generic acknowledgment;
        // only unexpected store failures surface.
        use_case.execute(email).await?;
    }

    Ok(Json(MessageResponse {
        message: RESET_REQUEST_MESSAGE.to_owned(),
    }))
}
