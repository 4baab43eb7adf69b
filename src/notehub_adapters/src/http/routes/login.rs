use axum::{Json, extract::State, response::IntoResponse};
use notehub_application::LoginUseCase;
use notehub_core::{Email, Password};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::AuthApiError;
use super::{AppState, AuthResponse};

#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
}

#[tracing::instrument(name = "Login", skip_all)]
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let mut missing = Vec::new();
    if request
        .email
        .as_ref()
        .is_none_or(|v| v.expose_secret().trim().is_empty())
    {
        missing.push("email");
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

    let (Some(email), Some(password)) = (request.email, request.password) else {
        return Err(AuthApiError::MissingFields("email, password".to_owned()));
    };

    // A structurally invalid email cannot belong to any account; answering
    // with the credentials failure keeps responses uniform.
    let email = Email::try_from(email).map_err(|_| AuthApiError::InvalidCredentials)?;
    let password = Password::try_from(password)?;

    let use_case = LoginUseCase::new(
        state.account_store.as_ref(),
        state.password_hasher.as_ref(),
    );
    let account = use_case.execute(email, password).await?;

    let token = state.session_issuer.issue(&account)?;

    Ok(Json(AuthResponse {
        token: token.expose_secret().clone(),
        user: account.view(),
    }))
}
