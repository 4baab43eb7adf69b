use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use notehub_application::RegisterUseCase;
use notehub_core::{Email, Password, Phone, Role};
use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use super::error::AuthApiError;
use super::{AppState, AuthResponse};

#[derive(Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<Secret<String>>,
    #[serde(default)]
    pub password: Option<Secret<String>>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

#[tracing::instrument(name = "Register", skip_all)]
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<impl IntoResponse, AuthApiError> {
    let mut missing = Vec::new();
    if request.name.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("name");
    }
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
    if request.phone.as_deref().is_none_or(|v| v.trim().is_empty()) {
        missing.push("phone");
    }
    if !missing.is_empty() {
        return Err(AuthApiError::MissingFields(missing.join(", ")));
    }

    let (Some(name), Some(email), Some(password), Some(phone)) =
        (request.name, request.email, request.password, request.phone)
    else {
        return Err(AuthApiError::MissingFields(
            "name, email, password, phone".to_owned(),
        ));
    };

    let email = Email::try_from(email)?;
    let password = Password::try_from(password)?;
    let phone = Phone::try_from(phone.as_str())?;
    let role = match request.role.as_deref() {
        Some(role) => Role::try_from(role)?,
        None => Role::default(),
    };

    let use_case = RegisterUseCase::new(
        state.account_store.as_ref(),
        state.password_hasher.as_ref(),
    );
    let account = use_case
        .execute(name.trim().to_owned(), email, password, phone, role)
        .await?;

    let token = state.session_issuer.issue(&account)?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token: token.expose_secret().clone(),
            user: account.view(),
        }),
    ))
}
