use std::sync::Arc;

use notehub_adapters::{
    config::constants::test,
    email::MockEmailDispatcher,
    http::AppState,
    persistence::InMemoryAccountStore,
    security::{Argon2PasswordHasher, JwtConfig, JwtSessionIssuer},
};
use notehub_auth_service::Application;
use secrecy::Secret;
use serde_json::{Value, json};

pub const TEST_JWT_SECRET: &str = "integration-test-signing-secret";

pub struct TestApp {
    pub address: String,
    pub client: reqwest::Client,
    pub dispatcher: MockEmailDispatcher,
}

/// Spins the whole service up on an ephemeral port, backed by the in-memory
/// store and a capturing dispatcher.
pub async fn spawn_app() -> TestApp {
    let dispatcher = MockEmailDispatcher::new();

    let state = AppState {
        account_store: Arc::new(InMemoryAccountStore::new()),
        password_hasher: Arc::new(Argon2PasswordHasher::new()),
        session_issuer: Arc::new(JwtSessionIssuer::new(JwtConfig::new(Secret::from(
            TEST_JWT_SECRET.to_owned(),
        )))),
        dispatcher: Arc::new(dispatcher.clone()),
        client_origin: "http://localhost:5173".to_owned(),
    };

    let listener = tokio::net::TcpListener::bind(test::APP_ADDRESS)
        .await
        .expect("Failed to bind ephemeral port");
    let address = format!(
        "http://{}",
        listener.local_addr().expect("Failed to read local address")
    );

    let app = Application::build(state, listener, "*").expect("Failed to build application");
    tokio::spawn(app.run());

    TestApp {
        address,
        client: reqwest::Client::new(),
        dispatcher,
    }
}

impl TestApp {
    pub async fn post(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{path}", self.address))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn register(&self, email: &str, password: &str) -> reqwest::Response {
        self.post(
            "/api/auth/register",
            &json!({
                "name": "Asha Rao",
                "email": email,
                "phone": "9876543210",
                "password": password,
                "role": "student",
            }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> reqwest::Response {
        self.post(
            "/api/auth/login",
            &json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn forgot_password(&self, email: &str) -> reqwest::Response {
        self.post("/api/auth/forgot-password", &json!({ "email": email }))
            .await
    }

    pub async fn reset_password(&self, token: &str, password: &str) -> reqwest::Response {
        self.post(
            "/api/auth/reset-password",
            &json!({ "token": token, "password": password }),
        )
        .await
    }

    /// Pulls the recovery token out of the most recent captured email.
    pub async fn latest_reset_token(&self) -> String {
        let sent = self.dispatcher.sent_messages().await;
        let message = sent.last().expect("No email was dispatched");
        extract_reset_token(&message.html)
    }
}

/// The recovery email embeds a link of the form
/// `{origin}/reset-password?token={64 hex chars}`.
pub fn extract_reset_token(html: &str) -> String {
    let start = html
        .find("token=")
        .expect("Email body contains no reset link")
        + "token=".len();
    html[start..start + 64].to_owned()
}
