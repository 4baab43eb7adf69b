use notehub_adapters::{
    http::AuthResponse,
    security::{JwtConfig, JwtSessionIssuer},
};
use notehub_core::{Role, SessionIssuer};
use secrecy::Secret;
use serde_json::{Value, json};

use crate::helpers::{TEST_JWT_SECRET, spawn_app};

#[tokio::test]
async fn register_returns_session_token_and_profile() {
    let app = spawn_app().await;

    let response = app.register("asha@college.edu", "sup3rsecret").await;

    assert_eq!(response.status(), 201);
    let body: AuthResponse = response.json().await.expect("Body was not an AuthResponse");
    assert_eq!(body.user.name, "Asha Rao");
    assert_eq!(body.user.email, "asha@college.edu");
    assert_eq!(body.user.phone, "9876543210");
    assert_eq!(body.user.role, Role::Student);

    // The token is a real signed session credential carrying the profile.
    let issuer = JwtSessionIssuer::new(JwtConfig::new(Secret::from(TEST_JWT_SECRET.to_owned())));
    let claims = issuer.verify(&body.token).expect("Token failed verification");
    assert_eq!(claims.sub, body.user.id);
    assert_eq!(claims.name, "Asha Rao");
    assert_eq!(claims.role, Role::Student);
}

#[tokio::test]
async fn register_never_echoes_the_password() {
    let app = spawn_app().await;

    let response = app.register("asha@college.edu", "sup3rsecret").await;

    assert_eq!(response.status(), 201);
    let body = response.text().await.expect("Failed to read body");
    assert!(!body.contains("sup3rsecret"));
    assert!(!body.to_lowercase().contains("password"));
}

#[tokio::test]
async fn duplicate_registration_is_a_conflict() {
    let app = spawn_app().await;

    let first = app.register("asha@college.edu", "sup3rsecret").await;
    assert_eq!(first.status(), 201);

    // Same address, different case: addresses are normalized before storage.
    let second = app.register("Asha@College.EDU", "otherpassword").await;
    assert_eq!(second.status(), 409);
    let body: Value = second.json().await.expect("Body was not JSON");
    assert_eq!(body["error"], "Email already in use");
}

#[tokio::test]
async fn concurrent_duplicate_registrations_yield_one_conflict() {
    let app = spawn_app().await;

    // Raced in-flight: exactly one registration persists, the other hits the
    // store's duplicate rejection.
    let (first, second) = tokio::join!(
        app.register("asha@college.edu", "sup3rsecret"),
        app.register("asha@college.edu", "otherpassword"),
    );

    let mut statuses = [first.status().as_u16(), second.status().as_u16()];
    statuses.sort_unstable();
    assert_eq!(statuses, [201, 409]);

    // The surviving credentials are the winner's.
    let winner = if first.status() == 201 {
        "sup3rsecret"
    } else {
        "otherpassword"
    };
    let login = app.login("asha@college.edu", winner).await;
    assert_eq!(login.status(), 200);
}

#[tokio::test]
async fn register_with_missing_fields_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app
        .post("/api/auth/register", &json!({ "email": "asha@college.edu" }))
        .await;

    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn login_failures_are_indistinguishable() {
    let app = spawn_app().await;
    app.register("asha@college.edu", "sup3rsecret").await;

    let wrong_password = app.login("asha@college.edu", "not-the-password").await;
    let unknown_email = app.login("nobody@college.edu", "sup3rsecret").await;

    assert_eq!(wrong_password.status(), 401);
    assert_eq!(unknown_email.status(), 401);

    let wrong_body = wrong_password.bytes().await.expect("Failed to read body");
    let unknown_body = unknown_email.bytes().await.expect("Failed to read body");
    assert_eq!(wrong_body, unknown_body);
}

#[tokio::test]
async fn forgot_password_acknowledgment_hides_account_existence() {
    let app = spawn_app().await;
    app.register("asha@college.edu", "sup3rsecret").await;

    let known = app.forgot_password("asha@college.edu").await;
    let unknown = app.forgot_password("nobody@college.edu").await;

    assert_eq!(known.status(), 200);
    assert_eq!(unknown.status(), 200);

    let known_body = known.bytes().await.expect("Failed to read body");
    let unknown_body = unknown.bytes().await.expect("Failed to read body");
    assert_eq!(known_body, unknown_body);

    // Only the registered address actually got an email.
    let sent = app.dispatcher.sent_messages().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].to.expose(), "asha@college.edu");
}

#[tokio::test]
async fn full_password_recovery_flow() {
    let app = spawn_app().await;

    let response = app.register("asha@college.edu", "originalpass").await;
    assert_eq!(response.status(), 201);

    // Forgotten password: login fails, so a reset is requested.
    let response = app.login("asha@college.edu", "guessed-wrong").await;
    assert_eq!(response.status(), 401);

    let response = app.forgot_password("asha@college.edu").await;
    assert_eq!(response.status(), 200);

    let token = app.latest_reset_token().await;
    let response = app.reset_password(&token, "brandnewpass").await;
    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!(body["message"], "Password has been reset.");

    // Old credential is gone; the new one works.
    let response = app.login("asha@college.edu", "originalpass").await;
    assert_eq!(response.status(), 401);
    let response = app.login("asha@college.edu", "brandnewpass").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn recovery_token_is_single_use() {
    let app = spawn_app().await;
    app.register("asha@college.edu", "originalpass").await;
    app.forgot_password("asha@college.edu").await;

    let token = app.latest_reset_token().await;
    let first = app.reset_password(&token, "brandnewpass").await;
    assert_eq!(first.status(), 200);

    let second = app.reset_password(&token, "anotherpass").await;
    assert_eq!(second.status(), 400);
    let body: Value = second.json().await.expect("Body was not JSON");
    assert_eq!(body["error"], "Invalid or expired token");
}

#[tokio::test]
async fn weak_reset_password_is_rejected_without_consuming_the_token() {
    let app = spawn_app().await;
    app.register("asha@college.edu", "originalpass").await;
    app.forgot_password("asha@college.edu").await;

    let token = app.latest_reset_token().await;
    let response = app.reset_password(&token, "short").await;
    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!(body["error"], "Password must be at least 6 characters");

    // The rejection happened before the token was touched.
    let response = app.reset_password(&token, "longenough").await;
    assert_eq!(response.status(), 200);
}

#[tokio::test]
async fn garbage_reset_token_is_a_bad_request() {
    let app = spawn_app().await;

    let response = app.reset_password("not-a-real-token", "longenough").await;

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!(body["error"], "Invalid or expired token");
}
