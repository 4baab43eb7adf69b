use serde_json::Value;

use crate::helpers::spawn_app;

#[tokio::test]
async fn health_endpoint_responds_ok() {
    let app = spawn_app().await;

    let response = app
        .client
        .get(format!("{}/api/health", app.address))
        .send()
        .await
        .expect("Failed to execute request");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.expect("Body was not JSON");
    assert_eq!(body["ok"], true);
}
