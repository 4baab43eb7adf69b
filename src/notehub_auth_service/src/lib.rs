//! HTTP service wiring for the NoteHub authentication API.
//!
//! [`Application`] owns a bound listener and the fully-layered router so
//! integration tests can spawn the service on an ephemeral port and talk to
//! it over real HTTP.

use std::net::SocketAddr;

use axum::{Json, Router, http::HeaderValue, routing::get};
use notehub_adapters::http::{AppState, auth_router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub struct Application {
    listener: tokio::net::TcpListener,
    router: Router,
}

impl Application {
    /// Assembles the router on top of an already-bound listener.
    ///
    /// `allowed_origin` is the browser origin permitted by CORS; `"*"`
    /// allows any origin, which is what the integration tests use.
    pub fn build(
        state: AppState,
        listener: tokio::net::TcpListener,
        allowed_origin: &str,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let cors = if allowed_origin == "*" {
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any)
        } else {
            CorsLayer::new()
                .allow_origin(allowed_origin.parse::<HeaderValue>()?)
                .allow_methods(Any)
                .allow_headers(Any)
        };

        let router = auth_router(state)
            .route("/api/health", get(health))
            .layer(TraceLayer::new_for_http())
            .layer(cors);

        Ok(Self { listener, router })
    }

    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }

    pub async fn run(self) -> std::io::Result<()> {
        tracing::info!("listening on {}", self.listener.local_addr()?);
        axum::serve(self.listener, self.router).await
    }
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "ok": true }))
}
