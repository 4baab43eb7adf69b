use std::sync::Arc;

use color_eyre::eyre::Result;
use notehub_adapters::{
    config::{constants::prod, settings::Settings},
    email::{FallbackDispatcher, ResendChannel, SmtpChannel, SmtpSettings},
    http::AppState,
    persistence::PostgresAccountStore,
    security::{Argon2PasswordHasher, JwtConfig, JwtSessionIssuer},
};
use notehub_auth_service::Application;
use notehub_core::DeliveryChannel;
use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let settings = Settings::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(settings.database_url.expose_secret())
        .await?;
    sqlx::migrate!().run(&pg_pool).await?;

    let account_store = Arc::new(PostgresAccountStore::new(pg_pool));
    let password_hasher = Arc::new(Argon2PasswordHasher::new());
    let session_issuer = Arc::new(JwtSessionIssuer::new(JwtConfig::new(
        settings.jwt_secret.clone(),
    )));
    let dispatcher = Arc::new(build_dispatcher(&settings)?);
    dispatcher.verify_channels().await;

    match settings.admin_mailbox()? {
        Some(admin) => {
            tracing::info!(admin = admin.expose(), "upload notifications route to the administrative address");
        }
        None => tracing::info!("ADMIN_EMAIL not set; upload notifications are disabled"),
    }

    let state = AppState {
        account_store,
        password_hasher,
        session_issuer,
        dispatcher,
        client_origin: settings.client_origin.clone(),
    };

    let listener = tokio::net::TcpListener::bind(prod::APP_ADDRESS).await?;
    let app = Application::build(state, listener, &settings.client_origin)
        .map_err(|e| color_eyre::eyre::eyre!(e))?;
    app.run().await?;

    Ok(())
}

/// Builds the delivery chain from configuration: Resend first when an API key
/// is present, authenticated SMTP as the fallback.
fn build_dispatcher(settings: &Settings) -> Result<FallbackDispatcher> {
    let mut channels: Vec<Box<dyn DeliveryChannel>> = Vec::new();

    if let Some(api_key) = settings.resend_api_key.clone() {
        match settings.mail_from() {
            Some(from) => {
                let http_client = reqwest::Client::builder()
                    .timeout(prod::email_client::TIMEOUT)
                    .build()?;
                channels.push(Box::new(ResendChannel::new(
                    prod::email_client::RESEND_BASE_URL.to_owned(),
                    from.to_owned(),
                    api_key,
                    http_client,
                )));
            }
            None => tracing::warn!("RESEND_API_KEY set but no from-address configured; skipping"),
        }
    }

    if settings.smtp_configured() {
        // smtp_configured() guarantees host, user and pass are present.
        if let (Some(host), Some(user), Some(pass)) = (
            settings.smtp_host.clone(),
            settings.smtp_user.clone(),
            settings.smtp_pass.clone(),
        ) {
            let from = settings.mail_from().unwrap_or(&user).to_owned();
            channels.push(Box::new(SmtpChannel::new(SmtpSettings {
                host,
                port: settings.smtp_port,
                secure: settings.smtp_secure.unwrap_or(false),
                user,
                pass,
                from,
                timeout: prod::email_client::TIMEOUT,
            })?));
        }
    }

    if settings.email_enabled && channels.is_empty() {
        tracing::warn!("email enabled but no delivery channel configured");
    }

    Ok(FallbackDispatcher::new(channels, settings.email_enabled))
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer())
        .with(ErrorLayer::default())
        .try_init()?;
    Ok(())
}
