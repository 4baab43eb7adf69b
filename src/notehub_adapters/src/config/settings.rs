use notehub_core::{Email, EmailError};
use secrecy::Secret;
use serde::Deserialize;

/// Immutable process configuration, read once at startup from the environment
/// (with `.env` support) and passed into constructors. Operation logic never
/// reads configuration ambiently.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// Symmetric signing secret for session tokens.
    pub jwt_secret: Secret<String>,
    pub database_url: Secret<String>,
    /// External origin the recovery link is built on, and the allowed CORS
    /// origin.
    #[serde(default = "default_client_origin")]
    pub client_origin: String,
    /// Global kill switch for outbound email.
    #[serde(default = "default_email_enabled")]
    pub email_enabled: bool,
    // Primary channel: Resend HTTP API.
    pub resend_api_key: Option<Secret<String>>,
    pub resend_from: Option<String>,
    // Fallback channel: authenticated SMTP submission.
    pub smtp_host: Option<String>,
    pub smtp_port: Option<u16>,
    pub smtp_secure: Option<bool>,
    pub smtp_user: Option<String>,
    pub smtp_pass: Option<Secret<String>>,
    /// Administrative address upload notifications go to.
    pub admin_email: Option<String>,
}

fn default_client_origin() -> String {
    "http://localhost:5173".to_owned()
}

fn default_email_enabled() -> bool {
    true
}

impl Settings {
    /// Load settings from the process environment, after sourcing `.env` if
    /// one is present.
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenvy::dotenv().ok();
        config::Config::builder()
            .add_source(config::Environment::default().try_parsing(true))
            .build()?
            .try_deserialize()
    }

    /// From-address for outbound mail: the configured Resend sender, falling
    /// back to the SMTP user.
    pub fn mail_from(&self) -> Option<&str> {
        self.resend_from
            .as_deref()
            .or(self.smtp_user.as_deref())
    }

    pub fn smtp_configured(&self) -> bool {
        self.smtp_host.is_some() && self.smtp_user.is_some() && self.smtp_pass.is_some()
    }

    /// Administrative destination for upload notifications, validated as a
    /// real address. A misconfigured value is an error, not a silent skip.
    pub fn admin_mailbox(&self) -> Result<Option<Email>, EmailError> {
        self.admin_email.as_deref().map(Email::try_from).transpose()
    }
}
