use std::time::Duration;

use async_trait::async_trait;
use lettre::message::Mailbox;
use lettre::message::header::ContentType;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use notehub_core::{DeliveryChannel, DeliveryError, EmailMessage};
use secrecy::{ExposeSecret, Secret};

/// Fallback channel: direct mail submission over authenticated SMTP.
pub struct SmtpChannel {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from: Mailbox,
}

pub struct SmtpSettings {
    pub host: String,
    /// Defaults to the relay's standard submission port when absent.
    pub port: Option<u16>,
    /// Implicit TLS when true, STARTTLS otherwise.
    pub secure: bool,
    pub user: String,
    pub pass: Secret<String>,
    pub from: String,
    pub timeout: Duration,
}

impl SmtpChannel {
    pub fn new(settings: SmtpSettings) -> Result<Self, DeliveryError> {
        let builder = if settings.secure {
            AsyncSmtpTransport::<Tokio1Executor>::relay(&settings.host)
        } else {
            AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&settings.host)
        }
        .map_err(|e| DeliveryError::SendFailed(e.to_string()))?;

        let builder = match settings.port {
            Some(port) => builder.port(port),
            None => builder,
        };

        let transport = builder
            .credentials(Credentials::new(
                settings.user,
                settings.pass.expose_secret().clone(),
            ))
            .timeout(Some(settings.timeout))
            .build();

        let from = settings
            .from
            .parse::<Mailbox>()
            .map_err(|e| DeliveryError::SendFailed(format!("Invalid from address: {e}")))?;

        Ok(Self { transport, from })
    }
}

#[async_trait]
impl DeliveryChannel for SmtpChannel {
    fn name(&self) -> &'static str {
        "smtp"
    }

    /// Opens and closes one authenticated connection to the relay.
    async fn verify(&self) -> Result<(), DeliveryError> {
        match self.transport.test_connection().await {
            Ok(true) => Ok(()),
            Ok(false) => Err(DeliveryError::SendFailed(
                "SMTP connection test failed".to_owned(),
            )),
            Err(e) => Err(DeliveryError::SendFailed(e.to_string())),
        }
    }

    #[tracing::instrument(name = "Sending email via SMTP", skip_all)]
    async fn deliver(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        let to = message
            .to
            .expose()
            .parse::<Mailbox>()
            .map_err(|e| DeliveryError::SendFailed(format!("Invalid to address: {e}")))?;

        let email = Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_HTML)
            .body(message.html.clone())
            .map_err(|e| DeliveryError::SendFailed(e.to_string()))?;

        self.transport
            .send(email)
            .await
            .map_err(|e| DeliveryError::SendFailed(e.to_string()))?;

        Ok(())
    }
}
