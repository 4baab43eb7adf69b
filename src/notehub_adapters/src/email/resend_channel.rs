use async_trait::async_trait;
use notehub_core::{DeliveryChannel, DeliveryError, EmailMessage};
use reqwest::{Client, Url};
use secrecy::{ExposeSecret, Secret};

/// Primary channel: the Resend transactional-email HTTP API.
pub struct ResendChannel {
    http_client: Client,
    base_url: String,
    from: String,
    api_key: Secret<String>,
}

impl ResendChannel {
    pub fn new(base_url: String, from: String, api_key: Secret<String>, http_client: Client) -> Self {
        Self {
            http_client,
            base_url,
            from,
            api_key,
        }
    }
}

#[async_trait]
impl DeliveryChannel for ResendChannel {
    fn name(&self) -> &'static str {
        "resend"
    }

    #[tracing::instrument(name = "Sending email via Resend", skip_all)]
    async fn deliver(&self, message: &EmailMessage) -> Result<(), DeliveryError> {
        let base = Url::parse(&self.base_url).map_err(|e| DeliveryError::SendFailed(e.to_string()))?;
        let url = base
            .join("/emails")
            .map_err(|e| DeliveryError::SendFailed(e.to_string()))?;

        let request_body = SendEmailRequest {
            from: &self.from,
            to: vec![message.to.expose()],
            subject: &message.subject,
            html: &message.html,
        };

        self.http_client
            .post(url)
            .bearer_auth(self.api_key.expose_secret())
            .json(&request_body)
            .send()
            .await
            .map_err(|e| DeliveryError::SendFailed(e.to_string()))?
            .error_for_status()
            .map_err(|e| DeliveryError::SendFailed(e.to_string()))?;

        Ok(())
    }
}

#[derive(serde::Serialize, Debug)]
struct SendEmailRequest<'a> {
    from: &'a str,
    to: Vec<&'a str>,
    subject: &'a str,
    html: &'a str,
}
