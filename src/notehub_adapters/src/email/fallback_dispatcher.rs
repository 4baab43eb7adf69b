use async_trait::async_trait;
use notehub_core::{
    DeliveryChannel, DispatchError, DispatchOutcome, EmailDispatcher, EmailMessage,
};

/// Delivers a notification through an ordered chain of channels, stopping at
/// the first success.
///
/// A non-final channel failure is logged and the next channel tried; the
/// taxonomy below is what callers see:
/// - kill switch off: `Disabled`, a successful no-op with zero outbound calls
/// - no channel configured: `NoChannelConfigured`
/// - every channel attempted and failed: `AllChannelsFailed`
pub struct FallbackDispatcher {
    channels: Vec<Box<dyn DeliveryChannel>>,
    enabled: bool,
}

impl FallbackDispatcher {
    pub fn new(channels: Vec<Box<dyn DeliveryChannel>>, enabled: bool) -> Self {
        Self { channels, enabled }
    }

    /// Startup probe: checks every channel and logs the result. A failed
    /// probe is logged but never removes the channel; delivery still walks
    /// the full chain at send time. Skipped entirely when the kill switch is
    /// off.
    pub async fn verify_channels(&self) {
        if !self.enabled {
            tracing::info!("email dispatch disabled; skipping channel verification");
            return;
        }

        for channel in &self.channels {
            match channel.verify().await {
                Ok(()) => tracing::info!(channel = channel.name(), "delivery channel ready"),
                Err(error) => tracing::warn!(
                    channel = channel.name(),
                    %error,
                    "delivery channel verification failed"
                ),
            }
        }
    }
}

#[async_trait]
impl EmailDispatcher for FallbackDispatcher {
    #[tracing::instrument(name = "Dispatching notification", skip_all)]
    async fn dispatch(&self, message: &EmailMessage) -> Result<DispatchOutcome, DispatchError> {
        if !self.enabled {
            tracing::debug!("email dispatch disabled; skipping");
            return Ok(DispatchOutcome::Disabled);
        }

        if self.channels.is_empty() {
            return Err(DispatchError::NoChannelConfigured);
        }

        let mut last_error = String::new();
        for channel in &self.channels {
            match channel.deliver(message).await {
                Ok(()) => {
                    return Ok(DispatchOutcome::Delivered {
                        channel: channel.name(),
                    });
                }
                Err(error) => {
                    tracing::warn!(channel = channel.name(), %error, "delivery channel failed");
                    last_error = error.to_string();
                }
            }
        }

        Err(DispatchError::AllChannelsFailed(last_error))
    }
}
