use std::sync::Arc;

use async_trait::async_trait;
use notehub_core::{DispatchError, DispatchOutcome, EmailDispatcher, EmailMessage};
use tokio::sync::RwLock;

/// Capturing dispatcher for tests: records every message and always reports
/// delivery.
#[derive(Debug, Clone, Default)]
pub struct MockEmailDispatcher {
    sent: Arc<RwLock<Vec<EmailMessage>>>,
}

impl MockEmailDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn sent_messages(&self) -> Vec<EmailMessage> {
        self.sent.read().await.clone()
    }
}

#[async_trait]
impl EmailDispatcher for MockEmailDispatcher {
    async fn dispatch(&self, message: &EmailMessage) -> Result<DispatchOutcome, DispatchError> {
        self.sent.write().await.push(message.clone());
        Ok(DispatchOutcome::Delivered { channel: "mock" })
    }
}
