use chrono::Utc;
use notehub_core::{
    AccountStore, AccountStoreError, DispatchOutcome, Email, EmailDispatcher, EmailMessage,
    RecoveryState,
};

/// Internal outcome of a reset request.
///
/// Every variant is answered with the same generic acknowledgment at the HTTP
/// layer; the distinctions exist so the anti-enumeration and
/// swallowed-dispatch-failure decisions are visible in the type rather than a
/// caught-and-ignored error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResetRequestOutcome {
    /// Token stored and the recovery link handed to a delivery channel.
    Dispatched,
    /// Token stored, but dispatch is globally disabled.
    Disabled,
    /// Token stored, but every delivery channel failed. Logged, not surfaced.
    NotDelivered,
    /// No account with that email. Indistinguishable from the outside.
    UnknownEmail,
}

/// Error types specific to the reset-request use case
#[derive(Debug, thiserror::Error)]
pub enum RequestPasswordResetError {
    #[error("Account store error: {0}")]
    AccountStoreError(#[from] AccountStoreError),
}

/// Reset-request use case - issues a recovery token and emails the link
pub struct RequestPasswordResetUseCase<'a, S, D>
where
    S: AccountStore + ?Sized,
    D: EmailDispatcher + ?Sized,
{
    account_store: &'a S,
    dispatcher: &'a D,
    /// External origin the recovery link is built on.
    reset_link_base: &'a str,
}

impl<'a, S, D> RequestPasswordResetUseCase<'a, S, D>
where
    S: AccountStore + ?Sized,
    D: EmailDispatcher + ?Sized,
{
    pub fn new(account_store: &'a S, dispatcher: &'a D, reset_link_base: &'a str) -> Self {
        Self {
            account_store,
            dispatcher,
            reset_link_base,
        }
    }

    /// Execute the reset-request use case.
    ///
    /// Issuing a new token replaces any pending one (last-writer-wins). Only
    /// unexpected store failures propagate as errors.
    #[tracing::instrument(name = "RequestPasswordResetUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        email: Email,
    ) -> Result<ResetRequestOutcome, RequestPasswordResetError> {
        let account = match self.account_store.find_by_email(&email).await {
            Ok(account) => account,
            Err(AccountStoreError::AccountNotFound) => {
                return Ok(ResetRequestOutcome::UnknownEmail);
            }
            Err(other) => return Err(other.into()),
        };

        let recovery = RecoveryState::issue(Utc::now());
        let reset_link = format!(
            "{}/reset-password?token={}",
            self.reset_link_base.trim_end_matches('/'),
            recovery.token.as_str()
        );

        match self.account_store.store_recovery(&email, recovery).await {
            Ok(()) => {}
            // Account deleted between lookup and write; same outward outcome.
            Err(AccountStoreError::AccountNotFound) => {
                return Ok(ResetRequestOutcome::UnknownEmail);
            }
            Err(other) => return Err(other.into()),
        }

        let message = EmailMessage::password_reset(account.email.clone(), &reset_link);
        match self.dispatcher.dispatch(&message).await {
            Ok(DispatchOutcome::Delivered { channel }) => {
                tracing::info!(channel, "password reset email dispatched");
                Ok(ResetRequestOutcome::Dispatched)
            }
            Ok(DispatchOutcome::Disabled) => Ok(ResetRequestOutcome::Disabled),
            Err(error) => {
                tracing::warn!(%error, "failed to dispatch password reset email");
                Ok(ResetRequestOutcome::NotDelivered)
            }
        }
    }
}
