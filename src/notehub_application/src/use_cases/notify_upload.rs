use notehub_core::{
    DispatchError, DispatchOutcome, Email, EmailDispatcher, EmailMessage, UploadActor,
    UploadedNote,
};

/// Upload-notification use case - emails the administrative address.
///
/// Shares the delivery engine with the reset flow but, unlike it, propagates
/// dispatch errors so the call site decides the failure policy.
pub struct NotifyUploadUseCase<'a, D>
where
    D: EmailDispatcher + ?Sized,
{
    dispatcher: &'a D,
    admin_email: &'a Email,
}

impl<'a, D> NotifyUploadUseCase<'a, D>
where
    D: EmailDispatcher + ?Sized,
{
    pub fn new(dispatcher: &'a D, admin_email: &'a Email) -> Self {
        Self {
            dispatcher,
            admin_email,
        }
    }

    #[tracing::instrument(name = "NotifyUploadUseCase::execute", skip_all)]
    pub async fn execute(
        &self,
        actor: &UploadActor,
        note: &UploadedNote,
    ) -> Result<DispatchOutcome, DispatchError> {
        let message = EmailMessage::upload_notification(self.admin_email.clone(), actor, note);
        self.dispatcher.dispatch(&message).await
    }
}
