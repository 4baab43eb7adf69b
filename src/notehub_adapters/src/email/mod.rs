pub mod fallback_dispatcher;
pub mod mock_email_dispatcher;
pub mod resend_channel;
pub mod smtp_channel;

pub use fallback_dispatcher::FallbackDispatcher;
pub use mock_email_dispatcher::MockEmailDispatcher;
pub use resend_channel::ResendChannel;
pub use smtp_channel::{SmtpChannel, SmtpSettings};
