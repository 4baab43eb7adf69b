pub mod use_cases;

pub use use_cases::{
    confirm_password_reset::{ConfirmPasswordResetError, ConfirmPasswordResetUseCase},
    login::{LoginError, LoginUseCase},
    notify_upload::NotifyUploadUseCase,
    register::{RegisterError, RegisterUseCase},
    request_password_reset::{
        RequestPasswordResetError, RequestPasswordResetUseCase, ResetRequestOutcome,
    },
};

#[cfg(test)]
pub(crate) mod test_support;
