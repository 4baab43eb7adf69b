pub mod confirm_password_reset;
pub mod login;
pub mod notify_upload;
pub mod register;
pub mod request_password_reset;
