pub mod account;
pub mod email;
pub mod notification;
pub mod password;
pub mod recovery_token;
