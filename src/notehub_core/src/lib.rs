pub mod domain;
pub mod ports;

// Re-export commonly used types for convenience
pub use domain::{
    account::{
        Account, AccountError, AccountView, Phone, RECOVERY_TOKEN_TTL_SECONDS, RecoveryState,
        Role, SessionClaims,
    },
    email::{Email, EmailError},
    notification::{EmailMessage, UploadActor, UploadedNote},
    password::{MIN_RESET_PASSWORD_LEN, Password, PasswordError, PasswordHash},
    recovery_token::{RecoveryToken, RecoveryTokenError},
};

pub use ports::{
    repositories::{AccountStore, AccountStoreError},
    services::{
        DeliveryChannel, DeliveryError, DispatchError, DispatchOutcome, EmailDispatcher,
        PasswordHasher, PasswordHasherError, SessionIssuer, SessionTokenError,
    },
};
