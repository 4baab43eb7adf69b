//! # Notehub - Account authentication and credential-recovery library
//!
//! This is a facade crate that re-exports all public APIs from the notehub
//! auth components. Use this crate to get access to registration, login and
//! the forgot-password/reset-password lifecycle in one place.
//!
//! ## Structure
//!
//! - **Core domain types**: `Email`, `Password`, `Account`, `RecoveryToken`, etc.
//! - **Ports**: `AccountStore`, `PasswordHasher`, `SessionIssuer`, `EmailDispatcher`
//! - **Use cases**: `RegisterUseCase`, `LoginUseCase`, `RequestPasswordResetUseCase`, etc.
//! - **Adapters**: `PostgresAccountStore`, `Argon2PasswordHasher`, `ResendChannel`, etc.
//! - **Service**: `Application` - the runnable HTTP service

/// Core domain types and value objects
pub mod core {
    pub use notehub_core::*;
}

// Re-export most commonly used core types at the root level
pub use notehub_core::{
    Account, AccountView, Email, EmailMessage, Password, PasswordHash, Phone, RecoveryState,
    RecoveryToken, Role, SessionClaims, UploadActor, UploadedNote,
};

/// Port (trait) definitions consumed by the use cases
pub mod ports {
    pub use notehub_core::{
        AccountStore, AccountStoreError, DeliveryChannel, DeliveryError, DispatchError,
        DispatchOutcome, EmailDispatcher, PasswordHasher, PasswordHasherError, SessionIssuer,
        SessionTokenError,
    };
}

pub use notehub_core::{
    AccountStore, AccountStoreError, EmailDispatcher, PasswordHasher, SessionIssuer,
};

/// Application use cases
pub mod use_cases {
    pub use notehub_application::*;
}

pub use notehub_application::{
    ConfirmPasswordResetUseCase, LoginUseCase, NotifyUploadUseCase, RegisterUseCase,
    RequestPasswordResetUseCase,
};

/// Infrastructure adapters
pub mod adapters {
    /// HTTP route handlers
    pub mod http {
        pub use notehub_adapters::http::*;
    }

    /// Persistence implementations
    pub mod persistence {
        pub use notehub_adapters::persistence::*;
    }

    /// Notification delivery implementations
    pub mod email {
        pub use notehub_adapters::email::*;
    }

    /// Password hashing and token issuing
    pub mod security {
        pub use notehub_adapters::security::*;
    }

    /// Configuration
    pub mod config {
        pub use notehub_adapters::config::*;
    }
}

pub use notehub_adapters::{
    email::{FallbackDispatcher, MockEmailDispatcher, ResendChannel, SmtpChannel},
    persistence::{InMemoryAccountStore, PostgresAccountStore},
    security::{Argon2PasswordHasher, JwtSessionIssuer},
};

/// Runnable HTTP service
pub use notehub_auth_service::Application;

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};
