pub mod routes;

pub use routes::{AppState, AuthResponse, MessageResponse, auth_router, error::AuthApiError};
