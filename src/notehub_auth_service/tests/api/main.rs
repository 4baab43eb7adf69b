mod auth;
mod health;
mod helpers;
