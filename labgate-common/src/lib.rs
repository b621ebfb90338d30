//! Form model and configuration shared by the labgate login page.
//!
//! Nothing in this crate touches the DOM, so every rule of the login form
//! can be exercised on the host with `cargo test`.

pub mod config;
pub mod form;

pub use config::LoginConfig;
pub use form::{ErrorMap, Field, FormState, LoginForm, StatusKind, StatusMessage, SubmitOutcome};

/// Internal error types. None of these are ever shown to the user.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Unknown form field: {0}")]
    UnknownField(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to schedule timeout: {0}")]
    Timer(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
