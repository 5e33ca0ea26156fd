//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` variants into user-facing errors with
//! actionable help text.

use miette::Diagnostic;
use thiserror::Error;

use eventdesk_config::ConfigError;
use eventdesk_core::CoreError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────
    #[error("Could not connect to the event service at {url}")]
    #[diagnostic(
        code(eventdesk::connection_failed),
        help(
            "Check that the service is running and reachable.\n\
             Reason: {reason}\n\
             Override the URL with: eventdesk --server http://host:8080/api ..."
        )
    )]
    ConnectionFailed { url: String, reason: String },

    #[error("The event service did not respond in time")]
    #[diagnostic(
        code(eventdesk::timeout),
        help("Raise the limit with --timeout <seconds> or `timeout` in your profile.")
    )]
    Timeout,

    // ── Resources ────────────────────────────────────────────────────
    #[error("Not found: {message}")]
    #[diagnostic(
        code(eventdesk::not_found),
        help("Run: eventdesk events list -o table to see available events")
    )]
    NotFound { message: String },

    // ── API ──────────────────────────────────────────────────────────
    #[error("API error: {message}")]
    #[diagnostic(code(eventdesk::api_error))]
    ApiError { message: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(eventdesk::validation))]
    Validation { field: String, reason: String },

    #[error("Unknown view '{name}'")]
    #[diagnostic(
        code(eventdesk::unknown_view),
        help("Valid views: dashboard, events, create-event, statistics")
    )]
    UnknownView { name: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(eventdesk::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: eventdesk config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Config file already exists at {path}")]
    #[diagnostic(
        code(eventdesk::config_exists),
        help("Pass --force to overwrite it.")
    )]
    ConfigExists { path: String },

    #[error(transparent)]
    #[diagnostic(code(eventdesk::config))]
    Config(#[from] ConfigError),

    // ── Internal ─────────────────────────────────────────────────────
    #[error("{0}")]
    #[diagnostic(code(eventdesk::internal))]
    Internal(String),

    #[error(transparent)]
    #[diagnostic(code(eventdesk::io))]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } => exit_code::CONNECTION,
            Self::Timeout => exit_code::TIMEOUT,
            Self::NotFound { .. } => exit_code::NOT_FOUND,
            Self::Validation { .. } | Self::UnknownView { .. } => exit_code::USAGE,
            Self::ProfileNotFound { .. }
            | Self::ConfigExists { .. }
            | Self::Config(_)
            | Self::ApiError { .. }
            | Self::Internal(_)
            | Self::Io(_) => exit_code::GENERAL,
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ConnectionFailed { url, reason } => Self::ConnectionFailed { url, reason },
            CoreError::Timeout => Self::Timeout,
            CoreError::NotFound { message } => Self::NotFound { message },
            CoreError::ValidationFailed { field, message } => Self::Validation {
                field,
                reason: message,
            },
            CoreError::UnknownView { name } => Self::UnknownView { name },
            CoreError::NoSelection { operation } => Self::Validation {
                field: "event".into(),
                reason: format!("no event selected for {operation}"),
            },
            CoreError::Api { message, .. } => Self::ApiError { message },
            CoreError::Config { message } => Self::Validation {
                field: "server".into(),
                reason: message,
            },
            err @ (CoreError::Render(_) | CoreError::Internal(_)) => {
                Self::Internal(err.to_string())
            }
        }
    }
}
