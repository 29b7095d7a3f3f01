// SPDX-License-Identifier: MPL-2.0
use std::fmt;

#[derive(Debug, Clone)]
pub enum Error {
    Io(String),
    Config(String),
    Gateway(GatewayError),
}

/// Specific error types for failures at the submission gateway boundary.
///
/// Every variant maps the participation funnel to its retryable `Error`
/// state; the contained text is surfaced to the visitor verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    /// The endpoint answered with a non-2xx status. The body text is kept
    /// for display when the endpoint provides one.
    Http { status: u16, message: String },

    /// The request never completed (DNS, TLS, connection reset, ...).
    Transport(String),

    /// The request exceeded the configured submission timeout.
    Timeout,

    /// No webhook endpoint is configured for forwarded submissions.
    NotConfigured,
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GatewayError::Http { status, message } => {
                if message.is_empty() {
                    write!(f, "Gateway responded with HTTP {}", status)
                } else {
                    write!(f, "Gateway responded with HTTP {}: {}", status, message)
                }
            }
            GatewayError::Transport(msg) => write!(f, "Transport failure: {}", msg),
            GatewayError::Timeout => write!(f, "Gateway did not respond in time"),
            GatewayError::NotConfigured => write!(f, "No webhook endpoint configured"),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(e) => write!(f, "I/O Error: {}", e),
            Error::Config(e) => write!(f, "Config Error: {}", e),
            Error::Gateway(e) => write!(f, "Gateway Error: {}", e),
        }
    }
}

impl From<GatewayError> for Error {
    fn from(err: GatewayError) -> Self {
        Error::Gateway(err)
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
