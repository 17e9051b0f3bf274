// Error types for scheduler-pages

use thiserror::Error;

/// Result type alias for scheduler-pages operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving page objects
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is not set
    ///
    /// Raised when building configuration, before a browser is launched.
    #[error(
        "Environment variable '{0}' is not set. Set PROTOCOL and GUI_BASE_URL \
        (for example PROTOCOL=https:// GUI_BASE_URL=stephenchou1017.github.io)."
    )]
    MissingConfig(String),

    /// A `.env` file could not be read or parsed
    #[error("Cannot load environment file '{path}': {source}")]
    EnvFile {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    /// An optional environment variable is set to an unusable value
    #[error("Environment variable '{var}' has invalid value '{value}': {message}")]
    InvalidConfig {
        var: String,
        value: String,
        message: String,
    },

    /// The configured base URL or a page path could not be parsed
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Error reported by the Playwright bindings
    #[error(transparent)]
    Playwright(#[from] playwright_rs::Error),

    /// Element did not become visible in time
    ///
    /// Raised by guarded clicks; names the selector of the step that hung.
    #[error("Timeout: element '{selector}' was not visible after {timeout_ms}ms")]
    Timeout { selector: String, timeout_ms: u64 },

    /// A page-state verification failed
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// View name outside the page's view-toggle set
    #[error("Unknown scheduler view '{0}' (expected 'day' or 'month')")]
    UnknownView(String),

    /// Date label text could not be read as a date
    #[error("Cannot parse date label '{0}'")]
    DateLabel(String),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }
}
