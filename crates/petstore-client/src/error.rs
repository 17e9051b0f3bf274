// Error types for petstore-client

use thiserror::Error;

/// Result type alias for petstore-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when using petstore-client
///
/// Non-2xx HTTP responses are never errors. A 404 from the service is an
/// `Ok(ApiResponse)` whose status the caller asserts on.
#[derive(Debug, Error)]
pub enum Error {
    /// A required environment variable is not set
    ///
    /// Raised when building configuration, before any request is sent.
    #[error(
        "Environment variable '{0}' is not set. Set PROTOCOL and API_BASE_URL \
        (for example PROTOCOL=https:// API_BASE_URL=petstore.swagger.io)."
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

    /// The configured base URL or a request path could not be parsed
    #[error("Invalid URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Header name or value rejected by the HTTP layer
    #[error("Invalid header '{name}': {message}")]
    InvalidHeader { name: String, message: String },

    /// Transport-level failure (connection refused, TLS, body read)
    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// XML body could not be deserialized
    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::DeError),

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
