use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// Plex Media Server / plex.tv operations
    #[error("Plex error: {0}")]
    Plex(#[from] PlexError),

    /// Catalog traversal
    #[error("Probe error: {0}")]
    Probe(#[from] ProbeError),

    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration issues
    #[error("Configuration error: {0}")]
    Config(String),

    /// Interactive selection failed or was aborted
    #[error("Prompt error: {0}")]
    Prompt(String),

    /// Data validation/serialisation
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Session exceeded its time budget
    #[error("Timed out after {timeout_seconds}s: {operation}")]
    Timeout {
        timeout_seconds: u64,
        operation: String,
    },

    /// Blocking task panicked or was cancelled
    #[error("Task failed: {0}")]
    Task(String),
}

/// Plex HTTP client error types
#[derive(Error, Debug)]
pub enum PlexError {
    /// No access token was configured
    #[error("no Plex access token configured")]
    MissingToken,

    /// Transport-level failure (connect, TLS, timeout, body read)
    #[error("HTTP request failed: {endpoint} - {message}")]
    Http { endpoint: String, message: String },

    /// Server answered with a non-success status
    #[error("unexpected status {status} from {endpoint}")]
    Status { endpoint: String, status: u16 },

    /// Failed to deserialise a response body
    #[error("Deserialisation failed for {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    /// Retry limit exceeded for a request
    #[error("Max retries exceeded ({attempts} attempts): {endpoint}")]
    MaxRetriesExceeded { endpoint: String, attempts: usize },

    /// No server with the requested name is linked to the account
    #[error("no server named \"{name}\" found")]
    ServerNotFound { name: String },

    /// No library with the requested title exists on the server
    #[error("no library titled \"{title}\" found")]
    LibraryNotFound { title: String },

    /// Server entry carries no usable connection
    #[error("server \"{name}\" has no connections")]
    NoConnection { name: String },

    /// Configured URL could not be parsed or joined
    #[error("invalid URL: {0}")]
    InvalidUrl(String),
}

/// Catalog traversal error types
#[derive(Error, Debug)]
pub enum ProbeError {
    /// A catalog node carried a kind outside movie/episode/season/show
    #[error("unsupported catalog item kind \"{kind}\" (key {key})")]
    UnsupportedKind { kind: String, key: String },

    /// The catalog service failed to list a container
    #[error("catalog fetch failed: {0}")]
    Fetch(#[from] PlexError),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;

/// Result type for Plex client operations
pub type PlexResult<T> = Result<T, PlexError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidData(format!("JSON error: {}", err))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::Config(err.to_string())
    }
}

impl From<dialoguer::Error> for AppError {
    fn from(err: dialoguer::Error) -> Self {
        AppError::Prompt(err.to_string())
    }
}
