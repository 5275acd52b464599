/// Result type for receiptgen-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while setting up the mini app.
///
/// Submission outcomes are not errors: they are reported as
/// [`receiptgen_types::SubmissionResult`] values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO operation failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Host init data or theme params could not be read
    #[error("Invalid host init data: {0}")]
    InitData(String),

    /// HTTP client could not be constructed
    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),
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
