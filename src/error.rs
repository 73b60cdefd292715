//! Application-wide error types.
//!
//! Subsystems use their own `thiserror` enums ([`ResolverError`],
//! [`ConfigError`]); this module rolls them up for the CLI layer, which
//! hands them on to `anyhow`.
//!
//! Aggregator failures never reach this type during normal resolution -
//! they are turned into `Resolution::Unavailable` first. Only setup
//! failures (building HTTP clients, writing config, reading input) surface
//! here. Per-message delivery failures are logged by the listener.
//!
//! [`ResolverError`]: crate::resolver::ResolverError
//! [`ConfigError`]: crate::config::ConfigError

/// Application-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level application error.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error (stdin/stdout in `listen`)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Input that could not be decoded
    #[error("Invalid input: {0}")]
    Json(#[from] serde_json::Error),

    /// Resolver setup error
    #[error("Resolver error: {0}")]
    Resolver(#[from] crate::resolver::ResolverError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Generic error with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<Error>,
    },
}

impl Error {
    /// Add context to an error.
    pub fn context(self, ctx: impl Into<String>) -> Self {
        Self::WithContext {
            context: ctx.into(),
            source: Box::new(self),
        }
    }
}

/// Extension trait for adding context to Results.
pub trait ResultExt<T> {
    /// Add context to an error result.
    fn with_context(self, ctx: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn with_context(self, ctx: impl Into<String>) -> Result<T> {
        self.map_err(|e| e.into().context(ctx))
    }
}
