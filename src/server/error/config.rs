use thiserror::Error;

/// Configuration problems detected during startup.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is missing or unreadable.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),

    /// A configured URL failed to parse.
    #[error("Invalid URL in {name}: {source}")]
    InvalidUrl {
        /// Name of the configuration value.
        name: String,
        /// The underlying parse error.
        #[source]
        source: url::ParseError,
    },
}
