use std::net::AddrParseError;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// README for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be parsed as a socket address.
    #[error("Invalid socket address '{value}' in {name}: {source}")]
    InvalidSocketAddr {
        name: String,
        value: String,
        #[source]
        source: AddrParseError,
    },
}
