use std::net::AddrParseError;
use std::num::ParseIntError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port value '{value}': {source}")]
    PortParseError {
        value: String,
        source: ParseIntError,
    },

    #[error("invalid port '{value}': must be 1-65535")]
    InvalidPort { value: String },

    #[error("invalid bind address '{value}': {source}")]
    InvalidBindAddr {
        value: String,
        source: AddrParseError,
    },

    #[error("{var} must be greater than zero")]
    ZeroTimeout { var: &'static str },

    #[error("{var} must be greater than zero")]
    ZeroCount { var: &'static str },
}
