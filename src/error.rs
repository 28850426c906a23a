use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, Serialize, Deserialize, PartialEq, Eq)]
pub enum ConsoleError {
    #[error("unknown role tag: {0}")]
    InvalidRole(String),

    #[error("invalid url: {0}")]
    InvalidUrl(String),

    #[error("failed to deserialize: {0}")]
    Deserialize(String),
}

impl From<serde_json::Error> for ConsoleError {
    fn from(err: serde_json::Error) -> Self {
        ConsoleError::Deserialize(err.to_string())
    }
}

impl From<url::ParseError> for ConsoleError {
    fn from(err: url::ParseError) -> Self {
        ConsoleError::InvalidUrl(err.to_string())
    }
}
