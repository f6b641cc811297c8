// src/error.rs
use std::fmt;

/// Errors that abort an analysis run. There is no partial-result mode.
#[derive(Debug, Clone, PartialEq)]
pub enum GiltError {
    /// A caller-supplied setting (the tax rate) is unusable.
    Configuration(String),
    /// The export cannot be interpreted: undetectable date layout, unknown
    /// category label or a malformed field.
    DataFormat(String),
}

impl GiltError {
    pub fn configuration(message: impl Into<String>) -> Self {
        GiltError::Configuration(message.into())
    }

    pub fn data_format(message: impl Into<String>) -> Self {
        GiltError::DataFormat(message.into())
    }

    pub fn message(&self) -> &str {
        match self {
            GiltError::Configuration(message) | GiltError::DataFormat(message) => message,
        }
    }
}

impl fmt::Display for GiltError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GiltError::Configuration(message) => write!(f, "configuration error: {}", message),
            GiltError::DataFormat(message) => write!(f, "data format error: {}", message),
        }
    }
}

impl std::error::Error for GiltError {}

pub type Result<T> = std::result::Result<T, GiltError>;
