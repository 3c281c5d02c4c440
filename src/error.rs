use thiserror::Error;

/// Custom error types for hovertip
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TooltipError {
    #[error("Trigger element has no aria-describedby reference to a tooltip")]
    MissingDescribedBy,

    #[error("No tooltip element with id '{0}'")]
    TooltipNotFound(String),

    #[error("Invalid config: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for TooltipError {
    fn from(err: std::io::Error) -> Self {
        TooltipError::Io(err.to_string())
    }
}

impl From<toml::de::Error> for TooltipError {
    fn from(err: toml::de::Error) -> Self {
        TooltipError::Config(err.message().to_string())
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
