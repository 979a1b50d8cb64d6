use std::io;

/// Errors that can occur while evaluating calculator input
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid number: '{0}', please try again")]
    InvalidNumber(String),

    #[error("invalid operator: '{0}' (expected one of +, -, *, /)")]
    InvalidOperator(char),

    #[error("division by zero")]
    DivisionByZero,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Whether the session loop can recover by starting a fresh
    /// iteration. Only stream failures are fatal.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Error::Io(_))
    }
}

/// Result type alias for calculator operations
pub type Result<T> = std::result::Result<T, Error>;
