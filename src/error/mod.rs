use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    FileError(#[from] std::io::Error),
    #[error("could not parse accounts file: {0}")]
    CsvError(#[from] csv::Error),
    #[error("malformed accounts file row at line {line}: {reason}")]
    MalformedRow { line: u64, reason: String },
    #[error(transparent)]
    BusinessError(#[from] crate::domain::error::Error),
    #[error("username and password cannot be empty")]
    EmptyCredentials,
    #[error("username and password cannot contain whitespace")]
    WhitespaceInCredentials,
    #[error("username {username} already exists, please choose another")]
    UsernameTaken { username: String },
    #[error("invalid username or password")]
    InvalidCredentials,
    #[error("no user is logged in")]
    NotLoggedIn,
    #[error("{field} must be a valid number, got `{input}`")]
    InvalidNumber { field: &'static str, input: String },
}

pub type Result<T> = std::result::Result<T, Error>;
