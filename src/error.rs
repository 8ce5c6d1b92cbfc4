use std::fmt;

use thiserror::Error;

/// Failure categories a tolerant boundary reports on.
///
/// Every [`Error`] variant folds onto exactly one of these kinds, and the kind
/// name is what appears in a printed diagnostic line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    PathNotFound,
    ContractViolation,
    ParseFailure,
    DecodeFailure,
    ValueFailure,
    PermissionDenied,
    KeyNotFound,
    UnexpectedFailure,
}

impl ErrorKind {
    pub fn name(&self) -> &'static str {
        match self {
            ErrorKind::PathNotFound => "PathNotFound",
            ErrorKind::ContractViolation => "ContractViolation",
            ErrorKind::ParseFailure => "ParseFailure",
            ErrorKind::DecodeFailure => "DecodeFailure",
            ErrorKind::ValueFailure => "ValueFailure",
            ErrorKind::PermissionDenied => "PermissionDenied",
            ErrorKind::KeyNotFound => "KeyNotFound",
            ErrorKind::UnexpectedFailure => "UnexpectedFailure",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error type shared by every strict API in the crate
#[derive(Error, Debug)]
pub enum Error {
    #[error("{0} is not a valid path")]
    PathNotFound(String),

    #[error("{0}")]
    ContractViolation(String),

    #[error("{0}")]
    Parse(String),

    #[error("{0}")]
    Decode(String),

    #[error("{0}")]
    Value(String),

    #[error("{0}")]
    PermissionDenied(String),

    #[error("{0}")]
    KeyNotFound(String),

    #[error("{0}")]
    Unexpected(String),

    #[error("column lengths differ: expected {expected}, found {found}")]
    Consistency { expected: usize, found: usize },

    #[error("index error: {0}")]
    Index(String),

    #[error("visualization error: {0}")]
    Visualization(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Io(#[source] std::io::Error),

    #[error("{0}")]
    Csv(#[source] csv::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Taxonomy kind used when the error is reported as a diagnostic
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::PathNotFound(_) => ErrorKind::PathNotFound,
            Error::ContractViolation(_) => ErrorKind::ContractViolation,
            Error::Parse(_) => ErrorKind::ParseFailure,
            Error::Decode(_) => ErrorKind::DecodeFailure,
            Error::Value(_) | Error::Consistency { .. } | Error::Index(_) => {
                ErrorKind::ValueFailure
            }
            Error::PermissionDenied(_) => ErrorKind::PermissionDenied,
            Error::KeyNotFound(_) => ErrorKind::KeyNotFound,
            Error::Unexpected(_) | Error::Visualization(_) | Error::Config(_) => {
                ErrorKind::UnexpectedFailure
            }
            Error::Io(err) => io_kind(err),
            Error::Csv(err) => match err.kind() {
                csv::ErrorKind::Io(io) => io_kind(io),
                csv::ErrorKind::Utf8 { .. } => ErrorKind::DecodeFailure,
                csv::ErrorKind::UnequalLengths { .. } => ErrorKind::ParseFailure,
                csv::ErrorKind::Deserialize { .. } => ErrorKind::ValueFailure,
                _ => ErrorKind::UnexpectedFailure,
            },
        }
    }
}

fn io_kind(err: &std::io::Error) -> ErrorKind {
    match err.kind() {
        std::io::ErrorKind::NotFound => ErrorKind::PathNotFound,
        std::io::ErrorKind::PermissionDenied => ErrorKind::PermissionDenied,
        std::io::ErrorKind::InvalidData => ErrorKind::DecodeFailure,
        _ => ErrorKind::UnexpectedFailure,
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<csv::Error> for Error {
    fn from(err: csv::Error) -> Self {
        Error::Csv(err)
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Error::Unexpected(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

#[cfg(feature = "visualization")]
impl<E: std::error::Error + Send + Sync + 'static> From<plotters::drawing::DrawingAreaErrorKind<E>>
    for Error
{
    fn from(err: plotters::drawing::DrawingAreaErrorKind<E>) -> Self {
        Error::Visualization(format!("drawing failed: {}", err))
    }
}
