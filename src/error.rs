use thiserror::Error;

pub type CourtResult<T> = Result<T, CourtError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CourtError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("invalid data: {0}")]
    InvalidData(String),
}
