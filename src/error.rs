use thiserror::Error;

#[derive(Error, Debug)]
pub enum TriptychError {
    #[error("invalid status '{0}'")]
    InvalidStatus(String),

    #[error("invalid deadline '{0}': expected YYYY-MM-DD")]
    InvalidDeadline(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, TriptychError>;
