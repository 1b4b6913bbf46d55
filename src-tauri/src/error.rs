use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChefsMenuError {
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("{0}")]
    Auth(String),

    #[error("{0}")]
    NotFound(String),
}

impl From<ChefsMenuError> for String {
    fn from(err: ChefsMenuError) -> Self {
        err.to_string()
    }
}
