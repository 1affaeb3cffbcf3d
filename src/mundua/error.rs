use thiserror::Error;

use crate::photo::PhotoError;

#[derive(Error, Debug)]
pub enum MunduaError {
    #[error("Country not found: {0}")]
    CountryNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error(transparent)]
    Photo(#[from] PhotoError),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, MunduaError>;
