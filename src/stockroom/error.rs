use crate::model::{Field, ProductId};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StockroomError {
    #[error("Invalid {field}: {reason}")]
    Validation { field: Field, reason: String },

    #[error("Product not found: {0}")]
    NotFound(ProductId),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Api Error: {0}")]
    Api(String),
}

/// Coarse classification used by front-ends to decide how to report a failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Persistence,
    Api,
}

impl StockroomError {
    pub fn validation(field: Field, reason: impl Into<String>) -> Self {
        StockroomError::Validation {
            field,
            reason: reason.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            StockroomError::Validation { .. } => ErrorKind::Validation,
            StockroomError::NotFound(_) => ErrorKind::NotFound,
            StockroomError::Io(_) | StockroomError::Serialization(_) | StockroomError::Store(_) => {
                ErrorKind::Persistence
            }
            StockroomError::Api(_) => ErrorKind::Api,
        }
    }
}

pub type Result<T> = std::result::Result<T, StockroomError>;
