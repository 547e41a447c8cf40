use thiserror::Error;

use crate::domain::{Category, Kind, TransactionId};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AppError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("'{category}' is not a valid {kind} category")]
    CategoryMismatch { kind: Kind, category: Category },

    #[error("Transaction not found: #{0}")]
    TransactionNotFound(TransactionId),
}

impl AppError {
    /// Validation failures are recovered by re-prompting the caller; a
    /// missing id will not materialize later, so no retry applies there.
    pub fn is_validation(&self) -> bool {
        !matches!(self, AppError::TransactionNotFound(_))
    }
}
