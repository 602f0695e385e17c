use thiserror::Error;

use crate::domain::Cents;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Description must not be empty")]
    EmptyDescription,

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    #[error("Category must not be empty")]
    EmptyCategory,

    #[error("Negative amounts are disabled: {0} cents")]
    NegativeAmount(Cents),

    #[error("Database error: {0}")]
    Database(#[from] anyhow::Error),
}
