use fsa_core::CoreError;
use fsa_order::OrderError;
use fsa_store::StoreError;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Unknown beauty set type: {0}. Available: beginner, professional, gift")]
    UnknownSetKind(String),

    #[error("Report output failed: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;
