pub mod payment;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Not configured: {0}")]
    NotConfigured(String),
    #[error("Validation failed: {0}")]
    ValidationError(String),
    #[error("Payment failed: {0}")]
    PaymentFailed(String),
}

pub type CoreResult<T> = Result<T, CoreError>;
