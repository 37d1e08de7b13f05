pub mod demo;
pub mod error;
pub mod storefront;

pub use error::{AppError, AppResult};
pub use storefront::Storefront;
