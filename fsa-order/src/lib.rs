pub mod models;
pub mod manager;

pub use models::{Order, OrderLine, OrderStatus};
pub use manager::{OrderError, OrderProcessor};
