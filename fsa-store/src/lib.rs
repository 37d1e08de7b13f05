pub mod app_config;
pub mod catalog_repo;
pub mod customer_repo;
pub mod error;
pub mod management;

pub use app_config::Config;
pub use catalog_repo::CatalogRepository;
pub use customer_repo::CustomerDirectory;
pub use error::{StoreError, StoreResult};
pub use management::ProductManagement;
