pub mod product;
pub mod pricing;
pub mod inventory;
pub mod customer;
pub mod bundle;

pub use product::{CosmeticProduct, ProductCategory};
pub use pricing::{ServiceNode, ServiceOption};
pub use inventory::{ObserverRegistry, ProductSubject};
pub use customer::{Customer, LogChannel, NotificationChannel};
pub use bundle::{BeautySet, BeautySetDirector, BeautySetKind};
