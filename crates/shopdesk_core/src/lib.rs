//! Core of shopdesk: customer and product records behind one repository
//! contract, thin services over it, and the console/controller front ends.

pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod presentation;
pub mod repo;
pub mod service;

pub use config::{AppConfig, ConfigError, StorageBackend};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::customer::{Customer, NewCustomer};
pub use model::product::{NewProduct, Price, PriceError, Product};
pub use model::record::{Record, RecordId};
pub use presentation::console::{CustomerConsole, MenuChoice};
pub use presentation::product_controller::ProductController;
pub use presentation::{PresentationError, PresentationResult};
pub use repo::record_repo::{InMemoryRepository, RepoError, RepoResult, Repository, WriteOutcome};
pub use repo::sqlite_repo::{SqlRecord, SqliteRepository};
pub use service::customer_service::CustomerService;
pub use service::product_service::ProductService;

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
