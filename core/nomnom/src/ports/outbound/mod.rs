//! Outbound ポート: nomnom 固有の外界アクセス

pub mod catalog_source;
pub mod config_loader;
pub mod local_storage;

pub use catalog_source::CatalogSource;
pub use config_loader::ConfigLoader;
pub use local_storage::LocalStorage;
