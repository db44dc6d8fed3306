//! nomnom 固有のアダプタ（ports::outbound の実装）

pub mod config;
pub mod file_local_storage;
pub mod json_catalog_source;
pub mod memory_local_storage;
pub mod mock_catalog;

pub use config::FileConfigLoader;
pub use file_local_storage::FileLocalStorage;
pub use json_catalog_source::JsonCatalogSource;
pub use memory_local_storage::MemoryLocalStorage;
pub use mock_catalog::MockCatalogSource;
