//! Storage module: key-value substrate, typed record store, configuration.

pub mod config;
pub mod dates;
pub mod store;
pub mod substrate;

pub use config::{load_config, save_config, AppConfig, ConfigError};
pub use store::RecordStore;
pub use substrate::{SqliteSubstrate, StorageError, Substrate};
