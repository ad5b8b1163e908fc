//! Durable storage for the FormArte portal
//!
//! The portal keeps all of its state in a handful of string entries (the
//! booking array under `allBookings`, the account directory under `users`).
//! This crate provides two [`KeyValueStore`](formarte_common::KeyValueStore)
//! backends: a JSON file that survives restarts and a volatile in-memory map.
//!
//! # Example
//!
//! ```rust,no_run
//! use formarte_common::KeyValueStore;
//! use formarte_config::StorageConfig;
//! use formarte_storage::StoreFactory;
//!
//! async fn open() -> Result<(), formarte_storage::StorageError> {
//!     let store = StoreFactory::new()
//!         .create_store(&StorageConfig::default())
//!         .await?;
//!     let raw = store.get("allBookings").await?;
//!     println!("{:?}", raw);
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod factory;
pub mod file;
pub mod memory;

pub use error::StorageError;
pub use factory::{SharedStore, StoreFactory};
pub use file::JsonFileStore;
pub use memory::MemoryStore;
