//! Storage module for collections and configuration.

pub mod collections;
pub mod config;
pub mod database;
pub mod memory;
pub mod schema;

pub use collections::{CollectionStore, KeyValueStore, TEMPLATES_KEY, WORKOUTS_KEY};
pub use config::{AppConfig, ConfigError, PlanningSettings};
pub use database::{Database, StorageError};
pub use memory::MemoryStore;
