//! admin-settings - synthesize admin-panel rendering settings from a live
//! database schema.
//!
//! The heart of the crate is [`merge::refresh`], which folds freshly
//! introspected table/column metadata into previously saved settings:
//! existing customizations are kept, new tables and columns are added.
//! Around it sit the Postgres introspection client ([`db`]), the persisted
//! settings store ([`store`]) and the host configuration file ([`config`]).

pub mod config;
pub mod db;
pub mod error;
pub mod merge;
pub mod models;
pub mod slug;
pub mod store;

pub use config::{ColumnSettingsConfig, Config, DatabaseConnection};
pub use db::{ColumnSchema, Database, PrimaryKey, SchemaMap, TableSchema};
pub use error::MergeError;
pub use merge::{refresh, RESERVED_COLUMN};
pub use models::{ColumnSettings, Control, SettingsMap, TableSettings};
pub use slug::slugify;
pub use store::SettingsStore;
