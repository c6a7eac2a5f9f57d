mod client;
mod models;

pub use client::Database;
pub use models::{ColumnSchema, PrimaryKey, SchemaMap, TableSchema, PRIMARY_KEY_MARKER};
