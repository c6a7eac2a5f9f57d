use anyhow::Result;
use indexmap::IndexMap;
use serde_json::Value;
use tokio_postgres::{Client, NoTls};
use tracing::{debug, error};

use crate::db::{ColumnSchema, SchemaMap, TableSchema, PRIMARY_KEY_MARKER};

pub struct Database {
    client: Client,
}

impl Database {
    pub async fn connect(connection_string: &str) -> Result<Self> {
        let (client, connection) = tokio_postgres::connect(connection_string, NoTls).await?;

        // Keep connection alive in background task
        tokio::spawn(async move {
            if let Err(e) = connection.await {
                error!("database connection error: {}", e);
            }
        });

        Ok(Database { client })
    }

    /// Read table and column metadata for one database schema, in the order
    /// the catalog reports it (tables by name, columns by ordinal position).
    pub async fn introspect(&self, schema: &str) -> Result<SchemaMap> {
        let mut tables: SchemaMap = IndexMap::new();

        // Tables first; the table type doubles as the view descriptor.
        let table_rows = self
            .client
            .query(
                "SELECT table_name, table_type
                 FROM information_schema.tables
                 WHERE table_schema = $1
                 AND table_type IN ('BASE TABLE', 'VIEW', 'MATERIALIZED VIEW')
                 ORDER BY table_name",
                &[&schema],
            )
            .await?;

        for row in &table_rows {
            let name: String = row.get(0);
            let table_type: String = row.get(1);
            tables.insert(
                name,
                TableSchema {
                    view: Some(Value::String(table_type)),
                    columns: IndexMap::new(),
                },
            );
        }

        let column_rows = self
            .client
            .query(
                "SELECT table_name, column_name, data_type, is_nullable, column_default
                 FROM information_schema.columns
                 WHERE table_schema = $1
                 ORDER BY table_name, ordinal_position",
                &[&schema],
            )
            .await?;

        for row in &column_rows {
            let table: String = row.get(0);
            let column: String = row.get(1);
            let data_type: String = row.get(2);
            let is_nullable: String = row.get(3);
            let default_value: Option<String> = row.get(4);

            if let Some(entry) = tables.get_mut(&table) {
                entry.columns.insert(
                    column,
                    ColumnSchema {
                        column_type: normalize_type(&data_type),
                        allow_null: is_nullable == "YES",
                        default_value: default_value.map(Value::String),
                        extra: IndexMap::new(),
                    },
                );
            }
        }

        // Mark primary key members the way the settings layer expects them:
        // a property whose value is the key marker.
        let pk_rows = self
            .client
            .query(
                "SELECT tc.table_name, kcu.column_name
                 FROM information_schema.table_constraints tc
                 JOIN information_schema.key_column_usage kcu
                     ON tc.constraint_name = kcu.constraint_name
                     AND tc.table_schema = kcu.table_schema
                 WHERE tc.constraint_type = 'PRIMARY KEY'
                     AND tc.table_schema = $1",
                &[&schema],
            )
            .await?;

        for row in &pk_rows {
            let table: String = row.get(0);
            let column: String = row.get(1);

            if let Some(column_schema) = tables
                .get_mut(&table)
                .and_then(|entry| entry.columns.get_mut(&column))
            {
                column_schema.extra.insert(
                    "key".to_string(),
                    Value::String(PRIMARY_KEY_MARKER.to_string()),
                );
            }
        }

        debug!(schema = %schema, tables = tables.len(), "introspected database schema");
        Ok(tables)
    }
}

// Fold catalog type names into the vocabulary the control mapping knows.
fn normalize_type(data_type: &str) -> String {
    match data_type {
        "timestamp without time zone" | "timestamp with time zone" => "timestamp".to_string(),
        other => other.to_string(),
    }
}
