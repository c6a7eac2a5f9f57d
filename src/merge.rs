use tracing::debug;

use crate::config::ColumnSettingsConfig;
use crate::db::{PrimaryKey, SchemaMap};
use crate::error::MergeError;
use crate::models::{ColumnSettings, SettingsMap, TableSettings};

/// Column name reserved by the host for its own per-table bookkeeping; it is
/// never surfaced as a UI column.
pub const RESERVED_COLUMN: &str = "admin_settings_columns";

/// Merge freshly introspected schema metadata into persisted settings.
///
/// Every table and column in `schema` ends up represented in `settings`;
/// entries that already exist keep their customizations untouched. The merge
/// is additive only: columns are appended, never removed or reordered. With
/// an active `config`, the configured timestamp columns and the primary key
/// are hidden from the edit view.
pub fn refresh(
    settings: &mut SettingsMap,
    schema: &SchemaMap,
    config: Option<&ColumnSettingsConfig>,
) -> Result<(), MergeError> {
    for (table_name, table_schema) in schema {
        let pk = PrimaryKey::detect(&table_schema.columns);

        let entry = settings.entry(table_name.clone()).or_insert_with(|| {
            debug!(table = %table_name, "creating settings for new table");
            TableSettings::new(table_name, pk.clone(), table_schema.view.clone())
        });

        // Primary key columns always come first for tables seen for the
        // first time. On later refreshes a missing key column is still
        // appended, but an existing one stays where it is.
        for key_name in pk.names() {
            if exists(&entry.columns, key_name) {
                continue;
            }
            if let Some(column_schema) = table_schema.columns.get(key_name) {
                entry.columns.push(ColumnSettings::new(key_name, column_schema));
            }
        }

        for (name, column_schema) in &table_schema.columns {
            if pk.contains(name) || name == RESERVED_COLUMN || exists(&entry.columns, name) {
                continue;
            }
            entry.columns.push(ColumnSettings::new(name, column_schema));
        }

        if let Some(cfg) = config.filter(|cfg| cfg.active) {
            mask_timestamp_column(entry, table_name, &cfg.create_timestamp_label)?;
            mask_timestamp_column(entry, table_name, &cfg.update_timestamp_label)?;
            for key_name in pk.names() {
                if let Some(column) = column_mut(&mut entry.columns, key_name) {
                    hide_in_editview(column);
                }
            }
        }
    }

    Ok(())
}

fn exists(columns: &[ColumnSettings], name: &str) -> bool {
    columns.iter().any(|column| column.name == name)
}

fn column_mut<'a>(
    columns: &'a mut [ColumnSettings],
    name: &str,
) -> Option<&'a mut ColumnSettings> {
    columns.iter_mut().find(|column| column.name == name)
}

fn mask_timestamp_column(
    table: &mut TableSettings,
    table_name: &str,
    label: &str,
) -> Result<(), MergeError> {
    match column_mut(&mut table.columns, label) {
        Some(column) => {
            hide_in_editview(column);
            Ok(())
        }
        None => Err(MergeError::MisconfiguredTimestampColumn {
            table: table_name.to_string(),
            column: label.to_string(),
        }),
    }
}

// Masked columns are filled in by the database, not the user.
fn hide_in_editview(column: &mut ColumnSettings) {
    column.editview.show = false;
    column.allow_null = true;
}
