use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::db::{ColumnSchema, PrimaryKey};
use crate::slug::slugify;

/// Persisted admin-UI configuration: table name -> settings, in the order the
/// tables were first seen.
pub type SettingsMap = IndexMap<String, TableSettings>;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableSettings {
    pub slug: String,
    pub table: TableIdentity,
    pub columns: Vec<ColumnSettings>,
    pub mainview: MainView,
    pub listview: TableListView,
    pub editview: TableEditView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableIdentity {
    pub name: String,
    pub pk: PrimaryKey,
    pub verbose: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MainView {
    pub show: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableListView {
    pub order: IndexMap<String, Value>,
    pub page: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableEditView {
    pub readonly: bool,
}

impl TableSettings {
    pub fn new(name: &str, pk: PrimaryKey, view: Option<Value>) -> Self {
        Self {
            slug: slugify(name),
            table: TableIdentity {
                name: name.to_string(),
                pk,
                verbose: name.to_string(),
                view,
            },
            columns: vec![],
            mainview: MainView { show: true },
            listview: TableListView {
                order: IndexMap::new(),
                page: 25,
            },
            editview: TableEditView { readonly: false },
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnSettings {
    pub name: String,
    pub verbose: String,
    pub control: Control,
    #[serde(rename = "type")]
    pub column_type: String,
    pub allow_null: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    pub listview: ColumnListView,
    pub editview: ColumnEditView,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnListView {
    pub show: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnEditView {
    pub show: bool,
}

impl ColumnSettings {
    pub fn new(name: &str, schema: &ColumnSchema) -> Self {
        Self {
            name: name.to_string(),
            verbose: name.to_string(),
            control: Control::from_type(&schema.column_type),
            column_type: schema.column_type.clone(),
            allow_null: schema.allow_null,
            default_value: schema.default_value.clone(),
            listview: ColumnListView { show: true },
            editview: ColumnEditView { show: true },
        }
    }
}

/// Input widget used to render a column's value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Control {
    Text,
    Datetime,
    Radio { options: Vec<String> },
}

impl Control {
    pub fn from_type(column_type: &str) -> Self {
        match column_type {
            "boolean" => Control::Radio {
                options: vec!["True".to_string(), "False".to_string()],
            },
            "timestamp" => Control::Datetime,
            _ => Control::Text,
        }
    }
}
