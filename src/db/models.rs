use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// Property value that marks a column as part of the primary key. Any
/// property carrying this value counts, whatever the property is called.
pub const PRIMARY_KEY_MARKER: &str = "pri";

/// Introspected schema: table name -> table metadata, in introspection order.
pub type SchemaMap = IndexMap<String, TableSchema>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TableSchema {
    // The reserved "__view" entry is not a column; route it into its own
    // field so the column map stays clean.
    #[serde(rename = "__view", default, skip_serializing_if = "Option::is_none")]
    pub view: Option<Value>,
    #[serde(flatten)]
    pub columns: IndexMap<String, ColumnSchema>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnSchema {
    #[serde(rename = "type")]
    pub column_type: String,
    pub allow_null: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    // Everything else the introspection pass reported, in reported order.
    #[serde(flatten)]
    pub extra: IndexMap<String, Value>,
}

impl ColumnSchema {
    /// True if any property of this column holds the primary-key marker.
    pub fn has_key_marker(&self) -> bool {
        self.column_type == PRIMARY_KEY_MARKER
            || self.default_value.as_ref().and_then(Value::as_str) == Some(PRIMARY_KEY_MARKER)
            || self
                .extra
                .values()
                .any(|value| value.as_str() == Some(PRIMARY_KEY_MARKER))
    }
}

/// Primary key of a table as detected from column metadata.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrimaryKey {
    #[default]
    None,
    Single(String),
    Composite(Vec<String>),
}

impl PrimaryKey {
    /// Scan every property of every column for the `"pri"` marker. One hit
    /// gives a single key, several give a composite key in column order.
    pub fn detect(columns: &IndexMap<String, ColumnSchema>) -> Self {
        let mut names: Vec<String> = columns
            .iter()
            .filter(|(_, column)| column.has_key_marker())
            .map(|(name, _)| name.clone())
            .collect();

        match names.len() {
            0 => PrimaryKey::None,
            1 => PrimaryKey::Single(names.remove(0)),
            _ => PrimaryKey::Composite(names),
        }
    }

    pub fn names(&self) -> &[String] {
        match self {
            PrimaryKey::None => &[],
            PrimaryKey::Single(name) => std::slice::from_ref(name),
            PrimaryKey::Composite(names) => names,
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names().iter().any(|key| key == name)
    }

    pub fn is_none(&self) -> bool {
        matches!(self, PrimaryKey::None)
    }
}

// Persisted form: "" for no key, the bare name for a single key, an array of
// names for a composite key.
impl Serialize for PrimaryKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            PrimaryKey::None => serializer.serialize_str(""),
            PrimaryKey::Single(name) => serializer.serialize_str(name),
            PrimaryKey::Composite(names) => names.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for PrimaryKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            One(String),
            Many(Vec<String>),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::One(name) if name.is_empty() => PrimaryKey::None,
            Raw::One(name) => PrimaryKey::Single(name),
            Raw::Many(mut names) => match names.len() {
                0 => PrimaryKey::None,
                1 => PrimaryKey::Single(names.remove(0)),
                _ => PrimaryKey::Composite(names),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn column_with(property: &str, value: Value) -> ColumnSchema {
        ColumnSchema {
            extra: IndexMap::from([(property.to_string(), value)]),
            ..Default::default()
        }
    }

    #[test]
    fn test_detect_single_key() {
        let columns = IndexMap::from([
            ("id".to_string(), column_with("flag", json!("pri"))),
            ("name".to_string(), ColumnSchema::default()),
        ]);

        assert_eq!(PrimaryKey::detect(&columns), PrimaryKey::Single("id".to_string()));
    }

    #[test]
    fn test_detect_composite_key_in_column_order() {
        let columns = IndexMap::from([
            ("a".to_string(), column_with("flag", json!("pri"))),
            ("b".to_string(), column_with("key", json!("pri"))),
            ("c".to_string(), ColumnSchema::default()),
        ]);

        assert_eq!(
            PrimaryKey::detect(&columns),
            PrimaryKey::Composite(vec!["a".to_string(), "b".to_string()])
        );
    }

    #[test]
    fn test_detect_no_key() {
        let columns = IndexMap::from([
            ("a".to_string(), column_with("key", json!("uni"))),
            ("b".to_string(), ColumnSchema::default()),
        ]);

        assert_eq!(PrimaryKey::detect(&columns), PrimaryKey::None);
    }

    #[test]
    fn test_marker_property_name_is_irrelevant() {
        let columns = IndexMap::from([
            ("id".to_string(), column_with("constraint_kind", json!("pri"))),
        ]);

        assert_eq!(PrimaryKey::detect(&columns), PrimaryKey::Single("id".to_string()));
    }

    #[test]
    fn test_primary_key_persisted_form() {
        assert_eq!(serde_json::to_value(PrimaryKey::None).unwrap(), json!(""));
        assert_eq!(
            serde_json::to_value(PrimaryKey::Single("id".to_string())).unwrap(),
            json!("id")
        );
        assert_eq!(
            serde_json::to_value(PrimaryKey::Composite(vec!["a".to_string(), "b".to_string()]))
                .unwrap(),
            json!(["a", "b"])
        );

        let none: PrimaryKey = serde_json::from_value(json!("")).unwrap();
        assert_eq!(none, PrimaryKey::None);
        let single: PrimaryKey = serde_json::from_value(json!(["only"])).unwrap();
        assert_eq!(single, PrimaryKey::Single("only".to_string()));
    }

    #[test]
    fn test_table_schema_separates_view_from_columns() {
        let raw = r#"{
            "__view": "BASE TABLE",
            "id": {"type": "integer", "key": "pri"},
            "name": {"type": "character varying", "allow_null": true}
        }"#;

        let table: TableSchema = serde_json::from_str(raw).unwrap();
        assert_eq!(table.view, Some(json!("BASE TABLE")));
        assert_eq!(table.columns.len(), 2);
        assert!(table.columns["id"].has_key_marker());
        assert!(table.columns["name"].allow_null);
        assert!(!table.columns.contains_key("__view"));
    }
}
