use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// One column of a discovered table or view.
///
/// Immutable once produced by the discovery driver. `type` stays a raw
/// string here; mapping it onto the closed primitive set (and rejecting
/// anything else) is the type mapper's job.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredColumn {
    pub column_name: String,

    /// Primitive type name as the driver reported it.
    #[serde(rename = "type")]
    pub data_type: String,

    /// Whether the column admits NULL. Drivers disagree on the wire form;
    /// a JSON bool and the `YES`/`NO` (or `Y`/`N`) strings are all accepted.
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub nullable: bool,

    /// Identity / primary-key marker. Some drivers call this `id`.
    #[serde(default, alias = "id")]
    pub is_identity: bool,
}

/// One discovered table or view.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscoveredSchema {
    pub name: String,

    /// Columns in discovery order. The order is preserved all the way into
    /// the generated class body; nothing downstream reorders or
    /// deduplicates.
    #[serde(default)]
    pub properties: Vec<DiscoveredColumn>,

    /// Vendor-specific table metadata (comments, engine settings, ...).
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub options: BTreeMap<String, serde_json::Value>,
}

/// Normalizes the driver's nullable flag to a bool.
fn deserialize_nullable<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value: serde_json::Value = Deserialize::deserialize(deserializer)?;
    match value {
        serde_json::Value::Bool(flag) => Ok(flag),
        serde_json::Value::String(text) => match text.to_ascii_uppercase().as_str() {
            "YES" | "Y" => Ok(true),
            "NO" | "N" => Ok(false),
            _ => Err(serde::de::Error::custom(format!(
                "unrecognized nullable flag `{text}` (expected a bool, YES/NO, or Y/N)"
            ))),
        },
        other => Err(serde::de::Error::custom(format!(
            "unrecognized nullable flag {other} (expected a bool, YES/NO, or Y/N)"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_deserializes_bool_nullable() {
        let json: &str = r#"{"columnName": "total_amt", "type": "Number", "nullable": true}"#;
        let column: DiscoveredColumn = serde_json::from_str(json).expect("valid column");
        assert!(column.nullable);
        assert!(!column.is_identity);
    }

    #[test]
    fn column_deserializes_yes_no_nullable() {
        for (flag, want) in [("YES", true), ("NO", false), ("yes", true), ("N", false)] {
            let json: String =
                format!(r#"{{"columnName": "c", "type": "String", "nullable": "{flag}"}}"#);
            let column: DiscoveredColumn = serde_json::from_str(&json).expect("valid column");
            assert_eq!(want, column.nullable, "nullable flag `{flag}`");
        }
    }

    #[test]
    fn column_rejects_garbage_nullable() {
        let json: &str = r#"{"columnName": "c", "type": "String", "nullable": "MAYBE"}"#;
        let error = serde_json::from_str::<DiscoveredColumn>(json).unwrap_err();
        assert!(
            error.to_string().contains("MAYBE"),
            "error must name the offending flag, got: {error}"
        );
    }

    #[test]
    fn column_accepts_id_alias_for_identity() {
        let json: &str = r#"{"columnName": "order_id", "type": "Number", "id": true}"#;
        let column: DiscoveredColumn = serde_json::from_str(json).expect("valid column");
        assert!(column.is_identity);
    }

    #[test]
    fn column_nullable_defaults_to_false() {
        let json: &str = r#"{"columnName": "c", "type": "String"}"#;
        let column: DiscoveredColumn = serde_json::from_str(json).expect("valid column");
        assert!(!column.nullable);
    }

    #[test]
    fn schema_preserves_column_order_and_options() {
        let json: &str = r#"{
            "name": "customer_orders",
            "properties": [
                {"columnName": "order_id", "type": "Number", "nullable": "NO", "id": true},
                {"columnName": "total_amt", "type": "Number", "nullable": "YES"}
            ],
            "options": {"mysql": {"table": "customer_orders"}}
        }"#;
        let schema: DiscoveredSchema = serde_json::from_str(json).expect("valid schema");
        assert_eq!("customer_orders", schema.name);
        let names: Vec<&str> = schema
            .properties
            .iter()
            .map(|c| c.column_name.as_str())
            .collect();
        assert_eq!(vec!["order_id", "total_amt"], names);
        assert!(schema.options.contains_key("mysql"));
    }

    #[test]
    fn schema_properties_default_to_empty() {
        let json: &str = r#"{"name": "empty_view"}"#;
        let schema: DiscoveredSchema = serde_json::from_str(json).expect("valid schema");
        assert!(schema.properties.is_empty());
        assert!(schema.options.is_empty());
    }
}
