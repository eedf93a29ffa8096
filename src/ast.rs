//! Syntax tree for generated class declarations.
//!
//! Plain immutable values: synthesis constructs them directly and printing
//! projects them to text. No node is mutated after construction.

use crate::typemap::TypeExpr;

/// A class-like declaration for one discovered entity.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub name: String,
    /// `@model(...)` decorator settings. Present only when decorator
    /// emission is enabled.
    pub model_settings: Option<ObjectLit>,
    pub fields: Vec<FieldDecl>,
}

/// One field of a class declaration.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    /// Field name after the property transform.
    pub name: String,
    /// Column name as discovered, before the transform.
    pub column_name: String,
    pub ty: TypeExpr,
    /// `@property(...)` decorator settings. Present only when decorator
    /// emission is enabled.
    pub settings: Option<ObjectLit>,
}

/// A literal value inside decorator settings.
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Number(serde_json::Number),
    String(String),
    Array(Vec<Literal>),
    Object(ObjectLit),
}

/// An object literal with ordered entries.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ObjectLit {
    pub entries: Vec<(String, Literal)>,
}

impl Literal {
    /// Converts a JSON value into a literal node. Object entries with a
    /// null value are dropped (see `ObjectLit::from_json_entries`); a null
    /// inside an array is kept as `Literal::Null`.
    #[must_use]
    pub fn from_json(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(*flag),
            serde_json::Value::Number(number) => Self::Number(number.clone()),
            serde_json::Value::String(text) => Self::String(text.clone()),
            serde_json::Value::Array(items) => {
                Self::Array(items.iter().map(Self::from_json).collect())
            }
            serde_json::Value::Object(map) => Self::Object(ObjectLit::from_json_entries(map)),
        }
    }
}

impl ObjectLit {
    /// Builds an object literal from JSON entries, dropping null values.
    pub fn from_json_entries<'a, I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (&'a String, &'a serde_json::Value)>,
    {
        let mut object: Self = Self::default();
        for (key, value) in entries {
            if value.is_null() {
                continue;
            }
            object.entries.push((key.clone(), Literal::from_json(value)));
        }
        object
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_converts_scalars() {
        assert_eq!(
            Literal::Bool(true),
            Literal::from_json(&serde_json::json!(true))
        );
        assert_eq!(
            Literal::String("utf8mb4".to_string()),
            Literal::from_json(&serde_json::json!("utf8mb4"))
        );
        assert_eq!(Literal::Null, Literal::from_json(&serde_json::json!(null)));
    }

    #[test]
    fn from_json_entries_drops_null_values() {
        let value = serde_json::json!({"table": "orders", "comment": null, "strict": false});
        let object: ObjectLit = match Literal::from_json(&value) {
            Literal::Object(object) => object,
            other => panic!("expected object, got {other:?}"),
        };
        let keys: Vec<&str> = object.entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(
            vec!["strict", "table"],
            {
                let mut sorted = keys.clone();
                sorted.sort_unstable();
                sorted
            },
            "null-valued entries must be dropped, falsy non-null values kept"
        );
    }

    #[test]
    fn from_json_keeps_nulls_inside_arrays() {
        let value = serde_json::json!(["a", null, 3]);
        let literal: Literal = Literal::from_json(&value);
        match literal {
            Literal::Array(ref items) => {
                assert_eq!(3, items.len());
                assert_eq!(Literal::Null, items[1]);
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn from_json_converts_nested_objects() {
        let value = serde_json::json!({"mysql": {"table": "customer_orders"}});
        let object: ObjectLit = ObjectLit::from_json_entries(value.as_object().unwrap());
        assert_eq!(1, object.entries.len());
        let (key, nested) = &object.entries[0];
        assert_eq!("mysql", key);
        match nested {
            Literal::Object(inner) => {
                assert_eq!(
                    vec![(
                        "table".to_string(),
                        Literal::String("customer_orders".to_string())
                    )],
                    inner.entries
                );
            }
            other => panic!("expected nested object, got {other:?}"),
        }
    }
}
