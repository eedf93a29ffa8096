//! Maps discovered column types onto target-language type expressions.

use crate::error::GenerateError;
use crate::schema::DiscoveredColumn;

/// Closed set of primitive types a discovery driver can report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Primitive {
    String,
    Number,
    Date,
    Boolean,
}

/// A mapped type plus its nullability.
///
/// Nullability rides along as metadata rather than being folded into a type
/// name; each printer backend decides how to spell optionality (a union
/// member, a wrapper type, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeExpr {
    pub primitive: Primitive,
    pub nullable: bool,
}

/// Maps one discovered column to its target type expression.
///
/// # Errors
///
/// Returns `GenerateError::UnknownType`, carrying the raw type string, when
/// the driver reported a type outside the closed primitive set. Never
/// returns a partial result.
pub fn map_type(column: &DiscoveredColumn) -> Result<TypeExpr, GenerateError> {
    let primitive: Primitive = match column.data_type.as_str() {
        "String" => Primitive::String,
        "Number" => Primitive::Number,
        "Date" => Primitive::Date,
        "Boolean" => Primitive::Boolean,
        _ => {
            return Err(GenerateError::UnknownType {
                column: column.column_name.clone(),
                raw: column.data_type.clone(),
            });
        }
    };
    Ok(TypeExpr {
        primitive,
        nullable: column.nullable,
    })
}
