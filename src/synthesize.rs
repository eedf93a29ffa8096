//! Builds class declarations from discovered schemas.

use crate::ast::{ClassDecl, FieldDecl, Literal, ObjectLit};
use crate::config::NamingConfig;
use crate::error::GenerateError;
use crate::schema::{DiscoveredColumn, DiscoveredSchema};
use crate::settings::GenerateSettings;
use crate::typemap;

/// Builds the class declaration for one discovered entity.
///
/// The class name is the class transform of the schema name; each field is
/// the property transform of its column name, typed via the type mapper.
/// Field order follows discovery order exactly. Duplicate post-transform
/// field names pass through untouched; the collision is the caller's to
/// observe, not an error here.
///
/// # Errors
///
/// Returns `GenerateError::Synthesis` for an empty schema name, or
/// propagates `GenerateError::UnknownType` from the type mapper. Either way
/// the failure is scoped to this one entity.
pub fn synthesize(
    schema: &DiscoveredSchema,
    naming: &NamingConfig,
    settings: &GenerateSettings,
) -> Result<ClassDecl, GenerateError> {
    if schema.name.is_empty() {
        return Err(GenerateError::Synthesis(
            "discovered schema has an empty name".to_string(),
        ));
    }

    let mut fields: Vec<FieldDecl> = Vec::with_capacity(schema.properties.len());
    for column in &schema.properties {
        let ty = typemap::map_type(column)?;
        let name: String = naming.property_case.apply(&column.column_name);
        let field_settings: Option<ObjectLit> = if settings.emit_decorators {
            Some(property_settings(column, &name))
        } else {
            None
        };
        fields.push(FieldDecl {
            name,
            column_name: column.column_name.clone(),
            ty,
            settings: field_settings,
        });
    }

    let model_settings: Option<ObjectLit> = if settings.emit_decorators {
        Some(model_settings(schema))
    } else {
        None
    };

    Ok(ClassDecl {
        name: naming.class_case.apply(&schema.name),
        model_settings,
        fields,
    })
}

/// `@property(...)` settings for one column. The identity marker is always
/// spelled as a bool (`id: true`), never the raw driver value.
fn property_settings(column: &DiscoveredColumn, field_name: &str) -> ObjectLit {
    let mut settings: ObjectLit = ObjectLit::default();
    settings.entries.push((
        "type".to_string(),
        Literal::String(column.data_type.clone()),
    ));
    if column.is_identity {
        settings.entries.push(("id".to_string(), Literal::Bool(true)));
    }
    if column.nullable {
        settings
            .entries
            .push(("nullable".to_string(), Literal::Bool(true)));
    }
    if field_name != column.column_name {
        settings.entries.push((
            "columnName".to_string(),
            Literal::String(column.column_name.clone()),
        ));
    }
    settings
}

/// `@model(...)` settings: the schema's vendor options under a `settings`
/// key (the decorator API's name for them), nulls dropped.
fn model_settings(schema: &DiscoveredSchema) -> ObjectLit {
    let mut settings: ObjectLit = ObjectLit::default();
    if !schema.options.is_empty() {
        settings.entries.push((
            "settings".to_string(),
            Literal::Object(ObjectLit::from_json_entries(&schema.options)),
        ));
    }
    settings
}
