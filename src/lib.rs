//! Discover data source schemas and generate model source files.
//!
//! The core is a schema-to-source generator: a normalized schema description
//! (entity name, ordered typed columns, nullability, identity markers) plus
//! a set of naming transforms goes in; syntactically valid, formatted model
//! source comes out, one file per discovered entity. Live discovery, driver
//! installation, and the interactive configuration flow are collaborators
//! around this crate, not part of it.

mod ast;
mod casing;
mod config;
mod connector;
mod error;
mod generate;
mod printer;
mod schema;
mod settings;
mod synthesize;
mod typemap;

pub use ast::{ClassDecl, FieldDecl, Literal, ObjectLit};
pub use casing::CaseStyle;
pub use config::{
    ConfigFile, DataSourceConfig, NamingConfig, DEFAULT_CONFIG_FILE, DEFAULT_MODEL_FOLDER,
    DISCOVERED_TYPES_DIR,
};
pub use connector::{Connector, ConnectorCatalog, ConnectorFeatures, ConnectorPackage};
pub use error::GenerateError;
pub use generate::{generate_all, GeneratedModel, GenerationReport, SkippedEntity};
pub use printer::{render, render_to_writer};
pub use schema::{DiscoveredColumn, DiscoveredSchema};
pub use settings::{GenerateSettings, Language};
pub use synthesize::synthesize;
pub use typemap::{map_type, Primitive, TypeExpr};

use std::fs;
use std::path::Path;

/// Writes each generated model into `dir`, creating the directory if
/// needed. File contents are the model's `source_text` verbatim.
///
/// # Errors
///
/// Returns `GenerateError::IoError` if the directory cannot be created or a
/// file cannot be written.
pub fn write_models(
    models: &[GeneratedModel],
    dir: impl AsRef<Path>,
) -> Result<(), GenerateError> {
    let dir: &Path = dir.as_ref();
    fs::create_dir_all(dir)?;
    for model in models {
        fs::write(dir.join(&model.filename), &model.source_text)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_models_persists_source_verbatim() {
        let out = tempfile::tempdir().expect("temp dir");
        let dir = out.path().join("discovered-types");

        let schemas: Vec<DiscoveredSchema> = serde_json::from_str(
            r#"[{
                "name": "customer_orders",
                "properties": [
                    {"columnName": "order_id", "type": "Number", "nullable": "NO", "id": true},
                    {"columnName": "total_amt", "type": "Number", "nullable": "YES"}
                ]
            }]"#,
        )
        .expect("valid schema document");

        let report = generate_all(
            &schemas,
            &NamingConfig::default(),
            &GenerateSettings::default(),
        );
        assert!(report.skipped.is_empty());
        write_models(&report.models, &dir).expect("write succeeds");

        let written: String =
            std::fs::read_to_string(dir.join("customer-orders.ts")).expect("file written");
        assert_eq!(report.models[0].source_text, written);
    }
}
