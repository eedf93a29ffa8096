//! Batch generation orchestration.
//!
//! Entities are processed independently: one bad entity becomes a
//! diagnostic, never an abort of its siblings. Naming is resolved by the
//! caller before this module runs, so the only batch-level failure mode
//! left here is none at all.

use crate::config::NamingConfig;
use crate::error::GenerateError;
use crate::printer;
use crate::schema::DiscoveredSchema;
use crate::settings::GenerateSettings;
use crate::synthesize;
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// One generated artifact. Ownership transfers to the caller; the generator
/// keeps nothing.
#[derive(Debug, Clone)]
pub struct GeneratedModel {
    /// The discovered schema this model was generated from.
    pub schema_def: DiscoveredSchema,
    /// Generated source, exactly as it should land on disk.
    pub source_text: String,
    /// Output filename: the filename transform of the schema name plus the
    /// language extension.
    pub filename: String,
}

/// Diagnostic for an entity that produced no artifact.
#[derive(Debug)]
pub struct SkippedEntity {
    pub name: String,
    pub error: GenerateError,
}

/// Result of one batch run.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub models: Vec<GeneratedModel>,
    pub skipped: Vec<SkippedEntity>,
}

/// Generates model source for every entity in the batch.
///
/// Per-entity failures (unknown column type, synthesis errors, duplicate
/// filenames) are collected as [`SkippedEntity`] diagnostics. An empty
/// batch is not an error; it yields an empty report.
#[must_use]
pub fn generate_all(
    schemas: &[DiscoveredSchema],
    naming: &NamingConfig,
    settings: &GenerateSettings,
) -> GenerationReport {
    let mut report: GenerationReport = GenerationReport::default();
    // Filename -> entity that first claimed it.
    let mut claimed: BTreeMap<String, String> = BTreeMap::new();

    for schema in schemas {
        debug!(entity = %schema.name, "generating model");
        match generate_one(schema, naming, settings, &mut claimed) {
            Ok(model) => report.models.push(model),
            Err(error) => {
                warn!(entity = %schema.name, %error, "skipping entity");
                report.skipped.push(SkippedEntity {
                    name: schema.name.clone(),
                    error,
                });
            }
        }
    }
    report
}

fn generate_one(
    schema: &DiscoveredSchema,
    naming: &NamingConfig,
    settings: &GenerateSettings,
    claimed: &mut BTreeMap<String, String>,
) -> Result<GeneratedModel, GenerateError> {
    let class = synthesize::synthesize(schema, naming, settings)?;

    let filename: String = format!(
        "{}{}",
        naming.filename_case.apply(&schema.name),
        settings.language.extension()
    );
    if let Some(existing) = claimed.get(&filename) {
        return Err(GenerateError::DuplicateFilename {
            filename,
            existing: existing.clone(),
        });
    }
    claimed.insert(filename.clone(), schema.name.clone());

    let source_text: String = printer::render(&class, settings.language);
    Ok(GeneratedModel {
        schema_def: schema.clone(),
        source_text,
        filename,
    })
}
