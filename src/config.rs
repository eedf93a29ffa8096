//! The persisted configuration document and naming resolution.
//!
//! The document registers data sources (connection settings keyed by name)
//! and the naming conventions applied to generated identifiers. Case styles
//! and the target language are stored as raw strings and parsed exactly
//! once, before any entity in a batch is generated.

use crate::casing::CaseStyle;
use crate::error::GenerateError;
use crate::settings::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use tracing::warn;

/// Default name of the persisted configuration document.
pub const DEFAULT_CONFIG_FILE: &str = ".DataSourceTypes.json";

/// Default folder for handwritten model sources referenced by the config.
pub const DEFAULT_MODEL_FOLDER: &str = "models";

/// Default output directory for generated model files.
pub const DISCOVERED_TYPES_DIR: &str = "discovered-types";

/// The persisted configuration document.
///
/// Every field is optional; unrecognized fields are ignored. Missing fields
/// fall back per [`NamingConfig::resolve`].
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ConfigFile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_folder: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename_case: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_case: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_case: Option<String>,

    /// Output backend for generated models.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Schema/namespace names the discovery collaborator should crawl.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Vec<String>>,

    /// Registered data sources, keyed by name.
    pub data_sources: BTreeMap<String, DataSourceConfig>,
}

/// One registered data source.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DataSourceConfig {
    pub name: String,

    /// Discovery connector driver name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connector: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub schemas: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename_case: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub class_case: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_case: Option<String>,

    /// Driver-specific connection settings (host, port, credentials, ...).
    #[serde(flatten)]
    pub settings: BTreeMap<String, serde_json::Value>,
}

impl ConfigFile {
    /// Loads the document from `path`.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::IoError` if the file cannot be read, or
    /// `GenerateError::JsonError` if it is not valid JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let text: String = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&text)?)
    }

    /// Loads the document from `path`, or returns defaults when the file
    /// does not exist.
    ///
    /// # Errors
    ///
    /// Same as [`ConfigFile::load`] when the file exists but cannot be
    /// read or parsed.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, GenerateError> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Writes the document to `path` as pretty-printed JSON.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::IoError` if the file cannot be written.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), GenerateError> {
        let text: String = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Inserts or replaces one data source, keyed by its name.
    pub fn register_data_source(&mut self, source: DataSourceConfig) {
        self.data_sources.insert(source.name.clone(), source);
    }

    /// Looks up a registered data source by name.
    #[must_use]
    pub fn data_source(&self, name: &str) -> Option<&DataSourceConfig> {
        self.data_sources.get(name)
    }

    /// Resolves the configured target language, defaulting to TypeScript.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Config` for an unrecognized language name.
    pub fn resolve_language(&self) -> Result<Language, GenerateError> {
        match self.language.as_deref() {
            Some(raw) => raw.parse(),
            None => Ok(Language::default()),
        }
    }
}

/// Case styles for one batch, resolved before generation starts.
///
/// All entities in a batch share one resolved config.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NamingConfig {
    pub class_case: CaseStyle,
    pub property_case: CaseStyle,
    pub filename_case: CaseStyle,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            class_case: CaseStyle::Pascal,
            property_case: CaseStyle::Camel,
            filename_case: CaseStyle::Kebab,
        }
    }
}

impl NamingConfig {
    /// Resolves the active naming config: a source-local override wins over
    /// the global document field, which wins over the hard defaults
    /// (`pascal`/`camel`/`kebab`).
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Config` for an unrecognized case style. This
    /// aborts the whole batch, before any entity is generated.
    pub fn resolve(
        config: &ConfigFile,
        source: Option<&DataSourceConfig>,
    ) -> Result<Self, GenerateError> {
        let defaults: Self = Self::default();
        Ok(Self {
            class_case: resolve_case(
                source.and_then(|s| s.class_case.as_deref()),
                config.class_case.as_deref(),
                defaults.class_case,
            )?,
            property_case: resolve_case(
                source.and_then(|s| s.property_case.as_deref()),
                config.property_case.as_deref(),
                defaults.property_case,
            )?,
            filename_case: resolve_case(
                source.and_then(|s| s.filename_case.as_deref()),
                config.filename_case.as_deref(),
                defaults.filename_case,
            )?,
        })
    }
}

fn resolve_case(
    override_raw: Option<&str>,
    global_raw: Option<&str>,
    default: CaseStyle,
) -> Result<CaseStyle, GenerateError> {
    match override_raw.or(global_raw) {
        Some(raw) => raw.parse(),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_pascal_camel_kebab() {
        let naming: NamingConfig = NamingConfig::default();
        assert_eq!(CaseStyle::Pascal, naming.class_case);
        assert_eq!(CaseStyle::Camel, naming.property_case);
        assert_eq!(CaseStyle::Kebab, naming.filename_case);
    }

    #[test]
    fn resolve_falls_back_to_defaults_on_empty_config() {
        let config: ConfigFile = ConfigFile::default();
        let naming: NamingConfig = NamingConfig::resolve(&config, None).expect("resolves");
        assert_eq!(NamingConfig::default(), naming);
    }

    #[test]
    fn resolve_prefers_source_override_over_global() {
        let config: ConfigFile = serde_json::from_str(
            r#"{
                "classCase": "snake",
                "dataSources": {
                    "legacy": {"name": "legacy", "classCase": "none", "propertyCase": "snake"}
                }
            }"#,
        )
        .expect("valid config");
        let source = config.data_source("legacy").expect("registered");
        let naming: NamingConfig = NamingConfig::resolve(&config, Some(source)).expect("resolves");
        assert_eq!(CaseStyle::None, naming.class_case, "override wins");
        assert_eq!(CaseStyle::Snake, naming.property_case);
        assert_eq!(CaseStyle::Kebab, naming.filename_case, "default fallback");
    }

    #[test]
    fn resolve_global_applies_without_override() {
        let config: ConfigFile =
            serde_json::from_str(r#"{"propertyCase": "snake"}"#).expect("valid config");
        let naming: NamingConfig = NamingConfig::resolve(&config, None).expect("resolves");
        assert_eq!(CaseStyle::Snake, naming.property_case);
        assert_eq!(CaseStyle::Pascal, naming.class_case);
    }

    #[test]
    fn resolve_rejects_invalid_case_style() {
        let config: ConfigFile =
            serde_json::from_str(r#"{"classCase": "shouting"}"#).expect("valid config");
        let error: GenerateError = NamingConfig::resolve(&config, None).unwrap_err();
        match error {
            GenerateError::Config(ref message) => {
                assert!(message.contains("shouting"), "got: {message}");
            }
            other => panic!("expected Config error, got {other:?}"),
        }
    }

    #[test]
    fn unrecognized_top_level_fields_are_ignored() {
        let config: ConfigFile = serde_json::from_str(
            r#"{"classCase": "pascal", "futureFeatureFlag": true, "dataSources": {}}"#,
        )
        .expect("unknown fields must not fail the parse");
        assert_eq!(Some("pascal"), config.class_case.as_deref());
    }

    #[test]
    fn resolve_language_defaults_and_rejects() {
        let config: ConfigFile = ConfigFile::default();
        assert_eq!(Language::TypeScript, config.resolve_language().unwrap());

        let config: ConfigFile =
            serde_json::from_str(r#"{"language": "rust"}"#).expect("valid config");
        assert_eq!(Language::Rust, config.resolve_language().unwrap());

        let config: ConfigFile =
            serde_json::from_str(r#"{"language": "cobol"}"#).expect("valid config");
        assert!(config.resolve_language().is_err());
    }

    #[test]
    fn data_source_flatten_captures_connection_settings() {
        let config: ConfigFile = serde_json::from_str(
            r#"{
                "dataSources": {
                    "mydb": {
                        "name": "mydb",
                        "connector": "mysql",
                        "host": "localhost",
                        "port": 3306
                    }
                }
            }"#,
        )
        .expect("valid config");
        let source = config.data_source("mydb").expect("registered");
        assert_eq!(Some("mysql"), source.connector.as_deref());
        assert_eq!(
            Some(&serde_json::json!("localhost")),
            source.settings.get("host")
        );
        assert_eq!(Some(&serde_json::json!(3306)), source.settings.get("port"));
    }

    #[test]
    fn register_save_load_round_trips() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join(DEFAULT_CONFIG_FILE);

        let mut config: ConfigFile = ConfigFile::default();
        config.register_data_source(DataSourceConfig {
            name: "tst".to_string(),
            connector: Some("mysql".to_string()),
            settings: BTreeMap::from([
                ("host".to_string(), serde_json::json!("localhost")),
                ("password".to_string(), serde_json::json!("my-secret-pw")),
            ]),
            ..Default::default()
        });
        config.save(&path).expect("save");

        let loaded: ConfigFile = ConfigFile::load(&path).expect("load");
        let source = loaded.data_source("tst").expect("round-tripped");
        assert_eq!("tst", source.name);
        assert_eq!(
            Some(&serde_json::json!("localhost")),
            source.settings.get("host")
        );
    }

    #[test]
    fn register_replaces_existing_entry() {
        let mut config: ConfigFile = ConfigFile::default();
        config.register_data_source(DataSourceConfig {
            name: "tst".to_string(),
            connector: Some("mysql".to_string()),
            ..Default::default()
        });
        config.register_data_source(DataSourceConfig {
            name: "tst".to_string(),
            connector: Some("postgresql".to_string()),
            ..Default::default()
        });
        assert_eq!(1, config.data_sources.len());
        assert_eq!(
            Some("postgresql"),
            config.data_source("tst").unwrap().connector.as_deref()
        );
    }

    #[test]
    fn load_or_default_on_missing_file() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config: ConfigFile =
            ConfigFile::load_or_default(dir.path().join("absent.json")).expect("defaults");
        assert!(config.data_sources.is_empty());
    }
}
