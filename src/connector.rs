//! Catalog of discovery connector drivers.
//!
//! The catalog is a plain immutable value, parsed once from the bundled
//! JSON document and passed to whatever needs to resolve a driver by name.
//! Installing driver packages and opening live connections happen outside
//! this crate; the catalog only describes what exists.

use crate::error::GenerateError;
use serde::Deserialize;
use std::collections::BTreeMap;

const BUNDLED_CATALOG: &str = include_str!("connectors.json");

/// Capabilities a connector driver advertises.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
#[serde(default)]
pub struct ConnectorFeatures {
    pub discovery: bool,
    pub migration: bool,
}

/// Driver package coordinates.
#[derive(Debug, Clone, Deserialize)]
pub struct ConnectorPackage {
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// One connector driver descriptor.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connector {
    pub name: String,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub features: ConnectorFeatures,

    /// Connection settings the driver accepts, keyed by input name.
    #[serde(default)]
    pub settings: BTreeMap<String, serde_json::Value>,

    #[serde(default)]
    pub package: Option<ConnectorPackage>,
}

impl Connector {
    /// Names of the inputs a user supplies to connect.
    pub fn inputs(&self) -> impl Iterator<Item = &str> {
        self.settings.keys().map(String::as_str)
    }
}

/// Immutable set of known connector descriptors.
#[derive(Debug, Clone)]
pub struct ConnectorCatalog {
    connectors: Vec<Connector>,
}

impl ConnectorCatalog {
    /// Parses a catalog from a JSON document: an object of name to
    /// descriptor.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::JsonError` when the document is malformed.
    pub fn from_json(json: &str) -> Result<Self, GenerateError> {
        let raw: BTreeMap<String, Connector> = serde_json::from_str(json)?;
        Ok(Self {
            connectors: raw.into_values().collect(),
        })
    }

    /// The catalog bundled with this crate.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::JsonError` if the bundled document is
    /// malformed (a packaging defect).
    pub fn bundled() -> Result<Self, GenerateError> {
        Self::from_json(BUNDLED_CATALOG)
    }

    /// All descriptors, discovery-capable or not.
    #[must_use]
    pub fn connectors(&self) -> &[Connector] {
        &self.connectors
    }

    /// Descriptors that support schema discovery.
    pub fn discovery_connectors(&self) -> impl Iterator<Item = &Connector> {
        self.connectors.iter().filter(|c| c.features.discovery)
    }

    /// Resolves a discovery-capable connector by name.
    ///
    /// # Errors
    ///
    /// Returns `GenerateError::Config` when the name is unknown or the
    /// driver does not support discovery.
    pub fn resolve(&self, name: &str) -> Result<&Connector, GenerateError> {
        self.discovery_connectors()
            .find(|c| c.name == name)
            .ok_or_else(|| {
                GenerateError::Config(format!("discovery connector not found: {name}"))
            })
    }
}
