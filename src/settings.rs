//! Settings that control model generation.

use crate::error::GenerateError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Target language for generated model source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    TypeScript,
    Rust,
}

impl Language {
    /// File extension for generated models, dot included.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::TypeScript => ".ts",
            Self::Rust => ".rs",
        }
    }
}

impl FromStr for Language {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "typescript" => Ok(Self::TypeScript),
            "rust" => Ok(Self::Rust),
            other => Err(GenerateError::Config(format!(
                "unknown target language `{other}` (expected typescript or rust)"
            ))),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeScript => f.write_str("typescript"),
            Self::Rust => f.write_str("rust"),
        }
    }
}

/// Settings that control generation behavior for one batch.
#[derive(Debug, Clone, Default)]
pub struct GenerateSettings {
    pub language: Language,

    /// When true, generated classes carry `@model`/`@property` decorators
    /// populated from the discovered metadata (TypeScript backend only).
    ///
    /// **Default: false (disabled).** Plain class bodies; consumers must opt
    /// in to decorator emission.
    pub emit_decorators: bool,
}
