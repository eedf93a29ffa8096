//! Identifier case transforms.
//!
//! One transform each is applied to class names, property names, and
//! filenames; which one is resolved once per batch (see `NamingConfig`).

use crate::error::GenerateError;
use heck::{ToKebabCase, ToLowerCamelCase, ToPascalCase, ToSnakeCase};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Casing applied to an emitted identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CaseStyle {
    Pascal,
    Camel,
    Kebab,
    Snake,
    /// Escape hatch: the identifier passes through byte for byte.
    None,
}

impl CaseStyle {
    /// Applies this case style to `identifier`.
    ///
    /// Word boundaries are underscores, hyphens, whitespace, and internal
    /// case transitions (`HTTPServer` splits as `HTTP`, `Server`). `None`
    /// skips boundary normalization entirely and returns the input
    /// unchanged. Pure and total; the empty string maps to itself.
    #[must_use]
    pub fn apply(self, identifier: &str) -> String {
        match self {
            Self::Pascal => identifier.to_pascal_case(),
            Self::Camel => identifier.to_lower_camel_case(),
            Self::Kebab => identifier.to_kebab_case(),
            Self::Snake => identifier.to_snake_case(),
            Self::None => identifier.to_string(),
        }
    }
}

impl FromStr for CaseStyle {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pascal" => Ok(Self::Pascal),
            "camel" => Ok(Self::Camel),
            "kebab" => Ok(Self::Kebab),
            "snake" => Ok(Self::Snake),
            "none" => Ok(Self::None),
            other => Err(GenerateError::Config(format!(
                "invalid case style `{other}` (expected pascal, camel, kebab, snake, or none)"
            ))),
        }
    }
}

impl fmt::Display for CaseStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name: &str = match self {
            Self::Pascal => "pascal",
            Self::Camel => "camel",
            Self::Kebab => "kebab",
            Self::Snake => "snake",
            Self::None => "none",
        };
        f.write_str(name)
    }
}
