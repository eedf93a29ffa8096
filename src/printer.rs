//! Renders class declarations to source text.
//!
//! A pure projection of the syntax tree: deterministic, referentially
//! transparent, and always terminated by exactly one trailing newline. No
//! semantic transformation happens here.

use crate::ast::{ClassDecl, FieldDecl, Literal, ObjectLit};
use crate::settings::Language;
use crate::typemap::{Primitive, TypeExpr};
use std::io::{self, Write};

const INDENT: &str = "    ";

/// Renders a class declaration to formatted source text.
#[must_use]
pub fn render(class: &ClassDecl, language: Language) -> String {
    let mut buffer: Vec<u8> = Vec::new();
    // Writing into a Vec cannot fail.
    let _ = render_to_writer(class, language, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

/// Renders a class declaration into `writer`.
///
/// # Errors
///
/// Returns an error only if writing to the writer fails.
pub fn render_to_writer<W: Write>(
    class: &ClassDecl,
    language: Language,
    writer: &mut W,
) -> io::Result<()> {
    match language {
        Language::TypeScript => emit_typescript(class, writer),
        Language::Rust => emit_rust(class, writer),
    }
}

fn emit_typescript<W: Write>(class: &ClassDecl, writer: &mut W) -> io::Result<()> {
    if class.model_settings.is_some() {
        writeln!(
            writer,
            "import {{ model, property }} from '@loopback/repository';"
        )?;
        writeln!(writer)?;
    }
    if let Some(settings) = &class.model_settings {
        if settings.is_empty() {
            writeln!(writer, "@model()")?;
        } else {
            writeln!(writer, "@model({})", ts_object(settings))?;
        }
    }
    writeln!(writer, "export class {} {{", class.name)?;
    for field in &class.fields {
        emit_typescript_field(field, writer)?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

fn emit_typescript_field<W: Write>(field: &FieldDecl, writer: &mut W) -> io::Result<()> {
    if let Some(settings) = &field.settings {
        writeln!(writer, "{INDENT}@property({})", ts_object(settings))?;
    }
    writeln!(writer, "{INDENT}{}: {};", field.name, ts_type(field.ty))
}

fn ts_type(ty: TypeExpr) -> String {
    let base: &str = match ty.primitive {
        Primitive::String => "string",
        Primitive::Number => "number",
        Primitive::Date => "Date",
        Primitive::Boolean => "boolean",
    };
    if ty.nullable {
        format!("{base} | undefined")
    } else {
        base.to_string()
    }
}

fn ts_object(object: &ObjectLit) -> String {
    if object.is_empty() {
        return "{}".to_string();
    }
    let entries: Vec<String> = object
        .entries
        .iter()
        .map(|(key, value)| format!("{}: {}", ts_key(key), ts_literal(value)))
        .collect();
    format!("{{ {} }}", entries.join(", "))
}

fn ts_literal(literal: &Literal) -> String {
    match literal {
        Literal::Null => "null".to_string(),
        Literal::Bool(flag) => flag.to_string(),
        Literal::Number(number) => number.to_string(),
        Literal::String(text) => ts_string(text),
        Literal::Array(items) => {
            let rendered: Vec<String> = items.iter().map(ts_literal).collect();
            format!("[{}]", rendered.join(", "))
        }
        Literal::Object(object) => ts_object(object),
    }
}

/// Single-quoted TypeScript string literal.
fn ts_string(text: &str) -> String {
    let escaped: String = text.replace('\\', "\\\\").replace('\'', "\\'");
    format!("'{escaped}'")
}

/// Object keys that are not plain identifiers get quoted.
fn ts_key(key: &str) -> String {
    let mut chars = key.chars();
    let identifier: bool = match chars.next() {
        Some(first) if first.is_ascii_alphabetic() || first == '_' || first == '$' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
        }
        _ => false,
    };
    if identifier {
        key.to_string()
    } else {
        ts_string(key)
    }
}

fn emit_rust<W: Write>(class: &ClassDecl, writer: &mut W) -> io::Result<()> {
    writeln!(
        writer,
        "#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]"
    )?;
    writeln!(writer, "pub struct {} {{", class.name)?;
    for field in &class.fields {
        if field.name != field.column_name {
            writeln!(
                writer,
                "{INDENT}#[serde(rename = \"{}\")]",
                escape_for_rust_attr(&field.column_name)
            )?;
        }
        writeln!(writer, "{INDENT}pub {}: {},", field.name, rust_type(field.ty))?;
    }
    writeln!(writer, "}}")?;
    Ok(())
}

fn rust_type(ty: TypeExpr) -> String {
    let base: &str = match ty.primitive {
        Primitive::String => "String",
        Primitive::Number => "f64",
        Primitive::Date => "chrono::DateTime<chrono::Utc>",
        Primitive::Boolean => "bool",
    };
    if ty.nullable {
        format!("Option<{base}>")
    } else {
        base.to_string()
    }
}

/// Escape a string for use inside a Rust double-quoted attribute.
fn escape_for_rust_attr(s: &str) -> String {
    s.replace('\\', "\\\\").replace('"', "\\\"")
}
