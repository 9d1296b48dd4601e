#![forbid(unsafe_code)]

//! Final theme-document assembly.
//!
//! Everything upstream degrades gracefully through defaults; this is
//! the last stage that can check overall structural completeness, so
//! it is the one place past parsing that raises a fatal, typed error.

use std::collections::BTreeMap;

use chroma_color::Rgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::palette::ThemeKind;
use crate::tokens::TokenColor;
use crate::workbench::ColorSpec;

/// Fatal assembly failure: the built pieces do not form a structurally
/// complete theme.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssemblyError {
    /// The workbench color map is empty.
    #[error("workbench color map is empty")]
    EmptyColorMap,
    /// A declared table key is missing from the color map.
    #[error("workbench color map is missing declared key `{0}`")]
    MissingKey(String),
    /// A color value is not 6- or 8-digit hex.
    #[error("key `{key}` has malformed color value `{value}`")]
    MalformedValue {
        key: String,
        value: String,
    },
}

/// The assembled theme: the pipeline's sole output artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThemeDocument {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ThemeKind,
    pub colors: BTreeMap<String, String>,
    #[serde(rename = "tokenColors")]
    pub token_colors: Vec<TokenColor>,
    #[serde(rename = "semanticHighlighting")]
    pub semantic_highlighting: bool,
}

/// Resolve the display name: explicit argument, then the name parsed
/// from the scheme, then one derived from the source identifier.
pub fn resolve_name(
    explicit: Option<&str>,
    parsed: Option<&str>,
    source_id: Option<&str>,
) -> String {
    if let Some(name) = explicit.filter(|n| !n.trim().is_empty()) {
        return name.trim().to_string();
    }
    if let Some(name) = parsed.filter(|n| !n.trim().is_empty()) {
        return name.trim().to_string();
    }
    source_id
        .filter(|id| !id.trim().is_empty())
        .map(title_case_identifier)
        .unwrap_or_else(|| "Untitled Theme".to_string())
}

/// `gruvbox_dark-hard` → `Gruvbox Dark Hard`.
fn title_case_identifier(id: &str) -> String {
    id.split(['_', '-'])
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Assemble and validate the final document.
///
/// `specs` is the table the color map was built from; every declared
/// key must be present and every value must parse as hex.
pub fn assemble(
    name: String,
    kind: ThemeKind,
    colors: BTreeMap<String, String>,
    token_colors: Vec<TokenColor>,
    specs: &[ColorSpec],
) -> Result<ThemeDocument, AssemblyError> {
    if colors.is_empty() {
        return Err(AssemblyError::EmptyColorMap);
    }
    for spec in specs {
        if !colors.contains_key(spec.key) {
            return Err(AssemblyError::MissingKey(spec.key.to_string()));
        }
    }
    for (key, value) in &colors {
        let digits = value.strip_prefix('#').unwrap_or(value);
        if !(digits.len() == 6 || digits.len() == 8) || Rgb::parse(value).is_err() {
            return Err(AssemblyError::MalformedValue {
                key: key.clone(),
                value: value.clone(),
            });
        }
    }

    debug!(
        name = %name,
        colors = colors.len(),
        token_rules = token_colors.len(),
        "assembled theme document"
    );
    Ok(ThemeDocument {
        name,
        kind,
        colors,
        token_colors,
        semantic_highlighting: true,
    })
}
