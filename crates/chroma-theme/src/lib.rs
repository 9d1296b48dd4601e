#![forbid(unsafe_code)]

//! Palette extension and editor-theme synthesis.
//!
//! # Role in the pipeline
//! `chroma-theme` turns a resolved terminal scheme into a complete
//! editor color theme: several hundred workbench surface colors plus
//! scoped syntax-highlighting rules, all derived from ~20 source
//! colors through deterministic color arithmetic rather than
//! hand-authored per-theme tables.
//!
//! Stages, leaves first:
//! - [`palette`] expands the role table into a working palette
//!   (background hierarchy, accent variants).
//! - [`workbench`] evaluates the declarative color table.
//! - [`tokens`] builds baseline syntax rules and cyclic rainbow rules.
//! - [`assemble`] validates and produces the final [`ThemeDocument`].
//!
//! [`convert`] wires the whole pipeline behind one call. Every stage is
//! a pure function over immutable inputs; independent conversions can
//! run in parallel with no shared state.

/// Final document assembly and name resolution.
pub mod assemble;
/// Extended palette derivation from the role table.
pub mod palette;
/// Scoped syntax-highlighting rules.
pub mod tokens;
/// Declarative workbench color table.
pub mod workbench;

use chroma_scheme::{ParseLimits, ReferencePalette, SchemeParseError, parse_scheme, resolve_roles};
use thiserror::Error;
use tracing::debug;

pub use assemble::{AssemblyError, ThemeDocument, assemble, resolve_name};
pub use palette::{
    AccentVariants, BACKGROUND_LEVELS, BackgroundHierarchy, ExtendedPalette, PrimaryAccents,
    ThemeKind, classify_kind,
};
pub use tokens::{
    DEFAULT_RAINBOW_DEPTH, FontStyle, RAINBOW_CYCLE_LEN, Scope, SyntaxSpec, TokenColor,
    TokenSettings, build_syntax_rules, rainbow_rules,
};
pub use workbench::{ColorSpec, WORKBENCH_COLORS, build_workbench_colors};

/// Options for a single conversion.
#[derive(Debug, Clone, Default)]
pub struct ConvertOptions {
    /// Explicit display name; wins over anything discovered in the
    /// scheme text.
    pub name: Option<String>,
    /// Source identifier (e.g. file stem) used to derive a name when
    /// neither an explicit nor a parsed name exists.
    pub source_id: Option<String>,
    /// Parser resource limits.
    pub limits: ParseLimits,
    /// Fallback colors for roles the scheme leaves unset.
    pub reference: Option<ReferencePalette>,
}

/// Failure of the end-to-end conversion.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Parse(#[from] SchemeParseError),
    #[error(transparent)]
    Assembly(#[from] AssemblyError),
}

/// Convert raw scheme text into a complete theme document.
///
/// Single deterministic pass: parse → resolve roles → classify →
/// extend palette → build colors and token rules → assemble. Per-line
/// parse anomalies are absorbed upstream; only limit violations and
/// structural assembly failures surface here.
pub fn convert(source: &str, options: &ConvertOptions) -> Result<ThemeDocument, ConvertError> {
    let scheme = parse_scheme(source, &options.limits)?;
    let reference = options.reference.unwrap_or(ReferencePalette::DEFAULT);
    let roles = resolve_roles(&scheme, &reference);
    let kind = classify_kind(roles.background.color);
    let palette = ExtendedPalette::derive(&roles, kind);

    let colors = build_workbench_colors(&palette, WORKBENCH_COLORS);
    let mut token_colors = build_syntax_rules(&palette);
    token_colors.extend(rainbow_rules(&palette, DEFAULT_RAINBOW_DEPTH));

    let name = resolve_name(
        options.name.as_deref(),
        scheme.name.as_deref(),
        options.source_id.as_deref(),
    );
    debug!(name = %name, ?kind, "converting scheme to theme");
    Ok(assemble(name, kind, colors, token_colors, WORKBENCH_COLORS)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn convert_produces_a_dark_theme_for_a_dark_scheme() {
        let doc = convert("background=#1a1a1a\n", &ConvertOptions::default()).unwrap();
        assert_eq!(doc.kind, ThemeKind::Dark);
        assert_eq!(doc.colors["editor.background"], "#1a1a1a");
    }

    #[test]
    fn convert_is_deterministic() {
        let options = ConvertOptions::default();
        let a = convert("color4=#61afef\n", &options).unwrap();
        let b = convert("color4=#61afef\n", &options).unwrap();
        assert_eq!(a, b);
    }
}
