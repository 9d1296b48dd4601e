#![forbid(unsafe_code)]

//! Terminal color-scheme parsing and role resolution.
//!
//! # Role in the pipeline
//! `chroma-scheme` turns raw line-oriented scheme text into a total
//! [`RoleTable`]: sixteen ANSI slots plus background, foreground,
//! cursor, and selection, every field always populated.
//!
//! Two stages:
//! - [`parse_scheme`] reads the text into a sparse [`RawScheme`] under
//!   configurable size limits. Individual malformed lines are dropped
//!   with a recorded [`ParseDiagnostic`]; only limit violations are
//!   fatal.
//! - [`resolve_roles`] fills every gap through documented fallback
//!   cascades against an explicit [`ReferencePalette`], so downstream
//!   stages never see an optional color.

/// Line-oriented scheme text parsing with limits and diagnostics.
pub mod parse;
/// Role resolution: sparse scheme → total role table.
pub mod roles;

pub use parse::{
    DiagnosticSeverity, ParseDiagnostic, ParseLimits, RawScheme, SchemeParseError, parse_scheme,
};
pub use roles::{ColorRole, ReferencePalette, RoleTable, resolve_roles};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_text_resolves_to_total_table() {
        let scheme = parse_scheme("background = #101010\n", &ParseLimits::default()).unwrap();
        let table = resolve_roles(&scheme, &ReferencePalette::DEFAULT);
        assert_eq!(table.background.color.to_hex(), "#101010");
        // Foreground was absent; the reference default fills it.
        assert_eq!(
            table.foreground.color,
            ReferencePalette::DEFAULT.foreground
        );
    }
}
