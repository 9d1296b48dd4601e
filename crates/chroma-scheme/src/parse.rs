#![forbid(unsafe_code)]

//! Line-oriented scheme text parsing.
//!
//! Input lines are one of:
//! - a comment (leading `#` or `//`), ignored;
//! - `palette = N=#hex` or `paletteN = #hex` for ANSI slot `N`;
//! - `key = value` for the fixed role vocabulary (`background`,
//!   `foreground`, `cursor`, `selection`, `colorN`, `name`).
//!
//! Comment detection runs before any `=` handling: `#` opens both
//! comments and hex values, but a bare hex color is never a full line,
//! so a leading `#` always means comment. Per-line failures drop the
//! entry with a diagnostic and never abort the file; only the size and
//! line-count limits are fatal, and both are enforced before any
//! per-line work.

use chroma_color::Rgb;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Pre-parse resource limits for scheme text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Maximum input size in bytes.
    pub max_bytes: usize,
    /// Maximum number of input lines.
    pub max_lines: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self {
            max_bytes: 256 * 1024,
            max_lines: 4096,
        }
    }
}

/// Fatal scheme-level parse failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemeParseError {
    /// Input exceeds the configured byte limit.
    #[error("scheme text is {actual} bytes, above the {limit} byte limit")]
    TooLarge {
        /// Observed input size.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },
    /// Input exceeds the configured line-count limit.
    #[error("scheme text has {actual} lines, above the {limit} line limit")]
    TooManyLines {
        /// Observed line count.
        actual: usize,
        /// Configured limit.
        limit: usize,
    },
}

/// Severity of a non-fatal parse diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosticSeverity {
    Info,
    Warning,
}

/// A recorded per-line anomaly. The offending entry was dropped and
/// parsing continued.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParseDiagnostic {
    /// Diagnostic code (`SC001`..).
    pub code: &'static str,
    /// Severity of the anomaly.
    pub severity: DiagnosticSeverity,
    /// Human-readable description.
    pub message: String,
    /// 1-based source line number.
    pub line: usize,
}

/// Sparse parse result: a closed schema over the recognized roles.
///
/// Absent fields stay `None`; [`crate::resolve_roles`] defaults them.
/// Duplicate keys follow assignment semantics: the last occurrence
/// wins.
#[derive(Debug, Clone, Default)]
pub struct RawScheme {
    /// Display name, if the scheme declared one (`name = ...`).
    pub name: Option<String>,
    pub background: Option<Rgb>,
    pub foreground: Option<Rgb>,
    pub cursor: Option<Rgb>,
    pub selection: Option<Rgb>,
    /// The 16 ANSI slots, `color0`..`color15`.
    pub ansi: [Option<Rgb>; 16],
    /// Anomalies recorded while parsing.
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl RawScheme {
    /// True when no color or name was recognized at all.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.background.is_none()
            && self.foreground.is_none()
            && self.cursor.is_none()
            && self.selection.is_none()
            && self.ansi.iter().all(Option::is_none)
    }
}

/// Parse scheme text into a sparse [`RawScheme`].
///
/// Limit violations are the only fatal outcome; every per-line anomaly
/// is absorbed as a [`ParseDiagnostic`] on the result.
pub fn parse_scheme(text: &str, limits: &ParseLimits) -> Result<RawScheme, SchemeParseError> {
    if text.len() > limits.max_bytes {
        return Err(SchemeParseError::TooLarge {
            actual: text.len(),
            limit: limits.max_bytes,
        });
    }
    let line_count = text.lines().count();
    if line_count > limits.max_lines {
        return Err(SchemeParseError::TooManyLines {
            actual: line_count,
            limit: limits.max_lines,
        });
    }

    let mut scheme = RawScheme::default();
    for (idx, raw_line) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw_line.trim();
        if line.is_empty() || line.starts_with('#') || line.starts_with("//") {
            continue;
        }
        let Some((raw_key, raw_value)) = line.split_once('=') else {
            // Not a key/value line; skipped without a diagnostic.
            continue;
        };
        assign(&mut scheme, &normalize_key(raw_key), raw_value.trim(), line_no);
    }

    debug!(
        diagnostics = scheme.diagnostics.len(),
        empty = scheme.is_empty(),
        "parsed scheme text"
    );
    Ok(scheme)
}

/// Lowercase a key and strip whitespace and common separators.
fn normalize_key(key: &str) -> String {
    key.chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-' && *c != '.')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn assign(scheme: &mut RawScheme, key: &str, value: &str, line: usize) {
    match key {
        "background" | "backgroundcolor" => {
            if let Some(rgb) = parse_color(scheme, key, value, line) {
                scheme.background = Some(rgb);
            }
        }
        "foreground" | "foregroundcolor" => {
            if let Some(rgb) = parse_color(scheme, key, value, line) {
                scheme.foreground = Some(rgb);
            }
        }
        "cursor" | "cursorcolor" => {
            if let Some(rgb) = parse_color(scheme, key, value, line) {
                scheme.cursor = Some(rgb);
            }
        }
        "selection" | "selectionbackground" => {
            if let Some(rgb) = parse_color(scheme, key, value, line) {
                scheme.selection = Some(rgb);
            }
        }
        "name" | "scheme" | "schemename" => {
            if value.is_empty() {
                record(scheme, "SC004", DiagnosticSeverity::Info, line, "empty scheme name");
            } else {
                scheme.name = Some(value.to_string());
            }
        }
        // `palette = N=#hex`: the slot index lives inside the value.
        "palette" => match value.split_once('=') {
            Some((index, hex)) => assign_slot(scheme, index.trim(), hex.trim(), line),
            None => record(
                scheme,
                "SC002",
                DiagnosticSeverity::Warning,
                line,
                format!("palette entry `{value}` is missing an `index=color` pair"),
            ),
        },
        _ => {
            // `colorN` / `paletteN` carry the slot index as a suffix.
            if let Some(index) = key.strip_prefix("color").or_else(|| key.strip_prefix("palette")) {
                assign_slot(scheme, index, value, line);
            } else {
                record(
                    scheme,
                    "SC005",
                    DiagnosticSeverity::Info,
                    line,
                    format!("unrecognized key `{key}`"),
                );
            }
        }
    }
}

fn assign_slot(scheme: &mut RawScheme, index: &str, value: &str, line: usize) {
    let slot = match index.parse::<u16>() {
        Ok(n) if n <= 15 => n as usize,
        Ok(n) if n <= 255 => {
            record(
                scheme,
                "SC003",
                DiagnosticSeverity::Info,
                line,
                format!("palette index {n} is outside the 16-slot role model"),
            );
            return;
        }
        _ => {
            record(
                scheme,
                "SC002",
                DiagnosticSeverity::Warning,
                line,
                format!("palette index `{index}` is not a number in [0, 255]"),
            );
            return;
        }
    };
    if let Some(rgb) = parse_color(scheme, &format!("color{slot}"), value, line) {
        scheme.ansi[slot] = Some(rgb);
    }
}

fn parse_color(scheme: &mut RawScheme, key: &str, value: &str, line: usize) -> Option<Rgb> {
    match Rgb::parse(value) {
        Ok(rgb) => Some(rgb),
        Err(err) => {
            record(
                scheme,
                "SC001",
                DiagnosticSeverity::Warning,
                line,
                format!("dropped `{key}`: {err}"),
            );
            None
        }
    }
}

fn record(
    scheme: &mut RawScheme,
    code: &'static str,
    severity: DiagnosticSeverity,
    line: usize,
    message: impl Into<String>,
) {
    let message = message.into();
    match severity {
        DiagnosticSeverity::Warning => warn!(code, line, "{message}"),
        DiagnosticSeverity::Info => debug!(code, line, "{message}"),
    }
    scheme.diagnostics.push(ParseDiagnostic {
        code,
        severity,
        message,
        line,
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> RawScheme {
        parse_scheme(text, &ParseLimits::default()).unwrap()
    }

    #[test]
    fn parses_key_value_colors() {
        let scheme = parse("background=#1a1a1a\nforeground = #e0e0e0\ncolor1=#ff0000\n");
        assert_eq!(scheme.background.unwrap().to_hex(), "#1a1a1a");
        assert_eq!(scheme.foreground.unwrap().to_hex(), "#e0e0e0");
        assert_eq!(scheme.ansi[1].unwrap().to_hex(), "#ff0000");
        assert!(scheme.diagnostics.is_empty());
    }

    #[test]
    fn accepts_hex_without_hash() {
        let scheme = parse("color0=1a1a1a");
        assert_eq!(scheme.ansi[0].unwrap().to_hex(), "#1a1a1a");
    }

    #[test]
    fn parses_palette_index_form() {
        let scheme = parse("palette = 4=#0000ff\npalette = 15 = #ffffff\n");
        assert_eq!(scheme.ansi[4].unwrap().to_hex(), "#0000ff");
        assert_eq!(scheme.ansi[15].unwrap().to_hex(), "#ffffff");
    }

    #[test]
    fn parses_palette_suffix_form() {
        let scheme = parse("palette7 = #abb2bf");
        assert_eq!(scheme.ansi[7].unwrap().to_hex(), "#abb2bf");
    }

    #[test]
    fn skips_comments_and_blank_lines() {
        let scheme = parse("# background=#111111\n\n// color0=#222222\nbackground=#333333\n");
        assert_eq!(scheme.background.unwrap().to_hex(), "#333333");
        assert!(scheme.ansi[0].is_none());
    }

    #[test]
    fn lines_without_equals_are_skipped_silently() {
        let scheme = parse("this is not a scheme line\nbackground=#101010\n");
        assert_eq!(scheme.background.unwrap().to_hex(), "#101010");
        assert!(scheme.diagnostics.is_empty());
    }

    #[test]
    fn keys_are_normalized() {
        let scheme = parse("Back_Ground = #0a0a0a\nCursor-Color=#ffffff\n");
        assert_eq!(scheme.background.unwrap().to_hex(), "#0a0a0a");
        assert_eq!(scheme.cursor.unwrap().to_hex(), "#ffffff");
    }

    #[test]
    fn invalid_color_is_dropped_with_warning() {
        let scheme = parse("background=notacolor\ncolor2=#00ff00\n");
        assert!(scheme.background.is_none());
        assert_eq!(scheme.ansi[2].unwrap().to_hex(), "#00ff00");
        assert_eq!(scheme.diagnostics.len(), 1);
        assert_eq!(scheme.diagnostics[0].code, "SC001");
        assert_eq!(scheme.diagnostics[0].severity, DiagnosticSeverity::Warning);
        assert_eq!(scheme.diagnostics[0].line, 1);
    }

    #[test]
    fn out_of_range_index_is_fatal_to_the_entry_only() {
        let scheme = parse("palette = 300=#ff0000\ncolor16=#ff0000\ncolor3=#ffff00\n");
        assert!(scheme.ansi.iter().skip(4).all(Option::is_none));
        assert_eq!(scheme.ansi[3].unwrap().to_hex(), "#ffff00");
        assert_eq!(scheme.diagnostics.len(), 2);
    }

    #[test]
    fn last_duplicate_wins() {
        let scheme = parse("background=#111111\nbackground=#222222\n");
        assert_eq!(scheme.background.unwrap().to_hex(), "#222222");
    }

    #[test]
    fn invalid_duplicate_keeps_earlier_valid_value() {
        let scheme = parse("background=#111111\nbackground=notacolor\ncolor4=#0000ff\ncolor4=oops\n");
        assert_eq!(scheme.background.unwrap().to_hex(), "#111111");
        assert_eq!(scheme.ansi[4].unwrap().to_hex(), "#0000ff");
        assert_eq!(scheme.diagnostics.len(), 2);
        assert!(scheme.diagnostics.iter().all(|d| d.code == "SC001"));
    }

    #[test]
    fn name_is_kept_verbatim() {
        let scheme = parse("name = Gruvbox Dark Hard\n");
        assert_eq!(scheme.name.as_deref(), Some("Gruvbox Dark Hard"));
    }

    #[test]
    fn empty_input_is_empty_scheme_not_an_error() {
        let scheme = parse("");
        assert!(scheme.is_empty());
        assert!(scheme.diagnostics.is_empty());
    }

    #[test]
    fn byte_limit_is_fatal_before_parsing() {
        let limits = ParseLimits {
            max_bytes: 8,
            max_lines: 100,
        };
        let err = parse_scheme("background=#1a1a1a", &limits).unwrap_err();
        assert!(matches!(err, SchemeParseError::TooLarge { limit: 8, .. }));
    }

    #[test]
    fn line_limit_is_fatal_before_parsing() {
        let limits = ParseLimits {
            max_bytes: 1024,
            max_lines: 2,
        };
        let err = parse_scheme("a=1\nb=2\nc=3\n", &limits).unwrap_err();
        assert!(matches!(
            err,
            SchemeParseError::TooManyLines { actual: 3, limit: 2 }
        ));
    }
}
