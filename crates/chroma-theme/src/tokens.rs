#![forbid(unsafe_code)]

//! Scoped syntax-highlighting rules.
//!
//! Two independent rule sets, concatenated in a fixed order:
//! - a baseline table mapping lexical categories (comments, keywords,
//!   strings, ...) to palette roles and font styles;
//! - cyclic "rainbow" rules that color nested structured-data keys by
//!   depth, wrapping around the cycle rather than truncating.

use chroma_color::Rgb;
use serde::{Deserialize, Serialize};

use crate::palette::ExtendedPalette;

/// Font styling for a token rule. Closed set; serializes to the
/// editor's space-joined strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FontStyle {
    #[serde(rename = "italic")]
    Italic,
    #[serde(rename = "bold")]
    Bold,
    #[serde(rename = "underline")]
    Underline,
    #[serde(rename = "italic bold")]
    ItalicBold,
}

/// A scope selector: one dotted identifier or a list of them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Scope {
    Single(String),
    Many(Vec<String>),
}

impl Scope {
    fn from_scopes(scopes: &[&str]) -> Self {
        match scopes {
            [only] => Scope::Single((*only).to_string()),
            many => Scope::Many(many.iter().map(|s| (*s).to_string()).collect()),
        }
    }
}

/// Style settings attached to one scope selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct TokenSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub foreground: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background: Option<String>,
    #[serde(rename = "fontStyle", skip_serializing_if = "Option::is_none")]
    pub font_style: Option<FontStyle>,
}

/// One syntax-highlighting rule in the output document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenColor {
    pub scope: Scope,
    pub settings: TokenSettings,
}

/// One baseline table entry: scopes, the palette role that colors
/// them, and an optional font style.
pub struct SyntaxSpec {
    pub scopes: &'static [&'static str],
    pub color: fn(&ExtendedPalette) -> Rgb,
    pub font_style: Option<FontStyle>,
}

/// Baseline lexical-category rules, in fixed order.
pub const SYNTAX_RULES: &[SyntaxSpec] = &[
    SyntaxSpec {
        scopes: &["comment", "punctuation.definition.comment"],
        color: |p| p.muted(),
        font_style: Some(FontStyle::Italic),
    },
    SyntaxSpec {
        scopes: &["keyword", "keyword.control", "storage.type", "storage.modifier"],
        color: |p| p.accents.purple.base,
        font_style: Some(FontStyle::Italic),
    },
    SyntaxSpec {
        scopes: &["keyword.operator", "punctuation"],
        color: |p| p.accents.cyan.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["string", "string.quoted", "punctuation.definition.string"],
        color: |p| p.accents.green.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["string.regexp", "constant.character.escape"],
        color: |p| p.accents.cyan.light,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["constant.numeric", "constant.language", "constant.other"],
        color: |p| p.accents.yellow.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &[
            "entity.name.function",
            "support.function",
            "meta.function-call.generic",
        ],
        color: |p| p.accents.blue.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &[
            "entity.name.type",
            "entity.name.class",
            "support.type",
            "support.class",
        ],
        color: |p| p.accents.yellow.light,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["variable", "variable.other.readwrite"],
        color: |p| p.foreground,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["variable.parameter"],
        color: |p| p.accents.red.light,
        font_style: Some(FontStyle::Italic),
    },
    SyntaxSpec {
        scopes: &["entity.name.tag"],
        color: |p| p.accents.red.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["entity.other.attribute-name"],
        color: |p| p.accents.yellow.base,
        font_style: Some(FontStyle::Italic),
    },
    SyntaxSpec {
        scopes: &["markup.heading", "entity.name.section"],
        color: |p| p.accents.blue.base,
        font_style: Some(FontStyle::Bold),
    },
    SyntaxSpec {
        scopes: &["markup.italic"],
        color: |p| p.accents.purple.base,
        font_style: Some(FontStyle::Italic),
    },
    SyntaxSpec {
        scopes: &["markup.bold"],
        color: |p| p.accents.yellow.base,
        font_style: Some(FontStyle::Bold),
    },
    SyntaxSpec {
        scopes: &["markup.underline.link"],
        color: |p| p.accents.blue.base,
        font_style: Some(FontStyle::Underline),
    },
    SyntaxSpec {
        scopes: &["markup.inserted"],
        color: |p| p.accents.green.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["markup.deleted"],
        color: |p| p.accents.red.base,
        font_style: None,
    },
    SyntaxSpec {
        scopes: &["invalid", "invalid.illegal"],
        color: |p| p.accents.red.light,
        font_style: Some(FontStyle::ItalicBold),
    },
];

/// Build the baseline rules against a palette.
pub fn build_syntax_rules(palette: &ExtendedPalette) -> Vec<TokenColor> {
    SYNTAX_RULES
        .iter()
        .map(|spec| TokenColor {
            scope: Scope::from_scopes(spec.scopes),
            settings: TokenSettings {
                foreground: Some((spec.color)(palette).to_hex()),
                background: None,
                font_style: spec.font_style,
            },
        })
        .collect()
}

/// Number of colors in the rainbow cycle.
pub const RAINBOW_CYCLE_LEN: usize = 9;

/// Default nesting depth covered by the generated rainbow rules.
pub const DEFAULT_RAINBOW_DEPTH: usize = 12;

const RAINBOW_CONTAINER_SCOPE: &str = "meta.structure.dictionary.json";
const RAINBOW_LEAF_SCOPE: &str = "support.type.property-name.json";

/// The cyclic rainbow colors, drawn from the accent variants.
fn rainbow_cycle(palette: &ExtendedPalette) -> [Rgb; RAINBOW_CYCLE_LEN] {
    let a = &palette.accents;
    [
        a.red.base,
        a.yellow.base,
        a.green.base,
        a.cyan.base,
        a.blue.base,
        a.purple.base,
        a.red.light,
        a.green.light,
        a.blue.light,
    ]
}

/// Rainbow rules for nested structured-data keys, one per nesting
/// level from 0 to `depth - 1`.
///
/// Level `i` pairs color `cycle[i % 9]` with a scope that repeats the
/// container token `i + 1` times before the leaf token, so keys at
/// different depths pick up visually distinct, cycling colors. Depths
/// beyond the cycle wrap around rather than truncating.
pub fn rainbow_rules(palette: &ExtendedPalette, depth: usize) -> Vec<TokenColor> {
    let cycle = rainbow_cycle(palette);
    (0..depth)
        .map(|level| {
            let mut scope = String::new();
            for _ in 0..=level {
                scope.push_str(RAINBOW_CONTAINER_SCOPE);
                scope.push(' ');
            }
            scope.push_str(RAINBOW_LEAF_SCOPE);
            TokenColor {
                scope: Scope::Single(scope),
                settings: TokenSettings {
                    foreground: Some(cycle[level % RAINBOW_CYCLE_LEN].to_hex()),
                    background: None,
                    font_style: None,
                },
            }
        })
        .collect()
}
