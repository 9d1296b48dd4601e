#![forbid(unsafe_code)]

//! Role resolution: sparse scheme → total role table.
//!
//! Every recognized role resolves through a documented cascade:
//! explicit key → related ANSI slot → reference default. The reference
//! palette is an explicit argument rather than a module-level global,
//! so callers (and tests) can substitute their own.

use chroma_color::Rgb;

use crate::parse::RawScheme;

/// A named, fully-resolved color with documentation of where it lands
/// in the generated theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorRole {
    /// Stable role name (`black`..`brightWhite`, `background`, ...).
    pub name: &'static str,
    /// The resolved color.
    pub color: Rgb,
    /// Surfaces this role feeds.
    pub usage: &'static [&'static str],
}

/// Fallback colors used when the scheme leaves a role unset.
///
/// The default reference set is a conventional dark palette chosen for
/// legible contrast on near-black backgrounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReferencePalette {
    pub ansi: [Rgb; 16],
    pub background: Rgb,
    pub foreground: Rgb,
    pub cursor: Rgb,
    pub selection: Rgb,
}

impl ReferencePalette {
    pub const DEFAULT: ReferencePalette = ReferencePalette {
        ansi: [
            Rgb::new(0x28, 0x2c, 0x34), // black
            Rgb::new(0xe0, 0x6c, 0x75), // red
            Rgb::new(0x98, 0xc3, 0x79), // green
            Rgb::new(0xe5, 0xc0, 0x7b), // yellow
            Rgb::new(0x61, 0xaf, 0xef), // blue
            Rgb::new(0xc6, 0x78, 0xdd), // magenta
            Rgb::new(0x56, 0xb6, 0xc2), // cyan
            Rgb::new(0xab, 0xb2, 0xbf), // white
            Rgb::new(0x54, 0x58, 0x62), // bright black
            Rgb::new(0xe0, 0x6c, 0x75), // bright red
            Rgb::new(0x98, 0xc3, 0x79), // bright green
            Rgb::new(0xe5, 0xc0, 0x7b), // bright yellow
            Rgb::new(0x61, 0xaf, 0xef), // bright blue
            Rgb::new(0xc6, 0x78, 0xdd), // bright magenta
            Rgb::new(0x56, 0xb6, 0xc2), // bright cyan
            Rgb::new(0xc8, 0xcc, 0xd4), // bright white
        ],
        background: Rgb::new(0x1e, 0x22, 0x2a),
        foreground: Rgb::new(0xab, 0xb2, 0xbf),
        cursor: Rgb::new(0xab, 0xb2, 0xbf),
        selection: Rgb::new(0x3e, 0x44, 0x51),
    };
}

/// Stable names for the 16 ANSI slots.
const ANSI_NAMES: [&str; 16] = [
    "black",
    "red",
    "green",
    "yellow",
    "blue",
    "magenta",
    "cyan",
    "white",
    "brightBlack",
    "brightRed",
    "brightGreen",
    "brightYellow",
    "brightBlue",
    "brightMagenta",
    "brightCyan",
    "brightWhite",
];

const ANSI_USAGE: [&[&str]; 16] = [
    &["terminal black", "recessed chrome"],
    &["terminal red", "errors, deletions, invalid syntax"],
    &["terminal green", "strings, additions"],
    &["terminal yellow", "warnings, modified markers, types"],
    &["terminal blue", "accent, functions, links, focus"],
    &["terminal magenta", "keywords, constants"],
    &["terminal cyan", "operators, regex, escapes"],
    &["terminal white", "default text"],
    &["terminal bright black", "comments, muted text"],
    &["terminal bright red"],
    &["terminal bright green"],
    &["terminal bright yellow"],
    &["terminal bright blue"],
    &["terminal bright magenta"],
    &["terminal bright cyan"],
    &["terminal bright white", "emphasized text"],
];

/// The complete, defaulted role table. Every field is always populated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleTable {
    pub background: ColorRole,
    pub foreground: ColorRole,
    pub cursor: ColorRole,
    pub selection: ColorRole,
    /// Slots `color0`..`color15`, ordered.
    pub ansi: [ColorRole; 16],
}

impl RoleTable {
    pub fn red(&self) -> Rgb {
        self.ansi[1].color
    }

    pub fn green(&self) -> Rgb {
        self.ansi[2].color
    }

    pub fn yellow(&self) -> Rgb {
        self.ansi[3].color
    }

    pub fn blue(&self) -> Rgb {
        self.ansi[4].color
    }

    pub fn magenta(&self) -> Rgb {
        self.ansi[5].color
    }

    pub fn cyan(&self) -> Rgb {
        self.ansi[6].color
    }

    /// Comment/muted tone: bright black.
    pub fn muted(&self) -> Rgb {
        self.ansi[8].color
    }
}

/// Resolve a sparse scheme into a total [`RoleTable`].
///
/// This function never fails: every role falls back through its
/// cascade to the reference palette.
pub fn resolve_roles(scheme: &RawScheme, reference: &ReferencePalette) -> RoleTable {
    let ansi = std::array::from_fn(|i| ColorRole {
        name: ANSI_NAMES[i],
        color: scheme.ansi[i].unwrap_or(reference.ansi[i]),
        usage: ANSI_USAGE[i],
    });

    let background = ColorRole {
        name: "background",
        color: scheme
            .background
            .or(scheme.ansi[0])
            .unwrap_or(reference.background),
        usage: &["editor canvas", "base of the background hierarchy"],
    };
    let foreground = ColorRole {
        name: "foreground",
        color: scheme
            .foreground
            .or(scheme.ansi[7])
            .unwrap_or(reference.foreground),
        usage: &["editor text", "default UI foreground"],
    };
    let cursor = ColorRole {
        name: "cursor",
        color: scheme
            .cursor
            .or(scheme.foreground)
            .or(scheme.ansi[7])
            .unwrap_or(reference.cursor),
        usage: &["editor cursor", "terminal cursor"],
    };
    let selection = ColorRole {
        name: "selection",
        color: scheme
            .selection
            .or(scheme.ansi[8])
            .unwrap_or(reference.selection),
        usage: &["editor selection", "terminal selection"],
    };

    RoleTable {
        background,
        foreground,
        cursor,
        selection,
        ansi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse::{ParseLimits, parse_scheme};

    fn resolve(text: &str) -> RoleTable {
        let scheme = parse_scheme(text, &ParseLimits::default()).unwrap();
        resolve_roles(&scheme, &ReferencePalette::DEFAULT)
    }

    #[test]
    fn empty_scheme_is_fully_defaulted() {
        let table = resolve("");
        assert_eq!(table.background.color, ReferencePalette::DEFAULT.background);
        assert_eq!(table.foreground.color, ReferencePalette::DEFAULT.foreground);
        for (i, role) in table.ansi.iter().enumerate() {
            assert_eq!(role.color, ReferencePalette::DEFAULT.ansi[i]);
            assert_eq!(role.name, ANSI_NAMES[i]);
            assert!(!role.usage.is_empty());
        }
    }

    #[test]
    fn explicit_keys_take_precedence() {
        let table = resolve("background=#1a1a1a\nforeground=#e0e0e0\ncolor1=#ff0000\n");
        assert_eq!(table.background.color.to_hex(), "#1a1a1a");
        assert_eq!(table.foreground.color.to_hex(), "#e0e0e0");
        assert_eq!(table.red().to_hex(), "#ff0000");
    }

    #[test]
    fn background_falls_back_to_color0() {
        let table = resolve("color0=#123123");
        assert_eq!(table.background.color.to_hex(), "#123123");
    }

    #[test]
    fn foreground_falls_back_to_color7() {
        let table = resolve("color7=#dddddd");
        assert_eq!(table.foreground.color.to_hex(), "#dddddd");
    }

    #[test]
    fn cursor_cascades_through_foreground() {
        let table = resolve("foreground=#cccccc");
        assert_eq!(table.cursor.color.to_hex(), "#cccccc");
    }

    #[test]
    fn selection_falls_back_to_bright_black() {
        let table = resolve("color8=#404040");
        assert_eq!(table.selection.color.to_hex(), "#404040");
    }

    #[test]
    fn substitute_reference_palette_is_honored() {
        let reference = ReferencePalette {
            background: Rgb::new(1, 2, 3),
            ..ReferencePalette::DEFAULT
        };
        let scheme = parse_scheme("", &ParseLimits::default()).unwrap();
        let table = resolve_roles(&scheme, &reference);
        assert_eq!(table.background.color, Rgb::new(1, 2, 3));
    }
}
