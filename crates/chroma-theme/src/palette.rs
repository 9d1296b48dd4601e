#![forbid(unsafe_code)]

//! Extended palette derivation.
//!
//! Expands a total [`RoleTable`] into the working palette the builders
//! draw from: a leveled background hierarchy plus light/dark/muted
//! variants of each primary accent. Opacity variants are deliberately
//! not precomputed here; callers suffix alpha on demand so the palette
//! stays purely color-valued.

use chroma_color::{Rgb, relative_luminance};
use chroma_scheme::RoleTable;
use serde::{Deserialize, Serialize};

/// Whether a theme reads as dark or light, from the background role's
/// relative luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeKind {
    Dark,
    Light,
}

/// Luminance at or above this threshold classifies a background as
/// light.
const LIGHT_BACKGROUND_LUMINANCE: f64 = 0.5;

/// Classify a background color as dark or light.
pub fn classify_kind(background: Rgb) -> ThemeKind {
    if relative_luminance(background) < LIGHT_BACKGROUND_LUMINANCE {
        ThemeKind::Dark
    } else {
        ThemeKind::Light
    }
}

/// Number of background levels in the hierarchy.
pub const BACKGROUND_LEVELS: usize = 7;

/// Scale factor for the logarithmic level steps.
const BACKGROUND_STEP: f64 = 0.04;

/// Ordered background shades, base canvas first, progressively more
/// elevated surfaces after.
///
/// Level 0 pins the source background exactly so the editor canvas
/// matches the scheme. Level `i` shifts lightness by
/// `BACKGROUND_STEP * ln(i + 1)`: a diminishing-returns curve that
/// keeps early surfaces well separated while later ones converge. Dark
/// themes move levels lighter, light themes toward black.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackgroundHierarchy {
    levels: [Rgb; BACKGROUND_LEVELS],
}

impl BackgroundHierarchy {
    pub fn derive(base: Rgb, kind: ThemeKind) -> Self {
        let sign = match kind {
            ThemeKind::Dark => 1.0,
            ThemeKind::Light => -1.0,
        };
        let levels = std::array::from_fn(|i| {
            let delta = sign * BACKGROUND_STEP * ((i as f64) + 1.0).ln();
            base.adjust_lightness(delta)
        });
        Self { levels }
    }

    /// The editor canvas: the source background, untouched.
    pub fn canvas(&self) -> Rgb {
        self.levels[0]
    }

    /// Side panels and terminal chrome, one step off the canvas.
    pub fn panel(&self) -> Rgb {
        self.levels[1]
    }

    /// Grouped surfaces: tab strips, section headers, wells.
    pub fn surface(&self) -> Rgb {
        self.levels[2]
    }

    /// Elevated chrome: status/title/activity bars, inputs.
    pub fn elevated(&self) -> Rgb {
        self.levels[3]
    }

    /// Floating widgets: hovers, suggest, notifications.
    pub fn overlay(&self) -> Rgb {
        self.levels[4]
    }

    /// Hover and inactive-selection fills inside lists.
    pub fn hover(&self) -> Rgb {
        self.levels[5]
    }

    /// The most elevated fill: active selections, drag targets.
    pub fn raised(&self) -> Rgb {
        self.levels[6]
    }

    /// All levels in order, most recessed first.
    pub fn levels(&self) -> &[Rgb] {
        &self.levels
    }
}

/// Lightness and saturation variants of one accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccentVariants {
    pub base: Rgb,
    pub light: Rgb,
    pub dark: Rgb,
    pub muted: Rgb,
}

const ACCENT_LIGHTNESS_DELTA: f64 = 0.12;
const ACCENT_MUTE_AMOUNT: f64 = 0.5;

impl AccentVariants {
    pub fn derive(base: Rgb) -> Self {
        Self {
            base,
            light: base.adjust_lightness(ACCENT_LIGHTNESS_DELTA),
            dark: base.adjust_lightness(-ACCENT_LIGHTNESS_DELTA),
            muted: base.desaturate(ACCENT_MUTE_AMOUNT),
        }
    }
}

/// The six primary accents with their derived variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrimaryAccents {
    pub red: AccentVariants,
    pub green: AccentVariants,
    pub yellow: AccentVariants,
    pub blue: AccentVariants,
    pub purple: AccentVariants,
    pub cyan: AccentVariants,
}

/// The working palette every builder draws from. Pure function of the
/// role table and theme kind; never mutated after derivation.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtendedPalette {
    pub kind: ThemeKind,
    pub accents: PrimaryAccents,
    pub backgrounds: BackgroundHierarchy,
    pub foreground: Rgb,
    /// The full role table, kept for terminal slots and cursor/selection.
    pub roles: RoleTable,
}

impl ExtendedPalette {
    pub fn derive(roles: &RoleTable, kind: ThemeKind) -> Self {
        Self {
            kind,
            accents: PrimaryAccents {
                red: AccentVariants::derive(roles.red()),
                green: AccentVariants::derive(roles.green()),
                yellow: AccentVariants::derive(roles.yellow()),
                blue: AccentVariants::derive(roles.blue()),
                purple: AccentVariants::derive(roles.magenta()),
                cyan: AccentVariants::derive(roles.cyan()),
            },
            backgrounds: BackgroundHierarchy::derive(roles.background.color, kind),
            foreground: roles.foreground.color,
            roles: roles.clone(),
        }
    }

    /// The workbench accent. Fixed rule: the blue role drives focus
    /// borders, buttons, badges, and links.
    pub fn accent(&self) -> Rgb {
        self.accents.blue.base
    }

    /// Comment/de-emphasis tone: bright black from the role table.
    pub fn muted(&self) -> Rgb {
        self.roles.muted()
    }
}
