#![forbid(unsafe_code)]

//! Color value types and pure color arithmetic.
//!
//! # Role in the pipeline
//! `chroma-color` is the shared vocabulary for colors. The scheme parser
//! and the theme builders use these types and operations so that every
//! derived color goes through one arithmetic path.
//!
//! # This crate provides
//! - [`Rgb`] with tolerant hex parsing (`#rgb`, `#rrggbb`, `#rrggbbaa`,
//!   leading `#` optional) and canonical `#rrggbb` formatting.
//! - [`Hsl`] as the intermediate representation for lightness and
//!   saturation edits.
//! - Blending, shading, and alpha-suffix helpers for building derived
//!   palette entries.
//! - WCAG relative luminance and contrast utilities.
//!
//! Every operation is a pure function: invalid input yields a typed
//! [`ColorParseError`], never a NaN-bearing hex string.

/// WCAG contrast and relative luminance utilities.
pub mod contrast;
/// HSL intermediate representation and lightness/saturation edits.
pub mod hsl;
/// The `Rgb` value type, hex parsing, blending, and alpha helpers.
pub mod rgb;

pub use contrast::{WCAG_AA_NORMAL_TEXT, contrast_ratio, relative_luminance};
pub use hsl::Hsl;
pub use rgb::{ColorParseError, Rgb, normalize_hex, opacity_hex, with_alpha};
