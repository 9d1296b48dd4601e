#![forbid(unsafe_code)]

//! The `Rgb` value type: hex parsing, formatting, blending, alpha.
//!
//! Hex strings are a wire format only. Parsing happens once at the
//! boundary; everything downstream works on [`Rgb`] values and formats
//! back to lowercase `#rrggbb` (or `#rrggbbaa` where alpha is needed).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error raised when a string cannot be read as a hex color.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// Input contains a non-hex digit.
    #[error("invalid hex digit in color `{0}`")]
    InvalidDigit(String),
    /// Input is not 3, 6, or 8 hex digits long.
    #[error("unsupported hex color length {len} in `{input}`")]
    BadLength {
        /// The offending input, trimmed.
        input: String,
        /// Number of hex digits after stripping `#`.
        len: usize,
    },
}

/// A 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string.
    ///
    /// Accepts `rgb`, `rrggbb`, and `rrggbbaa` digit forms, each with or
    /// without a leading `#`. Three-digit shorthand doubles each nibble
    /// (`#f0c` → `#ff00cc`). An alpha suffix is parsed and discarded.
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let trimmed = input.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(trimmed.to_string()));
        }
        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16)
                .map_err(|_| ColorParseError::InvalidDigit(trimmed.to_string()))
        };
        match digits.len() {
            3 => {
                let nibble = |range| channel(range).map(|v| v * 17);
                Ok(Self::new(nibble(0..1)?, nibble(1..2)?, nibble(2..3)?))
            }
            // Alpha digits are validated above but otherwise ignored.
            6 | 8 => Ok(Self::new(channel(0..2)?, channel(2..4)?, channel(4..6)?)),
            len => Err(ColorParseError::BadLength {
                input: trimmed.to_string(),
                len,
            }),
        }
    }

    /// Format as canonical lowercase `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Linear per-channel interpolation toward `other` in RGB space.
    ///
    /// `ratio` 0.0 returns `self`, 1.0 returns `other`; out-of-range
    /// ratios are clamped. Each channel is rounded independently.
    pub fn blend(self, other: Rgb, ratio: f64) -> Rgb {
        let t = ratio.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| {
            (f64::from(a) + (f64::from(b) - f64::from(a)) * t)
                .round()
                .clamp(0.0, 255.0) as u8
        };
        Rgb::new(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
        )
    }

    /// Blend toward pure black by `amount` in `[0, 1]`.
    pub fn shade_toward_black(self, amount: f64) -> Rgb {
        self.blend(Rgb::BLACK, amount)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Normalize any accepted hex form to canonical lowercase `#rrggbb`.
///
/// Idempotent: normalizing an already-normalized string is a no-op.
pub fn normalize_hex(input: &str) -> Result<String, ColorParseError> {
    Ok(Rgb::parse(input)?.to_hex())
}

/// Convert an opacity in `[0, 1]` to a two-digit lowercase hex byte.
///
/// The value is scaled by 255, rounded, and clamped to `[0, 255]`, so
/// out-of-range input saturates rather than failing (NaN maps to `00`).
pub fn opacity_hex(opacity: f64) -> String {
    let byte = (opacity * 255.0).round().clamp(0.0, 255.0) as u8;
    format!("{byte:02x}")
}

/// Append an opacity byte to a color, yielding `#rrggbbaa`.
pub fn with_alpha(hex: &str, opacity: f64) -> Result<String, ColorParseError> {
    let rgb = Rgb::parse(hex)?;
    Ok(format!("{}{}", rgb.to_hex(), opacity_hex(opacity)))
}
