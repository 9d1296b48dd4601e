#![forbid(unsafe_code)]

//! WCAG relative luminance and contrast utilities.
//!
//! Luminance drives dark/light theme classification; contrast ratios
//! are exposed for callers that want to audit derived pairings.

use crate::rgb::Rgb;

/// Minimum WCAG AA contrast ratio for normal text.
pub const WCAG_AA_NORMAL_TEXT: f64 = 4.5;

/// Convert an sRGB channel in `[0, 1]` to linear light.
pub fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.03928 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// WCAG relative luminance of a color, in `[0, 1]`.
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = srgb_to_linear(f64::from(color.r) / 255.0);
    let g = srgb_to_linear(f64::from(color.g) / 255.0);
    let b = srgb_to_linear(f64::from(color.b) / 255.0);
    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// WCAG contrast ratio between two colors, in `[1, 21]`.
pub fn contrast_ratio(a: Rgb, b: Rgb) -> f64 {
    let lum_a = relative_luminance(a);
    let lum_b = relative_luminance(b);
    let lighter = lum_a.max(lum_b);
    let darker = lum_a.min(lum_b);
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether a foreground/background pair meets WCAG AA for normal text.
pub fn meets_wcag_aa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio(fg, bg) >= WCAG_AA_NORMAL_TEXT
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_black_is_zero() {
        assert!(relative_luminance(Rgb::BLACK) < 1e-9);
    }

    #[test]
    fn luminance_white_is_one() {
        assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn luminance_weights_green_heaviest() {
        let r = relative_luminance(Rgb::new(255, 0, 0));
        let g = relative_luminance(Rgb::new(0, 255, 0));
        let b = relative_luminance(Rgb::new(0, 0, 255));
        assert!(g > r && r > b);
    }

    #[test]
    fn contrast_black_on_white_is_max() {
        let ratio = contrast_ratio(Rgb::BLACK, Rgb::WHITE);
        assert!((ratio - 21.0).abs() < 0.01);
        assert!(meets_wcag_aa(Rgb::BLACK, Rgb::WHITE));
    }

    #[test]
    fn contrast_is_symmetric() {
        let a = Rgb::new(0x1a, 0x1a, 0x1a);
        let b = Rgb::new(0xe0, 0xe0, 0xe0);
        assert_eq!(contrast_ratio(a, b), contrast_ratio(b, a));
    }

    #[test]
    fn low_contrast_pair_fails_aa() {
        assert!(!meets_wcag_aa(
            Rgb::new(0x77, 0x77, 0x77),
            Rgb::new(0x88, 0x88, 0x88)
        ));
    }
}
