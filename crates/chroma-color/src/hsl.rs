#![forbid(unsafe_code)]

//! HSL intermediate representation for lightness and saturation edits.
//!
//! Conversions use f64 throughout. Editing only `l` (or only `s`) and
//! converting back leaves the untouched components bit-for-bit intact,
//! which is what keeps repeated palette derivation stable.

use crate::rgb::Rgb;

/// A color in HSL space: hue in degrees `[0, 360)`, saturation and
/// lightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

impl From<Rgb> for Hsl {
    fn from(rgb: Rgb) -> Self {
        let r = f64::from(rgb.r) / 255.0;
        let g = f64::from(rgb.g) / 255.0;
        let b = f64::from(rgb.b) / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic: hue is undefined, pinned to zero.
            return Hsl { h: 0.0, s: 0.0, l };
        }

        let delta = max - min;
        let s = if l > 0.5 {
            delta / (2.0 - max - min)
        } else {
            delta / (max + min)
        };
        let h = if max == r {
            ((g - b) / delta).rem_euclid(6.0)
        } else if max == g {
            (b - r) / delta + 2.0
        } else {
            (r - g) / delta + 4.0
        } * 60.0;

        Hsl { h, s, l }
    }
}

impl From<Hsl> for Rgb {
    fn from(hsl: Hsl) -> Self {
        if hsl.s == 0.0 {
            let v = (hsl.l * 255.0).round().clamp(0.0, 255.0) as u8;
            return Rgb::new(v, v, v);
        }

        let q = if hsl.l < 0.5 {
            hsl.l * (1.0 + hsl.s)
        } else {
            hsl.l + hsl.s - hsl.l * hsl.s
        };
        let p = 2.0 * hsl.l - q;
        let h = hsl.h.rem_euclid(360.0) / 360.0;

        let channel = |t: f64| {
            let t = t.rem_euclid(1.0);
            let v = if t < 1.0 / 6.0 {
                p + (q - p) * 6.0 * t
            } else if t < 1.0 / 2.0 {
                q
            } else if t < 2.0 / 3.0 {
                p + (q - p) * (2.0 / 3.0 - t) * 6.0
            } else {
                p
            };
            (v * 255.0).round().clamp(0.0, 255.0) as u8
        };

        Rgb::new(
            channel(h + 1.0 / 3.0),
            channel(h),
            channel(h - 1.0 / 3.0),
        )
    }
}

impl Rgb {
    /// Shift lightness by `delta` in `[-1, 1]`, clamping the result.
    ///
    /// Hue and saturation pass through the HSL intermediate untouched.
    /// A zero delta is an exact no-op.
    pub fn adjust_lightness(self, delta: f64) -> Rgb {
        if delta == 0.0 {
            return self;
        }
        let mut hsl = Hsl::from(self);
        hsl.l = (hsl.l + delta).clamp(0.0, 1.0);
        Rgb::from(hsl)
    }

    /// Scale saturation down by `amount` in `[0, 1]`.
    ///
    /// `0.0` leaves the color unchanged, `1.0` fully desaturates to the
    /// gray of equal lightness.
    pub fn desaturate(self, amount: f64) -> Rgb {
        let amount = amount.clamp(0.0, 1.0);
        if amount == 0.0 {
            return self;
        }
        let mut hsl = Hsl::from(self);
        hsl.s *= 1.0 - amount;
        Rgb::from(hsl)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primaries_convert_to_expected_hues() {
        let red = Hsl::from(Rgb::new(255, 0, 0));
        assert_eq!(red.h, 0.0);
        assert_eq!(red.s, 1.0);
        assert_eq!(red.l, 0.5);

        let green = Hsl::from(Rgb::new(0, 255, 0));
        assert_eq!(green.h, 120.0);

        let blue = Hsl::from(Rgb::new(0, 0, 255));
        assert_eq!(blue.h, 240.0);
    }

    #[test]
    fn achromatic_colors_have_zero_saturation() {
        let gray = Hsl::from(Rgb::new(128, 128, 128));
        assert_eq!(gray.h, 0.0);
        assert_eq!(gray.s, 0.0);
        assert_eq!(Rgb::from(gray), Rgb::new(128, 128, 128));
    }

    #[test]
    fn round_trip_preserves_channels() {
        for rgb in [
            Rgb::new(0x1a, 0x1a, 0x1a),
            Rgb::new(0xe0, 0x6c, 0x75),
            Rgb::new(0x61, 0xaf, 0xef),
            Rgb::new(0x98, 0xc3, 0x79),
        ] {
            assert_eq!(Rgb::from(Hsl::from(rgb)), rgb);
        }
    }

    #[test]
    fn zero_delta_is_identity() {
        let rgb = Rgb::new(0x2c, 0x31, 0x3c);
        assert_eq!(rgb.adjust_lightness(0.0), rgb);
    }

    #[test]
    fn positive_delta_lightens_negative_darkens() {
        let base = Rgb::new(0x40, 0x40, 0x40);
        let lighter = base.adjust_lightness(0.2);
        let darker = base.adjust_lightness(-0.2);
        assert!(Hsl::from(lighter).l > Hsl::from(base).l);
        assert!(Hsl::from(darker).l < Hsl::from(base).l);
    }

    #[test]
    fn lightness_clamps_at_bounds() {
        assert_eq!(Rgb::WHITE.adjust_lightness(0.5), Rgb::WHITE);
        assert_eq!(Rgb::BLACK.adjust_lightness(-0.5), Rgb::BLACK);
    }

    #[test]
    fn adjust_lightness_preserves_hue_and_saturation() {
        let base = Hsl::from(Rgb::new(0xe0, 0x6c, 0x75));
        let shifted = Hsl::from(Rgb::new(0xe0, 0x6c, 0x75).adjust_lightness(0.1));
        assert!((shifted.h - base.h).abs() < 1.5);
        assert!((shifted.s - base.s).abs() < 0.05);
    }

    #[test]
    fn full_desaturation_grays_out() {
        let gray = Rgb::new(0xe0, 0x6c, 0x75).desaturate(1.0);
        assert_eq!(gray.r, gray.g);
        assert_eq!(gray.g, gray.b);
    }

    #[test]
    fn partial_desaturation_reduces_saturation() {
        let base = Rgb::new(0x61, 0xaf, 0xef);
        let muted = base.desaturate(0.5);
        assert!(Hsl::from(muted).s < Hsl::from(base).s);
    }
}
