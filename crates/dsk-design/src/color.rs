//! HSL/RGB conversion.

use dsk_core::CoreError;
use dsk_core::design::is_hex_color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Hue in degrees `[0, 360)`, saturation and lightness in percent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub h: f64,
    pub s: f64,
    pub l: f64,
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };
    if t < 1.0 / 6.0 {
        (q - p).mul_add(6.0 * t, p)
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        (q - p).mul_add((2.0 / 3.0 - t) * 6.0, p)
    } else {
        p
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_byte(channel: f64) -> u8 {
    (channel * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Convert HSL (degrees, percent, percent) to RGB.
#[must_use]
pub fn hsl_to_rgb(h: u16, s: u8, l: u8) -> Rgb {
    let h = f64::from(h % 360) / 360.0;
    let s = f64::from(s.min(100)) / 100.0;
    let l = f64::from(l.min(100)) / 100.0;

    if s == 0.0 {
        let grey = to_byte(l);
        return Rgb {
            r: grey,
            g: grey,
            b: grey,
        };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0f64.mul_add(l, -q);
    Rgb {
        r: to_byte(hue_to_channel(p, q, h + 1.0 / 3.0)),
        g: to_byte(hue_to_channel(p, q, h)),
        b: to_byte(hue_to_channel(p, q, h - 1.0 / 3.0)),
    }
}

/// `#rrggbb` (lowercase) for the given HSL color.
///
/// ```
/// assert_eq!(dsk_design::color::hsl_to_hex(0, 100, 50), "#ff0000");
/// ```
#[must_use]
pub fn hsl_to_hex(h: u16, s: u8, l: u8) -> String {
    let Rgb { r, g, b } = hsl_to_rgb(h, s, l);
    format!("#{r:02x}{g:02x}{b:02x}")
}

/// Parse `#RRGGBB` (either case).
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`] if `hex` is not `#` plus six hex digits.
pub fn hex_to_rgb(hex: &str) -> Result<Rgb, CoreError> {
    if !is_hex_color(hex) {
        return Err(CoreError::InvalidColor(hex.to_string()));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).map_err(|_| CoreError::InvalidColor(hex.to_string()))
    };
    Ok(Rgb {
        r: channel(1..3)?,
        g: channel(3..5)?,
        b: channel(5..7)?,
    })
}

#[must_use]
pub fn rgb_to_hsl(rgb: Rgb) -> Hsl {
    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let delta = max - min;
    if delta == 0.0 {
        return Hsl {
            h: 0.0,
            s: 0.0,
            l: l * 100.0,
        };
    }

    let s = if l > 0.5 {
        delta / (2.0 - max - min)
    } else {
        delta / (max + min)
    };
    let h = if (max - r).abs() < f64::EPSILON {
        (g - b) / delta + if g < b { 6.0 } else { 0.0 }
    } else if (max - g).abs() < f64::EPSILON {
        (b - r) / delta + 2.0
    } else {
        (r - g) / delta + 4.0
    };
    Hsl {
        h: (h * 60.0).rem_euclid(360.0),
        s: s * 100.0,
        l: l * 100.0,
    }
}

/// Hue of a `#RRGGBB` color in degrees.
///
/// # Errors
///
/// Returns [`CoreError::InvalidColor`] for malformed input.
pub fn hex_hue(hex: &str) -> Result<f64, CoreError> {
    hex_to_rgb(hex).map(|rgb| rgb_to_hsl(rgb).h)
}

/// Shortest angular distance between two hues, in degrees.
#[must_use]
pub fn hue_distance(a: f64, b: f64) -> f64 {
    let diff = (a - b).rem_euclid(360.0);
    diff.min(360.0 - diff)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0, 100, 50, "#ff0000")]
    #[case(120, 100, 50, "#00ff00")]
    #[case(240, 100, 50, "#0000ff")]
    #[case(0, 0, 50, "#808080")]
    #[case(0, 0, 100, "#ffffff")]
    #[case(0, 0, 0, "#000000")]
    #[case(360, 100, 50, "#ff0000")]
    fn known_hex_values(#[case] h: u16, #[case] s: u8, #[case] l: u8, #[case] hex: &str) {
        assert_eq!(hsl_to_hex(h, s, l), hex);
    }

    #[test]
    fn hex_parsing_accepts_either_case() {
        assert_eq!(
            hex_to_rgb("#FFa500").unwrap(),
            Rgb {
                r: 255,
                g: 165,
                b: 0
            }
        );
        assert!(hex_to_rgb("#FFa50").is_err());
        assert!(hex_to_rgb("FFa500").is_err());
    }

    #[test]
    fn hue_survives_round_trip() {
        for hue in (0..360).step_by(15) {
            let back = hex_hue(&hsl_to_hex(hue, 75, 50)).unwrap();
            assert!(
                hue_distance(back, f64::from(hue)) < 1.5,
                "hue {hue} came back as {back}"
            );
        }
    }

    #[test]
    fn hue_distance_wraps() {
        assert!((hue_distance(350.0, 10.0) - 20.0).abs() < 1e-9);
        assert!((hue_distance(10.0, 350.0) - 20.0).abs() < 1e-9);
        assert!(hue_distance(90.0, 90.0).abs() < 1e-9);
    }
}
