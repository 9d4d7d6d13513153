// SPDX-License-Identifier: MIT
//
// RGB ↔ HSL conversion.
//
// Single-character variable names (r, g, b, h, s, l) are the standard
// convention in color math.
//
// Every value lives in [0, 1], hue included: 0.0 and 1.0 are the same angle
// (red), 1/3 is green, 2/3 is blue. Achromatic colors (r == g == b) have no
// defined hue; they report hue 0 and saturation 0.

/// Convert normalized sRGB to `(hue, saturation, lightness)`.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn rgb_to_hsl(r: f64, g: f64, b: f64) -> (f64, f64, f64) {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let sum = max + min;
    let range = max - min;
    let l = sum / 2.0;

    if max == min {
        return (0.0, 0.0, l);
    }

    // The quotient can land one ulp above 1 for fully saturated colors.
    let s = (if l <= 0.5 { range / sum } else { range / (2.0 - sum) }).min(1.0);

    // Distance of each channel from the max, as a fraction of the range.
    let rc = (max - r) / range;
    let gc = (max - g) / range;
    let bc = (max - b) / range;

    let sextant = if r == max {
        bc - gc
    } else if g == max {
        2.0 + rc - bc
    } else {
        4.0 + gc - rc
    };

    ((sextant / 6.0).rem_euclid(1.0), s, l)
}

/// Convert `(hue, saturation, lightness)` to normalized sRGB.
///
/// Hue is taken modulo 1, so any real hue is accepted.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn hsl_to_rgb(h: f64, s: f64, l: f64) -> (f64, f64, f64) {
    if s == 0.0 {
        return (l, l, l);
    }

    let m2 = if l <= 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let m1 = 2.0f64.mul_add(l, -m2);

    (
        hue_channel(m1, m2, h + 1.0 / 3.0),
        hue_channel(m1, m2, h),
        hue_channel(m1, m2, h - 1.0 / 3.0),
    )
}

/// One channel of the HSL → RGB piecewise ramp.
#[inline]
fn hue_channel(m1: f64, m2: f64, hue: f64) -> f64 {
    let hue = hue.rem_euclid(1.0);
    if hue < 1.0 / 6.0 {
        (m2 - m1).mul_add(hue * 6.0, m1)
    } else if hue < 0.5 {
        m2
    } else if hue < 2.0 / 3.0 {
        (m2 - m1).mul_add((2.0 / 3.0 - hue) * 6.0, m1)
    } else {
        m1
    }
}
