// SPDX-License-Identifier: MIT

//! Raw input normalization: hex strings and numeric channel sequences.
//!
//! Both paths end in normalized `(r, g, b, a)` in [0, 1]; [`Color`] derives
//! HSL from there.

use crate::color::Color;
use crate::error::{ColorError, Result};

// ─── Hex ─────────────────────────────────────────────────────────────────────

/// Parse `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA` (the `#` is optional).
///
/// Surrounding whitespace and any run of leading `#` are ignored. Forms
/// without an alpha digit take `alpha` instead.
pub(crate) fn parse_hex(input: &str, alpha: f64) -> Result<Color> {
    let digits = input.trim().trim_start_matches('#');
    let bytes = digits.as_bytes();
    let invalid = || ColorError::InvalidColorFormat(format!("unsupported hex color {input:?}"));

    let channels = match bytes.len() {
        // #RGB
        3 => [short(bytes[0]), short(bytes[1]), short(bytes[2]), None],
        // #RGBA
        4 => [short(bytes[0]), short(bytes[1]), short(bytes[2]), short(bytes[3])],
        // #RRGGBB
        6 => [byte(&bytes[0..2]), byte(&bytes[2..4]), byte(&bytes[4..6]), None],
        // #RRGGBBAA
        8 => [
            byte(&bytes[0..2]),
            byte(&bytes[2..4]),
            byte(&bytes[4..6]),
            byte(&bytes[6..8]),
        ],
        _ => return Err(invalid()),
    };

    let [r, g, b, a] = channels;
    let (r, g, b) = (r.ok_or_else(invalid)?, g.ok_or_else(invalid)?, b.ok_or_else(invalid)?);
    let a = match (a, bytes.len()) {
        (Some(a), _) => f64::from(a) / 255.0,
        (None, 3 | 6) => alpha,
        (None, _) => return Err(invalid()),
    };

    Ok(Color::rgba(
        f64::from(r) / 255.0,
        f64::from(g) / 255.0,
        f64::from(b) / 255.0,
        a,
    ))
}

#[inline]
const fn hex_digit(c: u8) -> Option<u8> {
    match c {
        b'0'..=b'9' => Some(c - b'0'),
        b'a'..=b'f' => Some(c - b'a' + 10),
        b'A'..=b'F' => Some(c - b'A' + 10),
        _ => None,
    }
}

/// A single shorthand digit, doubled: `A` → `0xAA`.
#[inline]
const fn short(c: u8) -> Option<u8> {
    match hex_digit(c) {
        Some(d) => Some(d << 4 | d),
        None => None,
    }
}

#[inline]
fn byte(pair: &[u8]) -> Option<u8> {
    let hi = hex_digit(pair[0])?;
    let lo = hex_digit(pair[1])?;
    Some(hi << 4 | lo)
}

// ─── Numeric sequences ───────────────────────────────────────────────────────

/// Build a color from 3 or 4 numeric channels.
///
/// If any component exceeds 1 the whole sequence is read as 0–255 and
/// divided by 255, alpha included; otherwise the values are already
/// normalized. Three components take `alpha` as their opacity.
pub(crate) fn parse_components(values: &[f64], alpha: f64) -> Result<Color> {
    if let Some(bad) = values
        .iter()
        .find(|v| !v.is_finite() || **v < 0.0 || **v > 255.0)
    {
        return Err(ColorError::InvalidColorFormat(format!(
            "component {bad} is outside 0–255"
        )));
    }

    let scale = if values.iter().any(|&v| v > 1.0) { 255.0 } else { 1.0 };

    match *values {
        [r, g, b] => Ok(Color::rgba(r / scale, g / scale, b / scale, alpha)),
        [r, g, b, a] => Ok(Color::rgba(r / scale, g / scale, b / scale, a / scale)),
        _ => Err(ColorError::InvalidColorFormat(format!(
            "expected 3 or 4 components, got {}",
            values.len()
        ))),
    }
}
