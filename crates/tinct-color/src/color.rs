// SPDX-License-Identifier: MIT
//
// The tinct color value.
//
// Single-character variable names (r, g, b, a, h, s, l) are the standard
// mathematical convention in color work.
#![allow(clippy::many_single_char_names)]
//
// A Color carries two views of the same value: normalized sRGB channels and
// the HSL decomposition of those channels. Both are computed together at
// construction and the fields are private, so the two views can never drift
// apart. Every operation returns a new Color.
//
//   hex / numeric input ──► parse ──► (r, g, b, a) ──► rgb_to_hsl ──► Color
//   HSL edit ─────────────────────────► hsl_to_rgb ──► (r, g, b) ───► Color

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Result;
use crate::hsl::{hsl_to_rgb, rgb_to_hsl};
use crate::parse::{parse_components, parse_hex};

// ─── Color ───────────────────────────────────────────────────────────────────

/// An immutable sRGB color with alpha, plus its HSL decomposition.
///
/// Every component is a float in [0, 1]. Hue is circular: 0.0 and 1.0 are
/// the same red.
///
/// # Examples
///
/// ```
/// use tinct_color::Color;
///
/// let red = Color::parse("#F00").unwrap();
/// assert_eq!(red.hex(), "#FF0000");
/// assert_eq!(red.web(), "#F00");
///
/// let cyan = red.invert();
/// assert_eq!(cyan.hex(), "#00FFFF");
///
/// let pink = red.lighten(0.25);
/// assert_eq!(pink.hex(), "#FF8080");
/// ```
#[derive(Clone, Copy)]
pub struct Color {
    r: f64,
    g: f64,
    b: f64,
    a: f64,
    h: f64,
    s: f64,
    l: f64,
}

impl Color {
    // ─── Constructors ────────────────────────────────────────────────────

    /// Create an opaque color from normalized sRGB channels.
    ///
    /// Channels are clamped to [0, 1].
    #[must_use]
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    /// Create a color from normalized sRGB channels and alpha.
    ///
    /// All four values are clamped to [0, 1]; HSL is derived from the result.
    /// NaN reads as 0.
    #[must_use]
    pub fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        let (r, g, b, a) = (unit(r), unit(g), unit(b), unit(a));
        let (h, s, l) = rgb_to_hsl(r, g, b);
        Self {
            r,
            g,
            b,
            a,
            h: turn(h),
            s: unit(s),
            l: unit(l),
        }
    }

    /// Create an opaque color from 8-bit channels.
    #[must_use]
    pub fn rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::rgba8(r, g, b, u8::MAX)
    }

    /// Create a color from 8-bit channels and 8-bit alpha.
    #[must_use]
    pub fn rgba8(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::rgba(
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            f64::from(a) / 255.0,
        )
    }

    /// Create an opaque color from hue, saturation and lightness.
    #[must_use]
    pub fn from_hsl(h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, 1.0)
    }

    /// Create a color from hue, saturation, lightness and alpha.
    ///
    /// The RGB channels are rebuilt from the given HSL, which is stored
    /// as-is (hue wrapped into [0, 1), saturation and lightness clamped).
    /// A non-finite hue reads as 0, any other NaN as 0.
    /// Storing it instead of re-deriving keeps the hue of a fully
    /// desaturated color and keeps a lightness clamped to 1.0 exactly 1.0.
    #[must_use]
    pub fn from_hsla(h: f64, s: f64, l: f64, a: f64) -> Self {
        let (h, s, l) = (turn(h), unit(s), unit(l));
        let (r, g, b) = hsl_to_rgb(h, s, l);
        Self {
            r: unit(r),
            g: unit(g),
            b: unit(b),
            a: unit(a),
            h,
            s,
            l,
        }
    }

    /// Parse a hex color: `#RGB`, `#RGBA`, `#RRGGBB` or `#RRGGBBAA`.
    ///
    /// The leading `#` is optional. Forms without alpha are fully opaque.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat)
    /// for any other length or a non-hex digit.
    pub fn parse(s: &str) -> Result<Self> {
        parse_hex(s, 1.0)
    }

    /// Parse a hex color, using `alpha` when the string carries none.
    ///
    /// # Errors
    ///
    /// Same as [`Color::parse`].
    pub fn parse_with_alpha(s: &str, alpha: f64) -> Result<Self> {
        parse_hex(s, alpha)
    }

    /// Build a color from `[r, g, b]` or `[r, g, b, a]`.
    ///
    /// If any component exceeds 1, every component (alpha included) is read
    /// as 0–255. Otherwise the values are taken as normalized.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat)
    /// for any other arity, or a component that is not finite or falls
    /// outside 0–255.
    pub fn from_components(values: &[f64]) -> Result<Self> {
        parse_components(values, 1.0)
    }

    /// Like [`Color::from_components`], using `alpha` for 3-component input.
    ///
    /// # Errors
    ///
    /// Same as [`Color::from_components`].
    pub fn from_components_with_alpha(values: &[f64], alpha: f64) -> Result<Self> {
        parse_components(values, alpha)
    }

    /// Return a copy with the given alpha (clamped to [0, 1]).
    #[must_use]
    pub fn with_alpha(self, alpha: f64) -> Self {
        Self { a: unit(alpha), ..self }
    }

    // ─── Raw components ──────────────────────────────────────────────────

    /// Red channel, 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn red(self) -> f64 {
        self.r
    }

    /// Green channel, 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn green(self) -> f64 {
        self.g
    }

    /// Blue channel, 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn blue(self) -> f64 {
        self.b
    }

    /// Opacity: 0.0 (transparent) to 1.0 (opaque).
    #[inline]
    #[must_use]
    pub const fn alpha(self) -> f64 {
        self.a
    }

    /// Hue, 0.0–1.0 (a full turn of the color wheel).
    #[inline]
    #[must_use]
    pub const fn hue(self) -> f64 {
        self.h
    }

    /// HSL saturation, 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn saturation(self) -> f64 {
        self.s
    }

    /// HSL lightness, 0.0–1.0.
    #[inline]
    #[must_use]
    pub const fn lightness(self) -> f64 {
        self.l
    }

    // ─── Notations ───────────────────────────────────────────────────────

    /// `(r, g, b)` in [0, 1], rounded to 6 decimals.
    #[must_use]
    pub fn rgb_tuple(self) -> (f64, f64, f64) {
        (round_to(self.r, 6), round_to(self.g, 6), round_to(self.b, 6))
    }

    /// `(r, g, b, a)` in [0, 1], rounded to 6 decimals.
    #[must_use]
    pub fn rgba_tuple(self) -> (f64, f64, f64, f64) {
        let (r, g, b) = self.rgb_tuple();
        (r, g, b, round_to(self.a, 6))
    }

    /// `(r, g, b)` as bytes.
    #[must_use]
    pub fn rgb255(self) -> (u8, u8, u8) {
        (to_u8(self.r), to_u8(self.g), to_u8(self.b))
    }

    /// `#RRGGBB`, uppercase. Alpha is dropped.
    #[must_use]
    pub fn hex(self) -> String {
        let (r, g, b) = self.rgb255();
        format!("#{r:02X}{g:02X}{b:02X}")
    }

    /// `#RRGGBBAA`, uppercase, alpha scaled like a channel.
    #[must_use]
    pub fn hex_alpha(self) -> String {
        let (r, g, b) = self.rgb255();
        let a = to_u8(self.a);
        format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
    }

    /// Web shorthand: `#RGB` when every byte is a doubled digit
    /// (`#AABBCC` → `#ABC`), `#RRGGBB` otherwise.
    #[must_use]
    pub fn web(self) -> String {
        let (r, g, b) = self.rgb255();
        let doubled = |v: u8| v >> 4 == v & 0x0F;
        if doubled(r) && doubled(g) && doubled(b) {
            format!("#{:X}{:X}{:X}", r & 0x0F, g & 0x0F, b & 0x0F)
        } else {
            self.hex()
        }
    }

    /// `(hue, saturation, lightness)`.
    #[inline]
    #[must_use]
    pub const fn hsl(self) -> (f64, f64, f64) {
        (self.h, self.s, self.l)
    }

    // ─── HSL operations ──────────────────────────────────────────────────
    //
    // These edit one HSL component, clamp it, and rebuild RGB. The other two
    // HSL components and alpha are carried over untouched.

    /// Increase lightness by `amount` (result capped at 1.0).
    #[must_use]
    pub fn lighten(self, amount: f64) -> Self {
        self.with_hsl(self.h, self.s, (self.l + amount).min(1.0))
    }

    /// Decrease lightness by `amount` (result floored at 0.0).
    #[must_use]
    pub fn darken(self, amount: f64) -> Self {
        self.with_hsl(self.h, self.s, (self.l - amount).max(0.0))
    }

    /// Increase saturation by `amount` (result capped at 1.0).
    #[must_use]
    pub fn saturate(self, amount: f64) -> Self {
        self.with_hsl(self.h, (self.s + amount).min(1.0), self.l)
    }

    /// Decrease saturation by `amount` (result floored at 0.0).
    #[must_use]
    pub fn desaturate(self, amount: f64) -> Self {
        self.with_hsl(self.h, (self.s - amount).max(0.0), self.l)
    }

    /// Rotate the hue by `amount` turns, wrapping around the wheel.
    /// Negative amounts rotate backwards.
    #[must_use]
    pub fn adjust_hue(self, amount: f64) -> Self {
        self.with_hsl((self.h + amount).rem_euclid(1.0), self.s, self.l)
    }

    /// Remove all saturation.
    #[must_use]
    pub fn grayscale(self) -> Self {
        self.with_hsl(self.h, 0.0, self.l)
    }

    /// The opposite hue on the color wheel.
    #[must_use]
    pub fn complement(self) -> Self {
        self.adjust_hue(0.5)
    }

    // ─── RGB operations ──────────────────────────────────────────────────

    /// Move every channel toward white by the fraction `amount`.
    #[must_use]
    pub fn tint(self, amount: f64) -> Self {
        let up = |c: f64| (1.0 - c).mul_add(amount, c);
        Self::rgba(up(self.r), up(self.g), up(self.b), self.a)
    }

    /// Move every channel toward black by the fraction `amount`.
    #[must_use]
    pub fn shade(self, amount: f64) -> Self {
        let down = |c: f64| c * (1.0 - amount);
        Self::rgba(down(self.r), down(self.g), down(self.b), self.a)
    }

    /// `1 - c` for each channel. Alpha is kept.
    #[must_use]
    pub fn invert(self) -> Self {
        Self::rgba(1.0 - self.r, 1.0 - self.g, 1.0 - self.b, self.a)
    }

    /// Linear interpolation of r, g, b and a toward `other`.
    ///
    /// `t` = 0.0 returns `self`, `t` = 1.0 returns `other`. `t` is not
    /// clamped; the resulting channels are.
    #[must_use]
    pub fn lerp(self, other: &Self, t: f64) -> Self {
        let mix = |from: f64, to: f64| (to - from).mul_add(t, from);
        Self::rgba(
            mix(self.r, other.r),
            mix(self.g, other.g),
            mix(self.b, other.b),
            mix(self.a, other.a),
        )
    }

    /// Rebuild from an edited HSL triple, keeping alpha.
    #[inline]
    fn with_hsl(self, h: f64, s: f64, l: f64) -> Self {
        Self::from_hsla(h, s, l, self.a)
    }

    /// Channels rounded to 4 decimals, the precision equality works at.
    fn equality_key(self) -> [f64; 4] {
        [
            round_to(self.r, 4),
            round_to(self.g, 4),
            round_to(self.b, 4),
            round_to(self.a, 4),
        ]
    }
}

impl PartialEq for Color {
    /// Structural equality of `(r, g, b, a)` at 4 decimal places.
    /// HSL takes no part: it is a function of RGB.
    fn eq(&self, other: &Self) -> bool {
        self.equality_key() == other.equality_key()
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a >= 1.0 {
            write!(f, "Color(\"{}\")", self.hex())
        } else {
            write!(f, "Color(\"{}\")", self.hex_alpha())
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.hex())
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0.0, 0.0, 0.0)
    }
}

impl std::str::FromStr for Color {
    type Err = crate::ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// Serialized as `#RRGGBBAA` so alpha survives the trip. The string passes
// through the hex parser on the way back in.

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.hex_alpha())
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(serde::de::Error::custom)
    }
}

// ─── Helpers ─────────────────────────────────────────────────────────────────

/// Clamp into [0, 1]. NaN becomes 0.
#[inline]
fn unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Wrap a hue into [0, 1]. Infinities and NaN become 0.
#[inline]
fn turn(v: f64) -> f64 {
    if v.is_finite() { v.rem_euclid(1.0) } else { 0.0 }
}

/// Round to `places` decimals, ties to even.
#[inline]
fn round_to(v: f64, places: i32) -> f64 {
    let scale = 10f64.powi(places);
    (v * scale).round_ties_even() / scale
}

/// Scale a [0, 1] value to a byte. Ties go to even: 127.5 → 128, 126.5 → 126.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_u8(v: f64) -> u8 {
    // Safe: clamp guarantees 0.0 <= value <= 255.0 before truncation.
    (v * 255.0).round_ties_even().clamp(0.0, 255.0) as u8
}

// ─── Tests ───────────────────────────────────────────────────────────────────
