// SPDX-License-Identifier: MIT

//! Implicit coercion at API boundaries.
//!
//! Engine functions accept "a color, or anything a color can be built from".
//! [`IntoColor`] is that contract: one conversion, run once at the entry of
//! each function, after which everything works on a plain [`Color`].
//!
//! | Input                                  | Reading                         |
//! |----------------------------------------|---------------------------------|
//! | `Color`, `&Color`                      | copied                          |
//! | `&str`, `String`, `&String`            | hex, see [`Color::parse`]       |
//! | `(f64, f64, f64)`, `[f64; 3]`          | channels, 0–1 or 0–255          |
//! | `(f64, f64, f64, f64)`, `[f64; 4]`     | channels + alpha, 0–1 or 0–255  |
//! | `(i32, ..)`, `[i32; _]`, `(u8, ..)`, `[u8; _]` | same, from integer literals |
//! | `&[f64]`, `Vec<f64>`                   | arity checked at runtime        |

use crate::color::Color;
use crate::error::Result;

/// Conversion into a [`Color`], failing with
/// [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat)
/// for input that does not describe one.
pub trait IntoColor {
    /// Build the color.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidColorFormat`](crate::ColorError::InvalidColorFormat)
    /// when the input is not a valid color.
    fn into_color(self) -> Result<Color>;
}

impl IntoColor for Color {
    fn into_color(self) -> Result<Color> {
        Ok(self)
    }
}

impl IntoColor for &Color {
    fn into_color(self) -> Result<Color> {
        Ok(*self)
    }
}

impl IntoColor for &str {
    fn into_color(self) -> Result<Color> {
        Color::parse(self)
    }
}

impl IntoColor for String {
    fn into_color(self) -> Result<Color> {
        Color::parse(&self)
    }
}

impl IntoColor for &String {
    fn into_color(self) -> Result<Color> {
        Color::parse(self)
    }
}

impl IntoColor for &[f64] {
    fn into_color(self) -> Result<Color> {
        Color::from_components(self)
    }
}

impl IntoColor for Vec<f64> {
    fn into_color(self) -> Result<Color> {
        Color::from_components(&self)
    }
}

// Fixed-arity tuples and arrays for each numeric type a literal can take.
macro_rules! impl_into_color_for_numbers {
    ($($t:ty),*) => {$(
        impl IntoColor for ($t, $t, $t) {
            fn into_color(self) -> Result<Color> {
                let (r, g, b) = self;
                Color::from_components(&[f64::from(r), f64::from(g), f64::from(b)])
            }
        }

        impl IntoColor for ($t, $t, $t, $t) {
            fn into_color(self) -> Result<Color> {
                let (r, g, b, a) = self;
                Color::from_components(&[f64::from(r), f64::from(g), f64::from(b), f64::from(a)])
            }
        }

        impl IntoColor for [$t; 3] {
            fn into_color(self) -> Result<Color> {
                Color::from_components(&self.map(f64::from))
            }
        }

        impl IntoColor for [$t; 4] {
            fn into_color(self) -> Result<Color> {
                Color::from_components(&self.map(f64::from))
            }
        }
    )*};
}

impl_into_color_for_numbers!(f64, i32, u8);
