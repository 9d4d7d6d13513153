// SPDX-License-Identifier: MIT
//
// tinct-color — the color value model for tinct.
//
// One immutable type, `Color`, holding normalized sRGB + alpha together with
// its HSL decomposition. Everything a caller can hand us (hex strings, 0–1
// or 0–255 channel tuples, another Color) is normalized here, and every
// notation we hand back (tuples, bytes, hex, web shorthand, HSL) is encoded
// here. The transform and palette engine lives in `tinct-palette` and only
// ever sees finished Colors.

pub mod coerce;
pub mod color;
pub mod error;
pub mod hsl;
mod parse;

pub use coerce::IntoColor;
pub use color::Color;
pub use error::{ColorError, Result};
