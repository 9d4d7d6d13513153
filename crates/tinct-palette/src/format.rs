// SPDX-License-Identifier: MIT

//! Output-format dispatch.
//!
//! A [`Format`] picks one notation; [`format_one`] and [`format_many`] map
//! colors through it while keeping the shape of the input (one color in,
//! one value out; a slice in, a list out). No format means the colors come
//! back untouched.
//!
//! The two export formats are the exception for slices: a palette exports
//! as one snippet declaring the whole list, not a list of snippets.

use std::fmt;

use serde::{Deserialize, Serialize};
use tinct_color::Color;

use crate::export::{Export, processing_palette, unity_palette};

/// The notations a color can be rendered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    /// `(r, g, b)` floats in [0, 1].
    Rgb,
    /// `(r, g, b, a)` floats in [0, 1].
    Rgba,
    /// `(r, g, b)` bytes.
    Rgb255,
    /// `#RRGGBB`.
    Hex,
    /// `#RRGGBBAA`.
    HexAlpha,
    /// `(h, s, l)`.
    Hsl,
    /// `#RGB` when possible, else `#RRGGBB`.
    Web,
    /// Processing source snippet.
    Processing,
    /// Unity C# source snippet.
    Unity,
}

impl Format {
    /// The lowercase name used on the command line and in JSON.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "rgb",
            Self::Rgba => "rgba",
            Self::Rgb255 => "rgb255",
            Self::Hex => "hex",
            Self::HexAlpha => "hexalpha",
            Self::Hsl => "hsl",
            Self::Web => "web",
            Self::Processing => "processing",
            Self::Unity => "unity",
        }
    }

    /// Parse a format name, ignoring case. Unknown names give `None`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::all().into_iter().find(|f| f.name().eq_ignore_ascii_case(name))
    }

    /// Every format, in declaration order.
    #[must_use]
    pub const fn all() -> [Self; 9] {
        [
            Self::Rgb,
            Self::Rgba,
            Self::Rgb255,
            Self::Hex,
            Self::HexAlpha,
            Self::Hsl,
            Self::Web,
            Self::Processing,
            Self::Unity,
        ]
    }

    /// Whether this format produces source code rather than a notation.
    #[must_use]
    pub const fn is_export(self) -> bool {
        matches!(self, Self::Processing | Self::Unity)
    }

    /// The function rendering one color in this format.
    #[must_use]
    pub fn formatter(self) -> fn(&Color) -> Value {
        match self {
            Self::Rgb => |c| Value::Rgb(c.rgb_tuple()),
            Self::Rgba => |c| Value::Rgba(c.rgba_tuple()),
            Self::Rgb255 => |c| Value::Rgb255(c.rgb255()),
            Self::Hex => |c| Value::Text(c.hex()),
            Self::HexAlpha => |c| Value::Text(c.hex_alpha()),
            Self::Hsl => |c| Value::Hsl(c.hsl()),
            Self::Web => |c| Value::Text(c.web()),
            Self::Processing => |c| Value::Text(c.to_processing()),
            Self::Unity => |c| Value::Text(c.to_unity()),
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One color rendered in some format.
///
/// Serializes without a tag: a color as its `#RRGGBBAA` string, tuples as
/// JSON arrays, text as a string.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Color(Color),
    Rgb((f64, f64, f64)),
    Rgba((f64, f64, f64, f64)),
    Rgb255((u8, u8, u8)),
    Hsl((f64, f64, f64)),
    Text(String),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Color(c) => write!(f, "{c}"),
            Self::Rgb((r, g, b)) => write!(f, "({r}, {g}, {b})"),
            Self::Rgba((r, g, b, a)) => write!(f, "({r}, {g}, {b}, {a})"),
            Self::Rgb255((r, g, b)) => write!(f, "({r}, {g}, {b})"),
            Self::Hsl((h, s, l)) => write!(f, "({h}, {s}, {l})"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

/// A sequence of colors rendered in some format.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Formatted {
    /// One value per color, in order.
    List(Vec<Value>),
    /// A single export snippet declaring every color.
    Snippet(String),
}

impl Formatted {
    /// Number of values emitted: one per color for a list, one for a
    /// snippet whatever palette size it declares.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::List(values) => values.len(),
            Self::Snippet(_) => 1,
        }
    }

    /// Whether nothing was emitted. A snippet is never empty, even for an
    /// empty palette.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Display for Formatted {
    /// One value per line, or the snippet as-is.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::List(values) => {
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{value}")?;
                }
                Ok(())
            }
            Self::Snippet(snippet) => f.write_str(snippet),
        }
    }
}

/// Render one color. `None` returns the color itself.
#[must_use]
pub fn format_one(color: &Color, format: Option<Format>) -> Value {
    match format {
        Some(format) => format.formatter()(color),
        None => Value::Color(*color),
    }
}

/// Render a sequence of colors, keeping it a sequence.
///
/// `None` returns the colors themselves. The export formats produce a
/// single [`Formatted::Snippet`] for the whole palette.
#[must_use]
pub fn format_many(colors: &[Color], format: Option<Format>) -> Formatted {
    log::debug!(
        "formatting {} colors as {}",
        colors.len(),
        format.map_or("color", Format::name)
    );
    match format {
        Some(Format::Unity) => Formatted::Snippet(unity_palette(colors)),
        Some(Format::Processing) => Formatted::Snippet(processing_palette(colors)),
        _ => Formatted::List(colors.iter().map(|c| format_one(c, format)).collect()),
    }
}
