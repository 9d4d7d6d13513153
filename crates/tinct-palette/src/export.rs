// SPDX-License-Identifier: MIT

//! Source-code snippets declaring a color or a palette for a rendering
//! environment.
//!
//! | Target     | One color                                          | Many colors                                       |
//! |------------|----------------------------------------------------|---------------------------------------------------|
//! | Unity (C#) | `private Color colour = new Color(1.000f, …);`     | `private List<Color> palette = new() { … };`      |
//! | Processing | `color colour = color(255, 0, 0);`                 | `color[] palette = { color(…), … };`              |

use tinct_color::Color;

/// Snippet exporters for a single color.
pub trait Export {
    /// A Unity C# field holding this color as 0–1 floats.
    fn to_unity(&self) -> String;

    /// A Processing `color` variable holding this color as bytes.
    fn to_processing(&self) -> String;
}

impl Export for Color {
    fn to_unity(&self) -> String {
        format!("private Color colour = {};", unity_value(self))
    }

    fn to_processing(&self) -> String {
        format!("color colour = {};", processing_value(self))
    }
}

/// A Unity C# `List<Color>` field initialized with `colors`.
#[must_use]
pub fn unity_palette(colors: &[Color]) -> String {
    let values: Vec<String> = colors.iter().map(unity_value).collect();
    format!("private List<Color> palette = new() {{ {} }};", values.join(", "))
}

/// A Processing `color[]` initialized with `colors`.
#[must_use]
pub fn processing_palette(colors: &[Color]) -> String {
    let values: Vec<String> = colors.iter().map(processing_value).collect();
    format!("color[] palette = {{ {} }};", values.join(", "))
}

fn unity_value(color: &Color) -> String {
    let (r, g, b) = color.rgb_tuple();
    format!("new Color({r:.3}f, {g:.3}f, {b:.3}f)")
}

fn processing_value(color: &Color) -> String {
    let (r, g, b) = color.rgb255();
    format!("color({r}, {g}, {b})")
}
