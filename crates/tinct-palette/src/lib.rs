// SPDX-License-Identifier: MIT

//! # tinct-palette — transform and palette engine
//!
//! Stateless functions over [`Color`]: single-color transforms, harmony
//! palettes, two-color and multi-stop gradients, and the output-format
//! dispatch that turns the results into notations or code snippets.
//!
//! # Architecture
//!
//! ```text
//! impl IntoColor (hex, tuple, Color)
//!     │  into_color()  ── InvalidColorFormat
//!     ▼
//! transform.rs:  lighten / darken / … / invert      → Color
//! harmony.rs:    hue shifts, mono, material          → Vec<Color>
//! gradient.rs:   gradient, gradient_stops            → Vec<Color>
//!     │
//!     ▼
//! format.rs:     format_one / format_many            → Value / Formatted
//!     └── export.rs: Unity / Processing snippets
//! ```
//!
//! Every function coerces its inputs once on entry; past that point
//! nothing can fail.
//!
//! ```
//! use tinct_palette::{Format, format_many, gradient_stops};
//!
//! let stops = gradient_stops(["#000091", "#FFF", "#E1000F"], 5).unwrap();
//! let hex = format_many(&stops, Some(Format::Hex));
//! assert_eq!(hex.len(), 5);
//! ```

// Step counts and indices become interpolation parameters.
#![allow(clippy::cast_precision_loss)]

pub mod export;
pub mod format;
pub mod gradient;
pub mod harmony;
pub mod options;
pub mod transform;

pub use export::Export;
pub use format::{Format, Formatted, Value, format_many, format_one};
pub use gradient::{gradient, gradient_stops, gradient_stops_from, gradient_to, segment_steps};
pub use harmony::{
    HueShifts, material_with, monochromatic_with, palette_analogous, palette_hue_shifts,
    palette_material, palette_monochromatic, palette_split_complementary, palette_tetradic,
    palette_triadic,
};
pub use options::{DEFAULT_AMOUNT, DEFAULT_STEPS, GradientOptions, PaletteOptions, Sweep};
pub use tinct_color::{Color, ColorError, IntoColor, Result};
