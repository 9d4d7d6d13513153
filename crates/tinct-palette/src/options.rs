// SPDX-License-Identifier: MIT

//! Engine defaults.
//!
//! Every knob a caller may leave unset has its value here, in one place:
//!
//! | Knob                            | Default |
//! |---------------------------------|---------|
//! | transform amount                | 0.1     |
//! | monochromatic count / max delta | 3 / 0.1 |
//! | material count / max delta      | 5 / 0.2 |
//! | gradient steps                  | 10      |
//!
//! The structs exist so a front end can hold "the user's settings" as one
//! value and fall back to [`Default`] for whatever was not given.

/// Amount used by lighten, darken, saturate, desaturate, tint and shade
/// when none is given.
pub const DEFAULT_AMOUNT: f64 = 0.1;

/// Gradient length when none is given.
pub const DEFAULT_STEPS: usize = 10;

/// A lightness sweep: `count` colors spread over `l ± max_delta`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub count: usize,
    pub max_delta: f64,
}

impl Sweep {
    /// Monochromatic defaults: three colors, ±0.1 lightness.
    pub const MONOCHROMATIC: Self = Self {
        count: 3,
        max_delta: 0.1,
    };

    /// Material defaults: five colors, ±0.2 lightness.
    pub const MATERIAL: Self = Self {
        count: 5,
        max_delta: 0.2,
    };

    /// Replace whichever fields were given, keep the rest.
    #[must_use]
    pub fn with(self, count: Option<usize>, max_delta: Option<f64>) -> Self {
        Self {
            count: count.unwrap_or(self.count),
            max_delta: max_delta.unwrap_or(self.max_delta),
        }
    }
}

/// Defaults for the palette generators and single-color transforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PaletteOptions {
    pub amount: f64,
    pub monochromatic: Sweep,
    pub material: Sweep,
}

impl Default for PaletteOptions {
    fn default() -> Self {
        Self {
            amount: DEFAULT_AMOUNT,
            monochromatic: Sweep::MONOCHROMATIC,
            material: Sweep::MATERIAL,
        }
    }
}

/// Defaults for the gradient generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientOptions {
    pub steps: usize,
}

impl Default for GradientOptions {
    fn default() -> Self {
        Self {
            steps: DEFAULT_STEPS,
        }
    }
}
