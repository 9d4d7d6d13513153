// SPDX-License-Identifier: MIT

//! Harmony palettes: hue rotations and lightness sweeps of one base color.
//!
//! Every named scheme is a fixed set of hue offsets (in turns) fed to
//! [`palette_hue_shifts`], which rotates the hue and holds saturation,
//! lightness and alpha:
//!
//! | Scheme              | Offsets                 |
//! |---------------------|-------------------------|
//! | triadic             | 0, 1/3, 2/3             |
//! | tetradic            | 0, 1/4, 1/2, 3/4        |
//! | analogous           | 0, 1/12, 2/12           |
//! | split-complementary | 0, 5/12, 1/2            |
//!
//! The monochromatic and material palettes instead hold hue and saturation
//! and sweep lightness across `l ± max_delta`.

use tinct_color::{Color, IntoColor, Result};

use crate::options::Sweep;

/// The hue offsets for [`palette_hue_shifts`].
#[derive(Debug, Clone, PartialEq)]
pub enum HueShifts {
    /// `n` evenly spaced offsets: `0, 1/n, …, (n-1)/n`.
    Even(usize),
    /// Explicit offsets, in turns, applied in order.
    Offsets(Vec<f64>),
}

impl HueShifts {
    /// The concrete offsets, in output order.
    #[must_use]
    pub fn offsets(&self) -> Vec<f64> {
        match self {
            Self::Even(n) => (0..*n).map(|i| i as f64 / *n as f64).collect(),
            Self::Offsets(offsets) => offsets.clone(),
        }
    }
}

impl From<usize> for HueShifts {
    fn from(n: usize) -> Self {
        Self::Even(n)
    }
}

impl From<Vec<f64>> for HueShifts {
    fn from(offsets: Vec<f64>) -> Self {
        Self::Offsets(offsets)
    }
}

impl From<&[f64]> for HueShifts {
    fn from(offsets: &[f64]) -> Self {
        Self::Offsets(offsets.to_vec())
    }
}

const ANALOGOUS: [f64; 3] = [0.0, 1.0 / 12.0, 2.0 / 12.0];
const SPLIT_COMPLEMENTARY: [f64; 3] = [0.0, 5.0 / 12.0, 0.5];

/// One color per offset, each the base with its hue rotated by that offset.
///
/// `shifts` is a count (`usize`) or a list of offsets (`Vec<f64>`, `&[f64]`).
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_hue_shifts(color: impl IntoColor, shifts: impl Into<HueShifts>) -> Result<Vec<Color>> {
    let base = color.into_color()?;
    let offsets = shifts.into().offsets();
    log::debug!("hue-shift palette of {} from {base}", offsets.len());
    Ok(offsets.into_iter().map(|offset| base.adjust_hue(offset)).collect())
}

/// Three hues a third of a turn apart.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_triadic(color: impl IntoColor) -> Result<Vec<Color>> {
    palette_hue_shifts(color, HueShifts::Even(3))
}

/// Four hues a quarter turn apart.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_tetradic(color: impl IntoColor) -> Result<Vec<Color>> {
    palette_hue_shifts(color, HueShifts::Even(4))
}

/// The base and its two neighbors, 30° apart.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_analogous(color: impl IntoColor) -> Result<Vec<Color>> {
    palette_hue_shifts(color, &ANALOGOUS[..])
}

/// The base, then the two hues flanking its complement (150° and 180°).
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_split_complementary(color: impl IntoColor) -> Result<Vec<Color>> {
    palette_hue_shifts(color, &SPLIT_COMPLEMENTARY[..])
}

/// `n` colors of one hue and saturation, lightness stepping evenly from
/// `l - max_delta` to `l + max_delta` (each clamped to [0, 1]).
///
/// A single color keeps the base lightness; zero colors is an empty palette.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_monochromatic(color: impl IntoColor, n: usize, max_delta: f64) -> Result<Vec<Color>> {
    let base = color.into_color()?;
    let palette = if n == 1 {
        vec![base]
    } else {
        sweep(base, n, max_delta)
    };
    log::debug!("monochromatic palette of {} from {base}", palette.len());
    Ok(palette)
}

/// The Material-style sweep: same formula as [`palette_monochromatic`], with
/// its own defaults ([`Sweep::MATERIAL`]).
///
/// Unlike the monochromatic palette, `n == 1` is not special-cased: the step
/// is zero and the one color sits at `l - max_delta`.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn palette_material(color: impl IntoColor, n: usize, max_delta: f64) -> Result<Vec<Color>> {
    let base = color.into_color()?;
    let palette = sweep(base, n, max_delta);
    log::debug!("material palette of {} from {base}", palette.len());
    Ok(palette)
}

/// [`palette_monochromatic`] with a [`Sweep`] setting.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn monochromatic_with(color: impl IntoColor, sweep: Sweep) -> Result<Vec<Color>> {
    palette_monochromatic(color, sweep.count, sweep.max_delta)
}

/// [`palette_material`] with a [`Sweep`] setting.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn material_with(color: impl IntoColor, sweep: Sweep) -> Result<Vec<Color>> {
    palette_material(color, sweep.count, sweep.max_delta)
}

/// `n` lightness levels from `l - max_delta` in steps of
/// `2 * max_delta / (n - 1)` (step 0 when `n <= 1`).
fn sweep(base: Color, n: usize, max_delta: f64) -> Vec<Color> {
    let step = if n > 1 { 2.0 * max_delta / (n - 1) as f64 } else { 0.0 };
    let start = base.lightness() - max_delta;
    (0..n)
        .map(|i| {
            let l = (i as f64).mul_add(step, start).clamp(0.0, 1.0);
            Color::from_hsla(base.hue(), base.saturation(), l, base.alpha())
        })
        .collect()
}
