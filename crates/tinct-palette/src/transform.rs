// SPDX-License-Identifier: MIT

//! Single-color transforms over anything that converts into a [`Color`].
//!
//! Each function coerces its input once and then defers to the matching
//! total method on `Color`. The only way one of these fails is a bad input,
//! reported as `InvalidColorFormat`.
//!
//! ```text
//! "#FF0000" ──into_color──► Color ──lighten(0.25)──► Color("#FF8080")
//! ```

use tinct_color::{Color, IntoColor, Result};

// ---------------------------------------------------------------------------
// HSL space
// ---------------------------------------------------------------------------

/// Increase lightness by `amount`, capped at 1.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn lighten(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.lighten(amount))
}

/// Decrease lightness by `amount`, floored at 0.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn darken(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.darken(amount))
}

/// Increase saturation by `amount`, capped at 1.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn saturate(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.saturate(amount))
}

/// Decrease saturation by `amount`, floored at 0.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn desaturate(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.desaturate(amount))
}

/// Rotate the hue by `amount` turns.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn adjust_hue(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.adjust_hue(amount))
}

/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn grayscale(color: impl IntoColor) -> Result<Color> {
    Ok(color.into_color()?.grayscale())
}

/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn complement(color: impl IntoColor) -> Result<Color> {
    Ok(color.into_color()?.complement())
}

// ---------------------------------------------------------------------------
// RGB space
// ---------------------------------------------------------------------------

/// Mix toward white.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn tint(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.tint(amount))
}

/// Mix toward black.
///
/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn shade(color: impl IntoColor, amount: f64) -> Result<Color> {
    Ok(color.into_color()?.shade(amount))
}

/// # Errors
///
/// `InvalidColorFormat` if `color` does not convert.
pub fn invert(color: impl IntoColor) -> Result<Color> {
    Ok(color.into_color()?.invert())
}

/// One interpolation step from `start` toward `end`; see [`Color::lerp`].
///
/// # Errors
///
/// `InvalidColorFormat` if either endpoint does not convert.
pub fn lerp(start: impl IntoColor, end: impl IntoColor, t: f64) -> Result<Color> {
    let start = start.into_color()?;
    let end = end.into_color()?;
    Ok(start.lerp(&end, t))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tinct_color::ColorError;

    const SAMPLES: [&str; 8] = [
        "#FF0000", "#11AA22", "#000091", "#E1000F", "#808080", "#FFFFFF", "#000000", "#C8643280",
    ];

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // -- Coercion at the boundary --

    #[test]
    fn accepts_every_input_form() {
        let expected = Color::rgb(1.0, 0.0, 0.0).invert();
        assert_eq!(invert("#F00").unwrap(), expected);
        assert_eq!(invert((255, 0, 0)).unwrap(), expected);
        assert_eq!(invert([1.0, 0.0, 0.0]).unwrap(), expected);
        assert_eq!(invert(Color::rgb(1.0, 0.0, 0.0)).unwrap(), expected);
        assert_eq!(invert("#00FF00").unwrap().hex(), "#FF00FF");
    }

    #[test]
    fn bad_input_fails_every_transform() {
        let bad = "#12";
        assert!(matches!(lighten(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(darken(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(saturate(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(desaturate(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(adjust_hue(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(grayscale(bad), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(complement(bad), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(tint(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(shade(bad, 0.1), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(invert(bad), Err(ColorError::InvalidColorFormat(_))));
        assert!(matches!(lerp("#000", bad, 0.5), Err(ColorError::InvalidColorFormat(_))));
    }

    // -- Properties --

    #[test]
    fn lighten_and_darken_saturate_exactly() {
        for input in SAMPLES {
            let up = lighten(input, 1.0).unwrap();
            assert_eq!(up.lightness(), 1.0, "{input}");
            assert_eq!(lighten(up, 1.0).unwrap().lightness(), 1.0, "{input}");

            let down = darken(input, 1.0).unwrap();
            assert_eq!(down.lightness(), 0.0, "{input}");
            assert_eq!(darken(down, 1.0).unwrap(), down, "{input}");
        }
    }

    #[test]
    fn invert_twice_is_identity() {
        for input in SAMPLES {
            let c = Color::parse(input).unwrap();
            assert_eq!(invert(invert(c).unwrap()).unwrap(), c, "{input}");
        }
    }

    #[test]
    fn hsl_transforms_keep_other_components() {
        let c = Color::parse("#C86432").unwrap();

        let s = saturate(c, 0.1).unwrap();
        assert!(approx_eq(s.hue(), c.hue()) && approx_eq(s.lightness(), c.lightness()));

        let d = desaturate(c, 0.1).unwrap();
        assert!(approx_eq(d.saturation(), c.saturation() - 0.1));

        let h = adjust_hue(c, 0.25).unwrap();
        assert!(approx_eq(h.saturation(), c.saturation()));
        assert!(approx_eq(h.lightness(), c.lightness()));
        assert!(approx_eq(h.hue(), (c.hue() + 0.25).rem_euclid(1.0)));
    }

    #[test]
    fn complement_matches_half_turn() {
        for input in SAMPLES {
            assert_eq!(complement(input).unwrap(), adjust_hue(input, 0.5).unwrap());
        }
    }

    #[test]
    fn grayscale_of_red_is_mid_gray() {
        assert_eq!(grayscale("#FF0000").unwrap().hex(), "#808080");
    }

    #[test]
    fn tint_and_shade_keep_alpha() {
        let c = "#C8643280";
        let alpha = Color::parse(c).unwrap().alpha();
        assert!(approx_eq(tint(c, 0.3).unwrap().alpha(), alpha));
        assert!(approx_eq(shade(c, 0.3).unwrap().alpha(), alpha));
    }

    #[test]
    fn tint_and_shade_scale_channels() {
        let t = tint("#000000", 0.25).unwrap();
        assert_eq!(t.rgb_tuple(), (0.25, 0.25, 0.25));
        let s = shade("#FFFFFF", 0.25).unwrap();
        assert_eq!(s.rgb_tuple(), (0.75, 0.75, 0.75));
    }

    #[test]
    fn lerp_between_mixed_inputs() {
        let mid = lerp("#000000", (255, 255, 255), 0.5).unwrap();
        assert_eq!(mid.rgb_tuple(), (0.5, 0.5, 0.5));
    }
}
