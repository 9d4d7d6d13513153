// SPDX-License-Identifier: MIT

//! Linear gradients between two colors and through a list of stops.
//!
//! # Multi-stop allocation
//!
//! `steps` output colors are spread over `n - 1` segments. Stop `i` lands on
//! output index `boundary(i) = round((steps - 1) * i / (n - 1))`, so segment
//! `i` owns `boundary(i + 1) - boundary(i)` steps and the lengths always sum
//! to `steps - 1` whatever the rounding did. Each segment is a two-color
//! gradient including both ends; the shared stop between two segments is
//! emitted once.
//!
//! ```text
//! stops:   A ─────────── B ─────────── C        steps = 5
//! index:   0     1      2      3       4
//!          └─ seg 0: A..B ┘└─ seg 1: B..C ┘     (B emitted once)
//! ```

use tinct_color::{Color, ColorError, IntoColor, Result};

/// `steps` colors from `start` to `end`, interpolating r, g, b and a.
///
/// Color `i` sits at `t = i / (steps - 1)`: the first is `start`, the last
/// is `end`. One step yields just `start`; zero steps yields nothing.
///
/// # Errors
///
/// `InvalidColorFormat` if either endpoint does not convert.
pub fn gradient(start: impl IntoColor, end: impl IntoColor, steps: usize) -> Result<Vec<Color>> {
    let start = start.into_color()?;
    let end = end.into_color()?;
    Ok(interpolate(start, end, steps))
}

/// [`gradient`] with an end color that may be missing.
///
/// # Errors
///
/// [`ColorError::MissingEndpoint`] when `end` is `None`, otherwise as
/// [`gradient`].
pub fn gradient_to<E: IntoColor>(start: impl IntoColor, end: Option<E>, steps: usize) -> Result<Vec<Color>> {
    let end = end.ok_or(ColorError::MissingEndpoint)?;
    gradient(start, end, steps)
}

/// `steps` colors passing through every stop in order.
///
/// # Errors
///
/// [`ColorError::InsufficientStops`] with fewer than two stops, or
/// `InvalidColorFormat` if any stop does not convert.
pub fn gradient_stops<I>(stops: I, steps: usize) -> Result<Vec<Color>>
where
    I: IntoIterator,
    I::Item: IntoColor,
{
    let stops = stops
        .into_iter()
        .map(IntoColor::into_color)
        .collect::<Result<Vec<_>>>()?;
    through(&stops, steps)
}

/// [`gradient_stops`] starting at `start` and continuing through `rest`.
///
/// # Errors
///
/// [`ColorError::InsufficientStops`] when `rest` is empty, or
/// `InvalidColorFormat` if any color does not convert.
pub fn gradient_stops_from<I>(start: impl IntoColor, rest: I, steps: usize) -> Result<Vec<Color>>
where
    I: IntoIterator,
    I::Item: IntoColor,
{
    let mut stops = vec![start.into_color()?];
    for stop in rest {
        stops.push(stop.into_color()?);
    }
    through(&stops, steps)
}

/// Steps owned by each of the `stops - 1` segments of a `steps`-long
/// gradient. Empty for fewer than two stops or zero steps.
///
/// # Examples
///
/// ```
/// use tinct_palette::gradient::segment_steps;
///
/// assert_eq!(segment_steps(3, 5), vec![2, 2]);
/// assert_eq!(segment_steps(4, 10), vec![3, 3, 3]);
/// assert_eq!(segment_steps(3, 4), vec![2, 1]);
/// ```
#[must_use]
pub fn segment_steps(stops: usize, steps: usize) -> Vec<usize> {
    if stops < 2 || steps == 0 {
        return Vec::new();
    }
    (0..stops - 1)
        .map(|i| boundary(i + 1, stops, steps) - boundary(i, stops, steps))
        .collect()
}

/// Output index of stop `i`: `(steps - 1) * i / (stops - 1)`, rounded half
/// to even.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn boundary(i: usize, stops: usize, steps: usize) -> usize {
    let exact = (steps - 1) as f64 * i as f64 / (stops - 1) as f64;
    // Non-negative and at most steps - 1.
    exact.round_ties_even() as usize
}

fn through(stops: &[Color], steps: usize) -> Result<Vec<Color>> {
    if stops.len() < 2 {
        return Err(ColorError::InsufficientStops(stops.len()));
    }

    let mut out = Vec::with_capacity(steps);
    for (i, (pair, seg)) in stops
        .windows(2)
        .zip(segment_steps(stops.len(), steps))
        .enumerate()
    {
        log::trace!("segment {i}: {} -> {} over {seg} steps", pair[0], pair[1]);
        let segment = interpolate(pair[0], pair[1], seg + 1);
        // Later segments open on the stop the previous one closed with.
        let skip = usize::from(i > 0);
        out.extend(segment.into_iter().skip(skip));
    }

    log::debug!("{}-stop gradient of {} colors", stops.len(), out.len());
    Ok(out)
}

fn interpolate(start: Color, end: Color, steps: usize) -> Vec<Color> {
    let last = steps.saturating_sub(1).max(1) as f64;
    (0..steps).map(|i| start.lerp(&end, i as f64 / last)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn hexes(colors: &[Color]) -> Vec<String> {
        colors.iter().map(|c| c.hex()).collect()
    }

    // ── Two colors ───────────────────────────────────────────────────────

    #[test]
    fn red_to_blue_in_five() {
        let g = gradient("#FF0000", "#0000FF", 5).unwrap();
        assert_eq!(g.len(), 5);
        assert_eq!(g[0].hex(), "#FF0000");
        assert_eq!(g[4].hex(), "#0000FF");
        assert_eq!(g[2].hex(), "#800080");
    }

    #[test]
    fn endpoints_are_exact() {
        let pairs = [("#000091", "#E1000F"), ("#11AA2280", "#FFFFFF"), ("#123", "#FEDCBA")];
        for (a, b) in pairs {
            let start = Color::parse(a).unwrap();
            let end = Color::parse(b).unwrap();
            for steps in [2, 3, 10, 33] {
                let g = gradient(start, end, steps).unwrap();
                assert_eq!(g.len(), steps);
                assert_eq!(g[0], start);
                assert_eq!(g[steps - 1], end);
            }
        }
    }

    #[test]
    fn single_step_is_start() {
        let g = gradient("#FF0000", "#0000FF", 1).unwrap();
        assert_eq!(hexes(&g), ["#FF0000"]);
    }

    #[test]
    fn zero_steps_is_empty() {
        assert!(gradient("#FF0000", "#0000FF", 0).unwrap().is_empty());
    }

    #[test]
    fn alpha_is_interpolated() {
        let g = gradient("#00000000", "#000000FF", 3).unwrap();
        assert_eq!(g[1].rgba_tuple().3, 0.5);
    }

    #[test]
    fn missing_end() {
        let none: Option<&str> = None;
        assert_eq!(gradient_to("#FF0000", none, 5), Err(ColorError::MissingEndpoint));
        assert_eq!(gradient_to("#FF0000", Some("#00F"), 3).unwrap().len(), 3);
    }

    #[test]
    fn bad_endpoint() {
        assert!(matches!(
            gradient("#FF0000", "#XYZ", 5),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }

    // ── Segment allocation ───────────────────────────────────────────────

    #[test]
    fn segments_sum_to_steps_minus_one() {
        for stops in 2..8 {
            for steps in 1..40 {
                let total: usize = segment_steps(stops, steps).iter().sum();
                assert_eq!(total, steps - 1, "stops={stops} steps={steps}");
            }
        }
    }

    #[test]
    fn segment_ties_round_to_even() {
        // Boundaries 0, 1.5 → 2, 3.
        assert_eq!(segment_steps(3, 4), vec![2, 1]);
        // Boundaries 0, 0.5 → 0, 1.
        assert_eq!(segment_steps(3, 2), vec![0, 1]);
    }

    #[test]
    fn degenerate_allocations() {
        assert!(segment_steps(1, 10).is_empty());
        assert!(segment_steps(3, 0).is_empty());
    }

    // ── Multi-stop ───────────────────────────────────────────────────────

    #[test]
    fn three_stops_in_five() {
        let g = gradient_stops(["#000091", "#FFF", "#E1000F"], 5).unwrap();
        assert_eq!(g.len(), 5);
        assert_eq!(g[0].hex(), "#000091");
        assert_eq!(g[2].hex(), "#FFFFFF");
        assert_eq!(g[4].hex(), "#E1000F");
    }

    #[test]
    fn every_stop_lands_on_its_boundary() {
        let stops: Vec<Color> = ["#000091", "#FFFFFF", "#E1000F", "#11AA22", "#C86432"]
            .iter()
            .map(|s| Color::parse(s).unwrap())
            .collect();
        for n in 2..=stops.len() {
            for steps in n..30 {
                let g = gradient_stops(&stops[..n], steps).unwrap();
                assert_eq!(g.len(), steps, "n={n} steps={steps}");
                for (i, stop) in stops[..n].iter().enumerate() {
                    assert_eq!(g[boundary(i, n, steps)], *stop, "n={n} steps={steps} stop={i}");
                }
            }
        }
    }

    #[test]
    fn no_duplicate_at_shared_stops() {
        let g = gradient_stops(["#000000", "#FFFFFF", "#000000"], 5).unwrap();
        assert_eq!(hexes(&g), ["#000000", "#808080", "#FFFFFF", "#808080", "#000000"]);
    }

    #[test]
    fn fewer_steps_than_stops_still_has_steps_colors() {
        let g = gradient_stops(["#000", "#FFF", "#F00"], 2).unwrap();
        assert_eq!(hexes(&g), ["#000000", "#FF0000"]);
        let g = gradient_stops(["#000", "#FFF", "#F00"], 1).unwrap();
        assert_eq!(hexes(&g), ["#000000"]);
        assert!(gradient_stops(["#000", "#FFF", "#F00"], 0).unwrap().is_empty());
    }

    #[test]
    fn two_stops_match_plain_gradient() {
        let a = gradient_stops(["#FF0000", "#0000FF"], 7).unwrap();
        let b = gradient("#FF0000", "#0000FF", 7).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn too_few_stops() {
        assert_eq!(gradient_stops(["#FF0000"], 5), Err(ColorError::InsufficientStops(1)));
        assert_eq!(
            gradient_stops(Vec::<&str>::new(), 5),
            Err(ColorError::InsufficientStops(0))
        );
        assert_eq!(
            gradient_stops_from("#FF0000", Vec::<Color>::new(), 5),
            Err(ColorError::InsufficientStops(1))
        );
    }

    #[test]
    fn receiver_form_prepends_start() {
        let a = gradient_stops_from("#000091", ["#FFF", "#E1000F"], 9).unwrap();
        let b = gradient_stops(["#000091", "#FFF", "#E1000F"], 9).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn bad_stop_fails_whole_gradient() {
        assert!(matches!(
            gradient_stops(["#000", "oops", "#FFF"], 5),
            Err(ColorError::InvalidColorFormat(_))
        ));
    }
}
