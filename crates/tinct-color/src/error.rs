// SPDX-License-Identifier: MIT

//! Errors raised while building colors or generating palettes.

use thiserror::Error;

/// Everything that can go wrong in tinct.
///
/// All failures surface at the call that caused them; nothing is retried and
/// no partial palette is ever returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorError {
    /// The input could not be read as a color: a hex string of the wrong
    /// length or with a non-hex digit, or a numeric sequence of the wrong
    /// arity or with an unusable component.
    #[error("invalid color format: {0}")]
    InvalidColorFormat(String),

    /// A two-color gradient was requested without an end color.
    #[error("gradient needs an end color")]
    MissingEndpoint,

    /// A multi-stop gradient was requested with fewer than two stops.
    #[error("gradient needs at least two color stops, got {0}")]
    InsufficientStops(usize),
}

/// Shorthand for results carrying a [`ColorError`].
pub type Result<T, E = ColorError> = std::result::Result<T, E>;
