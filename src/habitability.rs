//! # Habitability index
//!
//! Scores an orbital distance against the centre of a star's habitable zone (the **nucleal
//! zone radius**). With `ratio = distance / nucleal_radius`:
//!
//! - `ratio = 1` scores `1.0` (zone centre);
//! - `ratio < 1` scores below `1.0` (hotter, inside the band);
//! - `ratio > 1` scores above `1.0` (cooler, outside the band);
//! - `ratio ≤ 0.25` or `distance ≤ 0` is [`Habitability::Uninhabitable`].
//!
//! The curve is piecewise:
//!
//! ```text
//! inner  (0.25 < r < 1):  ((r − 0.25) / 0.75)^β      β = ln 0.5 / ln(2/3)
//! outer  (r ≥ 1):         r^γ                        γ = ln 1.628 / ln 2.5
//! ```
//!
//! Both branches are monotonic, meet at `(1, 1)` and pass through the reference points
//! `index(0.75) = 0.500` and `index(2.5) = 1.628`.
//!
//! Just above the floor the inner branch is still habitable but tiny: at 3 digits every ratio
//! in `(0.25, ≈0.2588)` rounds to `Index(0.0)`. That value is a rounded index, not the
//! [`Habitability::Uninhabitable`] sentinel, which is reserved for `ratio ≤ 0.25`.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    constants::{AstronomicalUnit, HABITABLE_FLOOR_RATIO, INNER_ANCHOR, OUTER_ANCHOR},
    rounding::{check_digits, check_representable, round_to},
};

/// Result of a habitability query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Habitability {
    Index(f64),
    Uninhabitable,
}

impl Habitability {
    pub fn index(&self) -> Option<f64> {
        match self {
            Habitability::Index(i) => Some(*i),
            Habitability::Uninhabitable => None,
        }
    }

    pub fn is_habitable(&self) -> bool {
        matches!(self, Habitability::Index(_))
    }
}

impl fmt::Display for Habitability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Habitability::Index(i) => write!(f, "{i}"),
            Habitability::Uninhabitable => write!(f, "uninhabitable"),
        }
    }
}

/// Exponent of the inner branch, fixed by the inner reference point.
fn inner_exponent() -> f64 {
    let (ratio, value) = INNER_ANCHOR;
    let scaled = (ratio - HABITABLE_FLOOR_RATIO) / (1.0 - HABITABLE_FLOOR_RATIO);
    value.ln() / scaled.ln()
}

/// Exponent of the outer branch, fixed by the outer reference point.
fn outer_exponent() -> f64 {
    let (ratio, value) = OUTER_ANCHOR;
    value.ln() / ratio.ln()
}

/// Unrounded index for a distance ratio; `None` at or below the floor.
fn raw_index(ratio: f64) -> Option<f64> {
    if ratio <= HABITABLE_FLOOR_RATIO {
        return None;
    }
    let index = if ratio < 1.0 {
        let scaled = (ratio - HABITABLE_FLOOR_RATIO) / (1.0 - HABITABLE_FLOOR_RATIO);
        scaled.powf(inner_exponent())
    } else {
        ratio.powf(outer_exponent())
    };
    Some(index)
}

/// Habitability index of an orbit.
///
/// Arguments
/// -----------------
/// * `orbital_distance`: Orbital distance in AU.
/// * `nucleal_radius`: Habitable zone centre in AU (`1.0` for the Sun).
/// * `digits`: Decimal places of the returned index (`3` by convention).
///
/// Return
/// ----------
/// * [`Habitability::Index`] with the rounded index, or [`Habitability::Uninhabitable`] when the
///   distance is not positive or the ratio is at or below `0.25`.
///
/// Errors
/// ----------
/// * [`AstroError::InvalidNuclealRadius`] if `nucleal_radius` is not positive and finite.
/// * [`AstroError::InvalidPrecision`] if `digits` is too large.
/// * [`AstroError::OutOfRange`] if the ratio is so large that the index overflows.
///
/// ```rust
/// use astrocalc::habitability::{index, Habitability};
///
/// assert_eq!(index(2.5, 1.0, 3).unwrap(), Habitability::Index(1.628));
/// assert_eq!(index(0.25, 1.0, 3).unwrap(), Habitability::Uninhabitable);
/// ```
pub fn index(
    orbital_distance: AstronomicalUnit,
    nucleal_radius: AstronomicalUnit,
    digits: u32,
) -> Result<Habitability, AstroError> {
    if !nucleal_radius.is_finite() || nucleal_radius <= 0.0 {
        return Err(AstroError::InvalidNuclealRadius(nucleal_radius));
    }
    check_digits(digits)?;

    if orbital_distance.is_nan() || orbital_distance <= 0.0 {
        debug!(orbital_distance, "non-positive orbital distance");
        return Ok(Habitability::Uninhabitable);
    }

    let ratio = orbital_distance / nucleal_radius;
    match raw_index(ratio) {
        Some(raw) => {
            let raw = check_representable("habitability index", raw)?;
            Ok(Habitability::Index(round_to(raw, digits)?))
        }
        None => {
            debug!(ratio, floor = HABITABLE_FLOOR_RATIO, "ratio below habitable floor");
            Ok(Habitability::Uninhabitable)
        }
    }
}

/// Habitable zone centre (AU) for a star of luminosity `luminosity` (L☉).
///
/// Received flux scales as `L / d²`, so the distance receiving solar-constant flux is `√L`.
pub fn nucleal_radius_for_luminosity(luminosity: f64) -> Result<AstronomicalUnit, AstroError> {
    if !luminosity.is_finite() || luminosity <= 0.0 {
        return Err(AstroError::InvalidLuminosity(luminosity));
    }
    Ok(luminosity.sqrt())
}
