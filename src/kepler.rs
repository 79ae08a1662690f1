//! # Two-body Keplerian relation in solar units
//!
//! Kepler's third law with the semi-major axis in **AU**, the period in **years** and the
//! total mass in **solar masses**:
//!
//! ```text
//! axis³ = mass · period²
//! ```
//!
//! [`solve`] takes any two of the three quantities, described by [`OrbitalKnowns`], and
//! derives the third from this single relation. [`solve_axis`], [`solve_period`] and
//! [`solve_mass`] are thin wrappers around it.
//!
//! [`configuration_index`] scores how symmetric a pair of orbiting bodies is.
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    constants::{AstronomicalUnit, SolarMass, Year},
    rounding::check_representable,
};

/// The two quantities known about a two-body system.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrbitalKnowns {
    MassPeriod { mass: SolarMass, period: Year },
    MassAxis { mass: SolarMass, axis: AstronomicalUnit },
    PeriodAxis { period: Year, axis: AstronomicalUnit },
}

/// A fully resolved two-body system.
///
/// Units:
/// * `axis`: AU
/// * `period`: years
/// * `total_mass`: solar masses
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitalSystem {
    pub axis: AstronomicalUnit,
    pub period: Year,
    pub total_mass: SolarMass,
}

impl OrbitalSystem {
    /// `axis³ − mass·period²`; zero up to rounding for a solved system.
    pub fn invariant_residual(&self) -> f64 {
        self.axis.powi(3) - self.total_mass * self.period.powi(2)
    }
}

fn check_positive(name: &'static str, value: f64) -> Result<f64, AstroError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AstroError::InvalidOrbitalParameter { name, value })
    }
}

/// Derive the missing quantity of a two-body system.
///
/// Arguments
/// -----------------
/// * `knowns`: Two of `mass`, `period`, `axis`.
///
/// Return
/// ----------
/// * The complete [`OrbitalSystem`].
///
/// Errors
/// ----------
/// * [`AstroError::InvalidOrbitalParameter`] if a known quantity is not positive and finite.
/// * [`AstroError::OutOfRange`] if the derived quantity overflows or underflows `f64`.
pub fn solve(knowns: OrbitalKnowns) -> Result<OrbitalSystem, AstroError> {
    let system = match knowns {
        OrbitalKnowns::MassPeriod { mass, period } => {
            let mass = check_positive("mass", mass)?;
            let period = check_positive("period", period)?;
            OrbitalSystem {
                axis: check_representable("axis", (mass * period.powi(2)).cbrt())?,
                period,
                total_mass: mass,
            }
        }
        OrbitalKnowns::MassAxis { mass, axis } => {
            let mass = check_positive("mass", mass)?;
            let axis = check_positive("axis", axis)?;
            OrbitalSystem {
                axis,
                period: check_representable("period", (axis.powi(3) / mass).sqrt())?,
                total_mass: mass,
            }
        }
        OrbitalKnowns::PeriodAxis { period, axis } => {
            let period = check_positive("period", period)?;
            let axis = check_positive("axis", axis)?;
            OrbitalSystem {
                axis,
                period,
                total_mass: check_representable("total_mass", axis.powi(3) / period.powi(2))?,
            }
        }
    };
    debug!(?knowns, ?system, "solved two-body system");
    Ok(system)
}

/// Semi-major axis (AU) from total mass (M☉) and period (years).
pub fn solve_axis(mass: SolarMass, period: Year) -> Result<AstronomicalUnit, AstroError> {
    solve(OrbitalKnowns::MassPeriod { mass, period }).map(|s| s.axis)
}

/// Period (years) from total mass (M☉) and semi-major axis (AU).
pub fn solve_period(mass: SolarMass, axis: AstronomicalUnit) -> Result<Year, AstroError> {
    solve(OrbitalKnowns::MassAxis { mass, axis }).map(|s| s.period)
}

/// Total mass (M☉) from period (years) and semi-major axis (AU).
pub fn solve_mass(period: Year, axis: AstronomicalUnit) -> Result<SolarMass, AstroError> {
    solve(OrbitalKnowns::PeriodAxis { period, axis }).map(|s| s.total_mass)
}

/// Symmetry index of a two-body configuration.
///
/// Compares the mass ratio `m1/m2` with the axis ratio `a1/a2`:
///
/// ```text
/// index = max(q_m / q_a, q_a / q_m)      q_m = m1/m2,  q_a = a1/a2
/// ```
///
/// The index is exactly `1.0` when both ratios agree, grows without bound as they diverge,
/// and is unchanged when the two bodies are swapped or when the mismatch is inverted
/// (it depends only on `|ln(q_m / q_a)|`).
///
/// Errors
/// ----------
/// * [`AstroError::InvalidOrbitalParameter`] if any input is not positive and finite.
pub fn configuration_index(
    mass1: SolarMass,
    mass2: SolarMass,
    axis1: AstronomicalUnit,
    axis2: AstronomicalUnit,
) -> Result<f64, AstroError> {
    let mass_ratio = check_positive("mass1", mass1)? / check_positive("mass2", mass2)?;
    let axis_ratio = check_positive("axis1", axis1)? / check_positive("axis2", axis2)?;
    let mismatch = (mass_ratio / axis_ratio).ln().abs();
    Ok(mismatch.exp())
}
