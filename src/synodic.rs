//! # Synodic and sidereal periods
//!
//! Two bodies orbiting a common centre with sidereal periods `P` and `Q` line up again
//! (conjunction) every synodic period `S`:
//!
//! ```text
//! 1/S = |1/P − 1/Q|
//! ```
//!
//! [`solve`] derives the missing member of the triple from any two known members.
//!
//! ## Branches
//!
//! Recovering a sidereal period from the other sidereal period and `S` has two roots,
//! depending on whether the missing body is the faster (inner) or slower (outer) one:
//!
//! ```text
//! Inner:  1/X = 1/K + 1/S
//! Outer:  1/X = 1/K − 1/S     (requires S > K)
//! ```
//!
//! [`SynodicBranch`] selects the root; [`SynodicBranch::Inner`] is the default.
//!
//! ## No conjunction
//!
//! Equal sidereal periods never produce a conjunction: the synodic period is infinite. This is
//! returned as [`SynodicOutcome::NoConjunction`], not as an error or an infinite float.
use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{astro_errors::AstroError, constants::Year, rounding::check_representable};

/// Two known members of the `(P, Q, S)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SynodicKnowns {
    /// Both sidereal periods; solve for `S`.
    PQ { p: Year, q: Year },
    /// Sidereal period of body 1 and synodic period; solve for `Q`.
    PS { p: Year, s: Year },
    /// Sidereal period of body 2 and synodic period; solve for `P`.
    QS { q: Year, s: Year },
}

/// Which root to return when solving for a sidereal period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SynodicBranch {
    /// The missing body orbits faster than the known one.
    #[default]
    Inner,
    /// The missing body orbits slower than the known one.
    Outer,
}

/// Result of a synodic computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SynodicOutcome {
    /// The missing period, in the same unit as the inputs.
    Period(Year),
    /// The two sidereal periods are equal: the bodies never reach conjunction.
    NoConjunction,
}

impl SynodicOutcome {
    pub fn period(&self) -> Option<Year> {
        match self {
            SynodicOutcome::Period(p) => Some(*p),
            SynodicOutcome::NoConjunction => None,
        }
    }

    pub fn is_no_conjunction(&self) -> bool {
        matches!(self, SynodicOutcome::NoConjunction)
    }
}

impl fmt::Display for SynodicOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynodicOutcome::Period(p) => write!(f, "{p}"),
            SynodicOutcome::NoConjunction => write!(f, "no conjunction"),
        }
    }
}

/// A complete `(P, Q, S)` triple.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SynodicTriple {
    pub p: Year,
    pub q: Year,
    pub s: Year,
}

impl SynodicTriple {
    /// Assemble the triple from the knowns and the solved period.
    ///
    /// Returns `None` for [`SynodicOutcome::NoConjunction`], which has no finite `S`.
    pub fn from_outcome(knowns: SynodicKnowns, outcome: SynodicOutcome) -> Option<Self> {
        let missing = outcome.period()?;
        let triple = match knowns {
            SynodicKnowns::PQ { p, q } => SynodicTriple { p, q, s: missing },
            SynodicKnowns::PS { p, s } => SynodicTriple { p, q: missing, s },
            SynodicKnowns::QS { q, s } => SynodicTriple { p: missing, q, s },
        };
        Some(triple)
    }

    /// `1/S − |1/P − 1/Q|`; zero up to rounding for a solved triple.
    pub fn residual(&self) -> f64 {
        self.s.recip() - (self.p.recip() - self.q.recip()).abs()
    }
}

fn check_period(name: &'static str, value: f64) -> Result<f64, AstroError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AstroError::InvalidPeriod { name, value })
    }
}

/// `S` from two sidereal periods.
fn synodic_from_sidereal(p: Year, q: Year) -> Result<SynodicOutcome, AstroError> {
    if p == q {
        debug!(p, q, "equal sidereal periods, no conjunction");
        return Ok(SynodicOutcome::NoConjunction);
    }
    let rate = (p.recip() - q.recip()).abs();
    let s = check_representable("S", rate.recip())?;
    Ok(SynodicOutcome::Period(s))
}

/// A sidereal period from the other sidereal period and `S`.
fn sidereal_from_synodic(
    known: Year,
    s: Year,
    branch: SynodicBranch,
) -> Result<SynodicOutcome, AstroError> {
    let rate = match branch {
        SynodicBranch::Inner => known.recip() + s.recip(),
        SynodicBranch::Outer => known.recip() - s.recip(),
    };
    if rate <= 0.0 {
        return Err(AstroError::NoSiderealSolution { known, synodic: s });
    }
    let missing = check_representable("sidereal period", rate.recip())?;
    Ok(SynodicOutcome::Period(missing))
}

/// Derive the missing member of a `(P, Q, S)` triple.
///
/// Arguments
/// -----------------
/// * `knowns`: The two known periods.
/// * `branch`: Root selection when solving for a sidereal period; ignored for [`SynodicKnowns::PQ`].
///
/// Return
/// ----------
/// * [`SynodicOutcome::Period`] with the missing period, or
///   [`SynodicOutcome::NoConjunction`] when `P == Q`.
///
/// Errors
/// ----------
/// * [`AstroError::InvalidPeriod`] if a known period is not positive and finite.
/// * [`AstroError::NoSiderealSolution`] on the outer branch when `S ≤ K`.
/// * [`AstroError::OutOfRange`] if the missing period overflows or underflows `f64`.
pub fn solve(knowns: SynodicKnowns, branch: SynodicBranch) -> Result<SynodicOutcome, AstroError> {
    match knowns {
        SynodicKnowns::PQ { p, q } => {
            synodic_from_sidereal(check_period("P", p)?, check_period("Q", q)?)
        }
        SynodicKnowns::PS { p, s } => {
            sidereal_from_synodic(check_period("P", p)?, check_period("S", s)?, branch)
        }
        SynodicKnowns::QS { q, s } => {
            sidereal_from_synodic(check_period("Q", q)?, check_period("S", s)?, branch)
        }
    }
}

/// Sidereal period of body 1 from `Q` and `S`.
pub fn solve_for_p(q: Year, s: Year, branch: SynodicBranch) -> Result<SynodicOutcome, AstroError> {
    solve(SynodicKnowns::QS { q, s }, branch)
}

/// Sidereal period of body 2 from `P` and `S`.
pub fn solve_for_q(p: Year, s: Year, branch: SynodicBranch) -> Result<SynodicOutcome, AstroError> {
    solve(SynodicKnowns::PS { p, s }, branch)
}

/// Synodic period from `P` and `Q`.
pub fn solve_for_s(p: Year, q: Year) -> Result<SynodicOutcome, AstroError> {
    solve(SynodicKnowns::PQ { p, q }, SynodicBranch::default())
}

#[cfg(test)]
mod synodic_test {
    use approx::assert_relative_eq;

    use super::*;

    const EARTH: Year = 1.0;
    const MARS: Year = 1.880_8;

    #[test]
    fn test_earth_mars_synodic() {
        let s = solve_for_s(EARTH, MARS).unwrap().period().unwrap();
        assert_relative_eq!(s, 2.135_331_516_802_906_6, epsilon = 1e-9);
        // order of the two bodies does not matter
        assert_eq!(solve_for_s(MARS, EARTH).unwrap(), solve_for_s(EARTH, MARS).unwrap());
    }

    #[test]
    fn test_equal_periods_have_no_conjunction() {
        assert_eq!(solve_for_s(1.5, 1.5).unwrap(), SynodicOutcome::NoConjunction);
        assert!(solve_for_s(1.5, 1.5).unwrap().is_no_conjunction());
    }

    #[test]
    fn test_branches_recover_either_body() {
        let s = solve_for_s(EARTH, MARS).unwrap().period().unwrap();

        let inner = solve_for_p(MARS, s, SynodicBranch::Inner).unwrap();
        assert_relative_eq!(inner.period().unwrap(), EARTH, max_relative = 1e-12);

        let outer = solve_for_q(EARTH, s, SynodicBranch::Outer).unwrap();
        assert_relative_eq!(outer.period().unwrap(), MARS, max_relative = 1e-12);
    }

    #[test]
    fn test_outer_branch_without_solution() {
        assert_eq!(
            solve_for_q(2.0, 1.0, SynodicBranch::Outer),
            Err(AstroError::NoSiderealSolution {
                known: 2.0,
                synodic: 1.0
            })
        );
        assert!(solve_for_q(2.0, 2.0, SynodicBranch::Outer).is_err());
    }

    #[test]
    fn test_invalid_periods() {
        assert_eq!(
            solve_for_s(0.0, 1.0),
            Err(AstroError::InvalidPeriod {
                name: "P",
                value: 0.0
            })
        );
        assert!(solve_for_p(1.0, -3.0, SynodicBranch::Inner).is_err());
        assert!(solve_for_q(f64::NAN, 3.0, SynodicBranch::Inner).is_err());
    }

    #[test]
    fn test_extreme_periods_are_out_of_range() {
        // 1/P overflows, so S would collapse to zero
        assert_eq!(
            solve_for_s(1e-320, 1.0),
            Err(AstroError::OutOfRange {
                quantity: "S",
                value: 0.0
            })
        );
        assert!(matches!(
            solve_for_p(1e-320, 1e-320, SynodicBranch::Inner),
            Err(AstroError::OutOfRange { .. })
        ));
        // very long periods stay representable
        assert!(matches!(
            solve_for_s(1e300, 1.1e300),
            Ok(SynodicOutcome::Period(_))
        ));
    }

    #[test]
    fn test_triple_residual() {
        let knowns = SynodicKnowns::PQ { p: EARTH, q: MARS };
        let outcome = solve(knowns, SynodicBranch::Inner).unwrap();
        let triple = SynodicTriple::from_outcome(knowns, outcome).unwrap();
        assert_relative_eq!(triple.residual(), 0.0, epsilon = 1e-12);

        let equal = SynodicKnowns::PQ { p: 2.0, q: 2.0 };
        let outcome = solve(equal, SynodicBranch::Inner).unwrap();
        assert!(SynodicTriple::from_outcome(equal, outcome).is_none());
    }
}
