//! # AstrophysicalParameterEngine: one entry point for every solver
//!
//! This module defines [`AstrophysicalParameterEngine`], the façade that wires together:
//!
//! 1. **Spectral interpolation** ([`SpectralInterpolator`]): label ↔ effective temperature.
//! 2. **Stellar scaling** ([`stellar_scaling::resolve`]): one solar-relative attribute → all six.
//! 3. **Two-body orbits** ([`kepler::solve`]): any two of mass/period/axis → the third.
//! 4. **Synodic periods** ([`synodic::solve`]): any two of `P`, `Q`, `S` → the third.
//! 5. **Habitability** ([`habitability::index`]): orbital distance → habitability index.
//!
//! The engine owns no state beyond its [`EngineParams`]; every call is a pure computation
//! and the engine can be shared between threads freely.
//!
//! ## Typical usage
//!
//! ```rust
//! use astrocalc::engine::{AstrophysicalParameterEngine, Quantities, Resolution};
//!
//! let engine = AstrophysicalParameterEngine::default();
//!
//! // direct call
//! let kelvin = engine.temperature_of("G7.3").unwrap();
//! assert_eq!(kelvin.round(), 5529.0);
//!
//! // dispatch on whatever the caller knows
//! let query = Quantities::new().mass(1.0).axis(1.0);
//! match engine.resolve(&query).unwrap() {
//!     Resolution::Orbit(system) => assert_eq!(system.period, 1.0),
//!     other => panic!("unexpected {other}"),
//! }
//! ```
//!
//! ## See also
//! ------------
//! * [`EngineParams`] – Precision, synodic branch and default habitable zone centre.
//! * [`Quantities`] – Optional inputs and the dispatch table.
pub mod params;
pub mod quantities;

use itertools::Itertools;
use tracing::{debug, trace};

pub use self::params::{EngineParams, EngineParamsBuilder};
pub use self::quantities::{Quantities, QueryGroup, Resolution};

use crate::{
    astro_errors::AstroError,
    constants::{AstronomicalUnit, Kelvin, SolarMass},
    habitability::{self, nucleal_radius_for_luminosity, Habitability},
    kepler::{self, OrbitalKnowns, OrbitalSystem},
    spectral::{
        display::SpectralTableView,
        interpolator::{SpectralInterpolator, SpectralLabel},
        SpectralClass,
    },
    stellar_scaling::{self, StellarMode, StellarProfile},
    synodic::{self, SynodicKnowns, SynodicOutcome},
};

#[derive(Debug, Clone, Default)]
pub struct AstrophysicalParameterEngine {
    params: EngineParams,
}

impl AstrophysicalParameterEngine {
    /// Create an engine with validated parameters.
    ///
    /// Errors
    /// ----------
    /// * [`AstroError::InvalidEngineParameter`] if `params` violates the builder rules
    ///   (parameters obtained from deserialization skip the builder).
    pub fn new(params: EngineParams) -> Result<Self, AstroError> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    fn interpolator(&self) -> SpectralInterpolator<'static> {
        SpectralInterpolator::default()
    }

    pub fn temperature_of(&self, label: &str) -> Result<Kelvin, AstroError> {
        self.interpolator().temperature_of(label)
    }

    pub fn subclass_of(&self, temperature: Kelvin) -> Result<SpectralLabel, AstroError> {
        self.interpolator().subclass_of(temperature)
    }

    /// Rows of the spectral table, optionally for a single class.
    pub fn spectral_table(&self, class_filter: Option<SpectralClass>) -> SpectralTableView<'static> {
        self.interpolator().display(class_filter)
    }

    /// Stellar profile rounded to `params.stellar_digits`.
    pub fn stellar(&self, mode: StellarMode, value: f64) -> Result<StellarProfile, AstroError> {
        stellar_scaling::resolve(mode, value, self.params.stellar_digits)
    }

    pub fn stellar_from_label(&self, label: &str) -> Result<StellarProfile, AstroError> {
        StellarProfile::from_spectral_label(label, self.params.stellar_digits)
    }

    pub fn orbit(&self, knowns: OrbitalKnowns) -> Result<OrbitalSystem, AstroError> {
        kepler::solve(knowns)
    }

    pub fn configuration_index(
        &self,
        mass1: SolarMass,
        mass2: SolarMass,
        axis1: AstronomicalUnit,
        axis2: AstronomicalUnit,
    ) -> Result<f64, AstroError> {
        kepler::configuration_index(mass1, mass2, axis1, axis2)
    }

    /// Missing member of a `(P, Q, S)` triple, using `params.synodic_branch`.
    pub fn synodic(&self, knowns: SynodicKnowns) -> Result<SynodicOutcome, AstroError> {
        synodic::solve(knowns, self.params.synodic_branch)
    }

    /// Habitability index; `nucleal_radius` defaults to `params.nucleal_radius_au`.
    pub fn habitability(
        &self,
        orbital_distance: AstronomicalUnit,
        nucleal_radius: Option<AstronomicalUnit>,
    ) -> Result<Habitability, AstroError> {
        let radius = nucleal_radius.unwrap_or(self.params.nucleal_radius_au);
        habitability::index(orbital_distance, radius, self.params.habitability_digits)
    }

    /// Habitability index around a star of luminosity `luminosity` (L☉).
    pub fn habitability_for_luminosity(
        &self,
        orbital_distance: AstronomicalUnit,
        luminosity: f64,
    ) -> Result<Habitability, AstroError> {
        let radius = nucleal_radius_for_luminosity(luminosity)?;
        self.habitability(orbital_distance, Some(radius))
    }

    /// Pick a solver from the quantities present in `query` and run it.
    ///
    /// Dispatch rules
    /// -----------------
    /// * `spectral_label` → [`Resolution::Temperature`]; `temperature_k` alone → [`Resolution::Subclass`].
    /// * `stellar` → [`Resolution::Stellar`].
    /// * exactly two of `mass`, `period`, `axis` → [`Resolution::Orbit`].
    /// * exactly two of `sidereal_p`, `sidereal_q`, `synodic_s` → [`Resolution::Synodic`].
    /// * `orbital_distance`, with at most one of `nucleal_radius` / `luminosity` → [`Resolution::Habitability`].
    ///
    /// Errors
    /// ----------
    /// * [`AstroError::UnderdeterminedQuery`] if no group is present, or a group lacks a
    ///   required quantity.
    /// * [`AstroError::AmbiguousQuery`] if several groups are present, or a group is
    ///   over-specified.
    /// * Any error of the selected solver.
    pub fn resolve(&self, query: &Quantities) -> Result<Resolution, AstroError> {
        let groups = query.active_groups();
        trace!(?groups, "dispatching query");
        match groups.as_slice() {
            [] => Err(AstroError::UnderdeterminedQuery),
            [group] => match group {
                QueryGroup::Spectral => self.resolve_spectral(query),
                QueryGroup::Stellar => self.resolve_stellar(query),
                QueryGroup::Orbit => self.resolve_orbit(query),
                QueryGroup::Synodic => self.resolve_synodic(query),
                QueryGroup::Habitability => self.resolve_habitability(query),
            },
            _ => Err(AstroError::AmbiguousQuery(
                groups.iter().map(QueryGroup::to_string).join(", "),
            )),
        }
    }

    fn resolve_spectral(&self, query: &Quantities) -> Result<Resolution, AstroError> {
        match (&query.spectral_label, query.temperature_k) {
            (Some(label), None) => Ok(Resolution::Temperature {
                label: label.trim().to_string(),
                kelvin: self.temperature_of(label)?,
            }),
            (None, Some(kelvin)) => Ok(Resolution::Subclass {
                kelvin,
                label: self.subclass_of(kelvin)?,
            }),
            _ => Err(AstroError::AmbiguousQuery(
                "spectral_label, temperature_k".into(),
            )),
        }
    }

    fn resolve_stellar(&self, query: &Quantities) -> Result<Resolution, AstroError> {
        let (mode, value) = query.stellar.ok_or(AstroError::UnderdeterminedQuery)?;
        self.stellar(mode, value).map(Resolution::Stellar)
    }

    fn resolve_orbit(&self, query: &Quantities) -> Result<Resolution, AstroError> {
        let knowns = match (query.mass, query.period, query.axis) {
            (Some(mass), Some(period), None) => OrbitalKnowns::MassPeriod { mass, period },
            (Some(mass), None, Some(axis)) => OrbitalKnowns::MassAxis { mass, axis },
            (None, Some(period), Some(axis)) => OrbitalKnowns::PeriodAxis { period, axis },
            (Some(_), Some(_), Some(_)) => {
                return Err(AstroError::AmbiguousQuery("mass, period, axis".into()))
            }
            _ => return Err(AstroError::UnderdeterminedQuery),
        };
        debug!(?knowns, "orbit query");
        self.orbit(knowns).map(Resolution::Orbit)
    }

    fn resolve_synodic(&self, query: &Quantities) -> Result<Resolution, AstroError> {
        let knowns = match (query.sidereal_p, query.sidereal_q, query.synodic_s) {
            (Some(p), Some(q), None) => SynodicKnowns::PQ { p, q },
            (Some(p), None, Some(s)) => SynodicKnowns::PS { p, s },
            (None, Some(q), Some(s)) => SynodicKnowns::QS { q, s },
            (Some(_), Some(_), Some(_)) => {
                return Err(AstroError::AmbiguousQuery(
                    "sidereal_p, sidereal_q, synodic_s".into(),
                ))
            }
            _ => return Err(AstroError::UnderdeterminedQuery),
        };
        debug!(?knowns, branch = ?self.params.synodic_branch, "synodic query");
        let outcome = self.synodic(knowns)?;
        Ok(Resolution::Synodic { knowns, outcome })
    }

    fn resolve_habitability(&self, query: &Quantities) -> Result<Resolution, AstroError> {
        let orbital_distance = query
            .orbital_distance
            .ok_or(AstroError::UnderdeterminedQuery)?;
        let nucleal_radius = match (query.nucleal_radius, query.luminosity) {
            (Some(radius), None) => radius,
            (None, Some(luminosity)) => nucleal_radius_for_luminosity(luminosity)?,
            (None, None) => self.params.nucleal_radius_au,
            (Some(_), Some(_)) => {
                return Err(AstroError::AmbiguousQuery(
                    "nucleal_radius, luminosity".into(),
                ))
            }
        };
        let outcome = self.habitability(orbital_distance, Some(nucleal_radius))?;
        Ok(Resolution::Habitability {
            orbital_distance,
            nucleal_radius,
            outcome,
        })
    }
}
