//! # Query and result types for the engine
//!
//! [`Quantities`] is a bag of optional inputs. The engine inspects which of them are present
//! and picks the solver they belong to:
//!
//! | Group        | Fields                                               | Solver              |
//! |--------------|------------------------------------------------------|---------------------|
//! | spectral     | `spectral_label` **or** `temperature_k`              | spectral interpolator |
//! | stellar      | `stellar` (mode, value)                              | stellar scaling     |
//! | orbit        | two of `mass`, `period`, `axis`                      | Kepler              |
//! | synodic      | two of `sidereal_p`, `sidereal_q`, `synodic_s`       | synodic periods     |
//! | habitability | `orbital_distance` (+ `nucleal_radius` or `luminosity`) | habitability index |
//!
//! Exactly one group may be present per query. [`Resolution`] carries the answer of whichever
//! solver ran.
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{
    constants::{AstronomicalUnit, Kelvin, SolarMass, Year},
    habitability::Habitability,
    kepler::OrbitalSystem,
    spectral::interpolator::SpectralLabel,
    stellar_scaling::{StellarMode, StellarProfile},
    synodic::{SynodicKnowns, SynodicOutcome},
};

/// Inputs supplied by the caller; absent quantities are `None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Quantities {
    pub spectral_label: Option<String>,
    pub temperature_k: Option<Kelvin>,
    pub stellar: Option<(StellarMode, f64)>,
    pub mass: Option<SolarMass>,
    pub period: Option<Year>,
    pub axis: Option<AstronomicalUnit>,
    pub sidereal_p: Option<Year>,
    pub sidereal_q: Option<Year>,
    pub synodic_s: Option<Year>,
    pub orbital_distance: Option<AstronomicalUnit>,
    pub nucleal_radius: Option<AstronomicalUnit>,
    pub luminosity: Option<f64>,
}

impl Quantities {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spectral_label(mut self, label: impl Into<String>) -> Self {
        self.spectral_label = Some(label.into());
        self
    }
    pub fn temperature_k(mut self, v: Kelvin) -> Self {
        self.temperature_k = Some(v);
        self
    }
    pub fn stellar(mut self, mode: StellarMode, v: f64) -> Self {
        self.stellar = Some((mode, v));
        self
    }
    pub fn mass(mut self, v: SolarMass) -> Self {
        self.mass = Some(v);
        self
    }
    pub fn period(mut self, v: Year) -> Self {
        self.period = Some(v);
        self
    }
    pub fn axis(mut self, v: AstronomicalUnit) -> Self {
        self.axis = Some(v);
        self
    }
    pub fn sidereal_p(mut self, v: Year) -> Self {
        self.sidereal_p = Some(v);
        self
    }
    pub fn sidereal_q(mut self, v: Year) -> Self {
        self.sidereal_q = Some(v);
        self
    }
    pub fn synodic_s(mut self, v: Year) -> Self {
        self.synodic_s = Some(v);
        self
    }
    pub fn orbital_distance(mut self, v: AstronomicalUnit) -> Self {
        self.orbital_distance = Some(v);
        self
    }
    pub fn nucleal_radius(mut self, v: AstronomicalUnit) -> Self {
        self.nucleal_radius = Some(v);
        self
    }
    pub fn luminosity(mut self, v: f64) -> Self {
        self.luminosity = Some(v);
        self
    }

    /// Solver groups touched by this query, in [`QueryGroup::ALL`] order.
    pub fn active_groups(&self) -> Vec<QueryGroup> {
        QueryGroup::ALL
            .into_iter()
            .filter(|group| self.touches(*group))
            .collect()
    }

    fn touches(&self, group: QueryGroup) -> bool {
        match group {
            QueryGroup::Spectral => self.spectral_label.is_some() || self.temperature_k.is_some(),
            QueryGroup::Stellar => self.stellar.is_some(),
            QueryGroup::Orbit => self.mass.is_some() || self.period.is_some() || self.axis.is_some(),
            QueryGroup::Synodic => {
                self.sidereal_p.is_some() || self.sidereal_q.is_some() || self.synodic_s.is_some()
            }
            QueryGroup::Habitability => {
                self.orbital_distance.is_some()
                    || self.nucleal_radius.is_some()
                    || self.luminosity.is_some()
            }
        }
    }
}

/// The solver a set of [`Quantities`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum QueryGroup {
    Spectral,
    Stellar,
    Orbit,
    Synodic,
    Habitability,
}

impl QueryGroup {
    pub const ALL: [QueryGroup; 5] = [
        QueryGroup::Spectral,
        QueryGroup::Stellar,
        QueryGroup::Orbit,
        QueryGroup::Synodic,
        QueryGroup::Habitability,
    ];
}

impl fmt::Display for QueryGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QueryGroup::Spectral => "spectral",
            QueryGroup::Stellar => "stellar",
            QueryGroup::Orbit => "orbit",
            QueryGroup::Synodic => "synodic",
            QueryGroup::Habitability => "habitability",
        };
        f.write_str(name)
    }
}

/// Answer of the solver selected by the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Resolution {
    /// Temperature of a spectral label.
    Temperature { label: String, kelvin: Kelvin },
    /// Spectral label of a temperature.
    Subclass { kelvin: Kelvin, label: SpectralLabel },
    Stellar(StellarProfile),
    Orbit(OrbitalSystem),
    Synodic {
        knowns: SynodicKnowns,
        outcome: SynodicOutcome,
    },
    Habitability {
        orbital_distance: AstronomicalUnit,
        nucleal_radius: AstronomicalUnit,
        outcome: Habitability,
    },
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolution::Temperature { label, kelvin } => write!(f, "{label} → {kelvin} K"),
            Resolution::Subclass { kelvin, label } => write!(f, "{kelvin} K → {label}"),
            Resolution::Stellar(profile) => write!(f, "{profile}"),
            Resolution::Orbit(system) => write!(
                f,
                "axis = {} AU, period = {} yr, mass = {} M☉",
                system.axis, system.period, system.total_mass
            ),
            Resolution::Synodic { knowns, outcome } => {
                let missing = match knowns {
                    SynodicKnowns::PQ { .. } => "S",
                    SynodicKnowns::PS { .. } => "Q",
                    SynodicKnowns::QS { .. } => "P",
                };
                write!(f, "{missing} = {outcome}")
            }
            Resolution::Habitability {
                orbital_distance,
                nucleal_radius,
                outcome,
            } => write!(
                f,
                "habitability at {orbital_distance} AU (zone centre {nucleal_radius} AU) = {outcome}"
            ),
        }
    }
}
