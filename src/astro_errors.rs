use thiserror::Error;

/// Errors raised by the astrocalc solvers.
///
/// Business outcomes such as an uninhabitable orbit or two bodies that never reach
/// conjunction are **not** errors: they are returned as variants of
/// [`Habitability`](crate::habitability::Habitability) and
/// [`SynodicOutcome`](crate::synodic::SynodicOutcome).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AstroError {
    #[error("Malformed spectral label: {0:?} (expected e.g. \"G7.3\")")]
    MalformedSpectralLabel(String),

    #[error("Invalid spectral class: {0:?} (expected one of O, B, A, F, G, K, M)")]
    InvalidSpectralClass(String),

    #[error("Invalid spectral subclass: {0} (expected a value in [0, 10))")]
    InvalidSubclass(f64),

    #[error("Invalid effective temperature: {0} K")]
    InvalidTemperature(f64),

    #[error("Unknown stellar scaling mode: {0:?} (expected one of K, T, M, R, L, V)")]
    UnknownMode(String),

    #[error("Stellar scaling mode {mode} requires a positive finite input, got {value}")]
    NonPositiveBase { mode: String, value: f64 },

    #[error("Invalid precision: {0} digits (maximum is 15)")]
    InvalidPrecision(u32),

    #[error("Invalid orbital parameter {name}: {value} (must be positive and finite)")]
    InvalidOrbitalParameter { name: &'static str, value: f64 },

    #[error("Invalid period {name}: {value} (must be positive and finite)")]
    InvalidPeriod { name: &'static str, value: f64 },

    #[error("No sidereal period matches known period {known} and synodic period {synodic} on the outer branch")]
    NoSiderealSolution { known: f64, synodic: f64 },

    #[error("Invalid nucleal zone radius: {0} AU (must be positive and finite)")]
    InvalidNuclealRadius(f64),

    #[error("Invalid luminosity: {0} L☉ (must be positive and finite)")]
    InvalidLuminosity(f64),

    #[error("Computed {quantity} = {value} is outside the representable range")]
    OutOfRange { quantity: &'static str, value: f64 },

    #[error("Invalid engine parameter: {0}")]
    InvalidEngineParameter(String),

    #[error("Not enough quantities supplied to select a solver")]
    UnderdeterminedQuery,

    #[error("Quantities supplied for several solvers at once: {0}")]
    AmbiguousQuery(String),
}
