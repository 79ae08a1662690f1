//! # Constants and type definitions for astrocalc
//!
//! This module centralizes the **solar calibration constants**, the **power-law exponents**
//! of the solar-relative scaling relations, and the **common unit aliases** used
//! throughout the crate.
//!
//! ## Overview
//!
//! - Solar reference temperature used to normalize effective temperatures
//! - Exponents linking normalized temperature to mass, radius, luminosity and lifetime
//! - Spectral table terminal span
//! - Habitability curve anchors
//! - Unit aliases (Kelvin, AU, years, solar masses)
//!
//! All quantities are expressed in **solar units** unless stated otherwise: the Sun maps to
//! `1.0` in every scaling relation.

// -------------------------------------------------------------------------------------------------
// Solar calibration
// -------------------------------------------------------------------------------------------------

/// Effective temperature of the Sun in Kelvin, used as the normalization reference
pub const SOLAR_TEMPERATURE_K: f64 = 5770.0;

/// Exponent of the mass relation `M = Tnorm^2`
pub const MASS_EXPONENT: f64 = 2.0;

/// Exponent of the radius relation `R = Tnorm^1.8`
pub const RADIUS_EXPONENT: f64 = 1.8;

/// Exponent of the luminosity relation `L = Tnorm^7.6`
pub const LUMINOSITY_EXPONENT: f64 = 7.6;

/// Exponent of the main-sequence lifetime relation `V = Tnorm^-5`
pub const LIFETIME_EXPONENT: f64 = -5.0;

// -------------------------------------------------------------------------------------------------
// Spectral classification
// -------------------------------------------------------------------------------------------------

/// Span assigned to the coolest tabulated subclass (M9), i.e. the M9 → L0 temperature gap
pub const SPECTRAL_TERMINAL_SPAN_K: f64 = 110.0;

/// Number of subclasses per spectral class
pub const SUBCLASSES_PER_CLASS: usize = 10;

// -------------------------------------------------------------------------------------------------
// Habitability curve anchors
// -------------------------------------------------------------------------------------------------

/// Distance ratio at or below which a position is uninhabitable
pub const HABITABLE_FLOOR_RATIO: f64 = 0.25;

/// Reference point on the inner branch: `index(0.75) = 0.5`
pub const INNER_ANCHOR: (f64, f64) = (0.75, 0.5);

/// Reference point on the outer branch: `index(2.5) = 1.628`
pub const OUTER_ANCHOR: (f64, f64) = (2.5, 1.628);

// -------------------------------------------------------------------------------------------------
// Output precision defaults
// -------------------------------------------------------------------------------------------------

/// Default digits for stellar scaling results
pub const DEFAULT_STELLAR_DIGITS: u32 = 6;

/// Default digits for the habitability index
pub const DEFAULT_HABITABILITY_DIGITS: u32 = 3;

/// Largest digit count accepted by the rounding helper
pub const MAX_DIGITS: u32 = 15;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Temperature in Kelvin
pub type Kelvin = f64;
/// Distance in astronomical units
pub type AstronomicalUnit = f64;
/// Duration in Julian years
pub type Year = f64;
/// Mass in solar masses
pub type SolarMass = f64;
