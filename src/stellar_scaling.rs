//! # Solar-relative stellar scaling
//!
//! Main-sequence attributes expressed as power laws of the **normalized effective
//! temperature** `Tnorm = Teff / 5770 K`:
//!
//! | Mode | Quantity                  | Forward law        | Inverse law          |
//! |------|---------------------------|--------------------|----------------------|
//! | `K`  | effective temperature (K) | `K = 5770·Tnorm`   | `Tnorm = K / 5770`   |
//! | `T`  | normalized temperature    | `T = Tnorm`        | `Tnorm = T`          |
//! | `M`  | mass (M☉)                 | `M = Tnorm²`       | `Tnorm = √M`         |
//! | `R`  | radius (R☉)               | `R = Tnorm^1.8`    | `Tnorm = R^(1/1.8)`  |
//! | `L`  | luminosity (L☉)           | `L = Tnorm^7.6`    | `Tnorm = L^(1/7.6)`  |
//! | `V`  | main-sequence lifetime    | `V = Tnorm^-5`     | `Tnorm = V^(-1/5)`   |
//!
//! [`resolve`] recovers `Tnorm` from whichever attribute the caller knows and derives the
//! other five. Only `Tnorm` is state: every other field is re-derived from it, except the
//! supplied attribute, which is echoed back and flagged in [`StellarProfile::given`].
//!
//! The Sun maps to `1.0` in every relation:
//!
//! ```rust
//! use astrocalc::stellar_scaling::{resolve, StellarMode};
//!
//! let sun = resolve(StellarMode::K, 5770.0, 6).unwrap();
//! assert_eq!(sun.mass, 1.0);
//! assert_eq!(sun.luminosity, 1.0);
//! assert_eq!(sun.given, StellarMode::K);
//! ```
use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    constants::{
        Kelvin, LIFETIME_EXPONENT, LUMINOSITY_EXPONENT, MASS_EXPONENT, RADIUS_EXPONENT,
        SOLAR_TEMPERATURE_K,
    },
    rounding::{check_digits, check_representable, round_to},
    spectral::interpolator::temperature_of,
};

/// Which stellar attribute the caller supplies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StellarMode {
    /// Effective temperature in Kelvin
    K,
    /// Normalized temperature `Teff / 5770`
    T,
    /// Mass in solar masses
    M,
    /// Radius in solar radii
    R,
    /// Luminosity in solar luminosities
    L,
    /// Main-sequence lifetime relative to the Sun
    V,
}

impl StellarMode {
    pub const ALL: [StellarMode; 6] = [
        StellarMode::K,
        StellarMode::T,
        StellarMode::M,
        StellarMode::R,
        StellarMode::L,
        StellarMode::V,
    ];

    /// Inverse law: normalized temperature from this attribute.
    pub fn t_norm_from(self, value: f64) -> f64 {
        match self {
            StellarMode::K => value / SOLAR_TEMPERATURE_K,
            StellarMode::T => value,
            StellarMode::M => value.powf(1.0 / MASS_EXPONENT),
            StellarMode::R => value.powf(1.0 / RADIUS_EXPONENT),
            StellarMode::L => value.powf(1.0 / LUMINOSITY_EXPONENT),
            StellarMode::V => value.powf(1.0 / LIFETIME_EXPONENT),
        }
    }

    /// Forward law: this attribute from the normalized temperature.
    pub fn from_t_norm(self, t_norm: f64) -> f64 {
        match self {
            StellarMode::K => t_norm * SOLAR_TEMPERATURE_K,
            StellarMode::T => t_norm,
            StellarMode::M => t_norm.powf(MASS_EXPONENT),
            StellarMode::R => t_norm.powf(RADIUS_EXPONENT),
            StellarMode::L => t_norm.powf(LUMINOSITY_EXPONENT),
            StellarMode::V => t_norm.powf(LIFETIME_EXPONENT),
        }
    }

    /// Name of the [`StellarProfile`] field holding this attribute.
    pub fn field_name(self) -> &'static str {
        match self {
            StellarMode::K => "kelvin",
            StellarMode::T => "t_norm",
            StellarMode::M => "mass",
            StellarMode::R => "radius",
            StellarMode::L => "luminosity",
            StellarMode::V => "lifetime",
        }
    }

    pub fn symbol(self) -> char {
        match self {
            StellarMode::K => 'K',
            StellarMode::T => 'T',
            StellarMode::M => 'M',
            StellarMode::R => 'R',
            StellarMode::L => 'L',
            StellarMode::V => 'V',
        }
    }
}

impl fmt::Display for StellarMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for StellarMode {
    type Err = AstroError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "K" => Ok(StellarMode::K),
            "T" => Ok(StellarMode::T),
            "M" => Ok(StellarMode::M),
            "R" => Ok(StellarMode::R),
            "L" => Ok(StellarMode::L),
            "V" => Ok(StellarMode::V),
            _ => Err(AstroError::UnknownMode(s.to_string())),
        }
    }
}

/// All six solar-relative attributes of a main-sequence star.
///
/// Units:
/// * `kelvin`: K
/// * `t_norm`, `mass`, `radius`, `luminosity`, `lifetime`: solar units
///
/// `given` records which attribute was supplied; that field holds the caller's value
/// (rounded) rather than a recomputation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StellarProfile {
    pub kelvin: Kelvin,
    pub t_norm: f64,
    pub mass: f64,
    pub radius: f64,
    pub luminosity: f64,
    pub lifetime: f64,
    pub given: StellarMode,
}

impl StellarProfile {
    /// Value of the attribute selected by `mode`.
    pub fn field(&self, mode: StellarMode) -> f64 {
        match mode {
            StellarMode::K => self.kelvin,
            StellarMode::T => self.t_norm,
            StellarMode::M => self.mass,
            StellarMode::R => self.radius,
            StellarMode::L => self.luminosity,
            StellarMode::V => self.lifetime,
        }
    }

    /// `true` if `mode` is the attribute the caller supplied.
    pub fn is_given(&self, mode: StellarMode) -> bool {
        self.given == mode
    }

    /// Resolve a profile from a fractional spectral label such as `"G2"`.
    ///
    /// The label is converted to an effective temperature with
    /// [`temperature_of`](crate::spectral::interpolator::temperature_of), then resolved in
    /// [`StellarMode::K`].
    pub fn from_spectral_label(label: &str, digits: u32) -> Result<Self, AstroError> {
        let kelvin = temperature_of(label)?;
        resolve(StellarMode::K, kelvin, digits)
    }
}

impl fmt::Display for StellarProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for mode in StellarMode::ALL {
            let marker = if self.is_given(mode) { " (given)" } else { "" };
            writeln!(f, "{mode} = {}{marker}", self.field(mode))?;
        }
        Ok(())
    }
}

/// Resolve every stellar attribute from one known attribute.
///
/// Arguments
/// -----------------
/// * `mode`: Which attribute `input` represents.
/// * `input`: The known value, in the units of `mode`.
/// * `digits`: Decimal places kept in every output field (6 by convention).
///
/// Return
/// ----------
/// * A [`StellarProfile`] with the supplied attribute flagged.
///
/// Errors
/// ----------
/// * [`AstroError::NonPositiveBase`] if `input` is not a positive finite number. Every inverse
///   law raises the input to a fractional or negative power, and `Tnorm = 0` has no lifetime.
/// * [`AstroError::OutOfRange`] if a derived attribute overflows or underflows `f64`
///   (e.g. the luminosity of `V = 1e-300`).
/// * [`AstroError::InvalidPrecision`] if `digits` is too large.
pub fn resolve(mode: StellarMode, input: f64, digits: u32) -> Result<StellarProfile, AstroError> {
    check_digits(digits)?;
    if !input.is_finite() || input <= 0.0 {
        return Err(AstroError::NonPositiveBase {
            mode: mode.to_string(),
            value: input,
        });
    }

    let t_norm = mode.t_norm_from(input);
    debug!(%mode, input, t_norm, "recovered normalized temperature");

    let value = |m: StellarMode| {
        let raw = if m == mode {
            input
        } else {
            check_representable(m.field_name(), m.from_t_norm(t_norm))?
        };
        round_to(raw, digits)
    };

    Ok(StellarProfile {
        kelvin: value(StellarMode::K)?,
        t_norm: value(StellarMode::T)?,
        mass: value(StellarMode::M)?,
        radius: value(StellarMode::R)?,
        luminosity: value(StellarMode::L)?,
        lifetime: value(StellarMode::V)?,
        given: mode,
    })
}
