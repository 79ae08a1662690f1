//! # Engine parameters
//!
//! [`EngineParams`] collects the optional arguments of the solvers (output precision,
//! synodic root selection, default habitable-zone centre) in one place, so that an
//! [`AstrophysicalParameterEngine`](crate::engine::AstrophysicalParameterEngine) applies them
//! consistently.
//!
//! | Parameter             | Default | Used by                           |
//! |-----------------------|---------|-----------------------------------|
//! | `stellar_digits`      | `6`     | stellar scaling outputs           |
//! | `habitability_digits` | `3`     | habitability index                |
//! | `synodic_branch`      | `Inner` | sidereal period recovery          |
//! | `nucleal_radius_au`   | `1.0`   | habitability when none is given   |
//!
//! ## Example
//!
//! ```rust
//! use astrocalc::engine::params::EngineParams;
//! use astrocalc::synodic::SynodicBranch;
//!
//! let params = EngineParams::builder()
//!     .stellar_digits(4)
//!     .synodic_branch(SynodicBranch::Outer)
//!     .build()
//!     .unwrap();
//! assert_eq!(params.habitability_digits, 3);
//! ```
//!
//! Parameters are serde-(de)serializable; missing fields take their default value.
use std::cmp::Ordering::Greater;

use serde::{Deserialize, Serialize};

use crate::{
    astro_errors::AstroError,
    constants::{AstronomicalUnit, DEFAULT_HABITABILITY_DIGITS, DEFAULT_STELLAR_DIGITS, MAX_DIGITS},
    synodic::SynodicBranch,
};

/// Tunable defaults shared by every solver call made through the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineParams {
    /// Decimal places kept in stellar scaling outputs.
    pub stellar_digits: u32,
    /// Decimal places kept in the habitability index.
    pub habitability_digits: u32,
    /// Root returned when a sidereal period is recovered from a synodic period.
    pub synodic_branch: SynodicBranch,
    /// Habitable zone centre used when a query supplies neither a radius nor a luminosity.
    pub nucleal_radius_au: AstronomicalUnit,
}

impl EngineParams {
    /// Equivalent to [`EngineParams::default()`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a fluent builder initialized with the default values.
    pub fn builder() -> EngineParamsBuilder {
        EngineParamsBuilder::new()
    }

    /// Check the invariants enforced by [`EngineParamsBuilder::build`].
    ///
    /// Useful after deserializing parameters, which bypasses the builder.
    pub fn validate(&self) -> Result<(), AstroError> {
        if self.stellar_digits > MAX_DIGITS {
            return Err(AstroError::InvalidEngineParameter(format!(
                "stellar_digits must be <= {MAX_DIGITS}"
            )));
        }
        if self.habitability_digits > MAX_DIGITS {
            return Err(AstroError::InvalidEngineParameter(format!(
                "habitability_digits must be <= {MAX_DIGITS}"
            )));
        }
        if !(self.nucleal_radius_au.is_finite()
            && self.nucleal_radius_au.partial_cmp(&0.0) == Some(Greater))
        {
            return Err(AstroError::InvalidEngineParameter(
                "nucleal_radius_au must be > 0".into(),
            ));
        }
        Ok(())
    }
}

impl Default for EngineParams {
    fn default() -> Self {
        EngineParams {
            stellar_digits: DEFAULT_STELLAR_DIGITS,
            habitability_digits: DEFAULT_HABITABILITY_DIGITS,
            synodic_branch: SynodicBranch::Inner,
            nucleal_radius_au: 1.0,
        }
    }
}

/// Builder for [`EngineParams`], with validation.
#[derive(Debug, Clone)]
pub struct EngineParamsBuilder {
    params: EngineParams,
}

impl Default for EngineParamsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineParamsBuilder {
    pub fn new() -> Self {
        Self {
            params: EngineParams::default(),
        }
    }

    pub fn stellar_digits(mut self, v: u32) -> Self {
        self.params.stellar_digits = v;
        self
    }
    pub fn habitability_digits(mut self, v: u32) -> Self {
        self.params.habitability_digits = v;
        self
    }
    pub fn synodic_branch(mut self, v: SynodicBranch) -> Self {
        self.params.synodic_branch = v;
        self
    }
    pub fn nucleal_radius_au(mut self, v: AstronomicalUnit) -> Self {
        self.params.nucleal_radius_au = v;
        self
    }

    /// Finalize the builder.
    ///
    /// Validation rules
    /// -----------------
    /// * `stellar_digits <= 15`, `habitability_digits <= 15`.
    /// * `nucleal_radius_au > 0` and finite.
    ///
    /// Returns
    /// -----------------
    /// * `Ok(EngineParams)` if every rule holds, [`AstroError::InvalidEngineParameter`] otherwise.
    pub fn build(self) -> Result<EngineParams, AstroError> {
        self.params.validate()?;
        Ok(self.params)
    }
}
