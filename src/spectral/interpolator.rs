//! # Spectral subclass ↔ temperature interpolation
//!
//! Converts a fractional spectral label such as `"G7.3"` into an effective temperature, and
//! an effective temperature back into the nearest label, by linear interpolation inside the
//! [`SpectralTable`].
//!
//! ## Label → temperature
//!
//! ```text
//! "G7.3"  →  class G, subclass 7, fraction 0.3
//!         →  high_temp(G7) − 0.3 × span(G7)  =  5550 − 0.3 × 70  =  5529 K
//! ```
//!
//! ## Temperature → label
//!
//! The table is sorted by descending temperature, so the bracketing entry
//! (`high_temp(i) ≥ T > high_temp(i + 1)`) is found by **binary search**. The fraction
//! `(high_temp − T) / span` is clamped to `[0, 1)` and printed with one decimal.
//!
//! Out-of-range temperatures are **clamped, not rejected**:
//! - above the O0 anchor the label is `O0.0`;
//! - below the M9 anchor the fraction keeps growing along the terminal span and saturates at `M9.9`.
//!
//! A fraction that rounds up to ten tenths carries into the next subclass (`G7.96 → G8.0`).
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    astro_errors::AstroError,
    constants::{Kelvin, SUBCLASSES_PER_CLASS},
    spectral::{display::SpectralTableView, SpectralClass, SpectralTable},
};

/// Largest fraction accepted inside a subclass; keeps the interval half-open.
const MAX_FRACTION: f64 = 1.0 - f64::EPSILON;

static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*(\p{L})\s*([+-])?([0-9]+)(?:\.([0-9]+))?\s*$")
        .expect("spectral label pattern is a valid regex")
});

/// A spectral label rounded to tenths of a subclass, e.g. `G7.3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SpectralLabel {
    pub class: SpectralClass,
    pub subclass: u8,
    pub tenths: u8,
}

impl SpectralLabel {
    /// Build the label for table position `index` with `tenths` in `0..=10`.
    ///
    /// Ten tenths carry into the next subclass; on the last entry they saturate at `.9`.
    fn at_index(table: &SpectralTable, index: usize, tenths: u8) -> Self {
        let (index, tenths) = if tenths >= 10 {
            if index + 1 < table.len() {
                (index + 1, 0)
            } else {
                (index, 9)
            }
        } else {
            (index, tenths)
        };
        let entry = &table.entries()[index];
        SpectralLabel {
            class: entry.class,
            subclass: entry.subclass,
            tenths,
        }
    }

    /// Fractional position inside the subclass, in `[0, 0.9]`.
    pub fn fraction(&self) -> f64 {
        f64::from(self.tenths) / 10.0
    }

    /// Subclass with its fraction, e.g. `7.3`.
    pub fn numeric_subclass(&self) -> f64 {
        f64::from(self.subclass) + self.fraction()
    }
}

impl fmt::Display for SpectralLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}.{}", self.class, self.subclass, self.tenths)
    }
}

impl FromStr for SpectralLabel {
    type Err = AstroError;

    /// Parse a label and round its fraction to tenths, carrying into the next subclass
    /// when needed (`"G7.96"` parses as `G8.0`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let table = SpectralTable::global();
        let parsed = parse_label(s)?;
        let index = SpectralTable::index_of(parsed.class, parsed.subclass)
            .ok_or(AstroError::InvalidSubclass(parsed.numeric))?;
        let tenths = (parsed.fraction * 10.0).round() as u8;
        Ok(SpectralLabel::at_index(table, index, tenths))
    }
}

/// Decomposed form of a label string.
#[derive(Debug, Clone, Copy, PartialEq)]
struct ParsedLabel {
    class: SpectralClass,
    subclass: u8,
    fraction: f64,
    numeric: f64,
}

/// Split `"G7.3"` into class `G`, subclass `7` and fraction `0.3`.
///
/// The fraction is read from its own digits so that `"7.3"` yields exactly `0.3`
/// rather than `7.3 - 7.0`.
fn parse_label(label: &str) -> Result<ParsedLabel, AstroError> {
    let caps = LABEL_PATTERN
        .captures(label)
        .ok_or_else(|| AstroError::MalformedSpectralLabel(label.to_string()))?;

    let letter = &caps[1];
    let class: SpectralClass = letter.parse()?;

    let negative = caps.get(2).is_some_and(|m| m.as_str() == "-");
    let int_digits = &caps[3];
    let frac_digits = caps.get(4).map_or("0", |m| m.as_str());

    let malformed = || AstroError::MalformedSpectralLabel(label.to_string());
    let numeric: f64 = format!("{int_digits}.{frac_digits}")
        .parse()
        .map_err(|_| malformed())?;
    let fraction: f64 = format!("0.{frac_digits}")
        .parse()
        .map_err(|_| malformed())?;

    let signed = if negative { -numeric } else { numeric };
    if negative || numeric >= SUBCLASSES_PER_CLASS as f64 {
        return Err(AstroError::InvalidSubclass(signed));
    }

    let subclass: u8 = int_digits
        .parse()
        .map_err(|_| AstroError::InvalidSubclass(signed))?;

    Ok(ParsedLabel {
        class,
        subclass,
        fraction,
        numeric,
    })
}

/// Label ↔ temperature conversions over a [`SpectralTable`].
#[derive(Debug, Clone, Copy)]
pub struct SpectralInterpolator<'a> {
    table: &'a SpectralTable,
}

impl Default for SpectralInterpolator<'static> {
    fn default() -> Self {
        Self::new(SpectralTable::global())
    }
}

impl<'a> SpectralInterpolator<'a> {
    pub fn new(table: &'a SpectralTable) -> Self {
        Self { table }
    }

    pub fn table(&self) -> &'a SpectralTable {
        self.table
    }

    /// Effective temperature of a fractional spectral label.
    ///
    /// Arguments
    /// -----------------
    /// * `label`: A class letter followed by a subclass in `[0, 10)`, e.g. `"G7.3"`, `"o4.4"`, `"M9"`.
    ///
    /// Return
    /// ----------
    /// * `high_temp − fraction × span` of the base subclass, in Kelvin.
    ///
    /// Errors
    /// ----------
    /// * [`AstroError::InvalidSpectralClass`] if the letter is not one of `O B A F G K M`.
    /// * [`AstroError::InvalidSubclass`] if the numeric part is outside `[0, 10)`.
    /// * [`AstroError::MalformedSpectralLabel`] if the label has no numeric part or extra text.
    pub fn temperature_of(&self, label: &str) -> Result<Kelvin, AstroError> {
        let parsed = parse_label(label)?;
        let entry = self
            .table
            .entry(parsed.class, parsed.subclass)
            .ok_or(AstroError::InvalidSubclass(parsed.numeric))?;
        Ok(entry.high_temp - parsed.fraction * entry.span)
    }

    /// Nearest spectral label for an effective temperature.
    ///
    /// Arguments
    /// -----------------
    /// * `temperature`: Effective temperature in Kelvin.
    ///
    /// Return
    /// ----------
    /// * The bracketing subclass with its fraction rounded to tenths.
    ///   Temperatures hotter than O0 clamp to `O0.0`; temperatures cooler than the M9
    ///   anchor saturate at `M9.9`.
    ///
    /// Errors
    /// ----------
    /// * [`AstroError::InvalidTemperature`] if `temperature` is not finite or not positive.
    pub fn subclass_of(&self, temperature: Kelvin) -> Result<SpectralLabel, AstroError> {
        if !temperature.is_finite() || temperature <= 0.0 {
            return Err(AstroError::InvalidTemperature(temperature));
        }

        let entries = self.table.entries();
        let upper = entries.partition_point(|e| e.high_temp >= temperature);

        if upper == 0 {
            debug!(
                temperature,
                hottest = self.table.hottest().high_temp,
                "temperature above hottest subclass, clamped to O0.0"
            );
            return Ok(SpectralLabel::at_index(self.table, 0, 0));
        }

        let index = upper - 1;
        let entry = &entries[index];
        let raw = (entry.high_temp - temperature) / entry.span;
        if raw >= 1.0 {
            debug!(
                temperature,
                coolest = entry.high_temp,
                "temperature below coolest subclass, clamped to M9"
            );
        }

        let fraction = raw.clamp(0.0, MAX_FRACTION);
        let tenths = (fraction * 10.0).round() as u8;
        Ok(SpectralLabel::at_index(self.table, index, tenths))
    }

    /// Table rows, optionally restricted to one class.
    pub fn display(&self, class_filter: Option<SpectralClass>) -> SpectralTableView<'a> {
        SpectralTableView::new(self.table, class_filter)
    }
}

/// [`SpectralInterpolator::temperature_of`] over the global table.
pub fn temperature_of(label: &str) -> Result<Kelvin, AstroError> {
    SpectralInterpolator::default().temperature_of(label)
}

/// [`SpectralInterpolator::subclass_of`] over the global table.
pub fn subclass_of(temperature: Kelvin) -> Result<SpectralLabel, AstroError> {
    SpectralInterpolator::default().subclass_of(temperature)
}
