//! # Spectral classification reference table
//!
//! This module holds the **immutable temperature table** behind spectral-subclass
//! interpolation: 7 classes (`O B A F G K M`) × 10 subclasses, each carrying the
//! effective temperature at the hot edge of the subclass and the temperature
//! **span** down to the next subclass.
//!
//! ## Layout
//!
//! ```text
//! O0 ──────── O9 │ B0 ──────── B9 │ … │ M0 ──────── M9
//! 52500 K        │ 31400 K        │   │ 3850 K    2380 K
//! ```
//!
//! Entries are stored **hottest first**, forming one strictly descending sequence.
//! The span of an entry is derived from its successor when the table is built; the coolest
//! entry (M9) receives the fixed [`SPECTRAL_TERMINAL_SPAN_K`].
//!
//! Anchor temperatures follow the main-sequence dwarf calibration from O3 onwards. O0–O2
//! have no dwarf calibration and are extrapolated so that the sequence stays monotonic.
//!
//! ## Access
//!
//! The table is built once, on first use, through [`SPECTRAL_TABLE`]. It is never mutated
//! afterwards and can be read concurrently from any thread.
//!
//! ## See also
//!
//! - [`interpolator`] – Label ↔ temperature conversion on top of this table.
//! - [`display`] – Tabular rendering of the table, optionally filtered by class.
use std::{fmt, str::FromStr};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::{
    astro_errors::AstroError,
    constants::{Kelvin, SPECTRAL_TERMINAL_SPAN_K, SUBCLASSES_PER_CLASS},
};

pub mod display;
pub mod interpolator;

/// Hot-edge temperatures (K), hottest first, one row per class.
const ANCHOR_TEMPERATURES: [[Kelvin; SUBCLASSES_PER_CLASS]; 7] = [
    // O
    [
        52500.0, 50000.0, 47500.0, 44900.0, 42900.0, 41400.0, 39500.0, 37100.0, 35100.0, 33300.0,
    ],
    // B
    [
        31400.0, 26000.0, 20600.0, 17000.0, 16400.0, 15700.0, 14500.0, 14000.0, 12300.0, 10700.0,
    ],
    // A
    [
        9700.0, 9300.0, 8800.0, 8600.0, 8250.0, 8100.0, 7910.0, 7760.0, 7590.0, 7400.0,
    ],
    // F
    [
        7220.0, 7020.0, 6820.0, 6750.0, 6670.0, 6550.0, 6350.0, 6280.0, 6180.0, 6050.0,
    ],
    // G
    [
        5930.0, 5860.0, 5770.0, 5720.0, 5680.0, 5660.0, 5600.0, 5550.0, 5480.0, 5380.0,
    ],
    // K
    [
        5270.0, 5170.0, 5100.0, 4830.0, 4600.0, 4440.0, 4300.0, 4100.0, 3990.0, 3930.0,
    ],
    // M
    [
        3850.0, 3660.0, 3560.0, 3430.0, 3210.0, 3060.0, 2810.0, 2680.0, 2570.0, 2380.0,
    ],
];

/// Harvard spectral class of a main-sequence star, hottest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SpectralClass {
    O,
    B,
    A,
    F,
    G,
    K,
    M,
}

impl SpectralClass {
    /// All classes in descending temperature order.
    pub const ALL: [SpectralClass; 7] = [
        SpectralClass::O,
        SpectralClass::B,
        SpectralClass::A,
        SpectralClass::F,
        SpectralClass::G,
        SpectralClass::K,
        SpectralClass::M,
    ];

    /// Position of the class in [`SpectralClass::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn letter(self) -> char {
        match self {
            SpectralClass::O => 'O',
            SpectralClass::B => 'B',
            SpectralClass::A => 'A',
            SpectralClass::F => 'F',
            SpectralClass::G => 'G',
            SpectralClass::K => 'K',
            SpectralClass::M => 'M',
        }
    }

    /// Resolve a class from its letter, case-insensitively.
    pub fn from_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'O' => Some(SpectralClass::O),
            'B' => Some(SpectralClass::B),
            'A' => Some(SpectralClass::A),
            'F' => Some(SpectralClass::F),
            'G' => Some(SpectralClass::G),
            'K' => Some(SpectralClass::K),
            'M' => Some(SpectralClass::M),
            _ => None,
        }
    }
}

impl fmt::Display for SpectralClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}

impl FromStr for SpectralClass {
    type Err = AstroError;

    /// Parse a single class letter, e.g. `"G"` or `"g"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        match (chars.next(), chars.next()) {
            (Some(letter), None) => SpectralClass::from_letter(letter)
                .ok_or_else(|| AstroError::InvalidSpectralClass(trimmed.to_string())),
            _ => Err(AstroError::InvalidSpectralClass(trimmed.to_string())),
        }
    }
}

/// One row of the spectral table.
///
/// Units:
/// * `high_temp`: Kelvin, temperature at the hot edge of the subclass
/// * `span`: Kelvin, drop from `high_temp` to the next (cooler) subclass
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpectralSubclassEntry {
    pub class: SpectralClass,
    pub subclass: u8,
    pub high_temp: Kelvin,
    pub span: Kelvin,
}

impl SpectralSubclassEntry {
    /// Temperature at the cool edge of the subclass.
    pub fn low_temp(&self) -> Kelvin {
        self.high_temp - self.span
    }
}

impl fmt::Display for SpectralSubclassEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}: {:.0} K (span {:.0} K)",
            self.class, self.subclass, self.high_temp, self.span
        )
    }
}

/// The 70-entry spectral temperature table, hottest first.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralTable {
    entries: Vec<SpectralSubclassEntry>,
}

/// Process-wide spectral table, built on first access.
pub static SPECTRAL_TABLE: Lazy<SpectralTable> = Lazy::new(SpectralTable::build);

impl SpectralTable {
    /// Build the table from the anchor temperatures.
    ///
    /// Spans are computed from consecutive anchors so that
    /// `span(i) = high_temp(i) - high_temp(i + 1)` holds by construction.
    fn build() -> Self {
        let temps: Vec<(SpectralClass, u8, Kelvin)> = SpectralClass::ALL
            .iter()
            .zip(ANCHOR_TEMPERATURES.iter())
            .flat_map(|(&class, row)| {
                row.iter()
                    .enumerate()
                    .map(move |(sub, &temp)| (class, sub as u8, temp))
            })
            .collect();

        let entries = temps
            .iter()
            .enumerate()
            .map(|(i, &(class, subclass, high_temp))| {
                let span = temps
                    .get(i + 1)
                    .map_or(SPECTRAL_TERMINAL_SPAN_K, |&(_, _, next)| high_temp - next);
                SpectralSubclassEntry {
                    class,
                    subclass,
                    high_temp,
                    span,
                }
            })
            .collect();

        SpectralTable { entries }
    }

    /// Shared handle on the process-wide table.
    pub fn global() -> &'static SpectralTable {
        &SPECTRAL_TABLE
    }

    /// All entries, hottest first.
    pub fn entries(&self) -> &[SpectralSubclassEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Position of `class`/`subclass` in [`SpectralTable::entries`].
    pub fn index_of(class: SpectralClass, subclass: u8) -> Option<usize> {
        let subclass = subclass as usize;
        (subclass < SUBCLASSES_PER_CLASS).then(|| class.index() * SUBCLASSES_PER_CLASS + subclass)
    }

    /// Entry for `class`/`subclass`, `None` if `subclass > 9`.
    pub fn entry(&self, class: SpectralClass, subclass: u8) -> Option<&SpectralSubclassEntry> {
        Self::index_of(class, subclass).and_then(|i| self.entries.get(i))
    }

    /// The ten rows belonging to `class`.
    pub fn class_rows(&self, class: SpectralClass) -> &[SpectralSubclassEntry] {
        let start = class.index() * SUBCLASSES_PER_CLASS;
        &self.entries[start..start + SUBCLASSES_PER_CLASS]
    }

    /// Hottest tabulated entry (O0).
    pub fn hottest(&self) -> &SpectralSubclassEntry {
        &self.entries[0]
    }

    /// Coolest tabulated entry (M9).
    pub fn coolest(&self) -> &SpectralSubclassEntry {
        &self.entries[self.entries.len() - 1]
    }
}
