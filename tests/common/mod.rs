#![allow(dead_code)]

use approx::assert_relative_eq;
use astrocalc::{
    spectral::{interpolator::SpectralLabel, SpectralTable},
    stellar_scaling::{StellarMode, StellarProfile},
};

/// Compare every field of two stellar profiles.
pub fn assert_profile_close(actual: &StellarProfile, expected: &StellarProfile, epsilon: f64) {
    for mode in StellarMode::ALL {
        assert_relative_eq!(actual.field(mode), expected.field(mode), epsilon = epsilon);
    }
    assert_eq!(actual.given, expected.given);
}

/// Position of a label on the tenth-of-subclass grid, hottest first (`O0.0` is 0).
pub fn label_position(label: &SpectralLabel) -> i64 {
    let index = SpectralTable::index_of(label.class, label.subclass)
        .expect("label refers to a table entry");
    index as i64 * 10 + i64::from(label.tenths)
}
