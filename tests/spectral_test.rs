use approx::assert_relative_eq;
use astrocalc::{
    constants::SPECTRAL_TERMINAL_SPAN_K,
    spectral::{
        interpolator::{subclass_of, temperature_of, SpectralInterpolator, SpectralLabel},
        SpectralClass, SpectralTable, SPECTRAL_TABLE,
    },
};

mod common;
use common::label_position;

#[test]
fn test_table_shape() {
    assert_eq!(SPECTRAL_TABLE.len(), 70);
    assert_eq!(SPECTRAL_TABLE.hottest().high_temp, 52_500.0);
    assert_eq!(SPECTRAL_TABLE.coolest().class, SpectralClass::M);
    assert_eq!(SPECTRAL_TABLE.coolest().subclass, 9);
    assert_eq!(SPECTRAL_TABLE.coolest().span, SPECTRAL_TERMINAL_SPAN_K);

    for pair in SPECTRAL_TABLE.entries().windows(2) {
        assert!(pair[0].high_temp > pair[1].high_temp);
        assert_eq!(pair[0].span, pair[0].high_temp - pair[1].high_temp);
    }
}

#[test]
fn test_reference_anchors() {
    let anchor = |class, sub| SPECTRAL_TABLE.entry(class, sub).unwrap().high_temp;
    assert_eq!(anchor(SpectralClass::O, 4), 42900.0);
    assert_eq!(anchor(SpectralClass::O, 5), 41400.0);
    assert_eq!(anchor(SpectralClass::G, 2), 5770.0);
    assert_eq!(anchor(SpectralClass::G, 7), 5550.0);
    assert_eq!(anchor(SpectralClass::G, 8), 5480.0);
    assert_eq!(anchor(SpectralClass::M, 9), 2380.0);
}

#[test]
fn test_documented_scenarios() {
    assert_relative_eq!(temperature_of("G7.3").unwrap(), 5529.0, epsilon = 1e-9);
    assert_relative_eq!(temperature_of("O4.4").unwrap(), 42300.0, epsilon = 1e-9);
}

#[test]
fn test_every_label_round_trips() {
    let interpolator = SpectralInterpolator::new(SpectralTable::global());
    for entry in interpolator.table().entries() {
        for tenths in 0..10u8 {
            let text = format!("{}{}.{}", entry.class, entry.subclass, tenths);
            let expected: SpectralLabel = text.parse().unwrap();
            let kelvin = interpolator.temperature_of(&text).unwrap();
            let back = interpolator.subclass_of(kelvin).unwrap();
            assert!(
                (label_position(&back) - label_position(&expected)).abs() <= 1,
                "{text} -> {kelvin} K -> {back}"
            );
        }
    }
}

#[test]
fn test_out_of_range_temperatures_clamp() {
    assert_eq!(subclass_of(1.0e6).unwrap().to_string(), "O0.0");
    assert_eq!(subclass_of(52_500.0).unwrap().to_string(), "O0.0");
    assert_eq!(subclass_of(1800.0).unwrap().to_string(), "M9.9");
}

#[test]
fn test_display_filtered_and_full() {
    let interpolator = SpectralInterpolator::default();

    let g = interpolator.display(Some(SpectralClass::G));
    assert_eq!(g.class_filter(), Some(SpectralClass::G));
    let rendered = g.to_string();
    assert!(rendered.starts_with("Spectral class G (n=10)"));
    assert!(rendered.contains("5770"));

    let full = interpolator.display(None).to_string();
    assert!(full.starts_with("Spectral table (n=70)"));
    for class in SpectralClass::ALL {
        assert!(full.contains(&format!("{class}0")));
    }
}

#[test]
fn test_class_parsing() {
    assert_eq!("k".parse::<SpectralClass>().unwrap(), SpectralClass::K);
    assert!("Q".parse::<SpectralClass>().is_err());
    assert!("GK".parse::<SpectralClass>().is_err());
}
