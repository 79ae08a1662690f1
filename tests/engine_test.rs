use approx::assert_relative_eq;
use astrocalc::{
    engine::{AstrophysicalParameterEngine, EngineParams, Quantities, Resolution},
    habitability::Habitability,
    kepler::OrbitalKnowns,
    stellar_scaling::{resolve, StellarMode},
    synodic::{SynodicBranch, SynodicKnowns, SynodicOutcome},
    AstroError,
};

mod common;
use common::assert_profile_close;

#[test]
fn test_habitability_scenarios() {
    let engine = AstrophysicalParameterEngine::default();
    let cases = [
        (1.0, Habitability::Index(1.0)),
        (0.75, Habitability::Index(0.5)),
        (2.5, Habitability::Index(1.628)),
        (0.25, Habitability::Uninhabitable),
        (0.0, Habitability::Uninhabitable),
        (-3.0, Habitability::Uninhabitable),
    ];
    for (distance, expected) in cases {
        assert_eq!(engine.habitability(distance, None).unwrap(), expected);
    }
    assert_eq!(
        engine.habitability_for_luminosity(2.0, 4.0).unwrap(),
        Habitability::Index(1.0)
    );
}

#[test]
fn test_equal_periods_resolve_to_no_conjunction() {
    let engine = AstrophysicalParameterEngine::default();
    let res = engine
        .resolve(&Quantities::new().sidereal_p(3.0).sidereal_q(3.0))
        .unwrap();
    assert_eq!(
        res,
        Resolution::Synodic {
            knowns: SynodicKnowns::PQ { p: 3.0, q: 3.0 },
            outcome: SynodicOutcome::NoConjunction,
        }
    );
    assert_eq!(res.to_string(), "S = no conjunction");
}

#[test]
fn test_stellar_queries() {
    let engine = AstrophysicalParameterEngine::default();

    let res = engine
        .resolve(&Quantities::new().stellar(StellarMode::L, 10.0))
        .unwrap();
    let Resolution::Stellar(profile) = res else {
        panic!("expected a stellar profile");
    };
    assert_eq!(profile.luminosity, 10.0);
    assert!(profile.is_given(StellarMode::L));
    assert_profile_close(&profile, &resolve(StellarMode::L, 10.0, 6).unwrap(), 1e-12);

    let from_label = engine.stellar_from_label("G2").unwrap();
    assert_profile_close(
        &from_label,
        &resolve(StellarMode::K, 5770.0, 6).unwrap(),
        1e-12,
    );

    assert_eq!(
        engine.stellar(StellarMode::V, 0.0),
        Err(AstroError::NonPositiveBase {
            mode: "V".into(),
            value: 0.0
        })
    );
}

#[test]
fn test_orbit_queries() {
    let engine = AstrophysicalParameterEngine::default();
    let jupiter = engine
        .orbit(OrbitalKnowns::MassAxis {
            mass: 1.0,
            axis: 5.2,
        })
        .unwrap();
    assert_relative_eq!(jupiter.period, 11.857_824_421_031_035, epsilon = 1e-9);

    let res = engine
        .resolve(&Quantities::new().mass(1.0).axis(5.2))
        .unwrap();
    assert_eq!(res, Resolution::Orbit(jupiter));

    assert_relative_eq!(engine.configuration_index(2.0, 1.0, 2.0, 1.0).unwrap(), 1.0);
    assert!(matches!(
        engine.resolve(&Quantities::new().mass(-1.0).period(1.0)),
        Err(AstroError::InvalidOrbitalParameter { name: "mass", .. })
    ));
}

#[test]
fn test_synodic_branch_from_params() {
    let engine = AstrophysicalParameterEngine::new(
        EngineParams::builder()
            .synodic_branch(SynodicBranch::Outer)
            .build()
            .unwrap(),
    )
    .unwrap();
    assert_eq!(
        engine.synodic(SynodicKnowns::PS { p: 2.0, s: 1.0 }),
        Err(AstroError::NoSiderealSolution {
            known: 2.0,
            synodic: 1.0
        })
    );
}

#[test]
fn test_params_json_round_trip() {
    let params = EngineParams::builder()
        .stellar_digits(4)
        .habitability_digits(2)
        .synodic_branch(SynodicBranch::Outer)
        .nucleal_radius_au(1.3)
        .build()
        .unwrap();

    let json = serde_json::to_string(&params).unwrap();
    let back: EngineParams = serde_json::from_str(&json).unwrap();
    assert_eq!(back, params);
}

#[test]
fn test_params_partial_json_uses_defaults() {
    let params: EngineParams =
        serde_json::from_str(r#"{ "stellar_digits": 3, "synodic_branch": "Outer" }"#).unwrap();
    assert_eq!(params.stellar_digits, 3);
    assert_eq!(params.synodic_branch, SynodicBranch::Outer);
    assert_eq!(params.habitability_digits, 3);
    assert_eq!(params.nucleal_radius_au, 1.0);

    let invalid: EngineParams = serde_json::from_str(r#"{ "nucleal_radius_au": 0.0 }"#).unwrap();
    assert!(matches!(
        AstrophysicalParameterEngine::new(invalid),
        Err(AstroError::InvalidEngineParameter(_))
    ));
}

#[test]
fn test_quantities_from_json() {
    let engine = AstrophysicalParameterEngine::default();
    let query: Quantities = serde_json::from_str(r#"{ "period": 1.0, "axis": 1.0 }"#).unwrap();
    let Resolution::Orbit(system) = engine.resolve(&query).unwrap() else {
        panic!("expected an orbit");
    };
    assert_eq!(system.total_mass, 1.0);

    let query: Quantities = serde_json::from_str(r#"{ "stellar": ["M", 4.0] }"#).unwrap();
    let Resolution::Stellar(profile) = engine.resolve(&query).unwrap() else {
        panic!("expected a stellar profile");
    };
    assert_eq!(profile.t_norm, 2.0);
}

#[test]
fn test_resolution_display() {
    let engine = AstrophysicalParameterEngine::default();
    let shown = |q: Quantities| engine.resolve(&q).unwrap().to_string();

    assert_eq!(shown(Quantities::new().temperature_k(42300.0)), "42300 K → O4.4");
    assert_eq!(
        shown(Quantities::new().orbital_distance(0.2)),
        "habitability at 0.2 AU (zone centre 1 AU) = uninhabitable"
    );
    assert_eq!(
        shown(Quantities::new().period(1.0).mass(1.0)),
        "axis = 1 AU, period = 1 yr, mass = 1 M☉"
    );
}
