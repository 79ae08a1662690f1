//! Resolve a handful of astrophysical quantities through the engine.
//!
//! Run with `RUST_LOG=astrocalc=debug` to see clamping and branch selection events.
use astrocalc::{
    engine::{AstrophysicalParameterEngine, EngineParams, Quantities},
    spectral::SpectralClass,
    stellar_scaling::StellarMode,
    synodic::SynodicBranch,
    AstroError,
};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), AstroError> {
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy();
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let params = EngineParams::builder()
        .stellar_digits(4)
        .synodic_branch(SynodicBranch::Outer)
        .build()?;
    let engine = AstrophysicalParameterEngine::new(params)?;

    println!("{}", engine.spectral_table(Some(SpectralClass::G)));

    let queries = [
        Quantities::new().spectral_label("G7.3"),
        Quantities::new().temperature_k(42300.0),
        Quantities::new().temperature_k(1800.0),
        Quantities::new().stellar(StellarMode::M, 1.5),
        Quantities::new().mass(1.0).axis(5.2),
        Quantities::new().sidereal_p(1.0).sidereal_q(1.8808),
        Quantities::new().sidereal_p(1.0).synodic_s(2.1353),
        Quantities::new().sidereal_p(1.5).sidereal_q(1.5),
        Quantities::new().orbital_distance(0.75),
        Quantities::new().orbital_distance(0.2),
        Quantities::new().orbital_distance(5.0).luminosity(4.0),
    ];

    for query in &queries {
        match engine.resolve(query) {
            Ok(resolution) => println!("{resolution}"),
            Err(err) => println!("error: {err}"),
        }
    }

    let sun_like = engine.stellar_from_label("G2")?;
    println!("G2 star:\n{sun_like}");

    let index = engine.configuration_index(1.0, 0.5, 1.0, 2.0)?;
    println!("configuration index = {index}");

    Ok(())
}
