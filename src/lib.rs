//! # astrocalc
//!
//! Solvers for related astrophysical quantities: supply whichever quantity you know and
//! derive the rest.
//!
//! | Module              | Knowns                             | Derived                          |
//! |---------------------|------------------------------------|----------------------------------|
//! | [`spectral`]        | spectral label or temperature      | temperature or label             |
//! | [`stellar_scaling`] | one of `K T M R L V`               | all six solar-relative attributes|
//! | [`kepler`]          | two of mass / period / axis        | the third                        |
//! | [`synodic`]         | two of `P`, `Q`, `S`               | the third                        |
//! | [`habitability`]    | orbital distance, zone centre      | habitability index               |
//!
//! [`engine::AstrophysicalParameterEngine`] dispatches a [`engine::Quantities`] query to the
//! matching solver.
//!
//! All solvers are pure functions; the only shared data is the read-only
//! [`spectral::SPECTRAL_TABLE`]. The crate emits [`tracing`] events but never installs a
//! subscriber.
pub mod astro_errors;
pub mod constants;
pub mod engine;
pub mod habitability;
pub mod kepler;
pub mod rounding;
pub mod spectral;
pub mod stellar_scaling;
pub mod synodic;

pub use astro_errors::AstroError;
pub use engine::{AstrophysicalParameterEngine, EngineParams, Quantities, Resolution};
pub use habitability::Habitability;
pub use synodic::SynodicOutcome;
