//! # SpaceBot Telemetry
//!
//! Mock space data generators: stateless formulas over random draws.
//! Every generator takes `&mut impl Rng` so tests can pin a seeded RNG;
//! the gateway passes `rand::thread_rng()`.

pub mod crew;
pub mod simulation;
pub mod tracking;

pub use crew::{Astronaut, average_days_in_space, current_astronauts};
pub use simulation::{
    OrbitalPoint, SpaceWeather, TrajectoryPoint, orbital_mechanics, rocket_trajectory,
    space_weather, weather_alerts,
};
pub use tracking::{DebrisObject, GeoPosition, IssSnapshot, Satellite, debris_field, high_risk_count, iss_snapshot, satellites};

/// Round to `digits` decimal places, mirroring the wire format.
pub(crate) fn round_to(value: f64, digits: u32) -> f64 {
    let factor = 10_f64.powi(digits as i32);
    (value * factor).round() / factor
}
