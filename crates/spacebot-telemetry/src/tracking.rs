//! Orbital object tracking: ISS position, satellite catalog, debris field.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::round_to;

/// Geodetic position with altitude in km.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct GeoPosition {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

/// Snapshot of the ISS state.
#[derive(Debug, Clone, Serialize)]
pub struct IssSnapshot {
    pub position: GeoPosition,
    /// Orbital velocity in km/h.
    pub velocity: f64,
    pub crew_count: u32,
    pub next_pass: NextPass,
}

#[derive(Debug, Clone, Serialize)]
pub struct NextPass {
    /// Pass duration in seconds.
    pub duration: u32,
    /// Maximum elevation in degrees.
    pub max_elevation: u32,
}

/// The ISS stays within ±51.6° latitude (its orbital inclination).
pub fn iss_snapshot<R: Rng + ?Sized>(rng: &mut R) -> IssSnapshot {
    IssSnapshot {
        position: GeoPosition {
            latitude: round_to(rng.gen_range(-51.6..=51.6), 4),
            longitude: round_to(rng.gen_range(-180.0..=180.0), 4),
            altitude: round_to(408.0 + rng.gen_range(-10.0..=10.0), 2),
        },
        velocity: round_to(27600.0 + rng.gen_range(-100.0..=100.0), 2),
        crew_count: 7,
        next_pass: NextPass {
            duration: rng.gen_range(300..=600),
            max_elevation: rng.gen_range(10..=90),
        },
    }
}

/// Tracked satellite.
#[derive(Debug, Clone, Serialize)]
pub struct Satellite {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub position: GeoPosition,
    /// Orbital velocity in km/s.
    pub velocity: f64,
    pub status: &'static str,
}

/// (id, type, nominal altitude km)
const SATELLITE_CATALOG: [(&str, &str, f64); 5] = [
    ("NOAA-19", "Weather", 870.0),
    ("GPS-IIF-2", "Navigation", 20200.0),
    ("STARLINK-1007", "Communication", 550.0),
    ("HUBBLE", "Scientific", 547.0),
    ("TERRA", "Earth Observation", 705.0),
];

pub fn satellites<R: Rng + ?Sized>(rng: &mut R) -> Vec<Satellite> {
    SATELLITE_CATALOG
        .iter()
        .map(|(id, kind, altitude)| Satellite {
            id,
            name: id,
            kind,
            position: GeoPosition {
                latitude: round_to(rng.gen_range(-80.0..=80.0), 4),
                longitude: round_to(rng.gen_range(-180.0..=180.0), 4),
                altitude: *altitude,
            },
            velocity: round_to(7.66 + rng.gen_range(-0.5..=0.5), 2),
            status: "operational",
        })
        .collect()
}

/// Tracked piece of space debris.
#[derive(Debug, Clone, Serialize)]
pub struct DebrisObject {
    pub id: String,
    pub position: GeoPosition,
    pub size: &'static str,
    pub risk_level: &'static str,
    /// km/s
    pub velocity: f64,
    pub tracking_confidence: f64,
}

const DEBRIS_SIZES: [&str; 3] = ["small", "medium", "large"];
const RISK_LEVELS: [&str; 3] = ["low", "medium", "high"];

/// Generate the 10-object mock debris field.
pub fn debris_field<R: Rng + ?Sized>(rng: &mut R) -> Vec<DebrisObject> {
    (1..=10)
        .map(|i| DebrisObject {
            id: format!("DEBRIS-{i:04}"),
            position: GeoPosition {
                latitude: round_to(rng.gen_range(-60.0..=60.0), 4),
                longitude: round_to(rng.gen_range(-180.0..=180.0), 4),
                altitude: round_to(rng.gen_range(300.0..=1200.0), 2),
            },
            size: DEBRIS_SIZES.choose(rng).copied().unwrap_or("small"),
            risk_level: RISK_LEVELS.choose(rng).copied().unwrap_or("low"),
            velocity: round_to(rng.gen_range(6.0..=8.0), 2),
            tracking_confidence: round_to(rng.gen_range(0.7..=1.0), 2),
        })
        .collect()
}

pub fn high_risk_count(debris: &[DebrisObject]) -> usize {
    debris.iter().filter(|d| d.risk_level == "high").count()
}
