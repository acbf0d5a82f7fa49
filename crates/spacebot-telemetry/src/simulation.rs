//! Physics-flavored simulations: launch trajectory, orbit, space weather.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::Serialize;

use crate::round_to;

const EARTH_RADIUS_KM: f64 = 6371.0;
const GRAVITY: f64 = 9.81;

/// One sample of a simulated launch.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryPoint {
    /// Seconds since liftoff.
    pub time: u32,
    pub altitude: f64,
    pub velocity: f64,
    pub fuel_remaining: f64,
}

/// Simulate a 300-second launch, sampled every 5 seconds.
pub fn rocket_trajectory<R: Rng + ?Sized>(rng: &mut R) -> Vec<TrajectoryPoint> {
    (0..=300)
        .step_by(5)
        .map(|t| {
            let tf = t as f64;
            let altitude =
                (tf * 150.0) - (0.5 * GRAVITY * (tf / 10.0).powi(2)) + rng.gen_range(-100.0..=100.0);
            let velocity = 150.0 - (GRAVITY * tf / 10.0) + rng.gen_range(-20.0..=20.0);
            TrajectoryPoint {
                time: t,
                altitude: round_to(altitude.max(0.0), 2),
                velocity: round_to(velocity, 2),
                fuel_remaining: (100.0 - tf / 3.0).max(0.0),
            }
        })
        .collect()
}

pub fn max_altitude(trajectory: &[TrajectoryPoint]) -> f64 {
    trajectory.iter().map(|p| p.altitude).fold(0.0, f64::max)
}

/// One step of a circular orbit.
#[derive(Debug, Clone, Serialize)]
pub struct OrbitalPoint {
    pub time_step: u32,
    pub x: f64,
    pub y: f64,
    pub velocity: f64,
    pub altitude: f64,
}

/// Simulate one circular orbit at roughly ISS altitude in 100 steps.
pub fn orbital_mechanics<R: Rng + ?Sized>(rng: &mut R) -> Vec<OrbitalPoint> {
    let steps = 100u32;
    (0..steps)
        .map(|i| {
            let angle = (i as f64 * 360.0 / steps as f64).to_radians();
            let radius = 6800.0 + rng.gen_range(-50.0..=50.0);
            OrbitalPoint {
                time_step: i,
                x: round_to(radius * angle.cos(), 2),
                y: round_to(radius * angle.sin(), 2),
                velocity: round_to(7.66 + rng.gen_range(-0.1..=0.1), 2),
                altitude: round_to(radius - EARTH_RADIUS_KM, 2),
            }
        })
        .collect()
}

const X_RAY_CLASSES: [&str; 5] = ["A", "B", "C", "M", "X"];
const GEOMAGNETIC_LEVELS: [&str; 5] =
    ["quiet", "unsettled", "active", "minor storm", "major storm"];
const FORECAST_TRENDS: [&str; 3] = ["stable", "increasing", "decreasing"];

/// Current space weather conditions.
#[derive(Debug, Clone, Serialize)]
pub struct SpaceWeather {
    pub solar_wind_speed: f64,
    pub proton_density: f64,
    pub magnetic_field_strength: f64,
    pub kp_index: u8,
    pub solar_flux: f64,
    pub x_ray_class: &'static str,
    pub geomagnetic_activity: &'static str,
    pub forecast: WeatherForecast,
}

#[derive(Debug, Clone, Serialize)]
pub struct WeatherForecast {
    pub next_24h: &'static str,
    pub solar_storm_probability: f64,
}

pub fn space_weather<R: Rng + ?Sized>(rng: &mut R) -> SpaceWeather {
    SpaceWeather {
        solar_wind_speed: round_to(rng.gen_range(300.0..=800.0), 1),
        proton_density: round_to(rng.gen_range(1.0..=15.0), 2),
        magnetic_field_strength: round_to(rng.gen_range(2.0..=25.0), 1),
        kp_index: rng.gen_range(0..=9),
        solar_flux: round_to(rng.gen_range(70.0..=300.0), 1),
        x_ray_class: X_RAY_CLASSES.choose(rng).copied().unwrap_or("A"),
        geomagnetic_activity: GEOMAGNETIC_LEVELS.choose(rng).copied().unwrap_or("quiet"),
        forecast: WeatherForecast {
            next_24h: FORECAST_TRENDS.choose(rng).copied().unwrap_or("stable"),
            solar_storm_probability: round_to(rng.gen_range(0.0..=100.0), 1),
        },
    }
}

/// Alerts accompany elevated geomagnetic activity (Kp above 4).
pub fn weather_alerts(weather: &SpaceWeather) -> Vec<&'static str> {
    if weather.kp_index > 4 {
        vec![
            "Solar wind speed elevated",
            "Moderate geomagnetic activity expected",
        ]
    } else {
        vec![]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_trajectory_shape() {
        let mut rng = StdRng::seed_from_u64(11);
        let traj = rocket_trajectory(&mut rng);
        assert_eq!(traj.len(), 61); // 0..=300 step 5
        assert_eq!(traj[0].time, 0);
        assert_eq!(traj[60].time, 300);
        for p in &traj {
            assert!(p.altitude >= 0.0);
            assert!((0.0..=100.0).contains(&p.fuel_remaining));
        }
        assert_eq!(traj[60].fuel_remaining, 0.0);
        assert!(max_altitude(&traj) > 0.0);
    }

    #[test]
    fn test_orbit_closes_near_iss_altitude() {
        let mut rng = StdRng::seed_from_u64(12);
        let orbit = orbital_mechanics(&mut rng);
        assert_eq!(orbit.len(), 100);
        for p in &orbit {
            // radius 6800 ± 50 km above a 6371 km Earth
            assert!((379.0..=479.0).contains(&p.altitude));
            let r = (p.x * p.x + p.y * p.y).sqrt();
            assert!((6750.0 - 1.0..=6850.0 + 1.0).contains(&r));
        }
    }

    #[test]
    fn test_space_weather_ranges() {
        let mut rng = StdRng::seed_from_u64(13);
        for _ in 0..50 {
            let w = space_weather(&mut rng);
            assert!((300.0..=800.0).contains(&w.solar_wind_speed));
            assert!(w.kp_index <= 9);
            assert!(X_RAY_CLASSES.contains(&w.x_ray_class));
            assert!(GEOMAGNETIC_LEVELS.contains(&w.geomagnetic_activity));
            let alerts = weather_alerts(&w);
            if w.kp_index > 4 {
                assert_eq!(alerts.len(), 2);
            } else {
                assert!(alerts.is_empty());
            }
        }
    }
}
