//! Current crew roster.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Astronaut {
    pub name: &'static str,
    pub nationality: &'static str,
    pub agency: &'static str,
    pub mission: &'static str,
    pub launch_date: &'static str,
    pub days_in_space: i64,
    pub role: &'static str,
}

const EXPEDITION_LAUNCH: &str = "2022-09-21";

/// (name, nationality, agency, role)
const ROSTER: [(&str, &str, &str, &str); 3] = [
    ("Frank Rubio", "USA", "NASA", "Flight Engineer"),
    ("Sergey Prokopyev", "Russia", "Roscosmos", "Commander"),
    ("Dmitri Petelin", "Russia", "Roscosmos", "Flight Engineer"),
];

/// The Expedition 68-69 roster with days in space computed against `now`.
pub fn current_astronauts(now: DateTime<Utc>) -> Vec<Astronaut> {
    let launch = NaiveDate::parse_from_str(EXPEDITION_LAUNCH, "%Y-%m-%d").unwrap_or_default();
    let days = (now.date_naive() - launch).num_days();
    ROSTER
        .iter()
        .map(|(name, nationality, agency, role)| Astronaut {
            name,
            nationality,
            agency,
            mission: "ISS Expedition 68-69",
            launch_date: EXPEDITION_LAUNCH,
            days_in_space: days,
            role,
        })
        .collect()
}

/// Integer average, matching the wire format.
pub fn average_days_in_space(crew: &[Astronaut]) -> i64 {
    if crew.is_empty() {
        return 0;
    }
    crew.iter().map(|a| a.days_in_space).sum::<i64>() / crew.len() as i64
}
