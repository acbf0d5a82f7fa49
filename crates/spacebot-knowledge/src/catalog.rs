//! Topic metadata served by the topics endpoint.

use serde::Serialize;

/// Human-facing description of a knowledge topic.
#[derive(Debug, Clone, Serialize)]
pub struct TopicInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub examples: [&'static str; 3],
}

/// Catalog of available knowledge topics, in knowledge-base order.
pub fn topic_catalog() -> &'static [TopicInfo] {
    &[
        TopicInfo {
            id: "space_basics",
            name: "Space Basics",
            description: "Fundamental concepts about space and space travel",
            examples: ["gravity", "vacuum of space", "orbital mechanics"],
        },
        TopicInfo {
            id: "astronauts",
            name: "Astronaut Life",
            description: "Daily life, training, and experiences of astronauts",
            examples: ["astronaut training", "living in microgravity", "spacewalks"],
        },
        TopicInfo {
            id: "spacecraft",
            name: "Spacecraft & Technology",
            description: "Rockets, space stations, and space technology",
            examples: ["rocket engines", "ISS modules", "space suits"],
        },
        TopicInfo {
            id: "missions",
            name: "Space Missions",
            description: "Past, present, and future space missions",
            examples: ["Apollo missions", "Mars rovers", "Voyager probes"],
        },
        TopicInfo {
            id: "planets",
            name: "Planetary Science",
            description: "Information about planets and celestial bodies",
            examples: ["Mars exploration", "Jupiter's moons", "Saturn's rings"],
        },
        TopicInfo {
            id: "history",
            name: "Space History",
            description: "Historical milestones in space exploration",
            examples: ["first satellite", "moon landing", "space race"],
        },
    ]
}
