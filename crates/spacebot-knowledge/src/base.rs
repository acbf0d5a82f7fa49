//! Static space knowledge base: topics, keywords, canonical responses.

/// A single knowledge topic.
#[derive(Debug, Clone)]
pub struct Topic {
    /// Internal topic id, e.g. `space_basics`.
    pub name: String,
    /// Lowercase keywords used for scoring.
    pub keywords: Vec<String>,
    /// Ordered (key, response) pairs. The first key found as a substring
    /// of the query selects the response, so order matters.
    pub responses: Vec<(String, String)>,
}

impl Topic {
    pub fn new(name: &str, keywords: &[&str], responses: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            responses: responses
                .iter()
                .map(|(k, r)| (k.to_string(), r.to_string()))
                .collect(),
        }
    }

    /// Human-readable title, e.g. `space_basics` → `Space Basics`.
    pub fn title(&self) -> String {
        self.name
            .split('_')
            .map(|word| {
                let mut chars = word.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                    None => String::new(),
                }
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Immutable collection of topics, in a fixed iteration order.
///
/// Built once at startup and shared read-only; the matcher never
/// mutates it, so it can be handed to concurrent callers freely.
#[derive(Debug, Clone, Default)]
pub struct KnowledgeBase {
    topics: Vec<Topic>,
}

impl KnowledgeBase {
    /// Build a knowledge base from an explicit topic list.
    /// Topic order is the tie-break order during matching.
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }

    /// The built-in space knowledge base.
    pub fn builtin() -> Self {
        Self::new(vec![
            Topic::new(
                "space_basics",
                &["gravity", "vacuum", "orbit", "atmosphere", "pressure", "temperature", "radiation"],
                &[
                    (
                        "gravity",
                        "In space, there's virtually no gravity as we know it on Earth. Astronauts experience microgravity, which makes them appear weightless. This happens because they're in continuous free fall around Earth while the ISS orbits at about 408 km above the surface.",
                    ),
                    (
                        "vacuum",
                        "Space is a near-perfect vacuum, meaning there's almost no air or matter. This creates unique challenges like the need for pressurized spacecraft and space suits to protect astronauts from the harsh environment.",
                    ),
                    (
                        "orbit",
                        "An orbit occurs when an object moves around another object in a curved path due to gravitational forces. Spacecraft maintain orbit by balancing their forward velocity with Earth's gravitational pull.",
                    ),
                ],
            ),
            Topic::new(
                "astronauts",
                &["astronaut", "training", "sleep", "eat", "exercise", "daily life", "spacewalk", "eva"],
                &[
                    (
                        "training",
                        "Astronaut training is incredibly rigorous and takes years. It includes physical fitness, spacecraft systems training, survival training, underwater EVA practice, and learning to work in microgravity using specialized facilities.",
                    ),
                    (
                        "sleep",
                        "Astronauts sleep in sleeping bags attached to walls in small crew quarters. They use eye masks and earplugs since the ISS orbits Earth every 90 minutes, experiencing 16 sunrises and sunsets daily.",
                    ),
                    (
                        "eat",
                        "Space food is specially prepared to prevent crumbs and spills. Astronauts eat rehydrated meals, thermostabilized foods, and fresh fruits when supply missions arrive. They drink through straws from pouches.",
                    ),
                    (
                        "exercise",
                        "Astronauts exercise 2.5 hours daily using specialized equipment like treadmills with harness systems and resistance devices to prevent muscle atrophy and bone loss in microgravity.",
                    ),
                ],
            ),
            Topic::new(
                "spacecraft",
                &["rocket", "iss", "space station", "shuttle", "capsule", "propulsion", "fuel"],
                &[
                    (
                        "rocket",
                        "Rockets work by Newton's third law - for every action, there's an equal and opposite reaction. They burn fuel to create hot gases that are expelled downward, pushing the rocket upward. Modern rockets use liquid oxygen and rocket fuel.",
                    ),
                    (
                        "iss",
                        "The International Space Station is a habitable artificial satellite in low Earth orbit. It's about the size of a football field and travels at 28,000 km/h. It serves as a microgravity research laboratory with crew from multiple countries.",
                    ),
                    (
                        "propulsion",
                        "Spacecraft use various propulsion methods: chemical rockets for launch and major maneuvers, ion thrusters for long-duration missions, and reaction control systems for precise positioning.",
                    ),
                ],
            ),
            Topic::new(
                "missions",
                &["apollo", "mars", "moon", "landing", "rover", "probe", "exploration", "mission"],
                &[
                    (
                        "apollo",
                        "The Apollo program achieved the first human moon landings from 1969-1972. Apollo 11's Neil Armstrong and Buzz Aldrin were the first humans to walk on the moon on July 20, 1969, while Michael Collins orbited above.",
                    ),
                    (
                        "mars",
                        "Mars exploration includes numerous robotic missions. Current rovers like Perseverance search for signs of ancient life and collect samples. Future crewed missions to Mars are planned for the 2030s.",
                    ),
                    (
                        "rover",
                        "Mars rovers are robotic vehicles designed to traverse the Martian surface. They carry scientific instruments to analyze soil, rocks, and atmosphere. Rovers like Curiosity and Perseverance have made groundbreaking discoveries.",
                    ),
                ],
            ),
            Topic::new(
                "planets",
                &["mars", "jupiter", "saturn", "venus", "mercury", "planet", "moon", "rings"],
                &[
                    (
                        "mars",
                        "Mars is called the Red Planet due to iron oxide on its surface. It has seasons like Earth, polar ice caps, and the largest volcano in the solar system (Olympus Mons). A day on Mars is about 24 hours and 37 minutes.",
                    ),
                    (
                        "jupiter",
                        "Jupiter is the largest planet in our solar system with over 80 known moons. Its Great Red Spot is a storm larger than Earth that's been raging for centuries. It acts as a 'cosmic vacuum cleaner' protecting inner planets from asteroids.",
                    ),
                    (
                        "saturn",
                        "Saturn is famous for its spectacular ring system made of ice and rock particles. It's less dense than water and has over 80 moons, including Titan, which has lakes of liquid methane.",
                    ),
                ],
            ),
            Topic::new(
                "history",
                &["sputnik", "gagarin", "armstrong", "space race", "first", "history", "timeline"],
                &[
                    (
                        "sputnik",
                        "Sputnik 1, launched by the Soviet Union on October 4, 1957, was the first artificial satellite. This beach ball-sized satellite started the Space Age and the Space Race between the US and USSR.",
                    ),
                    (
                        "gagarin",
                        "Yuri Gagarin became the first human in space on April 12, 1961, aboard Vostok 1. His 108-minute orbital flight around Earth was a major milestone in human space exploration.",
                    ),
                    (
                        "space race",
                        "The Space Race was a 20th-century competition between the US and Soviet Union to achieve superior spaceflight capabilities. It drove rapid advancement in space technology and culminated in the moon landing.",
                    ),
                ],
            ),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_topic_order() {
        let kb = KnowledgeBase::builtin();
        let names: Vec<&str> = kb.topics().iter().map(|t| t.name.as_str()).collect();
        assert_eq!(
            names,
            ["space_basics", "astronauts", "spacecraft", "missions", "planets", "history"]
        );
    }

    #[test]
    fn test_title_case() {
        let kb = KnowledgeBase::builtin();
        assert_eq!(kb.topics()[0].title(), "Space Basics");
        assert_eq!(kb.topics()[1].title(), "Astronauts");
    }

    #[test]
    fn test_keywords_are_lowercase() {
        for topic in KnowledgeBase::builtin().topics() {
            for kw in &topic.keywords {
                assert_eq!(kw, &kw.to_lowercase(), "keyword not lowercase in {}", topic.name);
            }
        }
    }

    #[test]
    fn test_every_topic_has_responses() {
        for topic in KnowledgeBase::builtin().topics() {
            assert!(!topic.responses.is_empty(), "{} has no responses", topic.name);
        }
    }
}
