//! Follow-up and conversation-starter suggestion pools.

use rand::Rng;
use rand::seq::SliceRandom;

/// Curated 3-item follow-up lists per topic.
const TOPIC_SUGGESTIONS: &[(&str, [&str; 3])] = &[
    (
        "space_basics",
        [
            "How does gravity work in space?",
            "Why is space a vacuum?",
            "How do satellites stay in orbit?",
        ],
    ),
    (
        "astronauts",
        [
            "How do astronauts train for space?",
            "What is it like to sleep in space?",
            "How do astronauts exercise in microgravity?",
        ],
    ),
    (
        "spacecraft",
        [
            "How do rockets work?",
            "Tell me about the International Space Station",
            "What are different types of spacecraft?",
        ],
    ),
    (
        "missions",
        [
            "Tell me about the Apollo moon missions",
            "What are the current Mars missions?",
            "What was the first space mission?",
        ],
    ),
    (
        "planets",
        [
            "What makes Mars special?",
            "Tell me about Jupiter's moons",
            "Why does Saturn have rings?",
        ],
    ),
    (
        "history",
        [
            "What was the Space Race?",
            "Who was the first person in space?",
            "When was the first satellite launched?",
        ],
    ),
];

/// General 6-item list used for fallback replies and unrecognized topics.
const GENERAL_SUGGESTIONS: [&str; 6] = [
    "How does a rocket work?",
    "What is life like on the ISS?",
    "Tell me about Mars exploration",
    "What was the Apollo program?",
    "How do astronauts train?",
    "What are the challenges of space travel?",
];

/// Conversation starters served by the suggestions endpoint.
const STARTER_POOL: [&str; 12] = [
    "How does a rocket work?",
    "Tell me about the International Space Station",
    "What is it like to be an astronaut?",
    "How do astronauts sleep in space?",
    "What are the challenges of living in space?",
    "How fast does the ISS travel?",
    "What is the history of space exploration?",
    "How do space suits protect astronauts?",
    "What is the future of Mars exploration?",
    "How do satellites stay in orbit?",
    "What is space debris and why is it dangerous?",
    "How do astronauts train for space missions?",
];

/// Follow-up suggestions for a matched topic: the topic's curated 3-item
/// list, or the general list when the topic has no curated entry.
pub fn topic_suggestions(topic: &str) -> Vec<String> {
    TOPIC_SUGGESTIONS
        .iter()
        .find(|(name, _)| *name == topic)
        .map(|(_, list)| list.iter().map(|s| s.to_string()).collect())
        .unwrap_or_else(general_suggestions)
}

/// The fixed general suggestion list.
pub fn general_suggestions() -> Vec<String> {
    GENERAL_SUGGESTIONS.iter().map(|s| s.to_string()).collect()
}

/// The full conversation-starter pool.
pub fn starter_pool() -> &'static [&'static str] {
    &STARTER_POOL
}

/// Sample 6 distinct conversation starters.
pub fn sample_starters<R: Rng + ?Sized>(rng: &mut R) -> Vec<String> {
    STARTER_POOL
        .choose_multiple(rng, 6)
        .map(|s| s.to_string())
        .collect()
}
