//! Topic matching and confidence scoring.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::base::{KnowledgeBase, Topic};
use crate::suggestions;

/// Minimum score for a topic to count as matched.
pub const CONFIDENCE_THRESHOLD: f64 = 0.6;

/// Generic replies for queries no topic clears the threshold on.
const FALLBACK_RESPONSES: [&str; 4] = [
    "That's an interesting question about space! While I don't have specific information about that topic, space exploration involves many fascinating aspects like orbital mechanics, life support systems, and the challenges of working in microgravity.",
    "I'd love to help with your space question! Could you be more specific? I have knowledge about astronaut life, spacecraft technology, planetary science, and space missions.",
    "Space is full of amazing phenomena! While I'm not sure about that specific topic, I can tell you about things like how rockets work, life on the International Space Station, or the history of space exploration.",
    "That's a great space-related question! I specialize in topics like astronaut training, spacecraft systems, planetary exploration, and the history of space missions. Could you rephrase your question to be more specific?",
];

/// Response envelope returned for every query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BotReply {
    pub message: String,
    /// Heuristic relevance score in [0, 1], rounded to 2 decimals.
    pub confidence: f64,
    /// Exactly one human-readable source label.
    pub sources: Vec<String>,
    /// 3 follow-ups for a matched topic, 6 for fallback.
    pub suggestions: Vec<String>,
}

/// The knowledge matcher. Stateless beyond its read-only knowledge base,
/// so a shared instance can serve concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct SpaceBot {
    base: KnowledgeBase,
}

impl Default for SpaceBot {
    fn default() -> Self {
        Self::new()
    }
}

impl SpaceBot {
    /// Bot over the built-in knowledge base.
    pub fn new() -> Self {
        Self::with_base(KnowledgeBase::builtin())
    }

    /// Bot over a substituted knowledge base (used by tests).
    pub fn with_base(base: KnowledgeBase) -> Self {
        Self { base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.base
    }

    /// Answer a query using the process-wide entropy source.
    pub fn respond(&self, query: &str) -> BotReply {
        self.respond_with(query, &mut rand::thread_rng())
    }

    /// Answer a query drawing response variety from `rng`.
    ///
    /// Total over any string input: non-matching, empty, or
    /// punctuation-only text yields a fallback reply with confidence 0.0.
    pub fn respond_with<R: Rng + ?Sized>(&self, query: &str, rng: &mut R) -> BotReply {
        let normalized = query.to_lowercase();

        let mut best: Option<&Topic> = None;
        let mut highest = 0.0_f64;
        for topic in self.base.topics() {
            let confidence = score(&normalized, &topic.keywords);
            // Strict > keeps the first topic on ties.
            if confidence > highest {
                highest = confidence;
                best = Some(topic);
            }
        }

        match best.filter(|_| highest >= CONFIDENCE_THRESHOLD) {
            Some(topic) => {
                tracing::debug!(topic = %topic.name, confidence = highest, "topic matched");
                BotReply {
                    message: specific_response(&normalized, topic, rng),
                    confidence: round2(highest),
                    sources: vec![format!("Space Knowledge Base - {}", topic.title())],
                    suggestions: suggestions::topic_suggestions(&topic.name),
                }
            }
            None => BotReply {
                message: FALLBACK_RESPONSES
                    .choose(rng)
                    .map(|s| s.to_string())
                    .unwrap_or_default(),
                confidence: round2(highest),
                sources: vec!["General Space Knowledge".to_string()],
                suggestions: suggestions::general_suggestions(),
            },
        }
    }

    /// Score a query against one topic. Deterministic; exposed for tests.
    pub fn confidence(&self, query: &str, topic: &Topic) -> f64 {
        score(&query.to_lowercase(), &topic.keywords)
    }
}

/// Word tokens: alphanumeric/underscore runs, punctuation as separator.
fn tokens(text: &str) -> Vec<&str> {
    text.split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|t| !t.is_empty())
        .collect()
}

/// Keyword confidence for a normalized query.
///
/// base = fraction of tokens containing any keyword as a substring;
/// each keyword found anywhere in the full query adds a flat 0.3.
/// The exact pass ignores word boundaries and can double count hits
/// already in the base ratio. That quirk is load-bearing: callers
/// depend on the resulting scores, so it is kept as-is.
fn score(normalized: &str, keywords: &[String]) -> f64 {
    let words = tokens(normalized);
    if words.is_empty() {
        return 0.0;
    }

    let hits = words
        .iter()
        .filter(|word| keywords.iter().any(|kw| word.contains(kw.as_str())))
        .count();
    let base = hits as f64 / words.len() as f64;

    let exact = keywords
        .iter()
        .filter(|kw| normalized.contains(kw.as_str()))
        .count();

    (base + exact as f64 * 0.3).min(1.0)
}

/// Pick the canonical response within a matched topic: first response key
/// found as a substring of the query wins, else a uniform random response.
fn specific_response<R: Rng + ?Sized>(normalized: &str, topic: &Topic, rng: &mut R) -> String {
    for (key, response) in &topic.responses {
        if normalized.contains(key.as_str()) {
            return response.clone();
        }
    }
    topic
        .responses
        .choose(rng)
        .map(|(_, response)| response.clone())
        .unwrap_or_default()
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::base::Topic;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_gravity_query_matches_space_basics() {
        let bot = SpaceBot::new();
        let reply = bot.respond_with("Explain gravity", &mut rng());
        // base 1/2 + exact 0.3 = 0.8
        assert_eq!(reply.confidence, 0.8);
        assert_eq!(reply.sources, vec!["Space Knowledge Base - Space Basics"]);
        assert!(reply.message.contains("microgravity"));
        assert_eq!(reply.suggestions.len(), 3);
    }

    #[test]
    fn test_long_gravity_question_dilutes_below_threshold() {
        // Filler words dilute the base ratio: 1/6 + 0.3 ≈ 0.47, so even a
        // clearly on-topic question falls back once it gets wordy enough.
        let bot = SpaceBot::new();
        let reply = bot.respond_with("How does gravity work in space?", &mut rng());
        assert_eq!(reply.confidence, 0.47);
        assert_eq!(reply.sources, vec!["General Space Knowledge"]);
    }

    #[test]
    fn test_training_query_selects_training_response() {
        let bot = SpaceBot::new();
        let reply = bot.respond_with("Tell me about astronaut training", &mut rng());
        assert!(reply.confidence >= CONFIDENCE_THRESHOLD);
        assert_eq!(reply.sources, vec!["Space Knowledge Base - Astronauts"]);
        // "training" is a response key and a substring of the query.
        assert!(reply.message.starts_with("Astronaut training is incredibly rigorous"));
    }

    #[test]
    fn test_gibberish_falls_back() {
        let bot = SpaceBot::new();
        let reply = bot.respond_with("asdkjasdkj qweqwe", &mut rng());
        assert_eq!(reply.confidence, 0.0);
        assert_eq!(reply.sources, vec!["General Space Knowledge"]);
        assert!(FALLBACK_RESPONSES.contains(&reply.message.as_str()));
        assert_eq!(reply.suggestions.len(), 6);
    }

    #[test]
    fn test_empty_and_punctuation_inputs_are_total() {
        let bot = SpaceBot::new();
        for query in ["", "   ", "?!...,;", "\u{1F680}\u{1F680}"] {
            let reply = bot.respond_with(query, &mut rng());
            assert_eq!(reply.confidence, 0.0, "query {query:?}");
            assert_eq!(reply.sources.len(), 1);
        }
    }

    #[test]
    fn test_scoring_is_idempotent() {
        let bot = SpaceBot::new();
        let topic = &bot.knowledge_base().topics()[0];
        let a = bot.confidence("is there gravity in orbit?", topic);
        let b = bot.confidence("is there gravity in orbit?", topic);
        assert_eq!(a, b);
    }

    #[test]
    fn test_case_insensitive_scoring() {
        let bot = SpaceBot::new();
        let topic = &bot.knowledge_base().topics()[0];
        let lower = bot.confidence("gravity", topic);
        assert_eq!(bot.confidence("GRAVITY", topic), lower);
        assert_eq!(bot.confidence("GravITY", topic), lower);
        assert!(lower >= CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_substring_matches_inflected_token() {
        // Token "astronauts" contains keyword "astronaut".
        let bot = SpaceBot::new();
        let reply = bot.respond_with("astronauts", &mut rng());
        assert_eq!(reply.sources, vec!["Space Knowledge Base - Astronauts"]);
        assert!(reply.confidence >= CONFIDENCE_THRESHOLD);
    }

    #[test]
    fn test_exact_boost_saturates_at_one() {
        let bot = SpaceBot::new();
        let topic = &bot.knowledge_base().topics()[0];
        // Every token is a keyword and every keyword is an exact hit.
        let c = bot.confidence("gravity vacuum orbit atmosphere", topic);
        assert_eq!(c, 1.0);
    }

    #[test]
    fn test_tie_break_first_topic_wins() {
        let kb = KnowledgeBase::new(vec![
            Topic::new("alpha", &["comet"], &[("comet", "alpha response")]),
            Topic::new("beta", &["comet"], &[("comet", "beta response")]),
        ]);
        let bot = SpaceBot::with_base(kb);
        let reply = bot.respond_with("comet", &mut rng());
        assert_eq!(reply.message, "alpha response");
        assert_eq!(reply.sources, vec!["Space Knowledge Base - Alpha"]);
    }

    #[test]
    fn test_no_key_match_picks_random_topic_response() {
        let kb = KnowledgeBase::new(vec![Topic::new(
            "probes",
            &["voyager", "probe"],
            &[("pioneer", "pioneer response"), ("cassini", "cassini response")],
        )]);
        let bot = SpaceBot::with_base(kb);
        // Matches the topic but neither response key.
        let reply = bot.respond_with("voyager probe", &mut rng());
        assert!(reply.confidence >= CONFIDENCE_THRESHOLD);
        assert!(["pioneer response", "cassini response"].contains(&reply.message.as_str()));
    }

    #[test]
    fn test_confidence_bounds_and_single_source() {
        let bot = SpaceBot::new();
        let queries = [
            "gravity",
            "tell me about the iss and rockets and mars",
            "what",
            "a b c d e f g",
            "orbit orbit orbit orbit",
        ];
        for query in queries {
            let reply = bot.respond_with(query, &mut rng());
            assert!((0.0..=1.0).contains(&reply.confidence), "query {query:?}");
            assert_eq!(reply.sources.len(), 1);
        }
    }

    #[test]
    fn test_confidence_rounded_to_two_decimals() {
        let bot = SpaceBot::new();
        // 1 keyword token out of 3 → base 1/3, + 0.3 exact = 0.6333…
        let reply = bot.respond_with("explain gravity please", &mut rng());
        assert_eq!(reply.confidence, 0.63);
    }

    #[test]
    fn test_exact_match_crosses_word_boundaries() {
        // "space race" is a keyword containing a space; it matches the
        // full query string even though no single token contains it.
        let bot = SpaceBot::new();
        let topic = bot
            .knowledge_base()
            .topics()
            .iter()
            .find(|t| t.name == "history")
            .unwrap();
        let c = bot.confidence("the space race era", topic);
        // base 0/4 (no token contains "space race"), exact boost 0.3.
        assert!((c - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_empty_knowledge_base_falls_back() {
        let bot = SpaceBot::with_base(KnowledgeBase::new(vec![]));
        let reply = bot.respond_with("gravity", &mut rng());
        assert_eq!(reply.confidence, 0.0);
        assert_eq!(reply.sources, vec!["General Space Knowledge"]);
    }
}
