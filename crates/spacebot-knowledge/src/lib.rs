//! # SpaceBot Knowledge
//!
//! Rule-based space knowledge chatbot. No NLP, no models, no I/O —
//! a fixed in-memory knowledge base and a keyword scoring pass.
//!
//! ## How it works
//! ```text
//! User: "How does gravity work in space?"
//!   ↓ lowercase + word tokens
//! score every topic (keyword hits / tokens + 0.3 per exact hit)
//!   ↓ best topic ≥ 0.6?
//! yes → canonical response for the first matching response key
//! no  → random fallback message
//!   ↓
//! BotReply { message, confidence, sources, suggestions }
//! ```
//!
//! Scoring is deterministic; only response variety (fallback pick,
//! no-specific-key pick, starter sampling) draws from an injected RNG.

pub mod base;
pub mod catalog;
pub mod matcher;
pub mod suggestions;

pub use base::{KnowledgeBase, Topic};
pub use catalog::{TopicInfo, topic_catalog};
pub use matcher::{BotReply, CONFIDENCE_THRESHOLD, SpaceBot};
pub use suggestions::{general_suggestions, sample_starters, starter_pool};
