//! # SpaceBot Core
//!
//! Shared configuration and error types used by every SpaceBot crate.

pub mod config;
pub mod error;

pub use config::SpaceBotConfig;
pub use error::{Result, SpaceBotError};
