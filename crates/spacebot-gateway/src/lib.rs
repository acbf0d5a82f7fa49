//! # SpaceBot Gateway
//!
//! HTTP API for the space knowledge bot and mock telemetry feeds.

pub mod routes;
pub mod server;

pub use server::{AppState, build_router, start};
