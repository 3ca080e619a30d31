//! EventSift server library
//!
//! A stateless preprocessing service for event datasets: filter timestamped
//! events by type, time range, and attribute values, then project the
//! survivors down to a requested attribute subset.
//!
//! - [`domain::events`] - the event filtering core
//! - [`api`] - HTTP boundary (axum router, routes, error shapes)
//! - [`core`] - application shell (CLI, config, shutdown, banner)

pub mod api;
mod app;
pub mod core;
pub mod domain;
pub mod utils;
