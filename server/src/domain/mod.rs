//! Domain logic for event dataset preprocessing
//!
//! - `events` - event filtering and attribute projection

pub mod events;
