//! Event filtering core
//!
//! A pure, synchronous filter over an in-memory event dataset. Events are
//! selected by type, inclusive timestamp range, and attribute-value
//! criteria, then projected down to a requested subset of attributes.
//!
//! # Core Types
//!
//! - [`EventDataset`] - the input document (`events` sequence)
//! - [`EventRecord`] - one timestamped, typed record with named attributes
//! - [`EventQuery`] - the filter criteria with documented defaults
//! - [`FilterCriterion`] - one attribute/value-set constraint
//! - [`FilteredEvent`] - a projected output record
//!
//! # Errors
//!
//! [`filter_events`] fails only when a query boundary timestamp
//! (`start_timestamp`/`end_timestamp`) cannot be parsed. Anything wrong with
//! an individual event (missing fields, malformed timestamps, criteria
//! naming absent attributes) excludes or omits, never errors.

mod filter;
mod types;

pub use filter::{FilterError, filter_events};
pub use types::{EventDataset, EventQuery, EventRecord, FilterCriterion, FilteredEvent};
