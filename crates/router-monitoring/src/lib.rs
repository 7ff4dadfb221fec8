//! Log output for the router validation tools.
//!
//! - `tracing`: subscriber setup, human-readable or JSON

pub mod tracing;

pub use crate::tracing::{init_tracing, parse_level, TracingConfig};
