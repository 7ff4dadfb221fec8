//! Typed model of universal router calls.
//!
//! A router call arrives as untyped JSON describing an ordered list of
//! commands, each carrying named parameters. This crate defines the closed
//! set of shapes such a call may take once it has been validated, together
//! with the rejection taxonomy produced when it does not conform.

pub mod call;
pub mod commands;
pub mod common;
pub mod errors;
pub mod params;
pub mod policy;

pub use call::*;
pub use commands::*;
pub use common::*;
pub use errors::*;
pub use params::*;
pub use policy::*;
