//! Validation and classification of untrusted router calls.
//!
//! Raw JSON flows through four layers, leaves first:
//!
//! - `primitives`: hex-prefix, big-integer and enum-membership checks
//! - `params`: the parameter registries (general and versioned-swap)
//! - `commands`: the command registry, keyed by name and opcode
//! - `call`: the call validator
//!
//! `classify` holds the predicates consumers apply to typed output.
//!
//! Validation is fail-fast. The first violation anywhere in a call rejects
//! the whole call and no partially typed value is returned.

pub mod call;
pub mod classify;
pub mod commands;
pub mod params;
pub mod primitives;

pub use call::{validate_call, validate_call_json, CallValidator};
pub use classify::{
	is_amount_in_max_parameter, is_amount_in_parameter, is_amount_out_min_parameter,
	is_amount_out_parameter, is_swap_command, is_swap_command_value, summarize_call, swap_amounts,
	swap_commands,
};
pub use commands::{classify_command, classify_command_with_policy};
pub use params::{classify_parameter, classify_v4_parameter};
