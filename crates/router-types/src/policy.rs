//! Validation policy knobs.

use serde::{Deserialize, Serialize};

/// Treatment of a `commandName` absent from the command table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownCommandNames {
	/// Refuse the command as a shape mismatch.
	#[default]
	Reject,
	/// Admit it as a fallback command, provided its opcode is known.
	AcceptAsFallback,
}

/// Policy applied by the call validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ValidationPolicy {
	#[serde(default)]
	pub unknown_command_names: UnknownCommandNames,
}

impl ValidationPolicy {
	pub fn strict() -> Self {
		Self::default()
	}

	pub fn permissive() -> Self {
		Self {
			unknown_command_names: UnknownCommandNames::AcceptAsFallback,
		}
	}
}
