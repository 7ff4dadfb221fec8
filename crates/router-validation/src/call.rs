//! Call validator.

use crate::commands::classify_command_with_policy;
use crate::primitives::type_name;
use router_types::{Call, RejectionError, Result, ValidationPolicy};
use serde_json::Value;
use tracing::{debug, info};

/// Validates whole router calls under a fixed policy.
///
/// Holds no state beyond the policy, so one validator may be shared freely
/// between threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CallValidator {
	policy: ValidationPolicy,
}

impl CallValidator {
	pub fn new(policy: ValidationPolicy) -> Self {
		Self { policy }
	}

	pub fn policy(&self) -> ValidationPolicy {
		self.policy
	}

	/// Validates `{ commands: [..] }`, keeping command order.
	///
	/// The first command that fails rejects the whole call.
	pub fn validate(&self, raw: &Value) -> Result<Call> {
		let map = raw.as_object().ok_or_else(|| {
			RejectionError::shape("", format!("expected call object, got {}", type_name(raw)))
		})?;

		let commands = match map.get("commands") {
			Some(Value::Array(commands)) => commands,
			Some(other) => {
				return Err(RejectionError::shape(
					"commands",
					format!("expected array, got {}", type_name(other)),
				))
			}
			None => return Err(RejectionError::shape("commands", "missing commands")),
		};

		let commands = commands
			.iter()
			.enumerate()
			.map(|(i, command)| {
				classify_command_with_policy(command, self.policy)
					.map_err(|e| e.prefixed(&format!("commands[{}]", i)))
			})
			.collect::<Result<Vec<_>>>()
			.map_err(|e| {
				debug!("Rejected router call: {}", e);
				e
			})?;

		info!("Validated router call with {} commands", commands.len());
		Ok(Call::new(commands))
	}

	/// Parses JSON text and validates it. Malformed JSON is a shape mismatch.
	pub fn validate_json(&self, text: &str) -> Result<Call> {
		let raw: Value = serde_json::from_str(text)
			.map_err(|e| RejectionError::shape("", format!("invalid JSON: {}", e)))?;
		self.validate(&raw)
	}
}

/// Validates a raw call under the default policy.
pub fn validate_call(raw: &Value) -> Result<Call> {
	CallValidator::default().validate(raw)
}

pub fn validate_call_json(text: &str) -> Result<Call> {
	CallValidator::default().validate_json(text)
}
