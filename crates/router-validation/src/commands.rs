//! Command registry.
//!
//! A command is keyed by its `(commandName, commandType)` pair. Swap-family
//! pairs get a strict variant. Every other table entry, and unknown names
//! when the policy admits them, lands in the fallback variant, which still
//! requires a known opcode.

use crate::params::{classify_parameter, classify_v4_parameter};
use crate::primitives::type_name;
use router_types::{
	Command, CommandName, FallbackCommand, Parameter, RejectionError, Result,
	UnknownCommandNames, V4SwapParameter, ValidationPolicy,
};
use serde_json::Value;
use tracing::{debug, warn};

/// Classifies a raw command under the default policy.
pub fn classify_command(raw: &Value) -> Result<Command> {
	classify_command_with_policy(raw, ValidationPolicy::default())
}

pub fn classify_command_with_policy(raw: &Value, policy: ValidationPolicy) -> Result<Command> {
	let map = raw.as_object().ok_or_else(|| {
		RejectionError::shape("", format!("expected command object, got {}", type_name(raw)))
	})?;

	let name = match map.get("commandName") {
		Some(Value::String(name)) => name.as_str(),
		Some(other) => {
			return Err(RejectionError::shape(
				"commandName",
				format!("expected string, got {}", type_name(other)),
			))
		}
		None => return Err(RejectionError::shape("commandName", "missing command name")),
	};

	let command_type = match map.get("commandType") {
		Some(value) => value.as_u64().ok_or_else(|| {
			RejectionError::shape(
				"commandType",
				format!("expected non-negative integer opcode, got {}", value),
			)
		})?,
		None => return Err(RejectionError::shape("commandType", "missing command type")),
	};

	let params = match map.get("params") {
		Some(Value::Array(params)) => params,
		Some(other) => {
			return Err(RejectionError::shape(
				"params",
				format!("expected array, got {}", type_name(other)),
			))
		}
		None => return Err(RejectionError::shape("params", "missing command params")),
	};

	let command = match CommandName::from_name(name) {
		Some(known) => {
			if u64::from(known.opcode()) != command_type {
				return Err(RejectionError::TagOpcodeInconsistency {
					field: String::new(),
					command_name: name.to_string(),
					command_type,
				});
			}
			classify_known(known, params)?
		}
		None => classify_unknown(name, command_type, params, policy)?,
	};

	debug!(
		"Classified command {} (opcode {:#04x}) with {} params",
		command.command_name(),
		command.command_type(),
		params.len()
	);
	Ok(command)
}

fn classify_known(known: CommandName, params: &[Value]) -> Result<Command> {
	let command = match known {
		CommandName::V2SwapExactIn => Command::V2SwapExactIn(general_params(params)?),
		CommandName::V2SwapExactOut => Command::V2SwapExactOut(general_params(params)?),
		CommandName::V3SwapExactIn => Command::V3SwapExactIn(general_params(params)?),
		CommandName::V3SwapExactOut => Command::V3SwapExactOut(general_params(params)?),
		CommandName::V4Swap => Command::V4Swap(v4_params(params)?),
		other => Command::Fallback(FallbackCommand {
			command_name: other.as_str().to_string(),
			command_type: other.opcode(),
			params: general_params(params)?,
		}),
	};
	Ok(command)
}

fn classify_unknown(
	name: &str,
	command_type: u64,
	params: &[Value],
	policy: ValidationPolicy,
) -> Result<Command> {
	if policy.unknown_command_names == UnknownCommandNames::Reject {
		return Err(RejectionError::shape(
			"commandName",
			format!("'{}' is not a known router command", name),
		));
	}

	let opcode = CommandName::from_opcode(command_type)
		.map(CommandName::opcode)
		.ok_or_else(|| {
			RejectionError::shape(
				"commandType",
				format!("{} is not a known router opcode", command_type),
			)
		})?;

	warn!(
		"Admitting unknown command name '{}' with opcode {:#04x} as fallback",
		name, opcode
	);
	Ok(Command::Fallback(FallbackCommand {
		command_name: name.to_string(),
		command_type: opcode,
		params: general_params(params)?,
	}))
}

fn general_params(params: &[Value]) -> Result<Vec<Parameter>> {
	params
		.iter()
		.enumerate()
		.map(|(i, param)| {
			let param =
				classify_parameter(param).map_err(|e| e.prefixed(&format!("params[{}]", i)))?;
			if param.is_fallback() {
				debug!("Parameter '{}' is not modeled, keeping it opaque", param.name());
			}
			Ok(param)
		})
		.collect()
}

fn v4_params(params: &[Value]) -> Result<Vec<V4SwapParameter>> {
	params
		.iter()
		.enumerate()
		.map(|(i, param)| {
			classify_v4_parameter(param).map_err(|e| e.prefixed(&format!("params[{}]", i)))
		})
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use router_types::{Amount, RejectionKind};
	use serde_json::json;

	fn command(name: &str, opcode: u64) -> Value {
		json!({ "commandName": name, "commandType": opcode, "params": [] })
	}

	#[test]
	fn test_every_table_pair_validates_with_empty_params() {
		for known in CommandName::ALL {
			let command = classify_command(&command(known.as_str(), u64::from(known.opcode())))
				.unwrap();
			assert_eq!(command.command_name(), known.as_str());
			assert_eq!(command.command_type(), known.opcode());
			assert_eq!(command.is_fallback(), !known.is_swap());
		}
	}

	#[test]
	fn test_mismatched_pairs_are_inconsistent() {
		for known in CommandName::ALL {
			for other in CommandName::ALL.into_iter().filter(|other| *other != known) {
				let error =
					classify_command(&command(known.as_str(), u64::from(other.opcode())))
						.unwrap_err();
				assert_eq!(error.kind(), RejectionKind::TagOpcodeInconsistency);
			}

			let error = classify_command(&command(known.as_str(), 0x7f)).unwrap_err();
			assert_eq!(
				error,
				RejectionError::TagOpcodeInconsistency {
					field: String::new(),
					command_name: known.as_str().to_string(),
					command_type: 0x7f,
				}
			);
		}
	}

	#[test]
	fn test_classic_swap_params() {
		let raw = json!({
			"commandName": "V2_SWAP_EXACT_OUT",
			"commandType": 9,
			"params": [
				{ "name": "amountOut", "value": "42" },
				{ "name": "amountInMax", "value": "50" },
				{ "name": "recipient", "value": "0x01" },
			]
		});

		let Command::V2SwapExactOut(params) = classify_command(&raw).unwrap() else {
			panic!("expected V2_SWAP_EXACT_OUT");
		};
		assert_eq!(params[0], Parameter::AmountOut(Amount::from(42u64)));
		assert_eq!(params[1], Parameter::AmountInMax(Amount::from(50u64)));
		assert!(params[2].is_fallback());
	}

	#[test]
	fn test_bad_parameter_rejects_matched_command() {
		let raw = json!({
			"commandName": "V3_SWAP_EXACT_IN",
			"commandType": 0,
			"params": [
				{ "name": "amountIn", "value": "500000" },
				{ "name": "amountOutMin", "value": "-1" },
			]
		});

		let error = classify_command(&raw).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation);
		assert_eq!(error.field(), "params[1].value");
	}

	#[test]
	fn test_v4_swap_restricts_parameter_union() {
		let raw = json!({
			"commandName": "V4_SWAP",
			"commandType": 16,
			"params": [{ "name": "amountIn", "value": "1" }]
		});

		let error = classify_command(&raw).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ShapeMismatch);
		assert_eq!(error.field(), "params[0].name");
	}

	#[test]
	fn test_fallback_command_uses_general_union() {
		let raw = json!({
			"commandName": "WRAP_ETH",
			"commandType": 11,
			"params": [
				{ "name": "recipient", "value": "0x0000000000000000000000000000000000000002" },
				{ "name": "amountMin", "value": "1000" },
			]
		});

		let Command::Fallback(fallback) = classify_command(&raw).unwrap() else {
			panic!("expected fallback command");
		};
		assert_eq!(fallback.known_name(), Some(CommandName::WrapEth));
		assert_eq!(fallback.params.len(), 2);
		assert!(fallback.params.iter().all(Parameter::is_fallback));
	}

	#[test]
	fn test_unknown_name_policy() {
		let raw = command("SEAPORT_V2", 0x0b);

		let error = classify_command(&raw).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ShapeMismatch);
		assert_eq!(error.field(), "commandName");

		let command = classify_command_with_policy(&raw, ValidationPolicy::permissive()).unwrap();
		assert_eq!(command.command_name(), "SEAPORT_V2");
		assert_eq!(command.command_type(), 0x0b);
		assert!(command.is_fallback());
	}

	#[test]
	fn test_unknown_opcode_is_always_rejected() {
		let error =
			classify_command_with_policy(&command("SEAPORT_V2", 0x07), ValidationPolicy::permissive())
				.unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ShapeMismatch);
		assert_eq!(error.field(), "commandType");
	}

	#[test]
	fn test_missing_discriminants() {
		for (raw, field) in [
			(json!({ "commandType": 0, "params": [] }), "commandName"),
			(json!({ "commandName": "SWEEP", "params": [] }), "commandType"),
			(json!({ "commandName": "SWEEP", "commandType": 4 }), "params"),
			(json!({ "commandName": "SWEEP", "commandType": "4", "params": [] }), "commandType"),
			(json!({ "commandName": "SWEEP", "commandType": -4, "params": [] }), "commandType"),
			(json!({ "commandName": "SWEEP", "commandType": 4, "params": {} }), "params"),
		] {
			let error = classify_command(&raw).unwrap_err();
			assert_eq!(error.kind(), RejectionKind::ShapeMismatch, "{}", raw);
			assert_eq!(error.field(), field);
		}
	}
}
