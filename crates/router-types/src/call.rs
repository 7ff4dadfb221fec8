//! Commands and the calls that sequence them.

use crate::commands::{CommandName, OpCode};
use crate::common::Amount;
use crate::params::{Parameter, V4SwapParameter};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

/// Command that no strict variant claims.
///
/// The opcode is always a member of the command table. The name is a table
/// name paired with that opcode, unless the validator was configured to
/// admit unknown names.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FallbackCommand {
	pub command_name: String,
	pub command_type: OpCode,
	pub params: Vec<Parameter>,
}

impl FallbackCommand {
	/// Table entry for the declared name, if it is one.
	pub fn known_name(&self) -> Option<CommandName> {
		CommandName::from_name(&self.command_name)
	}
}

/// A single router instruction.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
	V2SwapExactIn(Vec<Parameter>),
	V2SwapExactOut(Vec<Parameter>),
	V3SwapExactIn(Vec<Parameter>),
	V3SwapExactOut(Vec<Parameter>),
	V4Swap(Vec<V4SwapParameter>),
	Fallback(FallbackCommand),
}

impl Command {
	pub fn command_name(&self) -> &str {
		match self {
			Self::V2SwapExactIn(_) => CommandName::V2SwapExactIn.as_str(),
			Self::V2SwapExactOut(_) => CommandName::V2SwapExactOut.as_str(),
			Self::V3SwapExactIn(_) => CommandName::V3SwapExactIn.as_str(),
			Self::V3SwapExactOut(_) => CommandName::V3SwapExactOut.as_str(),
			Self::V4Swap(_) => CommandName::V4Swap.as_str(),
			Self::Fallback(command) => &command.command_name,
		}
	}

	pub fn command_type(&self) -> OpCode {
		match self {
			Self::V2SwapExactIn(_) => CommandName::V2SwapExactIn.opcode(),
			Self::V2SwapExactOut(_) => CommandName::V2SwapExactOut.opcode(),
			Self::V3SwapExactIn(_) => CommandName::V3SwapExactIn.opcode(),
			Self::V3SwapExactOut(_) => CommandName::V3SwapExactOut.opcode(),
			Self::V4Swap(_) => CommandName::V4Swap.opcode(),
			Self::Fallback(command) => command.command_type,
		}
	}

	/// General parameters, or `None` for `V4_SWAP`.
	pub fn params(&self) -> Option<&[Parameter]> {
		match self {
			Self::V2SwapExactIn(params)
			| Self::V2SwapExactOut(params)
			| Self::V3SwapExactIn(params)
			| Self::V3SwapExactOut(params) => Some(params.as_slice()),
			Self::Fallback(command) => Some(command.params.as_slice()),
			Self::V4Swap(_) => None,
		}
	}

	pub fn v4_params(&self) -> Option<&[V4SwapParameter]> {
		match self {
			Self::V4Swap(params) => Some(params.as_slice()),
			_ => None,
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback(_))
	}
}

impl Serialize for Command {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("Command", 3)?;
		state.serialize_field("commandName", self.command_name())?;
		state.serialize_field("commandType", &self.command_type())?;
		match self {
			Self::V4Swap(params) => state.serialize_field("params", params)?,
			Self::V2SwapExactIn(params)
			| Self::V2SwapExactOut(params)
			| Self::V3SwapExactIn(params)
			| Self::V3SwapExactOut(params) => state.serialize_field("params", params)?,
			Self::Fallback(command) => state.serialize_field("params", &command.params)?,
		}
		state.end()
	}
}

/// Fully validated router call. Commands keep their execution order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Call {
	pub commands: Vec<Command>,
}

impl Call {
	pub fn new(commands: Vec<Command>) -> Self {
		Self { commands }
	}

	pub fn len(&self) -> usize {
		self.commands.len()
	}

	pub fn is_empty(&self) -> bool {
		self.commands.is_empty()
	}
}

/// Whether a swap fixes its input or its output amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum TradeDirection {
	ExactIn,
	ExactOut,
}

/// Amounts a swap command commits to, as consumed by fee and display code.
///
/// For exact-in swaps `amount_in` is exact and `amount_out` is the minimum
/// accepted. For exact-out swaps `amount_out` is exact and `amount_in` is
/// the maximum spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapAmounts {
	pub direction: TradeDirection,
	pub amount_in: Option<Amount>,
	pub amount_out: Option<Amount>,
}

/// Counts a consumer needs before deciding how to present a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CallSummary {
	pub commands: usize,
	pub swap_commands: usize,
	pub fallback_commands: usize,
	pub fallback_params: usize,
}

impl CallSummary {
	/// True when some part of the call is opaque to swap-specific logic.
	pub fn has_unsupported_parts(&self) -> bool {
		self.fallback_commands > 0 || self.fallback_params > 0
	}
}
