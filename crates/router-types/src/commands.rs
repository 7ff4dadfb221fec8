//! Router command tags and their fixed opcodes.

use serde::{Serialize, Serializer};
use std::fmt;

/// Numeric instruction tag as it appears in `commandType`.
pub type OpCode = u8;

/// Every command the router understands.
///
/// The name and opcode of each variant are a wire contract shared with the
/// request decoder and must stay byte-for-byte stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandName {
	V3SwapExactIn,
	V3SwapExactOut,
	Permit2TransferFrom,
	Permit2PermitBatch,
	Sweep,
	Transfer,
	PayPortion,
	V2SwapExactIn,
	V2SwapExactOut,
	Permit2Permit,
	WrapEth,
	UnwrapWeth,
	Permit2TransferFromBatch,
	BalanceCheckErc20,
	V4Swap,
	V3PositionManagerPermit,
	V3PositionManagerCall,
	V4InitializePool,
	V4PositionManagerCall,
	ExecuteSubPlan,
}

impl CommandName {
	/// All commands in opcode order.
	pub const ALL: [CommandName; 20] = [
		Self::V3SwapExactIn,
		Self::V3SwapExactOut,
		Self::Permit2TransferFrom,
		Self::Permit2PermitBatch,
		Self::Sweep,
		Self::Transfer,
		Self::PayPortion,
		Self::V2SwapExactIn,
		Self::V2SwapExactOut,
		Self::Permit2Permit,
		Self::WrapEth,
		Self::UnwrapWeth,
		Self::Permit2TransferFromBatch,
		Self::BalanceCheckErc20,
		Self::V4Swap,
		Self::V3PositionManagerPermit,
		Self::V3PositionManagerCall,
		Self::V4InitializePool,
		Self::V4PositionManagerCall,
		Self::ExecuteSubPlan,
	];

	pub const fn opcode(self) -> OpCode {
		match self {
			Self::V3SwapExactIn => 0x00,
			Self::V3SwapExactOut => 0x01,
			Self::Permit2TransferFrom => 0x02,
			Self::Permit2PermitBatch => 0x03,
			Self::Sweep => 0x04,
			Self::Transfer => 0x05,
			Self::PayPortion => 0x06,
			Self::V2SwapExactIn => 0x08,
			Self::V2SwapExactOut => 0x09,
			Self::Permit2Permit => 0x0a,
			Self::WrapEth => 0x0b,
			Self::UnwrapWeth => 0x0c,
			Self::Permit2TransferFromBatch => 0x0d,
			Self::BalanceCheckErc20 => 0x0e,
			Self::V4Swap => 0x10,
			Self::V3PositionManagerPermit => 0x11,
			Self::V3PositionManagerCall => 0x12,
			Self::V4InitializePool => 0x13,
			Self::V4PositionManagerCall => 0x14,
			Self::ExecuteSubPlan => 0x21,
		}
	}

	pub const fn as_str(self) -> &'static str {
		match self {
			Self::V3SwapExactIn => "V3_SWAP_EXACT_IN",
			Self::V3SwapExactOut => "V3_SWAP_EXACT_OUT",
			Self::Permit2TransferFrom => "PERMIT2_TRANSFER_FROM",
			Self::Permit2PermitBatch => "PERMIT2_PERMIT_BATCH",
			Self::Sweep => "SWEEP",
			Self::Transfer => "TRANSFER",
			Self::PayPortion => "PAY_PORTION",
			Self::V2SwapExactIn => "V2_SWAP_EXACT_IN",
			Self::V2SwapExactOut => "V2_SWAP_EXACT_OUT",
			Self::Permit2Permit => "PERMIT2_PERMIT",
			Self::WrapEth => "WRAP_ETH",
			Self::UnwrapWeth => "UNWRAP_WETH",
			Self::Permit2TransferFromBatch => "PERMIT2_TRANSFER_FROM_BATCH",
			Self::BalanceCheckErc20 => "BALANCE_CHECK_ERC20",
			Self::V4Swap => "V4_SWAP",
			Self::V3PositionManagerPermit => "V3_POSITION_MANAGER_PERMIT",
			Self::V3PositionManagerCall => "V3_POSITION_MANAGER_CALL",
			Self::V4InitializePool => "V4_INITIALIZE_POOL",
			Self::V4PositionManagerCall => "V4_POSITION_MANAGER_CALL",
			Self::ExecuteSubPlan => "EXECUTE_SUB_PLAN",
		}
	}

	/// Looks up a command by its wire name. Matching is case-sensitive.
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|command| command.as_str() == name)
	}

	pub fn from_opcode(opcode: u64) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|command| u64::from(command.opcode()) == opcode)
	}

	/// Whether this command belongs to the swap family.
	pub const fn is_swap(self) -> bool {
		matches!(
			self,
			Self::V2SwapExactIn
				| Self::V2SwapExactOut
				| Self::V3SwapExactIn
				| Self::V3SwapExactOut
				| Self::V4Swap
		)
	}
}

impl fmt::Display for CommandName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Serialize for CommandName {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(self.as_str())
	}
}
