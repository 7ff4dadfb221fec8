//! Named command parameters.
//!
//! Classic commands accept the general [`Parameter`] union, which ends in an
//! opaque fallback arm. The versioned `V4_SWAP` command accepts only
//! [`V4SwapParameter`], which has no fallback.

use crate::common::{Amount, HexString};
use serde::ser::{SerializeSeq, SerializeStruct};
use serde::{Serialize, Serializer};
use serde_json::Value;

pub const AMOUNT_IN: &str = "amountIn";
pub const AMOUNT_IN_MAX: &str = "amountInMax";
pub const AMOUNT_OUT: &str = "amountOut";
pub const AMOUNT_OUT_MIN: &str = "amountOutMin";
pub const PATH: &str = "path";
pub const PAYER_IS_USER: &str = "payerIsUser";

pub const SWAP_EXACT_IN: &str = "SWAP_EXACT_IN";
pub const SWAP_EXACT_OUT: &str = "SWAP_EXACT_OUT";
pub const SWAP_EXACT_IN_SINGLE: &str = "SWAP_EXACT_IN_SINGLE";
pub const SWAP_EXACT_OUT_SINGLE: &str = "SWAP_EXACT_OUT_SINGLE";

/// Name of every entry nested inside a versioned swap parameter.
pub const SWAP_STEP: &str = "swap";

/// Fee tiers of classic concentrated-liquidity pools, in hundredths of a bip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FeeTier {
	Lowest,
	Low200,
	Low300,
	Low400,
	Low,
	Medium,
	High,
}

impl FeeTier {
	pub const ALL: [FeeTier; 7] = [
		Self::Lowest,
		Self::Low200,
		Self::Low300,
		Self::Low400,
		Self::Low,
		Self::Medium,
		Self::High,
	];

	pub const fn as_u32(self) -> u32 {
		match self {
			Self::Lowest => 100,
			Self::Low200 => 200,
			Self::Low300 => 300,
			Self::Low400 => 400,
			Self::Low => 500,
			Self::Medium => 3000,
			Self::High => 10000,
		}
	}

	pub fn from_u64(value: u64) -> Option<Self> {
		Self::ALL
			.into_iter()
			.find(|tier| u64::from(tier.as_u32()) == value)
	}
}

impl Serialize for FeeTier {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_u32(self.as_u32())
	}
}

/// One pool traversal of a classic multi-hop route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathHop {
	pub token_in: HexString,
	pub token_out: HexString,
	pub fee: FeeTier,
}

/// Identifies a versioned pool.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolKey {
	pub currency0: HexString,
	pub currency1: HexString,
	pub fee: i64,
	pub tick_spacing: i64,
	pub hooks: String,
}

/// One hop of a versioned multi-hop route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PathKey {
	pub intermediate_currency: HexString,
	pub fee: i64,
	pub tick_spacing: i64,
	pub hooks: HexString,
	pub hook_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapExactInSingle {
	pub pool_key: PoolKey,
	pub zero_for_one: bool,
	pub amount_in: Amount,
	pub amount_out_minimum: Amount,
	pub sqrt_price_limit_x96: Amount,
	pub hook_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapExactOutSingle {
	pub pool_key: PoolKey,
	pub zero_for_one: bool,
	pub amount_out: Amount,
	pub amount_in_maximum: Amount,
	pub sqrt_price_limit_x96: Amount,
	pub hook_data: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapExactIn {
	pub currency_in: HexString,
	pub path: Vec<PathKey>,
	pub amount_in: Amount,
	pub amount_out_minimum: Amount,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SwapExactOut {
	pub currency_out: HexString,
	pub path: Vec<PathKey>,
	pub amount_out: Amount,
	pub amount_in_maximum: Amount,
}

/// Parameter of a classic router command.
#[derive(Debug, Clone, PartialEq)]
pub enum Parameter {
	AmountIn(Amount),
	AmountInMax(Amount),
	AmountOut(Amount),
	AmountOutMin(Amount),
	Path(Vec<PathHop>),
	PayerIsUser(bool),
	/// Any `{name, value}` pair no modeled variant claims. Opaque to consumers.
	Fallback { name: String, value: Value },
}

impl Parameter {
	pub fn name(&self) -> &str {
		match self {
			Self::AmountIn(_) => AMOUNT_IN,
			Self::AmountInMax(_) => AMOUNT_IN_MAX,
			Self::AmountOut(_) => AMOUNT_OUT,
			Self::AmountOutMin(_) => AMOUNT_OUT_MIN,
			Self::Path(_) => PATH,
			Self::PayerIsUser(_) => PAYER_IS_USER,
			Self::Fallback { name, .. } => name,
		}
	}

	pub fn is_fallback(&self) -> bool {
		matches!(self, Self::Fallback { .. })
	}
}

impl Serialize for Parameter {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("Parameter", 2)?;
		state.serialize_field("name", self.name())?;
		match self {
			Self::AmountIn(amount)
			| Self::AmountInMax(amount)
			| Self::AmountOut(amount)
			| Self::AmountOutMin(amount) => state.serialize_field("value", amount)?,
			Self::Path(hops) => state.serialize_field("value", hops)?,
			Self::PayerIsUser(flag) => state.serialize_field("value", flag)?,
			Self::Fallback { value, .. } => state.serialize_field("value", value)?,
		}
		state.end()
	}
}

/// Parameter of the versioned `V4_SWAP` command.
///
/// Each variant holds the ordered `swap` entries of its `value` array.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum V4SwapParameter {
	ExactIn(Vec<SwapExactIn>),
	ExactOut(Vec<SwapExactOut>),
	ExactInSingle(Vec<SwapExactInSingle>),
	ExactOutSingle(Vec<SwapExactOutSingle>),
}

impl V4SwapParameter {
	pub fn name(&self) -> &'static str {
		match self {
			Self::ExactIn(_) => SWAP_EXACT_IN,
			Self::ExactOut(_) => SWAP_EXACT_OUT,
			Self::ExactInSingle(_) => SWAP_EXACT_IN_SINGLE,
			Self::ExactOutSingle(_) => SWAP_EXACT_OUT_SINGLE,
		}
	}
}

impl Serialize for V4SwapParameter {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("V4SwapParameter", 2)?;
		state.serialize_field("name", self.name())?;
		match self {
			Self::ExactIn(steps) => state.serialize_field("value", &SwapSteps(steps))?,
			Self::ExactOut(steps) => state.serialize_field("value", &SwapSteps(steps))?,
			Self::ExactInSingle(steps) => state.serialize_field("value", &SwapSteps(steps))?,
			Self::ExactOutSingle(steps) => state.serialize_field("value", &SwapSteps(steps))?,
		}
		state.end()
	}
}

/// Writes descriptors back out as `[{ "name": "swap", "value": .. }]`.
struct SwapSteps<'a, T>(&'a Vec<T>);

struct SwapStep<'a, T>(&'a T);

impl<T: Serialize> Serialize for SwapSteps<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
		for step in self.0.iter() {
			seq.serialize_element(&SwapStep(step))?;
		}
		seq.end()
	}
}

impl<T: Serialize> Serialize for SwapStep<'_, T> {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let mut state = serializer.serialize_struct("SwapStep", 2)?;
		state.serialize_field("name", SWAP_STEP)?;
		state.serialize_field("value", self.0)?;
		state.end()
	}
}
