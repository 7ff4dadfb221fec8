//! Primitive value types shared by parameters and commands.

use num_bigint::BigUint;
use num_traits::Num;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Prefix every address and hook field must start with.
pub const HEX_PREFIX: &str = "0x";

/// Errors produced while parsing a big-integer string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AmountParseError {
	#[error("amount is empty")]
	Empty,
	#[error("amount '{0}' is not a non-negative integer")]
	NotAnInteger(String),
	#[error("hex amount '{0}' contains non-hex digits")]
	InvalidHex(String),
}

/// Token amount or other unsigned quantity of arbitrary size.
///
/// Raw amounts at 18 decimals exceed 64 bits routinely, so the value is
/// held as an unbounded integer and re-serialized as a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Amount(BigUint);

impl Amount {
	pub fn new(value: BigUint) -> Self {
		Self(value)
	}

	pub fn as_biguint(&self) -> &BigUint {
		&self.0
	}

	pub fn into_biguint(self) -> BigUint {
		self.0
	}

	pub fn is_zero(&self) -> bool {
		self.0.bits() == 0
	}
}

impl FromStr for Amount {
	type Err = AmountParseError;

	/// Accepts plain decimal digits or a `0x`-prefixed hex string.
	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if s.is_empty() {
			return Err(AmountParseError::Empty);
		}

		if let Some(hex) = s.strip_prefix(HEX_PREFIX) {
			if hex.is_empty() || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
				return Err(AmountParseError::InvalidHex(s.to_string()));
			}
			return BigUint::from_str_radix(hex, 16)
				.map(Self)
				.map_err(|_| AmountParseError::InvalidHex(s.to_string()));
		}

		// from_str_radix tolerates a leading '+', which the wire format does not
		if !s.bytes().all(|b| b.is_ascii_digit()) {
			return Err(AmountParseError::NotAnInteger(s.to_string()));
		}

		BigUint::from_str_radix(s, 10)
			.map(Self)
			.map_err(|_| AmountParseError::NotAnInteger(s.to_string()))
	}
}

impl From<u64> for Amount {
	fn from(value: u64) -> Self {
		Self(BigUint::from(value))
	}
}

impl From<u128> for Amount {
	fn from(value: u128) -> Self {
		Self(BigUint::from(value))
	}
}

impl fmt::Display for Amount {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl Serialize for Amount {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		serializer.serialize_str(&self.0.to_str_radix(10))
	}
}

/// String known to begin with `0x`.
///
/// Only the prefix is checked; length and checksum are left to consumers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HexString(String);

impl HexString {
	/// Returns `None` unless `value` starts with `0x`.
	pub fn parse(value: impl Into<String>) -> Option<Self> {
		let value = value.into();
		value.starts_with(HEX_PREFIX).then_some(Self(value))
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for HexString {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl AsRef<str> for HexString {
	fn as_ref(&self) -> &str {
		&self.0
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_amount_beyond_u128() {
		let amount: Amount = "340282366920938463463374607431768211456".parse().unwrap();
		assert_eq!(amount.as_biguint().bits(), 129);
		assert_eq!(amount.to_string(), "340282366920938463463374607431768211456");
	}

	#[test]
	fn test_amount_rejects_non_integers() {
		assert_eq!(
			"12.5".parse::<Amount>(),
			Err(AmountParseError::NotAnInteger("12.5".to_string()))
		);
		assert!("-1".parse::<Amount>().is_err());
		assert!("+1".parse::<Amount>().is_err());
		assert!(" 1".parse::<Amount>().is_err());
		assert!("1e18".parse::<Amount>().is_err());
		assert_eq!("".parse::<Amount>(), Err(AmountParseError::Empty));
	}

	#[test]
	fn test_amount_hex() {
		let amount: Amount = "0x0de0b6b3a7640000".parse().unwrap();
		assert_eq!(amount, Amount::from(1_000_000_000_000_000_000u64));
		assert!("0x".parse::<Amount>().is_err());
		assert!("0xzz".parse::<Amount>().is_err());
	}

	#[test]
	fn test_amount_serializes_as_decimal_string() {
		let amount: Amount = "0xff".parse().unwrap();
		assert_eq!(serde_json::to_string(&amount).unwrap(), "\"255\"");
	}

	#[test]
	fn test_hex_string_prefix() {
		assert!(HexString::parse("0xabc123").is_some());
		assert!(HexString::parse("0x").is_some());
		assert!(HexString::parse("abc123").is_none());
		assert!(HexString::parse("0Xabc").is_none());
	}
}
