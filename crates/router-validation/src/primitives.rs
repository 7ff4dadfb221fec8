//! Leaf checks shared by every registry.
//!
//! The `is_*` predicates answer membership questions. The field readers
//! pull a typed primitive out of a JSON object and report the first
//! violation with the path of the offending field.

use router_types::{join_field, Amount, HexString, RejectionError, Result};
use serde_json::{Map, Value};

/// Fee tiers a classic path hop may use.
pub const FEE_TIERS: [u32; 7] = [100, 200, 300, 400, 500, 3000, 10000];

/// True iff `value` is a string starting with `0x`.
pub fn is_hex_prefixed(value: &Value) -> bool {
	value
		.as_str()
		.is_some_and(|s| HexString::parse(s).is_some())
}

/// True iff `value` is a non-negative integer in one of the accepted encodings.
pub fn is_big_integer_string(value: &Value) -> bool {
	parse_amount(value).is_some()
}

/// Exact membership against a closed set.
pub fn is_one_of<T: PartialEq>(set: &[T], value: &T) -> bool {
	set.contains(value)
}

/// Decodes a big-integer value.
///
/// Decimal strings and `0x` hex strings are accepted, as is the serialized
/// big-number object `{ "type": "BigNumber", "hex": "0x.." }`.
pub fn parse_amount(value: &Value) -> Option<Amount> {
	match value {
		Value::String(s) => s.parse().ok(),
		Value::Object(map) => {
			if map.get("type").and_then(Value::as_str) != Some("BigNumber") {
				return None;
			}
			map.get("hex")
				.and_then(Value::as_str)
				.filter(|hex| HexString::parse(*hex).is_some())
				.and_then(|hex| hex.parse().ok())
		}
		_ => None,
	}
}

pub(crate) fn type_name(value: &Value) -> &'static str {
	match value {
		Value::Null => "null",
		Value::Bool(_) => "boolean",
		Value::Number(_) => "number",
		Value::String(_) => "string",
		Value::Array(_) => "array",
		Value::Object(_) => "object",
	}
}

/// Reads `value` as an object; failure is a value constraint violation.
pub(crate) fn object<'a>(value: &'a Value, field: &str) -> Result<&'a Map<String, Value>> {
	value.as_object().ok_or_else(|| {
		RejectionError::value(field, format!("expected object, got {}", type_name(value)))
	})
}

pub(crate) fn array<'a>(value: &'a Value, field: &str) -> Result<&'a Vec<Value>> {
	value.as_array().ok_or_else(|| {
		RejectionError::value(field, format!("expected array, got {}", type_name(value)))
	})
}

pub(crate) fn required<'a>(map: &'a Map<String, Value>, key: &str, field: &str) -> Result<&'a Value> {
	map.get(key).ok_or_else(|| {
		RejectionError::value(join_field(field, key), "missing required field")
	})
}

pub(crate) fn hex_field(map: &Map<String, Value>, key: &str, field: &str) -> Result<HexString> {
	let value = required(map, key, field)?;
	value
		.as_str()
		.and_then(|s| HexString::parse(s))
		.ok_or_else(|| {
			RejectionError::value(join_field(field, key), format!("{} must start with '0x'", key))
		})
}

pub(crate) fn string_field(map: &Map<String, Value>, key: &str, field: &str) -> Result<String> {
	let value = required(map, key, field)?;
	value.as_str().map(str::to_string).ok_or_else(|| {
		RejectionError::value(
			join_field(field, key),
			format!("expected string, got {}", type_name(value)),
		)
	})
}

pub(crate) fn bool_field(map: &Map<String, Value>, key: &str, field: &str) -> Result<bool> {
	let value = required(map, key, field)?;
	value.as_bool().ok_or_else(|| {
		RejectionError::value(
			join_field(field, key),
			format!("expected boolean, got {}", type_name(value)),
		)
	})
}

pub(crate) fn integer_field(map: &Map<String, Value>, key: &str, field: &str) -> Result<i64> {
	let value = required(map, key, field)?;
	value.as_i64().ok_or_else(|| {
		RejectionError::value(join_field(field, key), format!("expected integer, got {}", value))
	})
}

pub(crate) fn amount(value: &Value, field: &str) -> Result<Amount> {
	parse_amount(value).ok_or_else(|| {
		RejectionError::value(
			field,
			format!("{} is not a non-negative big-integer string", value),
		)
	})
}

pub(crate) fn amount_field(map: &Map<String, Value>, key: &str, field: &str) -> Result<Amount> {
	amount(required(map, key, field)?, &join_field(field, key))
}
