//! Parameter registries.
//!
//! Each registry is an ordered table of `(name, validator)` arms. A raw
//! parameter is dispatched on its `name` literal first; once a name
//! matches, its `value` must validate in full or the parameter is
//! rejected. Only names no arm claims reach the general fallback.

use crate::primitives::{
	amount, amount_field, array, bool_field, hex_field, integer_field, is_one_of, object,
	string_field, type_name, FEE_TIERS,
};
use router_types::{
	join_field, FeeTier, Parameter, PathHop, PathKey, PoolKey, RejectionError, Result,
	SwapExactIn, SwapExactInSingle, SwapExactOut, SwapExactOutSingle, V4SwapParameter,
	AMOUNT_IN, AMOUNT_IN_MAX, AMOUNT_OUT, AMOUNT_OUT_MIN, PATH, PAYER_IS_USER, SWAP_EXACT_IN,
	SWAP_EXACT_IN_SINGLE, SWAP_EXACT_OUT, SWAP_EXACT_OUT_SINGLE, SWAP_STEP,
};
use serde_json::{Map, Value};

type ParameterValidator = fn(&Value) -> Result<Parameter>;
type V4ParameterValidator = fn(&Value) -> Result<V4SwapParameter>;

/// General union, in priority order. The fallback arm follows implicitly.
const GENERAL_PARAMETERS: [(&str, ParameterValidator); 6] = [
	(AMOUNT_IN, amount_in),
	(AMOUNT_IN_MAX, amount_in_max),
	(AMOUNT_OUT, amount_out),
	(AMOUNT_OUT_MIN, amount_out_min),
	(PATH, path),
	(PAYER_IS_USER, payer_is_user),
];

/// Versioned-swap union. There is no fallback arm.
const V4_PARAMETERS: [(&str, V4ParameterValidator); 4] = [
	(SWAP_EXACT_IN, swap_exact_in),
	(SWAP_EXACT_OUT, swap_exact_out),
	(SWAP_EXACT_IN_SINGLE, swap_exact_in_single),
	(SWAP_EXACT_OUT_SINGLE, swap_exact_out_single),
];

/// Field path of a parameter's payload, relative to the parameter.
const VALUE: &str = "value";

/// Classifies a raw `{name, value}` pair against the general union.
///
/// Any object carrying a string `name` and some `value` yields a
/// parameter, falling back to [`Parameter::Fallback`] when the name is not
/// modeled. A modeled name with a malformed value is rejected.
pub fn classify_parameter(raw: &Value) -> Result<Parameter> {
	let (name, value) = split_named(raw)?;
	classify_named(name, value)
}

/// Classifies an already split `name`/`value` pair against the general union.
pub fn classify_named(name: &str, value: &Value) -> Result<Parameter> {
	match GENERAL_PARAMETERS.iter().find(|(arm, _)| *arm == name) {
		Some((_, validate)) => validate(value),
		None => Ok(Parameter::Fallback {
			name: name.to_string(),
			value: value.clone(),
		}),
	}
}

/// Classifies a raw parameter of the `V4_SWAP` command.
pub fn classify_v4_parameter(raw: &Value) -> Result<V4SwapParameter> {
	let (name, value) = split_named(raw)?;
	match V4_PARAMETERS.iter().find(|(arm, _)| *arm == name) {
		Some((_, validate)) => validate(value),
		None => Err(RejectionError::shape(
			"name",
			format!("'{}' is not a V4 swap parameter", name),
		)),
	}
}

/// Splits the `name` and `value` discriminant fields.
fn split_named(raw: &Value) -> Result<(&str, &Value)> {
	let map = raw.as_object().ok_or_else(|| {
		RejectionError::shape("", format!("expected parameter object, got {}", type_name(raw)))
	})?;

	let name = match map.get("name") {
		Some(Value::String(name)) => name.as_str(),
		Some(other) => {
			return Err(RejectionError::shape(
				"name",
				format!("expected string, got {}", type_name(other)),
			))
		}
		None => return Err(RejectionError::shape("name", "missing parameter name")),
	};

	let value = map
		.get(VALUE)
		.ok_or_else(|| RejectionError::shape(VALUE, "missing parameter value"))?;

	Ok((name, value))
}

fn amount_in(value: &Value) -> Result<Parameter> {
	amount(value, VALUE).map(Parameter::AmountIn)
}

fn amount_in_max(value: &Value) -> Result<Parameter> {
	amount(value, VALUE).map(Parameter::AmountInMax)
}

fn amount_out(value: &Value) -> Result<Parameter> {
	amount(value, VALUE).map(Parameter::AmountOut)
}

fn amount_out_min(value: &Value) -> Result<Parameter> {
	amount(value, VALUE).map(Parameter::AmountOutMin)
}

fn payer_is_user(value: &Value) -> Result<Parameter> {
	value.as_bool().map(Parameter::PayerIsUser).ok_or_else(|| {
		RejectionError::value(VALUE, format!("expected boolean, got {}", type_name(value)))
	})
}

fn path(value: &Value) -> Result<Parameter> {
	array(value, VALUE)?
		.iter()
		.enumerate()
		.map(|(i, hop)| path_hop(hop, &format!("{}[{}]", VALUE, i)))
		.collect::<Result<Vec<_>>>()
		.map(Parameter::Path)
}

fn path_hop(value: &Value, field: &str) -> Result<PathHop> {
	let map = object(value, field)?;
	Ok(PathHop {
		token_in: hex_field(map, "tokenIn", field)?,
		token_out: hex_field(map, "tokenOut", field)?,
		fee: fee_tier(map, field)?,
	})
}

fn fee_tier(map: &Map<String, Value>, field: &str) -> Result<FeeTier> {
	let fee = integer_field(map, "fee", field)?;
	u32::try_from(fee)
		.ok()
		.filter(|fee| is_one_of(&FEE_TIERS, fee))
		.and_then(|fee| FeeTier::from_u64(u64::from(fee)))
		.ok_or_else(|| {
			RejectionError::value(
				join_field(field, "fee"),
				format!("{} is not one of the fee tiers {:?}", fee, FEE_TIERS),
			)
		})
}

/// Walks the `[{ name: "swap", value: .. }]` array of a versioned parameter.
fn swap_steps<T>(value: &Value, descriptor: fn(&Value, &str) -> Result<T>) -> Result<Vec<T>> {
	array(value, VALUE)?
		.iter()
		.enumerate()
		.map(|(i, step)| {
			let field = format!("{}[{}]", VALUE, i);
			let map = object(step, &field)?;
			match map.get("name") {
				Some(Value::String(name)) if name == SWAP_STEP => {}
				_ => {
					return Err(RejectionError::value(
						join_field(&field, "name"),
						format!("expected '{}'", SWAP_STEP),
					))
				}
			}
			let inner = join_field(&field, VALUE);
			let payload = map
				.get(VALUE)
				.ok_or_else(|| RejectionError::value(inner.clone(), "missing required field"))?;
			descriptor(payload, &inner)
		})
		.collect()
}

fn swap_exact_in(value: &Value) -> Result<V4SwapParameter> {
	swap_steps(value, exact_in_descriptor).map(V4SwapParameter::ExactIn)
}

fn swap_exact_out(value: &Value) -> Result<V4SwapParameter> {
	swap_steps(value, exact_out_descriptor).map(V4SwapParameter::ExactOut)
}

fn swap_exact_in_single(value: &Value) -> Result<V4SwapParameter> {
	swap_steps(value, exact_in_single_descriptor).map(V4SwapParameter::ExactInSingle)
}

fn swap_exact_out_single(value: &Value) -> Result<V4SwapParameter> {
	swap_steps(value, exact_out_single_descriptor).map(V4SwapParameter::ExactOutSingle)
}

fn pool_key(map: &Map<String, Value>, field: &str) -> Result<PoolKey> {
	let field = join_field(field, "poolKey");
	let value = map
		.get("poolKey")
		.ok_or_else(|| RejectionError::value(field.clone(), "missing required field"))?;
	let key = object(value, &field)?;

	Ok(PoolKey {
		currency0: hex_field(key, "currency0", &field)?,
		currency1: hex_field(key, "currency1", &field)?,
		fee: integer_field(key, "fee", &field)?,
		tick_spacing: integer_field(key, "tickSpacing", &field)?,
		hooks: string_field(key, "hooks", &field)?,
	})
}

fn path_keys(map: &Map<String, Value>, field: &str) -> Result<Vec<PathKey>> {
	let field = join_field(field, "path");
	let value = map
		.get("path")
		.ok_or_else(|| RejectionError::value(field.clone(), "missing required field"))?;

	array(value, &field)?
		.iter()
		.enumerate()
		.map(|(i, hop)| {
			let field = format!("{}[{}]", field, i);
			let key = object(hop, &field)?;
			Ok(PathKey {
				intermediate_currency: hex_field(key, "intermediateCurrency", &field)?,
				fee: integer_field(key, "fee", &field)?,
				tick_spacing: integer_field(key, "tickSpacing", &field)?,
				hooks: hex_field(key, "hooks", &field)?,
				hook_data: string_field(key, "hookData", &field)?,
			})
		})
		.collect()
}

fn exact_in_single_descriptor(value: &Value, field: &str) -> Result<SwapExactInSingle> {
	let map = object(value, field)?;
	Ok(SwapExactInSingle {
		pool_key: pool_key(map, field)?,
		zero_for_one: bool_field(map, "zeroForOne", field)?,
		amount_in: amount_field(map, "amountIn", field)?,
		amount_out_minimum: amount_field(map, "amountOutMinimum", field)?,
		sqrt_price_limit_x96: amount_field(map, "sqrtPriceLimitX96", field)?,
		hook_data: string_field(map, "hookData", field)?,
	})
}

fn exact_out_single_descriptor(value: &Value, field: &str) -> Result<SwapExactOutSingle> {
	let map = object(value, field)?;
	Ok(SwapExactOutSingle {
		pool_key: pool_key(map, field)?,
		zero_for_one: bool_field(map, "zeroForOne", field)?,
		amount_out: amount_field(map, "amountOut", field)?,
		amount_in_maximum: amount_field(map, "amountInMaximum", field)?,
		sqrt_price_limit_x96: amount_field(map, "sqrtPriceLimitX96", field)?,
		hook_data: string_field(map, "hookData", field)?,
	})
}

fn exact_in_descriptor(value: &Value, field: &str) -> Result<SwapExactIn> {
	let map = object(value, field)?;
	Ok(SwapExactIn {
		currency_in: hex_field(map, "currencyIn", field)?,
		path: path_keys(map, field)?,
		amount_in: amount_field(map, "amountIn", field)?,
		amount_out_minimum: amount_field(map, "amountOutMinimum", field)?,
	})
}

fn exact_out_descriptor(value: &Value, field: &str) -> Result<SwapExactOut> {
	let map = object(value, field)?;
	Ok(SwapExactOut {
		currency_out: hex_field(map, "currencyOut", field)?,
		path: path_keys(map, field)?,
		amount_out: amount_field(map, "amountOut", field)?,
		amount_in_maximum: amount_field(map, "amountInMaximum", field)?,
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;
	use router_types::{Amount, RejectionKind};
	use serde_json::json;

	fn path_key(hooks: &str) -> Value {
		json!({
			"intermediateCurrency": "0x2222222222222222222222222222222222222222",
			"fee": 3000,
			"tickSpacing": 60,
			"hooks": hooks,
			"hookData": "0x",
		})
	}

	fn exact_in_param(hooks: &str) -> Value {
		json!({
			"name": "SWAP_EXACT_IN",
			"value": [{
				"name": "swap",
				"value": {
					"currencyIn": "0x1111111111111111111111111111111111111111",
					"path": [path_key(hooks)],
					"amountIn": "1000000000000000000",
					"amountOutMinimum": "990000",
				}
			}]
		})
	}

	#[test]
	fn test_amount_in_parameter() {
		let param = classify_parameter(&json!({ "name": "amountIn", "value": "1000000000000000000" }))
			.unwrap();
		assert_eq!(
			param,
			Parameter::AmountIn(Amount::from(1_000_000_000_000_000_000u64))
		);
	}

	#[test]
	fn test_amount_beyond_u128_is_accepted() {
		let param = classify_parameter(&json!({
			"name": "amountOut",
			"value": "340282366920938463463374607431768211456",
		}))
		.unwrap();
		assert!(matches!(param, Parameter::AmountOut(_)));
	}

	#[test]
	fn test_malformed_amount_is_not_absorbed_by_fallback() {
		for bad in [json!("12.5"), json!("-1"), json!(12), json!(null)] {
			let error = classify_parameter(&json!({ "name": "amountOutMin", "value": bad }))
				.unwrap_err();
			assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation);
			assert_eq!(error.field(), "value");
		}
	}

	#[test]
	fn test_unmodeled_name_falls_back_verbatim() {
		let raw = json!({ "name": "recipient", "value": { "nested": [1, 2, 3] } });
		let param = classify_parameter(&raw).unwrap();
		assert_eq!(
			param,
			Parameter::Fallback {
				name: "recipient".to_string(),
				value: json!({ "nested": [1, 2, 3] }),
			}
		);
	}

	#[test]
	fn test_v4_names_are_opaque_in_general_union() {
		let param = classify_parameter(&exact_in_param("0x0")).unwrap();
		assert!(param.is_fallback());
	}

	#[test]
	fn test_missing_discriminants_are_shape_mismatches() {
		for raw in [
			json!({ "value": "1" }),
			json!({ "name": "amountIn" }),
			json!({ "name": 7, "value": "1" }),
			json!("amountIn"),
			json!([]),
		] {
			let error = classify_parameter(&raw).unwrap_err();
			assert_eq!(error.kind(), RejectionKind::ShapeMismatch, "{}", raw);
		}
	}

	#[test]
	fn test_payer_is_user() {
		assert_eq!(
			classify_parameter(&json!({ "name": "payerIsUser", "value": true })).unwrap(),
			Parameter::PayerIsUser(true)
		);
		let error =
			classify_parameter(&json!({ "name": "payerIsUser", "value": "true" })).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation);
	}

	#[test]
	fn test_path_preserves_hop_order() {
		let raw = json!({
			"name": "path",
			"value": [
				{ "tokenIn": "0xa", "tokenOut": "0xb", "fee": 500 },
				{ "tokenIn": "0xb", "tokenOut": "0xc", "fee": 3000 },
			]
		});
		let param = classify_parameter(&raw).unwrap();
		let Parameter::Path(hops) = &param else {
			panic!("expected path, got {:?}", param);
		};
		assert_eq!(hops[0].token_in.as_str(), "0xa");
		assert_eq!(hops[0].fee, FeeTier::Low);
		assert_eq!(hops[1].token_out.as_str(), "0xc");
		assert_eq!(hops[1].fee, FeeTier::Medium);
		assert_eq!(serde_json::to_value(&param).unwrap(), raw);

		let reversed = json!({
			"name": "path",
			"value": [
				{ "tokenIn": "0xb", "tokenOut": "0xc", "fee": 3000 },
				{ "tokenIn": "0xa", "tokenOut": "0xb", "fee": 500 },
			]
		});
		assert_ne!(classify_parameter(&reversed).unwrap(), param);
	}

	#[test]
	fn test_path_rejects_unknown_fee_and_missing_prefix() {
		let error = classify_parameter(&json!({
			"name": "path",
			"value": [{ "tokenIn": "0xa", "tokenOut": "0xb", "fee": 2500 }]
		}))
		.unwrap_err();
		assert_eq!(error.field(), "value[0].fee");

		let error = classify_parameter(&json!({
			"name": "path",
			"value": [
				{ "tokenIn": "0xa", "tokenOut": "0xb", "fee": 500 },
				{ "tokenIn": "b", "tokenOut": "0xc", "fee": 500 },
			]
		}))
		.unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation);
		assert_eq!(error.field(), "value[1].tokenIn");
	}

	#[test]
	fn test_hook_address_prefix_enforced() {
		let error = classify_v4_parameter(&exact_in_param("abc123")).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation);
		assert_eq!(error.field(), "value[0].value.path[0].hooks");

		let param = classify_v4_parameter(&exact_in_param("0xabc123")).unwrap();
		let V4SwapParameter::ExactIn(steps) = param else {
			panic!("expected exact-in parameter");
		};
		assert_eq!(steps[0].path[0].hooks.as_str(), "0xabc123");
		assert_eq!(steps[0].amount_out_minimum, Amount::from(990_000u64));
	}

	#[test]
	fn test_exact_out_single() {
		let raw = json!({
			"name": "SWAP_EXACT_OUT_SINGLE",
			"value": [{
				"name": "swap",
				"value": {
					"poolKey": {
						"currency0": "0x0000000000000000000000000000000000000000",
						"currency1": "0x1111111111111111111111111111111111111111",
						"fee": 500,
						"tickSpacing": 10,
						"hooks": "0x0000000000000000000000000000000000000000",
					},
					"zeroForOne": true,
					"amountOut": "2500",
					"amountInMaximum": { "type": "BigNumber", "hex": "0x0a28" },
					"sqrtPriceLimitX96": "0",
					"hookData": "0x",
				}
			}]
		});

		let param = classify_v4_parameter(&raw).unwrap();
		let V4SwapParameter::ExactOutSingle(steps) = &param else {
			panic!("expected exact-out-single parameter");
		};
		assert!(steps[0].zero_for_one);
		assert_eq!(steps[0].amount_in_maximum, Amount::from(2600u64));
		assert_eq!(steps[0].pool_key.tick_spacing, 10);
	}

	#[test]
	fn test_pool_key_hooks_need_no_prefix() {
		let raw = json!({
			"name": "SWAP_EXACT_IN_SINGLE",
			"value": [{
				"name": "swap",
				"value": {
					"poolKey": {
						"currency0": "0x0",
						"currency1": "0x1",
						"fee": 3000,
						"tickSpacing": 60,
						"hooks": "none",
					},
					"zeroForOne": false,
					"amountIn": "1",
					"amountOutMinimum": "0",
					"sqrtPriceLimitX96": "0",
					"hookData": "",
				}
			}]
		});
		assert!(classify_v4_parameter(&raw).is_ok());
	}

	#[test]
	fn test_v4_swap_step_name_is_checked() {
		let mut raw = exact_in_param("0x0");
		raw["value"][0]["name"] = json!("hop");
		let error = classify_v4_parameter(&raw).unwrap_err();
		assert_eq!(error.field(), "value[0].name");
	}

	#[test]
	fn test_v4_union_has_no_fallback() {
		let error =
			classify_v4_parameter(&json!({ "name": "amountIn", "value": "1" })).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ShapeMismatch);
		assert_eq!(error.field(), "name");
	}

	#[test]
	fn test_v4_missing_field_is_value_violation() {
		let mut raw = exact_in_param("0x0");
		raw["value"][0]["value"]
			.as_object_mut()
			.unwrap()
			.remove("amountIn");
		let error = classify_v4_parameter(&raw).unwrap_err();
		assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation);
		assert_eq!(error.field(), "value[0].value.amountIn");
	}

	fn arb_json() -> impl Strategy<Value = Value> {
		let leaf = prop_oneof![
			Just(Value::Null),
			any::<bool>().prop_map(Value::from),
			any::<i64>().prop_map(Value::from),
			"[ -~]{0,24}".prop_map(Value::from),
		];
		leaf.prop_recursive(3, 24, 4, |inner| {
			prop_oneof![
				prop::collection::vec(inner.clone(), 0..4).prop_map(Value::from),
				prop::collection::hash_map("[a-z]{1,6}", inner, 0..4)
					.prop_map(|m| Value::Object(m.into_iter().collect())),
			]
		})
	}

	proptest! {
		#[test]
		fn unmodeled_names_always_classify(name in "[A-Za-z_]{1,16}", value in arb_json()) {
			prop_assume!(GENERAL_PARAMETERS.iter().all(|(arm, _)| *arm != name));
			let param = classify_parameter(&json!({ "name": name.clone(), "value": value.clone() }))
				.unwrap();
			prop_assert_eq!(param, Parameter::Fallback { name, value });
		}

		#[test]
		fn modeled_names_never_fall_back(index in 0usize..6, value in arb_json()) {
			let name = GENERAL_PARAMETERS[index].0;
			match classify_parameter(&json!({ "name": name, "value": value })) {
				Ok(param) => prop_assert_eq!(param.name(), name),
				Err(error) => prop_assert_eq!(error.kind(), RejectionKind::ValueConstraintViolation),
			}
		}

		#[test]
		fn inputs_without_name_or_value_are_shape_mismatches(value in arb_json()) {
			let raw = json!({ "other": value });
			prop_assert_eq!(
				classify_parameter(&raw).unwrap_err().kind(),
				RejectionKind::ShapeMismatch
			);
		}
	}
}
