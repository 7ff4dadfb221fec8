//! Classifier predicates applied by consumers to validated output.
//!
//! Predicates re-check against one specific variant. A fallback parameter
//! is re-run through the general registry first, so an opaque value never
//! satisfies a predicate its name and value would not satisfy on their own.

use crate::commands::classify_command;
use crate::params::classify_named;
use router_types::{
	Amount, Call, CallSummary, Command, Parameter, SwapAmounts, TradeDirection, V4SwapParameter,
};
use serde_json::Value;
use std::borrow::Cow;

/// True iff `command` is one of the swap-family variants.
///
/// Fallback commands are never swaps, whatever their name.
pub fn is_swap_command(command: &Command) -> bool {
	match command {
		Command::V2SwapExactIn(_)
		| Command::V2SwapExactOut(_)
		| Command::V3SwapExactIn(_)
		| Command::V3SwapExactOut(_)
		| Command::V4Swap(_) => true,
		Command::Fallback(_) => false,
	}
}

/// Runs the command registry over a raw value and reports whether it is a swap.
pub fn is_swap_command_value(raw: &Value) -> bool {
	classify_command(raw)
		.map(|command| is_swap_command(&command))
		.unwrap_or(false)
}

pub fn is_amount_in_parameter(param: &Parameter) -> bool {
	matches!(resolve(param).as_ref(), Parameter::AmountIn(_))
}

pub fn is_amount_in_max_parameter(param: &Parameter) -> bool {
	matches!(resolve(param).as_ref(), Parameter::AmountInMax(_))
}

pub fn is_amount_out_parameter(param: &Parameter) -> bool {
	matches!(resolve(param).as_ref(), Parameter::AmountOut(_))
}

pub fn is_amount_out_min_parameter(param: &Parameter) -> bool {
	matches!(resolve(param).as_ref(), Parameter::AmountOutMin(_))
}

fn resolve(param: &Parameter) -> Cow<'_, Parameter> {
	match param {
		Parameter::Fallback { name, value } => match classify_named(name, value) {
			Ok(resolved) => Cow::Owned(resolved),
			Err(_) => Cow::Borrowed(param),
		},
		_ => Cow::Borrowed(param),
	}
}

fn find_amount(params: &[Parameter], predicate: fn(&Parameter) -> bool) -> Option<Amount> {
	params
		.iter()
		.find(|param| predicate(param))
		.and_then(|param| match resolve(param).into_owned() {
			Parameter::AmountIn(amount)
			| Parameter::AmountInMax(amount)
			| Parameter::AmountOut(amount)
			| Parameter::AmountOutMin(amount) => Some(amount),
			_ => None,
		})
}

/// Amounts a swap command commits to, or `None` for non-swaps.
///
/// Classic swaps read their `amountIn`/`amountOutMin` or
/// `amountOut`/`amountInMax` parameters. A `V4_SWAP` reads its first swap
/// step and returns `None` when it carries none.
pub fn swap_amounts(command: &Command) -> Option<SwapAmounts> {
	match command {
		Command::V2SwapExactIn(params) | Command::V3SwapExactIn(params) => Some(SwapAmounts {
			direction: TradeDirection::ExactIn,
			amount_in: find_amount(params, is_amount_in_parameter),
			amount_out: find_amount(params, is_amount_out_min_parameter),
		}),
		Command::V2SwapExactOut(params) | Command::V3SwapExactOut(params) => Some(SwapAmounts {
			direction: TradeDirection::ExactOut,
			amount_in: find_amount(params, is_amount_in_max_parameter),
			amount_out: find_amount(params, is_amount_out_parameter),
		}),
		Command::V4Swap(params) => params.iter().find_map(v4_amounts),
		Command::Fallback(_) => None,
	}
}

fn v4_amounts(param: &V4SwapParameter) -> Option<SwapAmounts> {
	let exact_in = |amount_in: &Amount, amount_out: &Amount| SwapAmounts {
		direction: TradeDirection::ExactIn,
		amount_in: Some(amount_in.clone()),
		amount_out: Some(amount_out.clone()),
	};
	let exact_out = |amount_in: &Amount, amount_out: &Amount| SwapAmounts {
		direction: TradeDirection::ExactOut,
		amount_in: Some(amount_in.clone()),
		amount_out: Some(amount_out.clone()),
	};

	match param {
		V4SwapParameter::ExactIn(steps) => steps
			.first()
			.map(|step| exact_in(&step.amount_in, &step.amount_out_minimum)),
		V4SwapParameter::ExactInSingle(steps) => steps
			.first()
			.map(|step| exact_in(&step.amount_in, &step.amount_out_minimum)),
		V4SwapParameter::ExactOut(steps) => steps
			.first()
			.map(|step| exact_out(&step.amount_in_maximum, &step.amount_out)),
		V4SwapParameter::ExactOutSingle(steps) => steps
			.first()
			.map(|step| exact_out(&step.amount_in_maximum, &step.amount_out)),
	}
}

/// Swap-family commands of `call`, in execution order.
pub fn swap_commands(call: &Call) -> impl Iterator<Item = &Command> {
	call.commands.iter().filter(|command| is_swap_command(command))
}

pub fn summarize_call(call: &Call) -> CallSummary {
	call.commands
		.iter()
		.fold(CallSummary::default(), |mut summary, command| {
			summary.commands += 1;
			if is_swap_command(command) {
				summary.swap_commands += 1;
			}
			if command.is_fallback() {
				summary.fallback_commands += 1;
			}
			summary.fallback_params += command
				.params()
				.map(|params| params.iter().filter(|p| p.is_fallback()).count())
				.unwrap_or(0);
			summary
		})
}
