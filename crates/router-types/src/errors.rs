//! Rejection taxonomy for router call validation.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RejectionError>;

/// Category of a rejection, without its structural context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectionKind {
	ShapeMismatch,
	ValueConstraintViolation,
	TagOpcodeInconsistency,
}

/// Why a raw call, command or parameter was refused.
///
/// Every variant carries the dotted path of the offending field relative to
/// the value that was validated, e.g. `commands[0].params[1].value`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RejectionError {
	/// The value does not match the discriminant fields of any known shape.
	#[error("Shape mismatch at '{field}': {message}")]
	ShapeMismatch { field: String, message: String },

	/// A recognized shape carries a field that fails a primitive check.
	#[error("Invalid value for field '{field}': {message}")]
	ValueConstraintViolation { field: String, message: String },

	/// A known command name declared with an opcode the table does not pair it with.
	#[error("Command '{command_name}' at '{field}' does not correspond to opcode {command_type}")]
	TagOpcodeInconsistency {
		field: String,
		command_name: String,
		command_type: u64,
	},
}

impl RejectionError {
	pub fn shape(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::ShapeMismatch {
			field: field.into(),
			message: message.into(),
		}
	}

	pub fn value(field: impl Into<String>, message: impl Into<String>) -> Self {
		Self::ValueConstraintViolation {
			field: field.into(),
			message: message.into(),
		}
	}

	pub fn kind(&self) -> RejectionKind {
		match self {
			Self::ShapeMismatch { .. } => RejectionKind::ShapeMismatch,
			Self::ValueConstraintViolation { .. } => RejectionKind::ValueConstraintViolation,
			Self::TagOpcodeInconsistency { .. } => RejectionKind::TagOpcodeInconsistency,
		}
	}

	pub fn field(&self) -> &str {
		match self {
			Self::ShapeMismatch { field, .. }
			| Self::ValueConstraintViolation { field, .. }
			| Self::TagOpcodeInconsistency { field, .. } => field,
		}
	}

	/// Re-roots the error under `prefix` as it propagates to an enclosing value.
	pub fn prefixed(self, prefix: &str) -> Self {
		match self {
			Self::ShapeMismatch { field, message } => Self::ShapeMismatch {
				field: join_field(prefix, &field),
				message,
			},
			Self::ValueConstraintViolation { field, message } => Self::ValueConstraintViolation {
				field: join_field(prefix, &field),
				message,
			},
			Self::TagOpcodeInconsistency {
				field,
				command_name,
				command_type,
			} => Self::TagOpcodeInconsistency {
				field: join_field(prefix, &field),
				command_name,
				command_type,
			},
		}
	}
}

/// Joins two field path segments, omitting the dot before an index.
pub fn join_field(prefix: &str, field: &str) -> String {
	match (prefix.is_empty(), field.is_empty()) {
		(true, _) => field.to_string(),
		(false, true) => prefix.to_string(),
		(false, false) if field.starts_with('[') => format!("{}{}", prefix, field),
		(false, false) => format!("{}.{}", prefix, field),
	}
}
