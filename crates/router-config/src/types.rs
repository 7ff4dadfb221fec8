//! Configuration types.

use router_types::{UnknownCommandNames, ValidationPolicy};
use serde::{Deserialize, Serialize};

/// Log levels accepted by `logging.level`.
pub const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Complete configuration
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct RouterConfig {
	/// Policy handed to the call validator
	#[serde(default)]
	pub validation: ValidationPolicy,
	/// Log output settings
	#[serde(default)]
	pub logging: LoggingSettings,
}

impl RouterConfig {
	/// Configuration that admits unknown command names as fallbacks
	pub fn permissive() -> Self {
		Self {
			validation: ValidationPolicy {
				unknown_command_names: UnknownCommandNames::AcceptAsFallback,
			},
			..Self::default()
		}
	}
}

/// Log output settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingSettings {
	/// One of trace, debug, info, warn, error
	#[serde(default = "default_log_level")]
	pub level: String,
	/// Emit JSON lines instead of human-readable output
	#[serde(default)]
	pub json: bool,
}

impl Default for LoggingSettings {
	fn default() -> Self {
		Self {
			level: default_log_level(),
			json: false,
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_default_config() {
		let config = RouterConfig::default();
		assert_eq!(config.logging.level, "info");
		assert!(!config.logging.json);
		assert_eq!(
			config.validation.unknown_command_names,
			UnknownCommandNames::Reject
		);
	}

	#[test]
	fn test_partial_config_fills_defaults() {
		let config: RouterConfig =
			toml::from_str("[validation]\nunknown_command_names = \"accept_as_fallback\"\n").unwrap();
		assert_eq!(config, RouterConfig::permissive());
	}

	#[test]
	fn test_policy_serialization() {
		let json = serde_json::to_string(&RouterConfig::permissive().validation).unwrap();
		assert_eq!(json, r#"{"unknown_command_names":"accept_as_fallback"}"#);
	}
}
