//! Configuration loading from files and environment.

use crate::types::{RouterConfig, LOG_LEVELS};
use crate::ConfigError;
use router_types::UnknownCommandNames;
use std::path::Path;
use tracing::{debug, info};

/// Environment variable overriding `logging.level`
pub const ENV_LOG_LEVEL: &str = "ROUTER_LOG_LEVEL";
/// Environment variable overriding `logging.json`
pub const ENV_LOG_JSON: &str = "ROUTER_LOG_JSON";
/// Environment variable overriding `validation.unknown_command_names`
pub const ENV_UNKNOWN_COMMAND_NAMES: &str = "ROUTER_UNKNOWN_COMMAND_NAMES";

/// Configuration loader
pub struct ConfigLoader;

impl ConfigLoader {
	/// Load configuration from file, choosing the format by extension
	pub fn from_file<P: AsRef<Path>>(path: P) -> Result<RouterConfig, ConfigError> {
		let path = path.as_ref();
		info!("Loading configuration from {:?}", path);

		if !path.exists() {
			return Err(ConfigError::FileNotFound(path.display().to_string()));
		}
		let contents = std::fs::read_to_string(path)?;

		let config = match path.extension().and_then(|s| s.to_str()) {
			Some("toml") => Self::from_toml(&contents)?,
			Some("json") => Self::from_json(&contents)?,
			Some("yaml") | Some("yml") => Self::from_yaml(&contents)?,
			_ => {
				return Err(ConfigError::ParseError(format!(
					"Unsupported config format: {:?}",
					path
				)))
			}
		};

		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Load from TOML string
	pub fn from_toml(contents: &str) -> Result<RouterConfig, ConfigError> {
		toml::from_str(contents)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse TOML: {}", e)))
	}

	/// Load from JSON string
	pub fn from_json(contents: &str) -> Result<RouterConfig, ConfigError> {
		serde_json::from_str(contents)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse JSON: {}", e)))
	}

	/// Load from YAML string
	pub fn from_yaml(contents: &str) -> Result<RouterConfig, ConfigError> {
		serde_yaml::from_str(contents)
			.map_err(|e| ConfigError::ParseError(format!("Failed to parse YAML: {}", e)))
	}

	/// Load from environment variables with optional file override
	pub fn from_env_and_file(file_path: Option<&Path>) -> Result<RouterConfig, ConfigError> {
		let mut config = match file_path {
			Some(path) => Self::from_file(path)?,
			None => RouterConfig::default(),
		};

		Self::apply_overrides(&mut config, |key| std::env::var(key).ok())?;

		Self::validate_config(&config)?;
		Ok(config)
	}

	/// Apply overrides from `lookup`, keyed by environment variable name
	pub fn apply_overrides<F>(config: &mut RouterConfig, lookup: F) -> Result<(), ConfigError>
	where
		F: Fn(&str) -> Option<String>,
	{
		if let Some(level) = lookup(ENV_LOG_LEVEL) {
			debug!("Overriding log level from environment");
			config.logging.level = level;
		}

		if let Some(json) = lookup(ENV_LOG_JSON) {
			config.logging.json = match json.to_ascii_lowercase().as_str() {
				"1" | "true" | "yes" => true,
				"0" | "false" | "no" => false,
				other => {
					return Err(ConfigError::ValidationError(format!(
						"Invalid {}: {}",
						ENV_LOG_JSON, other
					)))
				}
			};
		}

		if let Some(policy) = lookup(ENV_UNKNOWN_COMMAND_NAMES) {
			debug!("Overriding unknown command name policy from environment");
			config.validation.unknown_command_names = match policy.as_str() {
				"reject" => UnknownCommandNames::Reject,
				"accept_as_fallback" => UnknownCommandNames::AcceptAsFallback,
				other => {
					return Err(ConfigError::ValidationError(format!(
						"Invalid {}: {}",
						ENV_UNKNOWN_COMMAND_NAMES, other
					)))
				}
			};
		}

		Ok(())
	}

	/// Validate configuration
	pub fn validate_config(config: &RouterConfig) -> Result<(), ConfigError> {
		let level = config.logging.level.to_ascii_lowercase();
		if !LOG_LEVELS.contains(&level.as_str()) {
			return Err(ConfigError::ValidationError(format!(
				"Unknown log level '{}', expected one of {:?}",
				config.logging.level, LOG_LEVELS
			)));
		}

		Ok(())
	}
}
