//! Command-line interface definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "router-inspect")]
#[command(about = "Validate and classify universal router calls", long_about = None)]
#[command(version = env!("CARGO_PKG_VERSION"))]
pub struct Args {
	/// Path to configuration file
	#[arg(short, long, env = "ROUTER_CONFIG")]
	pub config: Option<PathBuf>,

	/// Log level override (trace, debug, info, warn, error)
	#[arg(short, long)]
	pub log_level: Option<String>,

	/// Emit logs as JSON lines
	#[arg(long)]
	pub json_logs: bool,

	/// Admit unknown command names as fallback commands
	#[arg(long)]
	pub accept_unknown_commands: bool,

	/// Subcommand to execute
	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Validate call files and print the typed calls
	#[command(about = "Validate router call files and print the typed result")]
	Validate {
		/// JSON files, each holding one `{ "commands": [..] }` call
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},

	/// Print per-command classification for call files
	#[command(about = "Show swap classification and amounts for each command")]
	Summary {
		#[arg(required = true)]
		files: Vec<PathBuf>,
	},

	/// Load and print the effective configuration
	#[command(about = "Load the configuration and print the effective values")]
	CheckConfig,
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_parse_validate() {
		let args = Args::parse_from(["router-inspect", "--json-logs", "validate", "a.json", "b.json"]);
		assert!(args.json_logs);
		match args.command {
			Command::Validate { files } => {
				assert_eq!(files, vec![PathBuf::from("a.json"), PathBuf::from("b.json")])
			}
			other => panic!("unexpected command {:?}", other),
		}
	}

	#[test]
	fn test_validate_requires_files() {
		assert!(Args::try_parse_from(["router-inspect", "validate"]).is_err());
	}

	#[test]
	fn test_parse_check_config() {
		let args = Args::parse_from([
			"router-inspect",
			"--config",
			"router.toml",
			"--accept-unknown-commands",
			"check-config",
		]);
		assert_eq!(args.config, Some(PathBuf::from("router.toml")));
		assert!(args.accept_unknown_commands);
		assert!(matches!(args.command, Command::CheckConfig));
	}
}
