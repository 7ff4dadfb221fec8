use anyhow::{Context, Result};
use clap::Parser;
use futures::future::join_all;
use router_config::{ConfigLoader, LoggingSettings, RouterConfig};
use router_monitoring::{init_tracing, parse_level, TracingConfig};
use router_types::{Call, UnknownCommandNames};
use router_validation::{summarize_call, swap_amounts, is_swap_command, CallValidator};
use serde_json::json;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod cli;

use cli::{Args, Command};

#[tokio::main]
async fn main() -> Result<()> {
	let args = Args::parse();

	let config = load_config(&args)?;
	setup_tracing(&config.logging)?;

	match args.command {
		Command::Validate { files } => validate_files(&config, &files).await,
		Command::Summary { files } => summarize_files(&config, &files).await,
		Command::CheckConfig => check_config(&config),
	}
}

fn load_config(args: &Args) -> Result<RouterConfig> {
	let mut config = ConfigLoader::from_env_and_file(args.config.as_deref())
		.context("Failed to load configuration")?;

	// Command-line flags win over file and environment
	if let Some(level) = &args.log_level {
		config.logging.level = level.clone();
	}
	if args.json_logs {
		config.logging.json = true;
	}
	if args.accept_unknown_commands {
		config.validation.unknown_command_names = UnknownCommandNames::AcceptAsFallback;
	}

	ConfigLoader::validate_config(&config).context("Invalid configuration")?;
	Ok(config)
}

fn setup_tracing(logging: &LoggingSettings) -> Result<()> {
	let level = parse_level(&logging.level).map_err(anyhow::Error::msg)?;
	let config = TracingConfig::new()
		.with_level(level)
		.with_json_format(logging.json);
	init_tracing(config).map_err(|e| anyhow::anyhow!("{}", e))
}

/// Reads and validates every file concurrently, keeping argument order.
async fn load_calls(validator: CallValidator, files: &[PathBuf]) -> Vec<Result<Call>> {
	join_all(files.iter().map(|path| load_call(validator, path))).await
}

async fn load_call(validator: CallValidator, path: &Path) -> Result<Call> {
	let text = tokio::fs::read_to_string(path)
		.await
		.with_context(|| format!("Failed to read call file: {:?}", path))?;
	let call = validator
		.validate_json(&text)
		.with_context(|| format!("Unsupported router call in {:?}", path))?;
	Ok(call)
}

async fn validate_files(config: &RouterConfig, files: &[PathBuf]) -> Result<()> {
	let validator = CallValidator::new(config.validation);
	let results = load_calls(validator, files).await;

	let mut rejected = 0;
	for (path, result) in files.iter().zip(results) {
		match result {
			Ok(call) => {
				info!("{:?}: {} commands accepted", path, call.len());
				println!("{}", serde_json::to_string_pretty(&call)?);
			}
			Err(e) => {
				rejected += 1;
				eprintln!("{:#}", e);
			}
		}
	}

	if rejected > 0 {
		anyhow::bail!("{} of {} calls rejected", rejected, files.len());
	}
	Ok(())
}

async fn summarize_files(config: &RouterConfig, files: &[PathBuf]) -> Result<()> {
	let validator = CallValidator::new(config.validation);
	let results = load_calls(validator, files).await;

	let mut rejected = 0;
	for (path, result) in files.iter().zip(results) {
		let call = match result {
			Ok(call) => call,
			Err(e) => {
				rejected += 1;
				eprintln!("{:#}", e);
				continue;
			}
		};

		let summary = summarize_call(&call);
		if summary.has_unsupported_parts() {
			warn!("{:?} contains commands or parameters that are not modeled", path);
		}

		let commands: Vec<_> = call
			.commands
			.iter()
			.enumerate()
			.map(|(index, command)| {
				json!({
					"index": index,
					"commandName": command.command_name(),
					"commandType": command.command_type(),
					"swap": is_swap_command(command),
					"amounts": swap_amounts(command),
				})
			})
			.collect();

		let report = json!({
			"file": path.display().to_string(),
			"summary": summary,
			"commands": commands,
		});
		println!("{}", serde_json::to_string_pretty(&report)?);
	}

	if rejected > 0 {
		anyhow::bail!("{} of {} calls rejected", rejected, files.len());
	}
	Ok(())
}

fn check_config(config: &RouterConfig) -> Result<()> {
	info!("Configuration is valid");
	println!("{}", serde_json::to_string_pretty(config)?);
	Ok(())
}
