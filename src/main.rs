use anyhow::Context;
use clap::Parser;
use live_coding::config::cli::{Command, OutputFormat};
use live_coding::config::{load_config, parse_int_list, TomlConfig};
use live_coding::utils::{logger, validation::Validate};
use live_coding::{CliConfig, ConsoleGreeter, DrillError, DrillRunner, Greeter};
use serde::Serialize;
use std::fmt::Display;

fn main() {
    let cli = CliConfig::parse();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "❌ Failed to load config file '{}': {}",
                cli.config.as_deref().unwrap_or_default(),
                e
            );
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(e.exit_code());
        }
    };

    if cli.json_logs {
        logger::init_json_logger(cli.verbose, &config.logging.level);
    } else {
        logger::init_cli_logger(cli.verbose, &config.logging.level);
    }

    tracing::info!("Starting live-coding CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    if let Err(err) = run(&cli, &config) {
        let drill_error = err
            .chain()
            .find_map(|cause| cause.downcast_ref::<DrillError>());

        match drill_error {
            Some(e) => {
                tracing::error!(
                    "❌ {:#} (Category: {:?}, Severity: {:?})",
                    err,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                std::process::exit(e.exit_code());
            }
            None => {
                tracing::error!("❌ {:#}", err);
                eprintln!("❌ {:#}", err);
                std::process::exit(1);
            }
        }
    }
}

fn run(cli: &CliConfig, config: &TomlConfig) -> anyhow::Result<()> {
    let runner = DrillRunner::new(config.demo.clone());

    match &cli.command {
        Command::Merge { left, right } => {
            let left = parse_int_list(left).context("parsing --left")?;
            let right = parse_int_list(right).context("parsing --right")?;
            emit(cli.format, &runner.merge(&left, &right))
        }
        Command::Palindrome { text } => emit(cli.format, &runner.palindrome(text)),
        Command::Reverse { text } => emit(cli.format, &runner.reverse(text)),
        Command::Pairs {
            values,
            target,
            bound,
        } => {
            let values = parse_int_list(values).context("parsing --values")?;
            let bound = bound.unwrap_or(config.demo.pair_search);
            emit(cli.format, &runner.pairs(&values, *target, bound))
        }
        Command::Greet { name, no_welcome } => {
            let mut greeting = config.greeting.clone();
            if *no_welcome {
                greeting.show_welcome = false;
            }
            ConsoleGreeter::stdout(greeting)
                .greet(name)
                .context("writing greeting")?;
            Ok(())
        }
        Command::Demo => emit(cli.format, &runner.run()),
    }
}

fn emit<T: Serialize + Display>(format: OutputFormat, outcome: &T) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => println!("{}", outcome),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(outcome).map_err(DrillError::from)?;
            println!("{}", json);
        }
    }
    Ok(())
}
