//! svm-ix - offline builder and inspector for SVM instructions

use anyhow::Result;

use clap::Parser;
use serde_json::{Value, json};
use std::process;

use svm_ix_cli::cli::{Cli, Commands};
use svm_ix_cli::commands;
use svm_ix_cli::config::Config;
use svm_ix_cli::error::CliError;
use svm_ix_cli::output;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result: Result<(), CliError> = Config::load(cli.config.as_deref()).and_then(|config| {
        match cli.command {
            Commands::Derive { subcommand } => {
                commands::derive::handle_derive_command(&config, subcommand, cli.json)
            }
            Commands::Build { subcommand } => {
                commands::build::handle_build_command(&config, subcommand, cli.json)
            }
            Commands::Decode { program, data } => {
                commands::decode::handle_decode_command(&config, &program, &data, cli.json)
            }
        }
    });

    if let Err(err) = result {
        if cli.json {
            output::print_output(format_error_json(&err), true);
        } else {
            eprintln!("Error: {}", err);
        }
        process::exit(1);
    }

    Ok(())
}

fn format_error_json(err: &CliError) -> Value {
    let kind = match err {
        CliError::Config(_) => "config",
        CliError::Validation(_) => "validation",
        CliError::Crypto(_) => "crypto",
        CliError::Instruction(_) => "instruction",
        CliError::Derivation(_) => "derivation",
        CliError::Decode(_) => "decode",
    };
    json!({
        "error": {
            "type": kind,
            "message": err.to_string(),
        }
    })
}
