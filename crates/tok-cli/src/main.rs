mod cli;
mod commands;

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use commands::Settings;
use tok_core::StdinSource;
use tok_tokens::TiktokenEngine;

fn main() -> ExitCode {
    // Initialize tracing; stdout carries command output only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match cli::Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            return ExitCode::from(code);
        }
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: cli::Cli) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let engine = TiktokenEngine::new();
    let mut input = StdinSource;
    let settings = Settings::new(cli.config);

    match cli.command {
        Some(cli::Commands::Count(args)) => {
            commands::count::handle(args, &settings, &engine, &mut input, &mut out)?
        }
        Some(cli::Commands::Encode(args)) => {
            commands::encode::handle(args, &settings, &engine, &mut input, &mut out)?
        }
        Some(cli::Commands::Decode(args)) => {
            commands::decode::handle(args, &settings, &engine, &mut input, &mut out)?
        }
        Some(cli::Commands::Models) => commands::models::handle(&mut out)?,
        Some(cli::Commands::Version) => commands::version::handle(&mut out)?,
        Some(cli::Commands::Completions { shell }) => commands::completions::handle(shell, &mut out)?,
        None => commands::count::handle_default(cli.count, &settings, &engine, &mut input, &mut out)?,
    }

    out.flush()?;
    Ok(())
}
