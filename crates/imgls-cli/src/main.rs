//! imgls CLI - Command-line utility for listing locally stored container
//! images.

mod cli;
mod commands;
mod error;

use anyhow::Result;
use clap::Parser;
use console::Term;
use console::style;
use log::LevelFilter;
use log::debug;
use simplelog::ColorChoice;
use simplelog::Config as LogConfig;
use simplelog::TermLogger;
use simplelog::TerminalMode;
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = cli::Cli::parse();
    init_logging(cli.debug);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report_error(&err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &cli::Cli) -> Result<()> {
    let mut stdout = io::stdout().lock();

    match &cli.command {
        cli::Commands::Images(args) => {
            debug!(
                "command: images (quiet={}, noheading={}, notruncate={}, json={})",
                args.quiet, args.no_heading, args.no_truncate, args.json
            );
            commands::images::execute(args, &cli.store_config(), &mut stdout)
        }
        cli::Commands::Completion { shell } => {
            commands::completion::execute(*shell, &mut stdout);
            Ok(())
        }
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // Logs go to stderr so stdout stays a clean report.
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn report_error(err: &anyhow::Error) {
    let term = Term::stderr();
    if console::colors_enabled_stderr() {
        let _ = term.write_line(&format!(
            "{} {err:?}",
            style("ERROR:").for_stderr().red().bold()
        ));
    } else {
        let _ = term.write_line(&format!("ERROR: {err:?}"));
    }
}
