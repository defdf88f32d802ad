// file: src/main.rs
// version: 1.0.0
// guid: 17f9c3a2-8b5e-4d06-a2c1-e4d7b9f0c583

//! VxRail Spec Agent - Main entry point

use clap::Parser;
use colored::Colorize;
use std::process::ExitCode;
use tracing::debug;
use vxrail_spec_agent::{
    cli::{
        args::{Cli, Commands},
        commands::*,
    },
    logging::logger,
    Result,
};

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    if let Err(e) = logger::init_logger(cli.verbose, cli.quiet) {
        eprintln!("{}", e);
    }

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            debug!("Fatal error: {:?}", e);
            println!();
            for line in e.diagnostics() {
                println!("{}", line.red());
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Collect(args) => collect_command(&args),
        Commands::Fingerprint { host, json } => fingerprint_command(&host, json),
        Commands::CheckReachability { host } => check_reachability_command(&host),
        Commands::CheckPrereqs => check_prerequisites_command(),
    }
}
