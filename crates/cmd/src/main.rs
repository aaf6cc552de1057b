// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

mod commands;
mod config;

use clap::Parser;
use config::{Cli, Commands};
use diagnostics::*;
use std::process::ExitCode;

fn main() -> ExitCode {
    // Configuration errors print usage and exit with status 2
    let command = match Cli::parse().into_command() {
        Ok(command) => command,
        Err(err) => err.exit(),
    };

    diagnostics::init_diagnostics();

    let result = match command {
        Commands::Run(args) => commands::run_command(&args),
        Commands::Lookup(args) => commands::lookup_command(&args),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            let stage = commands::failure_stage(&err);
            let message = format!("{err:#}");
            error!("run failed at {stage}: {message}", stage: stage, message: message);
            ExitCode::FAILURE
        }
    }
}
