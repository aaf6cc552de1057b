// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

pub mod lookup;
pub mod run;

pub use lookup::lookup_command;
pub use run::run_command;

use ratings::PipelineError;

/// Name of the stage a command failed in. Failures before the pipeline
/// starts (client construction) report `setup`.
pub fn failure_stage(err: &anyhow::Error) -> &'static str {
    err.downcast_ref::<PipelineError>()
        .map_or("setup", PipelineError::stage)
}
