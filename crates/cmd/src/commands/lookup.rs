// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::LookupArgs;
use anyhow::{Context, Result};
use std::io::{self, Write};

/// Rate one title and print the folded record to stdout.
pub fn lookup_command(args: &LookupArgs) -> Result<()> {
    let mut client =
        omdb::Client::new(&args.omdb.to_config()).context("cannot create ratings client")?;

    let record = ratings::rate_title(&mut client, &args.title)?;

    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, &record)?;
    writeln!(stdout)?;
    Ok(())
}
