// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::config::RunArgs;
use anyhow::{Context, Result};
use diagnostics::*;
use ratings::{Pipeline, PipelineError};

/// Build the three clients and run the job once.
///
/// The clients that need no network come first so a bad setting fails
/// before the SFTP connection is opened.
pub fn run_command(args: &RunArgs) -> Result<()> {
    let omdb_config = args.omdb.to_config();
    let lookup = omdb::Client::new(&omdb_config).context("cannot create ratings client")?;

    let s3_config = args.s3.to_config();
    let sink = s3sink::S3Sink::new(&s3_config)
        .with_context(|| format!("cannot open bucket {}", s3_config.bucket))?;
    debug!("writing to bucket {bucket}", bucket: sink.bucket_name());

    let session = connect_source(&args.sftp.to_config(), &args.sftp.file_path)?;

    let mut pipeline = Pipeline::new(session, lookup, sink, args.sftp.file_path.as_str());
    let document = pipeline.run()?;

    let rendered = serde_json::to_string(&document)?;
    info!("rated {count} titles: {document}", count: document.len(), document: rendered);
    Ok(())
}

/// Open the SFTP session for `path`. An unreachable or unauthenticated
/// server means the input is unavailable.
fn connect_source(config: &sftp::Config, path: &str) -> Result<sftp::Session, PipelineError> {
    sftp::Session::connect(config).map_err(|source| PipelineError::SourceUnavailable {
        path: path.to_string(),
        source: Box::new(source),
    })
}
