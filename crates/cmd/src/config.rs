// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Command line and environment configuration.
//!
//! Every setting can be given as a flag or through its environment
//! variable. Missing or malformed settings stop the program before any
//! connection is attempted.

use clap::{Args, Parser, Subcommand};
use std::time::Duration;

/// Look up OMDb ratings for a remote list of movie titles and publish
/// them to object storage.
#[derive(Parser, Debug)]
#[command(name = "omdb-ratings", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Rate every title in the remote list and upload the result (default)
    Run(RunArgs),
    /// Rate a single title and print its record
    Lookup(LookupArgs),
}

/// Settings for a full run
#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    #[command(flatten)]
    pub sftp: SftpArgs,
    #[command(flatten)]
    pub omdb: OmdbArgs,
    #[command(flatten)]
    pub s3: S3Args,
}

#[derive(Args, Debug, Clone)]
pub struct LookupArgs {
    /// Title to look up, sent verbatim
    pub title: String,
    #[command(flatten)]
    pub omdb: OmdbArgs,
}

#[derive(Args, Debug, Clone)]
pub struct SftpArgs {
    #[arg(long = "sftp-host", env = "SFTP_HOST")]
    pub host: String,

    #[arg(long = "sftp-port", env = "SFTP_PORT")]
    pub port: u16,

    #[arg(long = "sftp-user", env = "SFTP_USER")]
    pub user: String,

    /// Private key text (PEM or OpenSSH)
    #[arg(long = "sftp-private-key", env = "SFTP_PRIVATE_KEY", hide_env_values = true)]
    pub private_key: String,

    #[arg(long = "sftp-passphrase", env = "SFTP_PASSPHRASE", hide_env_values = true)]
    pub passphrase: String,

    /// Base64 public key the server must present
    #[arg(long = "sftp-host-key", env = "SFTP_HOST_KEY")]
    pub host_key: String,

    /// Remote path of the title list
    #[arg(long = "sftp-file-path", env = "SFTP_FILE_PATH")]
    pub file_path: String,

    /// Connect and I/O timeout, e.g. "30s" or "2m"
    #[arg(
        id = "sftp_timeout",
        long = "sftp-timeout",
        env = "SFTP_TIMEOUT",
        value_parser = parse_timeout
    )]
    pub timeout: Duration,

    /// Deployment environment
    #[arg(long = "sftp-env", env = "SFTP_ENV")]
    pub env: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct OmdbArgs {
    #[arg(long = "omdb-base-url", env = "OMDB_BASE_URL")]
    pub base_url: String,

    #[arg(long = "omdb-api-key", env = "OMDB_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// Per-request timeout, e.g. "10s"
    #[arg(
        id = "omdb_timeout",
        long = "omdb-timeout",
        env = "OMDB_TIMEOUT",
        value_parser = parse_timeout
    )]
    pub timeout: Duration,
}

#[derive(Args, Debug, Clone)]
pub struct S3Args {
    #[arg(long = "s3-region", env = "S3_REGION")]
    pub region: String,

    #[arg(long = "s3-bucket", env = "S3_BUCKET")]
    pub bucket: String,

    /// Custom object store endpoint; uses path-style addressing
    #[arg(long = "s3-endpoint", env = "S3_ENDPOINT")]
    pub endpoint: Option<String>,
}

/// Used when no subcommand is given: a run configured entirely from the
/// environment.
#[derive(Parser, Debug)]
#[command(name = "omdb-ratings")]
struct DefaultRun {
    #[command(flatten)]
    run: RunArgs,
}

impl Cli {
    /// The command to execute, falling back to `run` configured from the
    /// environment.
    pub fn into_command(self) -> Result<Commands, clap::Error> {
        match self.command {
            Some(command) => Ok(command),
            None => {
                let default = DefaultRun::try_parse_from(["omdb-ratings"])?;
                Ok(Commands::Run(default.run))
            }
        }
    }
}

/// Accepts bare seconds ("30") or a duration expression ("1m 30s").
pub fn parse_timeout(value: &str) -> Result<Duration, String> {
    let value = value.trim();
    let timeout = match value.parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(_) => parse_duration::parse(value).map_err(|e| e.to_string())?,
    };
    if timeout.is_zero() {
        return Err("timeout must be greater than zero".to_string());
    }
    Ok(timeout)
}

impl SftpArgs {
    pub fn to_config(&self) -> sftp::Config {
        sftp::Config {
            host: self.host.clone(),
            port: self.port,
            user: self.user.clone(),
            private_key: self.private_key.clone(),
            passphrase: self.passphrase.clone(),
            host_key: self.host_key.clone(),
            env: self.env.clone(),
            timeout: self.timeout,
        }
    }
}

impl OmdbArgs {
    pub fn to_config(&self) -> omdb::Config {
        omdb::Config {
            base_url: self.base_url.clone(),
            api_key: self.api_key.clone(),
            timeout: self.timeout,
        }
    }
}

impl S3Args {
    pub fn to_config(&self) -> s3sink::Config {
        s3sink::Config {
            region: self.region.clone(),
            bucket: self.bucket.clone(),
            endpoint: self.endpoint.clone(),
        }
    }
}
