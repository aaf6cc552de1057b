// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use crate::error::SftpError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

// The docker-compose test environment reaches the server under this name
const LOCAL_ENV: &str = "local";
const LOCAL_ADDRESS: &str = "sftp:22";

/// How the server's host key is checked after the SSH handshake.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostKeyPolicy {
    /// Accept any key. Only chosen for the local test environment.
    AcceptAny,
    /// Require the server key to equal these SSH wire-format bytes.
    Pinned(Vec<u8>),
}

impl HostKeyPolicy {
    /// Build the policy for `address` (`host:port`) from the configured
    /// base64 host key and optional environment name.
    pub fn for_target(host_key: &str, env: Option<&str>, address: &str) -> Result<Self> {
        if env == Some(LOCAL_ENV) && address == LOCAL_ADDRESS {
            return Ok(HostKeyPolicy::AcceptAny);
        }
        let key = STANDARD
            .decode(host_key.trim())
            .map_err(SftpError::HostKeyEncoding)?;
        Ok(HostKeyPolicy::Pinned(key))
    }

    /// Check the key the server presented during the handshake.
    pub fn verify(&self, address: &str, presented: Option<&[u8]>) -> Result<()> {
        let HostKeyPolicy::Pinned(expected) = self else {
            return Ok(());
        };
        match presented {
            None => Err(SftpError::HostKeyMissing {
                address: address.to_string(),
            }),
            Some(key) if key == expected.as_slice() => Ok(()),
            Some(_) => Err(SftpError::HostKeyMismatch {
                address: address.to_string(),
            }),
        }
    }
}
