// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

// libssh2 SFTP status codes for a missing file or directory
const FX_NO_SUCH_FILE: i32 = 2;
const FX_NO_SUCH_PATH: i32 = 10;

#[derive(Error, Debug)]
pub enum SftpError {
    #[error("failed to create SSH session")]
    Session(#[source] ssh2::Error),

    #[error("cannot connect to {address}")]
    Connect {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("SSH handshake with {address} failed")]
    Handshake {
        address: String,
        #[source]
        source: ssh2::Error,
    },

    #[error("configured host key is not valid base64")]
    HostKeyEncoding(#[source] base64::DecodeError),

    #[error("{address} did not present a host key")]
    HostKeyMissing { address: String },

    #[error("host key mismatch for {address}")]
    HostKeyMismatch { address: String },

    #[error("public key authentication failed for user {user}")]
    Auth {
        user: String,
        #[source]
        source: ssh2::Error,
    },

    #[error("failed to start SFTP subsystem")]
    Subsystem(#[source] ssh2::Error),

    #[error("remote file {path} not found")]
    NotFound {
        path: String,
        #[source]
        source: ssh2::Error,
    },

    #[error("cannot open remote file {path}")]
    Open {
        path: String,
        #[source]
        source: ssh2::Error,
    },
}

impl SftpError {
    /// True when the remote path does not exist, as opposed to a
    /// connection, authentication, or permission failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, SftpError::NotFound { .. })
    }

    pub(crate) fn open(path: &str, source: ssh2::Error) -> Self {
        let path = path.to_string();
        if is_missing(source.code()) {
            SftpError::NotFound { path, source }
        } else {
            SftpError::Open { path, source }
        }
    }
}

fn is_missing(code: ssh2::ErrorCode) -> bool {
    matches!(
        code,
        ssh2::ErrorCode::SFTP(FX_NO_SUCH_FILE) | ssh2::ErrorCode::SFTP(FX_NO_SUCH_PATH)
    )
}
