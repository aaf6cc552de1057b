// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

use crate::Result;
use crate::error::SftpError;
use crate::hostkey::HostKeyPolicy;
use diagnostics::*;
use std::io::{self, Read};
use std::net::{TcpStream, ToSocketAddrs};
use std::path::Path;
use std::time::Duration;

/// Connection settings for the remote file server
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub user: String,
    /// PEM/OpenSSH private key text
    pub private_key: String,
    /// Empty when the key is not encrypted
    pub passphrase: String,
    /// Base64 SSH wire-format public key the server must present
    pub host_key: String,
    /// Deployment environment; `local` relaxes host key checks
    pub env: Option<String>,
    pub timeout: Duration,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// An authenticated SFTP session.
pub struct Session {
    address: String,
    // Option so the subsystem can be shut down before the connection
    sftp: Option<ssh2::Sftp>,
    session: ssh2::Session,
}

/// A remote file opened for reading. Closed on drop.
pub struct RemoteFile {
    file: ssh2::File,
}

impl Session {
    /// Connect, verify the host key, authenticate, and start SFTP.
    pub fn connect(config: &Config) -> Result<Self> {
        let address = config.address();
        let policy = HostKeyPolicy::for_target(&config.host_key, config.env.as_deref(), &address)?;

        debug!("connecting to {address}", address: address);
        let tcp = connect_tcp(&address, config.timeout).map_err(|source| SftpError::Connect {
            address: address.clone(),
            source,
        })?;

        let mut session = ssh2::Session::new().map_err(SftpError::Session)?;
        session.set_timeout(timeout_millis(config.timeout));
        session.set_tcp_stream(tcp);
        session.handshake().map_err(|source| SftpError::Handshake {
            address: address.clone(),
            source,
        })?;

        policy.verify(&address, session.host_key().map(|(key, _)| key))?;

        let passphrase = Some(config.passphrase.as_str()).filter(|p| !p.is_empty());
        session
            .userauth_pubkey_memory(&config.user, None, &config.private_key, passphrase)
            .map_err(|source| SftpError::Auth {
                user: config.user.clone(),
                source,
            })?;

        let sftp = session.sftp().map_err(SftpError::Subsystem)?;

        let user = &config.user;
        info!("sftp session established to {address} as {user}", address: address, user: user);

        Ok(Session {
            address,
            sftp: Some(sftp),
            session,
        })
    }

    /// Open `path` for reading.
    pub fn open(&self, path: &str) -> Result<RemoteFile> {
        let sftp = self.sftp.as_ref().ok_or_else(|| {
            SftpError::Subsystem(ssh2::Error::new(
                ssh2::ErrorCode::Session(-1),
                "sftp subsystem already closed",
            ))
        })?;
        let file = sftp
            .open(Path::new(path))
            .map_err(|source| SftpError::open(path, source))?;
        Ok(RemoteFile { file })
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        drop(self.sftp.take());
        if let Err(err) = self.session.disconnect(None, "closing", None) {
            debug!("sftp disconnect from {address} failed", address: self.address, err: err);
        }
    }
}

impl Read for RemoteFile {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.file.read(buf)
    }
}

fn connect_tcp(address: &str, timeout: Duration) -> io::Result<TcpStream> {
    let mut last_err = None;
    for addr in address.to_socket_addrs()? {
        match TcpStream::connect_timeout(&addr, timeout) {
            Ok(stream) => return Ok(stream),
            Err(err) => last_err = Some(err),
        }
    }
    Err(last_err.unwrap_or_else(|| {
        io::Error::new(io::ErrorKind::NotFound, "address resolved to nothing")
    }))
}

// libssh2 takes milliseconds; zero would mean "no timeout"
fn timeout_millis(timeout: Duration) -> u32 {
    u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX).max(1)
}
