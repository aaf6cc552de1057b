// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Read-only SFTP access with public-key authentication and a pinned
//! server host key.
//!
//! A [`Session`] owns the SSH connection; [`RemoteFile`] handles opened from
//! it are closed when dropped, and the connection is shut down when the
//! session is dropped.

mod error;
mod hostkey;
mod session;

pub use error::SftpError;
pub use hostkey::HostKeyPolicy;
pub use session::{Config, RemoteFile, Session};

/// Result type for SFTP operations
pub type Result<T> = std::result::Result<T, SftpError>;
