// SPDX-FileCopyrightText: 2025 Caspar Water Company
//
// SPDX-License-Identifier: Apache-2.0

//! Whole-object uploads to an S3 bucket.
//!
//! Every `put` replaces the object at its key; there is no versioning,
//! multipart, or conditional write.

mod error;
mod sink;

pub use error::SinkError;
pub use sink::{Config, S3Sink};

pub use s3::creds::Credentials;

/// Result type for upload operations
pub type Result<T> = std::result::Result<T, SinkError>;
